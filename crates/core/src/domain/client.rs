// Client Domain Model

use super::error::{DomainError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum client name length, in characters
pub const MAX_NAME_LEN: usize = 20;

/// Attendance type requested at registration.
///
/// Stored and reported, but never used to reorder the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "P")]
    Priority,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Normal => "N",
            ServiceType::Priority => "P",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(ServiceType::Normal),
            "P" => Ok(ServiceType::Priority),
            other => Err(DomainError::InvalidServiceType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a client name against the length limit (counted in chars, not bytes)
pub fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// A person waiting for attendance.
///
/// `position` is owned by [`Queue`](super::Queue): it is stamped on every
/// mutation and cannot be set from outside the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    name: String,
    service_type: ServiceType,
    served: bool,
    arrival_time: DateTime<Utc>,
    position: usize,
}

impl Client {
    /// Create a client that has not been served yet
    pub fn new(
        name: impl Into<String>,
        service_type: ServiceType,
        arrival_time: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            service_type,
            served: false,
            arrival_time,
            position: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn is_served(&self) -> bool {
        self.served
    }

    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Flip `served` to true. Returns false if it was already set.
    pub(crate) fn mark_served(&mut self) -> bool {
        if self.served {
            return false;
        }
        self.served = true;
        true
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_service_type_parse() {
        assert_eq!("N".parse::<ServiceType>().unwrap(), ServiceType::Normal);
        assert_eq!("P".parse::<ServiceType>().unwrap(), ServiceType::Priority);

        for bad in ["X", "n", "p", "", "NP", " N"] {
            let err = bad.parse::<ServiceType>().unwrap_err();
            assert_eq!(err, DomainError::InvalidServiceType(bad.to_string()));
        }
    }

    #[test]
    fn test_name_limit_counts_chars() {
        assert!(validate_name("").is_ok());
        assert!(validate_name(&"a".repeat(20)).is_ok());
        // 20 chars, 40 bytes
        assert!(validate_name(&"ç".repeat(20)).is_ok());

        let err = validate_name(&"a".repeat(21)).unwrap_err();
        assert_eq!(err, DomainError::NameTooLong { len: 21, max: 20 });
        assert!(err.to_string().contains("name too long"));
    }

    #[test]
    fn test_new_client_defaults() {
        let client = Client::new("Ana", ServiceType::Normal, at()).unwrap();

        assert_eq!(client.name(), "Ana");
        assert_eq!(client.service_type(), ServiceType::Normal);
        assert!(!client.is_served());
        assert_eq!(client.arrival_time(), at());
        assert_eq!(client.position(), 0);
    }

    #[test]
    fn test_mark_served_once() {
        let mut client = Client::new("Ana", ServiceType::Priority, at()).unwrap();

        assert!(client.mark_served());
        assert!(client.is_served());
        assert!(!client.mark_served());
        assert!(client.is_served());
    }

    #[test]
    fn test_client_serialization() {
        let client = Client::new("Bia", ServiceType::Priority, at()).unwrap();
        let json = serde_json::to_value(&client).unwrap();

        assert_eq!(json["name"], "Bia");
        assert_eq!(json["service_type"], "P");
        assert_eq!(json["served"], false);
        assert_eq!(json["arrival_time"], "2024-03-01T09:00:00Z");
        assert_eq!(json["position"], 0);
    }
}
