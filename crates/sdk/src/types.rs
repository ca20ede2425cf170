//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from api-rpc crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

/// A client as reported by the daemon
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Client {
    pub name: String,
    pub service_type: ServiceType,
    pub served: bool,
    pub arrival_time: DateTime<Utc>,
    pub position: usize,
}

/// Response from list operation
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub clients: Vec<Client>,
}

/// Response from advance operation
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceResponse {
    pub message: String,
    pub served: Client,
}

/// Response from remove operation
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveResponse {
    pub position: i64,
    pub message: String,
}

/// Response from stats operation
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub waiting: usize,
    pub normal_waiting: usize,
    pub priority_waiting: usize,
    pub uptime_seconds: u64,
}
