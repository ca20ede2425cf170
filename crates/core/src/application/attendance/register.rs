// Register Use Case

use crate::domain::client::validate_name;
use crate::domain::{Client, ServiceType};
use crate::error::Result;
use crate::port::{QueueRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Register request, as received from the outside world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub service_type: String,
}

/// Validate a register request before anything touches the queue.
///
/// The name is checked first, so a request failing both checks reports the
/// name.
pub fn validate_request(req: &RegisterRequest) -> Result<ServiceType> {
    validate_name(&req.name)?;
    let service_type = req.service_type.parse::<ServiceType>()?;
    Ok(service_type)
}

/// Execute register use case
///
/// # Arguments
///
/// * `queue_repo` - Queue storage
/// * `time_provider` - Clock for `arrival_time` (injected for determinism)
/// * `req` - Register request
pub async fn execute(
    queue_repo: &dyn QueueRepository,
    time_provider: &dyn TimeProvider,
    req: RegisterRequest,
) -> Result<Client> {
    let service_type = validate_request(&req)?;

    let client = Client::new(req.name, service_type, time_provider.now())?;
    let client = queue_repo.append(client).await?;

    info!(
        name = %client.name(),
        service_type = %client.service_type(),
        position = client.position(),
        "Client registered"
    );

    Ok(client)
}
