// Attendance Service - Core use cases for the service desk queue

pub mod register;


pub use register::RegisterRequest;

use crate::domain::{Client, ServiceType};
use crate::error::Result;
use crate::port::{QueueRepository, TimeProvider};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Waiting-list counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub waiting: usize,
    pub normal_waiting: usize,
    pub priority_waiting: usize,
}

/// Attendance Service
pub struct AttendanceService {
    queue_repo: Arc<dyn QueueRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl AttendanceService {
    pub fn new(queue_repo: Arc<dyn QueueRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queue_repo,
            time_provider,
        }
    }

    /// Full waiting list, head first (empty is not an error)
    pub async fn list(&self) -> Result<Vec<Client>> {
        let clients = self.queue_repo.list().await?;
        debug!(count = clients.len(), "Listed queue");
        Ok(clients)
    }

    /// Client at `position`
    pub async fn get(&self, position: i64) -> Result<Client> {
        debug!(position, "Fetching client");
        self.queue_repo.get_at(position).await
    }

    /// Register a new client at the tail of the queue
    pub async fn register(&self, req: RegisterRequest) -> Result<Client> {
        register::execute(self.queue_repo.as_ref(), self.time_provider.as_ref(), req).await
    }

    /// Serve and remove the head of the queue
    pub async fn advance(&self) -> Result<Client> {
        let served = self.queue_repo.advance().await?;

        info!(
            name = %served.name(),
            service_type = %served.service_type(),
            waited_ms = (self.time_provider.now() - served.arrival_time()).num_milliseconds(),
            "Client served"
        );

        Ok(served)
    }

    /// Remove the client at `position` without serving it
    pub async fn remove(&self, position: i64) -> Result<Client> {
        let removed = self.queue_repo.remove_at(position).await?;

        info!(position, name = %removed.name(), "Client removed");

        Ok(removed)
    }

    pub async fn stats(&self) -> Result<QueueStats> {
        let clients = self.queue_repo.list().await?;

        let priority_waiting = clients
            .iter()
            .filter(|c| c.service_type() == ServiceType::Priority)
            .count();

        Ok(QueueStats {
            waiting: clients.len(),
            normal_waiting: clients.len() - priority_waiting,
            priority_waiting,
        })
    }
}
