//! RPC Method Handlers
//!
//! Implements the business logic for each JSON-RPC method.

use crate::error::to_rpc_error;
use crate::types::{
    AdvanceResponse, AppendRequest, ListResponse, PositionRequest, RemoveResponse, StatsResponse,
};
use deskqueue_core::application::{AttendanceService, RegisterRequest};
use deskqueue_core::domain::Client;
use deskqueue_core::error::AppError;
use deskqueue_core::port::{QueueRepository, TimeProvider};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use tracing::warn;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: AttendanceService,
    start_time: std::time::Instant,
}

impl RpcHandler {
    pub fn new(queue_repo: Arc<dyn QueueRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            service: AttendanceService::new(queue_repo, time_provider),
            start_time: std::time::Instant::now(),
        }
    }

    /// queue.list.v1
    pub async fn list(&self) -> Result<ListResponse, ErrorObjectOwned> {
        let clients = self
            .service
            .list()
            .await
            .map_err(|e| rejected("queue.list.v1", e))?;

        Ok(ListResponse { clients })
    }

    /// queue.get.v1
    pub async fn get(&self, params: PositionRequest) -> Result<Client, ErrorObjectOwned> {
        self.service
            .get(params.position)
            .await
            .map_err(|e| rejected("queue.get.v1", e))
    }

    /// queue.append.v1
    pub async fn append(&self, params: AppendRequest) -> Result<Client, ErrorObjectOwned> {
        let req = RegisterRequest {
            name: params.name,
            service_type: params.service_type,
        };

        self.service
            .register(req)
            .await
            .map_err(|e| rejected("queue.append.v1", e))
    }

    /// queue.advance.v1
    pub async fn advance(&self) -> Result<AdvanceResponse, ErrorObjectOwned> {
        let served = self
            .service
            .advance()
            .await
            .map_err(|e| rejected("queue.advance.v1", e))?;

        Ok(AdvanceResponse {
            message: "Queue advanced successfully".to_string(),
            served,
        })
    }

    /// queue.remove.v1
    pub async fn remove(&self, params: PositionRequest) -> Result<RemoveResponse, ErrorObjectOwned> {
        self.service
            .remove(params.position)
            .await
            .map_err(|e| rejected("queue.remove.v1", e))?;

        Ok(RemoveResponse {
            position: params.position,
            message: format!("Client at position {} removed successfully", params.position),
        })
    }

    /// admin.stats.v1
    pub async fn stats(&self) -> Result<StatsResponse, ErrorObjectOwned> {
        let stats = self
            .service
            .stats()
            .await
            .map_err(|e| rejected("admin.stats.v1", e))?;

        Ok(StatsResponse {
            waiting: stats.waiting,
            normal_waiting: stats.normal_waiting,
            priority_waiting: stats.priority_waiting,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        })
    }
}

fn rejected(method: &str, err: AppError) -> ErrorObjectOwned {
    warn!(method, error = %err, "Request rejected");
    to_rpc_error(err)
}
