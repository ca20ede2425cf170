//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use deskqueue_core::domain::Client;
use serde::{Deserialize, Serialize};

/// queue.list.v1 - List the waiting queue
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub clients: Vec<Client>,
}

/// queue.get.v1 / queue.remove.v1 - Address a client by position
#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub position: i64,
}

/// queue.append.v1 - Register a client
#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub name: String,
    pub service_type: String,
}

/// queue.advance.v1 - Serve the head of the queue
#[derive(Debug, Clone, Serialize)]
pub struct AdvanceResponse {
    pub message: String,
    pub served: Client,
}

/// queue.remove.v1
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub position: i64,
    pub message: String,
}

/// admin.stats.v1 - Queue statistics
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub waiting: usize,
    pub normal_waiting: usize,
    pub priority_waiting: usize,
    pub uptime_seconds: u64,
}
