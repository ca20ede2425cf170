// Queue Repository Port (Interface)

use crate::domain::Client;
use crate::error::Result;
use async_trait::async_trait;

/// Storage interface for the waiting list.
///
/// Implementations must serialize every call against the same queue: each
/// mutation and its reindex pass are one atomic step from the caller's view.
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Snapshot of all waiting clients, head first
    async fn list(&self) -> Result<Vec<Client>>;

    /// Client at `position`
    async fn get_at(&self, position: i64) -> Result<Client>;

    /// Append a client at the tail; returns it with its assigned position
    async fn append(&self, client: Client) -> Result<Client>;

    /// Mark the head served and remove it; returns the removed client
    async fn advance(&self) -> Result<Client>;

    /// Remove the client at `position`; returns the removed client
    async fn remove_at(&self, position: i64) -> Result<Client>;
}
