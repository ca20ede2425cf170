// In-Memory QueueRepository Implementation

use async_trait::async_trait;
use deskqueue_core::domain::{Client, Queue};
use deskqueue_core::error::Result;
use deskqueue_core::port::QueueRepository;
use tokio::sync::Mutex;
use tracing::trace;

/// Process-lifetime queue. Starts empty, never persisted.
///
/// Every call takes the same lock, so operations are applied one at a time
/// and the reindex done by [`Queue`] is never observed half-way.
#[derive(Debug, Default)]
pub struct InMemoryQueueRepository {
    queue: Mutex<Queue>,
}

impl InMemoryQueueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueueRepository for InMemoryQueueRepository {
    async fn list(&self) -> Result<Vec<Client>> {
        let queue = self.queue.lock().await;
        Ok(queue.clients().to_vec())
    }

    async fn get_at(&self, position: i64) -> Result<Client> {
        let queue = self.queue.lock().await;
        let client = queue.get(position)?;
        Ok(client.clone())
    }

    async fn append(&self, client: Client) -> Result<Client> {
        let mut queue = self.queue.lock().await;
        let stored = queue.push(client).clone();
        trace!(len = queue.len(), "Queue grew");
        Ok(stored)
    }

    async fn advance(&self) -> Result<Client> {
        let mut queue = self.queue.lock().await;
        let served = queue.advance()?;
        trace!(len = queue.len(), "Queue advanced");
        Ok(served)
    }

    async fn remove_at(&self, position: i64) -> Result<Client> {
        let mut queue = self.queue.lock().await;
        let removed = queue.remove(position)?;
        trace!(len = queue.len(), "Queue shrank");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use deskqueue_core::domain::ServiceType;
    use deskqueue_core::error::AppError;
    use std::sync::Arc;

    fn client(name: &str) -> Client {
        Client::new(name, ServiceType::Normal, Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let repo = InMemoryQueueRepository::new();

        assert!(repo.list().await.unwrap().is_empty());
        assert!(matches!(repo.get_at(0).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.advance().await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_append_returns_stored_position() {
        let repo = InMemoryQueueRepository::new();

        assert_eq!(repo.append(client("Ana")).await.unwrap().position(), 0);
        assert_eq!(repo.append(client("Bia")).await.unwrap().position(), 1);
        assert_eq!(repo.get_at(1).await.unwrap().name(), "Bia");
    }

    #[tokio::test]
    async fn test_snapshots_are_copies() {
        let repo = InMemoryQueueRepository::new();
        repo.append(client("Ana")).await.unwrap();
        repo.append(client("Bia")).await.unwrap();

        let before = repo.list().await.unwrap();
        repo.advance().await.unwrap();

        assert_eq!(before.len(), 2);
        assert_eq!(before[1].position(), 1);

        let after = repo.list().await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].name(), "Bia");
        assert_eq!(after[0].position(), 0);
    }

    #[tokio::test]
    async fn test_instances_are_isolated() {
        let a = InMemoryQueueRepository::new();
        let b = InMemoryQueueRepository::new();

        a.append(client("Ana")).await.unwrap();

        assert_eq!(a.list().await.unwrap().len(), 1);
        assert!(b.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_keep_positions_contiguous() {
        let repo = Arc::new(InMemoryQueueRepository::new());

        let mut handles = vec![];
        for i in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.append(client(&format!("c{}", i))).await.unwrap()
            }));
        }

        let mut positions = vec![];
        for handle in handles {
            positions.push(handle.await.unwrap().position());
        }
        positions.sort_unstable();
        assert_eq!(positions, (0..50).collect::<Vec<_>>());

        let clients = repo.list().await.unwrap();
        for (i, c) in clients.iter().enumerate() {
            assert_eq!(c.position(), i);
        }
    }
}
