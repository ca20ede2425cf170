// Queue Domain Model

use super::client::Client;
use super::error::{DomainError, Result};

/// Ordered waiting list. Insertion order is arrival order.
///
/// Invariant: after every mutating call returns, `clients[i].position() == i`.
/// Mutations and the reindex pass happen inside the same `&mut self` call,
/// so no caller can observe a stale position.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    clients: Vec<Client>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// All waiting clients, head first
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Client at `position`. Negative or past-the-end positions are rejected.
    pub fn get(&self, position: i64) -> Result<&Client> {
        let index = self.checked_index(position)?;
        Ok(&self.clients[index])
    }

    /// Append a client at the tail and return it as stored
    pub fn push(&mut self, client: Client) -> &Client {
        self.clients.push(client);
        self.reindex();

        let last = self.clients.len() - 1;
        &self.clients[last]
    }

    /// Serve the head: mark it served, remove it and return it
    pub fn advance(&mut self) -> Result<Client> {
        let head = self.clients.first_mut().ok_or(DomainError::QueueEmpty)?;
        head.mark_served();

        let served = self.clients.remove(0);
        self.reindex();
        Ok(served)
    }

    /// Remove the client at `position` and return it
    pub fn remove(&mut self, position: i64) -> Result<Client> {
        let index = self.checked_index(position)?;

        let removed = self.clients.remove(index);
        self.reindex();
        Ok(removed)
    }

    fn checked_index(&self, position: i64) -> Result<usize> {
        usize::try_from(position)
            .ok()
            .filter(|&index| index < self.clients.len())
            .ok_or(DomainError::PositionOutOfRange {
                position,
                len: self.clients.len(),
            })
    }

    fn reindex(&mut self) {
        for (index, client) in self.clients.iter_mut().enumerate() {
            client.set_position(index);
        }
    }
}
