// DeskQueue Infrastructure - In-Memory Adapter
// Implements: QueueRepository

mod queue_repository;

pub use queue_repository::InMemoryQueueRepository;
