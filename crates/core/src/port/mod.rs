// Port Layer - Interfaces for external dependencies

pub mod queue_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use queue_repository::QueueRepository;
pub use time_provider::TimeProvider;
