// Domain Layer - Pure business logic and entities

pub mod client;
pub mod error;
pub mod queue;

// Re-exports
pub use client::{Client, ServiceType, MAX_NAME_LEN};
pub use error::DomainError;
pub use queue::Queue;
