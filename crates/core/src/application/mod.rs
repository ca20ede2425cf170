// Application Layer - Use Cases and Business Logic

pub mod attendance;

// Re-exports
pub use attendance::{AttendanceService, QueueStats, RegisterRequest};
