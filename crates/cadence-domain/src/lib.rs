// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod check_in;
pub mod notification;
pub mod profile;
pub mod recommendation;
pub mod shared;
pub mod task;
pub mod task_history;
pub mod work_session;

// Re-exports for convenience
pub use shared::{DomainError, TaskId, UserId};
