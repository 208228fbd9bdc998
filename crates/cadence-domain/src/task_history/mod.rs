mod repository;
mod types;

pub use repository::TaskHistoryRepository;
pub use types::{TaskAction, TaskHistoryEntry};
