mod aggregate;
mod repository;
mod value_objects;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{Task, TaskDraft, TaskUpdate};
pub use repository::TaskRepository;
pub use value_objects::{TaskPriority, TaskStatus};
