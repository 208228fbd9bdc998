mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::WorkSession;
pub use repository::WorkSessionRepository;
