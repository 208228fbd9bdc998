mod check_in_repo;
mod profile_repo;
mod push_subscription_repo;
mod task_history_repo;
mod task_repo;
mod work_session_repo;

pub use check_in_repo::SqliteCheckInRepository;
pub use profile_repo::SqliteProfileRepository;
pub use push_subscription_repo::SqlitePushSubscriptionRepository;
pub use task_history_repo::SqliteTaskHistoryRepository;
pub use task_repo::SqliteTaskRepository;
pub use work_session_repo::SqliteWorkSessionRepository;
