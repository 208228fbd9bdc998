mod check_in_service;
mod notification_service;
mod profile_service;
mod recommendation_service;
mod reminder_scheduler;
mod task_service;
mod work_session_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use check_in_service::CheckInService;
pub use notification_service::NotificationService;
pub use profile_service::ProfileService;
pub use recommendation_service::RecommendationService;
pub use reminder_scheduler::ReminderScheduler;
pub use task_service::TaskService;
pub use work_session_service::WorkSessionService;
