use std::sync::Arc;

use crate::application::services::{
    CheckInService, NotificationService, ProfileService, RecommendationService, ReminderScheduler,
    TaskService, WorkSessionService,
};
use cadence_domain::check_in::CheckInRepository;

/// Shared handle for every route handler.
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService>,
    pub check_in_service: Arc<CheckInService>,
    pub task_service: Arc<TaskService>,
    pub work_session_service: Arc<WorkSessionService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub notification_service: Arc<NotificationService>,
    pub reminder_scheduler: Arc<ReminderScheduler>,

    // Calendar and heatmap queries read check-ins directly.
    pub check_in_repo: Arc<dyn CheckInRepository>,
}
