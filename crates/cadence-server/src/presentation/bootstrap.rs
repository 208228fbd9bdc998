use std::sync::Arc;
use tracing::info;

use crate::application::services::{
    CheckInService, NotificationService, ProfileService, RecommendationService, ReminderScheduler,
    TaskService, WorkSessionService,
};
use crate::config::AppConfig;
use crate::presentation::state::AppState;
use cadence_domain::check_in::CheckInRepository;
use cadence_domain::notification::{NotificationSender, PushSubscriptionRepository};
use cadence_domain::profile::ProfileRepository;
use cadence_domain::recommendation::RecommendationClient;
use cadence_domain::shared::DomainError;
use cadence_domain::task::TaskRepository;
use cadence_domain::task_history::TaskHistoryRepository;
use cadence_domain::work_session::WorkSessionRepository;
use cadence_infrastructure::ai::{AiClientConfig, OpenAiRecommendationClient};
use cadence_infrastructure::notification::WebhookNotificationSender;
use cadence_infrastructure::persistence::repositories::{
    SqliteCheckInRepository, SqliteProfileRepository, SqlitePushSubscriptionRepository,
    SqliteTaskHistoryRepository, SqliteTaskRepository, SqliteWorkSessionRepository,
};
use cadence_infrastructure::persistence::Database;

/// Wire the database, repositories and services into an `AppState`.
pub async fn build_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let db_path = config.database_path.to_str().ok_or_else(|| {
        DomainError::Validation(format!(
            "Database path is not valid UTF-8: {}",
            config.database_path.display()
        ))
    })?;

    info!(target: "cadence::bootstrap", path = db_path, "Connecting to database");
    let database = Database::new(db_path).await?;
    database.run_migrations().await?;

    let pool = Arc::new(database.pool().clone());

    let profile_repo =
        Arc::new(SqliteProfileRepository::new(pool.clone())) as Arc<dyn ProfileRepository>;
    let check_in_repo =
        Arc::new(SqliteCheckInRepository::new(pool.clone())) as Arc<dyn CheckInRepository>;
    let task_repo = Arc::new(SqliteTaskRepository::new(pool.clone())) as Arc<dyn TaskRepository>;
    let history_repo =
        Arc::new(SqliteTaskHistoryRepository::new(pool.clone())) as Arc<dyn TaskHistoryRepository>;
    let session_repo = Arc::new(SqliteWorkSessionRepository::new(pool.clone()))
        as Arc<dyn WorkSessionRepository>;
    let subscription_repo = Arc::new(SqlitePushSubscriptionRepository::new(pool.clone()))
        as Arc<dyn PushSubscriptionRepository>;

    let sender = Arc::new(WebhookNotificationSender::new()?) as Arc<dyn NotificationSender>;

    let ai_client = match &config.ai {
        Some(ai) => {
            info!(target: "cadence::bootstrap", model = %ai.model, "AI recommendations enabled");
            let client = OpenAiRecommendationClient::new(AiClientConfig {
                base_url: ai.base_url.clone(),
                api_key: ai.api_key.clone(),
                model: ai.model.clone(),
                timeout: ai.timeout,
            })?;
            Some(Arc::new(client) as Arc<dyn RecommendationClient>)
        }
        None => {
            info!(
                target: "cadence::bootstrap",
                "No AI API key configured, recommendations will degrade to empty sets"
            );
            None
        }
    };

    let profile_service = Arc::new(ProfileService::new(profile_repo.clone()));
    let check_in_service = Arc::new(CheckInService::new(
        check_in_repo.clone(),
        profile_repo.clone(),
    ));
    let task_service = Arc::new(TaskService::new(task_repo.clone(), history_repo.clone()));
    let work_session_service = Arc::new(WorkSessionService::new(
        session_repo.clone(),
        task_repo.clone(),
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        task_repo.clone(),
        check_in_repo.clone(),
        profile_repo.clone(),
        history_repo.clone(),
        ai_client,
    ));
    let notification_service = Arc::new(NotificationService::new(
        subscription_repo.clone(),
        sender,
    ));
    let reminder_scheduler = Arc::new(ReminderScheduler::new(
        profile_repo.clone(),
        notification_service.clone(),
    ));

    Ok(AppState {
        profile_service,
        check_in_service,
        task_service,
        work_session_service,
        recommendation_service,
        notification_service,
        reminder_scheduler,
        check_in_repo,
    })
}
