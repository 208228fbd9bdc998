use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{error, info};

use crate::application::services::profile_service::local_naive;
use crate::application::services::NotificationService;
use cadence_domain::check_in::next_check_in;
use cadence_domain::notification::NotificationMessage;
use cadence_domain::profile::ProfileRepository;
use cadence_domain::shared::{DomainError, UserId};

/// Fallback sleep when the boundary computation yields a non-positive delay.
const RETRY_SLEEP_SECS: u64 = 60;

/// Background check-in prompts.
///
/// One tokio task per reminder-enabled profile: sleep until the profile's
/// next check-in boundary, deliver a prompt to the enabled subscriptions,
/// repeat. The profile is re-read each round so settings changes take effect
/// at the next boundary; `respawn` aborts the stale task immediately.
pub struct ReminderScheduler {
    profile_repo: Arc<dyn ProfileRepository>,
    notification_service: Arc<NotificationService>,
    tasks: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl ReminderScheduler {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        notification_service: Arc<NotificationService>,
    ) -> Self {
        Self {
            profile_repo,
            notification_service,
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Spawn a reminder task for every reminder-enabled profile.
    pub async fn start(&self) -> Result<(), DomainError> {
        let profiles = self.profile_repo.find_reminder_enabled().await?;
        info!(
            target: "cadence::reminder",
            count = profiles.len(),
            "Starting reminder scheduler"
        );

        for profile in profiles {
            self.spawn(profile.user_id().clone()).await;
        }
        Ok(())
    }

    /// Re-evaluate one user after a settings change. Aborts any stale task;
    /// spawns a fresh one only when reminders are still enabled.
    pub async fn respawn(&self, user_id: &UserId) {
        {
            let mut tasks = self.tasks.lock().await;
            if let Some(handle) = tasks.remove(user_id.as_str()) {
                handle.abort();
            }
        }

        match self.profile_repo.find_by_user_id(user_id).await {
            Ok(Some(profile)) if profile.reminders_enabled() => {
                self.spawn(user_id.clone()).await;
            }
            Ok(_) => {
                info!(
                    target: "cadence::reminder",
                    user_id = %user_id,
                    "Reminders disabled, task not respawned"
                );
            }
            Err(e) => {
                error!(
                    target: "cadence::reminder",
                    user_id = %user_id,
                    error = %e,
                    "Failed to reload profile for respawn"
                );
            }
        }
    }

    pub async fn shutdown(&self) {
        let mut tasks = self.tasks.lock().await;
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }

    async fn spawn(&self, user_id: UserId) {
        let profile_repo = self.profile_repo.clone();
        let notification_service = self.notification_service.clone();
        let loop_user = user_id.clone();

        let handle = tokio::spawn(async move {
            loop {
                // Fresh profile each round; exit if it vanished or opted out.
                let profile = match profile_repo.find_by_user_id(&loop_user).await {
                    Ok(Some(profile)) if profile.reminders_enabled() => profile,
                    Ok(_) => {
                        info!(
                            target: "cadence::reminder",
                            user_id = %loop_user,
                            "Reminders no longer enabled, stopping task"
                        );
                        break;
                    }
                    Err(e) => {
                        error!(
                            target: "cadence::reminder",
                            user_id = %loop_user,
                            error = %e,
                            "Profile load failed, retrying later"
                        );
                        tokio::time::sleep(Duration::from_secs(RETRY_SLEEP_SECS)).await;
                        continue;
                    }
                };

                let now = Utc::now();
                let now_local = local_naive(&profile, now);
                let schedule =
                    next_check_in(now_local, profile.work_hours(), profile.check_in_frequency());

                let wait = (schedule.next - now_local)
                    .to_std()
                    .unwrap_or(Duration::from_secs(RETRY_SLEEP_SECS));

                info!(
                    target: "cadence::reminder",
                    user_id = %loop_user,
                    next = %schedule.next,
                    wait_secs = wait.as_secs(),
                    "Next check-in prompt scheduled"
                );
                tokio::time::sleep(wait).await;

                let message = NotificationMessage::new(
                    "Time to check in",
                    "How are your mood and energy right now?",
                );
                if let Err(e) = notification_service.send_to_all(&loop_user, &message).await {
                    error!(
                        target: "cadence::reminder",
                        user_id = %loop_user,
                        error = %e,
                        "Check-in prompt delivery failed"
                    );
                }
            }
        });

        let mut tasks = self.tasks.lock().await;
        if let Some(stale) = tasks.insert(user_id.as_str().to_string(), handle) {
            stale.abort();
        }
    }
}
