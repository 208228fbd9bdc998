//! Hand-rolled in-memory repositories for service tests.

use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::{Mutex, RwLock};

use async_trait::async_trait;
use cadence_domain::check_in::{CheckIn, CheckInRepository};
use cadence_domain::notification::{
    NotificationMessage, NotificationSender, PushSubscription, PushSubscriptionRepository,
};
use cadence_domain::profile::{Profile, ProfileRepository};
use cadence_domain::recommendation::{
    RecommendationClient, RecommendationSet, RecommendationSnapshot,
};
use cadence_domain::shared::{DomainError, SubscriptionId, TaskId, UserId, WorkSessionId};
use cadence_domain::task::{Task, TaskRepository, TaskStatus};
use cadence_domain::task_history::{TaskHistoryEntry, TaskHistoryRepository};
use cadence_domain::work_session::{WorkSession, WorkSessionRepository};

pub struct MockProfileRepository {
    profiles: RwLock<HashMap<String, Profile>>,
    saves: Mutex<usize>,
    fail_next: Mutex<bool>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            saves: Mutex::new(0),
            fail_next: Mutex::new(false),
        }
    }

    pub async fn put(&self, profile: Profile) {
        self.profiles
            .write()
            .await
            .insert(profile.user_id().as_str().to_string(), profile);
    }

    pub async fn get(&self, user_id: &UserId) -> Option<Profile> {
        self.profiles.read().await.get(user_id.as_str()).cloned()
    }

    pub async fn save_count(&self) -> usize {
        *self.saves.lock().await
    }

    pub async fn fail_next_save(&self) {
        *self.fail_next.lock().await = true;
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut fail = self.fail_next.lock().await;
        if *fail {
            *fail = false;
            return Err(DomainError::Repository("injected save failure".to_string()));
        }
        drop(fail);

        *self.saves.lock().await += 1;
        self.profiles
            .write()
            .await
            .insert(profile.user_id().as_str().to_string(), profile.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id.as_str()).cloned())
    }

    async fn find_reminder_enabled(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .await
            .values()
            .filter(|p| p.reminders_enabled())
            .cloned()
            .collect())
    }
}

pub struct MockCheckInRepository {
    check_ins: RwLock<Vec<CheckIn>>,
}

impl MockCheckInRepository {
    pub fn new() -> Self {
        Self {
            check_ins: RwLock::new(Vec::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.check_ins.read().await.len()
    }
}

#[async_trait]
impl CheckInRepository for MockCheckInRepository {
    async fn insert(&self, check_in: &CheckIn) -> Result<(), DomainError> {
        self.check_ins.write().await.push(check_in.clone());
        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let mut owned: Vec<CheckIn> = self
            .check_ins
            .read()
            .await
            .iter()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| std::cmp::Reverse(c.created_at()));
        owned.truncate(limit as usize);
        Ok(owned)
    }

    async fn list_in_date_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let mut owned: Vec<CheckIn> = self
            .check_ins
            .read()
            .await
            .iter()
            .filter(|c| {
                let date = c.created_at().date_naive();
                c.user_id() == user_id && date >= start && date <= end
            })
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.created_at());
        Ok(owned)
    }
}

pub struct MockTaskRepository {
    tasks: RwLock<HashMap<String, Task>>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        self.tasks
            .write()
            .await
            .insert(task.id().as_str().to_string(), task.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &TaskId,
    ) -> Result<Option<Task>, DomainError> {
        Ok(self
            .tasks
            .read()
            .await
            .get(id.as_str())
            .filter(|t| t.user_id() == user_id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, DomainError> {
        let mut owned: Vec<Task> = self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.user_id() == user_id)
            .filter(|t| status.map_or(true, |s| t.status() == s))
            .cloned()
            .collect();
        owned.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(owned)
    }

    async fn find_subtasks(
        &self,
        user_id: &UserId,
        parent_task_id: &TaskId,
    ) -> Result<Vec<Task>, DomainError> {
        Ok(self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.user_id() == user_id && t.parent_task_id() == Some(parent_task_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: &TaskId) -> Result<u64, DomainError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|_, t| {
            !(t.user_id() == user_id && (t.id() == id || t.parent_task_id() == Some(id)))
        });
        Ok((before - tasks.len()) as u64)
    }
}

pub struct MockTaskHistoryRepository {
    entries: RwLock<Vec<TaskHistoryEntry>>,
}

impl MockTaskHistoryRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn actions_for(&self, task_id: &TaskId) -> Vec<String> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.task_id() == task_id)
            .map(|e| e.action().as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl TaskHistoryRepository for MockTaskHistoryRepository {
    async fn append(&self, entry: &TaskHistoryEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn list_for_task(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<Vec<TaskHistoryEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id() == user_id && e.task_id() == task_id)
            .cloned()
            .collect())
    }
}

pub struct MockWorkSessionRepository {
    sessions: RwLock<HashMap<String, WorkSession>>,
}

impl MockWorkSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl WorkSessionRepository for MockWorkSessionRepository {
    async fn save(&self, session: &WorkSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session.id().as_str().to_string(), session.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &WorkSessionId,
    ) -> Result<Option<WorkSession>, DomainError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(id.as_str())
            .filter(|s| s.user_id() == user_id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        task_id: Option<&TaskId>,
    ) -> Result<Vec<WorkSession>, DomainError> {
        let mut owned: Vec<WorkSession> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.user_id() == user_id)
            .filter(|s| task_id.map_or(true, |t| s.task_id() == Some(t)))
            .cloned()
            .collect();
        owned.sort_by_key(|s| std::cmp::Reverse(s.started_at()));
        Ok(owned)
    }
}

pub struct MockSubscriptionRepository {
    subscriptions: RwLock<HashMap<String, PushSubscription>>,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PushSubscriptionRepository for MockSubscriptionRepository {
    async fn save(&self, subscription: &PushSubscription) -> Result<(), DomainError> {
        self.subscriptions
            .write()
            .await
            .insert(subscription.id().as_str().to_string(), subscription.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &SubscriptionId,
    ) -> Result<Option<PushSubscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .get(id.as_str())
            .filter(|s| s.user_id() == user_id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PushSubscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_enabled_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PushSubscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .filter(|s| s.user_id() == user_id && s.is_enabled())
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: &SubscriptionId) -> Result<u64, DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        let before = subscriptions.len();
        subscriptions.retain(|_, s| !(s.user_id() == user_id && s.id() == id));
        Ok((before - subscriptions.len()) as u64)
    }
}

/// Scripted recommendation client: returns the queued result once, then
/// an empty set.
pub struct MockRecommendationClient {
    result: Mutex<Option<Result<RecommendationSet, DomainError>>>,
    pub snapshots: Mutex<Vec<RecommendationSnapshot>>,
}

impl MockRecommendationClient {
    pub fn returning(result: Result<RecommendationSet, DomainError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            snapshots: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RecommendationClient for MockRecommendationClient {
    async fn recommend(
        &self,
        snapshot: &RecommendationSnapshot,
    ) -> Result<RecommendationSet, DomainError> {
        self.snapshots.lock().await.push(snapshot.clone());
        self.result
            .lock()
            .await
            .take()
            .unwrap_or(Ok(RecommendationSet::empty()))
    }
}

pub struct MockNotificationSender {
    pub sent: Mutex<Vec<(String, NotificationMessage)>>,
    fail: Mutex<bool>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: Mutex::new(false),
        }
    }

    pub async fn fail_all(&self) {
        *self.fail.lock().await = true;
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(
        &self,
        endpoint: &str,
        message: &NotificationMessage,
    ) -> Result<(), DomainError> {
        if *self.fail.lock().await {
            return Err(DomainError::Infrastructure(
                "injected send failure".to_string(),
            ));
        }
        self.sent
            .lock()
            .await
            .push((endpoint.to_string(), message.clone()));
        Ok(())
    }
}
