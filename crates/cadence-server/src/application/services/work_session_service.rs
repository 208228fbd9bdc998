use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::dtos::{StartWorkSessionRequest, WorkSessionDto};
use cadence_domain::shared::{DomainError, TaskId, UserId, WorkSessionId};
use cadence_domain::task::TaskRepository;
use cadence_domain::work_session::{WorkSession, WorkSessionRepository};

pub struct WorkSessionService {
    session_repo: Arc<dyn WorkSessionRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl WorkSessionService {
    pub fn new(
        session_repo: Arc<dyn WorkSessionRepository>,
        task_repo: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            session_repo,
            task_repo,
        }
    }

    pub async fn start(
        &self,
        user_id: &UserId,
        request: StartWorkSessionRequest,
    ) -> Result<WorkSessionDto, DomainError> {
        let task_id = match request.task_id.as_deref() {
            Some(raw) => {
                let task_id = TaskId::from_string(raw);
                // Attaching to another user's (or a deleted) task is not-found.
                self.task_repo
                    .find_by_id(user_id, &task_id)
                    .await?
                    .ok_or_else(|| DomainError::TaskNotFound(task_id.to_string()))?;
                Some(task_id)
            }
            None => None,
        };

        let session = WorkSession::start(user_id.clone(), task_id, request.note);
        self.session_repo.save(&session).await?;

        tracing::info!(
            target: "cadence::work_session",
            user_id = %user_id,
            session_id = %session.id(),
            "Work session started"
        );
        Ok(WorkSessionDto::from(&session))
    }

    pub async fn stop(
        &self,
        user_id: &UserId,
        id: &WorkSessionId,
        now: DateTime<Utc>,
    ) -> Result<WorkSessionDto, DomainError> {
        let mut session = self
            .session_repo
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| DomainError::WorkSessionNotFound(id.to_string()))?;

        session.stop(now)?;
        self.session_repo.save(&session).await?;

        tracing::info!(
            target: "cadence::work_session",
            user_id = %user_id,
            session_id = %id,
            duration_seconds = session.duration_seconds(),
            "Work session stopped"
        );
        Ok(WorkSessionDto::from(&session))
    }

    pub async fn list(
        &self,
        user_id: &UserId,
        task_id: Option<&str>,
    ) -> Result<Vec<WorkSessionDto>, DomainError> {
        let task_id = task_id.map(TaskId::from_string);
        let sessions = self
            .session_repo
            .find_by_user_id(user_id, task_id.as_ref())
            .await?;
        Ok(sessions.iter().map(WorkSessionDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{
        MockTaskRepository, MockWorkSessionRepository,
    };
    use cadence_domain::task::{Task, TaskDraft};
    use chrono::Duration;

    fn service() -> (WorkSessionService, Arc<MockTaskRepository>) {
        let task_repo = Arc::new(MockTaskRepository::new());
        (
            WorkSessionService::new(Arc::new(MockWorkSessionRepository::new()), task_repo.clone()),
            task_repo,
        )
    }

    #[tokio::test]
    async fn start_and_stop_computes_duration() {
        let (service, _) = service();
        let user_id = UserId::new();

        let started = service
            .start(&user_id, StartWorkSessionRequest::default())
            .await
            .expect("start session");
        assert!(started.is_running);

        let session_id = WorkSessionId::from_string(&started.id);
        let now = Utc::now() + Duration::minutes(30);
        let stopped = service
            .stop(&user_id, &session_id, now)
            .await
            .expect("stop session");

        assert!(!stopped.is_running);
        assert!(stopped.duration_seconds.expect("duration") >= 29 * 60);
    }

    #[tokio::test]
    async fn stopping_twice_is_an_error() {
        let (service, _) = service();
        let user_id = UserId::new();

        let started = service
            .start(&user_id, StartWorkSessionRequest::default())
            .await
            .expect("start session");
        let session_id = WorkSessionId::from_string(&started.id);

        service
            .stop(&user_id, &session_id, Utc::now())
            .await
            .expect("first stop");
        let second = service.stop(&user_id, &session_id, Utc::now()).await;
        assert!(matches!(second, Err(DomainError::SessionAlreadyStopped(_))));
    }

    #[tokio::test]
    async fn start_rejects_unknown_task() {
        let (service, _) = service();
        let result = service
            .start(
                &UserId::new(),
                StartWorkSessionRequest {
                    task_id: Some("no-such-task".to_string()),
                    note: None,
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::TaskNotFound(_))));
    }

    #[tokio::test]
    async fn start_attaches_to_owned_task() {
        let (service, task_repo) = service();
        let user_id = UserId::new();

        let task = Task::new(
            user_id.clone(),
            TaskDraft {
                title: "Focus work".to_string(),
                description: None,
                priority: None,
                due_date: None,
                due_time: None,
                parent_task_id: None,
            },
        )
        .expect("create task");
        task_repo.save(&task).await.expect("save task");

        let started = service
            .start(
                &user_id,
                StartWorkSessionRequest {
                    task_id: Some(task.id().to_string()),
                    note: None,
                },
            )
            .await
            .expect("start session");
        assert_eq!(started.task_id.as_deref(), Some(task.id().as_str()));

        let for_task = service
            .list(&user_id, Some(task.id().as_str()))
            .await
            .expect("list sessions");
        assert_eq!(for_task.len(), 1);
    }
}
