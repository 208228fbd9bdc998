use std::sync::Arc;

use crate::application::dtos::{
    ChangeTaskStatusRequest, CreateTaskRequest, TaskDto, TaskHistoryEntryDto, UpdateTaskRequest,
};
use crate::application::parse;
use cadence_domain::shared::{DomainError, TaskId, UserId};
use cadence_domain::task::{Task, TaskDraft, TaskPriority, TaskRepository, TaskStatus, TaskUpdate};
use cadence_domain::task_history::{TaskAction, TaskHistoryEntry, TaskHistoryRepository};

pub struct TaskService {
    task_repo: Arc<dyn TaskRepository>,
    history_repo: Arc<dyn TaskHistoryRepository>,
}

impl TaskService {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        history_repo: Arc<dyn TaskHistoryRepository>,
    ) -> Self {
        Self {
            task_repo,
            history_repo,
        }
    }

    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateTaskRequest,
    ) -> Result<TaskDto, DomainError> {
        let parent_task_id = match request.parent_task_id.as_deref() {
            Some(parent_id) => {
                let parent_id = TaskId::from_string(parent_id);
                let parent = self
                    .task_repo
                    .find_by_id(user_id, &parent_id)
                    .await?
                    .ok_or_else(|| DomainError::TaskNotFound(parent_id.to_string()))?;
                if parent.is_subtask() {
                    return Err(DomainError::SubtaskNesting(parent_id.to_string()));
                }
                Some(parent_id)
            }
            None => None,
        };

        let draft = TaskDraft {
            title: request.title,
            description: request.description,
            priority: request
                .priority
                .as_deref()
                .map(TaskPriority::parse)
                .transpose()?,
            due_date: request
                .due_date
                .as_deref()
                .map(parse::parse_date)
                .transpose()?,
            due_time: request
                .due_time
                .as_deref()
                .map(parse::parse_time)
                .transpose()?,
            parent_task_id,
        };

        let task = Task::new(user_id.clone(), draft)?;
        self.task_repo.save(&task).await?;
        self.record(user_id, task.id(), TaskAction::Created, None).await;

        Ok(TaskDto::from(&task))
    }

    pub async fn list(
        &self,
        user_id: &UserId,
        status: Option<&str>,
    ) -> Result<Vec<TaskDto>, DomainError> {
        let status = status.map(TaskStatus::parse).transpose()?;
        let tasks = self.task_repo.find_by_user_id(user_id, status).await?;
        Ok(tasks.iter().map(TaskDto::from).collect())
    }

    pub async fn get(&self, user_id: &UserId, id: &TaskId) -> Result<TaskDto, DomainError> {
        let task = self.find_owned(user_id, id).await?;
        Ok(TaskDto::from(&task))
    }

    pub async fn subtasks(
        &self,
        user_id: &UserId,
        id: &TaskId,
    ) -> Result<Vec<TaskDto>, DomainError> {
        let subtasks = self.task_repo.find_subtasks(user_id, id).await?;
        Ok(subtasks.iter().map(TaskDto::from).collect())
    }

    pub async fn update(
        &self,
        user_id: &UserId,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> Result<TaskDto, DomainError> {
        let mut task = self.find_owned(user_id, id).await?;

        let update = TaskUpdate {
            title: request.title,
            description: request.description,
            priority: request
                .priority
                .as_deref()
                .map(TaskPriority::parse)
                .transpose()?,
            due_date: request
                .due_date
                .as_deref()
                .map(parse::parse_date)
                .transpose()?,
            due_time: request
                .due_time
                .as_deref()
                .map(parse::parse_time)
                .transpose()?,
        };

        task.apply_update(update)?;
        self.task_repo.save(&task).await?;
        self.record(user_id, id, TaskAction::Updated, None).await;

        Ok(TaskDto::from(&task))
    }

    pub async fn change_status(
        &self,
        user_id: &UserId,
        id: &TaskId,
        request: ChangeTaskStatusRequest,
    ) -> Result<TaskDto, DomainError> {
        let status = TaskStatus::parse(&request.status)?;
        let mut task = self.find_owned(user_id, id).await?;

        task.change_status(status);
        self.task_repo.save(&task).await?;
        self.record(
            user_id,
            id,
            TaskAction::StatusChanged,
            Some(status.to_string()),
        )
        .await;

        Ok(TaskDto::from(&task))
    }

    /// Delete a task (and its subtasks). The history trail stays.
    pub async fn delete(&self, user_id: &UserId, id: &TaskId) -> Result<u64, DomainError> {
        // Existence check so a bad id surfaces as not-found, not a no-op.
        self.find_owned(user_id, id).await?;

        let removed = self.task_repo.delete(user_id, id).await?;
        self.record(user_id, id, TaskAction::Deleted, None).await;

        tracing::info!(
            target: "cadence::task",
            user_id = %user_id,
            task_id = %id,
            removed,
            "Task deleted"
        );
        Ok(removed)
    }

    pub async fn history(
        &self,
        user_id: &UserId,
        id: &TaskId,
    ) -> Result<Vec<TaskHistoryEntryDto>, DomainError> {
        let entries = self.history_repo.list_for_task(user_id, id).await?;
        Ok(entries.iter().map(TaskHistoryEntryDto::from).collect())
    }

    async fn find_owned(&self, user_id: &UserId, id: &TaskId) -> Result<Task, DomainError> {
        self.task_repo
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| DomainError::TaskNotFound(id.to_string()))
    }

    /// History is an audit trail; a failed append must not fail the mutation.
    async fn record(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
        action: TaskAction,
        detail: Option<String>,
    ) {
        let entry = TaskHistoryEntry::new(user_id.clone(), task_id.clone(), action, detail);
        if let Err(e) = self.history_repo.append(&entry).await {
            tracing::error!(
                target: "cadence::task",
                task_id = %task_id,
                error = %e,
                "Failed to append task history"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{
        MockTaskHistoryRepository, MockTaskRepository,
    };

    fn service() -> (TaskService, Arc<MockTaskRepository>, Arc<MockTaskHistoryRepository>) {
        let task_repo = Arc::new(MockTaskRepository::new());
        let history_repo = Arc::new(MockTaskHistoryRepository::new());
        (
            TaskService::new(task_repo.clone(), history_repo.clone()),
            task_repo,
            history_repo,
        )
    }

    fn create_request(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: None,
            priority: None,
            due_date: None,
            due_time: None,
            parent_task_id: None,
        }
    }

    #[tokio::test]
    async fn create_records_history() {
        let (service, _, history_repo) = service();
        let user_id = UserId::new();

        let dto = service
            .create(&user_id, create_request("Write report"))
            .await
            .expect("create task");

        let actions = history_repo
            .actions_for(&TaskId::from_string(&dto.id))
            .await;
        assert_eq!(actions, vec!["created"]);
    }

    #[tokio::test]
    async fn create_subtask_requires_existing_top_level_parent() {
        let (service, _, _) = service();
        let user_id = UserId::new();

        let parent = service
            .create(&user_id, create_request("Parent"))
            .await
            .expect("create parent");

        let child = service
            .create(
                &user_id,
                CreateTaskRequest {
                    parent_task_id: Some(parent.id.clone()),
                    ..create_request("Child")
                },
            )
            .await
            .expect("create child");

        // A subtask cannot become a parent itself.
        let grandchild = service
            .create(
                &user_id,
                CreateTaskRequest {
                    parent_task_id: Some(child.id.clone()),
                    ..create_request("Grandchild")
                },
            )
            .await;
        assert!(matches!(grandchild, Err(DomainError::SubtaskNesting(_))));

        // A missing parent is not-found.
        let orphan = service
            .create(
                &user_id,
                CreateTaskRequest {
                    parent_task_id: Some("no-such-task".to_string()),
                    ..create_request("Orphan")
                },
            )
            .await;
        assert!(matches!(orphan, Err(DomainError::TaskNotFound(_))));
    }

    #[tokio::test]
    async fn status_change_is_audited_with_detail() {
        let (service, _, history_repo) = service();
        let user_id = UserId::new();

        let dto = service
            .create(&user_id, create_request("Write report"))
            .await
            .expect("create task");
        let task_id = TaskId::from_string(&dto.id);

        let updated = service
            .change_status(
                &user_id,
                &task_id,
                ChangeTaskStatusRequest {
                    status: "done".to_string(),
                },
            )
            .await
            .expect("change status");

        assert_eq!(updated.status, "done");
        assert!(updated.completed_at.is_some());
        assert_eq!(
            history_repo.actions_for(&task_id).await,
            vec!["created", "status_changed"]
        );
    }

    #[tokio::test]
    async fn delete_removes_subtasks_and_keeps_history() {
        let (service, task_repo, history_repo) = service();
        let user_id = UserId::new();

        let parent = service
            .create(&user_id, create_request("Parent"))
            .await
            .expect("create parent");
        service
            .create(
                &user_id,
                CreateTaskRequest {
                    parent_task_id: Some(parent.id.clone()),
                    ..create_request("Child")
                },
            )
            .await
            .expect("create child");

        let parent_id = TaskId::from_string(&parent.id);
        let removed = service.delete(&user_id, &parent_id).await.expect("delete");
        assert_eq!(removed, 2);
        assert_eq!(task_repo.count().await, 0);

        let actions = history_repo.actions_for(&parent_id).await;
        assert_eq!(actions, vec!["created", "deleted"]);
    }

    #[tokio::test]
    async fn cross_user_access_is_not_found() {
        let (service, _, _) = service();
        let owner = UserId::new();
        let stranger = UserId::new();

        let dto = service
            .create(&owner, create_request("Private"))
            .await
            .expect("create task");
        let task_id = TaskId::from_string(&dto.id);

        let result = service.get(&stranger, &task_id).await;
        assert!(matches!(result, Err(DomainError::TaskNotFound(_))));

        let result = service.delete(&stranger, &task_id).await;
        assert!(matches!(result, Err(DomainError::TaskNotFound(_))));
    }

    #[tokio::test]
    async fn list_rejects_unknown_status_filter() {
        let (service, _, _) = service();
        let result = service.list(&UserId::new(), Some("finished")).await;
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}
