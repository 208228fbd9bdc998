use chrono::NaiveDate;
use std::sync::Arc;

use cadence_domain::shared::UserId;
use cadence_domain::task::{Task, TaskDraft, TaskPriority, TaskRepository, TaskStatus};
use cadence_infrastructure::persistence::repositories::SqliteTaskRepository;

mod test_helpers;

fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: None,
        priority: None,
        due_date: None,
        due_time: None,
        parent_task_id: None,
    }
}

#[tokio::test]
async fn task_repo_save_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTaskRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let task = Task::new(
        user_id.clone(),
        TaskDraft {
            title: "Write quarterly report".to_string(),
            description: Some("Focus on Q2 numbers".to_string()),
            priority: Some(TaskPriority::High),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 15),
            due_time: None,
            parent_task_id: None,
        },
    )
    .expect("Create task");

    repo.save(&task).await.expect("Save task");

    let found = repo
        .find_by_id(&user_id, task.id())
        .await
        .expect("Find task")
        .expect("Task should be found");

    assert_eq!(found.title(), "Write quarterly report");
    assert_eq!(found.priority(), TaskPriority::High);
    assert_eq!(found.due_date(), NaiveDate::from_ymd_opt(2025, 6, 15));
    assert_eq!(found.status(), TaskStatus::Todo);
}

#[tokio::test]
async fn task_repo_scopes_lookups_to_owner() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTaskRepository::new(Arc::new(pool.clone()));

    let owner = UserId::new();
    let stranger = UserId::new();
    let task = Task::new(owner.clone(), draft("Private task")).expect("Create task");
    repo.save(&task).await.expect("Save task");

    let found = repo
        .find_by_id(&stranger, task.id())
        .await
        .expect("Find task");
    assert!(found.is_none());

    let listed = repo
        .find_by_user_id(&stranger, None)
        .await
        .expect("List tasks");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn task_repo_filters_by_status() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTaskRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let open = Task::new(user_id.clone(), draft("Open task")).expect("Create task");
    let mut done = Task::new(user_id.clone(), draft("Done task")).expect("Create task");
    done.change_status(TaskStatus::Done);

    repo.save(&open).await.expect("Save open");
    repo.save(&done).await.expect("Save done");

    let done_only = repo
        .find_by_user_id(&user_id, Some(TaskStatus::Done))
        .await
        .expect("List done tasks");
    assert_eq!(done_only.len(), 1);
    assert_eq!(done_only[0].title(), "Done task");

    let all = repo
        .find_by_user_id(&user_id, None)
        .await
        .expect("List all tasks");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn task_repo_lists_subtasks_of_parent() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTaskRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let parent = Task::new(user_id.clone(), draft("Parent")).expect("Create parent");
    repo.save(&parent).await.expect("Save parent");

    for title in ["Child A", "Child B"] {
        let child = Task::new(
            user_id.clone(),
            TaskDraft {
                parent_task_id: Some(parent.id().clone()),
                ..draft(title)
            },
        )
        .expect("Create child");
        repo.save(&child).await.expect("Save child");
    }

    let subtasks = repo
        .find_subtasks(&user_id, parent.id())
        .await
        .expect("List subtasks");
    assert_eq!(subtasks.len(), 2);
    assert!(subtasks.iter().all(|t| t.parent_task_id() == Some(parent.id())));
}

#[tokio::test]
async fn task_repo_delete_removes_parent_and_subtasks() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTaskRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let parent = Task::new(user_id.clone(), draft("Parent")).expect("Create parent");
    repo.save(&parent).await.expect("Save parent");

    let child = Task::new(
        user_id.clone(),
        TaskDraft {
            parent_task_id: Some(parent.id().clone()),
            ..draft("Child")
        },
    )
    .expect("Create child");
    repo.save(&child).await.expect("Save child");

    let removed = repo.delete(&user_id, parent.id()).await.expect("Delete");
    assert_eq!(removed, 2);

    let remaining = repo
        .find_by_user_id(&user_id, None)
        .await
        .expect("List tasks");
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn task_repo_delete_ignores_other_users_tasks() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteTaskRepository::new(Arc::new(pool.clone()));

    let owner = UserId::new();
    let stranger = UserId::new();
    let task = Task::new(owner.clone(), draft("Private task")).expect("Create task");
    repo.save(&task).await.expect("Save task");

    let removed = repo.delete(&stranger, task.id()).await.expect("Delete");
    assert_eq!(removed, 0);

    let still_there = repo
        .find_by_id(&owner, task.id())
        .await
        .expect("Find task");
    assert!(still_there.is_some());
}
