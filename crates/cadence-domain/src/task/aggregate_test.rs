use chrono::NaiveDate;

use super::*;
use crate::shared::UserId;
use crate::DomainError;

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

#[test]
fn test_new_task_defaults() {
    let task = Task::new(UserId::new(), draft("Write report")).unwrap();

    assert_eq!(task.title(), "Write report");
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.priority(), TaskPriority::Medium);
    assert!(task.due_date().is_none());
    assert!(!task.is_subtask());
}

#[test]
fn test_new_task_rejects_blank_title() {
    let result = Task::new(UserId::new(), draft("  "));
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[test]
fn test_change_status_tracks_completion() {
    let mut task = Task::new(UserId::new(), draft("Ship release")).unwrap();

    task.change_status(TaskStatus::Done);
    assert!(task.completed_at().is_some());

    task.change_status(TaskStatus::Todo);
    assert!(task.completed_at().is_none());
}

#[test]
fn test_reschedule_only_touches_due_fields() {
    let mut task = Task::new(UserId::new(), draft("Plan sprint")).unwrap();
    let title = task.title().to_string();

    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    task.reschedule(date, None);

    assert_eq!(task.due_date(), Some(date));
    assert_eq!(task.title(), title);
    assert_eq!(task.status(), TaskStatus::Todo);
}

#[test]
fn test_apply_update_keeps_unset_fields() {
    let mut task = Task::new(
        UserId::new(),
        TaskDraft {
            description: Some("quarterly numbers".to_string()),
            ..draft("Write report")
        },
    )
    .unwrap();

    task.apply_update(TaskUpdate {
        priority: Some(TaskPriority::High),
        ..TaskUpdate::default()
    })
    .unwrap();

    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.description(), Some("quarterly numbers"));
    assert_eq!(task.title(), "Write report");
}

#[test]
fn test_status_parse_round_trip() {
    for status in [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Archived,
    ] {
        assert_eq!(TaskStatus::parse(status.as_str()).unwrap(), status);
    }
    assert!(TaskStatus::parse("cancelled").is_err());
}
