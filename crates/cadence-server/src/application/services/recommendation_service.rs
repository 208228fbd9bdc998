use std::sync::Arc;

use crate::application::dtos::{AcceptRecommendationRequest, RecommendationSetDto, TaskDto};
use crate::application::parse;
use cadence_domain::check_in::CheckInRepository;
use cadence_domain::profile::ProfileRepository;
use cadence_domain::recommendation::{
    CheckInSnapshot, RecommendationClient, RecommendationSet, RecommendationSnapshot, TaskSnapshot,
    WorkHoursSnapshot,
};
use cadence_domain::shared::{DomainError, TaskId, UserId};
use cadence_domain::task::TaskRepository;
use cadence_domain::task_history::{TaskAction, TaskHistoryEntry, TaskHistoryRepository};

/// How many recent check-ins ride along with a recommendation request.
const CHECK_IN_CONTEXT: u32 = 5;

pub struct RecommendationService {
    task_repo: Arc<dyn TaskRepository>,
    check_in_repo: Arc<dyn CheckInRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    history_repo: Arc<dyn TaskHistoryRepository>,
    /// Absent when no API key is configured.
    client: Option<Arc<dyn RecommendationClient>>,
}

impl RecommendationService {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        check_in_repo: Arc<dyn CheckInRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        history_repo: Arc<dyn TaskHistoryRepository>,
        client: Option<Arc<dyn RecommendationClient>>,
    ) -> Self {
        Self {
            task_repo,
            check_in_repo,
            profile_repo,
            history_repo,
            client,
        }
    }

    /// Ask the AI endpoint for scheduling suggestions.
    ///
    /// Requester failures never fail the request: the result degrades to an
    /// empty set carrying the structured reason. Task state is never touched.
    pub async fn recommend(&self, user_id: &UserId) -> Result<RecommendationSetDto, DomainError> {
        let Some(client) = &self.client else {
            let err = DomainError::AiAuthRequired("No AI API key configured".to_string());
            tracing::warn!(target: "cadence::recommendation", user_id = %user_id, "{}", err);
            return Ok(RecommendationSetDto::from_set(
                &RecommendationSet::empty(),
                Some(err.format_with_code()),
            ));
        };

        let snapshot = self.assemble_snapshot(user_id).await?;
        if snapshot.tasks.is_empty() {
            return Ok(RecommendationSetDto::from_set(
                &RecommendationSet::empty(),
                None,
            ));
        }

        match client.recommend(&snapshot).await {
            Ok(set) => Ok(RecommendationSetDto::from_set(&set, None)),
            Err(err) => {
                tracing::warn!(
                    target: "cadence::recommendation",
                    user_id = %user_id,
                    error = %err.format_with_code(),
                    "Recommendation request degraded to empty set"
                );
                Ok(RecommendationSetDto::from_set(
                    &RecommendationSet::empty(),
                    Some(err.format_with_code()),
                ))
            }
        }
    }

    /// Apply an accepted suggestion: a plain due-date update on the task,
    /// audited as `rescheduled`.
    pub async fn accept(
        &self,
        user_id: &UserId,
        request: AcceptRecommendationRequest,
    ) -> Result<TaskDto, DomainError> {
        let task_id = TaskId::from_string(&request.task_id);
        let due_date = parse::parse_date(&request.due_date)?;
        let due_time = request
            .due_time
            .as_deref()
            .map(parse::parse_time)
            .transpose()?;

        let mut task = self
            .task_repo
            .find_by_id(user_id, &task_id)
            .await?
            .ok_or_else(|| DomainError::TaskNotFound(task_id.to_string()))?;

        task.reschedule(due_date, due_time);
        self.task_repo.save(&task).await?;

        let entry = TaskHistoryEntry::new(
            user_id.clone(),
            task_id.clone(),
            TaskAction::Rescheduled,
            Some(format!("due {}", due_date)),
        );
        if let Err(e) = self.history_repo.append(&entry).await {
            tracing::error!(
                target: "cadence::recommendation",
                task_id = %task_id,
                error = %e,
                "Failed to append reschedule history"
            );
        }

        Ok(TaskDto::from(&task))
    }

    async fn assemble_snapshot(
        &self,
        user_id: &UserId,
    ) -> Result<RecommendationSnapshot, DomainError> {
        let profile = self
            .profile_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::ProfileNotFound(user_id.to_string()))?;

        let tasks = self
            .task_repo
            .find_by_user_id(user_id, None)
            .await?
            .into_iter()
            .filter(|t| t.status().is_active())
            .map(|t| TaskSnapshot {
                task_id: t.id().to_string(),
                title: t.title().to_string(),
                description: t.description().map(str::to_string),
                status: t.status().to_string(),
                priority: t.priority().to_string(),
                due_date: t.due_date(),
                due_time: t.due_time(),
            })
            .collect();

        let recent_check_ins = self
            .check_in_repo
            .list_recent(user_id, CHECK_IN_CONTEXT)
            .await?
            .into_iter()
            .map(|c| CheckInSnapshot {
                mood: c.mood().map(|m| m.to_string()),
                energy_level: c.energy_level().map(|e| e.value()),
                created_at: c.created_at(),
            })
            .collect();

        let work_hours = profile.work_hours();
        Ok(RecommendationSnapshot {
            user_id: user_id.to_string(),
            tasks,
            work_hours: WorkHoursSnapshot {
                start: work_hours.start,
                end: work_hours.end,
                utc_offset_minutes: profile.utc_offset_minutes(),
            },
            recent_check_ins,
        })
    }
}
