use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::dtos::{CheckInScheduleDto, ProfileDto, StreakDto, UpdateProfileRequest};
use crate::application::parse;
use cadence_domain::check_in::next_check_in;
use cadence_domain::profile::{Profile, ProfileRepository, ProfileSettings, WorkHours};
use cadence_domain::shared::{DomainError, UserId};

const DEFAULT_DISPLAY_NAME: &str = "New user";

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    /// Fetch the caller's profile, creating the default one on first touch.
    pub async fn ensure_profile(&self, user_id: &UserId) -> Result<Profile, DomainError> {
        if let Some(profile) = self.profile_repo.find_by_user_id(user_id).await? {
            return Ok(profile);
        }

        let profile = Profile::new(user_id.clone(), DEFAULT_DISPLAY_NAME.to_string());
        self.profile_repo.save(&profile).await?;
        tracing::info!(target: "cadence::profile", user_id = %user_id, "Created default profile");
        Ok(profile)
    }

    pub async fn get_profile(&self, user_id: &UserId) -> Result<ProfileDto, DomainError> {
        let profile = self.ensure_profile(user_id).await?;
        Ok(ProfileDto::from(&profile))
    }

    pub async fn update_settings(
        &self,
        user_id: &UserId,
        request: UpdateProfileRequest,
    ) -> Result<ProfileDto, DomainError> {
        let mut profile = self.ensure_profile(user_id).await?;

        let settings = ProfileSettings {
            display_name: request.display_name,
            work_hours: WorkHours::new(
                parse::parse_time(&request.work_start)?,
                parse::parse_time(&request.work_end)?,
            ),
            check_in_frequency: request.check_in_frequency,
            utc_offset_minutes: request.utc_offset_minutes,
            reminders_enabled: request.reminders_enabled,
        };

        profile.update_settings(settings)?;
        self.profile_repo.save(&profile).await?;

        Ok(ProfileDto::from(&profile))
    }

    pub async fn get_streak(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<StreakDto, DomainError> {
        let profile = self.ensure_profile(user_id).await?;
        let today = profile.local_date(now);

        Ok(StreakDto {
            current_streak: profile.current_streak(),
            longest_streak: profile.longest_streak(),
            last_check_in_date: profile.last_check_in_date().map(|d| d.to_string()),
            checked_in_today: profile.last_check_in_date() == Some(today),
        })
    }

    /// Next check-in boundary in the caller's local time.
    pub async fn get_schedule(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<CheckInScheduleDto, DomainError> {
        let profile = self.ensure_profile(user_id).await?;
        let now_local = local_naive(&profile, now);

        let schedule = next_check_in(now_local, profile.work_hours(), profile.check_in_frequency());

        Ok(CheckInScheduleDto {
            in_work_hours: schedule.in_work_hours,
            next: schedule.next.format("%Y-%m-%dT%H:%M:%S").to_string(),
            message: schedule.message,
        })
    }
}

/// Project a UTC instant into the profile's fixed-offset wall clock.
pub fn local_naive(profile: &Profile, now: DateTime<Utc>) -> chrono::NaiveDateTime {
    let offset = chrono::FixedOffset::east_opt(profile.utc_offset_minutes() * 60)
        .unwrap_or_else(|| chrono::FixedOffset::east_opt(0).expect("zero offset"));
    now.with_timezone(&offset).naive_local()
}
