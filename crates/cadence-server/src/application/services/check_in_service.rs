use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::dtos::{CheckInDto, StreakOutcomeDto, SubmitCheckInRequest};
use cadence_domain::check_in::{CheckIn, CheckInRepository, EnergyLevel, Mood};
use cadence_domain::profile::{ProfileRepository, StreakChange};
use cadence_domain::shared::{DomainError, UserId};

pub struct CheckInService {
    check_in_repo: Arc<dyn CheckInRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
}

impl CheckInService {
    pub fn new(
        check_in_repo: Arc<dyn CheckInRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            check_in_repo,
            profile_repo,
        }
    }

    /// Submit a check-in and apply the streak rule.
    ///
    /// The check-in row is inserted first and never rolled back; a failing
    /// profile write surfaces to the caller with the streak left at its
    /// pre-mutation value.
    pub async fn submit(
        &self,
        user_id: &UserId,
        request: SubmitCheckInRequest,
        now: DateTime<Utc>,
    ) -> Result<CheckInDto, DomainError> {
        let mood = request.mood.as_deref().map(Mood::parse).transpose()?;
        let energy_level = request.energy_level.map(EnergyLevel::new).transpose()?;

        let check_in = CheckIn::new(user_id.clone(), mood, energy_level, request.note)?;
        self.check_in_repo.insert(&check_in).await?;

        let mut profile = match self.profile_repo.find_by_user_id(user_id).await? {
            Some(profile) => profile,
            None => cadence_domain::profile::Profile::new(user_id.clone(), "New user".to_string()),
        };

        let change = profile.apply_check_in(now);
        if !matches!(change, StreakChange::Unchanged) {
            self.profile_repo.save(&profile).await?;
        }

        tracing::info!(
            target: "cadence::check_in",
            user_id = %user_id,
            current_streak = profile.current_streak(),
            "Check-in recorded"
        );

        let mut dto = CheckInDto::from(&check_in);
        dto.streak = Some(StreakOutcomeDto::from_change(
            change,
            profile.current_streak(),
            profile.longest_streak(),
        ));
        Ok(dto)
    }

    pub async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<CheckInDto>, DomainError> {
        if limit == 0 || limit > 500 {
            return Err(DomainError::Validation(
                "Limit must be between 1 and 500".to_string(),
            ));
        }

        let check_ins = self.check_in_repo.list_recent(user_id, limit).await?;
        Ok(check_ins.iter().map(CheckInDto::from).collect())
    }
}
