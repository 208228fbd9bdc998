use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// Daily time-of-day window in which check-in prompts are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        // Half-open window; degenerate configs (end <= start) contain nothing.
        self.start < self.end && time >= self.start && time < self.end
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            end: NaiveTime::from_hms_opt(17, 0, 0).expect("valid time"),
        }
    }
}

/// Outcome of applying the streak update rule for one check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already checked in on this calendar date; profile untouched.
    Unchanged,
    /// Consecutive-day continuation.
    Continued { current: u32, longest: u32 },
    /// Gap of two or more days, or no prior check-in.
    Restarted { current: u32, longest: u32 },
}

/// Mutable settings portion of a profile, updated in one piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub display_name: String,
    pub work_hours: WorkHours,
    pub check_in_frequency: u32,
    pub utc_offset_minutes: i32,
    pub reminders_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    user_id: UserId,
    display_name: String,
    current_streak: u32,
    longest_streak: u32,
    last_check_in_date: Option<NaiveDate>,
    work_hours: WorkHours,
    check_in_frequency: u32,
    utc_offset_minutes: i32,
    reminders_enabled: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Profile {
    pub const DEFAULT_CHECK_IN_FREQUENCY: u32 = 4;

    /// Valid UTC offsets span -12:00 to +14:00.
    const MIN_OFFSET_MINUTES: i32 = -12 * 60;
    const MAX_OFFSET_MINUTES: i32 = 14 * 60;

    pub fn new(user_id: UserId, display_name: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            display_name,
            current_streak: 0,
            longest_streak: 0,
            last_check_in_date: None,
            work_hours: WorkHours::default(),
            check_in_frequency: Self::DEFAULT_CHECK_IN_FREQUENCY,
            utc_offset_minutes: 0,
            reminders_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        user_id: UserId,
        display_name: String,
        current_streak: u32,
        longest_streak: u32,
        last_check_in_date: Option<NaiveDate>,
        work_hours: WorkHours,
        check_in_frequency: u32,
        utc_offset_minutes: i32,
        reminders_enabled: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            display_name,
            current_streak,
            longest_streak,
            last_check_in_date,
            work_hours,
            check_in_frequency,
            utc_offset_minutes,
            reminders_enabled,
            created_at,
            updated_at,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn last_check_in_date(&self) -> Option<NaiveDate> {
        self.last_check_in_date
    }

    pub fn work_hours(&self) -> WorkHours {
        self.work_hours
    }

    pub fn check_in_frequency(&self) -> u32 {
        self.check_in_frequency
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    pub fn reminders_enabled(&self) -> bool {
        self.reminders_enabled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Normalize an instant to the user's calendar date.
    ///
    /// Comparing dates instead of instants is what keeps multiple same-day
    /// submissions and midnight-boundary submissions from double-counting.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset"));
        instant.with_timezone(&offset).date_naive()
    }

    /// Apply the streak update rule for a check-in submitted at `now`.
    ///
    /// A second submission on the same calendar date is a no-op; callers
    /// must not persist the profile when `StreakChange::Unchanged` is
    /// returned. A stored date in the future relative to `today` is treated
    /// as invalid data and starts a fresh streak.
    pub fn apply_check_in(&mut self, now: DateTime<Utc>) -> StreakChange {
        let today = self.local_date(now);

        if self.last_check_in_date == Some(today) {
            return StreakChange::Unchanged;
        }

        let yesterday = today - Duration::days(1);
        let continued = self.last_check_in_date == Some(yesterday);

        self.current_streak = if continued { self.current_streak + 1 } else { 1 };
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_check_in_date = Some(today);
        self.updated_at = now;

        if continued {
            StreakChange::Continued {
                current: self.current_streak,
                longest: self.longest_streak,
            }
        } else {
            StreakChange::Restarted {
                current: self.current_streak,
                longest: self.longest_streak,
            }
        }
    }

    pub fn update_settings(&mut self, settings: ProfileSettings) -> Result<(), DomainError> {
        if settings.display_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Display name cannot be empty".to_string(),
            ));
        }

        if !(Self::MIN_OFFSET_MINUTES..=Self::MAX_OFFSET_MINUTES)
            .contains(&settings.utc_offset_minutes)
        {
            return Err(DomainError::Validation(format!(
                "UTC offset out of range: {} minutes",
                settings.utc_offset_minutes
            )));
        }

        if settings.check_in_frequency > 48 {
            return Err(DomainError::Validation(
                "Check-in frequency cannot exceed 48 per day".to_string(),
            ));
        }

        self.display_name = settings.display_name.trim().to_string();
        self.work_hours = settings.work_hours;
        self.check_in_frequency = settings.check_in_frequency.max(1);
        self.utc_offset_minutes = settings.utc_offset_minutes;
        self.reminders_enabled = settings.reminders_enabled;
        self.updated_at = Utc::now();
        Ok(())
    }
}
