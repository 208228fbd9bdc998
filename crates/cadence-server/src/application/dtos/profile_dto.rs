use serde::{Deserialize, Serialize};

use cadence_domain::profile::Profile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub user_id: String,
    pub display_name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_check_in_date: Option<String>, // YYYY-MM-DD
    pub work_start: String,                 // HH:MM:SS
    pub work_end: String,
    pub check_in_frequency: u32,
    pub utc_offset_minutes: i32,
    pub reminders_enabled: bool,
}

impl From<&Profile> for ProfileDto {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id().to_string(),
            display_name: profile.display_name().to_string(),
            current_streak: profile.current_streak(),
            longest_streak: profile.longest_streak(),
            last_check_in_date: profile.last_check_in_date().map(|d| d.to_string()),
            work_start: profile.work_hours().start.to_string(),
            work_end: profile.work_hours().end.to_string(),
            check_in_frequency: profile.check_in_frequency(),
            utc_offset_minutes: profile.utc_offset_minutes(),
            reminders_enabled: profile.reminders_enabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_check_in_date: Option<String>,
    pub checked_in_today: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
    pub work_start: String, // HH:MM or HH:MM:SS
    pub work_end: String,
    pub check_in_frequency: u32,
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub reminders_enabled: bool,
}
