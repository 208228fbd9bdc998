use serde::{Deserialize, Serialize};

use cadence_domain::check_in::CheckIn;
use cadence_domain::profile::StreakChange;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitCheckInRequest {
    pub mood: Option<String>,
    pub energy_level: Option<u8>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInDto {
    pub id: String,
    pub mood: Option<String>,
    pub energy_level: Option<u8>,
    pub note: Option<String>,
    pub created_at: String, // RFC 3339
    /// Streak outcome, present only on the submit response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<StreakOutcomeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakOutcomeDto {
    pub change: String, // unchanged | continued | restarted
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl StreakOutcomeDto {
    pub fn from_change(change: StreakChange, current: u32, longest: u32) -> Self {
        let label = match change {
            StreakChange::Unchanged => "unchanged",
            StreakChange::Continued { .. } => "continued",
            StreakChange::Restarted { .. } => "restarted",
        };
        Self {
            change: label.to_string(),
            current_streak: current,
            longest_streak: longest,
        }
    }
}

impl From<&CheckIn> for CheckInDto {
    fn from(check_in: &CheckIn) -> Self {
        Self {
            id: check_in.id().to_string(),
            mood: check_in.mood().map(|m| m.to_string()),
            energy_level: check_in.energy_level().map(|e| e.value()),
            note: check_in.note().map(str::to_string),
            created_at: check_in.created_at().to_rfc3339(),
            streak: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInScheduleDto {
    pub in_work_hours: bool,
    pub next: String, // local naive datetime, YYYY-MM-DDTHH:MM:SS
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInDayDto {
    pub date: String, // YYYY-MM-DD
    pub is_checked_in: bool,
    pub check_in_count: u32,
    pub mood: Option<String>,
    pub energy_level: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStatsDto {
    pub total_days: u32,
    pub checked_in_days: u32,
    pub check_in_rate: f64, // 0.0 - 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInCalendarDto {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CheckInDayDto>,
    pub month_stats: MonthStatsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapDayDto {
    pub date: String,
    pub check_in_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInHeatmapDto {
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<HeatmapDayDto>,
}
