use chrono::{DateTime, Duration, Utc};

use super::calendar::bucket_by_local_date;
use crate::application::dtos::{CheckInHeatmapDto, HeatmapDayDto};
use cadence_domain::check_in::CheckInRepository;
use cadence_domain::profile::Profile;
use cadence_domain::shared::{DomainError, UserId};

const MAX_HEATMAP_DAYS: u32 = 365;

/// Per-day check-in counts over the last `days` days (today inclusive),
/// in the user's UTC offset.
pub async fn get_heatmap(
    check_in_repo: &dyn CheckInRepository,
    profile: &Profile,
    user_id: &UserId,
    days: u32,
    now: DateTime<Utc>,
) -> Result<CheckInHeatmapDto, DomainError> {
    if days == 0 || days > MAX_HEATMAP_DAYS {
        return Err(DomainError::Validation(format!(
            "Days must be between 1 and {}",
            MAX_HEATMAP_DAYS
        )));
    }

    let end_date = profile.local_date(now);
    let start_date = end_date - Duration::days(i64::from(days) - 1);

    // Padded by a day on each side; the repository filters on UTC dates.
    let rows = check_in_repo
        .list_in_date_range(
            user_id,
            start_date - Duration::days(1),
            end_date + Duration::days(1),
        )
        .await?;

    let buckets = bucket_by_local_date(&rows, profile);

    let mut day_dtos = Vec::with_capacity(days as usize);
    let mut date = start_date;
    while date <= end_date {
        let count = buckets.get(&date).map_or(0, |b| b.len() as u32);
        day_dtos.push(HeatmapDayDto {
            date: date.to_string(),
            check_in_count: count,
        });
        date += Duration::days(1);
    }

    Ok(CheckInHeatmapDto {
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        days: day_dtos,
    })
}
