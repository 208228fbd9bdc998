use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::application::dtos::{CheckInCalendarDto, CheckInDayDto, MonthStatsDto};
use cadence_domain::check_in::{CheckIn, CheckInRepository};
use cadence_domain::profile::Profile;
use cadence_domain::shared::{DomainError, UserId};

/// Month view of check-in activity: one bucket per calendar day in the
/// user's UTC offset, plus month-level stats.
pub async fn get_calendar(
    check_in_repo: &dyn CheckInRepository,
    profile: &Profile,
    user_id: &UserId,
    year: i32,
    month: u32,
) -> Result<CheckInCalendarDto, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation("Invalid month".to_string()));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;
    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = first_day_next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

    // The repository filters on UTC dates; pad one day each side so offset
    // shifts cannot drop rows, then bucket by the user's local date.
    let rows = check_in_repo
        .list_in_date_range(
            user_id,
            first_day - Duration::days(1),
            last_day + Duration::days(1),
        )
        .await?;

    let buckets = bucket_by_local_date(&rows, profile);

    let total_days = last_day.day();
    let mut days = Vec::with_capacity(total_days as usize);
    let mut checked_in_days = 0u32;

    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

        let day_check_ins: &[&CheckIn] = buckets.get(&date).map(Vec::as_slice).unwrap_or(&[]);

        // Latest entry of the day represents the day's mood/energy.
        if let Some(latest) = day_check_ins.iter().max_by_key(|c| c.created_at()) {
            checked_in_days += 1;
            days.push(CheckInDayDto {
                date: date.to_string(),
                is_checked_in: true,
                check_in_count: day_check_ins.len() as u32,
                mood: latest.mood().map(|m| m.to_string()),
                energy_level: latest.energy_level().map(|e| e.value()),
            });
        } else {
            days.push(CheckInDayDto {
                date: date.to_string(),
                is_checked_in: false,
                check_in_count: 0,
                mood: None,
                energy_level: None,
            });
        }
    }

    let check_in_rate = if total_days > 0 {
        f64::from(checked_in_days) / f64::from(total_days) * 100.0
    } else {
        0.0
    };

    Ok(CheckInCalendarDto {
        year,
        month,
        days,
        month_stats: MonthStatsDto {
            total_days,
            checked_in_days,
            check_in_rate,
        },
    })
}

pub(super) fn bucket_by_local_date<'a>(
    rows: &'a [CheckIn],
    profile: &Profile,
) -> HashMap<NaiveDate, Vec<&'a CheckIn>> {
    let mut buckets: HashMap<NaiveDate, Vec<&CheckIn>> = HashMap::new();
    for row in rows {
        buckets
            .entry(profile.local_date(row.created_at()))
            .or_default()
            .push(row);
    }
    buckets
}
