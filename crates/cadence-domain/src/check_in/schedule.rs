use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::profile::WorkHours;

/// Advisory next-check-in estimate. Informational only; nothing is enforced
/// or blocked based on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInSchedule {
    pub in_work_hours: bool,
    pub next: NaiveDateTime,
    pub message: String,
}

/// Compute the next suggested check-in boundary.
///
/// The work-hours window is divided into `frequency` equal intervals with
/// boundaries at `start + k * (window / frequency)` for `k in 0..frequency`;
/// the result is the first boundary strictly after `now_local`. Outside the
/// window (or when no boundary remains today) the suggestion falls through
/// to tomorrow's window start. `now_local` is the caller's wall-clock time
/// in the profile's UTC offset.
pub fn next_check_in(
    now_local: NaiveDateTime,
    work_hours: WorkHours,
    frequency: u32,
) -> CheckInSchedule {
    let frequency = frequency.max(1);
    let time = now_local.time();

    if !work_hours.contains(time) {
        let next = next_day_start(now_local, work_hours.start);
        return CheckInSchedule {
            in_work_hours: false,
            next,
            message: format!(
                "Outside work hours. Next check-in tomorrow at {}.",
                work_hours.start.format("%H:%M")
            ),
        };
    }

    let window_secs = (work_hours.end - work_hours.start).num_seconds();
    let interval_secs = window_secs / frequency as i64;

    for k in 0..frequency as i64 {
        let boundary = work_hours.start + Duration::seconds(k * interval_secs);
        if boundary > time {
            let next = now_local.date().and_time(boundary);
            return CheckInSchedule {
                in_work_hours: true,
                next,
                message: format!("Next check-in at {}.", boundary.format("%H:%M")),
            };
        }
    }

    // Past the last boundary of the day but still inside the window.
    let next = next_day_start(now_local, work_hours.start);
    CheckInSchedule {
        in_work_hours: true,
        next,
        message: format!(
            "Done for today. Next check-in tomorrow at {}.",
            work_hours.start.format("%H:%M")
        ),
    }
}

fn next_day_start(now_local: NaiveDateTime, start: NaiveTime) -> NaiveDateTime {
    (now_local.date() + Duration::days(1)).and_time(start)
}
