//! Schedule estimation.
//!
//! Splits a total duration into the five fixed phases. Each phase gets
//! `max(1, round(allocation% * total))` days, rounding half away from zero,
//! and starts the day after the previous one ends. Rounding and the one-day
//! floor mean the scheduled total can differ from the requested one; that
//! difference is reported, not corrected.

pub mod model;

use chrono::{Days, NaiveDate};

use crate::error::{EstimateError, EstimateResult};
use model::{Phase, PhaseKind, Schedule};

/// Days allotted to a phase of `allocation_percent` out of `total_duration`.
pub fn phase_days(allocation_percent: u32, total_duration: i64) -> i64 {
    let scaled = i64::from(allocation_percent).saturating_mul(total_duration);
    scaled.saturating_add(50).div_euclid(100).max(1)
}

/// Build the dated schedule for a project starting on `start_date`.
///
/// Non-positive durations produce five one-day phases. The only failure is
/// running past the calendar range `chrono` can represent.
pub fn estimate_schedule(total_duration: i64, start_date: NaiveDate) -> EstimateResult<Schedule> {
    let mut phases = Vec::with_capacity(PhaseKind::ALL.len());
    let mut cursor = Some(start_date);
    let mut offset_percent = 0;
    let mut total_scheduled_days: u32 = 0;

    for kind in PhaseKind::ALL {
        let allocation_percent = kind.allocation_percent();
        let days = phase_days(allocation_percent, total_duration);
        let day_count = u32::try_from(days).map_err(|_| EstimateError::DateOutOfRange { days })?;

        let phase_start = cursor.ok_or(EstimateError::DateOutOfRange { days: 1 })?;
        let phase_end = phase_start
            .checked_add_days(Days::new(u64::from(day_count - 1)))
            .ok_or(EstimateError::DateOutOfRange { days })?;

        phases.push(Phase {
            name: kind,
            allocation_percent,
            offset_percent,
            day_count,
            start_date: phase_start,
            end_date: phase_end,
        });

        cursor = phase_end.succ_opt();
        offset_percent += allocation_percent;
        total_scheduled_days = total_scheduled_days.saturating_add(day_count);
    }

    let overall_end_date = phases.last().map(|p| p.end_date).unwrap_or(start_date);

    Ok(Schedule {
        start_date,
        total_duration,
        phases,
        overall_end_date,
        total_scheduled_days,
    })
}
