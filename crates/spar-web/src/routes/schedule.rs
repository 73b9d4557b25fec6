//! Schedule estimation handler.

use axum::{extract::rejection::JsonRejection, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use spar_core::schedule;
use spar_core::validate::whole_positive;
use spar_core::Schedule;
use tracing::{debug, info};

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub total_duration: f64,
    /// Defaults to today in the server's local time zone.
    pub start_date: Option<NaiveDate>,
}

pub async fn estimate_schedule(
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> ApiResult<Json<Schedule>> {
    let Json(req) = payload?;
    let total_duration = whole_positive("totalDuration", req.total_duration)?;
    let start_date = req
        .start_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    info!(total_duration, start_date = %start_date, "Estimating schedule");

    let schedule = schedule::estimate_schedule(i64::from(total_duration), start_date)?;

    debug!(
        overall_end_date = %schedule.overall_end_date,
        total_scheduled_days = schedule.total_scheduled_days,
        drift = schedule.drift(),
        "Schedule estimated"
    );

    Ok(Json(schedule))
}
