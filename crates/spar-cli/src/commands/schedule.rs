//! Schedule estimation command.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use spar_core::{EstimatorConfig, Language};

use crate::output;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Total duration in days
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// First day of the project, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Phase name language (en, es); overrides the configuration
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ScheduleArgs, config: &EstimatorConfig) -> Result<()> {
    let start = args
        .start
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let schedule = spar_core::schedule::estimate_schedule(i64::from(args.duration), start)?;

    if schedule.drift() != 0 {
        tracing::debug!(
            requested = args.duration,
            scheduled = schedule.total_scheduled_days,
            "Scheduled days differ from requested duration"
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        output::print_schedule(&schedule, args.language.unwrap_or(config.language));
    }

    Ok(())
}
