//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use spar_core::{
    Language, PhaseKind, ProjectParameters, RiskAssessment, RiskFactor, RiskLevel, RiskModel,
    Schedule,
};

/// Width of the timeline bar, in characters.
const BAR_WIDTH: usize = 50;

fn level_colored(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::High => text.red().bold(),
        RiskLevel::Medium => text.yellow().bold(),
        RiskLevel::Low => text.green().bold(),
    }
}

fn factor_description(factor: RiskFactor, model: &RiskModel) -> String {
    match factor {
        RiskFactor::LongDuration => format!("duration over {} days", model.duration_threshold_days),
        RiskFactor::ManyRequirements => {
            format!("more than {} requirements", model.requirements_threshold)
        }
        RiskFactor::SmallTeam => format!("fewer than {} developers", model.min_developers),
    }
}

/// Print a risk assessment.
pub fn print_assessment(
    params: &ProjectParameters,
    assessment: &RiskAssessment,
    model: &RiskModel,
    language: Language,
) {
    println!("{}", "Risk Analysis".bold());
    println!("{}", "─".repeat(40));
    println!("  Duration:     {} days", params.duration);
    println!("  Requirements: {}", params.requirement_count);
    println!("  Developers:   {}", params.developer_count);
    println!("{}", "─".repeat(40));

    let percent = format!("{}%", assessment.percent());
    println!(
        "  Probability:  {}  ({})",
        level_colored(assessment.level, &percent),
        level_colored(assessment.level, assessment.level.label(language))
    );

    let filled = (assessment.percent() as usize * BAR_WIDTH / 2) / 100;
    println!(
        "  [{}{}]",
        level_colored(assessment.level, &"█".repeat(filled)),
        "░".repeat(BAR_WIDTH / 2 - filled).dimmed()
    );

    if !assessment.factors.is_empty() {
        println!();
        println!("{}", "Contributing factors".bold());
        for factor in &assessment.factors {
            println!(
                "  {} {} {}",
                "+".yellow(),
                format!("{}%", model.weight(*factor)).yellow(),
                factor_description(*factor, model)
            );
        }
    }

    println!();
    println!("{}", assessment.recommendation);
}

fn phase_color(kind: PhaseKind, text: &str) -> ColoredString {
    match kind {
        PhaseKind::Planning => text.blue(),
        PhaseKind::Design => text.magenta(),
        PhaseKind::Development => text.green(),
        PhaseKind::Testing => text.yellow(),
        PhaseKind::Deployment => text.red(),
    }
}

/// Print a schedule as a timeline followed by a summary table.
pub fn print_schedule(schedule: &Schedule, language: Language) {
    println!(
        "{} {} → {}  ({} days)",
        "Schedule".bold(),
        schedule.start_date.format("%d %b %Y"),
        schedule.overall_end_date.format("%d %b %Y"),
        schedule.total_scheduled_days.to_string().cyan()
    );
    println!();

    for phase in &schedule.phases {
        let offset = phase.offset_percent as usize * BAR_WIDTH / 100;
        let width = (phase.allocation_percent as usize * BAR_WIDTH / 100).max(1);
        println!(
            "  {:<14} {}{}{}",
            phase.name.label(language),
            " ".repeat(offset),
            phase_color(phase.name, &"█".repeat(width)),
            " ".repeat(BAR_WIDTH.saturating_sub(offset + width))
        );
    }

    println!();
    println!("  {:<14} {:>5} {:>4}   {}", "Phase", "Days", "%", "Dates");
    println!("  {}", "─".repeat(48));
    for phase in &schedule.phases {
        println!(
            "  {:<14} {:>5} {:>3}%   {} - {}",
            phase.name.label(language),
            phase.day_count,
            phase.allocation_percent,
            phase.start_date.format("%d/%m"),
            phase.end_date.format("%d/%m")
        );
    }

    let drift = schedule.drift();
    if drift != 0 {
        println!();
        println!(
            "  {}",
            format!(
                "Note: {} day(s) scheduled for a {}-day request ({:+}) due to per-phase rounding.",
                schedule.total_scheduled_days, schedule.total_duration, drift
            )
            .dimmed()
        );
    }
}
