//! Risk estimation command.

use anyhow::Result;
use clap::Args;
use spar_core::{EstimatorConfig, Language, ProjectParameters, RiskAssessment, RiskModel};

use crate::output;

#[derive(Args)]
pub struct RiskArgs {
    /// Estimated duration in days
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Number of initial requirements
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub requirements: u32,

    /// Number of developers assigned
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub developers: u32,

    /// Message language (en, es); overrides the configuration
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RiskArgs, config: &EstimatorConfig) -> Result<()> {
    let params = ProjectParameters::new(args.duration, args.requirements, args.developers)?;
    let language = args.language.unwrap_or(config.language);
    let assessment = config.risk.assess(&params, language);

    tracing::debug!(
        probability = assessment.probability,
        level = %assessment.level,
        "Risk estimated"
    );

    if args.json {
        let json = assessment_json(&assessment, &config.risk);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        output::print_assessment(&params, &assessment, &config.risk, language);
    }

    Ok(())
}

/// Same shape as the body returned by `POST /api/risk`.
fn assessment_json(assessment: &RiskAssessment, model: &RiskModel) -> serde_json::Value {
    serde_json::json!({
        "probability": assessment.probability,
        "suggestion": assessment.recommendation,
        "level": assessment.level,
        "factors": model.factor_weights(&assessment.factors),
    })
}
