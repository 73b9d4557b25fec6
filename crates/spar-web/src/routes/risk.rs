//! Risk prediction handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use spar_core::{FactorWeight, ProjectParameters, RiskLevel};
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::AppState;

/// Body of a risk prediction request. Numbers are validated after parsing
/// so fractional or negative values get a field-specific message.
#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    pub duration: f64,
    pub requirements: f64,
    pub developers: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RiskResponse {
    pub probability: f64,
    pub suggestion: String,
    pub level: RiskLevel,
    pub factors: Vec<FactorWeight>,
}

pub async fn predict_risk(
    State(state): State<AppState>,
    payload: Result<Json<RiskRequest>, JsonRejection>,
) -> ApiResult<Json<RiskResponse>> {
    let Json(req) = payload?;
    info!(
        duration = req.duration,
        requirements = req.requirements,
        developers = req.developers,
        "Predicting risk"
    );

    let params = ProjectParameters::from_numbers(req.duration, req.requirements, req.developers)?;
    let model = state.risk_model();
    let assessment = model.assess(&params, state.language());

    debug!(
        probability = assessment.probability,
        level = %assessment.level,
        "Risk prediction result"
    );

    let factors = model.factor_weights(&assessment.factors);

    Ok(Json(RiskResponse {
        probability: assessment.probability,
        suggestion: assessment.recommendation,
        level: assessment.level,
        factors,
    }))
}
