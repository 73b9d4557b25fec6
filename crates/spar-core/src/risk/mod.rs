//! Project risk estimation.
//!
//! Risk is a fixed additive score: a base value plus one weight per
//! triggered sizing factor, capped at 100%. Scores are kept in whole
//! percentage points so banding is exact; the probability is only
//! converted to `f64` at the end.

pub mod model;

use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::error::{EstimateError, EstimateResult};
use model::{FactorWeight, ProjectParameters, RiskAssessment, RiskFactor, RiskLevel};

/// Upper bound of the score, in percentage points.
const MAX_POINTS: u32 = 100;

/// Thresholds and weights of the risk rule.
///
/// Weights and band limits are percentage points (`10` means `0.10`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskModel {
    /// Risk every project starts with.
    pub base: u32,
    /// Durations strictly above this many days are long.
    pub duration_threshold_days: u32,
    pub long_duration_weight: u32,
    /// Requirement counts strictly above this are many.
    pub requirements_threshold: u32,
    pub many_requirements_weight: u32,
    /// Teams strictly smaller than this are small.
    pub min_developers: u32,
    pub small_team_weight: u32,
    /// Scores strictly above this are high risk.
    pub high_above: u32,
    /// Scores strictly above this (and not high) are medium risk.
    pub medium_above: u32,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            base: 10,
            duration_threshold_days: 90,
            long_duration_weight: 30,
            requirements_threshold: 30,
            many_requirements_weight: 30,
            min_developers: 2,
            small_team_weight: 20,
            high_above: 70,
            medium_above: 40,
        }
    }
}

impl RiskModel {
    /// Check that band limits are usable.
    pub fn validate(&self) -> EstimateResult<()> {
        if self.high_above > MAX_POINTS || self.medium_above > MAX_POINTS {
            return Err(EstimateError::InvalidModel(format!(
                "band limits must be within 0..={}, got medium_above={} high_above={}",
                MAX_POINTS, self.medium_above, self.high_above
            )));
        }
        if self.medium_above > self.high_above {
            return Err(EstimateError::InvalidModel(format!(
                "medium_above ({}) must not exceed high_above ({})",
                self.medium_above, self.high_above
            )));
        }
        Ok(())
    }

    /// Weight of a factor, in percentage points.
    pub fn weight(&self, factor: RiskFactor) -> u32 {
        match factor {
            RiskFactor::LongDuration => self.long_duration_weight,
            RiskFactor::ManyRequirements => self.many_requirements_weight,
            RiskFactor::SmallTeam => self.small_team_weight,
        }
    }

    /// Pair each factor with its weight as a probability.
    pub fn factor_weights(&self, factors: &[RiskFactor]) -> Vec<FactorWeight> {
        factors
            .iter()
            .map(|&factor| FactorWeight {
                factor,
                weight: f64::from(self.weight(factor)) / 100.0,
            })
            .collect()
    }

    fn is_triggered(&self, factor: RiskFactor, params: &ProjectParameters) -> bool {
        match factor {
            RiskFactor::LongDuration => params.duration > self.duration_threshold_days,
            RiskFactor::ManyRequirements => params.requirement_count > self.requirements_threshold,
            RiskFactor::SmallTeam => params.developer_count < self.min_developers,
        }
    }

    /// Factors triggered by the given parameters.
    pub fn factors(&self, params: &ProjectParameters) -> Vec<RiskFactor> {
        RiskFactor::ALL
            .into_iter()
            .filter(|f| self.is_triggered(*f, params))
            .collect()
    }

    /// Clamped score in percentage points.
    pub fn score_points(&self, params: &ProjectParameters) -> u32 {
        self.factors(params)
            .into_iter()
            .fold(self.base, |acc, f| acc.saturating_add(self.weight(f)))
            .min(MAX_POINTS)
    }

    /// Band for a score in percentage points.
    pub fn level_for_points(&self, points: u32) -> RiskLevel {
        if points > self.high_above {
            RiskLevel::High
        } else if points > self.medium_above {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Estimate the risk of a project.
    pub fn assess(&self, params: &ProjectParameters, language: Language) -> RiskAssessment {
        let factors = self.factors(params);
        let points = self.score_points(params);
        let level = self.level_for_points(points);

        RiskAssessment {
            probability: f64::from(points) / 100.0,
            level,
            recommendation: level.recommendation(language).to_string(),
            factors,
        }
    }
}

/// Estimate risk with the default rule and English messages.
pub fn estimate_risk(params: &ProjectParameters) -> RiskAssessment {
    RiskModel::default().assess(params, Language::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(duration: u32, requirements: u32, developers: u32) -> ProjectParameters {
        ProjectParameters::new(duration, requirements, developers).unwrap()
    }

    #[test]
    fn test_no_factors_is_base_risk() {
        let a = estimate_risk(&params(30, 10, 5));
        assert_eq!(a.probability, 0.1);
        assert_eq!(a.level, RiskLevel::Low);
        assert!(a.recommendation.contains("Low risk"));
        assert!(a.factors.is_empty());
    }

    #[test]
    fn test_all_factors_sum_to_exactly_point_nine() {
        let a = estimate_risk(&params(91, 31, 1));
        assert_eq!(a.probability, 0.9);
        assert_eq!(a.level, RiskLevel::High);
        assert!(a.recommendation.contains("High risk"));
        assert_eq!(
            a.factors,
            vec![RiskFactor::LongDuration, RiskFactor::ManyRequirements, RiskFactor::SmallTeam]
        );
    }

    #[test]
    fn test_factor_weights_follow_model() {
        let model = RiskModel {
            small_team_weight: 25,
            ..RiskModel::default()
        };
        let a = model.assess(&params(91, 10, 1), Language::En);
        let weights = model.factor_weights(&a.factors);

        assert_eq!(
            weights,
            vec![
                FactorWeight { factor: RiskFactor::LongDuration, weight: 0.3 },
                FactorWeight { factor: RiskFactor::SmallTeam, weight: 0.25 },
            ]
        );
        assert!(model.factor_weights(&[]).is_empty());
    }

    #[test]
    fn test_point_four_is_low_not_medium() {
        let a = estimate_risk(&params(100, 10, 5));
        assert_eq!(a.probability, 0.4);
        assert_eq!(a.level, RiskLevel::Low);
    }

    #[test]
    fn test_point_seven_is_medium_not_high() {
        let a = estimate_risk(&params(100, 31, 5));
        assert_eq!(a.probability, 0.7);
        assert_eq!(a.level, RiskLevel::Medium);
        assert!(a.recommendation.contains("Medium risk"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let model = RiskModel::default();
        assert!(model.factors(&params(90, 30, 2)).is_empty());
        assert_eq!(model.factors(&params(91, 30, 2)), vec![RiskFactor::LongDuration]);
        assert_eq!(model.factors(&params(90, 31, 2)), vec![RiskFactor::ManyRequirements]);
        assert_eq!(model.factors(&params(90, 30, 1)), vec![RiskFactor::SmallTeam]);
    }

    #[test]
    fn test_medium_band() {
        let a = estimate_risk(&params(30, 10, 1));
        assert_eq!(a.probability, 0.3);
        assert_eq!(a.level, RiskLevel::Low);

        let a = estimate_risk(&params(120, 10, 1));
        assert_eq!(a.probability, 0.6);
        assert_eq!(a.level, RiskLevel::Medium);
    }

    #[test]
    fn test_score_is_capped_at_one() {
        let model = RiskModel {
            base: 50,
            ..RiskModel::default()
        };
        let a = model.assess(&params(200, 50, 1), Language::En);
        assert_eq!(a.probability, 1.0);
        assert_eq!(a.level, RiskLevel::High);
    }

    #[test]
    fn test_spanish_messages() {
        let a = RiskModel::default().assess(&params(200, 50, 1), Language::Es);
        assert!(a.recommendation.starts_with("⚠️ Riesgo Alto"));
    }

    #[test]
    fn test_validate_band_limits() {
        assert!(RiskModel::default().validate().is_ok());

        let inverted = RiskModel {
            medium_above: 80,
            high_above: 50,
            ..RiskModel::default()
        };
        assert!(inverted.validate().is_err());

        let too_high = RiskModel {
            high_above: 150,
            ..RiskModel::default()
        };
        assert!(too_high.validate().is_err());
    }

    #[test]
    fn test_assess_is_idempotent() {
        let model = RiskModel::default();
        let p = params(95, 12, 1);
        let first = model.assess(&p, Language::En);
        let second = model.assess(&p, Language::En);
        assert_eq!(first, second);
        assert_eq!(first.probability.to_bits(), second.probability.to_bits());
    }
}
