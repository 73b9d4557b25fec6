//! Risk domain models.

use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::error::{EstimateError, EstimateResult};
use crate::validate::whole_positive;

/// Sizing inputs for a risk estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParameters {
    /// Estimated duration in days.
    pub duration: u32,
    pub requirement_count: u32,
    pub developer_count: u32,
}

impl ProjectParameters {
    /// Create validated parameters. Every value must be at least 1.
    pub fn new(
        duration: u32,
        requirement_count: u32,
        developer_count: u32,
    ) -> EstimateResult<Self> {
        for (field, value) in [
            ("duration", duration),
            ("requirements", requirement_count),
            ("developers", developer_count),
        ] {
            if value == 0 {
                return Err(EstimateError::invalid(field, "must be greater than zero"));
            }
        }

        Ok(Self {
            duration,
            requirement_count,
            developer_count,
        })
    }

    /// Create parameters from loosely typed numbers, as they arrive in JSON.
    ///
    /// Rejects values that are not finite, not whole, not positive, or that
    /// do not fit in a `u32`.
    pub fn from_numbers(
        duration: f64,
        requirements: f64,
        developers: f64,
    ) -> EstimateResult<Self> {
        Self::new(
            whole_positive("duration", duration)?,
            whole_positive("requirements", requirements)?,
            whole_positive("developers", developers)?,
        )
    }
}

/// Risk band a probability falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Short human label for the level.
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::Low) => "Low",
            (Language::En, Self::Medium) => "Medium",
            (Language::En, Self::High) => "High",
            (Language::Es, Self::Low) => "Bajo",
            (Language::Es, Self::Medium) => "Medio",
            (Language::Es, Self::High) => "Alto",
        }
    }

    /// Recommendation message shown to the project lead.
    pub fn recommendation(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::High) => {
                "⚠️ High risk: very complex project. Split it into phases and assign more resources."
            }
            (Language::En, Self::Medium) => {
                "⚡ Medium risk: monitor the scope closely and keep communication constant."
            }
            (Language::En, Self::Low) => {
                "✅ Low risk: parameters within normal range. The project is viable with current resources."
            }
            (Language::Es, Self::High) => {
                "⚠️ Riesgo Alto: Proyecto muy complejo. Se recomienda dividir en fases y asignar más recursos."
            }
            (Language::Es, Self::Medium) => {
                "⚡ Riesgo Medio: Monitorear de cerca el alcance y asegurar comunicación constante."
            }
            (Language::Es, Self::Low) => {
                "✅ Riesgo Bajo: Parámetros dentro de lo normal. Proyecto viable con recursos actuales."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sizing condition that adds to the base risk when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    LongDuration,
    ManyRequirements,
    SmallTeam,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 3] = [Self::LongDuration, Self::ManyRequirements, Self::SmallTeam];
}

/// A triggered factor and what it added to the probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub factor: RiskFactor,
    /// Contribution to the probability, in `[0, 1]`.
    pub weight: f64,
}

/// Result of a risk estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability in `[0, 1]`.
    pub probability: f64,
    pub level: RiskLevel,
    pub recommendation: String,
    /// Factors that contributed on top of the base risk, in evaluation order.
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    /// Probability as a whole percentage.
    pub fn percent(&self) -> u32 {
        (self.probability * 100.0).round() as u32
    }
}
