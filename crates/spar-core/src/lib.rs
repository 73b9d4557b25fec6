//! SPAR Core Library
//!
//! Domain models and estimation logic for project risk and schedule
//! forecasting. Everything here is pure: no I/O outside of configuration
//! loading, no shared state.

pub mod config;
pub mod error;
pub mod risk;
pub mod schedule;
pub mod validate;

pub use config::{EstimatorConfig, Language, ServerConfig};
pub use error::{EstimateError, EstimateResult};
pub use risk::model::{FactorWeight, ProjectParameters, RiskAssessment, RiskFactor, RiskLevel};
pub use risk::RiskModel;
pub use schedule::model::{Phase, PhaseKind, Schedule};
