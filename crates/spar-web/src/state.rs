//! Application state.

use spar_core::{EstimatorConfig, Language, RiskModel};
use std::sync::Arc;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EstimatorConfig>,
}

impl AppState {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn risk_model(&self) -> &RiskModel {
        &self.config.risk
    }

    pub fn language(&self) -> Language {
        self.config.language
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}
