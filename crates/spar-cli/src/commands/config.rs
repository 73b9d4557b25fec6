//! Configuration inspection command.

use anyhow::Result;
use spar_core::EstimatorConfig;

pub fn execute(config: &EstimatorConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
