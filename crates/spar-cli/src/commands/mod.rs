//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spar_core::EstimatorConfig;
use std::path::PathBuf;

pub mod config;
pub mod risk;
pub mod schedule;
pub mod serve;

/// SPAR - Project risk and schedule estimation
#[derive(Parser)]
#[command(name = "spar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to $SPAR_CONFIG, then ./spar.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate project risk from its sizing
    Risk(risk::RiskArgs),

    /// Split a duration into dated project phases
    Schedule(schedule::ScheduleArgs),

    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Directory used to look up `spar.toml` and the default log file.
    pub fn project_dir(&self) -> PathBuf {
        self.project
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn load_config(&self) -> Result<EstimatorConfig> {
        EstimatorConfig::load(self.config.as_deref(), &self.project_dir())
            .context("Failed to load configuration")
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.load_config()?;

        match self.command {
            Commands::Risk(args) => risk::execute(args, &config),
            Commands::Schedule(args) => schedule::execute(args, &config),
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Config => config::execute(&config),
        }
    }
}
