//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use spar_core::EstimatorConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides configuration and SPAR_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides configuration and SPAR_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .spar/serve.log in the project directory)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, mut config: EstimatorConfig) -> Result<()> {
    config.server = config.server.with_env_overrides()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let base = format!("http://{}", config.server.bind_address());

    println!();
    println!("  {} {}", "SPAR".cyan().bold(), "Estimation API".bold());
    println!();
    println!("  {}      {}/api/risk", "Risk".green(), base);
    println!("  {}  {}/api/schedule", "Schedule".green(), base);
    println!("  {}    {}/health", "Health".green(), base);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    spar_web::run_server(config).await
}
