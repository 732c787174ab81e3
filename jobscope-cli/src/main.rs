//! Jobscope CLI
//!
//! Operator console for an external scheduler subsystem: inspect the job
//! catalog, trigger runs, and browse or export execution log history.
//!
//! All scheduler access goes through `jobscope-client`; the monitoring and
//! trigger logic lives in `jobscope-console`. This binary is rendering and
//! argument plumbing only.

mod commands;
mod config;
mod sink;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobscope")]
#[command(about = "Scheduler job monitoring console", long_about = None)]
struct Cli {
    /// Scheduler admin API URL
    #[arg(
        long,
        env = "JOBSCOPE_SCHEDULER_URL",
        default_value = "http://localhost:8080"
    )]
    scheduler_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobscope=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        scheduler_url: cli.scheduler_url,
    };

    handle_command(cli.command, &config).await
}
