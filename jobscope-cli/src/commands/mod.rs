//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod log;

pub use job::JobCommands;
pub use log::LogCommands;

use anyhow::Result;
use clap::Subcommand;
use jobscope_client::ClientError;
use jobscope_console::MonitorError;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job catalog and execution
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Execution log history
    Logs {
        #[command(subcommand)]
        command: LogCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Jobs { command } => job::handle_job_command(command, config).await,
        Commands::Logs { command } => log::handle_log_command(command, config).await,
    }
}

/// True if the failure bottoms out in the scheduler not knowing the job id.
///
/// Lets command handlers print a friendly message for a mistyped id
/// instead of a raw API error.
pub(crate) fn is_unknown_job(err: &MonitorError) -> bool {
    let source = match err {
        MonitorError::CatalogLoad { source } => source,
        MonitorError::HistoryLoad { source, .. } => source,
        MonitorError::ExecutionStart { source, .. } => source,
    };

    source
        .downcast_ref::<ClientError>()
        .is_some_and(ClientError::is_not_found)
}
