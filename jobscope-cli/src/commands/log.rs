//! Log command handlers
//!
//! Browses and exports a job's execution history.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use jobscope_client::SchedulerClient;
use jobscope_console::classify::classify;
use jobscope_console::session::{self, SessionState};
use jobscope_console::{ConsoleConfig, export, filter};
use jobscope_core::domain::log::LogEntry;

use crate::config::Config;
use crate::sink::DiskSink;

/// ANSI marker pair used for keyword highlighting in the terminal.
const HIGHLIGHT_OPEN: &str = "\u{1b}[1;33m";
const HIGHLIGHT_CLOSE: &str = "\u{1b}[0m";

/// Log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// Show a job's execution history
    Show {
        /// Job identifier
        id: String,

        /// Only show entries whose message contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Highlight these whitespace-separated keywords in messages
        #[arg(long)]
        highlight: Option<String>,
    },
    /// Export a job's (filtered) history to a delimited text file
    Export {
        /// Job identifier
        id: String,

        /// Only export entries whose message contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Output file path
        #[arg(short, long)]
        out: String,
    },
}

/// Handle log commands
pub async fn handle_log_command(command: LogCommands, config: &Config) -> Result<()> {
    let client = SchedulerClient::new(&config.scheduler_url);
    let console_config = ConsoleConfig::default();

    match command {
        LogCommands::Show {
            id,
            filter,
            highlight,
        } => show_logs(&client, &console_config, &id, filter, highlight).await,
        LogCommands::Export { id, filter, out } => {
            export_logs(&client, &console_config, &id, filter, &out).await
        }
    }
}

/// Loads the job's history into a fresh session and returns the entries
/// surviving the filter, or `None` when the scheduler does not know the id.
async fn load_filtered(
    client: &SchedulerClient,
    console_config: &ConsoleConfig,
    id: &str,
    filter_text: Option<String>,
) -> Result<Option<Vec<LogEntry>>> {
    let mut state = SessionState::new();
    if let Err(err) = session::select_job(client, console_config, &mut state, id).await {
        if super::is_unknown_job(&err) {
            println!(
                "{}",
                format!("No job with id {} is known to the scheduler.", id).yellow()
            );
            return Ok(None);
        }
        return Err(err.into());
    }

    Ok(Some(filter::filter_entries(
        &state.history,
        filter_text.as_deref().unwrap_or(""),
    )))
}

/// Show (filtered, highlighted) history entries
async fn show_logs(
    client: &SchedulerClient,
    console_config: &ConsoleConfig,
    id: &str,
    filter_text: Option<String>,
    highlight_text: Option<String>,
) -> Result<()> {
    let Some(entries) = load_filtered(client, console_config, id, filter_text).await? else {
        return Ok(());
    };

    if entries.is_empty() {
        println!("{}", "No matching log entries.".yellow());
        return Ok(());
    }

    println!("{}", format!("History for job {}:", id).bold());
    println!("{}", "─".repeat(80).dimmed());
    for entry in &entries {
        print_log_entry(entry, highlight_text.as_deref());
    }
    println!("{}", "─".repeat(80).dimmed());

    Ok(())
}

/// Export (filtered) history entries through the disk sink
async fn export_logs(
    client: &SchedulerClient,
    console_config: &ConsoleConfig,
    id: &str,
    filter_text: Option<String>,
    out: &str,
) -> Result<()> {
    let Some(entries) = load_filtered(client, console_config, id, filter_text).await? else {
        return Ok(());
    };

    export::export_to_sink(&DiskSink, out, &entries)?;

    println!(
        "{}",
        format!("Exported {} entr(ies) to {}", entries.len(), out).green()
    );

    Ok(())
}

/// Print one history line: timestamp, classified outcome, message
fn print_log_entry(entry: &LogEntry, highlight_text: Option<&str>) {
    let outcome = if classify(entry).is_success() {
        "Success".green()
    } else {
        "Failed".red()
    };

    let message = match highlight_text {
        Some(query) => filter::highlight(&entry.message, query, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
        None => entry.message.clone(),
    };

    println!(
        "  {}  {:<7}  {}",
        entry
            .finished_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed(),
        outcome,
        message
    );
}
