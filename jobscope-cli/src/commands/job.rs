//! Job command handlers
//!
//! Lists the job catalog and triggers executions.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use jobscope_client::SchedulerClient;
use jobscope_console::session::{self, SessionState};
use jobscope_console::{ConsoleConfig, Severity, trigger};
use jobscope_core::domain::job::JobView;

use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List all jobs, grouped into custom and built-in
    List {
        /// Also check each job's most recent run for failure
        /// (one extra scheduler call per job)
        #[arg(long)]
        check_last_run: bool,
    },
    /// Trigger a run of a job and show its refreshed state
    Run {
        /// Job identifier
        id: String,
    },
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = SchedulerClient::new(&config.scheduler_url);
    let console_config = ConsoleConfig::default();

    match command {
        JobCommands::List { check_last_run } => {
            list_jobs(&client, &console_config, check_last_run).await
        }
        JobCommands::Run { id } => run_job(&client, &console_config, &id).await,
    }
}

/// Build and print the partitioned job catalog
async fn list_jobs(
    client: &SchedulerClient,
    console_config: &ConsoleConfig,
    check_last_run: bool,
) -> Result<()> {
    let mut state = SessionState::new();
    state.check_last_run = check_last_run;

    session::refresh_catalog(client, client, console_config, &mut state).await?;

    if state.catalog.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return Ok(());
    }

    if !state.catalog.custom.is_empty() {
        println!("{}", "Custom jobs:".bold());
        println!();
        for job in &state.catalog.custom {
            print_job_row(job);
        }
    }

    if !state.catalog.builtin.is_empty() {
        println!("{}", "Built-in jobs:".bold());
        println!();
        for job in &state.catalog.builtin {
            print_job_row(job);
        }
    }

    Ok(())
}

/// Trigger one job and report the refreshed view
async fn run_job(client: &SchedulerClient, console_config: &ConsoleConfig, id: &str) -> Result<()> {
    println!("{}", format!("Starting job {}...", id).bold());

    let mut state = SessionState::new();
    if let Err(err) = trigger::run_job(client, client, client, console_config, &mut state, id).await
    {
        if super::is_unknown_job(&err) {
            println!(
                "{}",
                format!("No job with id {} is known to the scheduler.", id).yellow()
            );
            return Ok(());
        }
        return Err(err.into());
    }

    print_notice(&state);

    match state.catalog.find(id) {
        Some(job) => print_job_row(job),
        None => println!("{}", format!("Job {} not in the refreshed catalog.", id).yellow()),
    }

    if state.history.is_empty() {
        println!("{}", "No executions recorded yet.".dimmed());
    } else {
        println!(
            "{}",
            format!("Recent executions ({} total):", state.history_total).bold()
        );
        for entry in state.history.iter().take(10) {
            println!(
                "  {}  {}",
                entry
                    .finished_at
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .dimmed(),
                entry.message
            );
        }
    }

    Ok(())
}

/// Print one catalog row
fn print_job_row(job: &JobView) {
    let activity = if job.running {
        "running".cyan()
    } else if job.enabled {
        "enabled".green()
    } else {
        "disabled".dimmed()
    };

    println!("  {} {} [{}]", "▸".cyan(), job.name.bold(), activity);
    if job.last_run_failed {
        println!("    {}", "last run failed".red());
    }
    if let Some(last) = job.last_execution {
        println!(
            "    Last: {}",
            last.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    if let Some(next) = job.next_execution {
        println!(
            "    Next: {}",
            next.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Print the session's status notice, if one was raised
fn print_notice(state: &SessionState) {
    if let Some(notice) = &state.status {
        let text = match notice.severity {
            Severity::Error => notice.text.red(),
            Severity::Warning => notice.text.yellow(),
            Severity::Info => notice.text.normal(),
        };
        println!("{}", text);
    }
}
