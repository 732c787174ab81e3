//! Execution log domain types

use serde::{Deserialize, Serialize};

/// One recorded execution of a job, as stored by the scheduler's log store.
///
/// The log format carries no structured success flag; outcome is inferred
/// from the free-text message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub job_id: String,
    pub finished_at: chrono::DateTime<chrono::Utc>,
    pub message: String,
}

/// One page of a job's execution history, most recent entry first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub entries: Vec<LogEntry>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

impl HistoryPage {
    /// An empty page for the given request window.
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self {
            entries: Vec::new(),
            total_count: 0,
            page,
            page_size,
        }
    }
}

/// Inferred outcome of a single execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failure,
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}
