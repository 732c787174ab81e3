//! Log entry outcome classification
//!
//! The scheduler's log store records no structured success flag, so the
//! outcome of a run is inferred from its free-text message. This is a
//! best-effort heuristic, not a guarantee.

use jobscope_core::domain::log::{LogEntry, RunOutcome};

/// Substrings whose presence in a log message marks the run as failed.
const FAILURE_MARKERS: [&str; 3] = ["exception", "error:", "failed"];

/// Classifies a single log entry as success or failure.
///
/// An empty message classifies as success: absence of information is not
/// evidence of failure. Otherwise the message is searched case-insensitively
/// for any of the known failure markers.
pub fn classify(entry: &LogEntry) -> RunOutcome {
    if entry.message.is_empty() {
        return RunOutcome::Success;
    }

    let message = entry.message.to_lowercase();
    if FAILURE_MARKERS.iter().any(|marker| message.contains(marker)) {
        RunOutcome::Failure
    } else {
        RunOutcome::Success
    }
}
