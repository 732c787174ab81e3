//! Error types for console operations

use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors surfaced by console operations.
///
/// Every variant is recoverable: operations translate these into a status
/// notice on the session state and leave the last good view intact (catalog)
/// or cleared (history). Per-job enrichment failures are swallowed where
/// they occur and never reach this type.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The registry read behind a catalog rebuild failed.
    #[error("failed to load job catalog: {source}")]
    CatalogLoad {
        #[source]
        source: anyhow::Error,
    },

    /// A history page read failed for the given job.
    #[error("failed to load execution history for job {job_id}: {source}")]
    HistoryLoad {
        job_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The executor rejected or failed the start request for the given job.
    #[error("failed to start job {job_id}: {source}")]
    ExecutionStart {
        job_id: String,
        #[source]
        source: anyhow::Error,
    },
}
