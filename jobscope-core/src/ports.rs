//! Capability ports for the external scheduler subsystem
//!
//! The console consumes the scheduler through these traits; no transport is
//! mandated here. `jobscope-client` provides the HTTP implementations, and
//! tests substitute in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::job::JobDescriptor;
use crate::domain::log::HistoryPage;

/// Read access to the scheduler's job registry.
#[async_trait]
pub trait JobRegistry: Send + Sync {
    /// Lists every job the scheduler currently knows about.
    async fn list(&self) -> Result<Vec<JobDescriptor>>;
}

/// Start-access to the scheduler's execution engine.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Asks the scheduler to start a run of the given job.
    ///
    /// Completion means "start accepted", not "run completed"; the run
    /// itself proceeds in the scheduler's own workers.
    async fn start(&self, job_id: &str) -> Result<()>;
}

/// Read access to the scheduler's execution log store.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Fetches one page of a job's execution history, most recent first.
    /// Pages are 1-based.
    async fn history(&self, job_id: &str, page: u32, page_size: u32) -> Result<HistoryPage>;
}

/// Delivery target for exported history reports.
///
/// How the content reaches the operator (disk write, download, stream) is
/// the implementation's concern.
pub trait FileSink: Send + Sync {
    fn deliver(&self, file_name: &str, content: &str) -> Result<()>;
}
