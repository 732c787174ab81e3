//! Port implementations
//!
//! Wires [`SchedulerClient`] into the capability traits the console
//! consumes, so a single client instance can serve as registry, executor
//! and log store.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::SchedulerClient;
use jobscope_core::domain::job::JobDescriptor;
use jobscope_core::domain::log::HistoryPage;
use jobscope_core::ports::{Executor, JobRegistry, LogStore};

#[async_trait]
impl JobRegistry for SchedulerClient {
    async fn list(&self) -> Result<Vec<JobDescriptor>> {
        debug!("Fetching job list from {}", self.base_url());
        let jobs = self.list_jobs().await?;
        Ok(jobs)
    }
}

#[async_trait]
impl Executor for SchedulerClient {
    async fn start(&self, job_id: &str) -> Result<()> {
        debug!("Requesting start of job {}", job_id);
        self.run_job(job_id).await?;
        Ok(())
    }
}

#[async_trait]
impl LogStore for SchedulerClient {
    async fn history(&self, job_id: &str, page: u32, page_size: u32) -> Result<HistoryPage> {
        debug!(
            "Fetching history page {} (size {}) for job {}",
            page, page_size, job_id
        );
        let history = self.job_history(job_id, page, page_size).await?;
        Ok(history)
    }
}
