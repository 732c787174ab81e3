//! Execution log history endpoints

use crate::SchedulerClient;
use crate::error::Result;
use jobscope_core::domain::log::HistoryPage;

impl SchedulerClient {
    /// Fetch one page of a job's execution history
    ///
    /// # Arguments
    /// * `job_id` - The job identifier
    /// * `page` - 1-based page index
    /// * `page_size` - Number of entries per page
    ///
    /// # Returns
    /// The requested page, most recent entry first.
    pub async fn job_history(&self, job_id: &str, page: u32, page_size: u32) -> Result<HistoryPage> {
        let url = format!("{}/api/scheduler/jobs/{}/history", self.base_url, job_id);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
