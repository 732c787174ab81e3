//! Job registry and execution endpoints

use crate::SchedulerClient;
use crate::error::Result;
use jobscope_core::domain::job::JobDescriptor;

impl SchedulerClient {
    /// List every job registered with the scheduler
    ///
    /// # Returns
    /// The raw descriptors, in whatever order the scheduler reports them.
    pub async fn list_jobs(&self) -> Result<Vec<JobDescriptor>> {
        let url = format!("{}/api/scheduler/jobs", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Ask the scheduler to start a run of the given job
    ///
    /// Returns as soon as the scheduler has accepted the start request;
    /// the run itself proceeds asynchronously in the scheduler's workers.
    pub async fn run_job(&self, job_id: &str) -> Result<()> {
        let url = format!("{}/api/scheduler/jobs/{}/run", self.base_url, job_id);
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
