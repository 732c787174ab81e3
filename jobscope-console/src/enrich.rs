//! Last-run outcome enrichment
//!
//! Annotates each job view with the classified outcome of its most recent
//! log entry. This costs one log-store call per job, so it is strictly
//! opt-in: callers gate it behind an explicit toggle and never run it
//! implicitly on every catalog refresh.

use jobscope_core::domain::job::JobView;
use jobscope_core::ports::LogStore;
use tracing::warn;

use crate::classify::classify;

/// Sets `last_run_failed` on each view from page 1, size 1 of its history.
///
/// Jobs are processed independently and order is preserved. A job with no
/// history is not failed, and a per-job store error also resolves to not
/// failed: enrichment is advisory, so it fails open and never aborts the
/// batch.
pub async fn enrich_last_run(store: &dyn LogStore, jobs: &mut [JobView]) {
    for job in jobs.iter_mut() {
        job.last_run_failed = match store.history(&job.id, 1, 1).await {
            Ok(page) => match page.entries.first() {
                Some(entry) => !classify(entry).is_success(),
                None => false,
            },
            Err(e) => {
                warn!("Last-run check failed for job {}: {:#}", job.id, e);
                false
            }
        };
    }
}
