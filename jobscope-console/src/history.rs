//! Execution history retrieval
//!
//! Fetches one job's paginated log history on demand from the log store.

use jobscope_core::domain::log::HistoryPage;
use jobscope_core::ports::LogStore;
use tracing::debug;

use crate::error::{MonitorError, Result};

/// Upper bound on entries fetched in one call. Bounds memory and latency;
/// the console shows at most one capped page, not a full pagination UI.
pub const MAX_HISTORY_PAGE_SIZE: u32 = 1000;

/// Loads one page of a job's execution history, most recent entry first.
///
/// `page_size` is clamped to [`MAX_HISTORY_PAGE_SIZE`]. Failures are wrapped
/// in [`MonitorError::HistoryLoad`]; the caller is expected to have cleared
/// any previously displayed history before the call and to leave it empty
/// on failure, so stale data is never shown as loaded.
pub async fn load_history(
    store: &dyn LogStore,
    job_id: &str,
    page: u32,
    page_size: u32,
) -> Result<HistoryPage> {
    let page_size = page_size.min(MAX_HISTORY_PAGE_SIZE);

    debug!("Loading history page {} for job {}", page, job_id);

    store
        .history(job_id, page, page_size)
        .await
        .map_err(|source| MonitorError::HistoryLoad {
            job_id: job_id.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticLogStore, entry, page_of};

    #[tokio::test]
    async fn test_load_history_returns_store_page() {
        let store =
            StaticLogStore::new().with_page("report", page_of(vec![entry("report", "done")]));

        let page = load_history(&store, "report", 1, 50).await.unwrap();
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].message, "done");
    }

    #[tokio::test]
    async fn test_page_size_clamped_to_cap() {
        let store = StaticLogStore::new().with_page("report", page_of(vec![]));

        load_history(&store, "report", 1, 10_000).await.unwrap();
        let calls = store.calls();
        assert_eq!(calls, vec![("report".to_string(), 1, MAX_HISTORY_PAGE_SIZE)]);
    }

    #[tokio::test]
    async fn test_store_failure_wrapped() {
        let store = StaticLogStore::new().failing_for("report");

        let err = load_history(&store, "report", 1, 10).await.unwrap_err();
        assert!(matches!(err, MonitorError::HistoryLoad { ref job_id, .. } if job_id == "report"));
    }
}
