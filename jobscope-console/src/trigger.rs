//! Execution trigger workflow
//!
//! Drives one run of a job: select it (so the operator immediately sees
//! prior runs), ask the executor to start it, wait for the scheduler's
//! state to settle, then re-read catalog and history.
//!
//! Only one trigger per job is expected in flight at a time; the rendering
//! layer disables the run action for the job recorded in
//! `SessionState::executing`. Triggers for different jobs are independent
//! and are not serialized here.

use jobscope_core::ports::{Executor, JobRegistry, LogStore};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::ConsoleConfig;
use crate::error::{MonitorError, Result};
use crate::session::{self, SessionState, StatusNotice};

/// Where a trigger invocation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerPhase {
    #[default]
    Idle,
    /// Selecting the job and eagerly loading its existing history.
    Selecting,
    /// Asking the executor to start the run.
    Starting,
    /// Waiting the settle delay before re-reading scheduler state.
    AwaitingSettle,
    /// Rebuilding the catalog and reloading the selected history.
    Refreshing,
    /// The start request failed; no refresh was attempted.
    Failed,
}

/// Runs the trigger workflow for one job.
///
/// A start failure transitions straight to [`TriggerPhase::Failed`] with
/// the error surfaced and no refresh attempted, leaving the catalog as it
/// was. History or refresh problems around a successful start degrade to a
/// warning notice (the run itself was accepted); the trigger still
/// completes and an info notice is left when nothing went wrong.
pub async fn run_job(
    registry: &dyn JobRegistry,
    executor: &dyn Executor,
    store: &dyn LogStore,
    config: &ConsoleConfig,
    state: &mut SessionState,
    job_id: &str,
) -> Result<()> {
    state.executing = Some(job_id.to_string());

    // Selecting: show prior runs right away, before the new run completes.
    // A failed history load here is already surfaced as a notice and must
    // not stop the start request.
    state.trigger_phase = TriggerPhase::Selecting;
    if let Err(e) = session::select_job(store, config, state, job_id).await {
        warn!("Pre-start history load failed: {}", e);
        state.status = Some(StatusNotice::warning(e.to_string()));
    }

    // Starting: fire-and-forget from the scheduler's point of view. The
    // call completes when the start is accepted, not when the run ends.
    state.trigger_phase = TriggerPhase::Starting;
    if let Err(source) = executor.start(job_id).await {
        state.trigger_phase = TriggerPhase::Failed;
        state.executing = None;
        let err = MonitorError::ExecutionStart {
            job_id: job_id.to_string(),
            source,
        };
        state.status = Some(StatusNotice::error(err.to_string()));
        return Err(err);
    }

    info!("Start accepted for job {}", job_id);

    // AwaitingSettle: give the scheduler time to flip the running flag and
    // write an initial log line. Not a completion guarantee.
    state.trigger_phase = TriggerPhase::AwaitingSettle;
    sleep(config.settle_delay).await;

    // Refreshing: re-read the catalog (with the enrichment toggle as-is)
    // and, if this job is still the selection, its history. Failures here
    // are recoverable and already recorded as a status notice.
    state.trigger_phase = TriggerPhase::Refreshing;
    if let Err(e) = session::refresh_catalog(registry, store, config, state).await {
        warn!("Post-start catalog refresh failed: {}", e);
        state.status = Some(StatusNotice::warning(e.to_string()));
    }
    if state.selected_job.as_deref() == Some(job_id) {
        if let Err(e) = session::select_job(store, config, state, job_id).await {
            warn!("Post-start history reload failed: {}", e);
            state.status = Some(StatusNotice::warning(e.to_string()));
        }
    }

    if state.status.is_none() {
        state.status = Some(StatusNotice::info(format!(
            "Start accepted for job {}",
            job_id
        )));
    }
    state.executing = None;
    state.trigger_phase = TriggerPhase::Idle;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Severity;
    use crate::test_support::{
        RecordingExecutor, StaticLogStore, StaticRegistry, descriptor, entry, page_of,
    };
    use std::time::Duration;

    fn fast_config() -> ConsoleConfig {
        ConsoleConfig {
            settle_delay: Duration::ZERO,
            ..ConsoleConfig::default()
        }
    }

    #[tokio::test]
    async fn test_successful_trigger_refreshes_catalog_and_history() {
        let registry = StaticRegistry::new(vec![descriptor("a", "Archive", "Acme.Archive")]);
        let executor = RecordingExecutor::accepting();
        let store = StaticLogStore::new().with_page("a", page_of(vec![entry("a", "prior run")]));
        let mut state = SessionState::new();

        run_job(&registry, &executor, &store, &fast_config(), &mut state, "a")
            .await
            .unwrap();

        assert_eq!(executor.started(), vec!["a".to_string()]);
        assert_eq!(registry.calls(), 1);
        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.trigger_phase, TriggerPhase::Idle);
        assert!(state.executing.is_none());

        let notice = state.status.as_ref().unwrap();
        assert_eq!(notice.severity, Severity::Info);
        assert!(notice.text.contains("a"));
    }

    #[tokio::test]
    async fn test_start_failure_ends_failed_without_refresh() {
        let registry = StaticRegistry::new(vec![descriptor("x", "Export", "Acme.Export")]);
        let store = StaticLogStore::new();
        let mut state = SessionState::new();

        // seed a catalog so retention is observable
        session::refresh_catalog(&registry, &store, &fast_config(), &mut state)
            .await
            .unwrap();
        let catalog_before = state.catalog.clone();
        let list_calls_before = registry.calls();

        let executor = RecordingExecutor::rejecting("queue unavailable");
        let err = run_job(&registry, &executor, &store, &fast_config(), &mut state, "x")
            .await
            .unwrap_err();

        assert!(matches!(err, MonitorError::ExecutionStart { ref job_id, .. } if job_id == "x"));
        assert_eq!(state.trigger_phase, TriggerPhase::Failed);
        assert!(state.executing.is_none());
        // no refresh: catalog retained verbatim, registry not re-read
        assert_eq!(state.catalog, catalog_before);
        assert_eq!(registry.calls(), list_calls_before);
        let notice = state.status.unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.text.contains("queue unavailable"));
    }

    #[tokio::test]
    async fn test_trigger_survives_history_load_failure() {
        let registry = StaticRegistry::new(vec![descriptor("a", "Archive", "Acme.Archive")]);
        let executor = RecordingExecutor::accepting();
        let store = StaticLogStore::new().failing_for("a");
        let mut state = SessionState::new();

        run_job(&registry, &executor, &store, &fast_config(), &mut state, "a")
            .await
            .unwrap();

        // start still happened and the workflow completed
        assert_eq!(executor.started(), vec!["a".to_string()]);
        assert_eq!(state.trigger_phase, TriggerPhase::Idle);
        assert!(state.history.is_empty());

        // the run was accepted, so the load failure is only a warning
        let notice = state.status.as_ref().unwrap();
        assert_eq!(notice.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_trigger_reapplies_enrichment_toggle() {
        let registry = StaticRegistry::new(vec![descriptor("a", "Archive", "Acme.Archive")]);
        let executor = RecordingExecutor::accepting();
        let store =
            StaticLogStore::new().with_page("a", page_of(vec![entry("a", "exception: boom")]));
        let mut state = SessionState::new();
        state.check_last_run = true;

        run_job(&registry, &executor, &store, &fast_config(), &mut state, "a")
            .await
            .unwrap();

        assert!(state.catalog.custom[0].last_run_failed);
    }
}
