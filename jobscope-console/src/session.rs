//! Session view state and state-changing operations
//!
//! One operator session owns exactly one [`SessionState`]. Every operation
//! takes the state explicitly and records its outcome there; there is no
//! ambient mutable state and no hidden re-render trigger. The rendering
//! layer reads the state after each operation returns.

use jobscope_core::domain::log::{HistoryPage, LogEntry};
use jobscope_core::ports::{JobRegistry, LogStore};
use tracing::{debug, info};

use crate::catalog::{JobCatalog, build_views, partition};
use crate::config::ConsoleConfig;
use crate::enrich::enrich_last_run;
use crate::error::{MonitorError, Result};
use crate::history::load_history;
use crate::trigger::TriggerPhase;

/// Severity of a user-visible status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A user-visible status message. Failures degrade to one of these; nothing
/// in the console is fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotice {
    pub text: String,
    pub severity: Severity,
}

impl StatusNotice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// The complete view state of one operator session.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current job catalog, partitioned by origin. Preserved verbatim when
    /// a refresh fails.
    pub catalog: JobCatalog,

    /// Whether catalog refreshes also run the last-run enrichment pass.
    /// Off by default; enrichment costs one log-store call per job.
    pub check_last_run: bool,

    /// The at-most-one selected job. Selection is the sole trigger for
    /// loading history.
    pub selected_job: Option<String>,

    /// Loaded history for the selected job, most recent entry first.
    pub history: Vec<LogEntry>,
    /// Total entries the store reports for the selected job.
    pub history_total: u64,

    /// The at-most-one entry open in the detail view. Independent of job
    /// selection.
    pub detail_entry: Option<LogEntry>,

    /// Latest user-visible status, if any.
    pub status: Option<StatusNotice>,

    /// Loading flags, for the rendering layer to disable re-entrant
    /// actions while an operation is in flight.
    pub catalog_loading: bool,
    pub history_loading: bool,
    /// Identifier of the job with a trigger in flight, if any.
    pub executing: Option<String>,

    /// Where the in-flight trigger currently is.
    pub trigger_phase: TriggerPhase,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rebuilds the catalog from the registry, re-applying the enrichment
/// toggle.
///
/// On registry failure the previous catalog is preserved untouched and an
/// error notice is set; the error is also returned so callers can react.
pub async fn refresh_catalog(
    registry: &dyn JobRegistry,
    store: &dyn LogStore,
    config: &ConsoleConfig,
    state: &mut SessionState,
) -> Result<()> {
    state.catalog_loading = true;

    let descriptors = match registry.list().await {
        Ok(descriptors) => descriptors,
        Err(source) => {
            state.catalog_loading = false;
            let err = MonitorError::CatalogLoad { source };
            state.status = Some(StatusNotice::error(err.to_string()));
            return Err(err);
        }
    };

    let mut views = build_views(descriptors);
    if state.check_last_run {
        enrich_last_run(store, &mut views).await;
    }

    state.catalog = partition(views, &config.system_namespace_prefix);
    state.catalog_loading = false;
    state.status = None;

    info!("Catalog refreshed: {} job(s)", state.catalog.len());
    Ok(())
}

/// Selects a job and loads its history.
///
/// The previously displayed history is cleared before the load and stays
/// empty if the load fails, so stale entries are never shown under a
/// "loaded" state. The finished load is applied through [`apply_history`],
/// which drops it if the selection has moved on in the meantime.
pub async fn select_job(
    store: &dyn LogStore,
    config: &ConsoleConfig,
    state: &mut SessionState,
    job_id: &str,
) -> Result<()> {
    state.selected_job = Some(job_id.to_string());
    state.history.clear();
    state.history_total = 0;
    state.history_loading = true;

    let result = load_history(store, job_id, 1, config.history_page_size).await;
    state.history_loading = false;

    match result {
        Ok(page) => {
            apply_history(state, job_id, page);
            Ok(())
        }
        Err(err) => {
            state.status = Some(StatusNotice::error(err.to_string()));
            Err(err)
        }
    }
}

/// Applies a finished history load to the state.
///
/// The staleness guard: the page is applied only while `job_id` is still
/// the selected job, so an out-of-order completion for a superseded
/// selection never overwrites newer state. Returns whether the page was
/// applied.
pub fn apply_history(state: &mut SessionState, job_id: &str, page: HistoryPage) -> bool {
    if state.selected_job.as_deref() != Some(job_id) {
        debug!("Discarding stale history result for job {}", job_id);
        return false;
    }

    state.history = page.entries;
    state.history_total = page.total_count;
    true
}

/// Opens one entry in the detail view, replacing any previously open one.
pub fn open_detail(state: &mut SessionState, entry: LogEntry) {
    state.detail_entry = Some(entry);
}

/// Closes the detail view.
pub fn close_detail(state: &mut SessionState) {
    state.detail_entry = None;
}
