//! Jobscope Console
//!
//! The monitoring and execution-driving logic of the scheduler console.
//!
//! Architecture:
//! - Catalog: builds the enriched, queryable job view from the registry
//! - Enrich: opt-in last-run outcome annotation from the log store
//! - History: on-demand, capped retrieval of a job's execution log
//! - Trigger: the run-and-observe workflow around the executor
//! - Filter/Export: substring filtering, keyword highlighting and flat-text
//!   export of a loaded history
//! - Session: the caller-owned view state every operation reads and writes
//!
//! All scheduler access goes through the `jobscope-core` ports; this crate
//! contains no transport code.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod enrich;
pub mod error;
pub mod export;
pub mod filter;
pub mod history;
pub mod session;
pub mod trigger;

pub use config::ConsoleConfig;
pub use error::{MonitorError, Result};
pub use session::{SessionState, Severity, StatusNotice};
pub use trigger::TriggerPhase;

#[cfg(test)]
pub(crate) mod test_support;
