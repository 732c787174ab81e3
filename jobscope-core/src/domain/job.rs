//! Job domain types

use serde::{Deserialize, Serialize};

/// A scheduled job as reported by the external scheduler's registry.
///
/// Read-only input; the console never mutates or writes back descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub running: bool,
    pub last_execution: Option<chrono::DateTime<chrono::Utc>>,
    pub next_execution: Option<chrono::DateTime<chrono::Utc>>,
    /// Fully qualified type name of the job implementation. Used only to
    /// classify the job as built-in (platform namespace) or custom.
    pub job_type: String,
}

/// Console-owned projection of a [`JobDescriptor`].
///
/// Recreated wholesale on every catalog refresh. The only field mutated
/// after construction is `last_run_failed`, set by the opt-in last-run
/// enrichment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct JobView {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub running: bool,
    pub last_execution: Option<chrono::DateTime<chrono::Utc>>,
    pub next_execution: Option<chrono::DateTime<chrono::Utc>>,
    /// Whether the most recent execution is believed to have failed.
    /// Defaults to false; unknown is treated as success.
    pub last_run_failed: bool,
    /// The descriptor this view was built from, kept for classification
    /// and display. Read-only.
    pub descriptor: JobDescriptor,
}

impl JobView {
    /// Builds a view from a registry descriptor.
    pub fn from_descriptor(descriptor: JobDescriptor) -> Self {
        Self {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            enabled: descriptor.enabled,
            running: descriptor.running,
            last_execution: descriptor.last_execution,
            next_execution: descriptor.next_execution,
            last_run_failed: false,
            descriptor,
        }
    }
}
