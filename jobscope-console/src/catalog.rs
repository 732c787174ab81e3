//! Job catalog
//!
//! Maps raw registry descriptors into console view models and partitions
//! them into operator-authored (custom) and platform (built-in) jobs.
//! The partition is a pure function of the descriptors and is recomputed
//! wholesale on every refresh, never updated incrementally.

use jobscope_core::domain::job::{JobDescriptor, JobView};

/// The job catalog, split by origin. Name order is preserved within each
/// bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCatalog {
    pub custom: Vec<JobView>,
    pub builtin: Vec<JobView>,
}

impl JobCatalog {
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.builtin.is_empty()
    }

    pub fn len(&self) -> usize {
        self.custom.len() + self.builtin.len()
    }

    /// Iterates over every job, custom bucket first.
    pub fn jobs(&self) -> impl Iterator<Item = &JobView> {
        self.custom.iter().chain(self.builtin.iter())
    }

    /// Looks up a job by identifier.
    pub fn find(&self, job_id: &str) -> Option<&JobView> {
        self.jobs().find(|job| job.id == job_id)
    }
}

/// Returns true if the descriptor's type name places the job in the
/// scheduler platform's namespace.
///
/// Purely a prefix test on the type name; no other descriptor field
/// participates. The comparison is case-insensitive.
pub fn is_builtin(descriptor: &JobDescriptor, prefix: &str) -> bool {
    !descriptor.job_type.is_empty()
        && descriptor
            .job_type
            .to_lowercase()
            .starts_with(&prefix.to_lowercase())
}

/// Builds view models from registry descriptors, sorted by name.
///
/// Ordering is ordinal and case-sensitive. Every view starts with
/// `last_run_failed = false`; the last-run enrichment pass is opt-in and
/// runs separately.
pub fn build_views(descriptors: Vec<JobDescriptor>) -> Vec<JobView> {
    let mut views: Vec<JobView> = descriptors.into_iter().map(JobView::from_descriptor).collect();
    views.sort_by(|a, b| a.name.cmp(&b.name));
    views
}

/// Partitions name-sorted views into custom and built-in buckets,
/// preserving order within each.
pub fn partition(views: Vec<JobView>, prefix: &str) -> JobCatalog {
    let mut catalog = JobCatalog::default();

    for view in views {
        if is_builtin(&view.descriptor, prefix) {
            catalog.builtin.push(view);
        } else {
            catalog.custom.push(view);
        }
    }

    catalog
}
