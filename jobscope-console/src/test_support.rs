//! In-memory fakes and fixture builders shared across the crate's tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use jobscope_core::domain::job::JobDescriptor;
use jobscope_core::domain::log::{HistoryPage, LogEntry};
use jobscope_core::ports::{Executor, JobRegistry, LogStore};

pub fn descriptor(id: &str, name: &str, job_type: &str) -> JobDescriptor {
    JobDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        enabled: true,
        running: false,
        last_execution: None,
        next_execution: None,
        job_type: job_type.to_string(),
    }
}

pub fn entry(job_id: &str, message: &str) -> LogEntry {
    entry_at(job_id, "2024-01-01T10:00:00Z", message)
}

pub fn entry_at(job_id: &str, finished_at: &str, message: &str) -> LogEntry {
    LogEntry {
        job_id: job_id.to_string(),
        finished_at: finished_at
            .parse::<chrono::DateTime<chrono::Utc>>()
            .expect("valid RFC 3339 timestamp"),
        message: message.to_string(),
    }
}

pub fn page_of(entries: Vec<LogEntry>) -> HistoryPage {
    HistoryPage {
        total_count: entries.len() as u64,
        page: 1,
        page_size: entries.len().max(1) as u32,
        entries,
    }
}

/// Registry fake serving a fixed descriptor list, with a call counter.
pub struct StaticRegistry {
    jobs: Vec<JobDescriptor>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticRegistry {
    pub fn new(jobs: Vec<JobDescriptor>) -> Self {
        Self {
            jobs,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            jobs: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobRegistry for StaticRegistry {
    async fn list(&self) -> Result<Vec<JobDescriptor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("registry unreachable");
        }
        Ok(self.jobs.clone())
    }
}

/// Log store fake serving configured pages, recording every request.
///
/// Unknown jobs get an empty page; jobs registered via `failing_for` error
/// on every request.
pub struct StaticLogStore {
    pages: Mutex<HashMap<String, HistoryPage>>,
    fail: HashSet<String>,
    calls: Mutex<Vec<(String, u32, u32)>>,
}

impl StaticLogStore {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
            fail: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(self, job_id: &str, page: HistoryPage) -> Self {
        self.pages.lock().unwrap().insert(job_id.to_string(), page);
        self
    }

    pub fn failing_for(mut self, job_id: &str) -> Self {
        self.fail.insert(job_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, u32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for StaticLogStore {
    async fn history(&self, job_id: &str, page: u32, page_size: u32) -> Result<HistoryPage> {
        self.calls
            .lock()
            .unwrap()
            .push((job_id.to_string(), page, page_size));

        if self.fail.contains(job_id) {
            anyhow::bail!("log store unavailable for {job_id}");
        }

        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(job_id)
            .cloned()
            .unwrap_or_else(|| HistoryPage::empty(page, page_size)))
    }
}

/// Executor fake that records start requests and optionally rejects them.
pub struct RecordingExecutor {
    error: Option<String>,
    started: Mutex<Vec<String>>,
}

impl RecordingExecutor {
    pub fn accepting() -> Self {
        Self {
            error: None,
            started: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            started: Mutex::new(Vec::new()),
        }
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn start(&self, job_id: &str) -> Result<()> {
        if let Some(message) = &self.error {
            anyhow::bail!("{message}");
        }
        self.started.lock().unwrap().push(job_id.to_string());
        Ok(())
    }
}
