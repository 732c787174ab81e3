//! Core domain types
//!
//! These types mirror what the external scheduler exposes (descriptors and
//! log entries) plus the console-owned projections built from them. The
//! console never writes back to the scheduler's records; descriptors and
//! log entries are read-only inputs.

pub mod job;
pub mod log;
