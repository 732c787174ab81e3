//! Jobscope Core
//!
//! Core types and abstractions for the Jobscope scheduler console.
//!
//! This crate contains:
//! - Domain types: the entities the console works with (JobDescriptor,
//!   JobView, LogEntry, HistoryPage)
//! - Ports: capability traits for the external scheduler subsystem
//!   (job registry, executor, log store, file sink)

pub mod domain;
pub mod ports;
