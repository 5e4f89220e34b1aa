//! # Gridlock Detection Core
//!
//! Simulates resource-allocation state to decide whether a set of processes
//! is deadlocked, given matrices of allocated, requested (or maximum-need),
//! and available resources.
//!
//! ## Analysis Modes
//!
//! - **SingleRequest**: reduction over outstanding requests, in the style of
//!   a request-graph reduction.
//! - **MultiNeed**: Banker's-algorithm safety check where the outstanding
//!   demand is `max - allocated`.
//!
//! ## Algorithm
//!
//! Both modes run the same work/finish fixed-point reduction: repeatedly find
//! an unfinished process whose demand fits into the work pool, fold its
//! allocation back into the pool, and mark it finished. Processes still
//! unfinished when no pass makes progress are deadlocked.
//!
//! The core performs no I/O; persistence and presentation live in sibling
//! crates.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod detect;
pub mod error;
pub mod snapshot;

pub use detect::{DetectionReport, ReductionStep};
pub use error::{SnapshotError, SnapshotResult};
pub use snapshot::{Mode, ResourceSnapshot};
