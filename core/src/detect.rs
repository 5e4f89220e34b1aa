//! The work/finish fixed-point reduction.
//!
//! One detection run owns local `work` and `finish` buffers and sweeps the
//! processes in ascending index order, up to `2 * P` passes. A process whose
//! demand fits into `work` releases its whole allocation back into the pool
//! and is marked finished; a release is visible to later processes within
//! the same sweep. The run stops early as soon as a full sweep makes no
//! progress. Processes still unfinished at the end are deadlocked.
//!
//! The pass cap is a safety bound only: each productive pass finishes at
//! least one process, so `P` passes always suffice.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::snapshot::{Mode, ResourceSnapshot};

// ============================================================================
// Report Types
// ============================================================================

/// One process successfully reduced out of the system.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReductionStep {
    /// Index of the process that finished.
    pub process: usize,
    /// The demand vector that was evaluated against the pool. Signed: in
    /// MultiNeed mode a corrupt `max < allocated` row yields negative
    /// components, which the reduction deliberately keeps.
    pub demand: Vec<i64>,
    /// The allocation row released back into the pool.
    pub released: Vec<u32>,
    /// Available pool immediately before the release. Wider than the input
    /// entries because the pool accumulates every released allocation.
    pub work_before: Vec<u64>,
    /// Available pool immediately after the release.
    pub work_after: Vec<u64>,
    /// Human-readable summary of the step.
    pub description: String,
}

/// The outcome of one detection run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DetectionReport {
    /// True iff at least one process never finished.
    pub is_deadlock: bool,
    /// Ascending indices of the processes that never finished.
    pub deadlocked: Vec<usize>,
    /// One step per finished process, in discovery order.
    pub steps: Vec<ReductionStep>,
}

// ============================================================================
// Detection
// ============================================================================

impl ResourceSnapshot {
    /// Run the fixed-point reduction and report which processes, if any,
    /// are deadlocked.
    ///
    /// Pure function of the snapshot: repeated calls return identical
    /// reports and the snapshot is never mutated.
    ///
    /// In MultiNeed mode, demand is computed as `max - allocated` in signed
    /// arithmetic. A row with `max < allocated` describes a corrupt
    /// snapshot; its negative demand components compare as trivially
    /// satisfiable, so such a process always finishes. This matches the
    /// permissive behavior callers already rely on and is not treated as an
    /// error.
    ///
    /// The work pool accumulates in `u64`, so per-resource allocation sums
    /// past `u32::MAX` cannot overflow a run.
    pub fn detect_deadlock(&self) -> DetectionReport {
        let num_processes = self.num_processes();
        let mut work: Vec<u64> = self.available().iter().map(|&a| u64::from(a)).collect();
        let mut finish = vec![false; num_processes];
        let mut steps = Vec::new();

        let max_passes = num_processes * 2;
        let mut pass = 0;
        let mut progress = true;
        while progress && pass < max_passes {
            progress = false;
            pass += 1;
            log::trace!("reduction pass {pass}");

            for i in 0..num_processes {
                if finish[i] {
                    continue;
                }

                let demand = self.demand_of(i);
                let fits = demand
                    .iter()
                    .zip(work.iter())
                    .all(|(&d, &w)| d < 0 || d as u64 <= w);
                if !fits {
                    continue;
                }

                let work_before = work.clone();
                let released = self.allocated()[i].clone();
                for (w, &a) in work.iter_mut().zip(released.iter()) {
                    // The pool only grows; saturate so a pathological sum
                    // can never panic a run.
                    *w = w.saturating_add(u64::from(a));
                }
                log::debug!("process P{i} finished in pass {pass}, pool now {work:?}");

                steps.push(ReductionStep {
                    process: i,
                    demand,
                    released,
                    work_before,
                    work_after: work.clone(),
                    description: format!("Process P{i} can proceed and release resources."),
                });
                finish[i] = true;
                progress = true;
            }
        }

        let deadlocked: Vec<usize> = (0..num_processes).filter(|&i| !finish[i]).collect();
        DetectionReport { is_deadlock: !deadlocked.is_empty(), deadlocked, steps }
    }

    /// Demand vector of process `i`: the request row in SingleRequest mode,
    /// `max - allocated` in MultiNeed mode.
    fn demand_of(&self, i: usize) -> Vec<i64> {
        match self.mode() {
            Mode::SingleRequest { requested } => {
                requested[i].iter().map(|&r| i64::from(r)).collect()
            }
            Mode::MultiNeed { max } => max[i]
                .iter()
                .zip(self.allocated()[i].iter())
                .map(|(&m, &a)| i64::from(m) - i64::from(a))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
