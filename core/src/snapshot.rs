//! Resource-allocation snapshots.
//!
//! A [`ResourceSnapshot`] is the immutable input to one detection run: the
//! allocation matrix, the per-mode demand matrix, and the available pool.
//! All shapes are validated once at construction; the snapshot is read-only
//! afterwards, so detection never has to re-check a row length.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{SnapshotError, SnapshotResult};

// ============================================================================
// Analysis Mode
// ============================================================================

/// Which demand matrix drives the reduction.
///
/// The mode is fixed at construction by choosing one of the two snapshot
/// constructors; a snapshot with neither matrix is unrepresentable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Reduce over outstanding requests: `requested[i][j]` units of resource
    /// `j` that process `i` is currently waiting to acquire.
    SingleRequest {
        /// Request matrix, same shape as the allocation matrix.
        requested: Vec<Vec<u32>>,
    },
    /// Banker's-style safety check: `max[i][j]` is the maximum units of
    /// resource `j` process `i` may ever hold; demand is `max - allocated`.
    MultiNeed {
        /// Maximum-claim matrix, same shape as the allocation matrix.
        max: Vec<Vec<u32>>,
    },
}

impl Mode {
    /// Short lowercase tag for this mode, used by the scenario record.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SingleRequest { .. } => "single",
            Self::MultiNeed { .. } => "multi",
        }
    }
}

// ============================================================================
// Resource Snapshot
// ============================================================================

/// Validated, immutable resource-allocation state for P processes and R
/// resource types.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResourceSnapshot {
    allocated: Vec<Vec<u32>>,
    mode: Mode,
    available: Vec<u32>,
    num_processes: usize,
    num_resources: usize,
}

impl ResourceSnapshot {
    /// Build a SingleRequest snapshot from an allocation matrix, a request
    /// matrix of the same shape, and an optional available pool.
    ///
    /// `available` defaults to an all-zero pool when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidDimensions`] when `allocated` is empty
    /// or ragged, when `requested` does not match its shape, or when
    /// `available` does not have one entry per resource type.
    pub fn single_request(
        allocated: Vec<Vec<u32>>,
        requested: Vec<Vec<u32>>,
        available: Option<Vec<u32>>,
    ) -> SnapshotResult<Self> {
        Self::build(allocated, Mode::SingleRequest { requested }, available)
    }

    /// Build a MultiNeed snapshot from an allocation matrix, a maximum-claim
    /// matrix of the same shape, and an optional available pool.
    ///
    /// `available` defaults to an all-zero pool when `None`. Rows where
    /// `max < allocated` are accepted; see
    /// [`detect_deadlock`](Self::detect_deadlock) for how negative demand is
    /// treated.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidDimensions`] under the same conditions
    /// as [`single_request`](Self::single_request).
    pub fn multi_need(
        allocated: Vec<Vec<u32>>,
        max: Vec<Vec<u32>>,
        available: Option<Vec<u32>>,
    ) -> SnapshotResult<Self> {
        Self::build(allocated, Mode::MultiNeed { max }, available)
    }

    fn build(
        allocated: Vec<Vec<u32>>,
        mode: Mode,
        available: Option<Vec<u32>>,
    ) -> SnapshotResult<Self> {
        let num_processes = allocated.len();
        let num_resources = allocated.first().map_or(0, Vec::len);
        if num_processes == 0 || num_resources == 0 {
            return Err(SnapshotError::InvalidDimensions("allocated resources"));
        }
        // Every row must be exactly R wide; a ragged row would index out of
        // bounds during the sweep.
        if allocated.iter().any(|row| row.len() != num_resources) {
            return Err(SnapshotError::InvalidDimensions("allocated resources"));
        }

        let (demand, what) = match &mode {
            Mode::SingleRequest { requested } => (requested, "requested resources"),
            Mode::MultiNeed { max } => (max, "max resources"),
        };
        if demand.len() != num_processes
            || demand.iter().any(|row| row.len() != num_resources)
        {
            return Err(SnapshotError::InvalidDimensions(what));
        }

        let available = match available {
            Some(available) => {
                if available.len() != num_resources {
                    return Err(SnapshotError::InvalidDimensions("available resources"));
                }
                available
            }
            None => vec![0; num_resources],
        };

        Ok(Self { allocated, mode, available, num_processes, num_resources })
    }

    /// Number of processes (P).
    #[inline]
    pub fn num_processes(&self) -> usize {
        self.num_processes
    }

    /// Number of resource types (R).
    #[inline]
    pub fn num_resources(&self) -> usize {
        self.num_resources
    }

    /// The analysis mode and its demand matrix.
    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The allocation matrix.
    #[inline]
    pub fn allocated(&self) -> &[Vec<u32>] {
        &self.allocated
    }

    /// The available pool.
    #[inline]
    pub fn available(&self) -> &[u32] {
        &self.available
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_allocated() {
        let err = ResourceSnapshot::multi_need(vec![], vec![], None).unwrap_err();
        assert_eq!(err, SnapshotError::InvalidDimensions("allocated resources"));

        let err = ResourceSnapshot::multi_need(vec![vec![]], vec![vec![]], None).unwrap_err();
        assert_eq!(err, SnapshotError::InvalidDimensions("allocated resources"));
    }

    #[test]
    fn rejects_ragged_allocated() {
        let err = ResourceSnapshot::multi_need(
            vec![vec![1, 2], vec![3]],
            vec![vec![1, 2], vec![3, 4]],
            None,
        )
        .unwrap_err();
        assert_eq!(err, SnapshotError::InvalidDimensions("allocated resources"));
    }

    #[test]
    fn rejects_mismatched_requested_shape() {
        // 2x3 allocated against 2x2 requested.
        let err = ResourceSnapshot::single_request(
            vec![vec![0, 1, 0], vec![2, 0, 0]],
            vec![vec![0, 1], vec![2, 0]],
            None,
        )
        .unwrap_err();
        assert_eq!(err, SnapshotError::InvalidDimensions("requested resources"));
    }

    #[test]
    fn rejects_mismatched_max_rows() {
        let err = ResourceSnapshot::multi_need(
            vec![vec![0, 1], vec![2, 0]],
            vec![vec![0, 1]],
            None,
        )
        .unwrap_err();
        assert_eq!(err, SnapshotError::InvalidDimensions("max resources"));
    }

    #[test]
    fn rejects_short_available() {
        let err = ResourceSnapshot::multi_need(
            vec![vec![0, 1, 0]],
            vec![vec![0, 1, 0]],
            Some(vec![1, 2]),
        )
        .unwrap_err();
        assert_eq!(err, SnapshotError::InvalidDimensions("available resources"));
    }

    #[test]
    fn available_defaults_to_zero_pool() {
        let snap = ResourceSnapshot::multi_need(
            vec![vec![1, 1], vec![0, 2]],
            vec![vec![1, 1], vec![0, 2]],
            None,
        )
        .unwrap();
        assert_eq!(snap.available(), &[0, 0]);
        assert_eq!(snap.num_processes(), 2);
        assert_eq!(snap.num_resources(), 2);
    }

    #[test]
    fn mode_tags() {
        let single = ResourceSnapshot::single_request(
            vec![vec![0]],
            vec![vec![0]],
            None,
        )
        .unwrap();
        assert_eq!(single.mode().tag(), "single");

        let multi = ResourceSnapshot::multi_need(vec![vec![0]], vec![vec![0]], None).unwrap();
        assert_eq!(multi.mode().tag(), "multi");
    }
}
