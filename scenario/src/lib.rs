//! # Gridlock Scenario Persistence
//!
//! Serializes resource snapshots to a JSON record and back. The record layout
//! (field names, `"single"`/`"multi"` mode tags) is stable so scenario files
//! can be exchanged with other front ends.
//!
//! All storage failures stay at this boundary: the detection core never sees
//! an I/O or decode error, and callers always receive a clearly identified
//! [`ScenarioError`]. Save failures are additionally logged here, so a caller
//! that chooses to ignore the error still leaves a trace.

#![warn(missing_docs)]

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridlock_core::{Mode, ResourceSnapshot, SnapshotError};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while saving or loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read or written.
    #[error("scenario I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded as JSON.
    #[error("scenario encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The file is not valid JSON or is missing required keys.
    #[error("scenario decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The record's mode tag does not match the matrices it carries.
    #[error("scenario mode `{mode}` requires a `{field}` matrix")]
    MissingMatrix {
        /// The mode tag found in the record.
        mode: String,
        /// The matrix field that mode requires.
        field: &'static str,
    },

    /// The record carries a mode tag this crate does not know.
    #[error("unrecognized scenario mode `{0}`")]
    UnknownMode(String),

    /// The record decoded cleanly but its matrices fail snapshot validation.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

// ============================================================================
// On-Disk Record
// ============================================================================

/// The serialized scenario layout. `requested` and `max` are both optional
/// in the record; which one must be present is decided by `mode`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ScenarioFile {
    mode: String,
    allocated: Vec<Vec<u32>>,
    #[serde(default)]
    requested: Option<Vec<Vec<u32>>>,
    #[serde(default)]
    max: Option<Vec<Vec<u32>>>,
    available: Vec<u32>,
}

impl ScenarioFile {
    fn from_snapshot(snapshot: &ResourceSnapshot) -> Self {
        let (requested, max) = match snapshot.mode() {
            Mode::SingleRequest { requested } => (Some(requested.clone()), None),
            Mode::MultiNeed { max } => (None, Some(max.clone())),
        };
        Self {
            mode: snapshot.mode().tag().to_owned(),
            allocated: snapshot.allocated().to_vec(),
            requested,
            max,
            available: snapshot.available().to_vec(),
        }
    }

    fn into_snapshot(self) -> Result<ResourceSnapshot, ScenarioError> {
        let snapshot = match self.mode.as_str() {
            "single" => {
                let requested = self.requested.ok_or(ScenarioError::MissingMatrix {
                    mode: self.mode,
                    field: "requested",
                })?;
                ResourceSnapshot::single_request(
                    self.allocated,
                    requested,
                    Some(self.available),
                )?
            }
            "multi" => {
                let max = self.max.ok_or(ScenarioError::MissingMatrix {
                    mode: self.mode,
                    field: "max",
                })?;
                ResourceSnapshot::multi_need(self.allocated, max, Some(self.available))?
            }
            _ => return Err(ScenarioError::UnknownMode(self.mode)),
        };
        Ok(snapshot)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Encode a snapshot as a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`ScenarioError::Encode`] if serialization fails.
pub fn to_json_string(snapshot: &ResourceSnapshot) -> Result<String, ScenarioError> {
    serde_json::to_string_pretty(&ScenarioFile::from_snapshot(snapshot))
        .map_err(ScenarioError::Encode)
}

/// Rebuild a snapshot from a JSON scenario string.
///
/// # Errors
///
/// Returns [`ScenarioError::Decode`] for malformed JSON or missing required
/// keys, [`ScenarioError::MissingMatrix`] / [`ScenarioError::UnknownMode`]
/// for a bad mode tag, and [`ScenarioError::Snapshot`] when the matrices do
/// not pass snapshot validation.
pub fn from_json_str(json: &str) -> Result<ResourceSnapshot, ScenarioError> {
    let record: ScenarioFile = serde_json::from_str(json).map_err(ScenarioError::Decode)?;
    record.into_snapshot()
}

/// Write a snapshot to `path` as a JSON scenario file.
///
/// Failures are logged here before being returned, so the error reaches the
/// log even when the caller discards it.
///
/// # Errors
///
/// Returns [`ScenarioError::Io`] or [`ScenarioError::Encode`].
pub fn save_scenario(path: &Path, snapshot: &ResourceSnapshot) -> Result<(), ScenarioError> {
    let result = to_json_string(snapshot)
        .and_then(|json| fs::write(path, json.as_bytes()).map_err(ScenarioError::from));
    if let Err(err) = &result {
        log::error!("error saving scenario to {}: {err}", path.display());
    }
    result
}

/// Read a snapshot back from a JSON scenario file.
///
/// # Errors
///
/// Returns [`ScenarioError::Io`] for a missing or unreadable file, otherwise
/// the same variants as [`from_json_str`].
pub fn load_scenario(path: &Path) -> Result<ResourceSnapshot, ScenarioError> {
    let result = fs::read_to_string(path)
        .map_err(ScenarioError::from)
        .and_then(|json| from_json_str(&json));
    if let Err(err) = &result {
        log::error!("error loading scenario from {}: {err}", path.display());
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
