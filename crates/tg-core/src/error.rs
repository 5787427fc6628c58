//! Engine error type.
//!
//! Every public command returns `TourResult<_>`.  `TourSequencer::tick` never
//! returns an error; the one failure that can happen inside a tick
//! (`NarrationLoadFailed`) is reported as a diagnostic on the tick snapshot.

use thiserror::Error;

use crate::NarrationId;

/// The error taxonomy shared by all `tg-*` crates.
///
/// `Clone + PartialEq` so diagnostics can be copied into snapshots and
/// compared in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    #[error("no waypoint sequence is loaded")]
    NoSequenceLoaded,

    #[error("invalid waypoint sequence: {0}")]
    InvalidSequence(String),

    #[error("waypoint index {index} out of range (sequence has {len} waypoints)")]
    InvalidIndex { index: usize, len: usize },

    #[error("narration {narration} failed to load: {reason}")]
    NarrationLoadFailed {
        narration: NarrationId,
        reason:    String,
    },

    #[error("a tour is in progress; stop it before loading another sequence")]
    TourInProgress,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tg-*` crates.
pub type TourResult<T> = Result<T, TourError>;
