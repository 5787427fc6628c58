//! Sequencer phase, run state, and the per-tick snapshot.

use std::fmt;

use tg_core::{Point3, TourError};

/// Where the tour is in its stop cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourPhase {
    /// Nothing loaded, not started, stopped, or completed.
    #[default]
    Idle,
    /// Walking toward `current_index`.
    Moving,
    /// Arrived; dwell timer and narration running.
    AtWaypoint,
    /// Dwell and narration done; waiting for the visitor to come close.
    AwaitingVisitor,
}

impl TourPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TourPhase::Idle            => "idle",
            TourPhase::Moving          => "moving",
            TourPhase::AtWaypoint      => "at_waypoint",
            TourPhase::AwaitingVisitor => "awaiting_visitor",
        }
    }
}

impl fmt::Display for TourPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sequencer's own mutable state for one tour run.
///
/// Reset to `Default` on `stop()` and on completion.  While `Idle`,
/// `current_index` is the waypoint `play()` will start from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourRunState {
    pub phase: TourPhase,

    pub current_index: usize,

    /// Unpaused time spent in `AtWaypoint`/`AwaitingVisitor` at the current
    /// waypoint.
    pub elapsed_at_waypoint_ms: f64,

    pub is_narration_playing: bool,

    /// Last answer of the proximity gate.
    pub is_visitor_near: bool,

    /// The current waypoint's narration finish edge has been observed.
    pub narration_done: bool,

    pub paused: bool,
}

/// Snapshot returned by every `tick()`.
#[derive(Clone, Debug, PartialEq)]
pub struct TickResult {
    /// Ordinal of this tick, counting from 1.
    pub tick:                 u64,
    pub position:             Point3,
    pub heading:              f32,
    pub phase:                TourPhase,
    pub current_index:        usize,
    /// Narration is audible.  `false` while the track is held by a pause.
    pub is_narration_playing: bool,
    pub is_paused:            bool,
    pub is_visitor_near:      bool,
    /// Non-fatal problem raised during this tick (`NarrationLoadFailed`).
    pub diagnostic:           Option<TourError>,
}
