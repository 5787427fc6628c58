//! Plain data row types written by output backends.

use tg_core::Point3;
use tg_tour::{TickResult, TourEvent, TourPhase};

/// The agent and tour state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub tick:                 u64,
    pub position:             Point3,
    pub heading:              f32,
    pub phase:                TourPhase,
    pub current_index:        usize,
    pub is_narration_playing: bool,
    pub is_paused:            bool,
    pub is_visitor_near:      bool,
}

impl From<&TickResult> for SnapshotRow {
    fn from(r: &TickResult) -> Self {
        Self {
            tick:                 r.tick,
            position:             r.position,
            heading:              r.heading,
            phase:                r.phase,
            current_index:        r.current_index,
            is_narration_playing: r.is_narration_playing,
            is_paused:            r.is_paused,
            is_visitor_near:      r.is_visitor_near,
        }
    }
}

/// One discrete tour event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Tick the event fired in.  Events raised by commands between ticks
    /// carry the number of the tick that follows them.
    pub tick:   u64,
    pub event:  &'static str,
    pub detail: String,
}

impl EventRow {
    pub fn new(tick: u64, event: &TourEvent) -> Self {
        Self {
            tick,
            event:  event.name(),
            detail: event.detail(),
        }
    }
}
