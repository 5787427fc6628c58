//! Tour time model.
//!
//! # Design
//!
//! The host drives the engine once per rendered frame (or from a fixed
//! 30–60 Hz timer) and passes the frame delta in milliseconds.  The engine
//! never reads a wall clock itself, so a run is fully reproducible from its
//! sequence of deltas.
//!
//! `TourClock` counts ticks and accumulates the deltas that were actually
//! applied.  Paused ticks are counted but add no elapsed time.

use std::fmt;

/// Clamp a host-supplied frame delta to a usable value.
///
/// Negative, NaN, and infinite deltas become `0.0` so a misbehaving frame
/// timer degrades to "nothing happened" instead of corrupting state.
#[inline]
pub fn sanitize_delta_ms(delta_ms: f32) -> f32 {
    if delta_ms.is_finite() && delta_ms > 0.0 {
        delta_ms
    } else {
        0.0
    }
}

/// Tick counter plus accumulated (unpaused) elapsed time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourClock {
    /// Number of `tick()` calls observed.
    pub tick: u64,
    /// Milliseconds of tour time that have elapsed while running.
    pub elapsed_ms: f64,
}

impl TourClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick that advanced tour time by `delta_ms`.
    #[inline]
    pub fn advance(&mut self, delta_ms: f32) {
        self.tick += 1;
        self.elapsed_ms += f64::from(delta_ms);
    }

    /// Count one tick during which tour time stood still (paused or idle).
    #[inline]
    pub fn advance_frozen(&mut self) {
        self.tick += 1;
    }

    /// Elapsed time split into whole minutes and seconds.
    pub fn elapsed_ms_s(&self) -> (u64, u32) {
        let total_secs = (self.elapsed_ms.max(0.0) / 1_000.0) as u64;
        (total_secs / 60, (total_secs % 60) as u32)
    }
}

impl fmt::Display for TourClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms_s();
        write!(f, "T{} ({:02}:{:02})", self.tick, m, s)
    }
}
