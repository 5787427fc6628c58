//! A single authored tour point.

use tg_core::{ArtworkId, NarrationId, Point3};

/// One point on a tour.
///
/// A **stop** (`is_transition = false`) is where the agent halts, narrates,
/// dwells for at least `min_duration_ms`, and waits for the visitor.
///
/// A **transition** (`is_transition = true`) is a pass-through point used to
/// shape the path between stops.  The agent never narrates or waits there,
/// so `narration_id` and `min_duration_ms` are ignored on transitions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub position: Point3,

    /// Point the agent turns to face once it has arrived (e.g. the artwork).
    #[cfg_attr(feature = "serde", serde(default))]
    pub look_at: Option<Point3>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub artwork_id: Option<ArtworkId>,

    /// Minimum dwell at this stop in milliseconds, independent of narration.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_duration_ms: u64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub narration_id: Option<NarrationId>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub is_transition: bool,
}

impl Waypoint {
    /// A stop at `position` with no narration and no minimum dwell.
    pub fn stop(position: Point3) -> Self {
        Self {
            position,
            look_at:         None,
            artwork_id:      None,
            min_duration_ms: 0,
            narration_id:    None,
            is_transition:   false,
        }
    }

    /// A pass-through point at `position`.
    pub fn transition(position: Point3) -> Self {
        Self { is_transition: true, ..Self::stop(position) }
    }

    pub fn with_look_at(mut self, look_at: Point3) -> Self {
        self.look_at = Some(look_at);
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<ArtworkId>) -> Self {
        self.artwork_id = Some(artwork.into());
        self
    }

    pub fn with_min_duration_ms(mut self, ms: u64) -> Self {
        self.min_duration_ms = ms;
        self
    }

    pub fn with_narration(mut self, narration: impl Into<NarrationId>) -> Self {
        self.narration_id = Some(narration.into());
        self
    }

    /// The narration the agent should play on arrival, if any.
    ///
    /// Always `None` for transitions.
    #[inline]
    pub fn narration(&self) -> Option<&NarrationId> {
        if self.is_transition { None } else { self.narration_id.as_ref() }
    }

    /// Dwell the agent must observe on arrival; `0` for transitions.
    #[inline]
    pub fn dwell_ms(&self) -> u64 {
        if self.is_transition { 0 } else { self.min_duration_ms }
    }
}
