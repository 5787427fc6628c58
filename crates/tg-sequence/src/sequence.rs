//! `WaypointSequence` — the validated, immutable description of one tour.

use std::ops::Index;

use tg_core::{TourError, TourResult};

use crate::Waypoint;

/// An ordered, read-only list of waypoints plus tour metadata.
///
/// The waypoint list is private and there is no mutating accessor: indices
/// are stable for as long as the sequence exists.  To change a tour, build a
/// new sequence and load it after stopping the current run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSequence", into = "RawSequence"))]
pub struct WaypointSequence {
    name:      String,
    theme:     Option<String>,
    waypoints: Vec<Waypoint>,
}

impl WaypointSequence {
    /// Validate and wrap `waypoints`.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidSequence`] if the list is empty, contains only
    /// transitions, or has a non-finite coordinate.
    pub fn new(
        name:      impl Into<String>,
        theme:     Option<String>,
        waypoints: Vec<Waypoint>,
    ) -> TourResult<Self> {
        let seq = Self { name: name.into(), theme, waypoints };
        seq.validate()?;
        Ok(seq)
    }

    /// Re-check the sequence invariants.
    pub fn validate(&self) -> TourResult<()> {
        if self.waypoints.is_empty() {
            return Err(TourError::InvalidSequence(format!(
                "sequence {:?} has no waypoints",
                self.name
            )));
        }
        if self.waypoints.iter().all(|w| w.is_transition) {
            return Err(TourError::InvalidSequence(format!(
                "sequence {:?} has only transition waypoints",
                self.name
            )));
        }
        for (i, w) in self.waypoints.iter().enumerate() {
            let look_ok = w.look_at.is_none_or(|p| p.is_finite());
            if !w.position.is_finite() || !look_ok {
                return Err(TourError::InvalidSequence(format!(
                    "waypoint {i} has a non-finite coordinate"
                )));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Number of waypoints (stops and transitions).  Always ≥ 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of stops (non-transition waypoints).
    pub fn stop_count(&self) -> usize {
        self.waypoints.iter().filter(|w| !w.is_transition).count()
    }

    /// Sum of the minimum dwell of every waypoint from `from` to the end.
    ///
    /// A lower bound on the remaining tour time, ignoring travel and
    /// narration length.  Saturates at `u64::MAX`.
    pub fn min_duration_from(&self, from: usize) -> u64 {
        self.waypoints
            .iter()
            .skip(from)
            .map(Waypoint::dwell_ms)
            .fold(0u64, |acc, ms| acc.saturating_add(ms))
    }

    /// Length of the polyline through every waypoint, transitions included,
    /// from the first waypoint to the last.
    pub fn path_length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|leg| leg[0].position.distance(leg[1].position))
            .sum()
    }
}

impl Index<usize> for WaypointSequence {
    type Output = Waypoint;
    #[inline]
    fn index(&self, index: usize) -> &Waypoint {
        &self.waypoints[index]
    }
}

impl<'a> IntoIterator for &'a WaypointSequence {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;
    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

// ── Validating serde shim ─────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSequence {
    name:      String,
    #[serde(default)]
    theme:     Option<String>,
    waypoints: Vec<Waypoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSequence> for WaypointSequence {
    type Error = TourError;
    fn try_from(raw: RawSequence) -> Result<Self, TourError> {
        WaypointSequence::new(raw.name, raw.theme, raw.waypoints)
    }
}

#[cfg(feature = "serde")]
impl From<WaypointSequence> for RawSequence {
    fn from(seq: WaypointSequence) -> Self {
        RawSequence { name: seq.name, theme: seq.theme, waypoints: seq.waypoints }
    }
}
