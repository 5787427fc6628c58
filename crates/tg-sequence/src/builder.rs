//! Fluent builder for constructing a [`WaypointSequence`].

use tg_core::{Point3, TourResult};

use crate::{Waypoint, WaypointSequence};

/// Fluent builder for [`WaypointSequence`].
///
/// # Example
///
/// ```rust,ignore
/// let seq = SequenceBuilder::new("Renaissance Masters")
///     .theme("renaissance")
///     .waypoint(Waypoint::stop(p0).with_narration("intro").with_min_duration_ms(3_000))
///     .waypoint(Waypoint::stop(p1).with_artwork("mona-lisa"))
///     .with_transitions()
///     .build()?;
/// ```
pub struct SequenceBuilder {
    name:        String,
    theme:       Option<String>,
    waypoints:   Vec<Waypoint>,
    transitions: bool,
}

impl SequenceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            theme:       None,
            waypoints:   Vec::new(),
            transitions: false,
        }
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Append one waypoint.
    pub fn waypoint(mut self, waypoint: Waypoint) -> Self {
        self.waypoints.push(waypoint);
        self
    }

    /// Append several waypoints in order.
    pub fn waypoints(mut self, waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        self.waypoints.extend(waypoints);
        self
    }

    /// Insert a transition at the midpoint between every pair of consecutive
    /// stops when the sequence is built.
    ///
    /// Each inserted transition looks at the following stop's `look_at`, so
    /// the agent starts turning toward the next artwork mid-walk.  Pairs that
    /// already have a transition on either side are left alone.
    pub fn with_transitions(mut self) -> Self {
        self.transitions = true;
        self
    }

    /// Validate and return the sequence.
    pub fn build(self) -> TourResult<WaypointSequence> {
        let waypoints = if self.transitions {
            insert_transitions(self.waypoints)
        } else {
            self.waypoints
        };
        WaypointSequence::new(self.name, self.theme, waypoints)
    }
}

fn insert_transitions(waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
    let mut out: Vec<Waypoint> = Vec::with_capacity(waypoints.len() * 2);
    let mut iter = waypoints.into_iter().peekable();
    while let Some(w) = iter.next() {
        let bridge = match iter.peek() {
            Some(next) if !w.is_transition && !next.is_transition => {
                let mid: Point3 = w.position.lerp(next.position, 0.5);
                let mut t = Waypoint::transition(mid);
                t.look_at = next.look_at;
                Some(t)
            }
            _ => None,
        };
        out.push(w);
        out.extend(bridge);
    }
    out
}
