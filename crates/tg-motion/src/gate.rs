//! The visitor proximity gate.

use tg_core::{AbsentVisitorPolicy, Point3, TourConfig};

/// Answers "is the visitor close enough for the tour to move on?".
///
/// Holds only configuration; every query recomputes the distance from the
/// positions it is given, so a visitor who walks away is seen as far on the
/// very next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityGate {
    pub threshold:      f32,
    pub absent_visitor: AbsentVisitorPolicy,
}

impl ProximityGate {
    pub fn new(threshold: f32, absent_visitor: AbsentVisitorPolicy) -> Self {
        Self { threshold, absent_visitor }
    }

    pub fn from_config(config: &TourConfig) -> Self {
        Self::new(config.proximity_threshold, config.absent_visitor)
    }

    /// `true` when `visitor` is within `threshold` of `agent` (inclusive).
    ///
    /// With no visitor position the answer comes from `absent_visitor`.
    pub fn is_visitor_near(&self, agent: Point3, visitor: Option<Point3>) -> bool {
        match visitor {
            Some(v) => agent.distance(v) <= self.threshold,
            None => self.absent_visitor == AbsentVisitorPolicy::Proceed,
        }
    }
}
