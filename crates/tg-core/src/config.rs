//! Tour playback configuration.

use crate::{Point3, TourError, TourResult};

/// What the proximity gate answers when the host supplies no visitor
/// position for a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbsentVisitorPolicy {
    /// Treat a missing visitor as "near" so the tour self-drives
    /// (unattended demo mode).
    #[default]
    Proceed,
    /// Treat a missing visitor as "far"; the tour waits.
    Wait,
}

/// What happens to narration audio while the tour is paused.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PausePolicy {
    /// Pause the backend track and resume it on `resume()`.
    #[default]
    PauseNarration,
    /// Let the track keep playing.  Its completion is picked up after
    /// `resume()`.
    ContinueNarration,
}

/// Top-level playback configuration.
///
/// Typically loaded from a JSON/TOML file by the host and passed to
/// `TourBuilder`.  All distances are scene units, all speeds per second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TourConfig {
    /// Translation speed of the agent, units/s.  Default: 2.0.
    pub speed: f32,

    /// Maximum turn rate of the agent, radians/s.  Default: 3.0.
    pub rotation_speed: f32,

    /// Distance at which the agent counts as arrived.  Default: 0.1.
    pub arrival_epsilon: f32,

    /// Visitor-to-agent distance at or below which the visitor is "near".
    /// Default: 2.0.
    pub proximity_threshold: f32,

    /// Where the agent stands before a tour starts and after `stop()`.
    pub start_position: Point3,

    /// Initial yaw of the agent, radians.
    pub start_heading: f32,

    pub absent_visitor: AbsentVisitorPolicy,

    pub pause_policy: PausePolicy,

    /// When `false` the tour holds in `AwaitingVisitor` until an explicit
    /// `skip_forward()`, even with the visitor near.
    pub auto_advance: bool,

    /// Restart from the first waypoint instead of completing.
    pub looping: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            speed:               2.0,
            rotation_speed:      3.0,
            arrival_epsilon:     0.1,
            proximity_threshold: 2.0,
            start_position:      Point3::new(0.0, 0.5, 0.0),
            start_heading:       0.0,
            absent_visitor:      AbsentVisitorPolicy::Proceed,
            pause_policy:        PausePolicy::PauseNarration,
            auto_advance:        true,
            looping:             false,
        }
    }
}

impl TourConfig {
    /// Reject values the movement and gating maths cannot work with.
    pub fn validate(&self) -> TourResult<()> {
        positive("speed", self.speed)?;
        positive("rotation_speed", self.rotation_speed)?;
        positive("arrival_epsilon", self.arrival_epsilon)?;
        if !self.proximity_threshold.is_finite() || self.proximity_threshold < 0.0 {
            return Err(TourError::Config(format!(
                "proximity_threshold must be finite and >= 0, got {}",
                self.proximity_threshold
            )));
        }
        if !self.start_position.is_finite() || !self.start_heading.is_finite() {
            return Err(TourError::Config("start pose must be finite".into()));
        }
        Ok(())
    }
}

fn positive(what: &str, value: f32) -> TourResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TourError::Config(format!("{what} must be finite and > 0, got {value}")))
    }
}
