//! Per-tick steering of the guide agent toward a target point.

use tg_core::geo::step_angle;
use tg_core::{Point3, TourConfig};

use crate::AgentState;

/// Outcome of one movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveStep {
    pub position:           Point3,
    pub heading:            f32,
    pub distance_to_target: f32,
    /// `true` once `distance_to_target <= arrival_epsilon`.
    pub arrived:            bool,
}

/// Moves the agent toward the current target each tick.
///
/// The controller knows nothing about waypoints, narration, or visitors; the
/// sequencer hands it a target point and reads back [`MoveStep::arrived`].
pub struct MovementController {
    /// The agent's pose.  Mutated only by this controller.
    pub state: AgentState,

    speed:           f32,
    rotation_speed:  f32,
    arrival_epsilon: f32,
    rest_position:   Point3,
    rest_heading:    f32,
}

impl MovementController {
    /// Create a controller with the agent at `config.start_position`.
    pub fn new(config: &TourConfig) -> Self {
        Self {
            state:           AgentState::at_rest(config.start_position, config.start_heading),
            speed:           config.speed,
            rotation_speed:  config.rotation_speed,
            arrival_epsilon: config.arrival_epsilon,
            rest_position:   config.start_position,
            rest_heading:    config.start_heading,
        }
    }

    /// Put the agent back at its start pose with no target.
    pub fn reset(&mut self) {
        self.state = AgentState::at_rest(self.rest_position, self.rest_heading);
    }

    #[inline]
    pub fn set_target(&mut self, index: usize) {
        self.state.target_index = Some(index);
    }

    #[inline]
    pub fn clear_target(&mut self) {
        self.state.target_index = None;
    }

    #[inline]
    pub fn arrival_epsilon(&self) -> f32 {
        self.arrival_epsilon
    }

    /// `true` if the agent is already within `arrival_epsilon` of `target`.
    #[inline]
    pub fn is_at(&self, target: Point3) -> bool {
        self.state.position.distance(target) <= self.arrival_epsilon
    }

    /// Advance the agent toward `target` by one tick of `delta_ms`.
    ///
    /// Translation is clamped to the remaining distance, so the agent lands
    /// exactly on `target` instead of overshooting.  The heading eases
    /// toward the direction of travel at no more than `rotation_speed`.
    pub fn step_toward(&mut self, target: Point3, delta_ms: f32) -> MoveStep {
        let from      = self.state.position;
        let remaining = from.distance(target);

        if remaining > self.arrival_epsilon {
            let step = self.speed * delta_ms / 1_000.0;
            self.state.position = if remaining <= step {
                target
            } else {
                from + (target - from) * (step / remaining)
            };
            if let Some(bearing) = from.bearing_to(target) {
                self.turn_to(bearing, delta_ms);
            }
        }

        let distance_to_target = self.state.position.distance(target);
        MoveStep {
            position: self.state.position,
            heading: self.state.heading,
            distance_to_target,
            arrived: distance_to_target <= self.arrival_epsilon,
        }
    }

    /// Turn (without moving) toward `point`, e.g. to face an artwork.
    ///
    /// Returns the new heading.
    pub fn face(&mut self, point: Point3, delta_ms: f32) -> f32 {
        if let Some(bearing) = self.state.position.bearing_to(point) {
            self.turn_to(bearing, delta_ms);
        }
        self.state.heading
    }

    fn turn_to(&mut self, bearing: f32, delta_ms: f32) {
        let max_step = self.rotation_speed * delta_ms / 1_000.0;
        self.state.heading = step_angle(self.state.heading, bearing, max_step);
    }
}
