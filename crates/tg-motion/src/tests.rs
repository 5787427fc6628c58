//! Unit tests for tg-motion.

use tg_core::{Point3, TourConfig};

use crate::{MovementController, ProximityGate};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(speed: f32) -> TourConfig {
    TourConfig {
        speed,
        start_position: Point3::ORIGIN,
        ..TourConfig::default()
    }
}

fn controller(speed: f32) -> MovementController {
    MovementController::new(&config(speed))
}

// ── MovementController ────────────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn starts_at_rest_pose() {
        let c = controller(2.0);
        assert_eq!(c.state.position, Point3::ORIGIN);
        assert_eq!(c.state.target_index, None);
    }

    #[test]
    fn single_step_moves_speed_times_dt() {
        let mut c = controller(2.0);
        let step = c.step_toward(Point3::new(0.0, 0.0, 10.0), 500.0);
        assert!((step.position.z - 1.0).abs() < 1e-5);
        assert!((step.distance_to_target - 9.0).abs() < 1e-5);
        assert!(!step.arrived);
    }

    #[test]
    fn never_overshoots() {
        let mut c = controller(100.0);
        let target = Point3::new(3.0, 0.0, 4.0);
        let step = c.step_toward(target, 1_000.0);
        assert_eq!(step.position, target);
        assert!(step.arrived);
        assert_eq!(step.distance_to_target, 0.0);
    }

    #[test]
    fn arrives_within_ceil_distance_over_step() {
        for &(speed, dt, target) in &[
            (2.0_f32, 100.0_f32, Point3::new(0.0, 0.0, 10.0)),
            (1.5, 16.0, Point3::new(-7.0, 1.0, 3.0)),
            (3.0, 33.3, Point3::new(12.0, 0.0, -5.0)),
        ] {
            let mut c = controller(speed);
            let distance = c.state.position.distance(target);
            let step_len = speed * dt / 1_000.0;
            let bound = (distance / step_len).ceil() as usize;

            let mut ticks = 0;
            let mut last_distance = f32::MAX;
            loop {
                let s = c.step_toward(target, dt);
                ticks += 1;
                // Monotone approach: no oscillation around the target.
                assert!(s.distance_to_target <= last_distance);
                last_distance = s.distance_to_target;
                if s.arrived {
                    break;
                }
                assert!(ticks <= bound, "not arrived after {ticks} ticks (bound {bound})");
            }
            assert!(ticks <= bound);
        }
    }

    #[test]
    fn already_within_epsilon_does_not_move() {
        let mut c = controller(2.0);
        let target = Point3::new(0.05, 0.0, 0.0);
        let s = c.step_toward(target, 100.0);
        assert!(s.arrived);
        assert_eq!(s.position, Point3::ORIGIN);
        assert!(c.is_at(target));
    }

    #[test]
    fn heading_eases_instead_of_snapping() {
        // Default rotation_speed = 3 rad/s → 0.3 rad per 100 ms tick.
        let mut c = controller(0.5);
        let s = c.step_toward(Point3::new(10.0, 0.0, 0.0), 100.0);
        assert!((s.heading - 0.3).abs() < 1e-5, "heading {}", s.heading);

        for _ in 0..10 {
            c.step_toward(Point3::new(10.0, 0.0, 0.0), 100.0);
        }
        assert!((c.state.heading - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn face_turns_in_place() {
        let mut c = controller(2.0);
        let before = c.state.position;
        let h = c.face(Point3::new(-5.0, 0.0, 0.0), 1_000.0);
        assert!((h + FRAC_PI_2).abs() < 1e-5);
        assert_eq!(c.state.position, before);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut c = controller(2.0);
        let s = c.step_toward(Point3::new(0.0, 0.0, 5.0), 0.0);
        assert_eq!(s.position, Point3::ORIGIN);
        assert_eq!(s.heading, 0.0);
    }

    #[test]
    fn reset_restores_rest_pose() {
        let mut c = controller(2.0);
        c.set_target(3);
        c.step_toward(Point3::new(4.0, 0.0, 0.0), 1_000.0);
        c.reset();
        assert_eq!(c.state.position, Point3::ORIGIN);
        assert_eq!(c.state.heading, 0.0);
        assert_eq!(c.state.target_index, None);
    }
}

// ── ProximityGate ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate {
    use tg_core::AbsentVisitorPolicy;

    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let g = ProximityGate::new(1.0, AbsentVisitorPolicy::Proceed);
        let agent = Point3::ORIGIN;
        assert!(g.is_visitor_near(agent, Some(Point3::new(1.0, 0.0, 0.0))));
        assert!(g.is_visitor_near(agent, Some(Point3::new(0.5, 0.0, 0.5))));
        assert!(!g.is_visitor_near(agent, Some(Point3::new(5.0, 0.0, 0.0))));
    }

    #[test]
    fn stateless_between_queries() {
        let g = ProximityGate::new(1.0, AbsentVisitorPolicy::Proceed);
        let agent = Point3::ORIGIN;
        assert!(g.is_visitor_near(agent, Some(Point3::new(0.2, 0.0, 0.0))));
        // Visitor walked away: no sticky "near".
        assert!(!g.is_visitor_near(agent, Some(Point3::new(3.0, 0.0, 0.0))));
    }

    #[test]
    fn absent_visitor_policy() {
        let proceed = ProximityGate::new(1.0, AbsentVisitorPolicy::Proceed);
        let wait = ProximityGate::new(1.0, AbsentVisitorPolicy::Wait);
        assert!(proceed.is_visitor_near(Point3::ORIGIN, None));
        assert!(!wait.is_visitor_near(Point3::ORIGIN, None));
    }

    #[test]
    fn from_config_copies_fields() {
        let g = ProximityGate::from_config(&config(1.0));
        assert_eq!(g.threshold, 2.0);
        assert_eq!(g.absent_visitor, AbsentVisitorPolicy::Proceed);
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_state {
    use tg_core::Point3;

    use crate::AgentState;

    #[test]
    fn agent_state_json() {
        let mut state = AgentState::at_rest(Point3::new(1.0, 0.5, -2.0), 0.25);
        state.target_index = Some(3);

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"target_index\":3"));
        let back: AgentState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
