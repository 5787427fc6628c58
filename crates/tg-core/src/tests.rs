//! Unit tests for tg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ArtworkId, NarrationHandle, NarrationId};

    #[test]
    fn string_ids_compare_by_value() {
        assert_eq!(NarrationId::from("intro"), NarrationId::new(String::from("intro")));
        assert_ne!(ArtworkId::from("mona-lisa"), ArtworkId::from("night-watch"));
    }

    #[test]
    fn display() {
        assert_eq!(NarrationId::from("intro").to_string(), "intro");
        assert_eq!(NarrationHandle(7).to_string(), "NarrationHandle(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::Point3;
    use crate::geo::{step_angle, wrap_angle};

    #[test]
    fn distance_345() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!(a.distance(a) < 1e-9);
    }

    #[test]
    fn lerp_midpoint() {
        let m = Point3::new(0.0, 0.0, 0.0).lerp(Point3::new(2.0, 4.0, -6.0), 0.5);
        assert_eq!(m, Point3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn bearing_axes() {
        let o = Point3::ORIGIN;
        assert!(o.bearing_to(Point3::new(0.0, 0.0, 1.0)).unwrap().abs() < 1e-6);
        assert!((o.bearing_to(Point3::new(1.0, 0.0, 0.0)).unwrap() - FRAC_PI_2).abs() < 1e-6);
        // Vertical offset only: no horizontal bearing.
        assert!(o.bearing_to(Point3::new(0.0, 5.0, 0.0)).is_none());
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(-1.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!(wrap_angle(0.0).abs() < 1e-6);
    }

    #[test]
    fn step_angle_is_bounded() {
        let h = step_angle(0.0, FRAC_PI_2, 0.1);
        assert!((h - 0.1).abs() < 1e-6);
        // Within reach: lands on target.
        assert!((step_angle(0.0, 0.05, 0.1) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn step_angle_takes_shorter_arc() {
        // From just below +π to just above -π is a short hop across the seam.
        let h = step_angle(PI - 0.05, -PI + 0.05, 0.2);
        assert!((wrap_angle(h - (-PI + 0.05))).abs() < 1e-5);
        let h = step_angle(PI - 0.05, -PI + 0.05, 0.04);
        assert!(h > PI - 0.05, "should turn through +π, got {h}");
    }
}

#[cfg(test)]
mod time {
    use crate::TourClock;
    use crate::time::sanitize_delta_ms;

    #[test]
    fn sanitize_rejects_garbage() {
        assert_eq!(sanitize_delta_ms(16.0), 16.0);
        assert_eq!(sanitize_delta_ms(-4.0), 0.0);
        assert_eq!(sanitize_delta_ms(f32::NAN), 0.0);
        assert_eq!(sanitize_delta_ms(f32::INFINITY), 0.0);
    }

    #[test]
    fn clock_counts_frozen_ticks_without_time() {
        let mut clock = TourClock::new();
        clock.advance(500.0);
        clock.advance_frozen();
        assert_eq!(clock.tick, 2);
        assert!((clock.elapsed_ms - 500.0).abs() < 1e-9);
    }

    #[test]
    fn clock_display() {
        let mut clock = TourClock::new();
        clock.advance(61_000.0);
        assert_eq!(clock.to_string(), "T1 (01:01)");
    }
}

#[cfg(test)]
mod config {
    use crate::{TourConfig, TourError};

    #[test]
    fn default_is_valid() {
        TourConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_speed_rejected() {
        let cfg = TourConfig { speed: 0.0, ..TourConfig::default() };
        assert!(matches!(cfg.validate(), Err(TourError::Config(_))));
    }

    #[test]
    fn negative_threshold_rejected() {
        let cfg = TourConfig { proximity_threshold: -1.0, ..TourConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
