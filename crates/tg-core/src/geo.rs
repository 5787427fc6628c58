//! Scene-space coordinate type and heading helpers.
//!
//! `Point3` uses `f32` like the renderer it feeds.  The engine's coordinate
//! frame is Y-up: headings are yaw angles about the Y axis, measured so that
//! a heading of `0` faces `+Z` and `π/2` faces `+X`.

use std::f32::consts::{PI, TAU};
use std::ops::{Add, Mul, Sub};

/// A point (or displacement) in scene space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of this point treated as a vector.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point3) -> f32 {
        (other - self).length()
    }

    /// Linear interpolation; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: Point3, t: f32) -> Point3 {
        self + (other - self) * t
    }

    /// Yaw (about +Y) that faces from `self` toward `target`.
    ///
    /// Ignores the vertical component.  Returns `None` when the two points
    /// coincide on the horizontal plane and no bearing is defined.
    pub fn bearing_to(self, target: Point3) -> Option<f32> {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        if dx.abs() <= f32::EPSILON && dz.abs() <= f32::EPSILON {
            return None;
        }
        Some(dx.atan2(dz))
    }

    /// `true` if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3 {
    type Output = Point3;
    #[inline]
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Point3;
    #[inline]
    fn mul(self, rhs: f32) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── Angles ────────────────────────────────────────────────────────────────────

/// Wrap an angle into `(-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle.rem_euclid(TAU);
    if a > PI {
        a -= TAU;
    }
    a
}

/// Rotate `current` toward `target` by at most `max_step` radians along the
/// shorter arc.  The result is wrapped into `(-π, π]`.
pub fn step_angle(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - current);
    if diff.abs() <= max_step {
        wrap_angle(target)
    } else {
        wrap_angle(current + max_step.copysign(diff))
    }
}
