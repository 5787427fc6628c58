//! A simulated museum visitor who mostly follows the guide.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tg_core::Point3;

/// Walks after the guide at `speed`, keeping `follow_distance` back, and
/// now and then drifts off to look at something else for a while.
pub struct Visitor {
    pub position:    Point3,
    rng:             SmallRng,
    speed:           f32,
    follow_distance: f32,
    wander_chance:   f64,
    wander:          Option<(Point3, u32)>,
}

impl Visitor {
    pub fn new(start: Point3, seed: u64, speed: f32, follow_distance: f32, wander_chance: f64) -> Self {
        Self {
            position: start,
            rng: SmallRng::seed_from_u64(seed),
            speed,
            follow_distance,
            wander_chance: wander_chance.clamp(0.0, 1.0),
            wander: None,
        }
    }

    /// `true` while the visitor is off looking at something else.
    pub fn is_wandering(&self) -> bool {
        self.wander.is_some()
    }

    /// Move one tick toward the guide (or the current distraction).
    pub fn step(&mut self, guide: Point3, delta_ms: f32) -> Point3 {
        if self.wander.is_none() && self.rng.gen_bool(self.wander_chance) {
            let spot = guide
                + Point3::new(
                    self.rng.gen_range(-8.0..8.0),
                    0.0,
                    self.rng.gen_range(-8.0..8.0),
                );
            let ticks = self.rng.gen_range(20..80);
            log::debug!("visitor wanders toward {spot} for {ticks} ticks");
            self.wander = Some((spot, ticks));
        }

        let (target, keep) = match self.wander.as_mut() {
            Some((spot, ticks)) => {
                *ticks = ticks.saturating_sub(1);
                let spot = *spot;
                if *ticks == 0 {
                    self.wander = None;
                }
                (spot, 0.0)
            }
            None => (guide, self.follow_distance),
        };

        let gap = self.position.distance(target) - keep;
        if gap > 0.0 {
            let step = (self.speed * delta_ms / 1_000.0).min(gap);
            let dir  = (target - self.position) * (1.0 / self.position.distance(target));
            self.position = self.position + dir * step;
        }
        self.position
    }
}
