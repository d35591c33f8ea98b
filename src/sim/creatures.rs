// creatures.rs - Sky whales and jellyfish
//
// Both float independently of the ground. Their shapes are animated at draw
// time from phases stored here (see kinematics::creature).

use std::f64::consts::TAU;

use rand::Rng;

use super::{Category, Entity, Placement, uniform, uniform_int};
use crate::world::Viewport;

#[derive(Clone, Debug, Default)]
pub struct Whale {
    pub pos: Placement,
    pub size: f64,
    pub velocity: f64,
    pub bob_phase: f64,
}

impl Entity for Whale {
    const CATEGORY: Category = Category::Whale;
    const PARALLAX: f64 = 0.55;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let s = uniform(rng, 40.0, 95.0);
        // Keep the whole body inside the upper sky
        let min_y = s * 0.42 + 4.0;
        let max_y = view.height * 0.45 - s * 0.42;
        let y = uniform(rng, min_y.max(view.height * 0.12), min_y.max(max_y));
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.size = s;
        self.velocity = 0.0;
        self.bob_phase = uniform(rng, 0.0, TAU);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    fn advance(&mut self, dt: f64, _wind: f64) {
        self.pos.world_x += self.velocity * dt;
        self.bob_phase += dt * 1.2;
    }
}

pub const MAX_TENTACLES: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tentacle {
    pub phase: f64,
    /// Length as a multiple of bell size
    pub length: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Jellyfish {
    pub pos: Placement,
    pub size: f64,
    pub pulse_phase: f64,
    pub drift_speed: f64,
    pub tentacle_count: usize,
    pub tentacles: [Tentacle; MAX_TENTACLES],
}

impl Entity for Jellyfish {
    const CATEGORY: Category = Category::Jellyfish;
    const PARALLAX: f64 = 0.4;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let count = uniform_int(rng, 3, MAX_TENTACLES);
        let y = uniform(rng, view.height * 0.1, view.height * 0.4);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.size = uniform(rng, 6.0, 16.0);
        self.pulse_phase = uniform(rng, 0.0, TAU);
        self.drift_speed = uniform(rng, 2.0, 6.0);
        self.tentacle_count = count;
        for t in self.tentacles.iter_mut() {
            *t = Tentacle { phase: uniform(rng, 0.0, TAU), length: uniform(rng, 0.8, 1.4) };
        }
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    fn advance(&mut self, dt: f64, wind: f64) {
        self.pos.world_x += (self.drift_speed + wind * 2.0) * dt;
        self.pulse_phase += dt * 2.5;
    }
}

impl Jellyfish {
    pub fn tentacles(&self) -> &[Tentacle] {
        &self.tentacles[..self.tentacle_count.min(MAX_TENTACLES)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn whale_stays_in_upper_sky() {
        let view = Viewport::new(1200.0, 600.0);
        let mut rng = SmallRng::seed_from_u64(9);
        let mut whale = Whale::default();
        for _ in 0..100 {
            whale.init(0.0, &view, &mut rng);
            assert!(whale.pos.y - whale.size * 0.42 >= 4.0 - 1e-9);
            assert!(whale.pos.y <= view.height * 0.45);
        }
    }

    #[test]
    fn whale_fits_tiny_viewport() {
        let view = Viewport::new(100.0, 40.0);
        let mut rng = SmallRng::seed_from_u64(4);
        let mut whale = Whale::default();
        whale.init(0.0, &view, &mut rng);
        assert!(whale.pos.y.is_finite());
    }

    #[test]
    fn tentacle_slice_matches_count() {
        let view = Viewport::new(1200.0, 600.0);
        let mut rng = SmallRng::seed_from_u64(6);
        let mut jelly = Jellyfish::default();
        for _ in 0..50 {
            jelly.init(0.0, &view, &mut rng);
            assert!((3..=MAX_TENTACLES).contains(&jelly.tentacles().len()));
        }
        jelly.tentacle_count = 99;
        assert_eq!(jelly.tentacles().len(), MAX_TENTACLES);
    }
}
