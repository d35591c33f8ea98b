// flyers.rs - Birds, UFOs and hot-air balloons

use std::f64::consts::TAU;

use rand::Rng;

use super::{Category, Entity, Placement, chance, uniform};
use crate::world::Viewport;

#[derive(Clone, Debug, Default)]
pub struct Bird {
    pub pos: Placement,
    pub velocity: f64,
    pub flap_phase: f64,
    pub wingspan: f64,
    // Offset from the flock leader, screen px
    pub formation_x: f64,
    pub formation_y: f64,
}

impl Entity for Bird {
    const CATEGORY: Category = Category::Bird;
    const PARALLAX: f64 = 0.5;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let y = uniform(rng, view.height * 0.1, view.height * 0.4);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.velocity = uniform(rng, 10.0, 20.0);
        self.flap_phase = uniform(rng, 0.0, TAU);
        self.wingspan = uniform(rng, 5.0, 16.0);
        self.formation_x = 0.0;
        self.formation_y = 0.0;
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    fn advance(&mut self, dt: f64, wind: f64) {
        self.pos.world_x += (self.velocity + wind * 5.0) * dt;
        self.flap_phase += dt * 6.0;
    }
}

impl Bird {
    /// Join a flock: same altitude and speed as the leader, offset in formation
    pub fn follow(&mut self, leader_y: f64, leader_velocity: f64, dx: f64, dy: f64) {
        self.pos.y = leader_y;
        self.velocity = leader_velocity;
        self.formation_x = dx;
        self.formation_y = dy;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Ufo {
    pub pos: Placement,
    pub size: f64,
    pub hover_phase: f64,
    pub tractor_beam: bool,
}

impl Entity for Ufo {
    const CATEGORY: Category = Category::Ufo;
    const PARALLAX: f64 = 0.6;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let y = uniform(rng, view.height * 0.08, view.height * 0.25);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.size = uniform(rng, 0.6, 1.4);
        self.hover_phase = uniform(rng, 0.0, TAU);
        self.tractor_beam = chance(rng, 0.5);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    fn advance(&mut self, dt: f64, _wind: f64) {
        self.hover_phase += dt * 2.0;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Balloon {
    pub pos: Placement,
    pub size: f64,
    pub drift_speed: f64,
    pub sway_phase: f64,
}

impl Entity for Balloon {
    const CATEGORY: Category = Category::Balloon;
    const PARALLAX: f64 = 0.35;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let y = uniform(rng, view.height * 0.08, view.height * 0.3);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.size = uniform(rng, 8.0, 20.0);
        self.drift_speed = uniform(rng, 4.0, 12.0);
        self.sway_phase = uniform(rng, 0.0, TAU);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    fn advance(&mut self, dt: f64, wind: f64) {
        self.pos.world_x += (self.drift_speed + wind * 3.0) * dt;
        self.sway_phase += dt * 1.5;
    }
}
