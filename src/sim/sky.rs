// sky.rs - Stars, clouds and meteors
//
// Far layers. Stars are numerous and static, clouds drift with the wind,
// meteors streak across and burn out.

use std::f64::consts::TAU;

use kurbo::{BezPath, Circle, Shape};
use rand::Rng;

use super::{Category, Entity, Placement, uniform};
use crate::world::Viewport;

#[derive(Clone, Debug, Default)]
pub struct Star {
    pub pos: Placement,
    pub size: f64,
    pub twinkle_offset: f64,
    pub twinkle_speed: f64,
}

impl Entity for Star {
    const CATEGORY: Category = Category::Star;
    const PARALLAX: f64 = 0.1;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let y = uniform(rng, view.height * 0.05, view.height * 0.45);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        // Mostly tiny, a few bright ones
        self.size = 0.5 + uniform(rng, 0.0, 1.0).powf(2.5) * 2.8;
        self.twinkle_offset = uniform(rng, 0.0, TAU);
        self.twinkle_speed = uniform(rng, 0.8, 2.5);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }
}

impl Star {
    /// Brightness factor in [0.4, 1.0]
    pub fn twinkle(&self, time: f64) -> f64 {
        0.4 + 0.6 * (time * self.twinkle_speed + self.twinkle_offset).sin().abs()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Cloud {
    pub pos: Placement,
    /// Five overlapping puffs, relative to the cloud origin
    pub outline: BezPath,
    pub drift_speed: f64,
    pub base_opacity: f64,
}

impl Entity for Cloud {
    const CATEGORY: Category = Category::Cloud;
    const PARALLAX: f64 = 0.15;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let r = uniform(rng, 6.0, 18.0);
        let radii = [
            r * uniform(rng, 0.8, 0.95),
            r * uniform(rng, 0.9, 1.0),
            r * uniform(rng, 0.8, 0.95),
            r * uniform(rng, 0.7, 0.9),
            r * uniform(rng, 0.65, 0.85),
        ];
        let offsets = [
            (-r * 1.1, 0.0),
            (0.0, 0.0),
            (r * 1.1, 0.0),
            (-r * 0.5, -r * 0.7),
            (r * 0.4, -r * 0.65),
        ];

        // Reuse the recycled path's storage
        self.outline.truncate(0);
        for (&cr, &center) in radii.iter().zip(offsets.iter()) {
            for el in Circle::new(center, cr).path_elements(0.1) {
                self.outline.push(el);
            }
        }

        let y = uniform(rng, view.height * 0.1, view.height * 0.35);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.drift_speed = uniform(rng, 1.0, 4.0);
        self.base_opacity = uniform(rng, 0.15, 0.25);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    fn advance(&mut self, dt: f64, wind: f64) {
        self.pos.world_x += (self.drift_speed + wind * 2.0) * dt;
    }
}

pub const METEOR_LIFE: f64 = 2.0;
/// Life lost per second
pub const METEOR_BURN: f64 = 1.5;

#[derive(Clone, Debug, Default)]
pub struct Meteor {
    pub pos: Placement,
    pub angle: f64,
    pub speed: f64,
    pub life: f64,
    pub max_life: f64,
    pub tail_len: f64,
}

impl Entity for Meteor {
    const CATEGORY: Category = Category::Meteor;
    const PARALLAX: f64 = 0.05;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let y = uniform(rng, view.height * 0.02, view.height * 0.2);
        self.pos = Placement::new(world_x, y, Self::PARALLAX);
        self.angle = uniform(rng, 0.15, 0.4);
        self.speed = uniform(rng, 200.0, 350.0);
        self.life = METEOR_LIFE;
        self.max_life = METEOR_LIFE;
        self.tail_len = uniform(rng, 25.0, 80.0);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }

    // Falls down and to the left
    fn advance(&mut self, dt: f64, _wind: f64) {
        self.pos.world_x -= self.angle.cos() * self.speed * dt;
        self.pos.y += self.angle.sin() * self.speed * dt;
        self.life -= dt * METEOR_BURN;
    }

    fn alive(&self) -> bool {
        self.life > 0.0
    }
}

impl Meteor {
    /// Remaining life as opacity; a zero max life reads as burnt out
    pub fn opacity(&self) -> f64 {
        if self.max_life > 0.0 { (self.life / self.max_life).clamp(0.0, 1.0) } else { 0.0 }
    }
}
