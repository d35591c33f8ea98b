// ground.rs - Mountains, grass and pebbles
//
// Mountains sit on the ground line in the far distance. Grass and pebbles
// are foreground detail scrolling at full speed.

use kurbo::{Affine, BezPath};
use rand::Rng;

use super::{Category, Entity, Placement, uniform, uniform_int};
use crate::world::Viewport;

#[derive(Clone, Debug, Default)]
pub struct Mountain {
    pub pos: Placement,
    pub peak_height: f64,
    pub left_width: f64,
    pub right_width: f64,
    /// Two quadratic flanks from (-left_width, 0) over the peak to (right_width, 0)
    pub outline: BezPath,
}

impl Entity for Mountain {
    const CATEGORY: Category = Category::Mountain;
    const PARALLAX: f64 = 0.2;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        let h = uniform(rng, 55.0, 115.0).min(view.ground_y * 0.85);
        let wl = uniform(rng, 25.0, 65.0);
        let wr = uniform(rng, 25.0, 65.0);
        self.shape(world_x, view.ground_y, h, wl, wr, rng);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }
}

impl Mountain {
    pub fn shape<R: Rng + ?Sized>(&mut self, world_x: f64, ground_y: f64, h: f64, wl: f64, wr: f64, rng: &mut R) {
        // Jitter the flank control points so no two peaks look alike
        let ldx = uniform(rng, -0.15, 0.15) * wl;
        let ldy = uniform(rng, 0.3, 0.6) * h;
        let rdx = uniform(rng, -0.15, 0.15) * wr;
        let rdy = uniform(rng, 0.3, 0.6) * h;

        self.pos = Placement::new(world_x, ground_y, Self::PARALLAX);
        self.peak_height = h;
        self.left_width = wl;
        self.right_width = wr;

        self.outline.truncate(0);
        self.outline.move_to((-wl, 0.0));
        self.outline.quad_to((-wl * 0.5 + ldx, -ldy), (0.0, -h));
        self.outline.quad_to((wr * 0.5 + rdx, -rdy), (wr, 0.0));
        self.outline.close_path();
    }

    /// Rescale to a new peak height, keeping the flank widths and jitter
    pub fn set_peak_height(&mut self, h: f64) {
        if self.peak_height > 0.0 {
            self.outline.apply_affine(Affine::scale_non_uniform(1.0, h / self.peak_height));
        }
        self.peak_height = h;
    }
}

pub const MAX_BLADES: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct GrassTuft {
    pub pos: Placement,
    pub blade_count: usize,
    pub blade_height: f64,
    pub blade_angles: [f64; MAX_BLADES],
}

impl Entity for GrassTuft {
    const CATEGORY: Category = Category::GrassTuft;
    const PARALLAX: f64 = 1.0;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        self.pos = Placement::new(world_x, view.ground_y, Self::PARALLAX);
        self.blade_count = uniform_int(rng, 2, MAX_BLADES);
        self.blade_height = uniform(rng, 3.0, 11.0);
        for a in self.blade_angles.iter_mut() {
            *a = uniform(rng, -0.4, 0.4);
        }
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }
}

impl GrassTuft {
    pub fn blades(&self) -> &[f64] {
        &self.blade_angles[..self.blade_count.min(MAX_BLADES)]
    }
}

#[derive(Clone, Debug, Default)]
pub struct Pebble {
    pub pos: Placement,
    pub radius: f64,
}

impl Entity for Pebble {
    const CATEGORY: Category = Category::Pebble;
    const PARALLAX: f64 = 1.0;

    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) {
        self.pos = Placement::new(world_x, view.ground_y + uniform(rng, 1.0, 3.0), Self::PARALLAX);
        self.radius = uniform(rng, 0.8, 3.5);
    }

    fn placement(&self) -> &Placement {
        &self.pos
    }
}
