// render/ - Paint the scene onto a 2D surface
//
// Surface mirrors the subset of CanvasRenderingContext2D the scene needs, so
// the same drawing code runs against the browser canvas and against a
// Recording in tests. Layers are painted back to front in a fixed order;
// order within a layer is unspecified.

mod creatures;
mod figure;
mod ground;
mod record;
mod sky;

#[cfg(target_arch = "wasm32")]
mod canvas;

pub use record::{Op, Recording};

use std::f64::consts::TAU;

use kurbo::{PathEl, Point, Vec2};

use crate::color::Palette;
use crate::config::FADE;
use crate::kinematics::Pose;
use crate::sim::Scene;
use crate::world::Viewport;

/// Immediate-mode 2D drawing target
pub trait Surface {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_round_cap(&mut self);
    fn set_round_join(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn quad_to(&mut self, c: Point, p: Point);
    fn curve_to(&mut self, c1: Point, c2: Point, p: Point);
    fn close_path(&mut self);
    /// Clockwise arc from `start` to `end` (radians)
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64);
    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, start: f64, end: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Append path elements to the current path, shifted by `offset`
    fn trace<I>(&mut self, elements: I, offset: Vec2)
    where
        I: IntoIterator<Item = PathEl>,
        Self: Sized,
    {
        for el in elements {
            match el {
                PathEl::MoveTo(p) => self.move_to(p + offset),
                PathEl::LineTo(p) => self.line_to(p + offset),
                PathEl::QuadTo(c, p) => self.quad_to(c + offset, p + offset),
                PathEl::CurveTo(c1, c2, p) => self.curve_to(c1 + offset, c2 + offset, p + offset),
                PathEl::ClosePath => self.close_path(),
            }
        }
    }

    /// Full circle as its own subpath, so several can share one fill
    fn circle(&mut self, center: Point, radius: f64) {
        self.move_to(Point::new(center.x + radius, center.y));
        self.arc(center, radius, 0.0, TAU);
    }
}

/// Linear fade over the last FADE px before the right edge, 1 everywhere
/// else. Anchors past the edge stay opaque so shapes reaching back onto the
/// screen are drawn. NaN positions are invisible.
pub fn edge_fade(screen_x: f64, width: f64) -> f64 {
    let edge = width - screen_x;
    if edge.is_nan() {
        0.0
    } else if edge > 0.0 && edge < FADE {
        edge / FADE
    } else {
        1.0
    }
}

/// Opacity for an entity: far layers are dimmer, and everything fades in
pub fn entity_alpha(screen_x: f64, parallax: f64, width: f64, base: f64) -> f64 {
    base * (0.3 + 0.7 * parallax) * edge_fade(screen_x, width)
}

/// Per-frame inputs shared by every layer
pub struct Frame<'a> {
    pub view: &'a Viewport,
    pub palette: &'a Palette,
    pub world_offset: f64,
    pub time: f64,
    pub wind: f64,
}

/// Visible star, collected before bucketed drawing
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct StarDot {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub alpha: f64,
}

/// Owns scratch buffers so drawing a frame never allocates
pub struct Renderer {
    star_dots: Vec<StarDot>,
}

impl Renderer {
    pub fn new(star_capacity: usize) -> Self {
        Self { star_dots: Vec::with_capacity(star_capacity) }
    }

    pub fn draw<S: Surface>(&mut self, s: &mut S, scene: &Scene, frame: &Frame, pose: &Pose) {
        s.set_global_alpha(1.0);
        s.set_fill_style(&frame.palette.bg);
        s.fill_rect(0.0, 0.0, frame.view.width, frame.view.height);

        // Sky
        sky::draw_stars(s, &scene.stars, frame, &mut self.star_dots);
        sky::draw_meteors(s, &scene.meteors, frame);
        sky::draw_clouds(s, &scene.clouds, frame);
        creatures::draw_whales(s, &scene.whales, frame);
        creatures::draw_jellyfish(s, &scene.jellyfish, frame);
        creatures::draw_balloons(s, &scene.balloons, frame);

        // Distance and ground
        ground::draw_mountains(s, &scene.mountains, frame);
        ground::draw_ground_line(s, frame);
        ground::draw_pebbles(s, &scene.pebbles, frame);
        ground::draw_grass(s, &scene.grass, frame);

        // Foreground flyers, then the explorer
        creatures::draw_birds(s, &scene.birds, frame);
        creatures::draw_ufos(s, &scene.ufos, frame);
        figure::draw_figure(s, pose, frame.palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_one_outside_band() {
        for x in [-300.0, 0.0, 500.0, 1139.0, 1140.0] {
            assert_eq!(edge_fade(x, 1200.0), 1.0);
        }
        assert_eq!(edge_fade(5000.0, 1200.0), 1.0);
    }

    #[test]
    fn fade_decreases_towards_edge() {
        let mut prev = edge_fade(1140.0, 1200.0);
        for i in 1..80 {
            let a = edge_fade(1140.0 + i as f64 * 0.75, 1200.0);
            assert!(a <= prev);
            assert!((0.0..=1.0).contains(&a));
            prev = a;
        }
        assert!((edge_fade(1170.0, 1200.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn anchors_past_right_edge_stay_opaque() {
        assert_eq!(edge_fade(1200.0, 1200.0), 1.0);
        assert_eq!(edge_fade(1250.0, 1200.0), 1.0);
        assert_eq!(entity_alpha(1210.0, 1.0, 1200.0, 1.0), 1.0);
    }

    #[test]
    fn far_layers_are_dimmer() {
        let near = entity_alpha(100.0, 1.0, 1200.0, 1.0);
        let far = entity_alpha(100.0, 0.1, 1200.0, 1.0);
        assert_eq!(near, 1.0);
        assert!(far < near);
    }

    #[test]
    fn nan_position_is_invisible() {
        assert_eq!(edge_fade(f64::NAN, 1200.0), 0.0);
    }

    #[test]
    fn trace_applies_offset() {
        let mut rec = Recording::new();
        rec.trace([PathEl::MoveTo(Point::new(1.0, 1.0)), PathEl::ClosePath], Vec2::new(10.0, 5.0));
        assert_eq!(rec.ops(), &[Op::MoveTo(11.0, 6.0), Op::ClosePath]);
    }
}
