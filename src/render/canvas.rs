// canvas.rs - Surface backed by the browser's CanvasRenderingContext2D
//
// Canvas calls only fail on negative radii; those draw nothing.

use kurbo::Point;
use web_sys::CanvasRenderingContext2d;

use super::Surface;

impl Surface for CanvasRenderingContext2d {
    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_round_cap(&mut self) {
        self.set_line_cap("round");
    }

    fn set_round_join(&mut self) {
        self.set_line_join("round");
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, p: Point) {
        CanvasRenderingContext2d::move_to(self, p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        CanvasRenderingContext2d::line_to(self, p.x, p.y);
    }

    fn quad_to(&mut self, c: Point, p: Point) {
        self.quadratic_curve_to(c.x, c.y, p.x, p.y);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        let _ = CanvasRenderingContext2d::arc(self, center.x, center.y, radius.max(0.0), start, end);
    }

    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, start: f64, end: f64) {
        let _ = CanvasRenderingContext2d::ellipse(self, center.x, center.y, rx.max(0.0), ry.max(0.0), 0.0, start, end);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::rect(self, x, y, w, h);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
