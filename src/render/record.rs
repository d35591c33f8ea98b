// record.rs - Surface that records its command stream
//
// Two frames are pixel-identical when their recordings are equal.

use kurbo::Point;

use super::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    FillStyle(String),
    StrokeStyle(String),
    GlobalAlpha(f64),
    LineWidth(f64),
    RoundCap,
    RoundJoin,
    FillRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    ClosePath,
    Arc(f64, f64, f64, f64, f64),
    Ellipse(f64, f64, f64, f64, f64, f64),
    Rect(f64, f64, f64, f64),
    Fill,
    Stroke,
}

#[derive(Clone, Debug, Default)]
pub struct Recording {
    ops: Vec<Op>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Every alpha value set on the surface, in order
    pub fn alphas(&self) -> impl Iterator<Item = f64> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::GlobalAlpha(a) => Some(*a),
            _ => None,
        })
    }
}

impl Surface for Recording {
    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(Op::FillStyle(color.to_owned()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(Op::StrokeStyle(color.to_owned()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::GlobalAlpha(alpha));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn set_round_cap(&mut self) {
        self.ops.push(Op::RoundCap);
    }

    fn set_round_join(&mut self) {
        self.ops.push(Op::RoundJoin);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(Op::MoveTo(p.x, p.y));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(Op::LineTo(p.x, p.y));
    }

    fn quad_to(&mut self, c: Point, p: Point) {
        self.ops.push(Op::QuadTo(c.x, c.y, p.x, p.y));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.ops.push(Op::CurveTo(c1.x, c1.y, c2.x, c2.y, p.x, p.y));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.ops.push(Op::Arc(center.x, center.y, radius, start, end));
    }

    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, start: f64, end: f64) {
        self.ops.push(Op::Ellipse(center.x, center.y, rx, ry, start, end));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Rect(x, y, w, h));
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}
