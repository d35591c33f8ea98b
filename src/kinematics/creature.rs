// creature.rs - Creature shapes and secondary motion
//
// Whale outlines are closed cubic Bezier chains stored as flat tables:
//   [x0, y0, then per segment: c1x, c1y, c1w, c2x, c2y, c2w, x, y, w]
// Coordinates are in units of body size; the `w` column weights a single
// wag term added to y, which bends the tail without rebuilding geometry.

use kurbo::{PathEl, Point};

#[rustfmt::skip]
pub const WHALE_BODY: [f64; 110] = [
    -0.95, 0.02,
    -0.92, -0.12, 0.0,   -0.75, -0.32, 0.0,   -0.45, -0.36, 0.0,
    -0.15, -0.38, 0.0,    0.2, -0.34, 0.0,     0.45, -0.26, 0.0,
    0.52, -0.24, 0.0,     0.55, -0.3, 0.0,     0.58, -0.24, 0.0,
    0.72, -0.16, 0.25,    0.88, -0.06, 0.5,    0.98, -0.02, 0.7,
    1.06, -0.04, 0.85,    1.18, -0.18, 1.0,    1.28, -0.26, 1.0,
    1.3, -0.22, 1.0,      1.26, -0.14, 0.9,    1.12, -0.04, 0.75,
    1.06, 0.0, 0.7,       1.06, 0.02, 0.7,     1.12, 0.06, 0.75,
    1.26, 0.16, 0.9,      1.3, 0.24, 1.0,      1.28, 0.28, 1.0,
    1.18, 0.2, 1.0,       1.06, 0.08, 0.85,    0.98, 0.04, 0.7,
    0.85, 0.1, 0.25,      0.65, 0.2, 0.0,      0.4, 0.28, 0.0,
    0.1, 0.34, 0.0,       -0.25, 0.36, 0.0,    -0.55, 0.3, 0.0,
    -0.78, 0.24, 0.0,     -0.92, 0.14, 0.0,    -0.95, 0.02, 0.0,
];

#[rustfmt::skip]
pub const WHALE_FIN: [f64; 20] = [
    -0.3, 0.2,
    -0.38, 0.32, 0.0,   -0.52, 0.42, 0.0,   -0.62, 0.38, 0.0,
    -0.58, 0.32, 0.0,   -0.44, 0.26, 0.0,   -0.3, 0.2, 0.0,
];

/// Stride of one cubic segment in an outline table
const SEGMENT: usize = 9;

/// Trace a wagged outline table at `origin`, scaled by `scale`.
/// Missing table entries read as zero, so truncated tables still close.
pub fn bezier_outline(data: &[f64], origin: Point, scale: f64, wag: f64) -> impl Iterator<Item = PathEl> + '_ {
    let v = move |j: usize| data.get(j).copied().unwrap_or(0.0);
    let pt = move |j: usize| Point::new(origin.x + scale * v(j), origin.y + scale * v(j + 1) + wag * v(j + 2));

    let start = PathEl::MoveTo(Point::new(origin.x + scale * v(0), origin.y + scale * v(1)));
    let curves = (2..data.len()).step_by(SEGMENT).map(move |i| PathEl::CurveTo(pt(i), pt(i + 3), pt(i + 6)));
    std::iter::once(start).chain(curves).chain(std::iter::once(PathEl::ClosePath))
}

/// Vertical float of a whale
pub fn whale_bob(bob_phase: f64) -> f64 {
    bob_phase.sin() * 4.0
}

/// Tail wag amplitude, driven by the bob phase
pub fn tail_wag(bob_phase: f64, size: f64) -> f64 {
    (bob_phase * 1.6).sin() * size * 0.08
}

/// Bell half-width and height for a pulsing jellyfish
pub fn bell(size: f64, pulse_phase: f64) -> (f64, f64) {
    let pulse = pulse_phase.sin() * 0.15;
    (size * (0.7 + pulse), size * (0.55 - pulse * 0.3))
}

/// Horizontal sway at a tentacle tip
pub fn tentacle_sway(phase: f64, time: f64, size: f64, wind: f64) -> f64 {
    (phase + time * 1.5).sin() * size * 0.15 + wind * 1.5
}

/// Wing tip lift (fraction of wingspan) and body rise for a flap phase.
/// Strokes are sharpened so wings snap down and glide up.
pub fn wing_beat(flap_phase: f64) -> (f64, f64) {
    let s = flap_phase.sin();
    let flap = s.signum() * s.abs().powf(0.7) * 0.6;
    let rise = (-s).max(0.0) * 1.5;
    (flap, rise)
}
