// gait.rs - Stride curves and limb solvers
//
// Gait parameter t is normalized to [0, 1) per stride; both curves wrap, so
// any real t is accepted. Stance covers t < 0.6, swing the rest.

use std::f64::consts::PI;

use kurbo::{Point, Vec2};

use crate::config::{L_ARM, U_ARM};

const STANCE: f64 = 0.6;
/// 1 / (1 - STANCE)
const SWING_RATE: f64 = 2.5;

/// Horizontal foot offset from the hip. Stance slides the foot back from
/// +stride to -stride; swing carries it forward on a smoothstep.
pub fn foot_path_x(t: f64, stride: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < STANCE {
        return stride * (1.0 - t / 0.3);
    }
    let s = (t - STANCE) * SWING_RATE;
    stride * (6.0 * s * s - 4.0 * s * s * s - 1.0)
}

/// Foot lift above the ground: zero in stance, a half sine in swing
pub fn foot_lift_y(t: f64, max: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < STANCE {
        return 0.0;
    }
    ((t - STANCE) * SWING_RATE * PI).sin().max(0.0) * max
}

/// Gait parameters for the left and right leg, half a stride apart
pub fn leg_phases(walk_phase: f64) -> (f64, f64) {
    let left = walk_phase.rem_euclid(2.0 * PI) / (2.0 * PI);
    (left, (left + 0.5) % 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegSolution {
    pub knee: Point,
    /// Target pulled in to the leg's reach when it was too far
    pub foot: Point,
}

/// Two-bone IK. The knee bends forward (towards +x when the foot is below
/// the hip). With equal segments the knee sits on the perpendicular bisector
/// of hip and foot.
pub fn solve_leg(hip: Point, target: Point, upper: f64, lower: f64) -> LegSolution {
    let delta = target - hip;
    let dist = delta.hypot();
    if !(dist > 1e-6) {
        return LegSolution { knee: hip, foot: target };
    }

    let dir = delta / dist;
    let reach = upper + lower;
    let (foot, d) = if dist > reach { (hip + dir * reach, reach) } else { (target, dist) };
    let perp = Vec2::new(dir.y, -dir.x);

    let (along, out) = if d < (upper - lower).abs() {
        // Foot inside the inner radius: fold symmetrically on the shorter bone
        let half = d * 0.5;
        (half, (upper.min(lower).powi(2) - half * half).max(0.0).sqrt())
    } else {
        let along = (upper * upper - lower * lower + d * d) / (2.0 * d);
        (along, (upper * upper - along * along).max(0.0).sqrt())
    };

    LegSolution { knee: hip + dir * along + perp * out, foot }
}

/// Forward kinematics for a swinging arm. Returns (elbow, hand).
/// `side` is -1 for the left arm, +1 for the right.
pub fn arm_fk(shoulder: Point, side: f64, phase: f64) -> (Point, Point) {
    let upper = side * (phase - 0.3).cos() * 0.45;
    let elbow = shoulder + Vec2::new(upper.sin(), upper.cos()) * U_ARM;
    // Forearm lags the upper arm and swings less
    let fore = side * (phase - 0.6).cos() * 0.45 * 0.65;
    let hand = elbow + Vec2::new(fore.sin(), fore.cos()) * L_ARM;
    (elbow, hand)
}
