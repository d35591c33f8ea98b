// pose.rs - Stick figure joint positions
//
// The figure is anchored at a fixed screen x; the world scrolls past it.

use kurbo::Point;

use super::gait::{arm_fk, foot_lift_y, foot_path_x, leg_phases, solve_leg};
use crate::config::{
    BOB, HEAD_R, L_ARM, L_LEG, LEAN, LIFT, NECK, STILL_ELBOW_X, STILL_FOOT_X, STILL_HAND_X, STILL_KNEE_X,
    STRIDE, TORSO, U_ARM, U_LEG,
};

/// A two-segment limb: middle joint and end point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limb {
    pub joint: Point,
    pub end: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Head center
    pub head: Point,
    pub neck: Point,
    pub shoulder: Point,
    pub hip: Point,
    pub left_leg: Limb,
    pub right_leg: Limb,
    pub left_arm: Limb,
    pub right_arm: Limb,
}

/// Hip height above the feet. Short enough that the farthest stance target
/// (full stride at the top of the bob) stays within U_LEG + L_LEG.
const LEG_ROOM: f64 = U_LEG + L_LEG - 2.5;

impl Pose {
    /// Standing pose used under reduced motion. No phase input.
    pub fn still(x: f64, feet_y: f64) -> Self {
        let hip_y = feet_y - LEG_ROOM;
        let shoulder_y = hip_y - TORSO;
        let neck_y = shoulder_y - NECK;
        let knee_y = hip_y + U_LEG - 1.0;
        let elbow_y = shoulder_y + U_ARM;
        let hand_y = shoulder_y + U_ARM + L_ARM * 0.5;

        Self {
            head: Point::new(x, neck_y - HEAD_R),
            neck: Point::new(x, neck_y),
            shoulder: Point::new(x, shoulder_y),
            hip: Point::new(x, hip_y),
            left_leg: Limb {
                joint: Point::new(x - STILL_KNEE_X, knee_y),
                end: Point::new(x - STILL_FOOT_X, feet_y),
            },
            right_leg: Limb {
                joint: Point::new(x + STILL_KNEE_X, knee_y),
                end: Point::new(x + STILL_FOOT_X, feet_y),
            },
            left_arm: Limb {
                joint: Point::new(x - STILL_ELBOW_X, elbow_y),
                end: Point::new(x - STILL_HAND_X, hand_y),
            },
            right_arm: Limb {
                joint: Point::new(x + STILL_ELBOW_X, elbow_y),
                end: Point::new(x + STILL_HAND_X, hand_y),
            },
        }
    }

    /// Walking pose at the given walk phase (radians, one stride per 2π)
    pub fn walking(x: f64, feet_y: f64, walk_phase: f64) -> Self {
        let (left_t, right_t) = leg_phases(walk_phase);
        let bob = (walk_phase * 2.0).sin().abs() * BOB;
        let twist = walk_phase.sin();
        let lean = LEAN.sin();

        let hip = Point::new(x, feet_y - LEG_ROOM - bob);
        let shoulder_y = hip.y - TORSO;
        let neck_y = shoulder_y - NECK;
        let head_y = neck_y - HEAD_R - bob * 0.15;

        let shoulder = Point::new(x + lean * TORSO + twist, shoulder_y);
        let neck = Point::new(x + lean * (TORSO + NECK) + twist * 0.5, neck_y);
        let head = Point::new(x + lean * (TORSO + NECK + HEAD_R) + twist * 0.25, head_y);

        let leg = |t: f64| {
            let target = Point::new(hip.x + foot_path_x(t, STRIDE), feet_y - foot_lift_y(t, LIFT));
            let solved = solve_leg(hip, target, U_LEG, L_LEG);
            Limb { joint: solved.knee, end: solved.foot }
        };
        let arm = |side: f64| {
            let (elbow, hand) = arm_fk(shoulder, side, walk_phase);
            Limb { joint: elbow, end: hand }
        };

        Self {
            head,
            neck,
            shoulder,
            hip,
            left_leg: leg(left_t),
            right_leg: leg(right_t),
            left_arm: arm(-1.0),
            right_arm: arm(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_pose_is_symmetric() {
        let p = Pose::still(100.0, 479.0);
        assert_eq!(p.left_leg.end.y, 479.0);
        assert_eq!(p.left_leg.joint.x + p.right_leg.joint.x, 200.0);
        assert_eq!(p.left_arm.end.x + p.right_arm.end.x, 200.0);
        assert_eq!(p.head.x, 100.0);
        assert!(p.head.y < p.neck.y && p.neck.y < p.shoulder.y && p.shoulder.y < p.hip.y);
    }

    #[test]
    fn walking_feet_stay_on_or_above_ground() {
        for i in 0..400 {
            let p = Pose::walking(100.0, 479.0, i as f64 * 0.05);
            for leg in [p.left_leg, p.right_leg] {
                assert!(leg.end.y <= 479.0 + 1e-9);
                assert!(leg.joint.distance(p.hip) <= U_LEG + 1e-9);
                assert!(leg.joint.distance(leg.end) <= L_LEG + 1e-9);
            }
        }
    }

    #[test]
    fn one_foot_is_always_planted() {
        for i in 0..400 {
            let p = Pose::walking(0.0, 0.0, i as f64 * 0.05);
            assert!(p.left_leg.end.y == 0.0 || p.right_leg.end.y == 0.0);
        }
    }

    #[test]
    fn stance_targets_are_reachable() {
        let dy = LEG_ROOM + BOB;
        assert!((STRIDE * STRIDE + dy * dy).sqrt() < U_LEG + L_LEG);
    }

    #[test]
    fn stance_foot_stays_on_ground() {
        for i in 0..2000 {
            let phase = i as f64 * 0.00731;
            let p = Pose::walking(0.0, 479.0, phase);
            let (left_t, right_t) = leg_phases(phase);
            for (t, leg) in [(left_t, p.left_leg), (right_t, p.right_leg)] {
                if t < 0.6 {
                    assert_eq!(leg.end.y, 479.0, "foot lifted at t={t}");
                }
            }
        }
    }

    #[test]
    fn walking_repeats_every_stride() {
        let a = Pose::walking(50.0, 300.0, 1.3);
        let b = Pose::walking(50.0, 300.0, 1.3 + 2.0 * std::f64::consts::PI);
        assert!(a.left_leg.end.distance(b.left_leg.end) < 1e-6);
        assert!(a.head.distance(b.head) < 1e-6);
    }
}
