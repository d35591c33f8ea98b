// figure.rs - The walking explorer

use std::f64::consts::TAU;

use super::Surface;
use crate::color::Palette;
use crate::config::HEAD_R;
use crate::kinematics::{Limb, Pose};

pub(super) fn draw_figure<S: Surface>(s: &mut S, pose: &Pose, palette: &Palette) {
    s.set_stroke_style(&palette.text);
    s.set_fill_style(&palette.text);
    s.set_line_width(1.8);
    s.set_round_cap();
    s.set_round_join();
    s.set_global_alpha(1.0);

    s.begin_path();
    s.arc(pose.head, HEAD_R, 0.0, TAU);
    s.stroke();

    // Spine, then each limb from its root joint
    s.begin_path();
    s.move_to(pose.neck);
    s.line_to(pose.hip);
    limb(s, pose.shoulder, &pose.left_arm);
    limb(s, pose.shoulder, &pose.right_arm);
    limb(s, pose.hip, &pose.left_leg);
    limb(s, pose.hip, &pose.right_leg);
    s.stroke();
}

fn limb<S: Surface>(s: &mut S, root: kurbo::Point, l: &Limb) {
    s.move_to(root);
    s.line_to(l.joint);
    s.line_to(l.end);
}
