// creatures.rs - Whales, jellyfish, balloons, birds and UFOs

use std::f64::consts::{PI, TAU};

use kurbo::Point;

use super::{Frame, Surface, entity_alpha};
use crate::kinematics::{WHALE_BODY, WHALE_FIN, bell, bezier_outline, tail_wag, tentacle_sway, whale_bob, wing_beat};
use crate::sim::{Balloon, Bird, Entity, Jellyfish, Pool, Ufo, Whale};

pub(super) fn draw_whales<S: Surface>(s: &mut S, whales: &Pool<Whale>, f: &Frame) {
    let w = f.view.width;
    for e in whales.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -120.0 || x > w + 120.0 { continue; }

        let size = e.size;
        let cy = e.pos.y + whale_bob(e.bob_phase);
        let origin = Point::new(x, cy);
        let alpha = entity_alpha(x, e.pos.parallax, w, 1.0);

        s.set_round_cap();
        s.set_round_join();
        s.set_fill_style(&f.palette.text_muted);

        s.set_global_alpha(alpha * 0.7);
        s.begin_path();
        s.trace(bezier_outline(&WHALE_BODY, origin, size, tail_wag(e.bob_phase, size)), kurbo::Vec2::ZERO);
        s.fill();

        s.set_global_alpha(alpha * 0.55);
        s.begin_path();
        s.trace(bezier_outline(&WHALE_FIN, origin, size, 0.0), kurbo::Vec2::ZERO);
        s.fill();

        // Throat grooves
        s.set_stroke_style(&f.palette.surface);
        s.set_global_alpha(alpha * 0.3);
        s.set_line_width(0.7);
        s.begin_path();
        for g in 0..3 {
            let g = g as f64;
            let gy = cy + size * (0.12 + g * 0.06);
            let start = x - size * (0.55 - g * 0.1);
            let end = x + size * (0.1 - g * 0.04);
            s.move_to(Point::new(start, gy));
            s.quad_to(Point::new((start + end) * 0.5, gy + size * 0.03), Point::new(end, gy));
        }
        s.stroke();
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_jellyfish<S: Surface>(s: &mut S, jellyfish: &Pool<Jellyfish>, f: &Frame) {
    let w = f.view.width;
    for e in jellyfish.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -30.0 || x > w + 30.0 { continue; }

        let size = e.size;
        let center = Point::new(x, e.pos.y);
        let (bell_w, bell_h) = bell(size, e.pulse_phase);
        let alpha = entity_alpha(x, e.pos.parallax, w, 0.55);

        // Dome
        s.set_fill_style(&f.palette.primary);
        s.set_global_alpha(alpha * 0.5);
        s.begin_path();
        s.ellipse(center, bell_w, bell_h, PI, 0.0);
        s.fill();

        // Rim
        s.set_stroke_style(&f.palette.primary);
        s.set_line_width(0.8);
        s.set_global_alpha(alpha * 0.7);
        s.begin_path();
        s.ellipse(center, bell_w * 1.02, bell_h * 0.3, 0.0, PI);
        s.stroke();

        s.set_stroke_style(&f.palette.text_muted);
        s.set_line_width(0.6);
        s.set_round_cap();
        s.set_global_alpha(alpha * 0.45);
        let tentacles = e.tentacles();
        let spacing = bell_w * 2.0 / (tentacles.len() + 1) as f64;
        for (i, t) in tentacles.iter().enumerate() {
            let tx = x - bell_w + spacing * (i + 1) as f64;
            let len = size * t.length;
            let sway = tentacle_sway(t.phase, f.time, size, f.wind);
            s.begin_path();
            s.move_to(Point::new(tx, e.pos.y));
            s.quad_to(Point::new(tx + sway, e.pos.y + len * 0.5), Point::new(tx + sway * 0.6, e.pos.y + len));
            s.stroke();
        }
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_balloons<S: Surface>(s: &mut S, balloons: &Pool<Balloon>, f: &Frame) {
    let w = f.view.width;
    for e in balloons.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -30.0 || x > w + 30.0 { continue; }

        let size = e.size;
        let bx = x + e.sway_phase.sin() * 3.0 + f.wind * 2.0;
        let y = e.pos.y;
        let alpha = entity_alpha(x, e.pos.parallax, w, 0.6);

        s.set_fill_style(&f.palette.primary);
        s.set_global_alpha(alpha);
        s.begin_path();
        s.ellipse(Point::new(bx, y), size * 0.6, size * 0.75, 0.0, TAU);
        s.fill();

        // Ropes and basket
        let basket_y = y + size;
        s.set_stroke_style(&f.palette.text_muted);
        s.set_line_width(0.8);
        s.set_global_alpha(alpha * 0.83);
        s.begin_path();
        s.move_to(Point::new(bx - size * 0.3, y + size * 0.6));
        s.line_to(Point::new(bx - 3.0, basket_y));
        s.move_to(Point::new(bx + size * 0.3, y + size * 0.6));
        s.line_to(Point::new(bx + 3.0, basket_y));
        s.stroke();

        s.set_line_width(1.2);
        s.begin_path();
        s.rect(bx - 4.0, basket_y, 8.0, 5.0);
        s.stroke();
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_birds<S: Surface>(s: &mut S, birds: &Pool<Bird>, f: &Frame) {
    let w = f.view.width;
    s.set_stroke_style(&f.palette.text_muted);
    s.set_round_cap();
    for e in birds.iter() {
        let x = e.screen_x(f.world_offset) + e.formation_x;
        let y = e.pos.y + e.formation_y;
        if x < -20.0 || x > w + 20.0 { continue; }

        let (flap, rise) = wing_beat(e.flap_phase);
        let span = e.wingspan;
        let body = Point::new(x, y - rise);
        let tip_y = y - rise - flap * span * 0.5;

        s.set_line_width(0.8 + span * 0.06);
        s.set_global_alpha(entity_alpha(x, e.pos.parallax, w, 0.7));
        s.begin_path();
        s.move_to(Point::new(x - span, tip_y));
        s.line_to(body);
        s.line_to(Point::new(x + span, tip_y));
        s.stroke();
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_ufos<S: Surface>(s: &mut S, ufos: &Pool<Ufo>, f: &Frame) {
    let w = f.view.width;
    s.set_fill_style(&f.palette.primary);
    for e in ufos.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -40.0 || x > w + 40.0 { continue; }

        let size = e.size;
        let y = e.pos.y + e.hover_phase.sin() * 4.0 * size;
        let alpha = entity_alpha(x, e.pos.parallax, w, 1.0);

        // Saucer and dome
        s.set_global_alpha(alpha);
        s.begin_path();
        s.ellipse(Point::new(x, y), 16.0 * size, 6.0 * size, 0.0, TAU);
        s.fill();
        s.begin_path();
        s.arc(Point::new(x, y - 5.0 * size), 8.0 * size, PI, 0.0);
        s.fill();

        if e.tractor_beam {
            let ground = f.view.ground_y;
            s.set_global_alpha(alpha * 0.15);
            s.begin_path();
            s.move_to(Point::new(x - 10.0 * size, y + 6.0 * size));
            s.line_to(Point::new(x + 10.0 * size, y + 6.0 * size));
            s.line_to(Point::new(x + 22.0 * size, ground));
            s.line_to(Point::new(x - 22.0 * size, ground));
            s.close_path();
            s.fill();
        }
    }
    s.set_global_alpha(1.0);
}
