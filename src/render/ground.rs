// ground.rs - Mountains, ground line, pebbles and grass
//
// Pebbles and grass are the most numerous foreground entities. Everything
// clear of the fade band goes into one shared path with a single fill or
// stroke; only the few members inside the band are drawn one by one.

use kurbo::{Point, Vec2};

use super::{Frame, Surface, edge_fade, entity_alpha};
use crate::sim::{Entity, GrassTuft, Mountain, Pebble, Pool};

const GRASS_ALPHA: f64 = 0.45;
const PEBBLE_ALPHA: f64 = 0.4;

pub(super) fn draw_mountains<S: Surface>(s: &mut S, mountains: &Pool<Mountain>, f: &Frame) {
    let w = f.view.width;
    s.set_fill_style(&f.palette.border);
    s.set_stroke_style(&f.palette.text_muted);
    s.set_line_width(1.0);
    for e in mountains.iter() {
        let x = e.screen_x(f.world_offset);
        if x + e.right_width < -10.0 || x - e.left_width > w + 10.0 { continue; }
        s.set_global_alpha(entity_alpha(x, e.pos.parallax, w, 1.0));
        s.begin_path();
        s.trace(e.outline.elements().iter().copied(), Vec2::new(x, e.pos.y));
        s.fill();
        s.stroke();
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_ground_line<S: Surface>(s: &mut S, f: &Frame) {
    let y = f.view.ground_y;
    s.set_stroke_style(&f.palette.border);
    s.set_line_width(1.0);
    s.set_global_alpha(1.0);
    s.begin_path();
    s.move_to(Point::new(0.0, y));
    s.line_to(Point::new(f.view.width, y));
    s.stroke();
}

pub(super) fn draw_pebbles<S: Surface>(s: &mut S, pebbles: &Pool<Pebble>, f: &Frame) {
    let w = f.view.width;
    s.set_fill_style(&f.palette.text_muted);

    let mut any = false;
    for e in pebbles.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -5.0 || x > w + 5.0 || edge_fade(x, w) < 1.0 { continue; }
        if !any {
            s.set_global_alpha(PEBBLE_ALPHA);
            s.begin_path();
            any = true;
        }
        s.circle(Point::new(x, e.pos.y), e.radius);
    }
    if any {
        s.fill();
    }

    for e in pebbles.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -5.0 || x > w + 5.0 || edge_fade(x, w) >= 1.0 { continue; }
        s.set_global_alpha(entity_alpha(x, e.pos.parallax, w, PEBBLE_ALPHA));
        s.begin_path();
        s.circle(Point::new(x, e.pos.y), e.radius);
        s.fill();
    }
    s.set_global_alpha(1.0);
}

fn add_blades<S: Surface>(s: &mut S, x: f64, e: &GrassTuft, wind: f64) {
    let blades = e.blades();
    let half = (blades.len() as f64 - 1.0) * 0.5;
    for (j, &angle) in blades.iter().enumerate() {
        let angle = angle + wind * 0.3;
        let bx = x + (j as f64 - half) * 3.0;
        s.move_to(Point::new(bx, e.pos.y));
        s.line_to(Point::new(bx + angle.sin() * e.blade_height, e.pos.y - angle.cos() * e.blade_height));
    }
}

pub(super) fn draw_grass<S: Surface>(s: &mut S, grass: &Pool<GrassTuft>, f: &Frame) {
    let w = f.view.width;
    s.set_stroke_style(&f.palette.text_muted);
    s.set_line_width(0.8);
    s.set_round_cap();

    let mut any = false;
    for e in grass.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -15.0 || x > w + 15.0 || edge_fade(x, w) < 1.0 { continue; }
        if !any {
            s.set_global_alpha(GRASS_ALPHA);
            s.begin_path();
            any = true;
        }
        add_blades(s, x, e, f.wind);
    }
    if any {
        s.stroke();
    }

    for e in grass.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -15.0 || x > w + 15.0 || edge_fade(x, w) >= 1.0 { continue; }
        s.set_global_alpha(entity_alpha(x, e.pos.parallax, w, GRASS_ALPHA));
        s.begin_path();
        add_blades(s, x, e, f.wind);
        s.stroke();
    }
    s.set_global_alpha(1.0);
}
