// sky.rs - Stars, meteors and clouds

use std::f64::consts::TAU;

use kurbo::{Point, Vec2};

use super::{Frame, StarDot, Surface, entity_alpha};
use crate::config::BUCKETS;
use crate::sim::{Cloud, Entity, Meteor, Pool, Star};

/// Stars are batched into BUCKETS alpha tiers: at most one fill per tier
/// instead of one per star, at the cost of quantized brightness.
pub(super) fn draw_stars<S: Surface>(s: &mut S, stars: &Pool<Star>, f: &Frame, dots: &mut Vec<StarDot>) {
    let w = f.view.width;
    dots.clear();
    for e in stars.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -10.0 || x > w + 10.0 { continue; }
        let alpha = entity_alpha(x, e.pos.parallax, w, e.twinkle(f.time));
        if alpha <= 0.0 { continue; }
        dots.push(StarDot { x, y: e.pos.y, r: e.size, alpha });
    }

    s.set_fill_style(&f.palette.text_muted);
    for b in 0..BUCKETS {
        let lo = b as f64 / BUCKETS as f64;
        let hi = (b + 1) as f64 / BUCKETS as f64;
        let last = b == BUCKETS - 1;

        let mut any = false;
        for d in dots.iter() {
            if d.alpha >= lo && (last || d.alpha < hi) {
                if !any {
                    s.set_global_alpha((lo + hi) * 0.5);
                    s.begin_path();
                    any = true;
                }
                s.circle(Point::new(d.x, d.y), d.r);
            }
        }
        if any {
            s.fill();
        }
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_meteors<S: Surface>(s: &mut S, meteors: &Pool<Meteor>, f: &Frame) {
    let w = f.view.width;
    for e in meteors.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -150.0 || x > w + 10.0 { continue; }

        let alpha = entity_alpha(x, e.pos.parallax, w, e.opacity());
        let head = Point::new(x, e.pos.y);
        let ms = e.tail_len / 50.0;
        // Tail points back up along the trajectory
        let tail = Vec2::new(e.angle.cos(), -e.angle.sin()) * e.tail_len * 1.5;

        s.set_stroke_style(&f.palette.primary);
        s.set_round_cap();

        s.set_line_width(1.5 + ms);
        s.set_global_alpha(alpha * 0.4);
        s.begin_path();
        s.move_to(head);
        s.line_to(head + tail);
        s.stroke();

        s.set_line_width(1.0 + ms * 0.7);
        s.set_global_alpha(alpha * 0.8);
        s.begin_path();
        s.move_to(head);
        s.line_to(head + tail * 0.5);
        s.stroke();

        // Glow then core
        s.set_fill_style(&f.palette.primary);
        s.set_global_alpha(alpha * 0.4);
        s.begin_path();
        s.arc(head, 2.0 + ms * 2.0, 0.0, TAU);
        s.fill();
        s.set_global_alpha(alpha);
        s.begin_path();
        s.arc(head, 1.0 + ms, 0.0, TAU);
        s.fill();
    }
    s.set_global_alpha(1.0);
}

pub(super) fn draw_clouds<S: Surface>(s: &mut S, clouds: &Pool<Cloud>, f: &Frame) {
    let w = f.view.width;
    s.set_fill_style(&f.palette.text_muted);
    for e in clouds.iter() {
        let x = e.screen_x(f.world_offset);
        if x < -60.0 || x > w + 60.0 { continue; }
        s.set_global_alpha(entity_alpha(x, e.pos.parallax, w, e.base_opacity));
        s.begin_path();
        s.trace(e.outline.elements().iter().copied(), Vec2::new(x, e.pos.y));
        s.fill();
    }
    s.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::render::{Op, Recording};
    use crate::sim::Placement;
    use crate::world::Viewport;

    fn frame<'a>(view: &'a Viewport, palette: &'a Palette) -> Frame<'a> {
        Frame { view, palette, world_offset: 0.0, time: 0.7, wind: 0.0 }
    }

    #[test]
    fn stars_fill_once_per_bucket_at_most() {
        let view = Viewport::new(1200.0, 600.0);
        let palette = Palette::default();
        let mut stars: Pool<Star> = Pool::new(30);
        for i in 0..30 {
            let st = stars.acquire().unwrap();
            st.pos = Placement::new(i as f64 * 40.0, 50.0, 0.1);
            st.size = 1.0;
            st.twinkle_speed = 1.0 + i as f64 * 0.1;
            st.twinkle_offset = i as f64;
        }
        let mut rec = Recording::new();
        let mut dots = Vec::with_capacity(30);
        draw_stars(&mut rec, &stars, &frame(&view, &palette), &mut dots);

        let fills = rec.count(|op| *op == Op::Fill);
        assert!(fills >= 1 && fills <= BUCKETS);
        assert_eq!(rec.count(|op| matches!(op, Op::Arc(..))), dots.len());
    }

    #[test]
    fn offscreen_stars_are_skipped() {
        let view = Viewport::new(800.0, 400.0);
        let palette = Palette::default();
        let mut stars: Pool<Star> = Pool::new(2);
        stars.acquire().unwrap().pos = Placement::new(-50.0, 10.0, 0.1);
        stars.acquire().unwrap().pos = Placement::new(900.0, 10.0, 0.1);
        let mut rec = Recording::new();
        let mut dots = Vec::new();
        draw_stars(&mut rec, &stars, &frame(&view, &palette), &mut dots);
        assert_eq!(rec.count(|op| *op == Op::Fill), 0);
    }
}
