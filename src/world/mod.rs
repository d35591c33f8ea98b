// world/ - World clock and coordinate transforms
//
// Entities live in world space. Each layer scrolls at its own parallax factor,
// so a screen position only exists relative to the current world offset.

mod clock;

pub use clock::WorldClock;

/// Screen position of a world coordinate on a layer with the given parallax
#[inline]
pub fn screen_x(world_x: f64, world_offset: f64, parallax: f64) -> f64 {
    world_x - world_offset * parallax
}

/// Inverse of `screen_x`
#[inline]
pub fn world_x(screen_x: f64, world_offset: f64, parallax: f64) -> f64 {
    screen_x + world_offset * parallax
}

/// Viewport dimensions and the ground baseline derived from them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub ground_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ground_y: height * crate::config::GROUND_Y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_invert() {
        let wx = world_x(300.0, 1000.0, 0.35);
        assert_eq!(screen_x(wx, 1000.0, 0.35), 300.0);
    }

    #[test]
    fn foreground_moves_at_full_speed() {
        assert_eq!(screen_x(500.0, 100.0, 1.0), 400.0);
        assert_eq!(screen_x(500.0, 100.0, 0.1), 490.0);
    }

    #[test]
    fn ground_tracks_height() {
        assert_eq!(Viewport::new(1200.0, 600.0).ground_y, 480.0);
    }
}
