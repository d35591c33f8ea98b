// clock.rs - Simulation time and world scroll
//
// One bounded step per frame. A stalled frame (backgrounded tab) is absorbed
// as a single MAX_DT step, never replayed.

use crate::config::{MAX_DT, WALK_SPEED};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldClock {
    pub time: f64,
    pub world_offset: f64,
    pub walk_phase: f64,
    pub wind: f64,
}

impl WorldClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by `dt` seconds and return the step actually taken
    pub fn advance(&mut self, dt: f64) -> f64 {
        let d = clamp_dt(dt);
        self.time += d;
        self.world_offset += WALK_SPEED * d;
        self.walk_phase += d * 5.0;
        self.wind = wind_at(self.time);
        d
    }
}

/// Non-finite and negative steps count as zero
#[inline]
pub fn clamp_dt(dt: f64) -> f64 {
    if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { 0.0 }
}

/// Slow composite oscillation in roughly [-0.5, 0.5]
#[inline]
pub fn wind_at(time: f64) -> f64 {
    (time * 0.2).sin() * 0.3 + (time * 0.07).sin() * 0.2
}
