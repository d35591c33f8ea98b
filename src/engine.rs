// engine.rs - The scene facade
//
// Owns every pool, schedule, cached color and scratch buffer. The host calls
// update(dt) then draw() once per animation frame; nothing else runs between.
//
//   Seeded --update--> Running <--set_reduced_motion--> Reduced

use rand::Rng;

use crate::color::{ColorCache, ColorSource};
use crate::config::{DeviceClass, EngineOptions, SCREEN_X, SceneConfig};
use crate::kinematics::Pose;
use crate::render::{Frame, Renderer, Surface};
use crate::sim::{Scene, SeedPlan, Spawner, cull};
use crate::world::{Viewport, WorldClock};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Fresh scene, not yet ticked
    Seeded,
    Running,
    /// Static scene, clock frozen
    Reduced,
}

pub struct Engine<S, C, R> {
    surface: S,
    colors: C,
    rng: R,
    cache: ColorCache,
    device: DeviceClass,
    view: Viewport,
    clock: WorldClock,
    scene: Scene,
    spawner: Spawner,
    renderer: Renderer,
    mode: Mode,
}

impl<S: Surface, C: ColorSource, R: Rng> Engine<S, C, R> {
    pub fn new(surface: S, colors: C, options: EngineOptions, rng: R) -> Self {
        Self::with_config(surface, colors, options, &SceneConfig::default(), rng)
    }

    pub fn with_config(surface: S, colors: C, options: EngineOptions, config: &SceneConfig, rng: R) -> Self {
        let caps = config.capacities(options.device);
        let view = Viewport::new(sanitize(options.width), sanitize(options.height));
        let mut engine = Self {
            surface,
            colors,
            rng,
            cache: ColorCache::new(),
            device: options.device,
            view,
            clock: WorldClock::new(),
            scene: Scene::new(caps),
            spawner: Spawner::new(&config.spawn, options.device, view.width),
            renderer: Renderer::new(caps.star),
            mode: Mode::Seeded,
        };
        engine.reseed(options.reduced_motion);
        engine
    }

    /// Advance the simulation by `dt` seconds. No-op under reduced motion.
    pub fn update(&mut self, dt: f64) {
        if self.mode == Mode::Reduced { return; }

        let d = self.clock.advance(dt);
        if d == 0.0 { return; }
        self.mode = Mode::Running;

        self.scene.advance(d, self.clock.wind);
        self.spawner.tick(&mut self.scene, &self.view, self.clock.world_offset, &mut self.rng);
        cull(&mut self.scene, self.clock.world_offset);
    }

    /// Paint the current state
    pub fn draw(&mut self) {
        let pose = self.pose();
        let palette = self.cache.get(&self.colors);
        let frame = Frame {
            view: &self.view,
            palette,
            world_offset: self.clock.world_offset,
            time: self.clock.time,
            wind: self.clock.wind,
        };
        self.renderer.draw(&mut self.surface, &self.scene, &frame, &pose);
    }

    /// Update viewport and ground baseline. The scene is kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        self.view = Viewport::new(width, height);
        log::debug!("resized to {width}x{height}");
    }

    /// Drop cached colors; the next draw reads them again
    pub fn on_theme_change(&mut self) {
        self.cache.invalidate();
        log::debug!("theme changed, color cache invalidated");
    }

    /// Either direction resets the clock and reseeds the scene
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        log::debug!("reduced motion {}", if enabled { "on" } else { "off" });
        self.reseed(enabled);
    }

    fn reseed(&mut self, reduced: bool) {
        self.clock.reset();
        self.spawner.reset(self.view.width);
        let plan = if reduced { SeedPlan::still(self.device) } else { SeedPlan::full(self.device) };
        self.scene.seed(&plan, &self.view, &mut self.rng);
        self.mode = if reduced { Mode::Reduced } else { Mode::Seeded };
        log::debug!("seeded {} entities ({:?})", self.scene.total(), self.mode);
    }

    /// The explorer's pose for the current frame
    pub fn pose(&self) -> Pose {
        let x = self.view.width * SCREEN_X;
        let feet_y = self.view.ground_y - 1.0;
        match self.mode {
            Mode::Reduced => Pose::still(x, feet_y),
            _ => Pose::walking(x, feet_y, self.clock.walk_phase),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn reduced_motion(&self) -> bool {
        self.mode == Mode::Reduced
    }

    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Degenerate host sizes collapse to a 1px viewport
fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(1.0) } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Op, Recording};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn options(reduced_motion: bool) -> EngineOptions {
        EngineOptions { width: 1200.0, height: 600.0, device: DeviceClass::Desktop, reduced_motion }
    }

    fn engine(reduced: bool) -> Engine<Recording, fn(&str) -> String, SmallRng> {
        let colors: fn(&str) -> String = |name| name.to_owned();
        Engine::new(Recording::new(), colors, options(reduced), SmallRng::seed_from_u64(42))
    }

    #[test]
    fn starts_seeded_then_runs() {
        let mut e = engine(false);
        assert_eq!(e.mode(), Mode::Seeded);
        e.update(0.016);
        assert_eq!(e.mode(), Mode::Running);
    }

    #[test]
    fn zero_or_bad_dt_does_not_start() {
        let mut e = engine(false);
        e.update(0.0);
        e.update(f64::NAN);
        assert_eq!(e.mode(), Mode::Seeded);
        assert_eq!(e.clock().world_offset, 0.0);
    }

    #[test]
    fn reduced_motion_freezes_clock() {
        let mut e = engine(false);
        e.update(0.05);
        e.set_reduced_motion(true);
        assert_eq!(e.clock(), &WorldClock::new());
        e.update(0.05);
        assert_eq!(e.clock().time, 0.0);
        assert_eq!(e.mode(), Mode::Reduced);
    }

    #[test]
    fn leaving_reduced_motion_resumes_from_fresh_seed() {
        let mut e = engine(true);
        assert_eq!(e.scene().birds.len(), 0);
        e.set_reduced_motion(false);
        assert_eq!(e.mode(), Mode::Seeded);
        assert!(e.scene().birds.len() > 0);
        e.update(0.02);
        assert!(e.clock().world_offset > 0.0);
    }

    #[test]
    fn resize_keeps_scene() {
        let mut e = engine(false);
        let total = e.scene().total();
        e.resize(800.0, 400.0);
        assert_eq!(e.viewport().ground_y, 320.0);
        assert_eq!(e.scene().total(), total);

        e.resize(f64::NAN, 400.0);
        e.resize(0.0, 400.0);
        assert_eq!(e.viewport().width, 800.0);
    }

    #[test]
    fn theme_change_rereads_colors_on_next_draw() {
        let reads = Rc::new(Cell::new(0));
        let counter = reads.clone();
        let colors = move |name: &str| {
            counter.set(counter.get() + 1);
            name.to_owned()
        };
        let mut e = Engine::new(Recording::new(), colors, options(false), SmallRng::seed_from_u64(1));
        e.draw();
        e.draw();
        assert_eq!(reads.get(), 6);
        e.on_theme_change();
        assert_eq!(reads.get(), 6);
        e.draw();
        assert_eq!(reads.get(), 12);
    }

    #[test]
    fn draw_starts_with_background() {
        let mut e = engine(false);
        e.draw();
        let ops = e.surface().ops();
        assert_eq!(ops[1], Op::FillStyle("--color-bg".into()));
        assert_eq!(ops[2], Op::FillRect(0.0, 0.0, 1200.0, 600.0));
    }

    #[test]
    fn degenerate_size_is_clamped() {
        let colors: fn(&str) -> String = |name| name.to_owned();
        let opts = EngineOptions { width: -5.0, height: f64::NAN, ..options(false) };
        let mut e = Engine::new(Recording::new(), colors, opts, SmallRng::seed_from_u64(3));
        assert_eq!(e.viewport().width, 1.0);
        e.update(0.1);
        e.draw();
    }
}
