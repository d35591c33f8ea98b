use std::cell::Cell;
use std::rc::Rc;

use explorer_engine::config::{CULL_MARGIN, WALK_SPEED};
use explorer_engine::render::Op;
use explorer_engine::sim::{Entity, Pool, Scene};
use explorer_engine::{Category, DeviceClass, Engine, EngineOptions, Recording};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

type TestEngine = Engine<Recording, fn(&str) -> String, SmallRng>;

fn desktop(reduced_motion: bool, seed: u64) -> TestEngine {
    let options = EngineOptions { width: 1200.0, height: 600.0, device: DeviceClass::Desktop, reduced_motion };
    let colors: fn(&str) -> String = |name| name.to_owned();
    Engine::new(Recording::new(), colors, options, SmallRng::seed_from_u64(seed))
}

fn assert_on_screen<T: Entity>(pool: &Pool<T>, world_offset: f64) {
    for e in pool.iter() {
        let x = e.screen_x(world_offset);
        assert!(x > -CULL_MARGIN, "{:?} left behind at {x}", T::CATEGORY);
        assert!(e.alive());
    }
}

fn assert_scene(scene: &Scene, world_offset: f64) {
    for category in Category::ALL {
        let (len, cap) = scene.occupancy(category);
        assert!(len <= cap, "{category:?}: {len} > {cap}");
    }
    assert_on_screen(&scene.stars, world_offset);
    assert_on_screen(&scene.clouds, world_offset);
    assert_on_screen(&scene.mountains, world_offset);
    assert_on_screen(&scene.birds, world_offset);
    assert_on_screen(&scene.meteors, world_offset);
    assert_on_screen(&scene.balloons, world_offset);
    assert_on_screen(&scene.ufos, world_offset);
    assert_on_screen(&scene.whales, world_offset);
    assert_on_screen(&scene.jellyfish, world_offset);
    assert_on_screen(&scene.grass, world_offset);
    assert_on_screen(&scene.pebbles, world_offset);
}

#[test]
fn walks_and_spawns_stars() {
    let mut engine = desktop(false, 7);
    for _ in 0..100 {
        engine.update(0.016);
    }
    let expected = 100.0 * 0.016 * WALK_SPEED;
    assert!((engine.clock().world_offset - expected).abs() < 1e-9);
    assert!(engine.spawner().spawn_count(Category::Star) >= 1);
}

#[test]
fn long_run_keeps_invariants() {
    let mut engine = desktop(false, 11);
    let mut rng = SmallRng::seed_from_u64(99);
    for step in 0..4000 {
        let dt = match step % 500 {
            0 => f64::NAN,
            1 => 5.0,
            2 => -1.0,
            _ => rng.gen_range(0.005..0.05),
        };
        engine.update(dt);
        assert_scene(engine.scene(), engine.clock().world_offset);
        if step % 250 == 0 {
            engine.draw();
            engine.surface_mut().clear();
        }
    }
    // Whales and UFOs start late; a long walk reaches them
    assert!(engine.spawner().spawn_count(Category::Whale) >= 1);
    assert!(engine.spawner().spawn_count(Category::Mountain) >= 1);
}

#[test]
fn meteor_burns_out() {
    let mut engine = desktop(false, 3);
    let view = *engine.viewport();
    let offset = engine.clock().world_offset;
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(engine.scene_mut().spawn(Category::Meteor, 600.0, offset, &view, &mut rng), 1);

    // The first tick may add a scheduled meteor of its own
    for _ in 0..20 {
        engine.update(0.05);
    }
    assert!(engine.scene().meteors.len() >= 1);

    // 2 life at 1.5 per second is gone after 1.33s
    for _ in 0..10 {
        engine.update(0.05);
    }
    assert_eq!(engine.scene().meteors.len(), 0);
}

#[test]
fn reduced_motion_frames_are_identical() {
    let mut engine = desktop(false, 21);
    for _ in 0..30 {
        engine.update(0.016);
    }
    engine.set_reduced_motion(true);

    engine.draw();
    let first = engine.surface().clone();
    engine.surface_mut().clear();

    for _ in 0..50 {
        engine.update(0.05);
    }
    engine.draw();
    assert_eq!(engine.surface().ops(), first.ops());
}

#[test]
fn theme_change_repaints_with_new_colors() {
    let dark = Rc::new(Cell::new(false));
    let theme = dark.clone();
    let colors = move |name: &str| {
        if theme.get() { format!("dark{name}") } else { format!("light{name}") }
    };
    let options = EngineOptions { width: 800.0, height: 400.0, device: DeviceClass::Mobile, reduced_motion: false };
    let mut engine = Engine::new(Recording::new(), colors, options, SmallRng::seed_from_u64(2));

    engine.draw();
    assert!(engine.surface().ops().iter().any(|op| matches!(op, Op::FillStyle(c) if c == "light--color-bg")));

    // Cached until the host says the theme changed
    dark.set(true);
    engine.surface_mut().clear();
    engine.draw();
    assert!(!engine.surface().ops().iter().any(|op| matches!(op, Op::FillStyle(c) if c.starts_with("dark"))));

    engine.on_theme_change();
    engine.surface_mut().clear();
    engine.draw();
    assert!(engine.surface().ops().iter().any(|op| matches!(op, Op::FillStyle(c) if c == "dark--color-bg")));
}

#[test]
fn resize_moves_ground_without_reseeding() {
    let mut engine = desktop(false, 8);
    for _ in 0..10 {
        engine.update(0.016);
    }
    let before = engine.scene().total();
    let offset = engine.clock().world_offset;

    engine.resize(600.0, 900.0);
    assert_eq!(engine.viewport().ground_y, 720.0);
    assert_eq!(engine.scene().total(), before);
    assert_eq!(engine.clock().world_offset, offset);
}

#[test]
fn mobile_scene_is_smaller() {
    let colors: fn(&str) -> String = |name| name.to_owned();
    let options = EngineOptions { width: 1200.0, height: 600.0, device: DeviceClass::Mobile, reduced_motion: false };
    let mobile = Engine::new(Recording::new(), colors, options, SmallRng::seed_from_u64(4));
    let desktop = desktop(false, 4);
    assert!(mobile.scene().total() < desktop.scene().total());
    assert!(mobile.scene().stars.capacity() < desktop.scene().stars.capacity());
}
