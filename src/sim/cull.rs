// cull.rs - Recycle entities that left the screen or expired
//
// Runs once per update, after spawning. Survivors may be reordered.

use super::{Entity, Pool, Scene};
use crate::config::CULL_MARGIN;

/// Release every entity past the left cull margin, and every expired one
pub fn cull(scene: &mut Scene, world_offset: f64) {
    sweep(&mut scene.stars, world_offset);
    sweep(&mut scene.clouds, world_offset);
    sweep(&mut scene.mountains, world_offset);
    sweep(&mut scene.birds, world_offset);
    sweep(&mut scene.meteors, world_offset);
    sweep(&mut scene.balloons, world_offset);
    sweep(&mut scene.ufos, world_offset);
    sweep(&mut scene.whales, world_offset);
    sweep(&mut scene.jellyfish, world_offset);
    sweep(&mut scene.grass, world_offset);
    sweep(&mut scene.pebbles, world_offset);
}

fn sweep<T: Entity>(pool: &mut Pool<T>, world_offset: f64) {
    pool.retain(|e| e.screen_x(world_offset) > -CULL_MARGIN && e.alive());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Capacities;
    use crate::sim::Placement;

    #[test]
    fn culls_past_left_margin() {
        let mut scene = Scene::new(&Capacities::desktop());
        for x in [-250.0, -199.0, 0.0, 1000.0] {
            scene.pebbles.acquire().unwrap().pos = Placement::new(x, 480.0, 1.0);
        }
        cull(&mut scene, 0.0);
        assert_eq!(scene.pebbles.len(), 3);
        assert_eq!(scene.pebbles.free_len(), 1);

        // Foreground scrolls at full speed
        cull(&mut scene, 900.0);
        assert_eq!(scene.pebbles.len(), 1);
    }

    #[test]
    fn parallax_slows_culling() {
        let mut scene = Scene::new(&Capacities::desktop());
        scene.stars.acquire().unwrap().pos = Placement::new(0.0, 10.0, 0.1);
        cull(&mut scene, 1900.0);
        assert_eq!(scene.stars.len(), 1);
        cull(&mut scene, 2100.0);
        assert_eq!(scene.stars.len(), 0);
    }

    #[test]
    fn expired_meteors_are_culled_on_screen() {
        let mut scene = Scene::new(&Capacities::desktop());
        let m = scene.meteors.acquire().unwrap();
        m.pos = Placement::new(500.0, 50.0, 0.05);
        m.life = 0.0;
        m.max_life = 2.0;
        cull(&mut scene, 0.0);
        assert!(scene.meteors.is_empty());
    }
}
