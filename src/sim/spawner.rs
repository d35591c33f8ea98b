// spawner.rs - Distance-based spawn schedules
//
// Each category waits until the right edge of the world window passes its
// next threshold. A full category is rescheduled without spawning: spawns are
// skipped under back-pressure, never queued.

use rand::Rng;

use super::{Category, Scene, uniform};
use crate::config::{DeviceClass, SpawnRules};
use crate::world::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schedule {
    /// World threshold the right edge must reach
    pub next: f64,
    pub min: f64,
    pub max: f64,
}

pub struct Spawner {
    rules: SpawnRules,
    scale: f64,
    schedules: [Schedule; 11],
    spawned: [u64; 11],
}

impl Spawner {
    pub fn new(rules: &SpawnRules, device: DeviceClass, width: f64) -> Self {
        let mut spawner = Self {
            rules: rules.clone(),
            scale: device.interval_scale(),
            schedules: [Schedule { next: 0.0, min: 0.0, max: 0.0 }; 11],
            spawned: [0; 11],
        };
        spawner.reset(width);
        spawner
    }

    /// Restart every schedule for a fresh scene at world offset 0
    pub fn reset(&mut self, width: f64) {
        for category in Category::ALL {
            let rule = self.rules.get(category);
            self.schedules[category.index()] = Schedule {
                next: width * rule.start,
                min: rule.min * self.scale,
                max: rule.max * self.scale,
            };
        }
    }

    pub fn schedule(&self, category: Category) -> Schedule {
        self.schedules[category.index()]
    }

    /// Spawn events so far (clusters and flocks count once)
    pub fn spawn_count(&self, category: Category) -> u64 {
        self.spawned[category.index()]
    }

    /// Run every category's check in fixed order
    pub fn tick<R: Rng + ?Sized>(&mut self, scene: &mut Scene, view: &Viewport, world_offset: f64, rng: &mut R) {
        for category in Category::ALL {
            self.try_spawn(category, scene, view, world_offset, rng);
        }
    }

    /// Returns the number of records created
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        category: Category,
        scene: &mut Scene,
        view: &Viewport,
        world_offset: f64,
        rng: &mut R,
    ) -> usize {
        let i = category.index();
        let right_edge = world_offset + view.width;
        if right_edge < self.schedules[i].next { return 0; }

        let created = if scene.is_full(category) {
            log::trace!("{} at capacity, skipping spawn", category.name());
            0
        } else {
            let screen_x = view.width + uniform(rng, 20.0, 80.0);
            scene.spawn(category, screen_x, world_offset, view, rng)
        };
        if created > 0 {
            self.spawned[i] += 1;
        }

        let s = &mut self.schedules[i];
        s.next = right_edge + uniform(rng, s.min, s.max);
        created
    }
}
