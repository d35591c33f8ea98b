// sim/ - Scene entities
//
// Eleven categories, each in its own fixed-capacity pool. Records are
// re-initialized in place when reused, so spawning never allocates once the
// pools are warm.

mod creatures;
mod cull;
mod flyers;
mod ground;
mod pool;
mod sky;
mod spawner;

pub use creatures::{Jellyfish, Tentacle, Whale, MAX_TENTACLES};
pub use cull::cull;
pub use flyers::{Balloon, Bird, Ufo};
pub use ground::{GrassTuft, Mountain, Pebble, MAX_BLADES};
pub use pool::Pool;
pub use sky::{Cloud, Meteor, Star};
pub use spawner::{Schedule, Spawner};

use rand::Rng;

use crate::config::{Capacities, DeviceClass};
use crate::world::{self, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Star,
    Cloud,
    Mountain,
    Bird,
    Meteor,
    Balloon,
    Ufo,
    Whale,
    Jellyfish,
    GrassTuft,
    Pebble,
}

impl Category {
    /// Spawn order within a tick
    pub const ALL: [Category; 11] = [
        Category::Star,
        Category::Cloud,
        Category::Mountain,
        Category::Bird,
        Category::Meteor,
        Category::Balloon,
        Category::Ufo,
        Category::Whale,
        Category::Jellyfish,
        Category::GrassTuft,
        Category::Pebble,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Star => "star",
            Category::Cloud => "cloud",
            Category::Mountain => "mountain",
            Category::Bird => "bird",
            Category::Meteor => "meteor",
            Category::Balloon => "balloon",
            Category::Ufo => "ufo",
            Category::Whale => "whale",
            Category::Jellyfish => "jellyfish",
            Category::GrassTuft => "grassTuft",
            Category::Pebble => "pebble",
        }
    }
}

/// World position shared by every entity. Parallax is set on init and never
/// changes while the record is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub world_x: f64,
    pub y: f64,
    pub parallax: f64,
}

impl Placement {
    pub fn new(world_x: f64, y: f64, parallax: f64) -> Self {
        Self { world_x, y, parallax }
    }
}

pub trait Entity: Default {
    const CATEGORY: Category;
    const PARALLAX: f64;

    /// Re-initialize a (possibly recycled) record at `world_x`
    fn init<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R);

    fn placement(&self) -> &Placement;

    /// Per-step motion; static entities only scroll with the world
    fn advance(&mut self, _dt: f64, _wind: f64) {}

    /// Lifetime predicate, independent of position
    fn alive(&self) -> bool {
        true
    }

    fn screen_x(&self, world_offset: f64) -> f64 {
        let p = self.placement();
        world::screen_x(p.world_x, world_offset, p.parallax)
    }
}

// Random helpers. Written against the raw generator so an empty or inverted
// range never panics.

#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + rng.r#gen::<f64>() * (b - a)
}

/// Integer in [a, b]
#[inline]
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, a: usize, b: usize) -> usize {
    (uniform(rng, a as f64, b as f64 + 1.0).floor() as usize).clamp(a, b.max(a))
}

#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.r#gen::<f64>() < p
}

/// How many of each category a fresh scene starts with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedPlan {
    pub stars: usize,
    pub clouds: usize,
    pub grass: usize,
    pub pebbles: usize,
    pub birds: bool,
    pub balloon: bool,
}

impl SeedPlan {
    pub fn full(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => Self { stars: 20, clouds: 4, grass: 12, pebbles: 6, birds: true, balloon: true },
            DeviceClass::Mobile => Self { stars: 14, clouds: 3, grass: 8, pebbles: 4, birds: true, balloon: true },
        }
    }

    /// Smaller static scene for reduced motion: nothing that would fly
    pub fn still(device: DeviceClass) -> Self {
        Self { birds: false, balloon: false, ..Self::full(device) }
    }
}

pub struct Scene {
    pub stars: Pool<Star>,
    pub clouds: Pool<Cloud>,
    pub mountains: Pool<Mountain>,
    pub birds: Pool<Bird>,
    pub meteors: Pool<Meteor>,
    pub balloons: Pool<Balloon>,
    pub ufos: Pool<Ufo>,
    pub whales: Pool<Whale>,
    pub jellyfish: Pool<Jellyfish>,
    pub grass: Pool<GrassTuft>,
    pub pebbles: Pool<Pebble>,
}

impl Scene {
    pub fn new(caps: &Capacities) -> Self {
        Self {
            stars: Pool::new(caps.star),
            clouds: Pool::new(caps.cloud),
            mountains: Pool::new(caps.mountain),
            birds: Pool::new(caps.bird),
            meteors: Pool::new(caps.meteor),
            balloons: Pool::new(caps.balloon),
            ufos: Pool::new(caps.ufo),
            whales: Pool::new(caps.whale),
            jellyfish: Pool::new(caps.jellyfish),
            grass: Pool::new(caps.grass_tuft),
            pebbles: Pool::new(caps.pebble),
        }
    }

    /// (active, capacity) for a category
    pub fn occupancy(&self, category: Category) -> (usize, usize) {
        match category {
            Category::Star => (self.stars.len(), self.stars.capacity()),
            Category::Cloud => (self.clouds.len(), self.clouds.capacity()),
            Category::Mountain => (self.mountains.len(), self.mountains.capacity()),
            Category::Bird => (self.birds.len(), self.birds.capacity()),
            Category::Meteor => (self.meteors.len(), self.meteors.capacity()),
            Category::Balloon => (self.balloons.len(), self.balloons.capacity()),
            Category::Ufo => (self.ufos.len(), self.ufos.capacity()),
            Category::Whale => (self.whales.len(), self.whales.capacity()),
            Category::Jellyfish => (self.jellyfish.len(), self.jellyfish.capacity()),
            Category::GrassTuft => (self.grass.len(), self.grass.capacity()),
            Category::Pebble => (self.pebbles.len(), self.pebbles.capacity()),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.occupancy(category).0
    }

    pub fn is_full(&self, category: Category) -> bool {
        let (n, cap) = self.occupancy(category);
        n >= cap
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&c| self.len(c)).sum()
    }

    pub fn clear(&mut self) {
        self.stars.clear();
        self.clouds.clear();
        self.mountains.clear();
        self.birds.clear();
        self.meteors.clear();
        self.balloons.clear();
        self.ufos.clear();
        self.whales.clear();
        self.jellyfish.clear();
        self.grass.clear();
        self.pebbles.clear();
    }

    /// Move everything that moves on its own
    pub fn advance(&mut self, dt: f64, wind: f64) {
        self.birds.for_each_mut(|e| e.advance(dt, wind));
        self.ufos.for_each_mut(|e| e.advance(dt, wind));
        self.meteors.for_each_mut(|e| e.advance(dt, wind));
        self.balloons.for_each_mut(|e| e.advance(dt, wind));
        self.whales.for_each_mut(|e| e.advance(dt, wind));
        self.jellyfish.for_each_mut(|e| e.advance(dt, wind));
        self.clouds.for_each_mut(|e| e.advance(dt, wind));
    }

    /// Spawn one unit of `category` at a screen position. Returns how many
    /// records were created (clusters and flocks may create several).
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        category: Category,
        screen_x: f64,
        world_offset: f64,
        view: &Viewport,
        rng: &mut R,
    ) -> usize {
        match category {
            Category::Mountain => {
                let wx = world::world_x(screen_x, world_offset, Mountain::PARALLAX);
                self.spawn_mountain_cluster(wx, view, rng)
            }
            Category::Bird => {
                let wx = world::world_x(screen_x, world_offset, Bird::PARALLAX);
                self.spawn_bird_group(wx, view, rng)
            }
            Category::Star => spawn_one(&mut self.stars, screen_x, world_offset, view, rng),
            Category::Cloud => spawn_one(&mut self.clouds, screen_x, world_offset, view, rng),
            Category::Meteor => spawn_one(&mut self.meteors, screen_x, world_offset, view, rng),
            Category::Balloon => spawn_one(&mut self.balloons, screen_x, world_offset, view, rng),
            Category::Ufo => spawn_one(&mut self.ufos, screen_x, world_offset, view, rng),
            Category::Whale => spawn_one(&mut self.whales, screen_x, world_offset, view, rng),
            Category::Jellyfish => spawn_one(&mut self.jellyfish, screen_x, world_offset, view, rng),
            Category::GrassTuft => spawn_one(&mut self.grass, screen_x, world_offset, view, rng),
            Category::Pebble => spawn_one(&mut self.pebbles, screen_x, world_offset, view, rng),
        }
    }

    /// 3-5 peaks with a triangular height profile, tallest inserted first
    pub fn spawn_mountain_cluster<R: Rng + ?Sized>(&mut self, center_x: f64, view: &Viewport, rng: &mut R) -> usize {
        let n = uniform_int(rng, 3, 5);
        let half = (n - 1) as f64 * 0.5;
        let room = self.mountains.capacity().saturating_sub(self.mountains.len()).min(n);

        // (height, world_x)
        let mut peaks = [(0.0f64, 0.0f64); 5];
        for (i, peak) in peaks.iter_mut().enumerate().take(room) {
            let c = 1.0 - (i as f64 - half).abs() / (half + 0.5);
            let h = (uniform(rng, 55.0, 115.0) + c * uniform(rng, 20.0, 50.0)).min(view.ground_y * 0.85);
            let x = center_x + (i as f64 - half) * uniform(rng, 30.0, 55.0);
            *peak = (h, x);
        }
        let peaks = &mut peaks[..room];
        peaks.sort_unstable_by(|a, b| b.0.total_cmp(&a.0));

        let mut spawned = 0;
        for &(h, x) in peaks.iter() {
            let Some(m) = place(&mut self.mountains, x, view, rng) else { break };
            m.set_peak_height(h);
            spawned += 1;
        }
        spawned
    }

    /// A leader plus, sometimes, one or two trailing followers
    pub fn spawn_bird_group<R: Rng + ?Sized>(&mut self, world_x: f64, view: &Viewport, rng: &mut R) -> usize {
        let group = if chance(rng, 0.3) { uniform_int(rng, 2, 3) } else { 1 };

        let Some(leader) = self.birds.acquire() else { return 0 };
        leader.init(world_x, view, rng);
        let (y, velocity) = (leader.pos.y, leader.velocity);

        let mut spawned = 1;
        for i in 1..group {
            let Some(f) = self.birds.acquire() else { break };
            f.init(world_x, view, rng);
            let side = if i % 2 == 0 { -1.0 } else { 1.0 };
            let k = i as f64;
            f.follow(y, velocity, -uniform(rng, 12.0, 20.0) * k, side * uniform(rng, 6.0, 12.0) * k);
            spawned += 1;
        }
        spawned
    }

    /// Populate an empty scene across the viewport (world offset 0)
    pub fn seed<R: Rng + ?Sized>(&mut self, plan: &SeedPlan, view: &Viewport, rng: &mut R) {
        self.clear();
        self.seed_sky(plan, view, rng);
        if plan.birds {
            self.seed_birds(view, rng);
        }
        self.seed_ground(plan, view, rng);
    }

    fn seed_sky<R: Rng + ?Sized>(&mut self, plan: &SeedPlan, view: &Viewport, rng: &mut R) {
        let w = view.width;

        let n = plan.stars.max(1) as f64;
        for i in 0..plan.stars {
            let x = w * (i as f64 / n) + uniform(rng, 0.0, w / n);
            place(&mut self.stars, x, view, rng);
        }

        let n = plan.clouds.max(1) as f64;
        for i in 0..plan.clouds {
            let i = i as f64;
            let x = w * uniform(rng, i / n, (i + 0.7) / n);
            place(&mut self.clouds, x, view, rng);
        }

        if plan.balloon {
            let x = w * uniform(rng, 0.55, 0.8);
            place(&mut self.balloons, x, view, rng);
        }
    }

    fn seed_birds<R: Rng + ?Sized>(&mut self, view: &Viewport, rng: &mut R) {
        let w = view.width;
        let x = w * uniform(rng, 0.25, 0.4);
        place(&mut self.birds, x, view, rng);

        let x = w * uniform(rng, 0.65, 0.85);
        let Some(leader) = place(&mut self.birds, x, view, rng) else { return };
        let (y, velocity) = (leader.pos.y, leader.velocity);

        if let Some(f) = place(&mut self.birds, x, view, rng) {
            f.follow(y, velocity, -uniform(rng, 12.0, 18.0), uniform(rng, 6.0, 10.0));
        }
    }

    fn seed_ground<R: Rng + ?Sized>(&mut self, plan: &SeedPlan, view: &Viewport, rng: &mut R) {
        let w = view.width;
        self.spawn_mountain_cluster(w * uniform(rng, 0.2, 0.35), view, rng);
        self.spawn_mountain_cluster(w * uniform(rng, 0.7, 0.9), view, rng);

        let n = plan.grass.max(1) as f64;
        for i in 0..plan.grass {
            let x = w * (i as f64 / n) + uniform(rng, 0.0, w / n * 0.8);
            place(&mut self.grass, x, view, rng);
        }

        let n = plan.pebbles.max(1) as f64;
        for i in 0..plan.pebbles {
            let x = w * (i as f64 / n) + uniform(rng, 0.0, w / n * 0.8);
            place(&mut self.pebbles, x, view, rng);
        }
    }
}

/// Acquire and initialize a record at a world position
fn place<'a, T: Entity, R: Rng + ?Sized>(
    pool: &'a mut Pool<T>,
    world_x: f64,
    view: &Viewport,
    rng: &mut R,
) -> Option<&'a mut T> {
    let Some(e) = pool.acquire() else {
        log::trace!("{} pool full, skipping", T::CATEGORY.name());
        return None;
    };
    e.init(world_x, view, rng);
    Some(e)
}

fn spawn_one<T: Entity, R: Rng + ?Sized>(
    pool: &mut Pool<T>,
    screen_x: f64,
    world_offset: f64,
    view: &Viewport,
    rng: &mut R,
) -> usize {
    let wx = world::world_x(screen_x, world_offset, T::PARALLAX);
    place(pool, wx, view, rng).map_or(0, |_| 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn scene() -> (Scene, Viewport, SmallRng) {
        (Scene::new(&Capacities::desktop()), Viewport::new(1200.0, 600.0), SmallRng::seed_from_u64(11))
    }

    #[test]
    fn uniform_int_is_inclusive_and_bounded() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let v = uniform_int(&mut rng, 3, 5);
            assert!((3..=5).contains(&v));
            seen[v] = true;
        }
        assert!(seen[3] && seen[4] && seen[5]);
        assert_eq!(uniform_int(&mut rng, 4, 4), 4);
    }

    #[test]
    fn seed_fills_viewport() {
        let (mut scene, view, mut rng) = scene();
        scene.seed(&SeedPlan::full(DeviceClass::Desktop), &view, &mut rng);
        assert_eq!(scene.len(Category::Star), 20);
        assert_eq!(scene.len(Category::Cloud), 4);
        assert_eq!(scene.len(Category::Balloon), 1);
        assert_eq!(scene.len(Category::Bird), 3);
        assert_eq!(scene.len(Category::GrassTuft), 12);
        assert_eq!(scene.len(Category::Pebble), 6);
        assert!(scene.len(Category::Mountain) >= 6);
        assert!(scene.stars.iter().all(|s| (0.0..=view.width).contains(&s.pos.world_x)));
    }

    #[test]
    fn still_plan_has_no_flyers() {
        let (mut scene, view, mut rng) = scene();
        scene.seed(&SeedPlan::still(DeviceClass::Desktop), &view, &mut rng);
        assert_eq!(scene.len(Category::Bird), 0);
        assert_eq!(scene.len(Category::Balloon), 0);
        assert_eq!(scene.len(Category::Star), 20);
    }

    #[test]
    fn reseed_reuses_records() {
        let (mut scene, view, mut rng) = scene();
        let plan = SeedPlan::full(DeviceClass::Desktop);
        scene.seed(&plan, &view, &mut rng);
        let stars = scene.stars.allocated();
        scene.seed(&plan, &view, &mut rng);
        assert_eq!(scene.stars.allocated(), stars);
    }

    #[test]
    fn mountain_cluster_is_sorted_and_capped() {
        let mut caps = Capacities::desktop();
        caps.mountain = 4;
        let mut scene = Scene::new(&caps);
        let view = Viewport::new(1200.0, 600.0);
        let mut rng = SmallRng::seed_from_u64(5);

        let first = scene.spawn_mountain_cluster(600.0, &view, &mut rng);
        assert!((3..=4).contains(&first));
        let heights: Vec<f64> = scene.mountains.iter().map(|m| m.peak_height).collect();
        assert!(heights.windows(2).all(|w| w[0] >= w[1]));
        assert!(heights.iter().all(|&h| h <= view.ground_y * 0.85));

        scene.spawn_mountain_cluster(900.0, &view, &mut rng);
        assert_eq!(scene.len(Category::Mountain), 4);
    }

    #[test]
    fn followers_share_leader_altitude() {
        let (mut scene, view, mut rng) = scene();
        for _ in 0..40 {
            scene.birds.clear();
            let n = scene.spawn_bird_group(100.0, &view, &mut rng);
            let birds: Vec<&Bird> = scene.birds.iter().collect();
            assert_eq!(birds.len(), n);
            let leader = birds.iter().find(|b| b.formation_x == 0.0).unwrap();
            for b in &birds {
                assert_eq!(b.pos.y, leader.pos.y);
                assert_eq!(b.velocity, leader.velocity);
            }
        }
    }

    #[test]
    fn spawn_uses_category_parallax() {
        let (mut scene, view, mut rng) = scene();
        scene.spawn(Category::Pebble, 1250.0, 400.0, &view, &mut rng);
        let p = scene.pebbles.iter().next().unwrap();
        assert_eq!(p.pos.parallax, 1.0);
        assert!((p.screen_x(400.0) - 1250.0).abs() < 1e-9);
    }
}
