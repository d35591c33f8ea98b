// config.rs - Scene tuning
//
// Constants are empirical values tuned by eye. Capacities and spawn rules are
// grouped in SceneConfig so a host can override them from JSON.

use serde::Deserialize;
use thiserror::Error;

use crate::sim::Category;

// World
pub const WALK_SPEED: f64 = 45.0;
pub const MAX_DT: f64 = 0.1;
pub const GROUND_Y: f64 = 0.8;
pub const CULL_MARGIN: f64 = 200.0;

// Rendering
pub const FADE: f64 = 60.0;
pub const BUCKETS: usize = 5;

// Figure (screen position as fraction of width, then segment lengths)
pub const SCREEN_X: f64 = 0.35;
pub const HEAD_R: f64 = 5.5;
pub const TORSO: f64 = 14.0;
pub const NECK: f64 = 3.0;
pub const U_LEG: f64 = 8.0;
pub const L_LEG: f64 = 7.0;
pub const U_ARM: f64 = 6.0;
pub const L_ARM: f64 = 5.0;

// Gait
pub const STRIDE: f64 = 6.0;
pub const LIFT: f64 = 6.0;
pub const BOB: f64 = 1.2;
pub const LEAN: f64 = 0.03;

// Reduced-motion pose offsets
pub const STILL_KNEE_X: f64 = 1.5;
pub const STILL_FOOT_X: f64 = 2.0;
pub const STILL_ELBOW_X: f64 = 1.5;
pub const STILL_HAND_X: f64 = 2.0;

/// Mobile devices get fewer entities and sparser spawning
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_mobile(is_mobile: bool) -> Self {
        if is_mobile { Self::Mobile } else { Self::Desktop }
    }

    /// Multiplier applied to every spawn interval
    pub fn interval_scale(self) -> f64 {
        match self {
            Self::Desktop => 1.0,
            Self::Mobile => 1.5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("spawn interval for {category} is invalid: min {min}, max {max}")]
    Interval { category: &'static str, min: f64, max: f64 },
}

/// Per-category entity caps
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Capacities {
    pub star: usize,
    pub cloud: usize,
    pub mountain: usize,
    pub bird: usize,
    pub ufo: usize,
    pub meteor: usize,
    pub balloon: usize,
    pub whale: usize,
    pub jellyfish: usize,
    pub grass_tuft: usize,
    pub pebble: usize,
}

impl Capacities {
    pub fn desktop() -> Self {
        Self {
            star: 30,
            cloud: 6,
            mountain: 12,
            bird: 8,
            ufo: 3,
            meteor: 2,
            balloon: 2,
            whale: 1,
            jellyfish: 2,
            grass_tuft: 20,
            pebble: 10,
        }
    }

    pub fn mobile() -> Self {
        Self {
            star: 18,
            cloud: 4,
            mountain: 10,
            bird: 6,
            ufo: 2,
            meteor: 1,
            balloon: 1,
            whale: 1,
            jellyfish: 1,
            grass_tuft: 12,
            pebble: 6,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Star => self.star,
            Category::Cloud => self.cloud,
            Category::Mountain => self.mountain,
            Category::Bird => self.bird,
            Category::Ufo => self.ufo,
            Category::Meteor => self.meteor,
            Category::Balloon => self.balloon,
            Category::Whale => self.whale,
            Category::Jellyfish => self.jellyfish,
            Category::GrassTuft => self.grass_tuft,
            Category::Pebble => self.pebble,
        }
    }
}

/// When a category first appears and how far apart its spawns are, in world px
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct SpawnRule {
    /// First spawn threshold as a multiple of viewport width
    pub start: f64,
    pub min: f64,
    pub max: f64,
}

impl SpawnRule {
    const fn new(start: f64, min: f64, max: f64) -> Self {
        Self { start, min, max }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpawnRules {
    pub star: SpawnRule,
    pub cloud: SpawnRule,
    pub mountain: SpawnRule,
    pub bird: SpawnRule,
    pub ufo: SpawnRule,
    pub meteor: SpawnRule,
    pub balloon: SpawnRule,
    pub whale: SpawnRule,
    pub jellyfish: SpawnRule,
    pub grass_tuft: SpawnRule,
    pub pebble: SpawnRule,
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            star: SpawnRule::new(0.0, 50.0, 100.0),
            cloud: SpawnRule::new(0.4, 180.0, 350.0),
            mountain: SpawnRule::new(0.8, 400.0, 700.0),
            bird: SpawnRule::new(0.5, 200.0, 400.0),
            meteor: SpawnRule::new(0.8, 400.0, 800.0),
            balloon: SpawnRule::new(2.2, 600.0, 1000.0),
            ufo: SpawnRule::new(3.0, 900.0, 1800.0),
            whale: SpawnRule::new(3.8, 1400.0, 2500.0),
            jellyfish: SpawnRule::new(2.5, 800.0, 1400.0),
            grass_tuft: SpawnRule::new(0.0, 30.0, 70.0),
            pebble: SpawnRule::new(0.2, 40.0, 90.0),
        }
    }
}

impl SpawnRules {
    pub fn get(&self, category: Category) -> SpawnRule {
        match category {
            Category::Star => self.star,
            Category::Cloud => self.cloud,
            Category::Mountain => self.mountain,
            Category::Bird => self.bird,
            Category::Ufo => self.ufo,
            Category::Meteor => self.meteor,
            Category::Balloon => self.balloon,
            Category::Whale => self.whale,
            Category::Jellyfish => self.jellyfish,
            Category::GrassTuft => self.grass_tuft,
            Category::Pebble => self.pebble,
        }
    }
}

/// Capacities and spawn schedule for both device classes
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SceneConfig {
    pub desktop: Capacities,
    pub mobile: Capacities,
    pub spawn: SpawnRules,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            desktop: Capacities::desktop(),
            mobile: Capacities::mobile(),
            spawn: SpawnRules::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a JSON override; missing sections keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let rule = self.spawn.get(category);
            let finite = rule.start.is_finite() && rule.min.is_finite() && rule.max.is_finite();
            if !finite || rule.min < 0.0 || rule.min > rule.max {
                return Err(ConfigError::Interval {
                    category: category.name(),
                    min: rule.min,
                    max: rule.max,
                });
            }
        }
        Ok(())
    }

    pub fn capacities(&self, device: DeviceClass) -> &Capacities {
        match device {
            DeviceClass::Desktop => &self.desktop,
            DeviceClass::Mobile => &self.mobile,
        }
    }
}

/// Construction parameters supplied by the host
#[derive(Clone, Copy, Debug)]
pub struct EngineOptions {
    pub width: f64,
    pub height: f64,
    pub device: DeviceClass,
    pub reduced_motion: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SceneConfig::default().validate().unwrap();
    }

    #[test]
    fn mobile_has_fewer_stars() {
        let config = SceneConfig::default();
        let desktop = config.capacities(DeviceClass::Desktop).get(Category::Star);
        let mobile = config.capacities(DeviceClass::Mobile).get(Category::Star);
        assert!(mobile < desktop);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(r#"{"desktop": {
            "star": 5, "cloud": 1, "mountain": 3, "bird": 1, "ufo": 0, "meteor": 0,
            "balloon": 0, "whale": 0, "jellyfish": 0, "grassTuft": 4, "pebble": 2
        }}"#)
        .unwrap();
        assert_eq!(config.desktop.star, 5);
        assert_eq!(config.desktop.grass_tuft, 4);
        assert_eq!(config.mobile, Capacities::mobile());
        assert_eq!(config.spawn, SpawnRules::default());
    }

    #[test]
    fn rejects_inverted_interval() {
        let mut config = SceneConfig::default();
        config.spawn.whale = SpawnRule { start: 1.0, min: 900.0, max: 100.0 };
        match config.validate() {
            Err(ConfigError::Interval { category, .. }) => assert_eq!(category, "whale"),
            other => panic!("expected interval error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(SceneConfig::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(SceneConfig::from_json(r#"{"speed": 3}"#), Err(ConfigError::Parse(_))));
    }
}
