// explorer-engine - Procedural side-scrolling landscape
//
// A small figure walks right through an endless world: parallax sky, drifting
// creatures, mountains and ground clutter, spawned ahead and culled behind.
// The host drives it one frame at a time with update(dt) then draw().

pub mod color;
pub mod config;
pub mod engine;
pub mod kinematics;
pub mod render;
pub mod sim;
pub mod world;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use color::{ColorCache, ColorSource, Palette};
pub use config::{ConfigError, DeviceClass, EngineOptions, SceneConfig};
pub use engine::{Engine, Mode};
pub use render::{Recording, Surface};
pub use sim::Category;

#[cfg(target_arch = "wasm32")]
pub use wasm::{ExplorerEngine, create_explorer_engine, create_explorer_engine_with_config};
