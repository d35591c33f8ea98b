// wasm.rs - Browser binding
//
// The page owns the canvas and the requestAnimationFrame loop; it hands us the
// 2D context and a callback that resolves CSS custom properties.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::color::ColorSource;
use crate::config::{DeviceClass, EngineOptions, SceneConfig};
use crate::engine::Engine;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).ok();
}

/// `getColor(name) -> string` supplied by the page
pub struct JsColorSource(js_sys::Function);

impl ColorSource for JsColorSource {
    fn color(&self, name: &str) -> String {
        match self.0.call1(&JsValue::NULL, &JsValue::from_str(name)) {
            Ok(value) => value.as_string().unwrap_or_else(|| {
                log::warn!("getColor({name}) returned a non-string");
                String::new()
            }),
            Err(err) => {
                log::warn!("getColor({name}) threw: {err:?}");
                String::new()
            }
        }
    }
}

#[wasm_bindgen]
pub struct ExplorerEngine {
    inner: Engine<CanvasRenderingContext2d, JsColorSource, SmallRng>,
}

#[wasm_bindgen(js_name = createExplorerEngine)]
pub fn create_explorer_engine(
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    get_color: js_sys::Function,
    is_mobile: bool,
    reduced_motion: bool,
) -> ExplorerEngine {
    let options = options(width, height, is_mobile, reduced_motion);
    ExplorerEngine { inner: Engine::new(ctx, JsColorSource(get_color), options, seeded_rng()) }
}

/// Same as createExplorerEngine, with capacities and spawn rules from JSON
#[wasm_bindgen(js_name = createExplorerEngineWithConfig)]
pub fn create_explorer_engine_with_config(
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    get_color: js_sys::Function,
    is_mobile: bool,
    reduced_motion: bool,
    config_json: &str,
) -> Result<ExplorerEngine, JsError> {
    let config = SceneConfig::from_json(config_json)?;
    let options = options(width, height, is_mobile, reduced_motion);
    let inner = Engine::with_config(ctx, JsColorSource(get_color), options, &config, seeded_rng());
    Ok(ExplorerEngine { inner })
}

#[wasm_bindgen]
impl ExplorerEngine {
    pub fn update(&mut self, dt: f64) {
        self.inner.update(dt);
    }

    pub fn draw(&mut self) {
        self.inner.draw();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.inner.resize(width, height);
    }

    #[wasm_bindgen(js_name = onThemeChange)]
    pub fn on_theme_change(&mut self) {
        self.inner.on_theme_change();
    }

    #[wasm_bindgen(js_name = setReducedMotion)]
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.inner.set_reduced_motion(enabled);
    }

    #[wasm_bindgen(getter, js_name = worldOffset)]
    pub fn world_offset(&self) -> f64 {
        self.inner.clock().world_offset
    }
}

fn options(width: f64, height: f64, is_mobile: bool, reduced_motion: bool) -> EngineOptions {
    EngineOptions { width, height, device: DeviceClass::from_mobile(is_mobile), reduced_motion }
}

fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}
