use serde_wasm_bindgen::from_value;
use trishear_data::TransformConfig;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::{Scene, DEFAULT_CLEAR_COLOR, DEFAULT_FILL_COLOR};

/// JavaScript wrapper for the triangle scene
#[wasm_bindgen]
#[derive(Debug)]
pub struct TrishearRenderer {
    scene: Scene,
}

/// Scene options accepted from JavaScript; every field is optional.
///
/// ```js
/// new TrishearRenderer("#webgl", {
///     transform: { angleDegrees: 45, scale: [1, 1, 1], verticalShear: 0, horizontalShear: 0.5 },
///     clearColor: [1.0, 0.776, 0.598, 1.0],
/// });
/// ```
#[derive(Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SceneOptions {
    transform: TransformConfig,
    clear_color: [f32; 4],
    fill_color: [f32; 4],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            transform: TransformConfig::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
            fill_color: DEFAULT_FILL_COLOR,
        }
    }
}

#[wasm_bindgen]
impl TrishearRenderer {
    /// Create a renderer for the canvas matching `canvas_selector`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_selector: &str, options: JsValue) -> Result<TrishearRenderer, JsValue> {
        let options = if options.is_undefined() || options.is_null() {
            SceneOptions::default()
        } else {
            from_value::<SceneOptions>(options).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let scene = Scene::builder(canvas_selector)
            .transform(options.transform)
            .clear_color(options.clear_color)
            .fill_color(options.fill_color)
            .build()
            .map_err(|e| JsValue::from_str(&format!("Failed to create scene: {e}")))?;

        console::log_1(&"TrishearRenderer initialized successfully".into());
        Ok(TrishearRenderer { scene })
    }

    /// Replace the rotation and scale/shear matrices
    #[wasm_bindgen(js_name = "setTransform")]
    pub fn set_transform(&mut self, transform: JsValue) -> Result<(), JsValue> {
        let transform = from_value::<TransformConfig>(transform)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        self.scene.set_transform(transform);
        Ok(())
    }

    /// Render the triangle to the canvas
    #[wasm_bindgen]
    pub fn render(&mut self) {
        self.scene.render_frame();
    }
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"trishear WASM module loaded".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_options_defaults() {
        let options = SceneOptions::default();
        assert_eq!(options.transform, TransformConfig::default());
        assert_eq!(options.clear_color, DEFAULT_CLEAR_COLOR);
        assert_eq!(options.fill_color, DEFAULT_FILL_COLOR);
    }
}
