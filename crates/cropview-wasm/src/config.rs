//! WASM bindings for the cropper configuration.

use crate::types::{to_js_error, JsSize};
use cropview_core::config::CropperConfig;
use cropview_core::media::ObjectFit;
use wasm_bindgen::prelude::*;

/// Cropper configuration for JavaScript.
///
/// Starts from the defaults (aspect 4/3, zoom 1 to 3, restricted panning).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const config = JsCropperConfig.from_json({ aspect: 16 / 9, maxZoom: 5 });
/// config.validate(); // throws on an invalid range
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsCropperConfig {
    inner: CropperConfig,
}

#[wasm_bindgen]
impl JsCropperConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCropperConfig {
        JsCropperConfig::default()
    }

    /// Parse a (possibly partial) camelCase config object.
    pub fn from_json(value: JsValue) -> Result<JsCropperConfig, JsValue> {
        let inner: CropperConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| to_js_error(format!("Invalid cropper config: {}", e)))?;
        Ok(JsCropperConfig { inner })
    }

    /// Serialize to a camelCase config object.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Throw if any field is out of range.
    pub fn validate(&self) -> Result<(), JsValue> {
        self.inner.validate().map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn aspect(&self) -> f64 {
        self.inner.aspect
    }

    #[wasm_bindgen(setter)]
    pub fn set_aspect(&mut self, aspect: f64) {
        self.inner.aspect = aspect;
    }

    #[wasm_bindgen(getter = minZoom)]
    pub fn min_zoom(&self) -> f64 {
        self.inner.min_zoom
    }

    #[wasm_bindgen(setter = minZoom)]
    pub fn set_min_zoom(&mut self, zoom: f64) {
        self.inner.min_zoom = zoom;
    }

    #[wasm_bindgen(getter = maxZoom)]
    pub fn max_zoom(&self) -> f64 {
        self.inner.max_zoom
    }

    #[wasm_bindgen(setter = maxZoom)]
    pub fn set_max_zoom(&mut self, zoom: f64) {
        self.inner.max_zoom = zoom;
    }

    #[wasm_bindgen(getter = zoomSpeed)]
    pub fn zoom_speed(&self) -> f64 {
        self.inner.zoom_speed
    }

    #[wasm_bindgen(setter = zoomSpeed)]
    pub fn set_zoom_speed(&mut self, speed: f64) {
        self.inner.zoom_speed = speed;
    }

    #[wasm_bindgen(getter = keyboardStep)]
    pub fn keyboard_step(&self) -> f64 {
        self.inner.keyboard_step
    }

    #[wasm_bindgen(setter = keyboardStep)]
    pub fn set_keyboard_step(&mut self, step: f64) {
        self.inner.keyboard_step = step;
    }

    #[wasm_bindgen(getter = restrictPosition)]
    pub fn restrict_position(&self) -> bool {
        self.inner.restrict_position
    }

    #[wasm_bindgen(setter = restrictPosition)]
    pub fn set_restrict_position(&mut self, restrict: bool) {
        self.inner.restrict_position = restrict;
    }

    /// Fixed crop rectangle, or undefined for the aspect-derived one.
    #[wasm_bindgen(getter = cropSize)]
    pub fn crop_size(&self) -> Option<JsSize> {
        self.inner.crop_size.map(JsSize::from)
    }

    #[wasm_bindgen(setter = cropSize)]
    pub fn set_crop_size(&mut self, size: Option<JsSize>) {
        self.inner.crop_size = size.map(Into::into);
    }

    /// Object fit name: "contain", "cover", "horizontal-cover" or "vertical-cover".
    #[wasm_bindgen(getter = objectFit)]
    pub fn object_fit(&self) -> String {
        self.inner.object_fit.to_string()
    }

    /// Set the object fit by name. Throws on an unknown name.
    pub fn set_object_fit(&mut self, fit: &str) -> Result<(), JsValue> {
        self.inner.object_fit = fit.parse::<ObjectFit>().map_err(to_js_error)?;
        Ok(())
    }

    /// Aspect the pixel area is computed with (the crop size ratio if fixed).
    pub fn effective_aspect(&self) -> f64 {
        self.inner.effective_aspect()
    }
}

impl JsCropperConfig {
    pub(crate) fn inner(&self) -> &CropperConfig {
        &self.inner
    }
}


/// WASM-specific tests that require JsValue.
///
/// `from_json`, `to_json`, `validate` and `set_object_fit` build JavaScript
/// values or errors and only run on wasm32 targets. Use `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PartialConfig {
        max_zoom: f64,
        object_fit: &'static str,
    }

    #[wasm_bindgen_test]
    fn test_from_partial_json() {
        let value = serde_wasm_bindgen::to_value(&PartialConfig {
            max_zoom: 5.0,
            object_fit: "vertical-cover",
        })
        .unwrap();

        let config = JsCropperConfig::from_json(value).unwrap();
        assert_eq!(config.max_zoom(), 5.0);
        assert_eq!(config.min_zoom(), 1.0);
        assert_eq!(config.object_fit(), "vertical-cover");
    }

    #[wasm_bindgen_test]
    fn test_json_round_trip() {
        let mut config = JsCropperConfig::new();
        config.set_crop_size(Some(JsSize::new(400.0, 300.0)));
        let value = config.to_json().unwrap();
        let parsed = JsCropperConfig::from_json(value).unwrap();
        assert_eq!(parsed.crop_size(), Some(JsSize::new(400.0, 300.0)));
    }

    #[wasm_bindgen_test]
    fn test_validate() {
        let mut config = JsCropperConfig::new();
        assert!(config.validate().is_ok());
        config.set_min_zoom(10.0);
        assert!(config.validate().is_err());
    }

    #[wasm_bindgen_test]
    fn test_set_object_fit() {
        let mut config = JsCropperConfig::new();
        assert!(config.set_object_fit("cover").is_ok());
        assert_eq!(config.object_fit(), "cover");
        assert!(config.set_object_fit("stretch").is_err());
        assert_eq!(config.object_fit(), "cover");
    }
}
