//! Cropview WASM - WebAssembly bindings for the crop geometry engine
//!
//! This crate exposes the cropview-core functionality to JavaScript/TypeScript
//! croppers. The host keeps the DOM, event listeners and rendering; it calls
//! into these bindings for every geometry decision.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for points, sizes, areas and images
//! - `geometry` - Crop sizing, position restriction, area computation and restore
//! - `config` - Cropper configuration
//! - `interaction` - Drag, zoom, wheel and keyboard math
//! - `export` - Cropped bitmap extraction and JPEG output
//!
//! # Usage
//!
//! ```typescript
//! import init, { get_crop_size, compute_cropped_area, JsPoint } from '@cropview/wasm';
//!
//! await init();
//!
//! const cropSize = get_crop_size(media.width, media.height, rect.width, rect.height, 4 / 3, 0);
//! const areas = compute_cropped_area(new JsPoint(0, 0), media, cropSize, 4 / 3, 1, 0, true);
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod export;
mod geometry;
mod interaction;
mod types;

// Re-export public types
pub use config::JsCropperConfig;
pub use export::{encode_jpeg, extract_cropped_image};
pub use geometry::{
    compute_cropped_area, get_center, get_crop_data, get_crop_size, get_distance_between_points,
    get_initial_crop_from_cropped_area_percentages, get_initial_crop_from_cropped_area_pixels,
    get_rotation_between_points, initial_crop, restrict_position, rotate_around_mid_point,
    rotate_size,
};
pub use interaction::{
    drag_position, get_point_on_container, keyboard_pan, wheel_zoom, zoom_at_point,
    JsContainerRect, JsViewport, JsZoomChange,
};
pub use types::{
    JsArea, JsCroppedAreas, JsInitialCrop, JsMediaSize, JsPoint, JsRgbImage, JsSize,
};

/// Initialize the WASM module (called automatically on load).
///
/// Installs the panic hook and routes `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"cropview: logger already initialized".into());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(!version().is_empty());
    }
}
