//! WASM bindings for pointer, wheel and keyboard math.
//!
//! The host keeps its own event listeners; on each sampled event it passes
//! the current viewport state in and applies the returned pan and zoom.

use crate::config::JsCropperConfig;
use crate::types::{to_js_error, JsMediaSize, JsPoint, JsSize};
use cropview_core::interaction::{self, ArrowKey, ContainerRect, DeltaMode, Viewport, WheelDelta};
use wasm_bindgen::prelude::*;

/// Screen-space container bounds, from `getBoundingClientRect()`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[wasm_bindgen]
impl JsContainerRect {
    #[wasm_bindgen(constructor)]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> JsContainerRect {
        JsContainerRect {
            left,
            top,
            width,
            height,
        }
    }
}

impl From<JsContainerRect> for ContainerRect {
    fn from(r: JsContainerRect) -> Self {
        ContainerRect::new(r.left, r.top, r.width, r.height)
    }
}

/// Current pan, zoom and layout of the cropper.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsViewport {
    pub media: JsMediaSize,
    #[wasm_bindgen(js_name = cropSize)]
    pub crop_size: JsSize,
    pub crop: JsPoint,
    pub zoom: f64,
    pub rotation: f64,
}

#[wasm_bindgen]
impl JsViewport {
    #[wasm_bindgen(constructor)]
    pub fn new(
        media: JsMediaSize,
        crop_size: JsSize,
        crop: JsPoint,
        zoom: f64,
        rotation: f64,
    ) -> JsViewport {
        JsViewport {
            media,
            crop_size,
            crop,
            zoom,
            rotation,
        }
    }
}

impl From<JsViewport> for Viewport {
    fn from(v: JsViewport) -> Self {
        Viewport {
            media: v.media.into(),
            crop_size: v.crop_size.into(),
            crop: v.crop.into(),
            zoom: v.zoom,
            rotation: v.rotation,
        }
    }
}

/// New zoom and pan after a zoom interaction.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsZoomChange {
    pub zoom: f64,
    pub crop: JsPoint,
}

/// Map a screen point to an offset from the container center.
///
/// Throws when the container is missing or has no size (not mounted).
#[wasm_bindgen]
pub fn get_point_on_container(
    point: &JsPoint,
    container: Option<JsContainerRect>,
) -> Result<JsPoint, JsValue> {
    let rect = container.map(ContainerRect::from);
    interaction::get_point_on_container((*point).into(), rect.as_ref())
        .map(JsPoint::from)
        .map_err(to_js_error)
}

/// Zoom towards a screen point, clamped to the config range.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const next = wheel_zoom(viewport.zoom, e.deltaY, e.deltaMode, config.zoomSpeed);
/// const change = zoom_at_point(viewport, config, next, point, rect, true);
/// setCrop(change.crop);
/// setZoom(change.zoom);
/// ```
#[wasm_bindgen]
pub fn zoom_at_point(
    viewport: &JsViewport,
    config: &JsCropperConfig,
    requested_zoom: f64,
    point: &JsPoint,
    container: Option<JsContainerRect>,
    update_position: bool,
) -> Result<JsZoomChange, JsValue> {
    let rect = container.map(ContainerRect::from);
    let change = interaction::zoom_at_point(
        &(*viewport).into(),
        config.inner(),
        requested_zoom,
        (*point).into(),
        rect.as_ref(),
        update_position,
    )
    .map_err(to_js_error)?;

    Ok(JsZoomChange {
        zoom: change.zoom,
        crop: change.crop.into(),
    })
}

/// Requested zoom after a wheel event (`deltaMode` as reported by the DOM).
#[wasm_bindgen]
pub fn wheel_zoom(zoom: f64, delta_y: f64, delta_mode: u32, zoom_speed: f64) -> f64 {
    interaction::wheel_zoom(
        zoom,
        WheelDelta::new(delta_y, DeltaMode::from_dom(delta_mode)),
        zoom_speed,
    )
}

/// Pan offset while dragging.
#[wasm_bindgen]
pub fn drag_position(
    viewport: &JsViewport,
    config: &JsCropperConfig,
    start_crop: &JsPoint,
    start_point: &JsPoint,
    current: &JsPoint,
) -> JsPoint {
    interaction::drag_position(
        &(*viewport).into(),
        config.inner(),
        (*start_crop).into(),
        (*start_point).into(),
        (*current).into(),
    )
    .into()
}

/// Pan offset after a key press, or undefined for keys that don't pan.
#[wasm_bindgen]
pub fn keyboard_pan(
    viewport: &JsViewport,
    config: &JsCropperConfig,
    key: &str,
    shift_key: bool,
) -> Option<JsPoint> {
    let key = ArrowKey::from_key(key)?;
    Some(interaction::keyboard_pan(&(*viewport).into(), config.inner(), key, shift_key).into())
}
