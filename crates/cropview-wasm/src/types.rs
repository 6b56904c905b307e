//! WASM-compatible wrapper types for crop geometry values.
//!
//! This module provides JavaScript-friendly classes that mirror the core
//! value types, plus the conversions between them. All geometry wrappers are
//! plain `Copy` structs with public fields, so JavaScript reads and writes
//! `x`, `width`, etc. directly.

use cropview_core::export::{rgb_image_from_raw, ExportError};
use cropview_core::geometry::{Area, CroppedAreas, InitialCrop, MediaSize, Point, Size};
use image::RgbImage;
use wasm_bindgen::prelude::*;

/// A 2D point or offset.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsPoint {
    pub x: f64,
    pub y: f64,
}

#[wasm_bindgen]
impl JsPoint {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> JsPoint {
        JsPoint { x, y }
    }
}

impl From<Point> for JsPoint {
    fn from(p: Point) -> Self {
        JsPoint { x: p.x, y: p.y }
    }
}

impl From<JsPoint> for Point {
    fn from(p: JsPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Rectangle dimensions.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsSize {
    pub width: f64,
    pub height: f64,
}

#[wasm_bindgen]
impl JsSize {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> JsSize {
        JsSize { width, height }
    }
}

impl From<Size> for JsSize {
    fn from(s: Size) -> Self {
        JsSize {
            width: s.width,
            height: s.height,
        }
    }
}

impl From<JsSize> for Size {
    fn from(s: JsSize) -> Self {
        Size::new(s.width, s.height)
    }
}

/// Rendered and natural media dimensions.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsMediaSize {
    pub width: f64,
    pub height: f64,
    #[wasm_bindgen(js_name = naturalWidth)]
    pub natural_width: f64,
    #[wasm_bindgen(js_name = naturalHeight)]
    pub natural_height: f64,
}

#[wasm_bindgen]
impl JsMediaSize {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, natural_width: f64, natural_height: f64) -> JsMediaSize {
        JsMediaSize {
            width,
            height,
            natural_width,
            natural_height,
        }
    }
}

impl From<MediaSize> for JsMediaSize {
    fn from(m: MediaSize) -> Self {
        JsMediaSize::new(m.width, m.height, m.natural_width, m.natural_height)
    }
}

impl From<JsMediaSize> for MediaSize {
    fn from(m: JsMediaSize) -> Self {
        MediaSize::new(m.width, m.height, m.natural_width, m.natural_height)
    }
}

/// A crop area in percentages or natural pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[wasm_bindgen]
impl JsArea {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsArea {
        JsArea {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Area> for JsArea {
    fn from(a: Area) -> Self {
        JsArea::new(a.x, a.y, a.width, a.height)
    }
}

impl From<JsArea> for Area {
    fn from(a: JsArea) -> Self {
        Area::new(a.x, a.y, a.width, a.height)
    }
}

/// Visible region in both units.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsCroppedAreas {
    #[wasm_bindgen(js_name = croppedAreaPercentages)]
    pub cropped_area_percentages: JsArea,
    #[wasm_bindgen(js_name = croppedAreaPixels)]
    pub cropped_area_pixels: JsArea,
}

impl From<CroppedAreas> for JsCroppedAreas {
    fn from(c: CroppedAreas) -> Self {
        JsCroppedAreas {
            cropped_area_percentages: c.cropped_area_percentages.into(),
            cropped_area_pixels: c.cropped_area_pixels.into(),
        }
    }
}

/// Pan offset and zoom restored from a saved area.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsInitialCrop {
    pub crop: JsPoint,
    pub zoom: f64,
}

impl From<InitialCrop> for JsInitialCrop {
    fn from(i: InitialCrop) -> Self {
        JsInitialCrop {
            crop: i.crop.into(),
            zoom: i.zoom,
        }
    }
}

/// An RGB image wrapper for JavaScript.
///
/// The pixel data is stored in WASM memory. Calling `pixels()` copies it
/// into a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRgbImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRgbImage {
    /// Create an image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRgbImage {
        JsRgbImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRgbImage {
    pub(crate) fn from_rgb_image(image: RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        }
    }

    /// Convert to a core image, checking the buffer length. Clones the pixels.
    pub(crate) fn to_rgb_image(&self) -> Result<RgbImage, ExportError> {
        rgb_image_from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Convert an engine error into a JavaScript `Error`.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
