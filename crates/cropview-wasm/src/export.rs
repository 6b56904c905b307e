//! WASM bindings for cropped bitmap extraction and JPEG output.

use crate::types::{to_js_error, JsArea, JsRgbImage};
use cropview_core::export::{self, Flip};
use wasm_bindgen::prelude::*;

/// Extract a pixel crop area from the source image.
///
/// `pixels` is the `croppedAreaPixels` reported for the same rotation.
/// Throws if the buffer doesn't match the image size, or the area is empty
/// or too large.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const source = new JsRgbImage(width, height, rgbBytes);
/// const cropped = extract_cropped_image(source, areas.croppedAreaPixels, rotation, false, false);
/// const jpeg = encode_jpeg(cropped, 90);
/// ```
#[wasm_bindgen]
pub fn extract_cropped_image(
    image: &JsRgbImage,
    pixels: &JsArea,
    rotation: f64,
    flip_horizontal: bool,
    flip_vertical: bool,
) -> Result<JsRgbImage, JsValue> {
    let source = image.to_rgb_image().map_err(to_js_error)?;
    let flip = Flip {
        horizontal: flip_horizontal,
        vertical: flip_vertical,
    };

    export::extract_cropped_image(&source, &(*pixels).into(), rotation, flip)
        .map(JsRgbImage::from_rgb_image)
        .map_err(to_js_error)
}

/// Encode an image as JPEG bytes (quality 1-100).
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRgbImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let source = image.to_rgb_image().map_err(to_js_error)?;
    export::encode_jpeg(&source, quality).map_err(to_js_error)
}
