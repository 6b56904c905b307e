//! Cropped bitmap extraction.
//!
//! Pixel crop areas are expressed in the rotated bounding box of the natural
//! media. Extraction rotates (and optionally flips) the source about its
//! center into that box and reads the area out of it.
//!
//! # Algorithm
//!
//! Forward mapping from a source point `p` to the bounding box:
//! ```text
//! dst = bbox_center + R(θ) · F · (p - src_center)
//! ```
//! Extraction runs it in reverse for every output pixel center and samples
//! the source bilinearly. Points that fall outside the source are black.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Area;
use crate::transform::{get_radian_angle, rotate_size};

/// Largest output accepted, in pixels (16384 x 16384).
pub const MAX_EXPORT_PIXELS: u64 = 16384 * 16384;

/// Errors that can occur while extracting or encoding a crop.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The crop area rounds to zero pixels on some axis
    #[error("Crop area is empty: {width}x{height}")]
    EmptyArea { width: f64, height: f64 },

    /// The crop area exceeds the output cap
    #[error("Crop area too large: {width}x{height} exceeds {max} pixels", max = MAX_EXPORT_PIXELS)]
    TooLarge { width: u32, height: u32 },

    /// Pixel buffer length doesn't match the dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Mirroring applied before rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Wrap a raw RGB buffer, checking its length.
pub fn rgb_image_from_raw(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<RgbImage, ExportError> {
    // Saturates on 32-bit targets; no buffer can reach usize::MAX bytes
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .unwrap_or(usize::MAX);
    let actual = pixels.len();
    if actual != expected {
        return Err(ExportError::InvalidPixelData { expected, actual });
    }
    RgbImage::from_raw(width, height, pixels)
        .ok_or(ExportError::InvalidPixelData { expected, actual })
}

/// Extract the pixels of a crop area from the source image.
///
/// # Arguments
///
/// * `source` - Media at natural size
/// * `pixels` - Pixel crop area, relative to the rotated bounding box
/// * `rotation` - Media rotation in degrees
/// * `flip` - Mirroring applied before rotation
///
/// # Returns
///
/// An image of `pixels.width x pixels.height` (rounded). Areas reaching
/// outside the media (unrestricted panning) come out black there.
pub fn extract_cropped_image(
    source: &RgbImage,
    pixels: &Area,
    rotation: f64,
    flip: Flip,
) -> Result<RgbImage, ExportError> {
    let (out_w, out_h) = output_dimensions(pixels)?;

    let (src_w, src_h) = (source.width() as f64, source.height() as f64);
    let bbox = rotate_size(src_w, src_h, rotation);

    let (sin, cos) = get_radian_angle(rotation).sin_cos();
    let flip_x = if flip.horizontal { -1.0 } else { 1.0 };
    let flip_y = if flip.vertical { -1.0 } else { 1.0 };

    let bbox_cx = bbox.width / 2.0;
    let bbox_cy = bbox.height / 2.0;
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;

    debug!(
        "extracting {}x{} from {}x{} (rotation {}, flip {:?})",
        out_w,
        out_h,
        source.width(),
        source.height(),
        rotation,
        flip
    );

    Ok(RgbImage::from_fn(out_w, out_h, |out_x, out_y| {
        // Output pixel center in bounding box space, relative to its center
        let dx = pixels.x + out_x as f64 + 0.5 - bbox_cx;
        let dy = pixels.y + out_y as f64 + 0.5 - bbox_cy;

        // Inverse rotation, then inverse flip
        let rx = dx * cos + dy * sin;
        let ry = -dx * sin + dy * cos;
        let src_x = rx * flip_x + src_cx - 0.5;
        let src_y = ry * flip_y + src_cy - 0.5;

        Rgb(sample_bilinear(source, src_x, src_y))
    }))
}

/// Encode an extracted crop as JPEG bytes.
///
/// Quality is clamped to 1-100.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, ExportError> {
    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn output_dimensions(pixels: &Area) -> Result<(u32, u32), ExportError> {
    let width = pixels.width.round();
    let height = pixels.height.round();

    if !(width >= 1.0 && height >= 1.0) || !pixels.x.is_finite() || !pixels.y.is_finite() {
        return Err(ExportError::EmptyArea {
            width: pixels.width,
            height: pixels.height,
        });
    }

    if width * height > MAX_EXPORT_PIXELS as f64 {
        return Err(ExportError::TooLarge {
            width: width.min(u32::MAX as f64) as u32,
            height: height.min(u32::MAX as f64) as u32,
        });
    }

    Ok((width as u32, height as u32))
}

/// Sample a pixel using bilinear interpolation.
///
/// Coordinates are in pixel-center space. Points more than half a pixel
/// outside the image are black; the border half pixel repeats the edge.
fn sample_bilinear(image: &RgbImage, x: f64, y: f64) -> [u8; 3] {
    if image.width() == 0 || image.height() == 0 {
        return [0, 0, 0];
    }

    let (w, h) = (image.width() as f64, image.height() as f64);
    if !(x >= -0.5 && x <= w - 0.5 && y >= -0.5 && y <= h - 0.5) {
        return [0, 0, 0];
    }

    let x = x.max(0.0).min(w - 1.0);
    let y = y.max(0.0).min(h - 1.0);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(image.width() - 1);
    let y1 = (y0 + 1).min(image.height() - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[i] as f64 * fx * (1.0 - fy)
            + p01[i] as f64 * (1.0 - fx) * fy
            + p11[i] as f64 * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================
