//! Forward crop computation: (pan, zoom, rotation) to crop areas.
//!
//! The percentage area is measured against the rotated bounding box of the
//! rendered media. The pixel area is the same region in natural media pixels,
//! measured against the rotated bounding box of the natural size, since a
//! rotated crop samples from the rotated source.
//!
//! # Pixel rounding
//!
//! Pixel width and height are rounded independently, which can drift the
//! ratio away from the target aspect. One dimension is therefore treated as
//! authoritative and the other derived from it with the exact aspect:
//!
//! - natural box wider than `height * aspect`: height is authoritative
//! - otherwise: width is authoritative
//!
//! x/y are derived last, from the adjusted size, so a full-coverage crop stays
//! flush with the media edge.

use log::{debug, trace};

use super::crop::restrict_position as restrict_crop_position;
use super::rotation::rotate_size;
use crate::geometry::{clamp, Area, CroppedAreas, MediaSize, Point, Size};

/// Compute the visible region of the media in percentages and natural pixels.
///
/// # Arguments
///
/// * `crop` - Current pan offset of the media relative to the crop rectangle center
/// * `media` - Rendered and natural media size
/// * `crop_size` - Size of the crop rectangle
/// * `aspect` - Target aspect ratio of the output pixels
/// * `zoom` - Current zoom (must be > 0)
/// * `rotation` - Media rotation in degrees
/// * `restrict_position` - Clamp every field to the media bounds
///
/// # Behavior
///
/// - With `restrict_position`, all percentages lie in [0, 100] and the pixel
///   area lies within the rotated natural bounding box
/// - Without it, areas may extend past the media (negative x/y, or beyond
///   100%), which happens when the shell allows free panning
/// - Unmeasured media or a non-positive zoom yields an all-zero result
///
/// # Example
///
/// ```
/// use cropview_core::geometry::{Area, MediaSize, Point, Size};
/// use cropview_core::transform::compute_cropped_area;
///
/// let areas = compute_cropped_area(
///     Point::new(0.0, 0.0),
///     &MediaSize::new(1000.0, 600.0, 2000.0, 1200.0),
///     Size::new(1000.0, 600.0),
///     5.0 / 3.0,
///     2.0,
///     0.0,
///     true,
/// );
/// assert_eq!(areas.cropped_area_pixels, Area::new(500.0, 300.0, 1000.0, 600.0));
/// ```
pub fn compute_cropped_area(
    crop: Point,
    media: &MediaSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict_position: bool,
) -> CroppedAreas {
    let limit = |max: f64, value: f64| {
        if restrict_position {
            limit_area(max, value)
        } else {
            value
        }
    };

    let bbox = rotate_size(media.width, media.height, rotation);
    if bbox.is_empty() || zoom <= 0.0 {
        debug!(
            "media {}x{} at zoom {} has no area, reporting an empty crop",
            media.width, media.height, zoom
        );
        return CroppedAreas::default();
    }

    let natural_bbox = rotate_size(media.natural_width, media.natural_height, rotation);

    let percentages = Area {
        x: limit(
            100.0,
            (((bbox.width - crop_size.width / zoom) / 2.0 - crop.x / zoom) / bbox.width) * 100.0,
        ),
        y: limit(
            100.0,
            (((bbox.height - crop_size.height / zoom) / 2.0 - crop.y / zoom) / bbox.height)
                * 100.0,
        ),
        width: limit(100.0, ((crop_size.width / bbox.width) * 100.0) / zoom),
        height: limit(100.0, ((crop_size.height / bbox.height) * 100.0) / zoom),
    };

    // Naive pixel size, before fixing up the aspect
    let width_in_pixels = round_half_up(limit(
        natural_bbox.width,
        (percentages.width * natural_bbox.width) / 100.0,
    ));
    let height_in_pixels = round_half_up(limit(
        natural_bbox.height,
        (percentages.height * natural_bbox.height) / 100.0,
    ));

    let is_wider_than_high = natural_bbox.width >= natural_bbox.height * aspect;
    let pixel_size = if is_wider_than_high {
        Size {
            width: round_half_up(height_in_pixels * aspect),
            height: height_in_pixels,
        }
    } else {
        Size {
            width: width_in_pixels,
            height: round_half_up(width_in_pixels / aspect),
        }
    };

    let pixels = Area {
        x: round_half_up(limit(
            natural_bbox.width - pixel_size.width,
            (percentages.x * natural_bbox.width) / 100.0,
        )),
        y: round_half_up(limit(
            natural_bbox.height - pixel_size.height,
            (percentages.y * natural_bbox.height) / 100.0,
        )),
        width: pixel_size.width,
        height: pixel_size.height,
    };

    trace!("cropped area: {:?} / {:?} px", percentages, pixels);

    CroppedAreas {
        cropped_area_percentages: percentages,
        cropped_area_pixels: pixels,
    }
}

/// Restrict the pan (when enabled) and compute the resulting crop areas.
///
/// This is the value a cropper reports after every interaction: a zoom-out
/// can leave the previous pan out of bounds, so the pan is re-restricted
/// before measuring.
pub fn get_crop_data(
    crop: Point,
    media: &MediaSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict_position: bool,
) -> CroppedAreas {
    let position = if restrict_position {
        restrict_crop_position(crop, media.rendered(), crop_size, zoom, rotation)
    } else {
        crop
    };

    compute_cropped_area(
        position,
        media,
        crop_size,
        aspect,
        zoom,
        rotation,
        restrict_position,
    )
}

/// Keep `value` within `[0, max]`.
fn limit_area(max: f64, value: f64) -> f64 {
    clamp(value, 0.0, max)
}

/// Round to the nearest integer, with halves rounding toward +infinity.
///
/// Matches how browsers round, so negative halves (from unrestricted pans)
/// land on the same pixel a JS host would compute.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
