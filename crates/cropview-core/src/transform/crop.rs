//! Crop rectangle sizing and pan restriction.
//!
//! The crop rectangle is the fixed-aspect window the user looks through. It is
//! sized against the rotated media bounding box and the container, and the
//! media pan is clamped so the rectangle stays over the (zoomed) media.

use log::debug;

use super::rotation::rotate_size;
use crate::geometry::{clamp, MediaSize, Point, Size};

/// Compute the largest crop rectangle with the given aspect ratio.
///
/// The rectangle fits both inside the bounding box of the rotated media and
/// inside the container.
///
/// # Arguments
///
/// * `media_width`, `media_height` - Rendered media size
/// * `container_width`, `container_height` - Container size
/// * `aspect` - Target width / height ratio
/// * `rotation` - Media rotation in degrees
///
/// # Returns
///
/// A `Size` whose width / height equals `aspect`. A degenerate media box
/// yields a zero-area size, which callers treat as not yet measurable.
pub fn get_crop_size(
    media_width: f64,
    media_height: f64,
    container_width: f64,
    container_height: f64,
    aspect: f64,
    rotation: f64,
) -> Size {
    let bounds = rotate_size(media_width, media_height, rotation);
    let fitting_width = bounds.width.min(container_width);
    let fitting_height = bounds.height.min(container_height);

    let size = if fitting_width > fitting_height * aspect {
        Size {
            width: fitting_height * aspect,
            height: fitting_height,
        }
    } else {
        Size {
            width: fitting_width,
            height: fitting_width / aspect,
        }
    };

    if size.is_empty() {
        debug!(
            "crop size collapsed to {}x{} (media {}x{}, rotation {})",
            size.width, size.height, media_width, media_height, rotation
        );
    }

    size
}

/// Ratio between rendered and natural media size.
///
/// Taken on the larger rendered axis, where the rounding of the rendered
/// size costs the least precision. Returns 0.0 when the media has no natural
/// size yet.
pub fn get_media_zoom(media: &MediaSize) -> f64 {
    let (rendered, natural) = if media.width > media.height {
        (media.width, media.natural_width)
    } else {
        (media.height, media.natural_height)
    };

    if natural > 0.0 {
        rendered / natural
    } else {
        0.0
    }
}

/// Clamp a requested pan offset so the crop rectangle stays over the media.
///
/// Each axis is clamped independently against the rotated, zoomed media
/// bounding box. This is exact without rotation and an outer bound once the
/// media is rotated, since the valid region of a rotated crop is not an
/// axis-aligned box.
///
/// When the crop rectangle is larger than the scaled media on an axis, that
/// axis collapses to 0.
///
/// # Example
///
/// ```
/// use cropview_core::geometry::{Point, Size};
/// use cropview_core::transform::restrict_position;
///
/// let p = restrict_position(
///     Point::new(600.0, 500.0),
///     Size::new(1000.0, 500.0),
///     Size::new(500.0, 200.0),
///     1.0,
///     0.0,
/// );
/// assert_eq!(p, Point::new(250.0, 150.0));
/// ```
pub fn restrict_position(
    position: Point,
    media_size: Size,
    crop_size: Size,
    zoom: f64,
    rotation: f64,
) -> Point {
    let bounds = rotate_size(media_size.width, media_size.height, rotation);

    Point {
        x: restrict_position_coord(position.x, bounds.width, crop_size.width, zoom),
        y: restrict_position_coord(position.y, bounds.height, crop_size.height, zoom),
    }
}

fn restrict_position_coord(position: f64, media_size: f64, crop_size: f64, zoom: f64) -> f64 {
    let max_position = (media_size * zoom) / 2.0 - crop_size / 2.0;

    if max_position < 0.0 {
        debug!(
            "crop ({}) larger than scaled media ({}), axis not restrictable",
            crop_size,
            media_size * zoom
        );
        return 0.0;
    }

    clamp(position, -max_position, max_position)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
