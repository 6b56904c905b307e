//! Bounding boxes of rotated rectangles.
//!
//! When media is rotated about its center, its on-screen footprint grows to
//! the axis-aligned box around the rotated corners. Crop sizing, position
//! restriction and the area computations all measure against that box.
//!
//! For a `w x h` rectangle rotated by θ:
//! ```text
//! bbox_w = |w * cos θ| + |h * sin θ|
//! bbox_h = |w * sin θ| + |h * cos θ|
//! ```

use crate::geometry::{rotate_around_mid_point, Size};

/// Convert degrees to radians.
#[inline]
pub fn get_radian_angle(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Compute the bounding box of a rectangle rotated about its center.
///
/// Uses the closed form above. The angle is periodic, so negative angles and
/// angles beyond 360 need no normalization.
///
/// # Example
///
/// ```
/// use cropview_core::transform::rotate_size;
///
/// let size = rotate_size(100.0, 50.0, 90.0);
/// assert!((size.width - 50.0).abs() < 1e-9);
/// assert!((size.height - 100.0).abs() < 1e-9);
/// ```
pub fn rotate_size(width: f64, height: f64, rotation: f64) -> Size {
    let (sin, cos) = get_radian_angle(rotation).sin_cos();

    Size {
        width: (cos * width).abs() + (sin * height).abs(),
        height: (sin * width).abs() + (cos * height).abs(),
    }
}

/// Compute the bounding box of a rotated rectangle from its rotated corners.
///
/// Produces the same box as [`rotate_size`] by rotating each corner around
/// the rectangle center and taking the extent on each axis.
pub fn translate_size(width: f64, height: f64, rotation: f64) -> Size {
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    let corners = [(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)]
        .map(|(x, y)| rotate_around_mid_point(x, y, center_x, center_y, rotation));

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in corners {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    Size {
        width: max_x - min_x,
        height: max_y - min_y,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
