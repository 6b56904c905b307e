//! Point and vector helpers.
//!
//! The shell samples two-finger touches and pointer positions and feeds them
//! through these to get pinch distance, pinch angle and the gesture center.

use super::Point;

/// Euclidean distance between two points.
pub fn get_distance_between_points(a: Point, b: Point) -> f64 {
    ((a.y - b.y).powi(2) + (a.x - b.x).powi(2)).sqrt()
}

/// Angle of the vector from `a` to `b`, in degrees (-180 to 180).
pub fn get_rotation_between_points(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Midpoint of `a` and `b`.
pub fn get_center(a: Point, b: Point) -> Point {
    Point {
        x: (b.x + a.x) / 2.0,
        y: (b.y + a.y) / 2.0,
    }
}

/// Rotate `(x, y)` around `(x_mid, y_mid)` by `degrees`.
///
/// Uses screen coordinates (y down), so a positive angle turns clockwise.
pub fn rotate_around_mid_point(
    x: f64,
    y: f64,
    x_mid: f64,
    y_mid: f64,
    degrees: f64,
) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();

    let dx = x - x_mid;
    let dy = y - y_mid;

    (dx * cos - dy * sin + x_mid, dx * sin + dy * cos + y_mid)
}

/// Clamp `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: an inverted range resolves to `max`
/// and a NaN bound is ignored.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
