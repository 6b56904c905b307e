//! Value types shared by every part of the crop engine.
//!
//! All types are small `Copy` structs. Nothing here owns state beyond a single
//! call: the caller passes values in and gets new values back.
//!
//! # Units
//!
//! - `Point` and `Size` are in display pixels unless a function says otherwise
//! - `Area` is either percentage-typed (0 to 100 relative to the rotated media
//!   bounding box) or pixel-typed (natural media pixels)
//! - Rotation angles are in degrees, positive = clockwise on screen
//!
//! Serialized field names are camelCase so a host application can persist an
//! `Area` and read it back without a translation layer.

mod points;

pub use points::{
    clamp, get_center, get_distance_between_points, get_rotation_between_points,
    rotate_around_mid_point,
};

use serde::{Deserialize, Serialize};

/// A 2D offset or coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, which is also the "media centered" crop offset.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Dimensions of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// Returns 0.0 for a zero-height size instead of infinity.
    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }

    /// True when the rectangle has no area and cannot be measured against.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Rendered (on-screen) and intrinsic (source) dimensions of a media element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSize {
    /// Rendered width in display pixels
    pub width: f64,
    /// Rendered height in display pixels
    pub height: f64,
    /// Source width in natural pixels
    pub natural_width: f64,
    /// Source height in natural pixels
    pub natural_height: f64,
}

impl MediaSize {
    pub fn new(width: f64, height: f64, natural_width: f64, natural_height: f64) -> Self {
        Self {
            width,
            height,
            natural_width,
            natural_height,
        }
    }

    pub fn rendered(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn natural(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }
}

/// A rectangular region, in percentages or natural pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Output of the forward crop computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CroppedAreas {
    /// Visible region relative to the rotated media bounding box (0 to 100)
    pub cropped_area_percentages: Area,
    /// Visible region in natural media pixels
    pub cropped_area_pixels: Area,
}

/// A crop offset and zoom recovered from a saved crop area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialCrop {
    pub crop: Point,
    pub zoom: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_aspect() {
        assert!((Size::new(1200.0, 600.0).aspect() - 2.0).abs() < f64::EPSILON);
        assert_eq!(Size::new(100.0, 0.0).aspect(), 0.0);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::default().is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(10.0, 1.0).is_empty());
    }

    #[test]
    fn test_media_size_parts() {
        let media = MediaSize::new(1000.0, 600.0, 2000.0, 1200.0);
        assert_eq!(media.rendered(), Size::new(1000.0, 600.0));
        assert_eq!(media.natural(), Size::new(2000.0, 1200.0));
    }

    #[test]
    fn test_media_size_serializes_camel_case() {
        let media = MediaSize::new(1000.0, 600.0, 2000.0, 1200.0);
        let json = serde_json::to_string(&media).unwrap();
        assert!(json.contains("\"naturalWidth\":2000.0"));
        assert!(json.contains("\"naturalHeight\":1200.0"));
    }

    #[test]
    fn test_cropped_areas_round_trip_json() {
        let areas = CroppedAreas {
            cropped_area_percentages: Area::new(25.0, 25.0, 50.0, 50.0),
            cropped_area_pixels: Area::new(500.0, 300.0, 1000.0, 600.0),
        };
        let json = serde_json::to_string(&areas).unwrap();
        assert!(json.contains("croppedAreaPixels"));

        let back: CroppedAreas = serde_json::from_str(&json).unwrap();
        assert_eq!(back, areas);
    }
}
