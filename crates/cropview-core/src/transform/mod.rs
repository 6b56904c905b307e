//! Crop geometry: rotated bounds, crop sizing, position restriction and the
//! forward/inverse crop area computations.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise on screen (y down)
//! - The crop offset (`crop`) is the pan of the media center relative to the
//!   crop rectangle center, in display pixels
//! - Percentage areas are relative to the rotated bounding box of the
//!   rendered media; pixel areas to the rotated box of the natural media
//!
//! # Pipeline
//!
//! 1. [`get_crop_size`] fits the crop rectangle into the media
//! 2. [`restrict_position`] keeps the pan inside the media
//! 3. [`compute_cropped_area`] reports the visible region
//! 4. [`get_initial_crop_from_cropped_area_percentages`] and
//!    [`get_initial_crop_from_cropped_area_pixels`] restore a saved region

mod area;
mod crop;
mod inverse;
mod rotation;

pub use area::{compute_cropped_area, get_crop_data};
pub use crop::{get_crop_size, get_media_zoom, restrict_position};
pub use inverse::{
    get_initial_crop_from_cropped_area_percentages, get_initial_crop_from_cropped_area_pixels,
};
pub use rotation::{get_radian_angle, rotate_size, translate_size};
