//! Cropview Core - Crop geometry engine
//!
//! This crate provides the geometry behind an interactive media cropper: a
//! fixed-aspect crop rectangle over an image or video that can be panned,
//! zoomed and rotated. It sizes the crop rectangle, keeps the pan inside the
//! media, reports the visible region in percentages and natural pixels, and
//! restores a saved region back into pan and zoom.
//!
//! Everything is a pure function over small `Copy` values. Event handling and
//! rendering stay with the caller.

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod interaction;
pub mod media;
pub mod transform;

pub use config::CropperConfig;
pub use error::GeometryError;
pub use export::{extract_cropped_image, ExportError, Flip};
pub use geometry::{Area, CroppedAreas, InitialCrop, MediaSize, Point, Size};
pub use media::{initial_crop, Media, ObjectFit, SavedCrop};
pub use transform::{
    compute_cropped_area, get_crop_data, get_crop_size,
    get_initial_crop_from_cropped_area_percentages, get_initial_crop_from_cropped_area_pixels,
    restrict_position, rotate_size,
};
