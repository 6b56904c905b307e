//! Cropper configuration.
//!
//! Every tunable the engine reads travels in a [`CropperConfig`] value the
//! caller owns. Missing JSON fields fall back to the defaults, so a host can
//! persist only what it overrides.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{clamp, Size};
use crate::media::ObjectFit;

pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;
pub const DEFAULT_ASPECT: f64 = 4.0 / 3.0;
pub const DEFAULT_ZOOM_SPEED: f64 = 1.0;
pub const DEFAULT_KEYBOARD_STEP: f64 = 1.0;

/// Tunables for one cropper instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropperConfig {
    /// Target width/height ratio of the crop rectangle
    pub aspect: f64,
    /// Smallest allowed zoom
    pub min_zoom: f64,
    /// Largest allowed zoom
    pub max_zoom: f64,
    /// Multiplier applied to wheel deltas
    pub zoom_speed: f64,
    /// Pan distance per arrow key press, in display pixels
    pub keyboard_step: f64,
    /// Keep the crop rectangle inside the media
    pub restrict_position: bool,
    /// Fixed crop rectangle, overriding the aspect-derived one
    pub crop_size: Option<Size>,
    /// How the media is fitted into the container
    pub object_fit: ObjectFit,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            aspect: DEFAULT_ASPECT,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            keyboard_step: DEFAULT_KEYBOARD_STEP,
            restrict_position: true,
            crop_size: None,
            object_fit: ObjectFit::Contain,
        }
    }
}

impl CropperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every field can be fed into the geometry formulas.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let result = self.check();
        if let Err(err) = &result {
            debug!("rejected cropper config: {}", err);
        }
        result
    }

    fn check(&self) -> Result<(), GeometryError> {
        if !self.min_zoom.is_finite()
            || !self.max_zoom.is_finite()
            || self.min_zoom <= 0.0
            || self.min_zoom > self.max_zoom
        {
            return Err(GeometryError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(GeometryError::InvalidAspect(self.aspect));
        }

        if !self.zoom_speed.is_finite() || self.zoom_speed <= 0.0 {
            return Err(GeometryError::InvalidZoomSpeed(self.zoom_speed));
        }

        if !self.keyboard_step.is_finite() || self.keyboard_step <= 0.0 {
            return Err(GeometryError::InvalidKeyboardStep(self.keyboard_step));
        }

        if let Some(size) = self.crop_size {
            if !size.width.is_finite() || !size.height.is_finite() || size.is_empty() {
                return Err(GeometryError::InvalidCropSize {
                    width: size.width,
                    height: size.height,
                });
            }
        }

        Ok(())
    }

    /// The aspect the pixel area is computed with.
    ///
    /// A fixed crop size dictates its own ratio.
    pub fn effective_aspect(&self) -> f64 {
        match self.crop_size {
            Some(size) if !size.is_empty() => size.aspect(),
            _ => self.aspect,
        }
    }

    /// Clamp a requested zoom into `[min_zoom, max_zoom]`.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        clamp(zoom, self.min_zoom, self.max_zoom)
    }
}
