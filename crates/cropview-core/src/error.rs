//! Error types for the crop engine.

use thiserror::Error;

/// Errors from geometry and configuration operations.
///
/// Numeric edge cases (negative rotations, zoom outside the range before
/// clamping, zero-sized media) are handled by the formulas themselves and
/// never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The container has not been laid out, so screen points cannot be mapped.
    #[error("Cropper is not mounted")]
    NotMounted,

    /// Zoom bounds must be finite, positive and ordered.
    #[error("Invalid zoom range: min ({min}) must be > 0 and <= max ({max})")]
    InvalidZoomRange { min: f64, max: f64 },

    /// Aspect ratio must be finite and positive.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspect(f64),

    /// Zoom speed must be finite and positive.
    #[error("Invalid zoom speed: {0}")]
    InvalidZoomSpeed(f64),

    /// Keyboard pan step must be finite and positive.
    #[error("Invalid keyboard step: {0}")]
    InvalidKeyboardStep(f64),

    /// A fixed crop size must have finite, positive dimensions.
    #[error("Invalid crop size: {width}x{height}")]
    InvalidCropSize { width: f64, height: f64 },

    /// Object fit name not recognized.
    #[error("Unknown object fit: {0}")]
    UnknownObjectFit(String),
}
