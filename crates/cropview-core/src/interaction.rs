//! Pointer, wheel, pinch and keyboard math.
//!
//! The shell owns the event listeners and animation-frame scheduling. It
//! samples input into points and deltas and calls these functions to get the
//! next pan offset and zoom. Every function is pure: the current state comes
//! in as a [`Viewport`] and the result goes back to the caller.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CropperConfig;
use crate::error::GeometryError;
use crate::geometry::{
    get_center, get_distance_between_points, get_rotation_between_points, MediaSize, Point, Size,
};
use crate::transform::restrict_position;

/// Pixels per line for line-based wheel deltas.
const LINE_HEIGHT: f64 = 40.0;
/// Pixels per page for page-based wheel deltas.
const PAGE_HEIGHT: f64 = 800.0;
/// Wheel pixels that change the zoom by 1 at zoom speed 1.
const WHEEL_PIXELS_PER_ZOOM: f64 = 200.0;
/// Step multiplier for fine keyboard panning.
const FINE_STEP_FACTOR: f64 = 0.2;

/// Screen-space bounds of the container element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Current cropper state an interaction starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub media: MediaSize,
    pub crop_size: Size,
    pub crop: Point,
    pub zoom: f64,
    pub rotation: f64,
}

impl Viewport {
    /// Clamp `position` for the given zoom when the config restricts panning.
    fn restrict(&self, config: &CropperConfig, position: Point, zoom: f64) -> Point {
        if config.restrict_position {
            restrict_position(
                position,
                self.media.rendered(),
                self.crop_size,
                zoom,
                self.rotation,
            )
        } else {
            position
        }
    }
}

/// Map a screen point to an offset from the container center.
///
/// The result is positive towards the top-left, matching the sign of the pan
/// offset. Fails with [`GeometryError::NotMounted`] when the container has not
/// been laid out.
pub fn get_point_on_container(
    point: Point,
    container: Option<&ContainerRect>,
) -> Result<Point, GeometryError> {
    let rect = match container {
        Some(rect) if rect.width > 0.0 && rect.height > 0.0 => rect,
        _ => return Err(GeometryError::NotMounted),
    };

    Ok(Point {
        x: rect.width / 2.0 - (point.x - rect.left),
        y: rect.height / 2.0 - (point.y - rect.top),
    })
}

/// Map a container-relative point to unzoomed media coordinates.
pub fn get_point_on_media(point: Point, crop: Point, zoom: f64) -> Point {
    Point {
        x: (point.x + crop.x) / zoom,
        y: (point.y + crop.y) / zoom,
    }
}

/// Pan offset while dragging.
///
/// The drag moves the media by the pointer's travel since `start_point`,
/// starting from the pan offset captured at drag start.
pub fn drag_position(
    viewport: &Viewport,
    config: &CropperConfig,
    start_crop: Point,
    start_point: Point,
    current: Point,
) -> Point {
    let requested = Point {
        x: start_crop.x + (current.x - start_point.x),
        y: start_crop.y + (current.y - start_point.y),
    };
    viewport.restrict(config, requested, viewport.zoom)
}

/// Result of a zoom change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomChange {
    pub zoom: f64,
    pub crop: Point,
}

/// Zoom towards a screen point.
///
/// The requested zoom is clamped to the config range. With
/// `update_position`, the pan is adjusted so the media point under `point`
/// stays under it; without, the pan is left alone and no container is needed.
pub fn zoom_at_point(
    viewport: &Viewport,
    config: &CropperConfig,
    requested_zoom: f64,
    point: Point,
    container: Option<&ContainerRect>,
    update_position: bool,
) -> Result<ZoomChange, GeometryError> {
    let zoom = config.clamp_zoom(requested_zoom);

    if !update_position {
        return Ok(ZoomChange {
            zoom,
            crop: viewport.crop,
        });
    }

    let zoom_point = get_point_on_container(point, container)?;
    let zoom_target = get_point_on_media(zoom_point, viewport.crop, viewport.zoom);
    let requested = Point {
        x: zoom_target.x * zoom - zoom_point.x,
        y: zoom_target.y * zoom - zoom_point.y,
    };

    Ok(ZoomChange {
        zoom,
        crop: viewport.restrict(config, requested, zoom),
    })
}

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    /// Map a DOM `WheelEvent.deltaMode` value; unknown modes count as pixels.
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// Vertical wheel movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelDelta {
    pub delta_y: f64,
    pub mode: DeltaMode,
}

impl WheelDelta {
    pub fn new(delta_y: f64, mode: DeltaMode) -> Self {
        Self { delta_y, mode }
    }

    /// Vertical delta in pixels.
    pub fn pixel_y(&self) -> f64 {
        match self.mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * LINE_HEIGHT,
            DeltaMode::Page => self.delta_y * PAGE_HEIGHT,
        }
    }
}

/// Requested zoom after a wheel tick (unclamped; feed to [`zoom_at_point`]).
///
/// Scrolling up (negative delta) zooms in.
pub fn wheel_zoom(zoom: f64, delta: WheelDelta, zoom_speed: f64) -> f64 {
    zoom - (delta.pixel_y() * zoom_speed) / WHEEL_PIXELS_PER_ZOOM
}

/// Two-finger touch sample kept between pinch moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PinchSample {
    pub distance: f64,
    pub rotation: f64,
    pub center: Point,
}

/// Outcome of a pinch move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchUpdate {
    /// Sample to compare the next move against
    pub sample: PinchSample,
    /// Requested zoom (unclamped)
    pub zoom: f64,
    /// New rotation in degrees
    pub rotation: f64,
    /// Gesture center, which drives the drag
    pub center: Point,
}

impl PinchSample {
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            distance: get_distance_between_points(a, b),
            rotation: get_rotation_between_points(a, b),
            center: get_center(a, b),
        }
    }

    /// Apply a pinch move to the current zoom and rotation.
    pub fn update(&self, a: Point, b: Point, zoom: f64, rotation: f64) -> PinchUpdate {
        let sample = Self::from_points(a, b);

        let zoom = if self.distance > 0.0 {
            zoom * (sample.distance / self.distance)
        } else {
            debug!("pinch started with coincident touches, keeping zoom");
            zoom
        };

        PinchUpdate {
            sample,
            zoom,
            rotation: rotation + (sample.rotation - self.rotation),
            center: sample.center,
        }
    }
}

/// Requested zoom for a trackpad gesture with cumulative `scale`.
pub fn gesture_zoom(start_zoom: f64, scale: f64) -> f64 {
    start_zoom - 1.0 + scale
}

/// Rotation for a trackpad gesture with cumulative `rotation_delta`.
pub fn gesture_rotation(start_rotation: f64, rotation_delta: f64) -> f64 {
    start_rotation + rotation_delta
}

/// Arrow keys that pan the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl ArrowKey {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(ArrowKey::ArrowUp),
            "ArrowDown" => Some(ArrowKey::ArrowDown),
            "ArrowLeft" => Some(ArrowKey::ArrowLeft),
            "ArrowRight" => Some(ArrowKey::ArrowRight),
            _ => None,
        }
    }
}

/// Pan offset after an arrow key press.
///
/// `fine` (shift held) shrinks the step to a fifth.
pub fn keyboard_pan(
    viewport: &Viewport,
    config: &CropperConfig,
    key: ArrowKey,
    fine: bool,
) -> Point {
    let step = if fine {
        config.keyboard_step * FINE_STEP_FACTOR
    } else {
        config.keyboard_step
    };

    let mut crop = viewport.crop;
    match key {
        ArrowKey::ArrowUp => crop.y -= step,
        ArrowKey::ArrowDown => crop.y += step,
        ArrowKey::ArrowLeft => crop.x -= step,
        ArrowKey::ArrowRight => crop.x += step,
    }

    viewport.restrict(config, crop, viewport.zoom)
}

/// Re-clamp the current pan after a layout, zoom or rotation change.
pub fn recompute_crop_position(viewport: &Viewport, config: &CropperConfig) -> Point {
    viewport.restrict(config, viewport.crop, viewport.zoom)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
