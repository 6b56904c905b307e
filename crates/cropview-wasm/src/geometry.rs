//! WASM bindings for the crop geometry functions.
//!
//! Thin wrappers that convert the `Js*` classes to core values and back.
//! None of these can fail, so they return plain values.

use crate::config::JsCropperConfig;
use crate::types::{JsArea, JsCroppedAreas, JsInitialCrop, JsMediaSize, JsPoint, JsSize};
use cropview_core::geometry;
use cropview_core::media::SavedCrop;
use cropview_core::transform;
use wasm_bindgen::prelude::*;

/// Largest crop rectangle of `aspect` that fits the rotated media and the
/// container.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropSize = get_crop_size(1000, 600, 1000, 600, 4 / 3, 0);
/// // { width: 800, height: 600 }
/// ```
#[wasm_bindgen]
pub fn get_crop_size(
    media_width: f64,
    media_height: f64,
    container_width: f64,
    container_height: f64,
    aspect: f64,
    rotation: f64,
) -> JsSize {
    transform::get_crop_size(
        media_width,
        media_height,
        container_width,
        container_height,
        aspect,
        rotation,
    )
    .into()
}

/// Clamp a pan offset so the crop rectangle stays over the media.
#[wasm_bindgen]
pub fn restrict_position(
    position: &JsPoint,
    media_size: &JsSize,
    crop_size: &JsSize,
    zoom: f64,
    rotation: f64,
) -> JsPoint {
    transform::restrict_position(
        (*position).into(),
        (*media_size).into(),
        (*crop_size).into(),
        zoom,
        rotation,
    )
    .into()
}

/// Visible region in percentages and natural pixels.
#[wasm_bindgen]
pub fn compute_cropped_area(
    crop: &JsPoint,
    media: &JsMediaSize,
    crop_size: &JsSize,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict_position: bool,
) -> JsCroppedAreas {
    transform::compute_cropped_area(
        (*crop).into(),
        &(*media).into(),
        (*crop_size).into(),
        aspect,
        zoom,
        rotation,
        restrict_position,
    )
    .into()
}

/// Re-restrict the pan, then compute the visible region.
///
/// Call this after every interaction ends and report the result to the host.
#[wasm_bindgen]
pub fn get_crop_data(
    crop: &JsPoint,
    media: &JsMediaSize,
    crop_size: &JsSize,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict_position: bool,
) -> JsCroppedAreas {
    transform::get_crop_data(
        (*crop).into(),
        &(*media).into(),
        (*crop_size).into(),
        aspect,
        zoom,
        rotation,
        restrict_position,
    )
    .into()
}

/// Restore pan and zoom from a saved percentage area.
#[wasm_bindgen]
pub fn get_initial_crop_from_cropped_area_percentages(
    cropped_area_percentages: &JsArea,
    media: &JsMediaSize,
    rotation: f64,
    crop_size: &JsSize,
    min_zoom: f64,
    max_zoom: f64,
) -> JsInitialCrop {
    transform::get_initial_crop_from_cropped_area_percentages(
        &(*cropped_area_percentages).into(),
        &(*media).into(),
        rotation,
        (*crop_size).into(),
        min_zoom,
        max_zoom,
    )
    .into()
}

/// Restore pan and zoom from a saved pixel area.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { crop, zoom } = get_initial_crop_from_cropped_area_pixels(
///   savedPixels, mediaSize, rotation, cropSize, 1, 3,
/// );
/// ```
#[wasm_bindgen]
pub fn get_initial_crop_from_cropped_area_pixels(
    cropped_area_pixels: &JsArea,
    media: &JsMediaSize,
    rotation: f64,
    crop_size: &JsSize,
    min_zoom: f64,
    max_zoom: f64,
) -> JsInitialCrop {
    transform::get_initial_crop_from_cropped_area_pixels(
        &(*cropped_area_pixels).into(),
        &(*media).into(),
        rotation,
        (*crop_size).into(),
        min_zoom,
        max_zoom,
    )
    .into()
}

/// Pan and zoom for freshly measured media, from whichever area was saved.
///
/// Percentages win over pixels when both are given. Returns undefined when
/// neither is.
#[wasm_bindgen]
pub fn initial_crop(
    config: &JsCropperConfig,
    media: &JsMediaSize,
    crop_size: &JsSize,
    rotation: f64,
    cropped_area_percentages: Option<JsArea>,
    cropped_area_pixels: Option<JsArea>,
) -> Option<JsInitialCrop> {
    let saved = SavedCrop {
        cropped_area_percentages: cropped_area_percentages.map(Into::into),
        cropped_area_pixels: cropped_area_pixels.map(Into::into),
    };
    cropview_core::media::initial_crop(
        config.inner(),
        &(*media).into(),
        (*crop_size).into(),
        rotation,
        &saved,
    )
    .map(JsInitialCrop::from)
}

#[wasm_bindgen]
pub fn get_distance_between_points(a: &JsPoint, b: &JsPoint) -> f64 {
    geometry::get_distance_between_points((*a).into(), (*b).into())
}

/// Angle from `a` to `b` in degrees.
#[wasm_bindgen]
pub fn get_rotation_between_points(a: &JsPoint, b: &JsPoint) -> f64 {
    geometry::get_rotation_between_points((*a).into(), (*b).into())
}

#[wasm_bindgen]
pub fn get_center(a: &JsPoint, b: &JsPoint) -> JsPoint {
    geometry::get_center((*a).into(), (*b).into()).into()
}

/// Bounding box of a `width x height` rectangle rotated by `rotation` degrees.
#[wasm_bindgen]
pub fn rotate_size(width: f64, height: f64, rotation: f64) -> JsSize {
    transform::rotate_size(width, height, rotation).into()
}

/// Rotate `(x, y)` around `(x_mid, y_mid)`.
#[wasm_bindgen]
pub fn rotate_around_mid_point(x: f64, y: f64, x_mid: f64, y_mid: f64, degrees: f64) -> JsPoint {
    let (x, y) = geometry::rotate_around_mid_point(x, y, x_mid, y_mid, degrees);
    JsPoint::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> JsMediaSize {
        JsMediaSize::new(1000.0, 600.0, 2000.0, 1200.0)
    }

    #[test]
    fn test_crop_size() {
        let size = get_crop_size(1000.0, 600.0, 1000.0, 600.0, 4.0 / 3.0, 0.0);
        assert!((size.width - 800.0).abs() < 1e-9);
        assert!((size.height - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_restrict_position() {
        let p = restrict_position(
            &JsPoint::new(600.0, 500.0),
            &JsSize::new(1000.0, 500.0),
            &JsSize::new(500.0, 200.0),
            1.0,
            0.0,
        );
        assert_eq!(p, JsPoint::new(250.0, 150.0));
    }

    #[test]
    fn test_compute_cropped_area() {
        let areas = compute_cropped_area(
            &JsPoint::new(0.0, 0.0),
            &media(),
            &JsSize::new(1000.0, 600.0),
            5.0 / 3.0,
            2.0,
            0.0,
            true,
        );
        assert_eq!(
            areas.cropped_area_percentages,
            JsArea::new(25.0, 25.0, 50.0, 50.0)
        );
        assert_eq!(
            areas.cropped_area_pixels,
            JsArea::new(500.0, 300.0, 1000.0, 600.0)
        );
    }

    #[test]
    fn test_get_crop_data_restricts() {
        let areas = get_crop_data(
            &JsPoint::new(400.0, 0.0),
            &media(),
            &JsSize::new(800.0, 600.0),
            4.0 / 3.0,
            1.0,
            0.0,
            true,
        );
        let unrestricted = compute_cropped_area(
            &JsPoint::new(100.0, 0.0),
            &media(),
            &JsSize::new(800.0, 600.0),
            4.0 / 3.0,
            1.0,
            0.0,
            true,
        );
        assert_eq!(areas, unrestricted);
    }

    #[test]
    fn test_initial_crop_prefers_percentages() {
        let config = JsCropperConfig::new();
        let crop_size = JsSize::new(800.0, 600.0);
        let pixels = JsArea::new(100.0, 0.0, 1600.0, 1200.0);

        let from_pixels =
            initial_crop(&config, &media(), &crop_size, 0.0, None, Some(pixels)).unwrap();
        assert_eq!(from_pixels.zoom, 1.0);
        assert_eq!(from_pixels.crop, JsPoint::new(50.0, 0.0));

        let both = initial_crop(
            &config,
            &media(),
            &crop_size,
            0.0,
            Some(JsArea::new(25.0, 25.0, 40.0, 50.0)),
            Some(pixels),
        )
        .unwrap();
        assert!((both.zoom - 2.0).abs() < 1e-9);

        assert_eq!(
            initial_crop(&config, &media(), &crop_size, 0.0, None, None),
            None
        );
    }

    #[test]
    fn test_initial_crop_from_pixels() {
        let restored = get_initial_crop_from_cropped_area_pixels(
            &JsArea::new(100.0, 0.0, 1600.0, 1200.0),
            &media(),
            0.0,
            &JsSize::new(800.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(restored.crop, JsPoint::new(50.0, 0.0));
        assert_eq!(restored.zoom, 1.0);
    }

    #[test]
    fn test_initial_crop_from_percentages() {
        let restored = get_initial_crop_from_cropped_area_percentages(
            &JsArea::new(25.0, 25.0, 50.0, 50.0),
            &media(),
            0.0,
            &JsSize::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert!((restored.zoom - 2.0).abs() < 1e-12);
        assert!(restored.crop.x.abs() < 1e-9);
        assert!(restored.crop.y.abs() < 1e-9);
    }

    #[test]
    fn test_point_helpers() {
        let a = JsPoint::new(0.0, 0.0);
        let b = JsPoint::new(10.0, 10.0);
        assert!((get_rotation_between_points(&a, &b) - 45.0).abs() < 1e-12);
        assert_eq!(get_center(&a, &b), JsPoint::new(5.0, 5.0));
        assert!((get_distance_between_points(&a, &b) - 200f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_helpers() {
        let size = rotate_size(100.0, 50.0, 90.0);
        assert!((size.width - 50.0).abs() < 1e-9);
        assert!((size.height - 100.0).abs() < 1e-9);

        let p = rotate_around_mid_point(0.0, 0.0, 66.0, 77.0, 90.0);
        assert!((p.x - 143.0).abs() < 1e-9);
        assert!((p.y - 11.0).abs() < 1e-9);
    }
}
