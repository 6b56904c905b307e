//! Inverse crop computation: saved crop area back to (pan, zoom).
//!
//! A host that persisted a crop area restores it onto freshly mounted media by
//! solving the forward formulas for the pan offset and zoom. Zoom is clamped
//! to the caller's range; when clamping kicks in, the returned pan is the one
//! for the unclamped zoom and the shell's restriction pass settles it.

use log::debug;

use super::crop::get_media_zoom;
use super::rotation::rotate_size;
use crate::geometry::{clamp, Area, InitialCrop, MediaSize, Point, Size};

/// Recover the pan and zoom that produce a percentage crop area.
///
/// Algebraic inverse of the percentage step of
/// [`compute_cropped_area`](super::compute_cropped_area):
///
/// ```text
/// zoom   = crop_w / bbox_w * 100 / area.width
/// crop.x = zoom * bbox_w / 2 - crop_w / 2 - bbox_w * zoom * area.x / 100
/// ```
///
/// An area with no width yields `max_zoom` and a centered pan.
pub fn get_initial_crop_from_cropped_area_percentages(
    cropped_area_percentages: &Area,
    media: &MediaSize,
    rotation: f64,
    crop_size: Size,
    min_zoom: f64,
    max_zoom: f64,
) -> InitialCrop {
    let bbox = rotate_size(media.width, media.height, rotation);

    if cropped_area_percentages.width <= 0.0 || bbox.width <= 0.0 {
        debug!("percentage area has no width, restoring at max zoom");
        return InitialCrop {
            crop: Point::zero(),
            zoom: max_zoom,
        };
    }

    let requested = (crop_size.width / bbox.width) * (100.0 / cropped_area_percentages.width);
    let zoom = clamp_zoom(requested, min_zoom, max_zoom);

    let crop = Point {
        x: (zoom * bbox.width) / 2.0
            - crop_size.width / 2.0
            - bbox.width * zoom * (cropped_area_percentages.x / 100.0),
        y: (zoom * bbox.height) / 2.0
            - crop_size.height / 2.0
            - bbox.height * zoom * (cropped_area_percentages.y / 100.0),
    };

    InitialCrop { crop, zoom }
}

/// Recover the pan and zoom that produce a pixel crop area.
///
/// Zoom is the ratio between the crop rectangle and the cropped pixels,
/// converted to display pixels with the media's displayed/natural scale.
/// The limiting axis of the crop rectangle is used: height for portrait crop
/// rectangles, width otherwise.
///
/// # Example
///
/// ```
/// use cropview_core::geometry::{Area, MediaSize, Point, Size};
/// use cropview_core::transform::get_initial_crop_from_cropped_area_pixels;
///
/// let restored = get_initial_crop_from_cropped_area_pixels(
///     &Area::new(100.0, 0.0, 1600.0, 1200.0),
///     &MediaSize::new(1000.0, 600.0, 2000.0, 1200.0),
///     0.0,
///     Size::new(800.0, 600.0),
///     1.0,
///     3.0,
/// );
/// assert_eq!(restored.crop, Point::new(50.0, 0.0));
/// assert_eq!(restored.zoom, 1.0);
/// ```
pub fn get_initial_crop_from_cropped_area_pixels(
    cropped_area_pixels: &Area,
    media: &MediaSize,
    rotation: f64,
    crop_size: Size,
    min_zoom: f64,
    max_zoom: f64,
) -> InitialCrop {
    let natural_bbox = rotate_size(media.natural_width, media.natural_height, rotation);
    let media_zoom = get_media_zoom(media);

    let (crop_axis, area_axis) = if crop_size.height > crop_size.width {
        (crop_size.height, cropped_area_pixels.height)
    } else {
        (crop_size.width, cropped_area_pixels.width)
    };

    if area_axis <= 0.0 || media_zoom <= 0.0 {
        debug!("pixel area or media unmeasured, restoring at max zoom");
        return InitialCrop {
            crop: Point::zero(),
            zoom: max_zoom,
        };
    }

    let zoom = clamp_zoom(crop_axis / (area_axis * media_zoom), min_zoom, max_zoom);
    let crop_zoom = crop_axis / area_axis;

    let crop = Point {
        x: ((natural_bbox.width - cropped_area_pixels.width) / 2.0 - cropped_area_pixels.x)
            * crop_zoom,
        y: ((natural_bbox.height - cropped_area_pixels.height) / 2.0 - cropped_area_pixels.y)
            * crop_zoom,
    };

    InitialCrop { crop, zoom }
}

fn clamp_zoom(requested: f64, min_zoom: f64, max_zoom: f64) -> f64 {
    let zoom = clamp(requested, min_zoom, max_zoom);
    if zoom != requested {
        debug!(
            "restored zoom {} outside [{}, {}], using {}",
            requested, min_zoom, max_zoom, zoom
        );
    }
    zoom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::compute_cropped_area;

    fn media() -> MediaSize {
        MediaSize::new(1000.0, 600.0, 2000.0, 1200.0)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_pixels_not_moved_not_zoomed() {
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::new(0.0, 0.0, 2000.0, 1200.0),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.crop, Point::zero());
        assert_eq!(result.zoom, 1.0);
    }

    #[test]
    fn test_pixels_moved_not_zoomed() {
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::new(100.0, 0.0, 1600.0, 1200.0),
            &media(),
            0.0,
            Size::new(800.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.crop, Point::new(50.0, 0.0));
        assert_eq!(result.zoom, 1.0);
    }

    #[test]
    fn test_pixels_zoomed() {
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::new(500.0, 300.0, 1000.0, 600.0),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.crop, Point::zero());
        assert_eq!(result.zoom, 2.0);
    }

    #[test]
    fn test_pixels_unrestricted_area() {
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::new(-2000.0, -1200.0, 2000.0, 1200.0),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.crop, Point::new(1000.0, 600.0));
        assert_eq!(result.zoom, 1.0);
    }

    #[test]
    fn test_pixels_with_fixed_crop_size() {
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::new(0.0, 0.0, 873.0, 873.0),
            &MediaSize::new(875.0, 458.0, 1910.0, 1000.0),
            0.0,
            Size::new(400.0, 400.0),
            1.0,
            3.0,
        );
        assert_close(result.crop.x, 237.6, 0.05);
        assert_close(result.crop.y, 29.1, 0.05);
        assert_close(result.zoom, 1.0, 1e-3);
    }

    #[test]
    fn test_pixels_zoom_clamped() {
        // A quarter-width area would need zoom 4
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::new(750.0, 450.0, 500.0, 300.0),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.zoom, 3.0);
    }

    #[test]
    fn test_pixels_empty_area() {
        let result = get_initial_crop_from_cropped_area_pixels(
            &Area::default(),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.zoom, 3.0);
        assert_eq!(result.crop, Point::zero());
    }

    #[test]
    fn test_percentages_zoomed() {
        let result = get_initial_crop_from_cropped_area_percentages(
            &Area::new(25.0, 25.0, 50.0, 50.0),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_close(result.zoom, 2.0, 1e-12);
        assert_close(result.crop.x, 0.0, 1e-9);
        assert_close(result.crop.y, 0.0, 1e-9);
    }

    #[test]
    fn test_percentages_moved() {
        let result = get_initial_crop_from_cropped_area_percentages(
            &Area::new(5.0, 0.0, 80.0, 100.0),
            &media(),
            0.0,
            Size::new(800.0, 600.0),
            1.0,
            3.0,
        );
        assert_close(result.zoom, 1.0, 1e-12);
        assert_close(result.crop.x, 50.0, 1e-9);
        assert_close(result.crop.y, 0.0, 1e-9);
    }

    #[test]
    fn test_percentages_zoom_clamped_to_min() {
        let result = get_initial_crop_from_cropped_area_percentages(
            &Area::new(0.0, 0.0, 100.0, 100.0),
            &media(),
            0.0,
            Size::new(500.0, 300.0),
            1.0,
            3.0,
        );
        assert_eq!(result.zoom, 1.0);
    }

    #[test]
    fn test_percentages_empty_area() {
        let result = get_initial_crop_from_cropped_area_percentages(
            &Area::default(),
            &media(),
            0.0,
            Size::new(1000.0, 600.0),
            1.0,
            3.0,
        );
        assert_eq!(result.zoom, 3.0);
        assert!(result.crop.x.is_finite() && result.crop.y.is_finite());
    }

    #[test]
    fn test_percentages_round_trip_rotated() {
        let crop_size = Size::new(600.0, 450.0);
        let original = Point::new(-35.0, 80.0);
        let areas = compute_cropped_area(
            original,
            &media(),
            crop_size,
            4.0 / 3.0,
            1.8,
            30.0,
            false,
        );
        let result = get_initial_crop_from_cropped_area_percentages(
            &areas.cropped_area_percentages,
            &media(),
            30.0,
            crop_size,
            1.0,
            3.0,
        );
        assert_close(result.zoom, 1.8, 1e-9);
        assert_close(result.crop.x, original.x, 1e-6);
        assert_close(result.crop.y, original.y, 1e-6);
    }

    #[test]
    fn test_pixels_round_trip_scenario() {
        let crop_size = Size::new(1000.0, 600.0);
        let areas = compute_cropped_area(
            Point::zero(),
            &media(),
            crop_size,
            5.0 / 3.0,
            2.0,
            0.0,
            true,
        );
        let result = get_initial_crop_from_cropped_area_pixels(
            &areas.cropped_area_pixels,
            &media(),
            0.0,
            crop_size,
            1.0,
            3.0,
        );
        assert_eq!(result.crop, Point::zero());
        assert_eq!(result.zoom, 2.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::{compute_cropped_area, get_crop_size};
    use proptest::prelude::*;

    fn media_strategy() -> impl Strategy<Value = MediaSize> {
        (200u32..4000, 200u32..4000).prop_map(|(nw, nh)| {
            let (nw, nh) = (nw as f64, nh as f64);
            let scale = (1000.0 / nw).min(600.0 / nh);
            MediaSize::new(nw * scale, nh * scale, nw, nh)
        })
    }

    proptest! {
        /// Property: unclamped percentages invert back to the same pan and zoom.
        #[test]
        fn prop_percentage_round_trip(
            media in media_strategy(),
            aspect in 0.5f64..2.5,
            zoom in 1.0f64..3.0,
            rotation in -180.0f64..180.0,
            x in -400.0f64..400.0,
            y in -400.0f64..400.0,
        ) {
            let crop_size = get_crop_size(media.width, media.height, 1000.0, 600.0, aspect, rotation);
            prop_assume!(!crop_size.is_empty());

            let crop = Point::new(x, y);
            let areas = compute_cropped_area(crop, &media, crop_size, aspect, zoom, rotation, false);
            let restored = get_initial_crop_from_cropped_area_percentages(
                &areas.cropped_area_percentages, &media, rotation, crop_size, 1.0, 3.0,
            );

            prop_assert!((restored.zoom - zoom).abs() <= 1e-3);
            prop_assert!((restored.crop.x - x).abs() <= 1e-3);
            prop_assert!((restored.crop.y - y).abs() <= 1e-3);
        }

        /// Property: pixel areas that round exactly invert back to the same
        /// pan and zoom.
        ///
        /// Natural media is twice the rendered size and the pan is a multiple
        /// of `zoom / 2`, so every natural-pixel field is a whole number.
        #[test]
        fn prop_pixel_round_trip(
            zoom in prop::sample::select(vec![1.0f64, 1.25, 1.6, 2.0, 2.5]),
            kx in -400i32..400,
            ky in -400i32..400,
        ) {
            let media = MediaSize::new(1000.0, 600.0, 2000.0, 1200.0);
            let crop_size = Size::new(800.0, 600.0);
            let crop = Point::new(kx as f64 * zoom / 2.0, ky as f64 * zoom / 2.0);

            let areas = compute_cropped_area(crop, &media, crop_size, 4.0 / 3.0, zoom, 0.0, false);
            let restored = get_initial_crop_from_cropped_area_pixels(
                &areas.cropped_area_pixels, &media, 0.0, crop_size, 1.0, 3.0,
            );

            prop_assert!((restored.zoom - zoom).abs() <= 1e-3, "{:?}", restored);
            prop_assert!((restored.crop.x - crop.x).abs() <= 1e-3, "{:?}", restored);
            prop_assert!((restored.crop.y - crop.y).abs() <= 1e-3, "{:?}", restored);
        }

        /// Property: restored zoom always lies in the configured range.
        #[test]
        fn prop_restored_zoom_in_range(
            media in media_strategy(),
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            width in 1.0f64..5000.0,
            height in 1.0f64..5000.0,
            min_zoom in 0.5f64..2.0,
            span in 0.0f64..4.0,
        ) {
            let max_zoom = min_zoom + span;
            let area = Area::new(x, y, width, height);
            let crop_size = Size::new(500.0, 400.0);

            let from_pixels = get_initial_crop_from_cropped_area_pixels(
                &area, &media, 0.0, crop_size, min_zoom, max_zoom,
            );
            let from_percentages = get_initial_crop_from_cropped_area_percentages(
                &area, &media, 0.0, crop_size, min_zoom, max_zoom,
            );

            for zoom in [from_pixels.zoom, from_percentages.zoom] {
                prop_assert!(zoom >= min_zoom && zoom <= max_zoom);
            }
        }
    }
}
