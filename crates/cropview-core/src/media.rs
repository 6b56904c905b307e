//! Media measurement: how an image or video sits inside the container.
//!
//! The shell measures the container, the media element and the media's
//! intrinsic size after layout. This module turns those measurements into the
//! [`MediaSize`] and crop rectangle the geometry functions work with.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CropperConfig;
use crate::error::GeometryError;
use crate::geometry::{Area, InitialCrop, MediaSize, Size};
use crate::transform::{
    get_crop_size, get_initial_crop_from_cropped_area_percentages,
    get_initial_crop_from_cropped_area_pixels,
};

/// A measured media element.
///
/// Images and videos report their intrinsic size differently in the shell,
/// but the geometry only needs the two sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Media {
    Image { rendered: Size, natural: Size },
    Video { rendered: Size, natural: Size },
}

impl Media {
    /// Rendered size in display pixels.
    pub fn rendered_size(&self) -> Size {
        match *self {
            Media::Image { rendered, .. } | Media::Video { rendered, .. } => rendered,
        }
    }

    /// Intrinsic size in natural pixels.
    pub fn natural_size(&self) -> Size {
        match *self {
            Media::Image { natural, .. } | Media::Video { natural, .. } => natural,
        }
    }

    /// Intrinsic width/height ratio (0.0 if the media has no height yet).
    pub fn natural_aspect(&self) -> f64 {
        self.natural_size().aspect()
    }

    pub fn media_size(&self) -> MediaSize {
        let rendered = self.rendered_size();
        let natural = self.natural_size();
        MediaSize::new(rendered.width, rendered.height, natural.width, natural.height)
    }
}

/// How the media is fitted into the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Whole media visible, letterboxed on one axis
    #[default]
    Contain,
    /// Fill the container, resolved to one of the two cover variants
    Cover,
    /// Media width matches the container width
    HorizontalCover,
    /// Media height matches the container height
    VerticalCover,
}

impl ObjectFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
            ObjectFit::HorizontalCover => "horizontal-cover",
            ObjectFit::VerticalCover => "vertical-cover",
        }
    }
}

impl fmt::Display for ObjectFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectFit {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contain" => Ok(ObjectFit::Contain),
            "cover" => Ok(ObjectFit::Cover),
            "horizontal-cover" => Ok(ObjectFit::HorizontalCover),
            "vertical-cover" => Ok(ObjectFit::VerticalCover),
            other => Err(GeometryError::UnknownObjectFit(other.to_string())),
        }
    }
}

/// Resolve [`ObjectFit::Cover`] to the axis that fills the container.
///
/// Media narrower than the container (relative to its height) covers
/// horizontally; anything else covers vertically. Other modes pass through.
pub fn resolve_object_fit(fit: ObjectFit, container: Size, natural: Size) -> ObjectFit {
    match fit {
        ObjectFit::Cover => {
            if natural.aspect() < container.aspect() {
                ObjectFit::HorizontalCover
            } else {
                ObjectFit::VerticalCover
            }
        }
        other => other,
    }
}

/// Compute the rendered media size inside the container.
///
/// Layout engines report rounded element sizes, so when the media is scaled
/// down the rendered size is derived from the container and the natural
/// aspect instead of the `measured` size. Media shown at (or above) natural
/// size uses `measured` as is.
///
/// # Arguments
///
/// * `container` - Container size in display pixels
/// * `natural` - Intrinsic media size
/// * `measured` - Size the layout engine reported for the media element
/// * `fit` - Fit mode; `Cover` is resolved first
pub fn compute_media_size(
    container: Size,
    natural: Size,
    measured: Size,
    fit: ObjectFit,
) -> MediaSize {
    let is_scaled_down = measured.width < natural.width || measured.height < natural.height;
    let media_aspect = natural.aspect();

    let rendered = if is_scaled_down && media_aspect > 0.0 && !container.is_empty() {
        match resolve_object_fit(fit, container, natural) {
            ObjectFit::HorizontalCover => Size {
                width: container.width,
                height: container.width / media_aspect,
            },
            ObjectFit::VerticalCover => Size {
                width: container.height * media_aspect,
                height: container.height,
            },
            ObjectFit::Contain | ObjectFit::Cover => {
                if container.aspect() > media_aspect {
                    Size {
                        width: container.height * media_aspect,
                        height: container.height,
                    }
                } else {
                    Size {
                        width: container.width,
                        height: container.width / media_aspect,
                    }
                }
            }
        }
    } else {
        measured
    };

    MediaSize::new(rendered.width, rendered.height, natural.width, natural.height)
}

/// The crop rectangle for the current layout.
///
/// A fixed `crop_size` in the config wins; otherwise the largest rectangle of
/// the configured aspect that fits the rotated media and the container.
pub fn crop_size_for(
    config: &CropperConfig,
    media: &MediaSize,
    container: Size,
    rotation: f64,
) -> Size {
    if let Some(size) = config.crop_size {
        return size;
    }

    let size = get_crop_size(
        media.width,
        media.height,
        container.width,
        container.height,
        config.aspect,
        rotation,
    );
    if size.is_empty() {
        debug!("media or container not measured yet, crop size is empty");
    }
    size
}

/// A crop area the host persisted from an earlier session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedCrop {
    pub cropped_area_percentages: Option<Area>,
    pub cropped_area_pixels: Option<Area>,
}

/// Pan and zoom to show once the media is measured.
///
/// The percentage area wins when both are saved, since it doesn't depend on
/// the natural size rounding. `None` means nothing was saved and the shell
/// keeps its current pan and zoom.
pub fn initial_crop(
    config: &CropperConfig,
    media: &MediaSize,
    crop_size: Size,
    rotation: f64,
    saved: &SavedCrop,
) -> Option<InitialCrop> {
    if let Some(area) = &saved.cropped_area_percentages {
        return Some(get_initial_crop_from_cropped_area_percentages(
            area,
            media,
            rotation,
            crop_size,
            config.min_zoom,
            config.max_zoom,
        ));
    }

    saved.cropped_area_pixels.as_ref().map(|area| {
        get_initial_crop_from_cropped_area_pixels(
            area,
            media,
            rotation,
            crop_size,
            config.min_zoom,
            config.max_zoom,
        )
    })
}
