//! Aspect-preserving Catmull-Rom resize into a bounding box.

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::api::ConvertError;

/// Largest accepted target width or height.
pub const MAX_DIMENSION: u32 = 16_384;

/// The maximum output size of a conversion.
///
/// Exactly one side of the output is pinned to the box; the other follows
/// the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetBox {
    max_width: u32,
    max_height: u32,
}

impl TargetBox {
    /// Create a box, rejecting zero and anything above [`MAX_DIMENSION`].
    pub fn new(max_width: u32, max_height: u32) -> Result<Self, ConvertError> {
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&max_width) || !valid.contains(&max_height) {
            return Err(ConvertError::InvalidDimensions {
                width: max_width,
                height: max_height,
            });
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }

    #[inline]
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    #[inline]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }
}

/// Output size for a `width` x `height` source fitted into `target`.
///
/// A source that is relatively taller than the box has its height pinned;
/// otherwise its width is pinned. The free side is rounded to the nearest
/// pixel and never less than 1.
pub fn fit_dimensions(width: u32, height: u32, target: TargetBox) -> (u32, u32) {
    let src_aspect = f64::from(height) / f64::from(width);
    let dst_aspect = f64::from(target.max_height) / f64::from(target.max_width);

    if src_aspect > dst_aspect {
        let w = (f64::from(width) * f64::from(target.max_height) / f64::from(height)).round();
        ((w as u32).clamp(1, target.max_width), target.max_height)
    } else {
        let h = (f64::from(height) * f64::from(target.max_width) / f64::from(width)).round();
        (target.max_width, (h as u32).clamp(1, target.max_height))
    }
}

/// Resize `image` to fit `target`, preserving its aspect ratio.
///
/// Returns the image untouched when it already has the fitted size.
pub fn fit_within(image: GrayImage, target: TargetBox) -> GrayImage {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, target);

    if (new_width, new_height) == (width, height) {
        tracing::debug!(width, height, "Image already fits target, skipping resize");
        return image;
    }

    tracing::debug!(
        width,
        height,
        new_width,
        new_height,
        "Resizing grayscale image (Catmull-Rom)"
    );
    imageops::resize(&image, new_width, new_height, FilterType::CatmullRom)
}
