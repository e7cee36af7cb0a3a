//! MonoConverter builder -- the primary entry point for the crate.
//!
//! [`MonoConverter`] runs the whole pipeline (luminance stretch, resize,
//! dither, pack) behind a small builder API.

use crate::api::ConvertError;
use crate::color::PixelSource;
use crate::dither::{DitherOptions, Kernel, BURKES};
use crate::output::{Bitmap, MonoImage};
use crate::preprocess::{fit_within, to_grayscale, TargetBox, DEFAULT_PERCENTILE};

/// High-level converter from a decoded image to a packed 1-bit bitmap.
///
/// # Design
///
/// - Constructor requires a validated [`TargetBox`]
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter can
///   process many images
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use mono_dither::{MonoConverter, TargetBox, NULL};
///
/// let source = RgbaImage::from_fn(2, 2, |x, y| {
///     let v = if x == y { 0 } else { 255 };
///     Rgba([v, v, v, 255])
/// });
///
/// let converter = MonoConverter::new(TargetBox::new(2, 2).unwrap()).kernel(NULL);
/// let result = converter.convert(&source).unwrap();
///
/// assert_eq!(result.bitmap.bytes(), &[0b0110_0000]);
/// ```
#[derive(Debug, Clone)]
pub struct MonoConverter {
    target: TargetBox,
    kernel: Kernel,
    dither_opts: DitherOptions,
    percentile: u8,
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The dithered image, at its final size.
    pub image: MonoImage,
    /// The packed bytes of `image`.
    pub bitmap: Bitmap,
}

impl MonoConverter {
    /// Create a converter for the given target box.
    ///
    /// Defaults: Burkes kernel, error scale 0.8, 2% range clip, no serpentine.
    pub fn new(target: TargetBox) -> Self {
        Self {
            target,
            kernel: BURKES,
            dither_opts: DitherOptions::new(),
            percentile: DEFAULT_PERCENTILE,
        }
    }

    /// Set the diffusion kernel.
    #[inline]
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the share of quantization error that is diffused.
    #[inline]
    pub fn error_scale(mut self, scale: f32) -> Self {
        self.dither_opts = self.dither_opts.error_scale(scale);
        self
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.dither_opts = self.dither_opts.serpentine(enabled);
        self
    }

    /// Set the percentage of samples clipped from each end of the luminance range.
    #[inline]
    pub fn percentile(mut self, percentile: u8) -> Self {
        self.percentile = percentile;
        self
    }

    #[inline]
    pub fn target(&self) -> TargetBox {
        self.target
    }

    #[inline]
    pub fn selected_kernel(&self) -> &Kernel {
        &self.kernel
    }

    #[inline]
    pub fn dither_options(&self) -> &DitherOptions {
        &self.dither_opts
    }

    /// Check the configured options without converting anything.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.percentile >= 50 {
            return Err(ConvertError::InvalidPercentile(self.percentile));
        }
        self.dither_opts.validate()?;
        self.kernel.validate()
    }

    /// Convert `source` into a packed 1-bit bitmap.
    ///
    /// # Errors
    ///
    /// Invalid options are reported before any work is done; an empty
    /// source yields [`ConvertError::EmptyImage`].
    pub fn convert<S: PixelSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Conversion, ConvertError> {
        self.validate()?;

        let (width, height) = source.dimensions();
        tracing::debug!(
            width,
            height,
            max_width = self.target.max_width(),
            max_height = self.target.max_height(),
            "Converting image"
        );

        let gray = to_grayscale(source, self.percentile)?;
        let gray = fit_within(gray, self.target);
        let image = self.kernel.dither(&gray, &self.dither_opts);
        let bitmap = image.pack();

        Ok(Conversion { image, bitmap })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::{NULL, STUCKI};
    use image::{Rgba, RgbaImage};

    fn target(w: u32, h: u32) -> TargetBox {
        TargetBox::new(w, h).unwrap()
    }

    #[test]
    fn test_defaults() {
        let converter = MonoConverter::new(target(296, 128));
        assert_eq!(converter.selected_kernel(), &BURKES);
        assert_eq!(converter.dither_options(), &DitherOptions::new());
        assert_eq!(converter.target(), target(296, 128));
        assert!(converter.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let converter = MonoConverter::new(target(8, 8))
            .kernel(STUCKI)
            .error_scale(0.5)
            .serpentine(true)
            .percentile(5);
        assert_eq!(converter.selected_kernel().name, "Stucki");
        assert_eq!(converter.dither_options().error_scale, 0.5);
        assert!(converter.dither_options().serpentine);
    }

    #[test]
    fn test_invalid_options_rejected_before_work() {
        let empty = RgbaImage::new(0, 0);
        let converter = MonoConverter::new(target(8, 8)).percentile(60);
        assert_eq!(
            converter.convert(&empty),
            Err(ConvertError::InvalidPercentile(60))
        );
        let converter = MonoConverter::new(target(8, 8)).error_scale(2.0);
        assert_eq!(
            converter.convert(&empty),
            Err(ConvertError::InvalidErrorScale(2.0))
        );
    }

    #[test]
    fn test_empty_source() {
        let converter = MonoConverter::new(target(8, 8));
        assert_eq!(
            converter.convert(&RgbaImage::new(0, 3)),
            Err(ConvertError::EmptyImage)
        );
    }

    #[test]
    fn test_output_fits_target() {
        let source = RgbaImage::from_fn(100, 40, |x, _| {
            let v = (x * 255 / 99) as u8;
            Rgba([v, v, v, 255])
        });
        let result = MonoConverter::new(target(30, 30)).convert(&source).unwrap();
        assert_eq!((result.image.width(), result.image.height()), (30, 12));
        assert_eq!(result.bitmap.bytes().len(), (30 * 12usize).div_ceil(8));
    }

    #[test]
    fn test_flat_source_converts() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let result = MonoConverter::new(target(4, 4))
            .kernel(NULL)
            .convert(&source)
            .unwrap();
        assert_eq!(result.bitmap.bytes(), &[0xff, 0xff]);
    }
}
