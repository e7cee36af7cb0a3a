//! The two luminance passes over a source image.

use image::{GrayImage, Luma};

use super::range::{analyze_range, RangeAnalysis};
use crate::api::ConvertError;
use crate::color::{luminance, raw_luminance, PixelSource};

/// Unstretched luminance of every pixel, row-major.
pub fn raw_samples<S: PixelSource + ?Sized>(source: &S) -> Vec<u8> {
    let (width, height) = source.dimensions();
    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            samples.push(raw_luminance(source.pixel(x, y)));
        }
    }
    samples
}

/// Render `source` as a grayscale image stretched according to `analysis`.
///
/// A [`RangeAnalysis::Flat`] image is rendered with its single raw value.
pub fn stretched_grayscale<S: PixelSource + ?Sized>(
    source: &S,
    analysis: RangeAnalysis,
) -> GrayImage {
    let (width, height) = source.dimensions();
    match analysis {
        RangeAnalysis::Stretch(range) => GrayImage::from_fn(width, height, |x, y| {
            Luma([luminance(source.pixel(x, y), range)])
        }),
        RangeAnalysis::Flat(value) => GrayImage::from_pixel(width, height, Luma([value])),
    }
}

/// Both passes: analyse the raw luminance, then render the stretched image.
///
/// # Errors
///
/// [`ConvertError::EmptyImage`] if `source` has no pixels and
/// [`ConvertError::InvalidPercentile`] for `percentile >= 50`.
pub fn to_grayscale<S: PixelSource + ?Sized>(
    source: &S,
    percentile: u8,
) -> Result<GrayImage, ConvertError> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage);
    }

    let samples = raw_samples(source);
    let analysis = analyze_range(&samples, percentile)?;
    drop(samples);

    tracing::debug!(width, height, ?analysis, "Rendering stretched grayscale");
    Ok(stretched_grayscale(source, analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::StretchRange;
    use image::{Rgba, RgbaImage};

    fn gray_source(values: &[u8], width: u32) -> RgbaImage {
        let height = values.len() as u32 / width;
        RgbaImage::from_fn(width, height, |x, y| {
            let v = values[(y * width + x) as usize];
            Rgba([v, v, v, 255])
        })
    }

    #[test]
    fn test_raw_samples_row_major() {
        let src = gray_source(&[0, 50, 100, 255], 2);
        assert_eq!(raw_samples(&src), vec![0, 50, 100, 255]);
    }

    #[test]
    fn test_stretch_expands_narrow_range() {
        let src = gray_source(&[100, 150, 150, 200], 2);
        let gray = to_grayscale(&src, 0).unwrap();
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 1).0[0], 201);
        let mid = gray.get_pixel(1, 0).0[0];
        assert!((126..=130).contains(&mid), "midtone stretched to {mid}");
    }

    #[test]
    fn test_passes_agree_on_full_range() {
        let src = gray_source(&[0, 30, 90, 255], 4);
        let samples = raw_samples(&src);
        let gray = stretched_grayscale(&src, RangeAnalysis::Stretch(StretchRange::FULL));
        assert_eq!(gray.into_raw(), samples);
    }

    #[test]
    fn test_flat_image_is_not_stretched() {
        let src = gray_source(&[90; 6], 3);
        let gray = to_grayscale(&src, 2).unwrap();
        assert_eq!(gray.dimensions(), (3, 2));
        assert!(gray.pixels().all(|p| p.0[0] == 90));
    }

    #[test]
    fn test_transparent_image_is_white() {
        let src = RgbaImage::from_pixel(3, 3, Rgba([200, 10, 10, 0]));
        let gray = to_grayscale(&src, 2).unwrap();
        assert!(gray.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_empty_source_rejected() {
        let src = RgbaImage::new(0, 5);
        assert_eq!(to_grayscale(&src, 2), Err(ConvertError::EmptyImage));
    }
}
