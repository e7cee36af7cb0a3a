//! 1-bit image produced by the ditherer.

use super::bitmap::Bitmap;

/// A monochrome image, one `bool` per pixel in row-major order.
///
/// `true` marks a lit (white) pixel.
///
/// # Example
///
/// ```
/// use mono_dither::MonoImage;
///
/// let image = MonoImage::new(vec![false, true, true, false], 2, 2);
/// assert!(image.get(1, 0));
/// assert_eq!(image.lit_count(), 2);
/// assert_eq!(image.pack().bytes(), &[0b0110_0000]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoImage {
    bits: Vec<bool>,
    width: u32,
    height: u32,
}

impl MonoImage {
    /// Create an image from row-major pixel states.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `bits.len() == width * height`.
    pub fn new(bits: Vec<bool>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            bits.len(),
            width as usize * height as usize,
            "bits length ({}) must match width * height ({}x{})",
            bits.len(),
            width,
            height,
        );
        Self {
            bits,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether the pixel at `(x, y)` is lit.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over rows of pixels.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.bits.chunks(self.width.max(1) as usize)
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.bits.iter().filter(|&&on| on).count()
    }

    /// Pack into bytes, row-major and MSB-first without per-row padding.
    pub fn pack(&self) -> Bitmap {
        Bitmap::pack(self)
    }
}
