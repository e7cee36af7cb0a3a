//! 16-bit RGBA pixels and the [`PixelSource`] abstraction over decoded images.

use image::{ImageBuffer, Rgba, RgbaImage};

/// A straight (non-premultiplied) RGBA pixel with 16 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    /// Create a pixel from 16-bit channel values.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel from 8-bit channel values.
    ///
    /// Each byte is replicated into both halves of the 16-bit word, so
    /// `0xff` becomes `0xffff` and `0x80` becomes `0x8080`.
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: expand(r),
            g: expand(g),
            b: expand(b),
            a: expand(a),
        }
    }

    /// An opaque grey pixel.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::from_u8(v, v, v, 0xff)
    }

    /// Color channels multiplied by alpha, on the 16-bit scale.
    #[inline]
    pub(crate) fn premultiplied(self) -> (u32, u32, u32) {
        let a = u32::from(self.a);
        (
            u32::from(self.r) * a / 0xffff,
            u32::from(self.g) * a / 0xffff,
            u32::from(self.b) * a / 0xffff,
        )
    }
}

#[inline]
const fn expand(v: u8) -> u16 {
    (v as u16) << 8 | v as u16
}

/// A decoded image that can be read pixel by pixel.
///
/// Coordinates are `0..width` and `0..height`; implementations may panic on
/// out-of-range coordinates.
pub trait PixelSource {
    /// Image dimensions as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// The pixel at `(x, y)`.
    fn pixel(&self, x: u32, y: u32) -> Rgba16;
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba16 {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        Rgba16::from_u8(r, g, b, a)
    }
}

impl PixelSource for ImageBuffer<Rgba<u16>, Vec<u16>> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba16 {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        Rgba16::new(r, g, b, a)
    }
}
