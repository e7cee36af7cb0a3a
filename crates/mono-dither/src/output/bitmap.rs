//! MSB-first bit packing.

use super::mono_image::MonoImage;

/// Pack pixel states 8 to a byte, first pixel in bit 7.
///
/// The last byte is left-aligned with its unused low bits zeroed; the output
/// is `ceil(bits.len() / 8)` bytes long.
pub fn pack_msb_first(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .fold(0u8, |byte, (i, _)| byte | (0x80u8 >> i))
        })
        .collect()
}

/// A packed 1-bit image with its dimensions.
///
/// Rows are concatenated without padding, so a row may start mid-byte;
/// only the end of the whole image is padded to a byte boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Pack a monochrome image.
    pub fn pack(image: &MonoImage) -> Self {
        let bytes = pack_msb_first(image.bits());
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            bytes = bytes.len(),
            "Packed 1-bit image"
        );
        Self {
            bytes,
            width: image.width(),
            height: image.height(),
        }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}
