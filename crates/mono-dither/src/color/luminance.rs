//! Alpha-aware luminance with an output-range stretch.
//!
//! Every sample goes through the same 16-bit pipeline:
//!
//! ```text
//! premultiply(RGB, A) -> luma16 (BT.601 weights)
//!     + (0xffff - A)                 transparency composited onto white
//!     - min16, * 0xffff / (max16 - min16)
//!     + 0x80, >> 8                   round to 8 bits
//!     min(max)
//! ```
//!
//! where `min16`/`max16` are the 8-bit range bounds replicated into both
//! bytes of a 16-bit word.

use super::pixel::Rgba16;

/// An output range for luminance stretching with `min < max`.
///
/// The constructor refuses empty or inverted ranges, which keeps the
/// rescale step in [`luminance`] free of a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StretchRange {
    min: u8,
    max: u8,
}

impl StretchRange {
    /// The identity range `0..=255`.
    pub const FULL: Self = Self { min: 0, max: 255 };

    /// Create a range, or `None` if `min >= max`.
    pub const fn new(min: u8, max: u8) -> Option<Self> {
        if min < max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    #[inline]
    pub fn min(self) -> u8 {
        self.min
    }

    #[inline]
    pub fn max(self) -> u8 {
        self.max
    }
}

impl Default for StretchRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Replicate an 8-bit value into both bytes of a 16-bit word.
#[inline]
fn widen(v: u8) -> u64 {
    u64::from(v) << 8 | u64::from(v)
}

/// 16-bit luma of a pixel with transparency composited onto white.
///
/// Saturates at `0xffff`; rounding in the premultiply step can otherwise push
/// a nearly transparent pixel one step past the 16-bit range.
#[inline]
fn composited_luma16(pixel: Rgba16) -> u64 {
    let (r, g, b) = pixel.premultiplied();
    // 19595 + 38470 + 7471 == 65536, so the sum stays within u32.
    let y16 = (19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 16;
    let white = 0xffff - u32::from(pixel.a);
    u64::from(y16.saturating_add(white).min(0xffff))
}

/// Luminance of `pixel` stretched onto `range`.
///
/// Values at or below `range.min()` map to 0, values at or above
/// `range.max()` map to `range.max()`. The result never exceeds
/// `range.max()`.
pub fn luminance(pixel: Rgba16, range: StretchRange) -> u8 {
    let min16 = widen(range.min);
    let max16 = widen(range.max);

    let y16 = composited_luma16(pixel).saturating_sub(min16);
    let scaled = y16 * 0xffff / (max16 - min16);

    let rounded = (scaled + 0x80).min(0xffff);
    let y = (rounded >> 8) as u8;
    y.min(range.max)
}

/// Luminance of `pixel` on the full `0..=255` range.
///
/// This is the sample used to build the population for range analysis.
#[inline]
pub fn raw_luminance(pixel: Rgba16) -> u8 {
    luminance(pixel, StretchRange::FULL)
}
