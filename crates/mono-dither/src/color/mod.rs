//! Pixel types and the luminance model.
//!
//! Source images are read through [`PixelSource`], which yields straight-alpha
//! [`Rgba16`] pixels. [`luminance`] and [`raw_luminance`] turn one pixel into
//! an 8-bit grey sample, compositing transparency against white.
//!
//! # Example
//!
//! ```
//! use mono_dither::{luminance, raw_luminance, Rgba16, StretchRange};
//!
//! let white = Rgba16::from_u8(255, 255, 255, 255);
//! assert_eq!(raw_luminance(white), 255);
//!
//! // Fully transparent pixels are treated as white whatever their color.
//! let clear = Rgba16::from_u8(0, 0, 0, 0);
//! assert_eq!(raw_luminance(clear), 255);
//!
//! let range = StretchRange::new(64, 192).unwrap();
//! assert!(luminance(Rgba16::from_u8(128, 128, 128, 255), range) <= 192);
//! ```

mod luminance;
mod pixel;

pub use luminance::{luminance, raw_luminance, StretchRange};
pub use pixel::{PixelSource, Rgba16};
