//! Output types for the conversion pipeline.
//!
//! - [`MonoImage`]: one boolean per pixel, the canonical dither result
//! - [`Bitmap`]: the same pixels packed MSB-first into bytes, ready to be
//!   embedded in firmware source

mod bitmap;
mod mono_image;

pub use bitmap::{pack_msb_first, Bitmap};
pub use mono_image::MonoImage;
