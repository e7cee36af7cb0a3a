//! mono-dither: 1-bit bitmaps for small monochrome displays
//!
//! This library turns a decoded raster image into a packed 1-bit bitmap
//! suitable for embedding in firmware that drives an LCD, OLED or e-paper
//! panel.
//!
//! # Quick Start
//!
//! The [`MonoConverter`] builder is the primary entry point:
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use mono_dither::{KernelRegistry, MonoConverter, TargetBox};
//!
//! let registry = KernelRegistry::builtin();
//! let source = RgbaImage::from_pixel(64, 32, Rgba([90, 120, 200, 255]));
//!
//! let converter = MonoConverter::new(TargetBox::new(32, 32).unwrap())
//!     .kernel(*registry.lookup("stucki").unwrap())
//!     .error_scale(0.8);
//! let result = converter.convert(&source).unwrap();
//!
//! assert_eq!(result.bitmap.width(), 32);
//! assert_eq!(result.bitmap.height(), 16);
//! assert_eq!(result.bitmap.bytes().len(), 32 * 16 / 8);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelSource (RGBA, straight alpha)
//!     |
//!     +---> raw luminance (alpha composited onto white)
//!     |         |
//!     |     percentile clip -> stretch range
//!     |         |
//!     +---> stretched luminance        GrayImage
//!               |
//!           Catmull-Rom resize         fit into TargetBox
//!               |
//!           error diffusion            Kernel + DitherOptions
//!               |
//!           MonoImage  ->  Bitmap      MSB-first, padded at the end only
//! ```
//!
//! # Kernels
//!
//! [`KernelRegistry::builtin()`] provides Null (plain threshold), Burkes,
//! Floyd-Steinberg, Jarvis-Judice-Ninke, Sierra, Sierra Two-Row,
//! Sierra Lite and Stucki. Further kernels can be registered by name.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod preprocess;


pub use api::{Conversion, ConvertError, MonoConverter};
pub use color::{luminance, raw_luminance, PixelSource, Rgba16, StretchRange};
pub use dither::{
    dither_with_kernel, DitherOptions, Kernel, KernelRegistry, BUILTIN_KERNELS, BURKES,
    FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, NULL, SIERRA, SIERRA_LITE, SIERRA_TWO_ROW, STUCKI,
};
pub use output::{pack_msb_first, Bitmap, MonoImage};
pub use preprocess::{
    analyze_range, fit_dimensions, fit_within, raw_samples, stretched_grayscale, to_grayscale,
    RangeAnalysis, TargetBox, MAX_DIMENSION,
};
