//! Grayscale preprocessing ahead of dithering.
//!
//! The pipeline before dithering is:
//!
//! 1. **Raw pass** - every pixel's luminance on the full `0..=255` range
//!    ([`raw_samples`]), used only as a statistics population
//! 2. **Range analysis** - percentile-clipped `[min, max]` of that population
//!    ([`analyze_range`])
//! 3. **Stretched pass** - every pixel's luminance again, this time stretched
//!    onto the analysed range ([`stretched_grayscale`])
//! 4. **Resize** (Catmull-Rom) - fit into the target box ([`fit_within`])
//!
//! Both luminance passes are pure functions over the same source, so range
//! analysis can be tested on its own.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use mono_dither::{analyze_range, raw_samples, stretched_grayscale, RangeAnalysis};
//!
//! let source = RgbaImage::from_fn(4, 1, |x, _| {
//!     let v = [20, 40, 60, 100][x as usize];
//!     Rgba([v, v, v, 255])
//! });
//!
//! let samples = raw_samples(&source);
//! let analysis = analyze_range(&samples, 0).unwrap();
//! assert!(matches!(analysis, RangeAnalysis::Stretch(_)));
//!
//! let gray = stretched_grayscale(&source, analysis);
//! assert_eq!(gray.get_pixel(0, 0).0[0], 0);
//! assert_eq!(gray.get_pixel(3, 0).0[0], 100);
//! ```

mod grayscale;
mod range;
mod resize;

pub use grayscale::{raw_samples, stretched_grayscale, to_grayscale};
pub use range::{analyze_range, RangeAnalysis, DEFAULT_PERCENTILE};
pub use resize::{fit_dimensions, fit_within, TargetBox, MAX_DIMENSION};
