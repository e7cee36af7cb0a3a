//! Error type for the mono-dither public API.
//!
//! Every fallible step of the pipeline reports a [`ConvertError`]. Errors are
//! raised before any buffer sized from user input is allocated.

use thiserror::Error;

/// Errors raised while configuring or running a conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The target bounding box is empty or larger than [`MAX_DIMENSION`](crate::MAX_DIMENSION).
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The source image has no pixels.
    #[error("source image has no pixels")]
    EmptyImage,

    /// The range-stretch percentile must clip less than half of the population.
    #[error("range percentile must be in 0..50, got {0}")]
    InvalidPercentile(u8),

    /// The error-diffusion scale must be a finite value in `0.0..=1.0`.
    #[error("dither error scale must be within 0.0..=1.0, got {0}")]
    InvalidErrorScale(f32),

    /// No kernel with that name is registered.
    #[error("unknown dither kernel: {0}")]
    UnknownKernel(String),

    /// A kernel offered for registration is malformed.
    #[error("invalid dither kernel {name}: {reason}")]
    InvalidKernel { name: String, reason: String },
}
