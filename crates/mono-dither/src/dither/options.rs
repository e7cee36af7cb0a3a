//! Dithering options and configuration.

use crate::api::ConvertError;

/// Configuration options for error diffusion dithering.
///
/// # Defaults
///
/// - Error scale: 0.8 (80% of the quantization error is diffused)
/// - Serpentine scanning: disabled (plain row-major scan)
///
/// # Example
///
/// ```
/// use mono_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .error_scale(1.0)
///     .serpentine(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// Share of each pixel's quantization error passed on to its neighbors.
    ///
    /// Values below 1.0 trade gradient accuracy for crisper edges, which
    /// tends to suit tiny monochrome panels.
    ///
    /// Default: `0.8`
    pub error_scale: f32,

    /// Enable serpentine scanning (alternating row direction).
    ///
    /// When enabled, odd rows are processed right-to-left and the diffusion
    /// kernel is horizontally flipped.
    ///
    /// Default: `false`
    pub serpentine: bool,
}

/// Default value of [`DitherOptions::error_scale`].
pub const DEFAULT_ERROR_SCALE: f32 = 0.8;

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            error_scale: DEFAULT_ERROR_SCALE,
            serpentine: false,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error scale factor.
    #[inline]
    pub fn error_scale(mut self, scale: f32) -> Self {
        self.error_scale = scale;
        self
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Reject error scales that are not finite or fall outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.error_scale.is_finite() && (0.0..=1.0).contains(&self.error_scale) {
            Ok(())
        } else {
            Err(ConvertError::InvalidErrorScale(self.error_scale))
        }
    }
}
