use mono_dither::dither::DEFAULT_ERROR_SCALE;
use mono_dither::preprocess::DEFAULT_PERCENTILE;
use mono_dither::{ConvertError, KernelRegistry, MonoConverter, TargetBox};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Conversion settings, loaded from a YAML file and overridable from the
/// command line.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Largest output width in pixels
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Largest output height in pixels
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Dither kernel name, as registered in the kernel registry
    #[serde(default = "default_dither")]
    pub dither: String,

    /// Fraction of the quantization error that is diffused (0.0..=1.0)
    #[serde(default = "default_dither_error")]
    pub dither_error: f32,

    /// Percent of samples clipped at each end before stretching
    #[serde(default = "default_percentile")]
    pub percentile: u8,

    /// Alternate scan direction on every row
    #[serde(default)]
    pub serpentine: bool,
}

fn default_max_width() -> u32 {
    296
}

fn default_max_height() -> u32 {
    128
}

fn default_dither() -> String {
    "burkes".to_string()
}

fn default_dither_error() -> f32 {
    DEFAULT_ERROR_SCALE
}

fn default_percentile() -> u8 {
    DEFAULT_PERCENTILE
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub dither: Option<String>,
    pub dither_error: Option<f32>,
    pub percentile: Option<u8>,
    pub serpentine: Option<bool>,
}

impl ConvertConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            dither = %config.dither,
            max_width = config.max_width,
            max_height = config.max_height,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply command-line values on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(max_width) = overrides.max_width {
            self.max_width = max_width;
        }
        if let Some(max_height) = overrides.max_height {
            self.max_height = max_height;
        }
        if let Some(dither) = overrides.dither {
            self.dither = dither;
        }
        if let Some(dither_error) = overrides.dither_error {
            self.dither_error = dither_error;
        }
        if let Some(percentile) = overrides.percentile {
            self.percentile = percentile;
        }
        if let Some(serpentine) = overrides.serpentine {
            self.serpentine = serpentine;
        }
        self
    }

    /// Build a validated converter, resolving the kernel name in `registry`
    pub fn to_converter(&self, registry: &KernelRegistry) -> Result<MonoConverter, ConvertError> {
        let target = TargetBox::new(self.max_width, self.max_height)?;
        let kernel = *registry.lookup(&self.dither)?;
        let converter = MonoConverter::new(target)
            .kernel(kernel)
            .error_scale(self.dither_error)
            .serpentine(self.serpentine)
            .percentile(self.percentile);
        converter.validate()?;
        Ok(converter)
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            max_height: default_max_height(),
            dither: default_dither(),
            dither_error: default_dither_error(),
            percentile: default_percentile(),
            serpentine: false,
        }
    }
}
