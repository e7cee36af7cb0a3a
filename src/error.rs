use mono_dither::ConvertError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
