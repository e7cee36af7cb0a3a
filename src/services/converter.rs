use crate::error::AppError;
use crate::models::ConvertConfig;
use crate::rendering::{encode_preview, write_header};
use mono_dither::{Conversion, KernelRegistry, MonoConverter};
use std::path::{Path, PathBuf};

/// Where the results of one conversion go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// C header path
    pub header: PathBuf,
    /// Array name used inside the header
    pub name: String,
    /// Optional PNG preview path
    pub preview: Option<PathBuf>,
}

impl OutputPlan {
    /// Preview path that sits next to `header`: `logo.h` -> `logo.preview.png`
    pub fn preview_path_for(header: &Path) -> PathBuf {
        header.with_extension("preview.png")
    }
}

/// Decodes image files and converts them into headers
pub struct ConvertService {
    converter: MonoConverter,
}

impl ConvertService {
    pub fn new(converter: MonoConverter) -> Self {
        Self { converter }
    }

    /// Build a service from configuration, resolving the kernel in `registry`
    pub fn from_config(config: &ConvertConfig, registry: &KernelRegistry) -> Result<Self, AppError> {
        Ok(Self::new(config.to_converter(registry)?))
    }

    pub fn converter(&self) -> &MonoConverter {
        &self.converter
    }

    /// Decode an encoded image (PNG, JPEG, GIF or BMP) and convert it
    pub fn convert_bytes(&self, data: &[u8]) -> Result<Conversion, AppError> {
        let decoded = image::load_from_memory(data)?;
        tracing::debug!(
            width = decoded.width(),
            height = decoded.height(),
            color = ?decoded.color(),
            "Decoded image"
        );
        let source = decoded.to_rgba16();
        Ok(self.converter.convert(&source)?)
    }

    /// Read and convert the image at `path`
    pub fn convert_file(&self, path: &Path) -> Result<Conversion, AppError> {
        let data = std::fs::read(path)?;
        self.convert_bytes(&data)
    }

    /// Convert `input` and write everything named in `plan`.
    ///
    /// All outputs are rendered in memory first, so a failing conversion
    /// leaves no files behind. If the preview cannot be written, the header
    /// written just before it is removed again.
    pub fn run(&self, input: &Path, plan: &OutputPlan) -> Result<Conversion, AppError> {
        let conversion = self.convert_file(input)?;

        let mut header = Vec::new();
        write_header(&conversion.bitmap, &plan.name, &mut header)?;
        let preview = match &plan.preview {
            Some(path) => Some((path, encode_preview(&conversion.image)?)),
            None => None,
        };

        std::fs::write(&plan.header, header)?;
        if let Some((path, png_data)) = preview {
            if let Err(e) = std::fs::write(path, png_data) {
                if let Err(cleanup) = std::fs::remove_file(&plan.header) {
                    tracing::warn!(
                        %cleanup,
                        header = %plan.header.display(),
                        "Failed to remove header"
                    );
                }
                return Err(e.into());
            }
        }

        tracing::info!(
            input = %input.display(),
            header = %plan.header.display(),
            name = %plan.name,
            width = conversion.bitmap.width(),
            height = conversion.bitmap.height(),
            bytes = conversion.bitmap.bytes().len(),
            "Wrote bitmap header"
        );
        Ok(conversion)
    }
}
