//! PNG preview of a converted image.

use crate::error::AppError;
use mono_dither::{pack_msb_first, MonoImage};
use std::io::Cursor;

/// Encode `image` as a 1-bit grayscale PNG. Lit pixels are white.
///
/// PNG rows start on a byte boundary, so each row is packed on its own
/// rather than reusing the continuous header bit stream.
pub fn encode_preview(image: &MonoImage) -> Result<Vec<u8>, AppError> {
    let packed: Vec<u8> = image.rows().flat_map(pack_msb_first).collect();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
