//! Test fixtures: images generated on the fly and written to scratch dirs.

use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Left half black, right half white, fully opaque
pub fn split_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

/// 2x2 checkerboard: black, white / white, black
pub fn checkerboard() -> RgbaImage {
    RgbaImage::from_fn(2, 2, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

/// Horizontal grey ramp from black to white
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgba([v, v, v, 255])
    })
}

/// Black disc on a transparent background
pub fn transparent_logo(size: u32) -> RgbaImage {
    let c = size as i64 / 2;
    RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as i64 - c, y as i64 - c);
        if dx * dx + dy * dy <= c * c / 4 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Write `image` into `dir` under `file_name`, encoded by extension
pub fn write_image(dir: &Path, file_name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(file_name);
    let format = ImageFormat::from_path(&path).unwrap();
    match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(&path, format)
            .unwrap(),
        _ => image.save_with_format(&path, format).unwrap(),
    }
    path
}
