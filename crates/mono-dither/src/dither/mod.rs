//! Error diffusion dithering to 1-bit.
//!
//! Every kernel runs through the same loop ([`dither_with_kernel`]):
//!
//! 1. Add the error accumulated from earlier pixels to the sample
//! 2. Light the pixel if the result reaches the 50% threshold
//! 3. Scale the difference to the chosen level (0 or 255) by
//!    [`DitherOptions::error_scale`]
//! 4. Distribute that error to unvisited neighbors per the kernel
//!
//! Kernels are plain data ([`Kernel`]) and are looked up by name through a
//! [`KernelRegistry`].
//!
//! # Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use mono_dither::{DitherOptions, KernelRegistry};
//!
//! let registry = KernelRegistry::builtin();
//! let kernel = registry.lookup("floyd-steinberg").unwrap();
//!
//! let gray = GrayImage::from_pixel(8, 8, Luma([128]));
//! let mono = kernel.dither(&gray, &DitherOptions::new());
//!
//! assert_eq!(mono.width(), 8);
//! assert!(mono.lit_count() > 0 && mono.lit_count() < 64);
//! ```

mod kernel;
mod options;
mod registry;

pub use kernel::*;
pub use options::{DitherOptions, DEFAULT_ERROR_SCALE};
pub use registry::KernelRegistry;

use image::GrayImage;

use crate::output::MonoImage;

/// Midpoint of the 8-bit sample scale; samples at or above it are lit.
pub const THRESHOLD: f32 = 128.0;

/// Pending diffusion error for the current row and the `max_dy` rows below.
#[derive(Debug)]
pub struct ErrorBuffer {
    /// `rows[0]` is the row being scanned
    rows: Vec<Vec<f32>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a buffer for `width` pixels tracking `row_depth` rows.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth.max(1)).map(|_| vec![0.0; width]).collect(),
            width,
        }
    }

    /// Accumulated error for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> f32 {
        self.rows[0][x]
    }

    /// Add error to a future pixel. Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: f32) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Move down one row, recycling the finished row as a zeroed last row.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0.0);
        }
    }
}

/// Core error diffusion loop parameterized by kernel.
pub fn dither_with_kernel(
    image: &GrayImage,
    kernel: &Kernel,
    options: &DitherOptions,
) -> MonoImage {
    let (w, h) = image.dimensions();
    let (width, height) = (w as usize, h as usize);
    let samples = image.as_raw();

    tracing::debug!(
        width,
        height,
        kernel = kernel.name,
        error_scale = options.error_scale,
        serpentine = options.serpentine,
        "Dithering to 1-bit"
    );

    let mut lit = vec![false; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = f32::from(kernel.divisor);

    for y in 0..height {
        let reverse = options.serpentine && y % 2 == 1;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let idx = y * width + x;
            let value = f32::from(samples[idx]) + error_buf.get_accumulated(x);

            let on = value >= THRESHOLD;
            lit[idx] = on;

            if kernel.entries.is_empty() {
                continue;
            }

            let level = if on { 255.0 } else { 0.0 };
            let error = (value - level) * options.error_scale;

            for &(dx, dy, weight) in kernel.entries {
                // Rows above have already been emitted.
                let Ok(dy) = usize::try_from(dy) else {
                    continue;
                };
                let effective_dx = if reverse { -dx } else { dx };
                let nx = x as i32 + effective_dx;
                let ny = y + dy;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    let share = error * f32::from(weight) / divisor;
                    error_buf.add_error(nx as usize, dy, share);
                }
            }
        }

        error_buf.advance_row();
    }

    MonoImage::new(lit, w, h)
}

impl Kernel {
    /// Dither `image` with this kernel.
    #[inline]
    pub fn dither(&self, image: &GrayImage, options: &DitherOptions) -> MonoImage {
        dither_with_kernel(image, self, options)
    }
}
