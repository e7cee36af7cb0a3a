//! inkhdr - images to 1-bit bitmap headers
//!
//! Converts raster images into packed monochrome bitmaps declared as C
//! arrays, for firmware driving small LCD, OLED and e-paper panels.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
