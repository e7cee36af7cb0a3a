//! Public API for the mono-dither crate.
//!
//! This module provides the high-level API: the [`MonoConverter`] builder,
//! its [`Conversion`] result and the [`ConvertError`] type.

mod builder;
mod error;

pub use builder::{Conversion, MonoConverter};
pub use error::ConvertError;
