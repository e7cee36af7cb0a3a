pub mod converter;

pub use converter::{ConvertService, OutputPlan};
