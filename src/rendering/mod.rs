pub mod header;
pub mod preview;

pub use header::{identifier_from_path, sanitize_identifier, write_header};
pub use preview::encode_preview;
