//! Byte-level helpers shared by the format readers.

pub mod detection;
pub mod encoding;

pub use detection::is_rtf;
pub use encoding::decode_text;
