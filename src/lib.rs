//! rtfdoc - A Rust library for reading Rich Text Format documents
//!
//! This library reads RTF documents into a small, serializable model: the
//! declared character set, the font table, and the body as a list of text
//! runs, each tagged with the formatting (font, bold, italic, underline)
//! in effect where it appears.
//!
//! # Features
//!
//! - **Single-pass scanner**: Text runs borrow from the input where possible,
//!   decoded escapes go to a bump arena
//! - **Font table**: `{\fonttbl ...}` entries keyed by font number
//! - **Scoped formatting**: Group nesting drives the formatting stack
//! - **Byte input**: BOM, UTF-8 and Windows-1252 inputs are all accepted
//! - **YAML export**: The whole model derives `Serialize` (feature `yaml`)
//!
//! # Example - Parsing a string
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rtf = r#"{\rtf1\ansi{\fonttbl{\f0\fswiss Arial;}}\f0 Plain {\b Bold}}"#;
//! let doc = rtfdoc::parse_content(rtf)?;
//!
//! for block in &doc.body {
//!     let font = doc.font(block.painter.font_ref);
//!     println!("{:?} bold={} {:?}", font.map(|f| &f.name), block.painter.bold, block.text);
//! }
//! assert_eq!(doc.text(), "Plain Bold");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a file
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = rtfdoc::parse_file("letter.rtf")?;
//! println!("{}", doc.text());
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod rtf;

use std::path::Path;

pub use rtf::{ParserOptions, RtfDocument, RtfError, RtfResult, ScopeInheritance};

/// Parse RTF content held in memory.
///
/// Shorthand for [`RtfDocument::parse`].
#[inline]
pub fn parse_content(content: &str) -> RtfResult<RtfDocument> {
    RtfDocument::parse(content)
}

/// Read and parse an RTF file.
///
/// Shorthand for [`RtfDocument::open`].
#[inline]
pub fn parse_file<P: AsRef<Path>>(path: P) -> RtfResult<RtfDocument> {
    RtfDocument::open(path)
}
