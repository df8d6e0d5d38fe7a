//! RTF (Rich Text Format) reader.
//!
//! Turns an RTF document into a header (character set and font table) and
//! a flat body of styled text runs. Input is scanned once into an arena
//! backed token queue, then consumed in two phases.
//!
//! # Architecture
//!
//! - **Scanner**: Splits RTF input into group delimiters, control words and text
//! - **Font table**: Reads `{\fonttbl ...}` entries into a keyed table
//! - **Parser**: Runs the header phase, then folds the body into style blocks
//! - **Document**: Owns the result and offers file and byte entry points
//!
//! # Example
//!
//! ```rust
//! use rtfdoc::rtf::RtfDocument;
//!
//! let rtf_text = r#"{\rtf1\ansi{\fonttbl{\f0\fswiss Helvetica;}}\f0 Hello World!}"#;
//! let doc = RtfDocument::parse(rtf_text)?;
//! assert_eq!(doc.text(), "Hello World!");
//! assert_eq!(doc.font(0).map(|f| f.name.as_str()), Some("Helvetica"));
//! # Ok::<(), rtfdoc::rtf::RtfError>(())
//! ```

mod config;
mod document;
mod error;
mod font_table;
mod parser;
mod scanner;
mod token;
mod types;


// Re-exports
pub use config::{ParserOptions, ScopeInheritance};
pub use document::RtfDocument;
pub use error::{RtfError, RtfResult};
pub use font_table::parse_font_table;
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{ControlWord, ControlWordKind, Parameter, SpannedToken, Token, TokenQueue};
pub use types::{
    CharacterSet, Font, FontFamily, FontRef, FontTable, Painter, RtfHeader, StyleBlock,
};
