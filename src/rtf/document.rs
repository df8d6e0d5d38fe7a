//! RTF document representation.

use super::config::ParserOptions;
use super::error::RtfResult;
use super::parser::Parser;
use super::scanner::Scanner;
use super::types::{CharacterSet, Font, FontRef, FontTable, RtfHeader, StyleBlock};
use crate::common::detection::is_rtf;
use crate::common::encoding::decode_text;
use bumpalo::Bump;
use serde::Serialize;
use std::path::Path;

/// RTF Document.
///
/// This is the main entry point for parsing RTF documents. The body holds
/// one [`StyleBlock`] per text run, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RtfDocument {
    /// Character set and font table
    pub header: RtfHeader,
    /// Styled text runs
    pub body: Vec<StyleBlock>,
}

impl RtfDocument {
    /// Parse an RTF document from a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtfdoc::rtf::RtfDocument;
    ///
    /// let rtf = r#"{\rtf1\ansi{\fonttbl{\f0\fswiss Arial;}}\f0 Hello {\b World}}"#;
    /// let doc = RtfDocument::parse(rtf)?;
    /// assert_eq!(doc.text(), "Hello World");
    /// assert!(doc.body[1].painter.bold);
    /// # Ok::<(), rtfdoc::rtf::RtfError>(())
    /// ```
    pub fn parse(input: &str) -> RtfResult<RtfDocument> {
        Self::parse_with_options(input, ParserOptions::default())
    }

    /// Parse an RTF document from a string with explicit options.
    pub fn parse_with_options(input: &str, options: ParserOptions) -> RtfResult<RtfDocument> {
        // Decoded text runs live in the arena until the body copies them out
        let arena = Bump::new();
        let mut tokens = Scanner::new(input, &arena)
            .with_charset(options.charset_hint)
            .scan();
        Parser::new(options).parse(&mut tokens)
    }

    /// Parse an RTF document from bytes.
    ///
    /// The bytes are read as UTF-8 (or the encoding named by a BOM), falling
    /// back to Windows-1252 for legacy files with raw 8-bit text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtfdoc::rtf::RtfDocument;
    ///
    /// let doc = RtfDocument::from_bytes(b"{\\rtf1 caf\xe9}")?;
    /// assert_eq!(doc.text(), "caf\u{e9}");
    /// # Ok::<(), rtfdoc::rtf::RtfError>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> RtfResult<RtfDocument> {
        let text = decode_text(bytes);
        if !is_rtf(text.as_bytes()) {
            log::debug!("input has no {{\\rtf signature, parsing as a fragment");
        }
        Self::parse(&text)
    }

    /// Parse an RTF document from a file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rtfdoc::rtf::RtfDocument;
    ///
    /// let doc = RtfDocument::open("document.rtf")?;
    /// let text = doc.text();
    /// # Ok::<(), rtfdoc::rtf::RtfError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> RtfResult<RtfDocument> {
        let path = path.as_ref();
        log::debug!("reading {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Declared character set.
    #[inline]
    pub fn charset(&self) -> CharacterSet {
        self.header.charset
    }

    /// Get the font table.
    #[inline]
    pub fn font_table(&self) -> &FontTable {
        &self.header.font_table
    }

    /// Look up a font, typically by a painter's `font_ref`.
    #[inline]
    pub fn font(&self, font_ref: FontRef) -> Option<&Font> {
        self.header.font_table.get(font_ref)
    }

    /// Get all text content from the document, concatenated in body order.
    pub fn text(&self) -> String {
        self.body.iter().map(StyleBlock::text).collect()
    }

    /// Serialize the document model to YAML.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> RtfResult<String> {
        serde_saphyr::to_string(self).map_err(|e| super::error::RtfError::Yaml(e.to_string()))
    }
}
