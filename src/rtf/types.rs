//! RTF document type definitions.

use super::token::{ControlWord, ControlWordKind, Token};
use encoding_rs::Encoding;
use phf::phf_map;
use serde::Serialize;
use std::collections::BTreeMap;

/// Font reference (key into the font table).
pub type FontRef = i32;

/// Formatting state of one group scope.
///
/// Once attached to a [`StyleBlock`] it is an immutable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Painter {
    /// Font reference
    pub font_ref: FontRef,
    /// Font size in half-points
    pub font_size: i32,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
}

/// A run of text and the formatting that applies to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleBlock {
    pub painter: Painter,
    pub text: String,
}

impl StyleBlock {
    /// Create a new style block.
    #[inline]
    pub fn new(painter: Painter, text: impl Into<String>) -> Self {
        Self {
            painter,
            text: text.into(),
        }
    }

    /// Get the text content.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Font family categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FontFamily {
    /// Nil (unknown or default)
    #[default]
    Nil,
    /// Roman (serif) fonts
    Roman,
    /// Swiss (sans-serif) fonts
    Swiss,
    /// Modern (monospace) fonts
    Modern,
    /// Script fonts
    Script,
    /// Decorative fonts
    Decor,
    /// Technical, symbol, and mathematical fonts
    Tech,
    /// Arabic, Hebrew, or other bidirectional fonts
    Bidi,
}

static FONT_FAMILIES: phf::Map<&'static str, FontFamily> = phf_map! {
    "fnil" => FontFamily::Nil,
    "froman" => FontFamily::Roman,
    "fswiss" => FontFamily::Swiss,
    "fmodern" => FontFamily::Modern,
    "fscript" => FontFamily::Script,
    "fdecor" => FontFamily::Decor,
    "ftech" => FontFamily::Tech,
    "fbidi" => FontFamily::Bidi,
};

impl FontFamily {
    /// Resolve a raw control word name such as `froman`.
    #[inline]
    pub fn from_control_word(name: &str) -> Option<Self> {
        FONT_FAMILIES.get(name).copied()
    }
}

/// Font definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Font {
    /// Font family category
    pub family: FontFamily,
    /// Font name
    pub name: String,
}

impl Font {
    /// Create a new font.
    #[inline]
    pub fn new(family: FontFamily, name: impl Into<String>) -> Self {
        Self {
            family,
            name: name.into(),
        }
    }
}

/// Font table containing document fonts, keyed by font number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FontTable {
    fonts: BTreeMap<FontRef, Font>,
}

impl FontTable {
    /// Create a new font table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a font under `font_ref`, replacing any previous entry.
    #[inline]
    pub fn insert(&mut self, font_ref: FontRef, font: Font) {
        self.fonts.insert(font_ref, font);
    }

    /// Get a font by reference.
    #[inline]
    pub fn get(&self, font_ref: FontRef) -> Option<&Font> {
        self.fonts.get(&font_ref)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Iterate over `(font_ref, font)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (FontRef, &Font)> {
        self.fonts.iter().map(|(key, font)| (*key, font))
    }
}

/// Character set encoding for RTF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CharacterSet {
    /// ANSI (Windows-1252 / CP1252)
    #[default]
    Ansi,
    /// Mac (Mac Roman)
    Mac,
    /// PC (DOS / CP437)
    Pc,
    /// PC (DOS / CP850)
    Pca,
}

impl CharacterSet {
    /// Resolve a charset declaration from a control word.
    ///
    /// `\ansi` has a dedicated kind; the other declarations are matched on
    /// the raw name of `Unknown` words.
    pub fn from_control_word(word: &ControlWord<'_>) -> Option<Self> {
        match word.kind {
            ControlWordKind::Ansi => Some(CharacterSet::Ansi),
            ControlWordKind::Unknown => match word.name {
                "mac" => Some(CharacterSet::Mac),
                "pc" => Some(CharacterSet::Pc),
                "pca" => Some(CharacterSet::Pca),
                _ => None,
            },
            _ => None,
        }
    }

    /// Resolve a charset declaration from any token.
    #[inline]
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        match token {
            Token::ControlWord(word) => Self::from_control_word(word),
            _ => None,
        }
    }

    /// Single-byte encoding used to decode `\'hh` escapes.
    ///
    /// encoding_rs has no CP437/CP850 tables; IBM866 shares their box
    /// drawing range and is the closest available match.
    pub fn encoding(self) -> &'static Encoding {
        match self {
            CharacterSet::Ansi => encoding_rs::WINDOWS_1252,
            CharacterSet::Mac => encoding_rs::MACINTOSH,
            CharacterSet::Pc | CharacterSet::Pca => encoding_rs::IBM866,
        }
    }
}

/// Document header: character set and font table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RtfHeader {
    pub charset: CharacterSet,
    pub font_table: FontTable,
}
