//! Font table extraction.
//!
//! Works on the tokens of a `{\fonttbl ...}` group that the header phase has
//! already cut out of the token queue.

use super::error::RtfResult;
use super::token::{ControlWordKind, SpannedToken, Token};
use super::types::{Font, FontFamily, FontRef, FontTable};

/// Build a font table from the tokens of a font table group.
///
/// A single accumulator collects the family and name of the entry being
/// read. It is committed under the current font number whenever a group
/// closes or a new `\fN` starts. The accumulator is not cleared between
/// entries, so an entry that declares no family keeps the previous entry's
/// family.
pub fn parse_font_table(tokens: &[SpannedToken<'_>]) -> RtfResult<FontTable> {
    let mut table = FontTable::new();
    let mut current_key: FontRef = 0;
    let mut current_font = Font::default();

    for spanned in tokens {
        match &spanned.token {
            Token::ControlWord(word) => {
                let parameter = word.checked_parameter(spanned.offset)?;
                match word.kind {
                    ControlWordKind::FontNumber => {
                        table.insert(current_key, current_font.clone());
                        current_key = parameter.unwrap_or(0);
                    },
                    ControlWordKind::Unknown => {
                        if let Some(family) = FontFamily::from_control_word(word.name) {
                            current_font.family = family;
                        }
                    },
                    _ => {},
                }
            },
            Token::Text(text) => {
                let text: &str = text;
                // Entries are ';'-terminated
                current_font.name = text.strip_suffix(';').unwrap_or(text).to_string();
            },
            Token::GroupEnd => table.insert(current_key, current_font.clone()),
            Token::GroupOpen => {},
        }
    }

    log::debug!("font table holds {} entries", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtf::error::RtfError;
    use crate::rtf::scanner::Scanner;
    use bumpalo::Bump;

    fn font_table(group_body: &str) -> RtfResult<FontTable> {
        let arena = Bump::new();
        let queue = Scanner::new(group_body, &arena).scan();
        let tokens: Vec<SpannedToken<'_>> = queue.iter().cloned().collect();
        parse_font_table(&tokens)
    }

    #[test]
    fn test_two_fonts() {
        let table =
            font_table(r"\fonttbl{\f0\froman Times New Roman;}{\f1\fswiss Arial;}}").unwrap();
        assert_eq!(table.get(0), Some(&Font::new(FontFamily::Roman, "Times New Roman")));
        assert_eq!(table.get(1), Some(&Font::new(FontFamily::Swiss, "Arial")));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_ungrouped_entries() {
        let table = font_table(r"\fonttbl\f0\fswiss Helvetica;}").unwrap();
        assert_eq!(table.get(0), Some(&Font::new(FontFamily::Swiss, "Helvetica")));
    }

    #[test]
    fn test_first_commit_lands_on_key_zero() {
        // The commit before the first \fN goes to key 0
        let table = font_table(r"\fonttbl{\f2\fmodern Courier New;}}").unwrap();
        assert_eq!(table.get(0), Some(&Font::default()));
        assert_eq!(table.get(2), Some(&Font::new(FontFamily::Modern, "Courier New")));
    }

    #[test]
    fn test_family_carries_over_to_next_entry() {
        let table = font_table(r"\fonttbl{\f0\froman Georgia;}{\f1 Plain;}}").unwrap();
        assert_eq!(table.get(1), Some(&Font::new(FontFamily::Roman, "Plain")));
    }

    #[test]
    fn test_only_one_semicolon_is_stripped() {
        let table = font_table(r"\fonttbl{\f0\fnil Odd;;}}").unwrap();
        assert_eq!(table.get(0).map(|f| f.name.as_str()), Some("Odd;"));
    }

    #[test]
    fn test_non_contiguous_keys() {
        let table = font_table(r"\fonttbl{\f10\fscript Brush;}{\f-3\ftech Symbol;}}").unwrap();
        assert_eq!(table.get(10).map(|f| f.family), Some(FontFamily::Script));
        assert_eq!(table.get(-3).map(|f| f.family), Some(FontFamily::Tech));
    }

    #[test]
    fn test_malformed_font_number_is_an_error() {
        let err = font_table(r"\fonttbl{\f- Broken;}}").unwrap_err();
        assert!(matches!(err, RtfError::InvalidControlParameter { offset: 9, .. }));
    }
}
