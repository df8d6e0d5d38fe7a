//! RTF scanner.
//!
//! Splits raw RTF text into a flat queue of group delimiters, control words
//! and text runs. The scanner is total: malformed input turns into odd
//! tokens, never into an error. Text runs are borrowed straight from the
//! input when possible and copied into the arena only once an escape or a
//! skipped line break makes them discontiguous.

use super::token::{ControlWord, Parameter, SpannedToken, Token, TokenQueue};
use super::types::CharacterSet;
use bumpalo::Bump;
use bumpalo::collections::String as BumpString;
use std::borrow::Cow;

/// RTF scanner using arena allocation for decoded text.
pub struct Scanner<'a> {
    /// Source input
    input: &'a str,
    /// Current position in bytes
    pos: usize,
    /// Arena allocator for decoded text runs
    arena: &'a Bump,
    /// Character set used for `\'hh` escapes
    charset: CharacterSet,
    /// Pending run while it is still a contiguous slice of the input
    run_span: Option<(usize, usize)>,
    /// Pending run once it had to be decoded into the arena
    run_text: Option<BumpString<'a>>,
    /// Byte offset where the pending run started
    run_offset: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner.
    #[inline]
    pub fn new(input: &'a str, arena: &'a Bump) -> Self {
        Self {
            input,
            pos: 0,
            arena,
            charset: CharacterSet::default(),
            run_span: None,
            run_text: None,
            run_offset: 0,
        }
    }

    /// Set the character set used to decode `\'hh` escapes.
    #[inline]
    pub fn with_charset(mut self, charset: CharacterSet) -> Self {
        self.charset = charset;
        self
    }

    /// Tokenize the entire input.
    pub fn scan(mut self) -> TokenQueue<'a> {
        let mut tokens = TokenQueue::new();
        let input = self.input;
        let bytes = input.as_bytes();

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'{' => {
                    self.flush_text(&mut tokens);
                    tokens.push_back(SpannedToken::new(Token::GroupOpen, self.pos));
                    self.pos += 1;
                },
                b'}' => {
                    self.flush_text(&mut tokens);
                    tokens.push_back(SpannedToken::new(Token::GroupEnd, self.pos));
                    self.pos += 1;
                },
                b'\\' => self.scan_escape(&mut tokens),
                // Raw line breaks carry no meaning in RTF
                b'\r' | b'\n' => self.pos += 1,
                _ => self.scan_plain(),
            }
        }

        self.flush_text(&mut tokens);
        log::trace!(
            "scanned {} tokens from {} bytes",
            tokens.len(),
            self.input.len()
        );
        tokens
    }

    /// Consume a run of characters that need no decoding.
    fn scan_plain(&mut self) {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len()
            && !matches!(bytes[self.pos], b'{' | b'}' | b'\\' | b'\r' | b'\n')
        {
            self.pos += 1;
        }
        self.push_input(start, self.pos);
    }

    /// Handle everything that starts with a backslash.
    fn scan_escape(&mut self, tokens: &mut TokenQueue<'a>) {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.pos;
        self.pos += 1; // Skip '\'

        let Some(&next) = bytes.get(self.pos) else {
            // Trailing lone backslash
            self.push_input(start, self.pos);
            return;
        };

        match next {
            b'a'..=b'z' | b'A'..=b'Z' => self.scan_control_word(start, tokens),
            b'\\' | b'{' | b'}' => {
                self.mark_run_start(start);
                self.push_input(self.pos, self.pos + 1);
                self.pos += 1;
            },
            b'~' => self.push_decoded(start, '\u{00A0}'),  // Non-breaking space
            b'-' => self.push_decoded(start, '\u{00AD}'),  // Optional hyphen
            b'_' => self.push_decoded(start, '\u{2011}'),  // Non-breaking hyphen
            b'\'' => self.scan_hex_escape(start),
            b'*' => {
                self.pos += 1;
                self.emit_symbol_word("*", start, tokens);
            },
            b'\r' | b'\n' => {
                self.pos += 1;
                self.emit_symbol_word("par", start, tokens);
            },
            _ => {
                // Unsupported control symbol, kept as literal text
                let width = input[self.pos..].chars().next().map_or(1, char::len_utf8);
                self.pos += width;
                self.push_input(start, self.pos);
            },
        }
    }

    /// Parse `\name[-]digits[ ]`; `start` points at the backslash.
    fn scan_control_word(&mut self, start: usize, tokens: &mut TokenQueue<'a>) {
        let input = self.input;
        let bytes = input.as_bytes();
        self.flush_text(tokens);

        let name_start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        let name = &input[name_start..self.pos];

        let param_start = self.pos;
        if bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        let parameter = Parameter::from_raw(&input[param_start..self.pos]);

        // A single space is the delimiter, not text
        if bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }

        tokens.push_back(SpannedToken::new(
            Token::ControlWord(ControlWord::new(name, parameter)),
            start,
        ));
    }

    /// Decode `\'hh` through the current character set.
    fn scan_hex_escape(&mut self, start: usize) {
        let hex = self.input.get(self.pos + 1..self.pos + 3);
        let byte = hex
            .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|h| u8::from_str_radix(h, 16).ok());

        match byte {
            Some(byte) => {
                self.pos += 3;
                let raw = [byte];
                let (decoded, _) = self.charset.encoding().decode_without_bom_handling(&raw);
                self.mark_run_start(start);
                self.owned_run().push_str(&decoded);
            },
            None => {
                // Incomplete escape, keep "\'" as written
                self.pos += 1;
                self.push_input(start, self.pos);
            },
        }
    }

    fn emit_symbol_word(&mut self, name: &'static str, start: usize, tokens: &mut TokenQueue<'a>) {
        self.flush_text(tokens);
        tokens.push_back(SpannedToken::new(
            Token::ControlWord(ControlWord::new(name, Parameter::Absent)),
            start,
        ));
    }

    /// Append a decoded control symbol; `start` points at its backslash.
    fn push_decoded(&mut self, start: usize, ch: char) {
        self.pos += 1;
        self.mark_run_start(start);
        self.owned_run().push(ch);
    }

    /// Append `input[start..end]` to the pending run.
    fn push_input(&mut self, start: usize, end: usize) {
        if start == end {
            return;
        }
        self.mark_run_start(start);
        if self.run_text.is_none() {
            match &mut self.run_span {
                None => {
                    self.run_span = Some((start, end));
                    return;
                },
                Some((_, run_end)) if *run_end == start => {
                    *run_end = end;
                    return;
                },
                Some(_) => {},
            }
        }
        let input = self.input;
        self.owned_run().push_str(&input[start..end]);
    }

    fn mark_run_start(&mut self, offset: usize) {
        if self.run_span.is_none() && self.run_text.is_none() {
            self.run_offset = offset;
        }
    }

    /// Move the pending run into arena storage and return it.
    fn owned_run(&mut self) -> &mut BumpString<'a> {
        let arena = self.arena;
        let input = self.input;
        let span = self.run_span.take();
        self.run_text.get_or_insert_with(|| {
            let mut owned = BumpString::new_in(arena);
            if let Some((start, end)) = span {
                owned.push_str(&input[start..end]);
            }
            owned
        })
    }

    /// Emit the pending run as a text token, if it holds anything.
    fn flush_text(&mut self, tokens: &mut TokenQueue<'a>) {
        let input = self.input;
        let text = if let Some(owned) = self.run_text.take() {
            owned.into_bump_str()
        } else if let Some((start, end)) = self.run_span.take() {
            &input[start..end]
        } else {
            return;
        };
        tokens.push_back(SpannedToken::new(
            Token::Text(Cow::Borrowed(text)),
            self.run_offset,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtf::token::ControlWordKind;

    fn scan<'a>(input: &'a str, arena: &'a Bump) -> Vec<Token<'a>> {
        Scanner::new(input, arena)
            .scan()
            .iter()
            .map(|spanned| spanned.token.clone())
            .collect()
    }

    fn word(name: &'static str, parameter: Parameter<'static>) -> Token<'static> {
        Token::ControlWord(ControlWord::new(name, parameter))
    }

    fn text(value: &str) -> Token<'static> {
        Token::Text(Cow::Owned(value.to_string()))
    }

    #[test]
    fn test_simple_tokenization() {
        let arena = Bump::new();
        let tokens = scan(r"{\rtf1\ansi Hello}", &arena);
        assert_eq!(
            tokens,
            vec![
                Token::GroupOpen,
                word("rtf", Parameter::Value(1)),
                word("ansi", Parameter::Absent),
                text("Hello"),
                Token::GroupEnd,
            ]
        );
    }

    #[test]
    fn test_control_word_kinds() {
        let arena = Bump::new();
        let tokens = scan(r"\fonttbl\f0\fs24\i\b\u\froman", &arena);
        let kinds: Vec<ControlWordKind> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::ControlWord(w) => Some(w.kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                ControlWordKind::FontTable,
                ControlWordKind::FontNumber,
                ControlWordKind::FontSize,
                ControlWordKind::Italic,
                ControlWordKind::Bold,
                ControlWordKind::Underline,
                ControlWordKind::Unknown,
            ]
        );
    }

    #[test]
    fn test_only_one_delimiter_space_is_consumed() {
        let arena = Bump::new();
        let tokens = scan(r"\b  two spaces", &arena);
        assert_eq!(tokens, vec![word("b", Parameter::Absent), text(" two spaces")]);
    }

    #[test]
    fn test_terminator_other_than_space_is_kept() {
        let arena = Bump::new();
        let tokens = scan(r"\b1x\i{", &arena);
        assert_eq!(
            tokens,
            vec![
                word("b", Parameter::Value(1)),
                text("x"),
                word("i", Parameter::Absent),
                Token::GroupOpen,
            ]
        );
    }

    #[test]
    fn test_negative_and_malformed_parameters() {
        let arena = Bump::new();
        let tokens = scan(r"\li-360 \f- x", &arena);
        assert_eq!(
            tokens,
            vec![
                word("li", Parameter::Value(-360)),
                word("f", Parameter::Malformed("-")),
                text("x"),
            ]
        );
    }

    #[test]
    fn test_escaped_delimiters_join_the_text_run() {
        let arena = Bump::new();
        let tokens = scan(r"a\{b\}c\\d", &arena);
        assert_eq!(tokens, vec![text("a{b}c\\d")]);
    }

    #[test]
    fn test_control_symbols() {
        let arena = Bump::new();
        let tokens = scan(r"a\~b\-c\_d", &arena);
        assert_eq!(tokens, vec![text("a\u{00A0}b\u{00AD}c\u{2011}d")]);
    }

    #[test]
    fn test_hex_escape_uses_charset() {
        let arena = Bump::new();
        assert_eq!(scan(r"caf\'e9", &arena), vec![text("café")]);
        assert_eq!(scan(r"\'93quoted\'94", &arena), vec![text("\u{201C}quoted\u{201D}")]);

        let queue = Scanner::new(r"\'8e", &arena)
            .with_charset(CharacterSet::Mac)
            .scan();
        assert_eq!(queue.peek().map(|t| &t.token), Some(&text("é")));
    }

    #[test]
    fn test_incomplete_hex_escape_is_literal() {
        let arena = Bump::new();
        assert_eq!(scan(r"x\'zz", &arena), vec![text("x\\'zz")]);
    }

    #[test]
    fn test_ignorable_destination_and_escaped_newline() {
        let arena = Bump::new();
        let tokens = scan("{\\*\\generator x}\\\nY", &arena);
        assert_eq!(
            tokens,
            vec![
                Token::GroupOpen,
                word("*", Parameter::Absent),
                word("generator", Parameter::Absent),
                text("x"),
                Token::GroupEnd,
                word("par", Parameter::Absent),
                text("Y"),
            ]
        );
    }

    #[test]
    fn test_line_breaks_are_ignored() {
        let arena = Bump::new();
        assert_eq!(scan("Hel\r\nlo\n", &arena), vec![text("Hello")]);
        assert!(scan("\n\r\n", &arena).is_empty());
    }

    #[test]
    fn test_trailing_backslash_is_literal() {
        let arena = Bump::new();
        assert_eq!(scan("end\\", &arena), vec![text("end\\")]);
    }

    #[test]
    fn test_unicode_text_is_preserved() {
        let arena = Bump::new();
        assert_eq!(scan("{日本語}", &arena), vec![Token::GroupOpen, text("日本語"), Token::GroupEnd]);
        assert_eq!(scan("\\ü", &arena), vec![text("\\ü")]);
    }

    #[test]
    fn test_offsets_point_at_token_starts() {
        let arena = Bump::new();
        let queue = Scanner::new(r"{\b Bold}x", &arena).scan();
        let offsets: Vec<usize> = queue.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 1, 4, 8, 9]);
    }

    #[test]
    fn test_plain_runs_are_borrowed() {
        let arena = Bump::new();
        let queue = Scanner::new("plain text", &arena).scan();
        assert!(matches!(
            queue.peek().map(|t| &t.token),
            Some(Token::Text(Cow::Borrowed("plain text")))
        ));
    }
}
