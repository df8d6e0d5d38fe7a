//! Token model shared by the scanner and the parser.

use super::error::{RtfError, RtfResult};
use phf::phf_map;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

/// Kind of a control word, resolved from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlWordKind {
    Rtf,
    Ansi,
    FontTable,
    FontNumber,
    FontSize,
    Italic,
    Bold,
    Underline,
    Unknown,
}

static CONTROL_WORD_KINDS: phf::Map<&'static str, ControlWordKind> = phf_map! {
    "rtf" => ControlWordKind::Rtf,
    "ansi" => ControlWordKind::Ansi,
    "fonttbl" => ControlWordKind::FontTable,
    "f" => ControlWordKind::FontNumber,
    "fs" => ControlWordKind::FontSize,
    "i" => ControlWordKind::Italic,
    "b" => ControlWordKind::Bold,
    "u" => ControlWordKind::Underline,
};

impl ControlWordKind {
    /// Resolve a control word name (letters only, no backslash).
    #[inline]
    pub fn from_name(name: &str) -> Self {
        CONTROL_WORD_KINDS
            .get(name)
            .copied()
            .unwrap_or(ControlWordKind::Unknown)
    }
}

/// Numeric parameter following a control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter<'a> {
    /// No digits followed the name
    Absent,
    /// A well-formed signed integer
    Value(i32),
    /// Raw text that did not parse as an `i32` (lone `-`, overflow)
    Malformed(&'a str),
}

impl<'a> Parameter<'a> {
    /// Classify the raw parameter text captured by the scanner.
    pub fn from_raw(raw: &'a str) -> Self {
        if raw.is_empty() {
            return Parameter::Absent;
        }
        match raw.parse::<i32>() {
            Ok(value) => Parameter::Value(value),
            Err(_) => Parameter::Malformed(raw),
        }
    }
}

/// A control word: `\name` with an optional signed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWord<'a> {
    /// Raw name without the backslash or the numeric suffix
    pub name: &'a str,
    pub kind: ControlWordKind,
    pub parameter: Parameter<'a>,
}

impl<'a> ControlWord<'a> {
    /// Build a control word, resolving its kind from the name.
    #[inline]
    pub fn new(name: &'a str, parameter: Parameter<'a>) -> Self {
        Self {
            name,
            kind: ControlWordKind::from_name(name),
            parameter,
        }
    }

    /// The parameter value, or `InvalidControlParameter` if it was malformed.
    pub fn checked_parameter(&self, offset: usize) -> RtfResult<Option<i32>> {
        match self.parameter {
            Parameter::Absent => Ok(None),
            Parameter::Value(value) => Ok(Some(value)),
            Parameter::Malformed(raw) => Err(RtfError::InvalidControlParameter {
                name: self.name.to_string(),
                parameter: raw.to_string(),
                offset,
            }),
        }
    }
}

impl fmt::Display for ControlWord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.name)?;
        match self.parameter {
            Parameter::Absent => Ok(()),
            Parameter::Value(value) => write!(f, "{}", value),
            Parameter::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Token types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Opening brace
    GroupOpen,
    /// Closing brace
    GroupEnd,
    /// Control word
    ControlWord(ControlWord<'a>),
    /// Plain text with escapes already decoded
    Text(Cow<'a, str>),
}

impl Token<'_> {
    /// Whether this token is a control word of the given kind.
    #[inline]
    pub fn is_control(&self, kind: ControlWordKind) -> bool {
        matches!(self, Token::ControlWord(word) if word.kind == kind)
    }
}

/// A token together with the byte offset where it starts in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken<'a> {
    pub token: Token<'a>,
    pub offset: usize,
}

impl<'a> SpannedToken<'a> {
    #[inline]
    pub fn new(token: Token<'a>, offset: usize) -> Self {
        Self { token, offset }
    }
}

/// Ordered, consumable token queue.
///
/// The header phase and the body phase both drain this queue through a
/// mutable borrow, so a token popped by one phase is never seen by the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenQueue<'a> {
    tokens: VecDeque<SpannedToken<'a>>,
}

impl<'a> TokenQueue<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            tokens: VecDeque::new(),
        }
    }

    #[inline]
    pub fn push_back(&mut self, token: SpannedToken<'a>) {
        self.tokens.push_back(token);
    }

    /// Look at the front token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&SpannedToken<'a>> {
        self.tokens.front()
    }

    /// Look `n` tokens ahead of the front without consuming anything.
    #[inline]
    pub fn peek_at(&self, n: usize) -> Option<&SpannedToken<'a>> {
        self.tokens.get(n)
    }

    /// Remove and return the front token.
    #[inline]
    pub fn pop_front(&mut self) -> RtfResult<SpannedToken<'a>> {
        self.tokens.pop_front().ok_or(RtfError::EmptyTokenStream)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpannedToken<'a>> {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lookup_is_exact() {
        assert_eq!(ControlWordKind::from_name("f"), ControlWordKind::FontNumber);
        assert_eq!(ControlWordKind::from_name("fs"), ControlWordKind::FontSize);
        assert_eq!(ControlWordKind::from_name("u"), ControlWordKind::Underline);
        assert_eq!(ControlWordKind::from_name("ul"), ControlWordKind::Unknown);
        assert_eq!(ControlWordKind::from_name("froman"), ControlWordKind::Unknown);
        assert_eq!(ControlWordKind::from_name("B"), ControlWordKind::Unknown);
    }

    #[test]
    fn test_parameter_classification() {
        assert_eq!(Parameter::from_raw(""), Parameter::Absent);
        assert_eq!(Parameter::from_raw("24"), Parameter::Value(24));
        assert_eq!(Parameter::from_raw("-5"), Parameter::Value(-5));
        assert_eq!(Parameter::from_raw("-"), Parameter::Malformed("-"));
        assert_eq!(
            Parameter::from_raw("99999999999"),
            Parameter::Malformed("99999999999")
        );
    }

    #[test]
    fn test_checked_parameter_reports_offset() {
        let word = ControlWord::new("f", Parameter::Malformed("-"));
        let err = word.checked_parameter(9).unwrap_err();
        assert!(matches!(
            err,
            RtfError::InvalidControlParameter { ref name, offset: 9, .. } if name == "f"
        ));

        let word = ControlWord::new("fs", Parameter::Value(24));
        assert_eq!(word.checked_parameter(0).unwrap(), Some(24));
    }

    #[test]
    fn test_control_word_display() {
        assert_eq!(ControlWord::new("f", Parameter::Value(1)).to_string(), "\\f1");
        assert_eq!(ControlWord::new("b", Parameter::Absent).to_string(), "\\b");
        assert_eq!(ControlWord::new("li", Parameter::Value(-20)).to_string(), "\\li-20");
    }

    #[test]
    fn test_queue_pop_on_empty_is_error() {
        let mut queue = TokenQueue::new();
        queue.push_back(SpannedToken::new(Token::GroupOpen, 0));
        assert_eq!(queue.peek_at(0).map(|t| t.offset), Some(0));
        assert!(queue.peek_at(1).is_none());
        assert!(queue.pop_front().is_ok());
        assert!(matches!(queue.pop_front(), Err(RtfError::EmptyTokenStream)));
    }
}
