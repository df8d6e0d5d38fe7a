//! Configuration options for RTF parsing.

use super::types::CharacterSet;

/// How a newly opened group initializes its formatting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeInheritance {
    /// Every group starts from the blank painter, ignoring the enclosing
    /// scope. `{\b Bold {nested}}` yields a plain `nested`.
    #[default]
    Reset,
    /// Every group starts from a copy of the enclosing painter, as RTF
    /// readers usually do.
    Inherit,
}

/// Options controlling how a document is parsed.
///
/// # Examples
///
/// ```rust
/// use rtfdoc::rtf::{CharacterSet, ParserOptions, ScopeInheritance};
///
/// // Create with defaults
/// let options = ParserOptions::default();
///
/// // Or customize
/// let options = ParserOptions::new()
///     .with_scope_inheritance(ScopeInheritance::Inherit)
///     .with_charset_hint(CharacterSet::Mac);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Formatting policy for nested groups
    pub scope_inheritance: ScopeInheritance,
    /// Character set used to decode `\'hh` escapes while scanning
    pub charset_hint: CharacterSet,
}

impl ParserOptions {
    /// Create a new `ParserOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatting policy for nested groups.
    #[inline]
    pub fn with_scope_inheritance(mut self, policy: ScopeInheritance) -> Self {
        self.scope_inheritance = policy;
        self
    }

    /// Set the character set used for `\'hh` escapes.
    ///
    /// Escapes are decoded while scanning, before the header declares its
    /// own character set, so callers that know the encoding up front pass it
    /// here.
    #[inline]
    pub fn with_charset_hint(mut self, charset: CharacterSet) -> Self {
        self.charset_hint = charset;
        self
    }
}
