//! RTF parser that builds the document model from tokens.
//!
//! Parsing runs in two phases over one [`TokenQueue`]. The header phase
//! pops the preamble and the font table group off the front of the queue;
//! the body phase drains whatever is left while tracking one [`Painter`]
//! per open group.

use super::config::{ParserOptions, ScopeInheritance};
use super::document::RtfDocument;
use super::error::{RtfError, RtfResult};
use super::font_table::parse_font_table;
use super::token::{ControlWordKind, SpannedToken, Token, TokenQueue};
use super::types::{CharacterSet, Painter, RtfHeader, StyleBlock};
use smallvec::SmallVec;

/// Formatting stack for the body walk.
///
/// The root painter lives outside the scope vector, so it can never be
/// popped and there is always a top painter.
struct PainterStack {
    root: Painter,
    scopes: SmallVec<[Painter; 8]>,
    inheritance: ScopeInheritance,
}

impl PainterStack {
    fn new(inheritance: ScopeInheritance) -> Self {
        Self {
            root: Painter::default(),
            scopes: SmallVec::new(),
            inheritance,
        }
    }

    /// Open a scope for a `{`.
    fn push_scope(&mut self) {
        let painter = match self.inheritance {
            ScopeInheritance::Reset => Painter::default(),
            ScopeInheritance::Inherit => *self.top(),
        };
        self.scopes.push(painter);
    }

    /// Close the innermost scope for the `}` at `offset`.
    fn pop_scope(&mut self, offset: usize) -> RtfResult<()> {
        self.scopes
            .pop()
            .map(|_| ())
            .ok_or(RtfError::UnbalancedGroups { offset })
    }

    fn top(&self) -> &Painter {
        self.scopes.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Painter {
        self.scopes.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of scopes above the root.
    fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// RTF Parser.
pub struct Parser {
    options: ParserOptions,
    /// Groups left open by the last header preamble; taken by the next body
    preamble_depth: usize,
}

impl Parser {
    /// Create a new parser.
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            preamble_depth: 0,
        }
    }

    /// Parse the token queue into a document, draining it completely.
    pub fn parse(mut self, tokens: &mut TokenQueue<'_>) -> RtfResult<RtfDocument> {
        let header = self.parse_header(tokens)?;
        let body = self.parse_body(tokens)?;
        Ok(RtfDocument { header, body })
    }

    /// Extract the character set and font table from the front of the queue.
    ///
    /// When a `{\fonttbl` group exists, every token before it and the group
    /// itself are popped. Without one the queue is left untouched and only
    /// the character set is read, so body text is never swallowed.
    pub fn parse_header(&mut self, tokens: &mut TokenQueue<'_>) -> RtfResult<RtfHeader> {
        let mut header = RtfHeader::default();
        let mut font_table_at = None;
        self.preamble_depth = 0;

        for index in 0..tokens.len() {
            let Some(current) = tokens.peek_at(index) else {
                break;
            };
            let next = tokens.peek_at(index + 1);
            if current.token == Token::GroupOpen
                && next.is_some_and(|next| next.token.is_control(ControlWordKind::FontTable))
            {
                font_table_at = Some(index);
                break;
            }
            if let Some(charset) = CharacterSet::from_token(&current.token) {
                header.charset = charset;
            }
        }

        let Some(index) = font_table_at else {
            log::debug!("no font table, charset {:?}", header.charset);
            return Ok(header);
        };

        self.preamble_depth = Self::consume_preamble(tokens, index)?;
        tokens.pop_front()?; // '{' of the font table
        let group = Self::take_group(tokens)?;
        header.font_table = parse_font_table(&group)?;

        log::debug!(
            "header: charset {:?}, {} fonts, {} groups open",
            header.charset,
            header.font_table.len(),
            self.preamble_depth
        );
        Ok(header)
    }

    /// Walk the remaining tokens and collect the styled text runs.
    pub fn parse_body(&mut self, tokens: &mut TokenQueue<'_>) -> RtfResult<Vec<StyleBlock>> {
        let mut painters = PainterStack::new(self.options.scope_inheritance);
        for _ in 0..std::mem::take(&mut self.preamble_depth) {
            painters.push_scope();
        }
        let mut body = Vec::new();

        while !tokens.is_empty() {
            let SpannedToken { token, offset } = tokens.pop_front()?;
            match token {
                Token::GroupOpen => painters.push_scope(),
                Token::GroupEnd => painters.pop_scope(offset)?,
                Token::ControlWord(word) => {
                    let parameter = word.checked_parameter(offset)?;
                    apply_control_word(painters.top_mut(), word.kind, parameter);
                },
                Token::Text(text) => {
                    body.push(StyleBlock::new(*painters.top(), text.into_owned()));
                },
            }
        }

        if painters.depth() > 0 {
            log::debug!("{} groups left open at end of input", painters.depth());
        }
        log::debug!("body: {} style blocks", body.len());
        Ok(body)
    }

    /// Pop the `count` tokens preceding the font table.
    ///
    /// Returns how many of the groups opened there are still open.
    fn consume_preamble(tokens: &mut TokenQueue<'_>, count: usize) -> RtfResult<usize> {
        let mut depth = 0usize;
        for _ in 0..count {
            let SpannedToken { token, offset } = tokens.pop_front()?;
            match token {
                Token::GroupOpen => depth += 1,
                Token::GroupEnd => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(RtfError::UnbalancedGroups { offset })?;
                },
                Token::ControlWord(word) => {
                    word.checked_parameter(offset)?;
                },
                Token::Text(_) => {},
            }
        }
        Ok(depth)
    }

    /// Pop tokens up to and including the `}` that closes the current group.
    fn take_group<'a>(tokens: &mut TokenQueue<'a>) -> RtfResult<Vec<SpannedToken<'a>>> {
        let mut group = Vec::new();
        let mut depth = 0isize;

        while !tokens.is_empty() {
            let spanned = tokens.pop_front()?;
            match spanned.token {
                Token::GroupOpen => depth += 1,
                Token::GroupEnd => depth -= 1,
                _ => {},
            }
            group.push(spanned);
            if depth < 0 {
                break;
            }
        }

        Ok(group)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

/// Apply a control word to the painter of the current scope.
///
/// Style words only ever switch their flag on; `\b0` still sets bold.
fn apply_control_word(painter: &mut Painter, kind: ControlWordKind, parameter: Option<i32>) {
    match kind {
        ControlWordKind::FontNumber => painter.font_ref = parameter.unwrap_or(0),
        ControlWordKind::Bold => painter.bold = true,
        ControlWordKind::Italic => painter.italic = true,
        ControlWordKind::Underline => painter.underline = true,
        _ => {},
    }
}
