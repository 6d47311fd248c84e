//! Layout-sensitive scanner for the Fig language family
//!
//! Handles tokenization including:
//! - Keywords (func/fn, struct, enum, requires, ...) and identifiers
//! - Number, string and interpolated-string literals
//! - Operators and punctuation (`::`, `->`, `<<`, `&&`, ...)
//! - Indentation-based blocks (BLOCK-OPEN / BLOCK-CLOSE), statement ends and item separators
//! - Implicit line continuation inside `()`, `[]` and `{}`
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, InterpolationPart)
//! - `config` - LexerConfig (tab policy, error mode)
//! - `indent` - indentation frames and line-start resolution
//! - `strings` - string and interpolated-string scanning
//! - `numbers` - numeric literal scanning
//! - `render` - source reconstruction and the token dump format
//!
//! ## Notes
//! - The scanner is pull-based: [`Lexer::next_token`] (or the `Iterator` impl) scans just far enough
//!   to produce the next item. Tokens that one scan step produces together (a statement end followed by
//!   several block closes, say) wait in a small queue.
//! - The scanner never branches on grammar version; version differences live in `crate::grammar`.

mod config;
mod indent;
mod numbers;
mod render;
mod strings;
pub mod tokens;

pub use config::{ErrorMode, LexerConfig};
pub use indent::{FrameKind, IndentFrame};
pub use render::{dump, render};
pub use tokens::{InterpolationPart, Token, TokenClass, TokenKind, keyword_id};

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::diagnostics::{ConfigError, LexError};
use crate::span::{LineCol, Span};
use fig_core::lang::keywords::KeywordId;
use fig_core::lang::operators::OperatorId;
use fig_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Scanner state diagram (simplified):
//
// [Start of line] → measure indentation → resolve pending line end → [Inside code]
//                                                                        ↓
//                                                        see '(' '[' '{' → [push bracket]
//                                                                        ↓
//                                                        see '\n' → continuation (inside brackets)
//                                                                 → pending line end (otherwise)
//                                                                        ↓
//                                                        see ')' ']' '}' → [pop bracket]
// ============================================================================

/// Which statement-opening word led the current logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineLead {
    /// Only modifiers (or nothing) seen so far.
    Undecided,
    /// `enum`, `union`, `struct` or `interface`: the block below is a list of items.
    OpensList,
    Other,
}

/// Read-only view of the scanner's state, for tooling and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSnapshot {
    /// Open indentation frames, bottom first.
    pub frames: Vec<IndentFrame>,
    pub bracket_depth: usize,
    pub at_line_start: bool,
    /// Whether a line end is waiting to be resolved at the next logical line start.
    pub pending_line_end: bool,
}

impl ScanSnapshot {
    /// Columns of the open indentation frames, bottom first.
    pub fn indent_columns(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.column).collect()
    }
}

/// Layout-sensitive scanner for Fig source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers
/// - Numeric, string and interpolated-string literals
/// - Operators and punctuation
/// - Indentation frames (BLOCK-OPEN/BLOCK-CLOSE), STATEMENT-END and ITEM-SEPARATOR
/// - Implicit line continuation inside brackets
///
/// ## Examples
/// ```rust
/// use fig_syntax::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("pass\n").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds.last(), Some(&TokenKind::StatementEnd));
/// ```
pub struct Lexer<'a> {
    /// Newline-normalized source.
    source: Cow<'a, str>,
    /// Byte position in `source`.
    current_pos: usize,
    current_lc: LineCol,
    /// Added to every span offset (non-zero for interpolation fragments).
    base_offset: usize,
    config: LexerConfig,
    /// False for interpolation fragments: no indentation and no synthesized layout tokens.
    layout: bool,
    frames: Vec<IndentFrame>,
    /// Open delimiters with the span of their opener.
    brackets: Vec<(PunctuationId, Span)>,
    at_line_start: bool,
    line_has_tokens: bool,
    line_lead: LineLead,
    pending_line_end: Option<Span>,
    pending_opens_list: bool,
    queue: VecDeque<Result<Token, LexError>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::build(source, LexerConfig::default())
    }

    /// Create a scanner with an explicit configuration.
    ///
    /// ## Errors
    /// - [`ConfigError`] if the configuration does not validate.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(source, config))
    }

    /// Construct without validating; a zero tab width is treated as one column.
    fn build(source: &'a str, config: LexerConfig) -> Self {
        let source = if source.contains("\r\n") {
            Cow::Owned(source.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(source)
        };
        Self {
            source,
            current_pos: 0,
            current_lc: LineCol::START,
            base_offset: 0,
            config,
            layout: true,
            frames: vec![IndentFrame::BOTTOM],
            brackets: Vec::new(),
            at_line_start: true,
            line_has_tokens: false,
            line_lead: LineLead::Undecided,
            pending_line_end: None,
            pending_opens_list: false,
            queue: VecDeque::new(),
            finished: false,
        }
    }

    /// Scanner for an embedded expression starting at `base_offset` / `base_lc` of the outer source.
    fn fragment(source: &'a str, base_offset: usize, base_lc: LineCol, config: LexerConfig) -> Self {
        let mut lexer = Self::build(source, config);
        lexer.base_offset = base_offset;
        lexer.current_lc = base_lc;
        lexer.layout = false;
        lexer.at_line_start = false;
        lexer
    }

    /// Produce the next token or error, or `None` once the input is exhausted.
    ///
    /// ## Notes
    /// - In [`ErrorMode::Fatal`] the first error is returned, followed only by the BLOCK-CLOSE tokens of
    ///   the blocks still open, and then `None`.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        loop {
            if let Some(item) = self.queue.pop_front() {
                if item.is_err() && self.config.error_mode == ErrorMode::Fatal {
                    self.stop_after_error();
                }
                return Some(item);
            }
            if self.finished {
                return None;
            }
            self.scan_step();
        }
    }

    /// Snapshot of the indentation frames, bracket depth and line-start flags.
    pub fn state(&self) -> ScanSnapshot {
        ScanSnapshot {
            frames: self.frames.clone(),
            bracket_depth: self.brackets.len(),
            at_line_start: self.at_line_start,
            pending_line_end: self.pending_line_end.is_some(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Returns every token on success, or every error that was reported.
    pub fn tokenize(self) -> Result<Vec<Token>, Vec<LexError>> {
        let (tokens, errors) = self.tokenize_recovering();
        if errors.is_empty() { Ok(tokens) } else { Err(errors) }
    }

    /// Tokenize the entire source, keeping the tokens produced around errors.
    pub fn tokenize_recovering(self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }
        (tokens, errors)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.current_pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current_pos += c.len_utf8();
        if c == '\n' {
            self.current_lc.line += 1;
            self.current_lc.column = 1;
        } else {
            self.current_lc.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn span_from(&self, start: usize, start_lc: LineCol) -> Span {
        Span::new(
            self.base_offset + start,
            self.base_offset + self.current_pos,
            start_lc,
            self.current_lc,
        )
    }

    fn here(&self) -> Span {
        Span::point(self.base_offset + self.current_pos, self.current_lc)
    }

    fn tab_width(&self) -> usize {
        self.config.tab_width.max(1)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_step(&mut self) {
        if self.at_line_start {
            self.handle_indentation();
            return;
        }

        // Skip horizontal whitespace; a lone '\r' counts as whitespace.
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.advance();
        }

        let start = self.current_pos;
        let start_lc = self.current_lc;

        let Some(c) = self.advance() else {
            self.finish();
            return;
        };

        match c {
            '\n' => self.line_break(start, start_lc),
            '/' if self.peek() == Some('/') => self.skip_comment(),

            // Operators
            '+' => self.add_op(OperatorId::Plus, start, start_lc),
            '*' => self.add_op(OperatorId::Star, start, start_lc),
            '/' => self.add_op(OperatorId::Slash, start, start_lc),
            '%' => self.add_op(OperatorId::Percent, start, start_lc),
            '^' => self.add_op(OperatorId::Caret, start, start_lc),
            '~' => self.add_op(OperatorId::Tilde, start, start_lc),
            '-' => {
                if self.match_char('>') {
                    self.add_punct(PunctuationId::Arrow, start, start_lc);
                } else {
                    self.add_op(OperatorId::Minus, start, start_lc);
                }
            }
            '<' => self.operator(
                start,
                start_lc,
                OperatorId::Lt,
                &[('<', OperatorId::Shl), ('=', OperatorId::LtEq)],
            ),
            '>' => self.operator(
                start,
                start_lc,
                OperatorId::Gt,
                &[('>', OperatorId::Shr), ('=', OperatorId::GtEq)],
            ),
            '=' => self.operator(start, start_lc, OperatorId::Eq, &[('=', OperatorId::EqEq)]),
            '!' => self.operator(start, start_lc, OperatorId::Bang, &[('=', OperatorId::NotEq)]),
            '&' => self.operator(start, start_lc, OperatorId::Amp, &[('&', OperatorId::AmpAmp)]),
            '|' => self.operator(start, start_lc, OperatorId::Pipe, &[('|', OperatorId::PipePipe)]),

            // Punctuation
            ',' => self.add_punct(PunctuationId::Comma, start, start_lc),
            ';' => self.add_punct(PunctuationId::Semicolon, start, start_lc),
            '?' => self.add_punct(PunctuationId::Question, start, start_lc),
            '#' => self.add_punct(PunctuationId::Hash, start, start_lc),
            '.' => self.add_punct(PunctuationId::Dot, start, start_lc),
            ':' => {
                if self.match_char(':') {
                    self.add_punct(PunctuationId::ColonColon, start, start_lc);
                } else {
                    self.add_punct(PunctuationId::Colon, start, start_lc);
                }
            }
            '(' => self.open_bracket(PunctuationId::LParen, start, start_lc),
            ')' => self.close_bracket(PunctuationId::RParen, start, start_lc),
            '[' => self.open_bracket(PunctuationId::LBracket, start, start_lc),
            ']' => self.close_bracket(PunctuationId::RBracket, start, start_lc),
            '{' => self.open_bracket(PunctuationId::LBrace, start, start_lc),
            '}' => self.close_bracket(PunctuationId::RBrace, start, start_lc),

            // Strings
            '"' => self.scan_string(start, start_lc),
            '$' if self.peek() == Some('"') => {
                self.advance();
                self.scan_interpolated(start, start_lc);
            }

            // Numbers
            '0'..='9' => self.scan_number(start, start_lc),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, start_lc),

            _ => {
                let span = self.span_from(start, start_lc);
                self.recover(LexError::UnexpectedChar { found: c, span });
            }
        }
    }

    /// Skip a `//` comment up to (not including) the line break.
    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// A physical line break outside any string literal (already consumed).
    fn line_break(&mut self, start: usize, start_lc: LineCol) {
        // Implicit line continuation inside brackets; fragments have no layout at all.
        if !self.brackets.is_empty() || !self.layout {
            return;
        }
        if self.line_has_tokens {
            self.pending_line_end = Some(self.span_from(start, start_lc));
            self.pending_opens_list = self.line_lead == LineLead::OpensList;
        }
        self.line_has_tokens = false;
        self.line_lead = LineLead::Undecided;
        self.at_line_start = true;
    }

    /// End of input: close the pending line, report unclosed delimiters and close every open frame.
    fn finish(&mut self) {
        let unclosed: Vec<_> = self.brackets.drain(..).collect();
        for (open, span) in unclosed {
            self.queue.push_back(Err(LexError::Unclosed { open, span }));
        }

        if self.layout {
            let eof = self.here();
            if let Some(span) = self.pending_line_end.take() {
                self.push_layout(TokenKind::StatementEnd, "\n", span);
            } else if self.line_has_tokens {
                // Last line has no trailing newline.
                self.push_layout(TokenKind::StatementEnd, "", eof);
            }
            while self.frames.len() > 1 {
                self.frames.pop();
                self.push_layout(TokenKind::BlockClose, "", eof);
            }
        }

        self.finished = true;
        tracing::trace!(queued = self.queue.len(), "end of input");
    }

    /// Fatal mode: drop everything queued except block closes, then close the frames still open.
    fn stop_after_error(&mut self) {
        self.queue
            .retain(|item| matches!(item, Ok(token) if token.kind == TokenKind::BlockClose));
        if self.layout {
            let here = self.here();
            while self.frames.len() > 1 {
                self.frames.pop();
                self.push_layout(TokenKind::BlockClose, "", here);
            }
        }
        self.finished = true;
        tracing::debug!(queued = self.queue.len(), "stopping after first error");
    }

    /// Report an error and resynchronize at the next line start.
    ///
    /// The rest of the physical line is skipped and the bracket stack cleared, so the line break that
    /// follows is evaluated as an ordinary logical line end.
    fn recover(&mut self, err: LexError) {
        tracing::debug!(error = %err, category = %err.category(), "scan error, skipping to next line");
        self.queue.push_back(Err(err));
        self.skip_comment();
        self.brackets.clear();
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize, start_lc: LineCol) {
        self.note_significant(&kind);
        let span = self.span_from(start, start_lc);
        let text = &self.source[start..self.current_pos];
        self.queue.push_back(Ok(Token::new(kind, text, span)));
    }

    fn push_layout(&mut self, kind: TokenKind, text: &str, span: Span) {
        self.queue.push_back(Ok(Token::new(kind, text, span)));
    }

    /// Track whether the logical line has content and which word leads it.
    fn note_significant(&mut self, kind: &TokenKind) {
        self.line_has_tokens = true;
        if self.line_lead != LineLead::Undecided {
            return;
        }
        self.line_lead = match kind {
            TokenKind::Keyword(
                KeywordId::Public | KeywordId::Export | KeywordId::Private | KeywordId::Packed | KeywordId::Extern,
            ) => LineLead::Undecided,
            TokenKind::Keyword(KeywordId::Enum | KeywordId::Union | KeywordId::Struct | KeywordId::Interface) => {
                LineLead::OpensList
            }
            _ => LineLead::Other,
        };
    }

    fn add_op(&mut self, id: OperatorId, start: usize, start_lc: LineCol) {
        self.add_token(TokenKind::Operator(id), start, start_lc);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize, start_lc: LineCol) {
        self.add_token(TokenKind::Punctuation(id), start, start_lc);
    }

    /// Try to match a two-character operator, fall back to the single-character one.
    fn operator(&mut self, start: usize, start_lc: LineCol, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start, start_lc);
                return;
            }
        }
        self.add_op(simple, start, start_lc);
    }

    /// Emit an opening delimiter and push it on the bracket stack.
    fn open_bracket(&mut self, open: PunctuationId, start: usize, start_lc: LineCol) {
        let span = self.span_from(start, start_lc);
        self.brackets.push((open, span));
        self.add_punct(open, start, start_lc);
    }

    /// Emit a closing delimiter if it matches the innermost opener; report it otherwise.
    fn close_bracket(&mut self, close: PunctuationId, start: usize, start_lc: LineCol) {
        let span = self.span_from(start, start_lc);
        match self.brackets.last().copied() {
            None => self.recover(LexError::UnmatchedClose { found: close, span }),
            Some((open, _)) if punctuation::closer_for(open) == Some(close) => {
                self.brackets.pop();
                self.add_punct(close, start, start_lc);
            }
            Some((open, open_span)) => {
                let expected = punctuation::closer_for(open).unwrap_or(close);
                self.recover(LexError::MismatchedClose {
                    found: close,
                    expected,
                    span,
                    open: open_span,
                });
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, start_lc: LineCol) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Reserved words win over identifiers of the same spelling.
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start, start_lc);
        } else {
            let name = spelling.to_string();
            self.add_token(TokenKind::Ident(name), start, start_lc);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string with the default configuration.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(source).tokenize()
}

/// Lex a source string with an explicit configuration.
///
/// ## Notes
/// - A zero `tab_width` is treated as one column; call [`LexerConfig::validate`] first to reject it.
#[tracing::instrument(skip_all, fields(source_len = source.len(), tab_width = config.tab_width))]
pub fn lex_with_config(source: &str, config: LexerConfig) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::build(source, config).tokenize()
}

/// Lex a source string, returning the tokens produced around any errors as well as the errors.
///
/// ## Notes
/// - With [`ErrorMode::Fatal`] at most one error is returned; the tokens stop there apart from the
///   BLOCK-CLOSE tokens that balance blocks opened before it.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_recovering(source: &str, config: LexerConfig) -> (Vec<Token>, Vec<LexError>) {
    Lexer::build(source, config).tokenize_recovering()
}
