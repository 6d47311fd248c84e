//! Token types for the Fig layout scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters, separators and markers
//!
//! Four kinds carry no source text of their own; the scanner synthesizes them from layout:
//! `StatementEnd`, `BlockOpen`, `BlockClose` and `ItemSeparator`.
//!
//! ## Notes
//! - Every token keeps the exact source slice it was scanned from in `text`; literal kinds additionally
//!   carry their decoded value.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::span::Span;
use fig_core::lang::keywords::{self, KeywordId};
use fig_core::lang::operators::OperatorId;
use fig_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and literals ==========
    Ident(String),
    Int(i64),
    Float(f64),
    String(String),
    InterpolatedString(Vec<InterpolationPart>),

    // ========== Layout (synthesized) ==========
    StatementEnd,
    BlockOpen,
    BlockClose,
    ItemSeparator,
}

/// Part of an interpolated string (`$"total: {a + b}"`).
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationPart {
    Text(String),
    /// The embedded expression, scanned with layout disabled.
    Expr(Vec<Token>),
}

/// Coarse token classification shared with the external rule table.
///
/// ## Notes
/// - Operators classify as [`TokenClass::Punctuation`]; their [`OperatorId`] is still available on the
///   kind for precedence lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    Identifier,
    Literal,
    Punctuation,
    StatementEnd,
    BlockOpen,
    BlockClose,
    ItemSeparator,
}

impl TokenClass {
    /// Stable kebab-case name, used by the token dump and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Identifier => "identifier",
            TokenClass::Literal => "literal",
            TokenClass::Punctuation => "punctuation",
            TokenClass::StatementEnd => "statement-end",
            TokenClass::BlockOpen => "block-open",
            TokenClass::BlockClose => "block-close",
            TokenClass::ItemSeparator => "item-separator",
        }
    }

    /// Whether tokens of this class are synthesized from layout rather than scanned.
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            TokenClass::StatementEnd | TokenClass::BlockOpen | TokenClass::BlockClose | TokenClass::ItemSeparator
        )
    }
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TokenKind {
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::Keyword(KeywordId::True | KeywordId::False) => TokenClass::Literal,
            TokenKind::Keyword(_) => TokenClass::Keyword,
            TokenKind::Operator(_) | TokenKind::Punctuation(_) => TokenClass::Punctuation,
            TokenKind::Ident(_) => TokenClass::Identifier,
            TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::String(_) | TokenKind::InterpolatedString(_) => {
                TokenClass::Literal
            }
            TokenKind::StatementEnd => TokenClass::StatementEnd,
            TokenKind::BlockOpen => TokenClass::BlockOpen,
            TokenKind::BlockClose => TokenClass::BlockClose,
            TokenKind::ItemSeparator => TokenClass::ItemSeparator,
        }
    }
}

/// A token with its kind, source text and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_keywords_are_literals() {
        assert_eq!(TokenKind::Keyword(KeywordId::True).class(), TokenClass::Literal);
        assert_eq!(TokenKind::Keyword(KeywordId::If).class(), TokenClass::Keyword);
    }

    #[test]
    fn operators_classify_as_punctuation() {
        assert_eq!(TokenKind::Operator(OperatorId::Plus).class(), TokenClass::Punctuation);
        assert!(!TokenClass::Punctuation.is_layout());
        assert!(TokenClass::ItemSeparator.is_layout());
    }

    #[test]
    fn keyword_aliases_resolve() {
        assert_eq!(keyword_id("fn"), Some(KeywordId::Func));
        assert_eq!(keyword_id("fnord"), None);
    }
}
