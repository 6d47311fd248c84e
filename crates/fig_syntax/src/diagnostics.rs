//! Error types for the Fig syntax layer.
//!
//! Three families of scan errors share one enum, [`LexError`], so a token stream can be a plain
//! `Iterator<Item = Result<Token, LexError>>`:
//!
//! - **lex**: unexpected characters, unterminated literals, malformed numbers
//! - **indent**: inconsistent, ambiguous or forbidden indentation
//! - **bracket**: unmatched, mismatched or unclosed delimiters
//!
//! [`DisambiguationError`] is a separate type: it signals a misconfigured rule table rather than bad
//! input, and callers must treat it as fatal.
//!
//! All errors implement [`miette::Diagnostic`] with a labelled [`Span`], so the CLI can render them
//! against the source text.

use fig_core::GrammarVersion;
use fig_core::lang::punctuation::PunctuationId;
use miette::Diagnostic;
use thiserror::Error;

use crate::brackets::PositionKind;
use crate::grammar::SiteId;
use crate::span::Span;

/// The error taxonomy a [`LexError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Lex,
    Indent,
    Bracket,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorCategory::Lex => "lex",
            ErrorCategory::Indent => "indent",
            ErrorCategory::Bracket => "bracket",
        })
    }
}

/// What went wrong with a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentErrorKind {
    /// Unindent to a column that matches no enclosing block.
    Inconsistent { column: usize, enclosing: usize },
    /// Tabs and spaces mixed in one line's indentation while a tab is wider than one column.
    Ambiguous,
    /// A tab in indentation while tabs are disabled.
    TabsNotAllowed,
}

impl std::fmt::Display for IndentErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentErrorKind::Inconsistent { column, enclosing } => write!(
                f,
                "unindent to column {column} does not match any enclosing block (nearest is column {enclosing})"
            ),
            IndentErrorKind::Ambiguous => f.write_str("indentation mixes tabs and spaces ambiguously"),
            IndentErrorKind::TabsNotAllowed => f.write_str("tab character in indentation"),
        }
    }
}

/// An error produced while scanning source text.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum LexError {
    #[error("unexpected character {found:?}")]
    #[diagnostic(code(fig::lex::unexpected_char))]
    UnexpectedChar {
        found: char,
        #[label("not valid here")]
        span: Span,
    },

    #[error("unterminated string literal")]
    #[diagnostic(code(fig::lex::unterminated_string), help("close the string with `\"`"))]
    UnterminatedString {
        #[label("string starts here")]
        span: Span,
    },

    #[error("unterminated interpolation in string literal")]
    #[diagnostic(
        code(fig::lex::unterminated_interpolation),
        help("every `{{` inside `$\"...\"` needs a matching `}}`")
    )]
    UnterminatedInterpolation {
        #[label("interpolation opened here")]
        span: Span,
    },

    #[error("invalid number literal `{text}`")]
    #[diagnostic(code(fig::lex::invalid_number))]
    InvalidNumber {
        text: String,
        #[label("out of range")]
        span: Span,
    },

    #[error("{kind}")]
    #[diagnostic(code(fig::indent::error))]
    Indent {
        kind: IndentErrorKind,
        #[label("indentation here")]
        span: Span,
    },

    #[error("unmatched closing `{found}`")]
    #[diagnostic(code(fig::bracket::unmatched))]
    UnmatchedClose {
        found: PunctuationId,
        #[label("no opening delimiter")]
        span: Span,
    },

    #[error("mismatched closing `{found}`, expected `{expected}`")]
    #[diagnostic(code(fig::bracket::mismatched))]
    MismatchedClose {
        found: PunctuationId,
        expected: PunctuationId,
        #[label("closes the wrong delimiter")]
        span: Span,
        #[label("opened here")]
        open: Span,
    },

    #[error("unclosed `{open}`")]
    #[diagnostic(code(fig::bracket::unclosed))]
    Unclosed {
        open: PunctuationId,
        #[label("never closed")]
        span: Span,
    },
}

impl LexError {
    /// The taxonomy family this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LexError::UnexpectedChar { .. }
            | LexError::UnterminatedString { .. }
            | LexError::UnterminatedInterpolation { .. }
            | LexError::InvalidNumber { .. } => ErrorCategory::Lex,
            LexError::Indent { .. } => ErrorCategory::Indent,
            LexError::UnmatchedClose { .. } | LexError::MismatchedClose { .. } | LexError::Unclosed { .. } => {
                ErrorCategory::Bracket
            }
        }
    }

    /// Primary span of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedInterpolation { span }
            | LexError::InvalidNumber { span, .. }
            | LexError::Indent { span, .. }
            | LexError::UnmatchedClose { span, .. }
            | LexError::MismatchedClose { span, .. }
            | LexError::Unclosed { span, .. } => *span,
        }
    }
}

/// A bracket site was resolved with a context the rule table should never produce.
///
/// ## Notes
/// - These are internal-consistency faults, not user errors. They are never defaulted to a role.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DisambiguationError {
    #[error("bracket context claims both a preceding path end and a completed type")]
    #[diagnostic(code(fig::disambiguation::contradictory))]
    Contradictory,

    #[error("generic arguments at a path tail require a preceding path segment")]
    #[diagnostic(code(fig::disambiguation::path_tail))]
    PathTailWithoutSegment,

    #[error("`[` in expression position has no operand to index")]
    #[diagnostic(code(fig::disambiguation::no_operand))]
    ExpressionWithoutOperand,

    #[error("a `[` after a completed type is only valid in type position, not {position}")]
    #[diagnostic(code(fig::disambiguation::complete_type))]
    CompleteTypeOutsideType { position: PositionKind },

    #[error("site `{site}` is not registered in grammar {version}")]
    #[diagnostic(code(fig::disambiguation::unregistered_site))]
    UnregisteredSite { site: SiteId, version: GrammarVersion },

    #[error("generic arguments at token {index} are followed by `::`; only the final path segment may take them")]
    #[diagnostic(code(fig::disambiguation::interior_generics))]
    InteriorGenerics { index: usize },

    #[error("token {index} is not an opening `[`")]
    #[diagnostic(code(fig::disambiguation::not_a_bracket))]
    NotAnOpeningBracket { index: usize },

    #[error("no matching `]` for the `[` at token {index}")]
    #[diagnostic(code(fig::disambiguation::unbalanced))]
    Unbalanced { index: usize },
}

/// Invalid [`crate::lexer::LexerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("tab width must be at least 1")]
    #[diagnostic(code(fig::config::tab_width))]
    ZeroTabWidth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::LineCol;

    fn span() -> Span {
        Span::new(0, 1, LineCol::START, LineCol::new(1, 2))
    }

    #[test]
    fn categories_follow_taxonomy() {
        let unexpected = LexError::UnexpectedChar { found: '@', span: span() };
        let indent = LexError::Indent {
            kind: IndentErrorKind::Ambiguous,
            span: span(),
        };
        let bracket = LexError::UnmatchedClose {
            found: PunctuationId::RParen,
            span: span(),
        };
        assert_eq!(unexpected.category(), ErrorCategory::Lex);
        assert_eq!(indent.category(), ErrorCategory::Indent);
        assert_eq!(bracket.category(), ErrorCategory::Bracket);
    }

    #[test]
    fn messages_name_the_delimiters() {
        let err = LexError::MismatchedClose {
            found: PunctuationId::RBracket,
            expected: PunctuationId::RParen,
            span: span(),
            open: span(),
        };
        assert_eq!(err.to_string(), "mismatched closing `]`, expected `)`");

        let err = LexError::Indent {
            kind: IndentErrorKind::Inconsistent { column: 3, enclosing: 2 },
            span: span(),
        };
        assert!(err.to_string().contains("column 3"));
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = LexError::Unclosed {
            open: PunctuationId::LBracket,
            span: span(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("fig::bracket::unclosed"));
    }
}
