//! Shared syntax layer for the Fig language family: layout scanner, bracket disambiguation, grammar
//! site tables, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by rule-table generators, highlighters and
//! the `fig` debugging CLI.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not parse. It produces the token stream and the
//!   bracket decisions an external parsing engine needs.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `fig_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use fig_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("fn f():\n    pass\n").unwrap();
//! assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::BlockOpen).count(), 1);
//! ```
//!
//! ## See also
//! - `fig_core::lang` for registry-backed language vocabulary (keywords/operators/punctuation).

pub mod brackets;
pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod span;
pub mod token_helpers;

pub use diagnostics::{ConfigError, DisambiguationError, ErrorCategory, LexError};
pub use span::{LineCol, Span};
