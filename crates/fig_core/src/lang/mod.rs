//! Fig language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and
//! punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and tooling. Instead,
//! callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer enforces lexical syntax; the external rule table owns grammar. Registries provide
//!   spellings, grammar-version provenance and precedence metadata for shared use.
//!
//! ## Examples
//! ```rust
//! use fig_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
