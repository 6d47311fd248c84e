//! Canonical language vocabulary for the Fig language family.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the layout
//! scanner and downstream tooling (highlighters, docs, rule-table generators) read: reserved words,
//! operators with their precedence annotations, punctuation, and the grammar version each item first
//! appeared in.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no lexer-specific types.

pub mod lang;

pub use lang::registry::GrammarVersion;
