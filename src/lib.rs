#![forbid(unsafe_code)]
//! Fig syntax toolkit
//!
//! Fig is a small systems-style language family with two grammar designs sharing one lexical shape.
//! This crate bundles the `fig` command-line tool and re-exports the syntax layer: the layout-sensitive
//! scanner, the bracket-role disambiguator and the versioned grammar site tables.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups by ID (`info_for`) panic if an entry is missing, since that is a
//!   programming error caught by the registry guardrail tests.

pub mod cli;

pub use fig_core::GrammarVersion;
pub use fig_core::lang;
pub use fig_syntax::{brackets, diagnostics, grammar, lexer};
