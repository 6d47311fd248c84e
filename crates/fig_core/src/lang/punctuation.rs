//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the Fig rule table:
//! delimiters, separators, access/path markers, and a few structural markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//! - `#` introduces annotations (`#inline`), which appeared in the second grammar design.
//!
//! ## Examples
//! ```rust
//! use fig_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::Arrow), "->");
//! assert_eq!(punctuation::closer_for(PunctuationId::LBracket), Some(PunctuationId::RBracket));
//! ```

use super::registry::{Example, GrammarVersion, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `:`.
    Separator,
    /// Access/path markers like `.` and `::`.
    Access,
    /// Arrow markers like `->`.
    Arrow,
    /// Misc markers like `?` and `#`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators / markers
    Comma,
    Colon,
    Semicolon,
    Question,
    Hash,

    // Access / path
    Dot,
    ColonColon,

    // Structural arrows
    Arrow,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub since: GrammarVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators / markers
    info(
        PunctuationId::Comma,
        ",",
        PunctuationCategory::Separator,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::Colon,
        ":",
        PunctuationCategory::Separator,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::Semicolon,
        ";",
        PunctuationCategory::Separator,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::Question,
        "?",
        PunctuationCategory::Marker,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::Hash,
        "#",
        PunctuationCategory::Marker,
        GrammarVersion::V2,
    ),
    // Access / path
    info(
        PunctuationId::Dot,
        ".",
        PunctuationCategory::Access,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::ColonColon,
        "::",
        PunctuationCategory::Access,
        GrammarVersion::V1,
    ),
    // Structural arrows
    info(
        PunctuationId::Arrow,
        "->",
        PunctuationCategory::Arrow,
        GrammarVersion::V1,
    ),
    // Delimiters
    info(
        PunctuationId::LParen,
        "(",
        PunctuationCategory::Delimiter,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::RParen,
        ")",
        PunctuationCategory::Delimiter,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::LBracket,
        "[",
        PunctuationCategory::Delimiter,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::RBracket,
        "]",
        PunctuationCategory::Delimiter,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::LBrace,
        "{",
        PunctuationCategory::Delimiter,
        GrammarVersion::V1,
    ),
    info(
        PunctuationId::RBrace,
        "}",
        PunctuationCategory::Delimiter,
        GrammarVersion::V1,
    ),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

impl std::fmt::Display for PunctuationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Return the closing delimiter matching an opening one.
pub fn closer_for(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        _ => None,
    }
}

/// Return the opening delimiter matching a closing one.
pub fn opener_for(close: PunctuationId) -> Option<PunctuationId> {
    match close {
        PunctuationId::RParen => Some(PunctuationId::LParen),
        PunctuationId::RBracket => Some(PunctuationId::LBracket),
        PunctuationId::RBrace => Some(PunctuationId::LBrace),
        _ => None,
    }
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    since: GrammarVersion,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
        examples: &[],
    }
}
