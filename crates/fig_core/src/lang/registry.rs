//! Shareable metadata for `fig_core::lang` registries.
//!
//! The `fig_core::lang` module is a set of **registry-first** vocabularies: keywords, operators and
//! punctuation. This submodule provides the small, dependency-free metadata types reused across all of
//! them, most importantly [`GrammarVersion`], which records which design of the language introduced a
//! vocabulary item.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const`
//!   tables.
//! - Metadata is meant for tooling/docs/diagnostics; the scanner recognizes the full vocabulary of every
//!   grammar version. Version differences are expressed by the grammar site tables, not by the lexer.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::punctuation`]

use std::fmt;

/// Identify one design iteration of the Fig grammar.
///
/// ## Notes
/// - `V1` is the original indentation-based design.
/// - `V2` adds visibility modifiers, annotations, fallible markers and effect clauses
///   (`requires`/`where`/`extends`), together with unions, interfaces and namespaces.
/// - Versions are totally ordered; an item introduced in `V1` is available in every later version.
///
/// ## Examples
/// ```rust
/// use fig_core::lang::registry::GrammarVersion;
///
/// assert!(GrammarVersion::V1 < GrammarVersion::V2);
/// assert_eq!(GrammarVersion::from_str("v2"), Some(GrammarVersion::V2));
/// assert_eq!(GrammarVersion::LATEST, GrammarVersion::V2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrammarVersion {
    V1,
    V2,
}

impl GrammarVersion {
    /// The newest grammar version known to this crate.
    pub const LATEST: GrammarVersion = GrammarVersion::V2;

    /// All versions, oldest first.
    pub const ALL: &'static [GrammarVersion] = &[GrammarVersion::V1, GrammarVersion::V2];

    /// Short lowercase name (`"v1"`, `"v2"`).
    pub fn as_str(self) -> &'static str {
        match self {
            GrammarVersion::V1 => "v1",
            GrammarVersion::V2 => "v2",
        }
    }

    /// Parse a short version name. Accepts `v1`/`V1`/`1` style spellings.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<GrammarVersion> {
        match s.trim_start_matches(['v', 'V']) {
            "1" => Some(GrammarVersion::V1),
            "2" => Some(GrammarVersion::V2),
            _ => None,
        }
    }

    /// Return `true` if an item introduced in `self` is available in `version`.
    pub fn available_in(self, version: GrammarVersion) -> bool {
        self <= version
    }
}

impl fmt::Display for GrammarVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating by
///   itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use fig_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "if ready\n    pass",
///     note: Some("Minimal conditional."),
/// };
/// assert!(ex.code.contains("if"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
