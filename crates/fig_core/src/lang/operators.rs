//! Operator vocabulary.
//!
//! This module defines the canonical operator set of the Fig rule table along with the precedence and
//! associativity annotations its productions carry. The numeric levels are the rule table's own
//! (`1` = `||`, lowest; `10` = multiplicative, highest infix level). Prefix operators bind at
//! [`PREFIX_PRECEDENCE`] and postfix suffixes (calls, field access, index, generic arguments) at
//! [`POSTFIX_PRECEDENCE`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `as` is spelled with a reserved word; the lexer emits it as a keyword token and the entry here has
//!   [`OperatorInfo::is_keyword_spelling`] set.
//! - `*`, `-`, `+`, `&`, `~` and `!` are also prefix operators. `!` doubles as the fallible marker on
//!   calls and types; that reading is structural and belongs to the rule table.
//!
//! ## Examples
//! ```rust
//! use fig_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<<"), Some(OperatorId::Shl));
//! assert_eq!(operators::info_for(OperatorId::Star).precedence, Some(10));
//! assert!(operators::binds_tighter(OperatorId::Plus, OperatorId::EqEq));
//! ```

use super::registry::{Example, GrammarVersion, Stability};

/// Binding level of every prefix operator.
pub const PREFIX_PRECEDENCE: u8 = 11;

/// Binding level of postfix suffixes.
pub const POSTFIX_PRECEDENCE: u8 = 12;

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Multiplicative
    Star,
    Slash,
    Percent,

    // Additive
    Plus,
    Minus,

    // Shifts
    Shl,
    Shr,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Equality
    EqEq,
    NotEq,

    // Bitwise
    Amp,
    Caret,
    Pipe,

    // Logical
    AmpAmp,
    PipePipe,

    // Conversion
    As,

    // Prefix-only
    Tilde,
    Bang,

    // Assignment
    Eq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is the infix binding level (higher binds tighter); `None` for operators that are not
///   binary expression operators.
/// - `prefix` marks spellings that may also start a unary expression.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub precedence: Option<u8>,
    pub associativity: Associativity,
    pub prefix: bool,
    pub is_keyword_spelling: bool,
    pub since: GrammarVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Multiplicative
    op(
        OperatorId::Star,
        &["*"],
        Some(10),
        Associativity::Left,
        true,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Slash,
        &["/"],
        Some(10),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Percent,
        &["%"],
        Some(10),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    // Additive
    op(
        OperatorId::Plus,
        &["+"],
        Some(9),
        Associativity::Left,
        true,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Minus,
        &["-"],
        Some(9),
        Associativity::Left,
        true,
        false,
        GrammarVersion::V1,
    ),
    // Shifts
    op(
        OperatorId::Shl,
        &["<<"],
        Some(8),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Shr,
        &[">>"],
        Some(8),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    // Comparison
    op(
        OperatorId::Lt,
        &["<"],
        Some(7),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Gt,
        &[">"],
        Some(7),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::LtEq,
        &["<="],
        Some(7),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::GtEq,
        &[">="],
        Some(7),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    // Equality
    op(
        OperatorId::EqEq,
        &["=="],
        Some(6),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::NotEq,
        &["!="],
        Some(6),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    // Bitwise
    op(
        OperatorId::Amp,
        &["&"],
        Some(5),
        Associativity::Left,
        true,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Caret,
        &["^"],
        Some(4),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Pipe,
        &["|"],
        Some(3),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    // Logical
    op(
        OperatorId::AmpAmp,
        &["&&"],
        Some(2),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::PipePipe,
        &["||"],
        Some(1),
        Associativity::Left,
        false,
        false,
        GrammarVersion::V1,
    ),
    // Conversion
    op(
        OperatorId::As,
        &["as"],
        Some(2),
        Associativity::Left,
        false,
        true,
        GrammarVersion::V1,
    ),
    // Prefix-only
    op(
        OperatorId::Tilde,
        &["~"],
        None,
        Associativity::None,
        true,
        false,
        GrammarVersion::V1,
    ),
    op(
        OperatorId::Bang,
        &["!"],
        None,
        Associativity::None,
        true,
        false,
        GrammarVersion::V1,
    ),
    // Assignment
    op(
        OperatorId::Eq,
        &["="],
        None,
        Associativity::Right,
        false,
        false,
        GrammarVersion::V1,
    ),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

impl std::fmt::Display for OperatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&spelling)
        })
        .map(|o| o.id)
}

/// Return `true` if `a` binds strictly tighter than `b` as infix operators.
///
/// Operators without an infix level never bind tighter than anything.
pub fn binds_tighter(a: OperatorId, b: OperatorId) -> bool {
    match (info_for(a).precedence, info_for(b).precedence) {
        (Some(pa), Some(pb)) => pa > pb,
        _ => false,
    }
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: Option<u8>,
    associativity: Associativity,
    prefix: bool,
    is_keyword_spelling: bool,
    since: GrammarVersion,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        associativity,
        prefix,
        is_keyword_spelling,
        since,
        stability: Stability::Stable,
        examples: &[],
    }
}
