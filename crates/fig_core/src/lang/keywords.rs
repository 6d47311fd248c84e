//! Define the reserved keyword vocabulary for the Fig language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`])
//! plus a const metadata table ([`KEYWORDS`]) that records canonical spellings, aliases, categories,
//! the grammar version that introduced each word, and usage hints.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined.
//! - Primitive type names (`u8`, `bool`, ...) and the builtin namespaces (`std`, `core`, `alloc`) are
//!   reserved, so `u8` can never be lexed as an identifier.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use fig_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("fn"), Some(KeywordId::Func)); // alias
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

use super::registry::{Example, GrammarVersion, Stability};

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - Accepted aliases are accessible via [`aliases`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Elif,
    Else,
    For,
    In,
    While,
    Return,
    Pass,
    Block,

    // Definitions / declarations
    Func,
    Type,
    Enum,
    Struct,
    Union,
    Interface,
    Namespace,
    Using,

    // Modifiers
    Extern,
    Packed,
    Public,
    Export,
    Private,

    // Effect / constraint clauses
    Where,
    Requires,
    Extends,

    // Bindings / receivers
    Let,
    Mut,
    Const,
    SelfKw,

    // Layout queries and conversions
    As,
    Sizeof,
    Alignof,
    Offsetof,

    // Literals
    True,
    False,

    // Builtin namespaces
    Std,
    Core,
    Alloc,

    // Primitive types
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
    Bool,
    Ok,
    Null,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Modifier,
    Clause,
    Binding,
    Operator,
    Query,
    Literal,
    Namespace,
    PrimitiveType,
}

/// Usage context hints (not enforced here; the external rule table owns context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    Statement,
    Expression,
    Modifier,
    Clause,
    Operator,
    Path,
    Type,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and emission.
/// - `aliases` are additional spellings accepted by the lexer.
/// - `since` is the first grammar version whose rule table uses the word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub usage: &'static [KeywordUsage],
    pub since: GrammarVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(
        KeywordId::If,
        "if",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Elif,
        "elif",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Else,
        "else",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::For,
        "for",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::In,
        "in",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::While,
        "while",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Return,
        "return",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Pass,
        "pass",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Block,
        "block",
        &[],
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    // Definitions / declarations
    info_with_aliases(
        KeywordId::Func,
        "func",
        &["fn"],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Type,
        "type",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Enum,
        "enum",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Struct,
        "struct",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Union,
        "union",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Interface,
        "interface",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Namespace,
        "namespace",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Using,
        "using",
        &[],
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        GrammarVersion::V2,
    ),
    // Modifiers
    info(
        KeywordId::Extern,
        "extern",
        &[],
        KeywordCategory::Modifier,
        &[KeywordUsage::Modifier],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Packed,
        "packed",
        &[],
        KeywordCategory::Modifier,
        &[KeywordUsage::Modifier],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Public,
        "public",
        &[],
        KeywordCategory::Modifier,
        &[KeywordUsage::Modifier],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Export,
        "export",
        &[],
        KeywordCategory::Modifier,
        &[KeywordUsage::Modifier],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Private,
        "private",
        &[],
        KeywordCategory::Modifier,
        &[KeywordUsage::Modifier],
        GrammarVersion::V2,
    ),
    // Effect / constraint clauses
    info(
        KeywordId::Where,
        "where",
        &[],
        KeywordCategory::Clause,
        &[KeywordUsage::Clause],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Requires,
        "requires",
        &[],
        KeywordCategory::Clause,
        &[KeywordUsage::Clause],
        GrammarVersion::V2,
    ),
    info(
        KeywordId::Extends,
        "extends",
        &[],
        KeywordCategory::Clause,
        &[KeywordUsage::Clause],
        GrammarVersion::V2,
    ),
    // Bindings / receivers
    info(
        KeywordId::Let,
        "let",
        &[],
        KeywordCategory::Binding,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Mut,
        "mut",
        &[],
        KeywordCategory::Binding,
        &[KeywordUsage::Statement, KeywordUsage::Modifier],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Const,
        "const",
        &[],
        KeywordCategory::Binding,
        &[KeywordUsage::Statement],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::SelfKw,
        "self",
        &[],
        KeywordCategory::Binding,
        &[KeywordUsage::Expression],
        GrammarVersion::V1,
    ),
    // Layout queries and conversions
    info(
        KeywordId::As,
        "as",
        &[],
        KeywordCategory::Operator,
        &[KeywordUsage::Operator],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Sizeof,
        "sizeof",
        &[],
        KeywordCategory::Query,
        &[KeywordUsage::Expression],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Alignof,
        "alignof",
        &[],
        KeywordCategory::Query,
        &[KeywordUsage::Expression],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Offsetof,
        "offsetof",
        &[],
        KeywordCategory::Query,
        &[KeywordUsage::Expression],
        GrammarVersion::V2,
    ),
    // Literals
    info(
        KeywordId::True,
        "true",
        &[],
        KeywordCategory::Literal,
        &[KeywordUsage::Expression],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::False,
        "false",
        &[],
        KeywordCategory::Literal,
        &[KeywordUsage::Expression],
        GrammarVersion::V1,
    ),
    // Builtin namespaces
    info(
        KeywordId::Std,
        "std",
        &[],
        KeywordCategory::Namespace,
        &[KeywordUsage::Path],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Core,
        "core",
        &[],
        KeywordCategory::Namespace,
        &[KeywordUsage::Path],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Alloc,
        "alloc",
        &[],
        KeywordCategory::Namespace,
        &[KeywordUsage::Path],
        GrammarVersion::V1,
    ),
    // Primitive types
    info(
        KeywordId::U8,
        "u8",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::U16,
        "u16",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::U32,
        "u32",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::U64,
        "u64",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Usize,
        "usize",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::I8,
        "i8",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::I16,
        "i16",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::I32,
        "i32",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::I64,
        "i64",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Isize,
        "isize",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::F32,
        "f32",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::F64,
        "f64",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Bool,
        "bool",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Ok,
        "ok",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
    info(
        KeywordId::Null,
        "null",
        &[],
        KeywordCategory::PrimitiveType,
        &[KeywordUsage::Type],
        GrammarVersion::V1,
    ),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Aliases.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Usage hints.
pub fn usage(id: KeywordId) -> &'static [KeywordUsage] {
    info_for(id).usage
}

/// Grammar version that introduced the keyword.
pub fn since(id: KeywordId) -> GrammarVersion {
    info_for(id).since
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

impl std::fmt::Display for KeywordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

/// Keywords available in a given grammar version.
pub fn available_in(version: GrammarVersion) -> impl Iterator<Item = &'static KeywordInfo> {
    KEYWORDS.iter().filter(move |k| k.since.available_in(version))
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    usage: &'static [KeywordUsage],
    since: GrammarVersion,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        usage,
        since,
        stability: Stability::Stable,
        examples: &[],
    }
}

const fn info_with_aliases(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    usage: &'static [KeywordUsage],
    since: GrammarVersion,
) -> KeywordInfo {
    info(id, canonical, aliases, category, usage, since)
}
