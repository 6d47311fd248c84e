//! Bracket-site and statement-form registries, and the per-version [`SiteTable`].
//!
//! ## Notes
//! - A registration is live from `since` up to (not including) `until`.
//! - Generic arguments only ever close a path: `Vec[T]` and `std::Vec[T]`, never `std[T]::Vec`.
//!   [`SiteTable::resolve_at`] rejects a generic-argument group followed by `::`.
//! - A site's [`SiteLead`] records what its production knows about the token before the `[`, so
//!   `[2][3]u8` at the prefix site stays a prefix type whatever precedes the inner `[`.

use std::fmt;

use fig_core::GrammarVersion;
use fig_core::lang::keywords::KeywordId;

use crate::brackets::{self, BracketContext, PositionKind, ResolvedBracket};
use crate::diagnostics::DisambiguationError;
use crate::lexer::Token;

/// A named bracket-bearing production of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SiteId {
    /// `[4]u8`, `[]u8`
    TypePrefix,
    /// `u8[4]`
    TypeSuffix,
    /// `std::Vec[u8]` in a type annotation or fallible error path
    PathGenerics,
    /// `List[T]::push` in a declared name
    SegmentGenerics,
    /// `::Vec[T]::new`
    SimplePathGenerics,
    /// `make[u8](4)`
    PostfixGenerics,
    /// `arr[3]`
    IndexSuffix,
    SizeofOperand,
    AlignofOperand,
    OffsetofOperand,
    /// `enum [u8] Color`
    EnumReprType,
    /// `func [T] id(x: T) -> T`
    GenericParameters,
}

impl SiteId {
    pub const ALL: &'static [SiteId] = &[
        SiteId::TypePrefix,
        SiteId::TypeSuffix,
        SiteId::PathGenerics,
        SiteId::SegmentGenerics,
        SiteId::SimplePathGenerics,
        SiteId::PostfixGenerics,
        SiteId::IndexSuffix,
        SiteId::SizeofOperand,
        SiteId::AlignofOperand,
        SiteId::OffsetofOperand,
        SiteId::EnumReprType,
        SiteId::GenericParameters,
    ];

    /// Kebab-case name, as accepted by `fig brackets --site`.
    pub fn as_str(self) -> &'static str {
        match self {
            SiteId::TypePrefix => "type-prefix",
            SiteId::TypeSuffix => "type-suffix",
            SiteId::PathGenerics => "path-generics",
            SiteId::SegmentGenerics => "segment-generics",
            SiteId::SimplePathGenerics => "simple-path-generics",
            SiteId::PostfixGenerics => "postfix-generics",
            SiteId::IndexSuffix => "index-suffix",
            SiteId::SizeofOperand => "sizeof-operand",
            SiteId::AlignofOperand => "alignof-operand",
            SiteId::OffsetofOperand => "offsetof-operand",
            SiteId::EnumReprType => "enum-repr-type",
            SiteId::GenericParameters => "generic-parameters",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<SiteId> {
        SiteId::ALL.iter().copied().find(|site| site.as_str() == s)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a production knows about the token right before its `[`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteLead {
    /// Nothing fixed; derived from the preceding token.
    FromToken,
    /// The `[` starts a type (`[4]u8`, `[]u8`): nothing before it is a path end or a completed type.
    Prefix,
    /// A completed name always precedes the `[` (the bracket is a type list).
    PathEnd,
    /// A completed non-path type always precedes the `[` (`u8[4]`).
    CompleteType,
}

impl SiteLead {
    /// Override the flags of `context` with what the production knows.
    fn apply(self, mut context: BracketContext) -> BracketContext {
        match self {
            SiteLead::FromToken => {}
            SiteLead::Prefix => {
                context.preceding_is_path_end = false;
                context.follows_complete_type = false;
            }
            SiteLead::PathEnd => {
                context.preceding_is_path_end = true;
                context.follows_complete_type = false;
            }
            SiteLead::CompleteType => {
                context.preceding_is_path_end = false;
                context.follows_complete_type = true;
            }
        }
        context
    }
}

/// How one bracket site behaves, and in which grammar versions it exists.
#[derive(Debug, Clone, Copy)]
pub struct SiteRegistration {
    pub site: SiteId,
    pub position: PositionKind,
    /// Expression position that takes a type inline.
    pub inline_type: bool,
    pub lead: SiteLead,
    pub since: GrammarVersion,
    /// First version the site no longer exists in.
    pub until: Option<GrammarVersion>,
    /// Rule-table production the site belongs to.
    pub production: &'static str,
    pub example: &'static str,
}

impl SiteRegistration {
    pub fn live_in(&self, version: GrammarVersion) -> bool {
        self.since.available_in(version) && self.until.is_none_or(|until| version < until)
    }
}

/// Registry of every bracket site across all versions.
pub const SITES: &[SiteRegistration] = &[
    SiteRegistration {
        lead: SiteLead::Prefix,
        ..site(SiteId::TypePrefix, PositionKind::Type, "type_array_or_slice", "[4]u8", GrammarVersion::V1)
    },
    SiteRegistration {
        until: Some(GrammarVersion::V2),
        lead: SiteLead::CompleteType,
        ..site(SiteId::TypeSuffix, PositionKind::Type, "sized_array_type", "u8[4]", GrammarVersion::V1)
    },
    site(SiteId::PathGenerics, PositionKind::PathTail, "path", "std::Vec[u8]", GrammarVersion::V1),
    site(
        SiteId::SegmentGenerics,
        PositionKind::PathTail,
        "segment_with_generics",
        "func math::max[T](a: T, b: T) -> T",
        GrammarVersion::V1,
    ),
    site(
        SiteId::SimplePathGenerics,
        PositionKind::PathTail,
        "simple_path",
        "x = ::Buffer[u8]",
        GrammarVersion::V2,
    ),
    site(
        SiteId::PostfixGenerics,
        PositionKind::PathTail,
        "postfix_expression",
        "make[u8](4)",
        GrammarVersion::V2,
    ),
    site(SiteId::IndexSuffix, PositionKind::Expression, "index_suffix", "arr[3]", GrammarVersion::V1),
    SiteRegistration {
        inline_type: true,
        ..site(
            SiteId::SizeofOperand,
            PositionKind::Expression,
            "sizeof_expression",
            "sizeof([4]u8)",
            GrammarVersion::V1,
        )
    },
    SiteRegistration {
        inline_type: true,
        ..site(
            SiteId::AlignofOperand,
            PositionKind::Expression,
            "alignof_expression",
            "alignof([]u8)",
            GrammarVersion::V1,
        )
    },
    SiteRegistration {
        inline_type: true,
        ..site(
            SiteId::OffsetofOperand,
            PositionKind::Expression,
            "offsetof_expression",
            "offsetof(Pair[u8])",
            GrammarVersion::V2,
        )
    },
    SiteRegistration {
        lead: SiteLead::PathEnd,
        ..site(
            SiteId::EnumReprType,
            PositionKind::Type,
            "enum_definition",
            "enum [u8] Color",
            GrammarVersion::V2,
        )
    },
    site(
        SiteId::GenericParameters,
        PositionKind::Declaration,
        "generic_parameters",
        "func [T] id(x: T) -> T",
        GrammarVersion::V1,
    ),
];

const fn site(
    site: SiteId,
    position: PositionKind,
    production: &'static str,
    example: &'static str,
    since: GrammarVersion,
) -> SiteRegistration {
    SiteRegistration {
        site,
        position,
        inline_type: false,
        lead: SiteLead::FromToken,
        since,
        until: None,
        production,
        example,
    }
}

/// Statement-level forms of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatementForm {
    Pass,
    Expression,
    Assignment,
    Let,
    Mut,
    Const,
    FunctionDefinition,
    ExternFunction,
    TypeAlias,
    Enum,
    Struct,
    PackedStruct,
    Block,
    If,
    For,
    While,
    Return,
    Union,
    Interface,
    Namespace,
    Using,
    /// `public` / `export` / `private` before a definition
    Visibility,
    /// `#inline` on the line before a definition
    Annotation,
    /// `!` on a call or return type
    FallibleMarker,
    RequiresClause,
    WhereClause,
    ExtendsClause,
}

/// When a statement form appeared, and the keyword that introduces it (if any).
#[derive(Debug, Clone, Copy)]
pub struct FormRegistration {
    pub form: StatementForm,
    pub keyword: Option<KeywordId>,
    pub since: GrammarVersion,
}

const fn form(form: StatementForm, keyword: Option<KeywordId>, since: GrammarVersion) -> FormRegistration {
    FormRegistration { form, keyword, since }
}

/// Registry of every statement form across all versions.
pub const FORMS: &[FormRegistration] = &[
    form(StatementForm::Pass, Some(KeywordId::Pass), GrammarVersion::V1),
    form(StatementForm::Expression, None, GrammarVersion::V1),
    form(StatementForm::Assignment, None, GrammarVersion::V1),
    form(StatementForm::Let, Some(KeywordId::Let), GrammarVersion::V1),
    form(StatementForm::Mut, Some(KeywordId::Mut), GrammarVersion::V1),
    form(StatementForm::Const, Some(KeywordId::Const), GrammarVersion::V1),
    form(StatementForm::FunctionDefinition, Some(KeywordId::Func), GrammarVersion::V1),
    form(StatementForm::ExternFunction, Some(KeywordId::Extern), GrammarVersion::V1),
    form(StatementForm::TypeAlias, Some(KeywordId::Type), GrammarVersion::V1),
    form(StatementForm::Enum, Some(KeywordId::Enum), GrammarVersion::V1),
    form(StatementForm::Struct, Some(KeywordId::Struct), GrammarVersion::V1),
    form(StatementForm::PackedStruct, Some(KeywordId::Packed), GrammarVersion::V1),
    form(StatementForm::Block, Some(KeywordId::Block), GrammarVersion::V1),
    form(StatementForm::If, Some(KeywordId::If), GrammarVersion::V1),
    form(StatementForm::For, Some(KeywordId::For), GrammarVersion::V1),
    form(StatementForm::While, Some(KeywordId::While), GrammarVersion::V1),
    form(StatementForm::Return, Some(KeywordId::Return), GrammarVersion::V1),
    form(StatementForm::Union, Some(KeywordId::Union), GrammarVersion::V2),
    form(StatementForm::Interface, Some(KeywordId::Interface), GrammarVersion::V2),
    form(StatementForm::Namespace, Some(KeywordId::Namespace), GrammarVersion::V2),
    form(StatementForm::Using, Some(KeywordId::Using), GrammarVersion::V2),
    form(StatementForm::Visibility, Some(KeywordId::Public), GrammarVersion::V2),
    form(StatementForm::Annotation, None, GrammarVersion::V2),
    form(StatementForm::FallibleMarker, None, GrammarVersion::V2),
    form(StatementForm::RequiresClause, Some(KeywordId::Requires), GrammarVersion::V2),
    form(StatementForm::WhereClause, Some(KeywordId::Where), GrammarVersion::V2),
    form(StatementForm::ExtendsClause, Some(KeywordId::Extends), GrammarVersion::V2),
];

/// The bracket sites and statement forms of one grammar version.
#[derive(Debug, Clone)]
pub struct SiteTable {
    version: GrammarVersion,
    sites: Vec<&'static SiteRegistration>,
    forms: Vec<StatementForm>,
}

impl SiteTable {
    pub fn for_version(version: GrammarVersion) -> Self {
        let sites = SITES.iter().filter(|s| s.live_in(version)).collect();
        let forms = FORMS
            .iter()
            .filter(|f| f.since.available_in(version))
            .map(|f| f.form)
            .collect();
        Self { version, sites, forms }
    }

    pub fn version(&self) -> GrammarVersion {
        self.version
    }

    pub fn registration(&self, site: SiteId) -> Option<&'static SiteRegistration> {
        self.sites.iter().copied().find(|s| s.site == site)
    }

    pub fn sites(&self) -> impl Iterator<Item = &'static SiteRegistration> + '_ {
        self.sites.iter().copied()
    }

    pub fn has_form(&self, form: StatementForm) -> bool {
        self.forms.contains(&form)
    }

    pub fn forms(&self) -> &[StatementForm] {
        &self.forms
    }

    /// Build the bracket context for `site` from the two token-level facts the production has.
    ///
    /// ## Errors
    /// - [`DisambiguationError::UnregisteredSite`] if the site does not exist in this version.
    pub fn context(
        &self,
        site: SiteId,
        preceding_is_path_end: bool,
        follows_complete_type: bool,
    ) -> Result<BracketContext, DisambiguationError> {
        let reg = self.lookup(site)?;
        let ctx = BracketContext {
            position: reg.position,
            preceding_is_path_end,
            follows_complete_type,
            inline_type: reg.inline_type,
        };
        Ok(reg.lead.apply(ctx))
    }

    /// Like [`SiteTable::context`], deriving the facts from the tokens before the `[` at `tokens[open]`.
    pub fn context_at(
        &self,
        site: SiteId,
        tokens: &[Token],
        open: usize,
    ) -> Result<BracketContext, DisambiguationError> {
        let reg = self.lookup(site)?;
        let ctx = BracketContext {
            position: reg.position,
            preceding_is_path_end: false,
            follows_complete_type: false,
            inline_type: reg.inline_type,
        }
        .with_preceding_in(tokens, open);
        Ok(reg.lead.apply(ctx))
    }

    /// Resolve the `[` at `tokens[open]` as an occurrence of `site`.
    pub fn resolve_at(
        &self,
        tokens: &[Token],
        open: usize,
        site: SiteId,
    ) -> Result<ResolvedBracket, DisambiguationError> {
        let ctx = self.context_at(site, tokens, open)?;
        brackets::resolve_group(tokens, open, ctx)
    }

    fn lookup(&self, site: SiteId) -> Result<&'static SiteRegistration, DisambiguationError> {
        self.registration(site).ok_or(DisambiguationError::UnregisteredSite {
            site,
            version: self.version,
        })
    }
}

/// One difference between two grammar versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteChange {
    SiteAdded(SiteId),
    SiteRemoved(SiteId),
    FormAdded(StatementForm),
    FormRemoved(StatementForm),
}

impl fmt::Display for SiteChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteChange::SiteAdded(site) => write!(f, "+ site {site}"),
            SiteChange::SiteRemoved(site) => write!(f, "- site {site}"),
            SiteChange::FormAdded(form) => write!(f, "+ form {form:?}"),
            SiteChange::FormRemoved(form) => write!(f, "- form {form:?}"),
        }
    }
}

/// List the site and form registrations that differ between two versions.
pub fn diff(from: GrammarVersion, to: GrammarVersion) -> Vec<SiteChange> {
    let old = SiteTable::for_version(from);
    let new = SiteTable::for_version(to);
    let mut changes = Vec::new();

    for &site in SiteId::ALL {
        match (old.registration(site).is_some(), new.registration(site).is_some()) {
            (false, true) => changes.push(SiteChange::SiteAdded(site)),
            (true, false) => changes.push(SiteChange::SiteRemoved(site)),
            _ => {}
        }
    }
    for reg in FORMS {
        match (old.has_form(reg.form), new.has_form(reg.form)) {
            (false, true) => changes.push(SiteChange::FormAdded(reg.form)),
            (true, false) => changes.push(SiteChange::FormRemoved(reg.form)),
            _ => {}
        }
    }
    changes
}
