//! Bracket-role disambiguation.
//!
//! In Fig a `[` can open six different constructs:
//!
//! | Source        | Position                       | Role                 |
//! |---------------|--------------------------------|----------------------|
//! | `Vec[u8]`     | type, after a path segment     | generic arguments    |
//! | `[]u8`        | type, before the element type  | slice type           |
//! | `[4]u8`       | type, before the element type  | array type           |
//! | `u8[4]`       | type, after a complete type    | sized-array suffix   |
//! | `arr[3]`      | expression, after an operand   | index expression     |
//! | `func [T] f`  | declaration                    | generic parameters   |
//!
//! The rule table knows which production it is in; the scanner knows what follows the `[`. [`resolve`]
//! combines the two: a [`BracketContext`] supplied by the production plus one token of lookahead.
//!
//! ## Notes
//! - There is no backtracking between the generic-argument and index readings: the production fixes the
//!   position kind before the `[` is seen.
//! - A context the rule table should never produce is a [`DisambiguationError`], never a default role.
//!
//! ## Examples
//! ```rust
//! use fig_syntax::brackets::{BracketContext, BracketRole, PositionKind, resolve};
//!
//! let ctx = BracketContext::new(PositionKind::Expression).after_path_end();
//! assert_eq!(resolve(ctx, None), Ok(BracketRole::IndexExpression));
//! ```

use std::ops::Range;

use crate::diagnostics::DisambiguationError;
use crate::lexer::{Token, TokenKind};
use fig_core::lang::punctuation::PunctuationId;

/// The kind of grammatical position a bracket site sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKind {
    Type,
    Expression,
    /// The tail of a `::`-separated path, where only generic arguments may follow.
    PathTail,
    /// Just after a declaring keyword, where generic parameters are introduced.
    Declaration,
}

impl PositionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PositionKind::Type => "type",
            PositionKind::Expression => "expression",
            PositionKind::PathTail => "path-tail",
            PositionKind::Declaration => "declaration",
        }
    }
}

impl std::fmt::Display for PositionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the active production knows at a `[`.
///
/// Created per bracket occurrence and consumed by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketContext {
    pub position: PositionKind,
    /// The `[` directly follows a completed path segment (or an operand, in expression position).
    pub preceding_is_path_end: bool,
    /// The `[` directly follows a completed non-path type such as `u8`.
    pub follows_complete_type: bool,
    /// An expression position that expects a type inline (`sizeof(...)` operands).
    pub inline_type: bool,
}

impl BracketContext {
    pub const fn new(position: PositionKind) -> Self {
        Self {
            position,
            preceding_is_path_end: false,
            follows_complete_type: false,
            inline_type: false,
        }
    }

    pub const fn after_path_end(mut self) -> Self {
        self.preceding_is_path_end = true;
        self
    }

    pub const fn after_complete_type(mut self) -> Self {
        self.follows_complete_type = true;
        self
    }

    pub const fn with_inline_type(mut self) -> Self {
        self.inline_type = true;
        self
    }

    /// The position the rules actually apply: an inline-type expression position reads as a type.
    pub fn effective_position(&self) -> PositionKind {
        match self.position {
            PositionKind::Expression if self.inline_type => PositionKind::Type,
            other => other,
        }
    }

    /// Fill in the flags from the token just before the `[`.
    ///
    /// In type-like positions a path segment counts as a path end and a primitive type counts as a
    /// complete type; in expression position any operand end counts as a path end. A lone `]` is not a
    /// complete type here: `[2][3]u8` and `u8[4][2]` differ only in what came before the group it
    /// closes, so use [`BracketContext::with_preceding_in`] when the token slice is at hand.
    pub fn with_preceding(mut self, preceding: Option<&Token>) -> Self {
        let Some(token) = preceding else {
            return self;
        };
        match self.effective_position() {
            PositionKind::Expression => {
                self.preceding_is_path_end = token.kind.ends_operand();
            }
            PositionKind::Type | PositionKind::PathTail | PositionKind::Declaration => {
                self.preceding_is_path_end = token.kind.ends_path_segment();
                self.follows_complete_type = !self.preceding_is_path_end && token.kind.is_primitive_type();
            }
        }
        self
    }

    /// Like [`BracketContext::with_preceding`] for the `[` at `tokens[open]`, also deciding whether a
    /// preceding `]` closes a type suffix (`u8[4]`, `Vec[u8]`) or a prefix group (`[2]` in `[2][3]u8`).
    pub fn with_preceding_in(self, tokens: &[Token], open: usize) -> Self {
        let preceding = open.checked_sub(1).and_then(|i| tokens.get(i));
        let mut ctx = self.with_preceding(preceding);
        if ctx.effective_position() != PositionKind::Expression
            && preceding.is_some_and(|t| t.kind.is_punctuation(PunctuationId::RBracket))
        {
            ctx.follows_complete_type = closes_type_suffix(tokens, open - 1);
        }
        ctx
    }
}

/// Whether the `]` at `tokens[close]` ends a completed type, i.e. its group follows a type.
fn closes_type_suffix(tokens: &[Token], mut close: usize) -> bool {
    loop {
        let Some(open) = matching_open(tokens, close) else {
            return false;
        };
        match open.checked_sub(1).and_then(|i| tokens.get(i)) {
            Some(t) if t.kind.ends_path_segment() || t.kind.is_primitive_type() => return true,
            // `u8[4][2]`: keep walking left through chained suffixes.
            Some(t) if t.kind.is_punctuation(PunctuationId::RBracket) => close = open - 1,
            _ => return false,
        }
    }
}

/// What a `[` opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketRole {
    /// `Vec[u8, alloc::Global]`: comma-separated type arguments at a path tail.
    GenericArguments,
    /// `[4]u8`: length expression before the element type.
    ArrayType,
    /// `[]u8`
    SliceType,
    /// `u8[4]`: length expression after a complete type.
    SizedArraySuffix,
    /// `arr[3]`: a single index expression.
    IndexExpression,
    /// `func [T, U = X] name`: comma-separated parameter declarations.
    GenericParameters,
}

impl BracketRole {
    pub fn as_str(self) -> &'static str {
        match self {
            BracketRole::GenericArguments => "generic-arguments",
            BracketRole::ArrayType => "array-type",
            BracketRole::SliceType => "slice-type",
            BracketRole::SizedArraySuffix => "sized-array-suffix",
            BracketRole::IndexExpression => "index-expression",
            BracketRole::GenericParameters => "generic-parameters",
        }
    }

    /// Whether the contents are a comma-separated list.
    pub fn is_list(self) -> bool {
        matches!(self, BracketRole::GenericArguments | BracketRole::GenericParameters)
    }
}

impl std::fmt::Display for BracketRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the role of a `[` from its context and the token right after it.
///
/// ## Errors
/// - [`DisambiguationError::Contradictory`] if the context claims both a path end and a complete type.
/// - [`DisambiguationError::PathTailWithoutSegment`] for a path-tail site with nothing before it.
/// - [`DisambiguationError::ExpressionWithoutOperand`] for an expression site with nothing to index.
/// - [`DisambiguationError::CompleteTypeOutsideType`] if a complete type precedes a non-type site.
pub fn resolve(context: BracketContext, next: Option<&Token>) -> Result<BracketRole, DisambiguationError> {
    if context.preceding_is_path_end && context.follows_complete_type {
        return Err(DisambiguationError::Contradictory);
    }

    let position = context.effective_position();
    if context.follows_complete_type && position != PositionKind::Type {
        return Err(DisambiguationError::CompleteTypeOutsideType { position });
    }

    let role = match position {
        PositionKind::Type if context.preceding_is_path_end => BracketRole::GenericArguments,
        PositionKind::Type if context.follows_complete_type => BracketRole::SizedArraySuffix,
        PositionKind::Type => {
            if next.is_some_and(|t| t.kind.is_punctuation(PunctuationId::RBracket)) {
                BracketRole::SliceType
            } else {
                BracketRole::ArrayType
            }
        }
        PositionKind::PathTail if context.preceding_is_path_end => BracketRole::GenericArguments,
        PositionKind::PathTail => return Err(DisambiguationError::PathTailWithoutSegment),
        PositionKind::Expression if context.preceding_is_path_end => BracketRole::IndexExpression,
        PositionKind::Expression => return Err(DisambiguationError::ExpressionWithoutOperand),
        PositionKind::Declaration => BracketRole::GenericParameters,
    };
    tracing::trace!(%position, %role, "resolved bracket");
    Ok(role)
}

/// A resolved `[...]` group within a token slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBracket {
    pub role: BracketRole,
    /// Index of the `[`.
    pub open: usize,
    /// Index of the matching `]`.
    pub close: usize,
    /// Token ranges of the items inside: one per list element, one for an index or length expression,
    /// none for a slice.
    pub items: Vec<Range<usize>>,
}

impl ResolvedBracket {
    /// Index of the first token after the group (the element type of a prefix array or slice type).
    pub fn after(&self) -> usize {
        self.close + 1
    }
}

/// Resolve the `[` at `tokens[open]` and split its contents into items.
///
/// ## Errors
/// - [`DisambiguationError::NotAnOpeningBracket`] if `tokens[open]` is not `[`.
/// - [`DisambiguationError::Unbalanced`] if no matching `]` exists.
/// - [`DisambiguationError::InteriorGenerics`] if generic arguments are followed by `::`; they may
///   only close a path (`std::Vec[u8]`, never `List[T]::push`).
/// - Any error of [`resolve`].
pub fn resolve_group(
    tokens: &[Token],
    open: usize,
    context: BracketContext,
) -> Result<ResolvedBracket, DisambiguationError> {
    if !tokens
        .get(open)
        .is_some_and(|t| t.kind.is_punctuation(PunctuationId::LBracket))
    {
        return Err(DisambiguationError::NotAnOpeningBracket { index: open });
    }
    let close = matching_close(tokens, open).ok_or(DisambiguationError::Unbalanced { index: open })?;
    let role = resolve(context, tokens.get(open + 1))?;
    if role == BracketRole::GenericArguments
        && tokens
            .get(close + 1)
            .is_some_and(|t| t.kind.is_punctuation(PunctuationId::ColonColon))
    {
        return Err(DisambiguationError::InteriorGenerics { index: open });
    }

    let items = if role.is_list() {
        split_top_level(tokens, open + 1, close)
    } else if role == BracketRole::SliceType || open + 1 == close {
        Vec::new()
    } else {
        vec![open + 1..close]
    };

    Ok(ResolvedBracket {
        role,
        open,
        close,
        items,
    })
}

fn matching_open(tokens: &[Token], close: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().take(close + 1).rev() {
        match token.kind {
            TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                depth += 1;
            }
            TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => {
                depth += 1;
            }
            TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `tokens[start..end]` at commas that are not nested in another delimiter. A trailing comma
/// does not start an extra item.
fn split_top_level(tokens: &[Token], start: usize, end: usize) -> Vec<Range<usize>> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut item_start = start;
    for (i, token) in tokens.iter().enumerate().take(end).skip(start) {
        match token.kind {
            TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => {
                depth += 1;
            }
            TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                depth = depth.saturating_sub(1);
            }
            TokenKind::Punctuation(PunctuationId::Comma) if depth == 0 => {
                items.push(item_start..i);
                item_start = i + 1;
            }
            _ => {}
        }
    }
    if item_start < end {
        items.push(item_start..end);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn ctx(position: PositionKind) -> BracketContext {
        BracketContext::new(position)
    }

    fn tokens(source: &str) -> Vec<Token> {
        lex(source).unwrap_or_else(|errs| panic!("unexpected errors: {errs:?}"))
    }

    #[test]
    fn test_type_position_roles() {
        // `[` `]` `4`
        let toks = tokens("[] 4\n");
        assert_eq!(resolve(ctx(PositionKind::Type), Some(&toks[1])), Ok(BracketRole::SliceType));
        assert_eq!(resolve(ctx(PositionKind::Type), Some(&toks[2])), Ok(BracketRole::ArrayType));
        assert_eq!(
            resolve(ctx(PositionKind::Type).after_path_end(), Some(&toks[2])),
            Ok(BracketRole::GenericArguments)
        );
        assert_eq!(
            resolve(ctx(PositionKind::Type).after_complete_type(), Some(&toks[2])),
            Ok(BracketRole::SizedArraySuffix)
        );
    }

    #[test]
    fn test_inline_type_reads_as_type() {
        let toks = tokens("[]\n");
        let inline = ctx(PositionKind::Expression).with_inline_type();
        assert_eq!(resolve(inline, Some(&toks[1])), Ok(BracketRole::SliceType));
        assert_eq!(resolve(inline.after_path_end(), None), Ok(BracketRole::GenericArguments));
    }

    #[test]
    fn test_errors_are_never_defaulted() {
        assert_eq!(
            resolve(ctx(PositionKind::Type).after_path_end().after_complete_type(), None),
            Err(DisambiguationError::Contradictory)
        );
        assert_eq!(
            resolve(ctx(PositionKind::PathTail), None),
            Err(DisambiguationError::PathTailWithoutSegment)
        );
        assert_eq!(
            resolve(ctx(PositionKind::Expression), None),
            Err(DisambiguationError::ExpressionWithoutOperand)
        );
        assert_eq!(
            resolve(ctx(PositionKind::Expression).after_complete_type(), None),
            Err(DisambiguationError::CompleteTypeOutsideType {
                position: PositionKind::Expression
            })
        );
    }

    #[test]
    fn test_declaration_is_generic_parameters() {
        assert_eq!(resolve(ctx(PositionKind::Declaration), None), Ok(BracketRole::GenericParameters));
    }

    #[test]
    fn test_group_splits_top_level_commas() {
        let toks = tokens("Map[K, Pair[A, B], f(x, y),]\n");
        let ctx = ctx(PositionKind::Type).after_path_end();
        let group = resolve_group(&toks, 1, ctx).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(group.role, BracketRole::GenericArguments);
        assert_eq!(group.items.len(), 3);
        assert_eq!(toks[group.close].text, "]");
        assert_eq!(group.close, toks.len() - 2);
    }

    #[test]
    fn test_group_errors() {
        let toks = tokens("a(b)\n");
        assert_eq!(
            resolve_group(&toks, 1, ctx(PositionKind::Expression)),
            Err(DisambiguationError::NotAnOpeningBracket { index: 1 })
        );
        let unbalanced = &toks_with_open_bracket()[..];
        assert_eq!(
            resolve_group(unbalanced, 1, ctx(PositionKind::Expression).after_path_end()),
            Err(DisambiguationError::Unbalanced { index: 1 })
        );
    }

    fn toks_with_open_bracket() -> Vec<Token> {
        let toks = tokens("a[b]\n");
        toks.into_iter().take(3).collect()
    }

    #[test]
    fn test_context_from_preceding_token() {
        let toks = tokens("Vec u8 (x)\n");
        let ty = BracketContext::new(PositionKind::Type);
        assert!(ty.with_preceding(Some(&toks[0])).preceding_is_path_end);
        assert!(ty.with_preceding(Some(&toks[1])).follows_complete_type);
        let expr = BracketContext::new(PositionKind::Expression);
        assert!(!ty.with_preceding(Some(&toks[4])).follows_complete_type);
        assert!(expr.with_preceding(Some(&toks[4])).preceding_is_path_end);
        assert!(!expr.with_preceding(Some(&toks[2])).preceding_is_path_end);
        assert!(!expr.with_preceding(None).preceding_is_path_end);
    }

    #[test]
    fn test_closing_bracket_context_depends_on_its_group() {
        let ty = BracketContext::new(PositionKind::Type);

        // [ 2 ] [ 3 ] u8: the first group is a prefix, so the second is too.
        let toks = tokens("[2][3]u8\n");
        let inner = ty.with_preceding_in(&toks, 3);
        assert!(!inner.follows_complete_type && !inner.preceding_is_path_end);
        assert_eq!(resolve_group(&toks, 3, inner).map(|g| g.role), Ok(BracketRole::ArrayType));

        // u8 [ 4 ] [ 2 ]: chained suffixes after a complete type.
        let toks = tokens("u8[4][2]\n");
        assert!(ty.with_preceding_in(&toks, 4).follows_complete_type);

        // Vec [ u8 ] [ 4 ]
        let toks = tokens("Vec[u8][4]\n");
        assert!(ty.with_preceding_in(&toks, 4).follows_complete_type);

        // Index chains are unaffected: a [ 1 ] [ 2 ]
        let toks = tokens("a[1][2]\n");
        let expr = BracketContext::new(PositionKind::Expression).with_preceding_in(&toks, 4);
        assert_eq!(resolve_group(&toks, 4, expr).map(|g| g.role), Ok(BracketRole::IndexExpression));
    }

    #[test]
    fn test_generic_arguments_before_path_separator_are_rejected() {
        let toks = tokens("List[T]::push\n");
        assert_eq!(
            resolve_group(&toks, 1, ctx(PositionKind::PathTail).after_path_end()),
            Err(DisambiguationError::InteriorGenerics { index: 1 })
        );

        // An index followed by `::` is not a generics question.
        let toks = tokens("xs[0]::y\n");
        let index = resolve_group(&toks, 1, ctx(PositionKind::Expression).after_path_end());
        assert_eq!(index.map(|g| g.role), Ok(BracketRole::IndexExpression));
    }
}
