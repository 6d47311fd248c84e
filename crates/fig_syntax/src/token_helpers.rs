//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens. The `ends_*` predicates are the token-level facts a rule table feeds
//! into a [`crate::brackets::BracketContext`].

use crate::lexer::{Token, TokenKind};
use fig_core::lang::keywords::{self, KeywordCategory, KeywordId};
use fig_core::lang::operators::OperatorId;
use fig_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this token was synthesized from layout.
    pub fn is_layout(&self) -> bool {
        self.class().is_layout()
    }

    /// Return `true` for a built-in primitive type keyword (`u8`, `f64`, `bool`, ...).
    pub fn is_primitive_type(&self) -> bool {
        matches!(self, TokenKind::Keyword(id) if keywords::category(*id) == KeywordCategory::PrimitiveType)
    }

    /// Return `true` if a path segment ends with this token: an identifier, `self`, or a built-in
    /// namespace root (`std`, `core`, `alloc`).
    pub fn ends_path_segment(&self) -> bool {
        match self {
            TokenKind::Ident(_) => true,
            TokenKind::Keyword(id) => {
                *id == KeywordId::SelfKw || keywords::category(*id) == KeywordCategory::Namespace
            }
            _ => false,
        }
    }

    /// Return `true` if an expression operand can end with this token (so a following `[` indexes it).
    pub fn ends_operand(&self) -> bool {
        match self {
            TokenKind::Ident(_)
            | TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::String(_)
            | TokenKind::InterpolatedString(_) => true,
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::SelfKw | KeywordId::True | KeywordId::False | KeywordId::Null | KeywordId::Ok
            ),
            TokenKind::Punctuation(p) => matches!(p, PunctuationId::RParen | PunctuationId::RBracket),
            _ => false,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_ends() {
        assert!(TokenKind::Ident("Vec".into()).ends_path_segment());
        assert!(TokenKind::Keyword(KeywordId::Std).ends_path_segment());
        assert!(!TokenKind::Keyword(KeywordId::U8).ends_path_segment());
        assert!(!TokenKind::Punctuation(PunctuationId::RParen).ends_path_segment());
    }

    #[test]
    fn test_operand_ends() {
        assert!(TokenKind::Punctuation(PunctuationId::RParen).ends_operand());
        assert!(TokenKind::Int(3).ends_operand());
        assert!(!TokenKind::Operator(OperatorId::Plus).ends_operand());
        assert!(!TokenKind::StatementEnd.ends_operand());
    }

    #[test]
    fn test_primitive_types() {
        assert!(TokenKind::Keyword(KeywordId::U8).is_primitive_type());
        assert!(!TokenKind::Keyword(KeywordId::If).is_primitive_type());
    }
}
