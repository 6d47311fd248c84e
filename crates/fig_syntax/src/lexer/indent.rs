//! Indentation handling for the Fig scanner
//!
//! Implements BLOCK-OPEN / BLOCK-CLOSE frames and the resolution of a pending line end into either a
//! STATEMENT-END or an ITEM-SEPARATOR.
//!
//! ## Notes
//! - The frame stack is never empty: the bottom frame sits at column 0 and is never popped.
//! - Columns strictly increase from bottom to top.
//! - An unindent pops every frame deeper than the new column and only then checks that it landed on an
//!   existing frame, so the frames above the target are already closed when the error is reported.

use super::Lexer;
use super::tokens::TokenKind;
use crate::diagnostics::{IndentErrorKind, LexError};

/// What kind of block an indentation frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Statements; lines at the frame's column are separated by STATEMENT-END.
    Block,
    /// Items of an `enum`/`union`/`struct`/`interface`; lines at the frame's column are separated by
    /// ITEM-SEPARATOR.
    ItemList,
}

/// One open indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentFrame {
    pub column: usize,
    pub kind: FrameKind,
}

impl IndentFrame {
    /// The frame every scan starts with.
    pub const BOTTOM: IndentFrame = IndentFrame {
        column: 0,
        kind: FrameKind::Block,
    };
}

impl Lexer<'_> {
    fn top_frame(&self) -> IndentFrame {
        self.frames.last().copied().unwrap_or(IndentFrame::BOTTOM)
    }

    pub(super) fn handle_indentation(&mut self) {
        let start = self.current_pos;
        let start_lc = self.current_lc;
        let tab_width = self.tab_width();
        let mut column = 0;
        let mut saw_space = false;
        let mut saw_tab = false;

        // Measure leading spaces/tabs
        while let Some(c) = self.peek() {
            match c {
                ' ' => {
                    column += 1;
                    saw_space = true;
                    self.advance();
                }
                '\t' => {
                    column += tab_width;
                    saw_tab = true;
                    self.advance();
                }
                '\r' => {
                    self.advance();
                }
                _ => break,
            }
        }

        match self.peek() {
            // End of input: `finish` resolves whatever is pending.
            None => {
                self.at_line_start = false;
                return;
            }
            // Blank line
            Some('\n') => {
                self.advance();
                return; // Stay at line start
            }
            // Comment-only line
            Some('/') if self.peek_next() == Some('/') => {
                self.skip_comment();
                self.advance();
                return; // Stay at line start
            }
            _ => {}
        }

        self.at_line_start = false;
        let indent_span = self.span_from(start, start_lc);
        let pending = self.pending_line_end.take();

        if saw_tab && !self.config.tabs_allowed {
            self.end_statement(pending);
            self.recover(LexError::Indent {
                kind: IndentErrorKind::TabsNotAllowed,
                span: indent_span,
            });
            return;
        }
        if saw_tab && saw_space && tab_width > 1 {
            self.end_statement(pending);
            self.recover(LexError::Indent {
                kind: IndentErrorKind::Ambiguous,
                span: indent_span,
            });
            return;
        }

        let top = self.top_frame();

        if column == top.column {
            if let Some(span) = pending {
                if top.kind == FrameKind::ItemList {
                    self.push_layout(TokenKind::ItemSeparator, "\n", span);
                } else {
                    self.push_layout(TokenKind::StatementEnd, "\n", span);
                }
            }
        } else if column > top.column {
            self.end_statement(pending);
            let kind = if pending.is_some() && self.pending_opens_list {
                FrameKind::ItemList
            } else {
                FrameKind::Block
            };
            self.frames.push(IndentFrame { column, kind });
            tracing::trace!(column, ?kind, depth = self.frames.len(), "block open");
            let here = self.here();
            self.push_layout(TokenKind::BlockOpen, "", here);
        } else {
            self.end_statement(pending);
            let here = self.here();
            while self.frames.len() > 1 && self.top_frame().column > column {
                self.frames.pop();
                tracing::trace!(column, depth = self.frames.len(), "block close");
                self.push_layout(TokenKind::BlockClose, "", here);
            }

            // Verify we landed on an open frame
            let landing = self.top_frame().column;
            if landing != column {
                self.recover(LexError::Indent {
                    kind: IndentErrorKind::Inconsistent {
                        column,
                        enclosing: landing,
                    },
                    span: indent_span,
                });
            }
        }
    }

    fn end_statement(&mut self, pending: Option<crate::span::Span>) {
        if let Some(span) = pending {
            self.push_layout(TokenKind::StatementEnd, "\n", span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{LexerConfig, lex, lex_recovering};

    fn layout(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap_or_else(|errs| panic!("unexpected errors: {errs:?}"))
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| k.class().is_layout())
            .collect()
    }

    #[test]
    fn test_indent_and_dedent() {
        use TokenKind::*;
        assert_eq!(
            layout("if a\n    b\nc\n"),
            vec![StatementEnd, BlockOpen, StatementEnd, BlockClose, StatementEnd]
        );
    }

    #[test]
    fn test_dedent_several_levels_at_once() {
        use TokenKind::*;
        assert_eq!(
            layout("a\n  b\n    c\nd\n"),
            vec![
                StatementEnd,
                BlockOpen,
                StatementEnd,
                BlockOpen,
                StatementEnd,
                BlockClose,
                BlockClose,
                StatementEnd,
            ]
        );
    }

    #[test]
    fn test_item_list_frames_separate_items() {
        use TokenKind::*;
        assert_eq!(
            layout("public enum Color\n    Red\n\n    Green\n    Blue\nx\n"),
            vec![
                StatementEnd,
                BlockOpen,
                ItemSeparator,
                ItemSeparator,
                StatementEnd,
                BlockClose,
                StatementEnd,
            ]
        );
    }

    #[test]
    fn test_comment_lines_between_items_are_absorbed() {
        use TokenKind::*;
        // Indented and flush-left comments plus a blank line still make one separator.
        let source = "public enum Color\n    Red\n    // the default\n// flush-left note\n\n    Green\nx\n";
        assert_eq!(
            layout(source),
            vec![StatementEnd, BlockOpen, ItemSeparator, StatementEnd, BlockClose, StatementEnd]
        );

        let tokens = lex(source).unwrap_or_default();
        let separator = tokens.iter().find(|t| t.kind == ItemSeparator).map(|t| t.span.start_lc);
        assert_eq!(separator, Some(crate::span::LineCol::new(2, 8)));
    }

    #[test]
    fn test_nested_block_inside_item_list_uses_statement_end() {
        use TokenKind::*;
        assert_eq!(
            layout("struct S\n    requires\n        Foo\n        Bar\n    a: u8\n"),
            vec![
                StatementEnd,
                BlockOpen,
                StatementEnd,
                BlockOpen,
                StatementEnd,
                StatementEnd,
                BlockClose,
                StatementEnd,
                BlockClose,
            ]
        );
    }

    #[test]
    fn test_tab_width_counts_columns() {
        let config = LexerConfig::new().with_tab_width(4);
        let (tokens, errors) = lex_recovering("a\n\tb\n    c\n", config);
        assert!(errors.is_empty(), "{errors:?}");
        let opens = tokens.iter().filter(|t| t.kind == TokenKind::BlockOpen).count();
        assert_eq!(opens, 1);
    }

    #[test]
    fn test_tabs_not_allowed() {
        let config = LexerConfig::new().with_tabs_allowed(false);
        let (_, errors) = lex_recovering("a\n\tb\n", config);
        assert!(matches!(
            errors.as_slice(),
            [LexError::Indent {
                kind: IndentErrorKind::TabsNotAllowed,
                ..
            }]
        ));
    }

    #[test]
    fn test_mixed_tabs_and_spaces_are_ambiguous_with_wide_tabs() {
        let config = LexerConfig::new().with_tab_width(8);
        let (_, errors) = lex_recovering("a\n \tb\n", config);
        assert!(matches!(
            errors.as_slice(),
            [LexError::Indent {
                kind: IndentErrorKind::Ambiguous,
                ..
            }]
        ));

        // With one-column tabs the mix has a single reading.
        let (_, errors) = lex_recovering("a\n \tb\n", LexerConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_inconsistent_dedent_reports_after_popping() {
        let (tokens, errors) = lex_recovering("a\n    b\n  c\nd\n", LexerConfig::default());
        assert!(matches!(
            errors.as_slice(),
            [LexError::Indent {
                kind: IndentErrorKind::Inconsistent { column: 2, enclosing: 0 },
                ..
            }]
        ));
        let opens = tokens.iter().filter(|t| t.kind == TokenKind::BlockOpen).count();
        let closes = tokens.iter().filter(|t| t.kind == TokenKind::BlockClose).count();
        assert_eq!(opens, closes);
    }
}
