//! Numeric literal scanning for the Fig scanner
//!
//! Handles integers (`42`) and decimals (`3.14`). A `.` only belongs to the number when a digit follows
//! it, so `1.max` scans as `1`, `.`, `max`.

use super::Lexer;
use super::tokens::TokenKind;
use crate::diagnostics::LexError;
use crate::span::LineCol;

impl Lexer<'_> {
    /// Scan a number; the first digit is already consumed.
    pub(super) fn scan_number(&mut self, start: usize, start_lc: LineCol) {
        self.skip_digits();

        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // consume '.'
            self.skip_digits();
        }

        let text = &self.source[start..self.current_pos];
        let kind = if is_float {
            text.parse::<f64>().ok().map(TokenKind::Float)
        } else {
            text.parse::<i64>().ok().map(TokenKind::Int)
        };

        match kind {
            Some(kind) => self.add_token(kind, start, start_lc),
            None => {
                let text = text.to_string();
                let span = self.span_from(start, start_lc);
                self.recover(LexError::InvalidNumber { text, span });
            }
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
