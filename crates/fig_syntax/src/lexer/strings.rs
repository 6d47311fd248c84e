//! String literal scanning for the Fig scanner
//!
//! Handles:
//! - Plain strings: `"text"`, with `""` standing for one embedded quote
//! - Interpolated strings: `$"total: {a + b}"`
//!
//! ## Notes
//! - Both forms may span physical lines; line breaks inside a literal are part of its text and never
//!   produce layout tokens.
//! - The expression inside `{...}` is scanned by a nested scanner with layout disabled. Its tokens keep
//!   spans into the outer source.

use std::iter::Peekable;
use std::str::CharIndices;

use super::Lexer;
use super::tokens::{InterpolationPart, TokenKind};
use crate::diagnostics::LexError;
use crate::span::LineCol;

impl Lexer<'_> {
    /// Scan a plain string; the opening quote is already consumed.
    pub(super) fn scan_string(&mut self, start: usize, start_lc: LineCol) {
        let mut value = String::new();

        loop {
            match self.advance() {
                None => {
                    let span = self.span_from(start, start_lc);
                    self.recover(LexError::UnterminatedString { span });
                    return;
                }
                Some('"') => {
                    if self.match_char('"') {
                        value.push('"');
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
            }
        }

        self.add_token(TokenKind::String(value), start, start_lc);
    }

    /// Scan an interpolated string; `$"` is already consumed.
    pub(super) fn scan_interpolated(&mut self, start: usize, start_lc: LineCol) {
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut nested_errors = Vec::new();

        loop {
            match self.peek() {
                None => {
                    let span = self.span_from(start, start_lc);
                    self.recover(LexError::UnterminatedString { span });
                    return;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('{') => {
                    let brace = self.current_pos;
                    let brace_lc = self.current_lc;
                    self.advance();

                    let expr_start = self.current_pos;
                    let expr_lc = self.current_lc;
                    let Some(len) = interpolation_len(&self.source[expr_start..]) else {
                        let span = self.span_from(brace, brace_lc);
                        self.recover(LexError::UnterminatedInterpolation { span });
                        return;
                    };

                    if !text.is_empty() {
                        parts.push(InterpolationPart::Text(std::mem::take(&mut text)));
                    }

                    let expr_source = self.source[expr_start..expr_start + len].to_string();
                    let inner = Lexer::fragment(&expr_source, self.base_offset + expr_start, expr_lc, self.config);
                    let (tokens, errors) = inner.tokenize_recovering();
                    nested_errors.extend(errors);
                    parts.push(InterpolationPart::Expr(tokens));

                    // Move over the expression and its closing brace, keeping line/column in step.
                    while self.current_pos < expr_start + len {
                        self.advance();
                    }
                    self.advance();
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }

        if !text.is_empty() {
            parts.push(InterpolationPart::Text(text));
        }

        for err in nested_errors {
            self.queue.push_back(Err(err));
        }
        self.add_token(TokenKind::InterpolatedString(parts), start, start_lc);
    }
}

/// Byte length of an interpolated expression, up to (not including) its closing `}`.
///
/// Braces nest, and string literals inside the expression are skipped whole so their braces and quotes
/// do not end it early. Returns `None` if the input ends first.
fn interpolation_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().peekable();
    expression_end(&mut chars)
}

fn expression_end(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
    let mut depth = 0usize;
    while let Some((i, c)) = chars.next() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            '"' => skip_plain(chars)?,
            '$' if chars.peek().map(|&(_, c)| c) == Some('"') => {
                chars.next();
                skip_interpolated(chars)?;
            }
            _ => {}
        }
    }
    None
}

fn skip_plain(chars: &mut Peekable<CharIndices<'_>>) -> Option<()> {
    while let Some((_, c)) = chars.next() {
        if c == '"' {
            if chars.peek().map(|&(_, c)| c) == Some('"') {
                chars.next();
            } else {
                return Some(());
            }
        }
    }
    None
}

fn skip_interpolated(chars: &mut Peekable<CharIndices<'_>>) -> Option<()> {
    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Some(()),
            '{' => {
                expression_end(chars)?;
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{LexerConfig, lex, lex_recovering};
    use crate::span::LineCol;
    use fig_core::lang::operators::OperatorId;

    #[test]
    fn test_doubled_quote_escapes() {
        let tokens = lex(r#"x = "say ""hi"""
"#)
        .unwrap_or_default();
        assert_eq!(tokens[2].kind, TokenKind::String(r#"say "hi""#.to_string()));
        assert_eq!(tokens[2].text, r#""say ""hi""""#);
    }

    #[test]
    fn test_string_spans_lines_without_layout() {
        let tokens = lex("s = \"a\n    b\"\nt\n").unwrap_or_default();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(kinds[2], TokenKind::String("a\n    b".to_string()));
        assert!(!kinds.contains(&TokenKind::BlockOpen));
        assert_eq!(tokens[3].kind, TokenKind::StatementEnd);
        assert_eq!(tokens[4].span.start_lc, LineCol::new(3, 1));
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, errors) = lex_recovering("x = \"abc\n", LexerConfig::default());
        assert!(matches!(errors.as_slice(), [LexError::UnterminatedString { .. }]));
        assert_eq!(tokens.len(), 3); // x, =, statement end
    }

    #[test]
    fn test_interpolation_parts() {
        let tokens = lex("$\"sum: {a + b}!\"\n").unwrap_or_default();
        let TokenKind::InterpolatedString(parts) = &tokens[0].kind else {
            panic!("expected interpolated string, got {:?}", tokens[0].kind);
        };
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], InterpolationPart::Text("sum: ".to_string()));
        let InterpolationPart::Expr(expr) = &parts[1] else {
            panic!("expected expression part");
        };
        let kinds: Vec<_> = expr.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Ident("b".into())
            ]
        );
        // Nested spans point into the outer source.
        assert_eq!(expr[0].span.start, 8);
        assert_eq!(expr[0].span.start_lc, LineCol::new(1, 9));
        assert_eq!(parts[2], InterpolationPart::Text("!".to_string()));
    }

    #[test]
    fn test_interpolation_with_nested_string_and_braces() {
        let tokens = lex("$\"{f(\"}\", {x})}\"\n").unwrap_or_default();
        let TokenKind::InterpolatedString(parts) = &tokens[0].kind else {
            panic!("expected interpolated string");
        };
        assert_eq!(parts.len(), 1);
        assert_eq!(tokens[1].kind, TokenKind::StatementEnd);
    }

    #[test]
    fn test_unterminated_interpolation() {
        let (_, errors) = lex_recovering("$\"a {b\n", LexerConfig::default());
        assert!(matches!(errors.as_slice(), [LexError::UnterminatedInterpolation { .. }]));
    }

    #[test]
    fn test_errors_inside_interpolation_are_reported() {
        let (tokens, errors) = lex_recovering("$\"{a @ b}\"\n", LexerConfig::default());
        assert!(matches!(errors.as_slice(), [LexError::UnexpectedChar { found: '@', .. }]));
        assert!(matches!(tokens[0].kind, TokenKind::InterpolatedString(_)));
    }

    #[test]
    fn test_expression_end_skips_nested_literals() {
        assert_eq!(interpolation_len("a}"), Some(1));
        assert_eq!(interpolation_len("{a}}"), Some(3));
        assert_eq!(interpolation_len("\"}\"}"), Some(3));
        assert_eq!(interpolation_len("$\"{x}\"}"), Some(6));
        assert_eq!(interpolation_len("a"), None);
    }
}
