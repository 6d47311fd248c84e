//! Rebuilding text from a token stream.
//!
//! - [`render`] places every token back at its recorded line/column, which reproduces comment-free,
//!   tab-free source up to trailing whitespace.
//! - [`dump`] is the stable one-token-per-line listing used by `fig lex` and the snapshot tests.

use std::fmt::Write;

use super::tokens::{InterpolationPart, Token, TokenKind};

/// Reconstruct source text from tokens.
///
/// ## Notes
/// - BLOCK-OPEN and BLOCK-CLOSE contribute nothing; STATEMENT-END and ITEM-SEPARATOR contribute the line
///   break they stand for.
/// - Gaps between tokens are filled with line breaks and spaces, so comments and tabs are not
///   reproduced.
///
/// ## Examples
/// ```rust
/// use fig_syntax::lexer::{lex, render};
///
/// let source = "if ready\n    go(1, 2)\n";
/// assert_eq!(render(&lex(source).unwrap()), source);
/// ```
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut line = 1u32;
    let mut column = 1u32;

    for token in tokens {
        if matches!(token.kind, TokenKind::BlockOpen | TokenKind::BlockClose) {
            continue;
        }

        let target = token.span.start_lc;
        while line < target.line {
            out.push('\n');
            line += 1;
            column = 1;
        }
        while column < target.column {
            out.push(' ');
            column += 1;
        }

        for c in token.text.chars() {
            out.push(c);
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
    }

    out
}

/// One line per token: `line:column class text`, with nested interpolation tokens indented below their
/// string.
///
/// ## Examples
/// ```rust
/// use fig_syntax::lexer::{dump, lex};
///
/// let listing = dump(&lex("pass\n").unwrap());
/// assert_eq!(listing, "1:1 keyword \"pass\"\n1:5 statement-end \"\\n\"\n");
/// ```
pub fn dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    dump_into(&mut out, tokens, 0);
    out
}

fn dump_into(out: &mut String, tokens: &[Token], depth: usize) {
    for token in tokens {
        let lc = token.span.start_lc;
        let _ = writeln!(
            out,
            "{:indent$}{}:{} {} {:?}",
            "",
            lc.line,
            lc.column,
            token.class(),
            token.text,
            indent = depth * 4
        );
        if let TokenKind::InterpolatedString(parts) = &token.kind {
            for part in parts {
                if let InterpolationPart::Expr(inner) = part {
                    dump_into(out, inner, depth + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{LexerConfig, lex, lex_recovering};

    #[test]
    fn test_render_restores_layout() {
        let source = "struct Point\n    x: i32\n\n    y: i32\n\nfunc main()\n    let p = Point(1, 2)\n";
        let tokens = lex(source).unwrap_or_default();
        assert_eq!(render(&tokens), source);
    }

    #[test]
    fn test_render_drops_comments() {
        let tokens = lex("a // note\nb\n").unwrap_or_default();
        assert_eq!(render(&tokens), "a\nb\n");
    }

    #[test]
    fn test_render_continuation_lines() {
        let source = "call(a,\n     b)\n";
        let (tokens, errors) = lex_recovering(source, LexerConfig::default());
        assert!(errors.is_empty());
        assert_eq!(render(&tokens), source);
    }

    #[test]
    fn test_dump_indents_interpolated_expressions() {
        let tokens = lex("$\"{x}\"\n").unwrap_or_default();
        assert_eq!(
            dump(&tokens),
            "1:1 literal \"$\\\"{x}\\\"\"\n    1:4 identifier \"x\"\n1:7 statement-end \"\\n\"\n"
        );
    }
}
