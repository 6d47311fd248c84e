//! Property-based tests for the layout scanner
//!
//! These tests use proptest to check the scanner's structural invariants across many randomly
//! generated inputs: block nesting, per-line statement ends, determinism and source reconstruction.

use fig_syntax::lexer::{ErrorMode, LexerConfig, Token, TokenKind, lex_recovering, render};
use proptest::prelude::*;

/// Assert BLOCK-OPEN/BLOCK-CLOSE are balanced and never close more than is open.
fn assert_well_nested(tokens: &[Token]) -> Result<(), TestCaseError> {
    let mut depth: i64 = 0;
    for token in tokens {
        match token.kind {
            TokenKind::BlockOpen => depth += 1,
            TokenKind::BlockClose => depth -= 1,
            _ => {}
        }
        prop_assert!(depth >= 0, "block close without open at {:?}", token.span);
    }
    prop_assert_eq!(depth, 0);
    Ok(())
}

// Strategy for one line of well-formed, comment-free, tab-free content
fn line_content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "x", "foo", "42", "3.5", "\"s\"", "f(a, b)", "a[1]", "x = y + 1", "return z", "Vec[u8]", "a :: b",
            "enum", "pass", "$\"v={v}\"",
        ]),
        1..4,
    )
    .prop_map(|words| words.join(" "))
}

// Strategy for a program whose indentation always lands on an open block
fn program_strategy() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec((0usize..4, any::<bool>(), line_content_strategy()), 1..12).prop_map(|lines| {
        let mut depth = 0usize;
        let mut source = String::new();
        for (i, (step, blank_before, content)) in lines.iter().enumerate() {
            // Indent by at most one level; dedent to any open level.
            depth = if *step == 3 { depth + 1 } else { (*step).min(depth) };
            if i == 0 {
                depth = 0;
            }
            if *blank_before && i > 0 {
                source.push('\n');
            }
            source.push_str(&" ".repeat(depth * 4));
            source.push_str(content);
            source.push('\n');
        }
        (source, lines.len())
    })
}

proptest! {
    /// Property: block markers are well nested for any input, including malformed input
    #[test]
    fn blocks_are_well_nested_for_arbitrary_input(source in "\\PC{0,200}") {
        let (tokens, _errors) = lex_recovering(&source, LexerConfig::default());
        assert_well_nested(&tokens)?;
    }

    /// Property: block markers are well nested for indentation-heavy input
    #[test]
    fn blocks_are_well_nested_for_ragged_indentation(
        lines in prop::collection::vec((0usize..10, "[a-z(\\[\\]) ]{0,6}"), 0..20)
    ) {
        let source: String = lines
            .iter()
            .map(|(indent, text)| format!("{}{}\n", " ".repeat(*indent), text))
            .collect();
        let (tokens, _errors) = lex_recovering(&source, LexerConfig::default());
        assert_well_nested(&tokens)?;
    }

    /// Property: stopping at the first error still closes every open block
    #[test]
    fn blocks_are_well_nested_in_fatal_mode(
        lines in prop::collection::vec((0usize..10, "[a-z(\\[\\])@ ]{0,6}"), 0..20)
    ) {
        let source: String = lines
            .iter()
            .map(|(indent, text)| format!("{}{}\n", " ".repeat(*indent), text))
            .collect();
        let config = LexerConfig::new().with_error_mode(ErrorMode::Fatal);
        let (tokens, errors) = lex_recovering(&source, config);
        prop_assert!(errors.len() <= 1);
        assert_well_nested(&tokens)?;
    }

    /// Property: lexing is deterministic
    #[test]
    fn lexing_is_idempotent(source in "\\PC{0,200}") {
        let first = lex_recovering(&source, LexerConfig::default());
        let second = lex_recovering(&source, LexerConfig::default());
        prop_assert_eq!(first, second);
    }

    /// Property: every non-blank line ends in exactly one STATEMENT-END or ITEM-SEPARATOR
    #[test]
    fn each_line_contributes_one_line_end((source, line_count) in program_strategy()) {
        let (tokens, errors) = lex_recovering(&source, LexerConfig::default());
        prop_assert!(errors.is_empty(), "{:?}", errors);
        let line_ends = tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::StatementEnd | TokenKind::ItemSeparator))
            .count();
        prop_assert_eq!(line_ends, line_count);
        assert_well_nested(&tokens)?;
    }

    /// Property: rendering the tokens reproduces comment-free, tab-free source
    #[test]
    fn render_round_trips((source, _) in program_strategy()) {
        let (tokens, errors) = lex_recovering(&source, LexerConfig::default());
        prop_assert!(errors.is_empty(), "{:?}", errors);
        prop_assert_eq!(render(&tokens), source);
    }
}
