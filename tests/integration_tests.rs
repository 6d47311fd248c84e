//! Integration tests for the Fig scanner and bracket disambiguator

use std::fs;
use std::path::Path;

use fig::grammar::{SiteId, SiteTable};
use fig::lexer::{self, LexerConfig, Token, TokenKind};
use fig::GrammarVersion;

/// Helper to scan a fixture, collecting error messages
fn scan_file(path: &Path) -> Result<Vec<Token>, Vec<String>> {
    let source = fs::read_to_string(path).map_err(|e| vec![e.to_string()])?;
    lexer::lex(&source).map_err(|errs| errs.iter().map(|e| e.to_string()).collect::<Vec<_>>())
}

fn fixtures(dir: &str) -> Vec<std::path::PathBuf> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(dir);
    let mut paths: Vec<_> = fs::read_dir(fixtures_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "fig"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures scan without errors and with balanced layout
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = scan_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to scan cleanly, got errors: {:?}",
            path.display(),
            result.unwrap_err()
        );
        let tokens = result.unwrap();
        let opens = tokens.iter().filter(|t| t.kind == TokenKind::BlockOpen).count();
        let closes = tokens.iter().filter(|t| t.kind == TokenKind::BlockClose).count();
        assert_eq!(opens, closes, "unbalanced layout in {}", path.display());
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        assert!(
            scan_file(&path).is_err(),
            "Expected {} to fail scanning, but it succeeded",
            path.display()
        );
    }
}

/// Valid fixtures render back to their source
#[test]
fn test_valid_fixtures_render_back() {
    for path in fixtures("valid") {
        let source = fs::read_to_string(&path).unwrap();
        let tokens = lexer::lex(&source).unwrap();
        let rendered = lexer::render(&tokens);
        // Comments are trivia; a comment-only line comes back empty.
        let expected: String = source
            .lines()
            .map(|l| if l.trim_start().starts_with("//") { "" } else { l })
            .flat_map(|l| [l, "\n"])
            .collect();
        assert_eq!(rendered, expected, "render mismatch for {}", path.display());
    }
}

mod bracket_tests {
    use super::*;

    fn first_bracket(tokens: &[Token]) -> usize {
        tokens
            .iter()
            .position(|t| t.kind.is_punctuation(fig::lang::punctuation::PunctuationId::LBracket))
            .unwrap()
    }

    #[test]
    fn test_declaration_generics_in_fixture() {
        let source = "public struct Pair [T, U]\n    first: T\n";
        let tokens = lexer::lex(source).unwrap();
        let table = SiteTable::for_version(GrammarVersion::V2);
        let resolved = table
            .resolve_at(&tokens, first_bracket(&tokens), SiteId::GenericParameters)
            .unwrap();
        assert_eq!(resolved.items.len(), 2);
    }

    #[test]
    fn test_same_tokens_different_sites() {
        let tokens = lexer::lex("Vec[u8]\n").unwrap();
        let open = first_bracket(&tokens);
        let table = SiteTable::for_version(GrammarVersion::V2);
        let as_type = table.resolve_at(&tokens, open, SiteId::PathGenerics).unwrap();
        let as_index = table.resolve_at(&tokens, open, SiteId::IndexSuffix).unwrap();
        assert_ne!(as_type.role, as_index.role);
    }

    #[test]
    fn test_recovering_scan_still_resolves_later_brackets() {
        let source = "let a = \"oops\nlet b = xs[1]\n";
        let (tokens, errors) = lexer::lex_recovering(source, LexerConfig::default());
        assert!(!errors.is_empty());
        // Strings may span lines, so the unterminated string swallows the rest of the file.
        assert!(tokens.iter().all(|t| !t.kind.is_punctuation(fig::lang::punctuation::PunctuationId::LBracket)));
    }
}
