//! Tests for the `fig` command implementations on real files

use std::fs;
use std::path::PathBuf;

use fig::GrammarVersion;
use fig::cli::{ExitCode, commands};
use fig::grammar::SiteId;
use fig::lexer::LexerConfig;

/// Write `source` to a per-process temp file and return its path.
fn temp_source(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fig_cli_{}_{name}.fig", std::process::id()));
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn lex_clean_file_succeeds() {
    let path = temp_source("lex_clean", "let x = 1\n");
    let result = commands::lex_file(&path.to_string_lossy(), LexerConfig::default(), false);
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    let _ = fs::remove_file(path);
}

#[test]
fn lex_json_succeeds() {
    let path = temp_source("lex_json", "$\"a{b}\"\n");
    let result = commands::lex_file(&path.to_string_lossy(), LexerConfig::default(), true);
    assert!(result.is_ok());
    let _ = fs::remove_file(path);
}

#[test]
fn check_reports_errors_with_file_name() {
    let path = temp_source("check_bad", "func f()\n    a\n  b\n");
    let err = commands::check_file(&path.to_string_lossy(), LexerConfig::default()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("1 error in"));
    assert!(err.message.contains("fig_cli_"));
    let _ = fs::remove_file(path);
}

#[test]
fn check_counts_every_recovered_error() {
    let path = temp_source("check_many", "a = )\nb = ]\nc = 1\n");
    let err = commands::check_file(&path.to_string_lossy(), LexerConfig::default()).unwrap_err();
    assert!(err.message.contains("2 errors in"), "{}", err.message);
    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_is_a_failure() {
    let err = commands::read_source("/definitely/not/here.fig").unwrap_err();
    assert!(err.message.contains("Cannot access file"));
}

#[test]
fn brackets_rejects_site_missing_from_version() {
    let path = temp_source("brackets_v2", "u8[4]\n");
    let err = commands::brackets_file(
        &path.to_string_lossy(),
        LexerConfig::default(),
        SiteId::TypeSuffix,
        GrammarVersion::V2,
    )
    .unwrap_err();
    assert!(err.message.contains("does not exist"));
    let _ = fs::remove_file(path);
}

#[test]
fn brackets_resolves_v1_suffix_arrays() {
    let path = temp_source("brackets_v1", "u8[4]\n");
    let result = commands::brackets_file(
        &path.to_string_lossy(),
        LexerConfig::default(),
        SiteId::TypeSuffix,
        GrammarVersion::V1,
    );
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    let _ = fs::remove_file(path);
}

#[test]
fn sites_listing_succeeds_for_every_version() {
    for &version in GrammarVersion::ALL {
        assert!(commands::print_sites(version, false).is_ok());
    }
    assert!(commands::print_sites(GrammarVersion::V2, true).is_ok());
}

#[test]
fn grammar_diff_snapshot() {
    insta::assert_snapshot!(commands::format_diff(GrammarVersion::V1, GrammarVersion::V2), @r"
    Changes from v1 to v2:
      - site type-suffix
      + site simple-path-generics
      + site postfix-generics
      + site offsetof-operand
      + site enum-repr-type
      + form Union
      + form Interface
      + form Namespace
      + form Using
      + form Visibility
      + form Annotation
      + form FallibleMarker
      + form RequiresClause
      + form WhereClause
      + form ExtendsClause
    ");
}
