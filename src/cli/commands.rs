//! CLI command implementations
//!
//! All commands return `CliResult<ExitCode>` instead of calling `process::exit` directly.
//! Output goes to stdout, diagnostics go to stderr.

use std::fmt::Write as _;
use std::fs;

use fig_core::GrammarVersion;
use fig_core::lang::punctuation::PunctuationId;
use fig_syntax::LexError;
use fig_syntax::grammar::{self, SiteId, SiteTable};
use fig_syntax::lexer::{self, InterpolationPart, LexerConfig, Token, TokenKind};
use miette::{NamedSource, Report};
use serde_json::{Value, json};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB) to prevent memory exhaustion.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
///
/// ## Errors
/// Returns `CliError` if:
/// - The file cannot be accessed (permissions, doesn't exist)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Print the token stream of a file, as the text dump or as JSON.
///
/// Tokens scanned before (and, in recovering mode, after) an error are still printed; the errors are
/// reported on stderr and the command fails.
pub fn lex_file(file_path: &str, config: LexerConfig, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (tokens, errors) = lexer::lex_recovering(&source, config);
    tracing::debug!(file = file_path, tokens = tokens.len(), errors = errors.len(), "scanned");

    if json {
        let out = serde_json::to_string_pretty(&tokens_to_json(&tokens))
            .map_err(|e| CliError::failure(format!("Error serializing tokens: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", lexer::dump(&tokens));
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(render_diagnostics(file_path, &source, &errors)))
    }
}

/// Scan a file and report every error with source context.
pub fn check_file(file_path: &str, config: LexerConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (tokens, errors) = lexer::lex_recovering(&source, config);

    if errors.is_empty() {
        println!("✓ {}: {} tokens, no errors", file_path, tokens.len());
        return Ok(ExitCode::SUCCESS);
    }

    let summary = format!(
        "{}\n{} error{} in {}",
        render_diagnostics(file_path, &source, &errors),
        errors.len(),
        if errors.len() == 1 { "" } else { "s" },
        file_path
    );
    Err(CliError::failure(summary))
}

/// Print the bracket sites of `version`, or the v1 → v2 changes when `diff` is set.
pub fn print_sites(version: GrammarVersion, diff: bool) -> CliResult<ExitCode> {
    if diff {
        print!("{}", format_diff(GrammarVersion::V1, GrammarVersion::V2));
    } else {
        print!("{}", format_sites(&SiteTable::for_version(version)));
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve every `[` of a file as an occurrence of `site` and print one line per bracket.
///
/// Brackets that cannot be resolved are printed as errors and make the command fail after the whole
/// file has been listed.
pub fn brackets_file(
    file_path: &str,
    config: LexerConfig,
    site: SiteId,
    version: GrammarVersion,
) -> CliResult<ExitCode> {
    let table = SiteTable::for_version(version);
    if table.registration(site).is_none() {
        return Err(CliError::failure(format!(
            "Error: site '{site}' does not exist in grammar {version}"
        )));
    }

    let source = read_source(file_path)?;
    let (tokens, errors) = lexer::lex_recovering(&source, config);
    if !errors.is_empty() {
        return Err(CliError::failure(render_diagnostics(file_path, &source, &errors)));
    }

    let (listing, failures) = format_brackets(&table, &tokens, site);
    print!("{listing}");
    if failures == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!(
            "{failures} bracket{} could not be resolved as {site}",
            if failures == 1 { "" } else { "s" }
        )))
    }
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Render scan errors with miette, one report per error.
pub fn render_diagnostics(file_path: &str, source: &str, errors: &[LexError]) -> String {
    let mut out = String::new();
    for error in errors {
        let report =
            Report::new(error.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        let _ = writeln!(out, "{report:?}");
    }
    out
}

/// JSON form of a token stream.
///
/// Each token carries its class, source text and span; interpolated strings also carry their parts,
/// with embedded expressions as nested token arrays.
pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(tokens.iter().map(token_to_json).collect())
}

fn token_to_json(token: &Token) -> Value {
    let span = token.span;
    let mut value = json!({
        "class": token.class().as_str(),
        "text": token.text,
        "start": span.start,
        "end": span.end,
        "line": span.start_lc.line,
        "column": span.start_lc.column,
    });
    if let TokenKind::InterpolatedString(parts) = &token.kind {
        let parts: Vec<Value> = parts
            .iter()
            .map(|part| match part {
                InterpolationPart::Text(text) => json!({ "text": text }),
                InterpolationPart::Expr(inner) => json!({ "expr": tokens_to_json(inner) }),
            })
            .collect();
        value["parts"] = Value::Array(parts);
    }
    value
}

/// One line per live site: name, position kind, version range and an example.
pub fn format_sites(table: &SiteTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bracket sites in grammar {}:", table.version());
    for reg in table.sites() {
        let range = match reg.until {
            Some(until) => format!("{}..{}", reg.since, until),
            None => format!("{}..", reg.since),
        };
        let _ = writeln!(
            out,
            "  {:<22} {:<12} {:<8} {}",
            reg.site.as_str(),
            reg.position.as_str(),
            range,
            reg.example
        );
    }
    out
}

/// One line per site or form change between two versions.
pub fn format_diff(from: GrammarVersion, to: GrammarVersion) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Changes from {from} to {to}:");
    for change in grammar::diff(from, to) {
        let _ = writeln!(out, "  {change}");
    }
    out
}

/// Resolve every `[` in `tokens` as `site`; returns the listing and the number of failures.
pub fn format_brackets(table: &SiteTable, tokens: &[Token], site: SiteId) -> (String, usize) {
    let mut out = String::new();
    let mut failures = 0;
    for (i, token) in tokens.iter().enumerate() {
        if !token.kind.is_punctuation(PunctuationId::LBracket) {
            continue;
        }
        let lc = token.span.start_lc;
        match table.resolve_at(tokens, i, site) {
            Ok(resolved) => {
                let _ = writeln!(out, "{lc} {} items={}", resolved.role, resolved.items.len());
            }
            Err(e) => {
                failures += 1;
                let _ = writeln!(out, "{lc} error: {e}");
            }
        }
    }
    (out, failures)
}
