#![no_main]

use fig_core::lang::punctuation::PunctuationId;
use fig_syntax::brackets::{BracketContext, PositionKind, resolve_group};
use fig_syntax::lexer::{LexerConfig, TokenKind, lex_recovering};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let config = LexerConfig::new().with_tab_width(4);
        let (tokens, _errors) = lex_recovering(s, config);

        // Block markers must stay well nested whatever the input.
        let mut depth: usize = 0;
        for token in &tokens {
            match token.kind {
                TokenKind::BlockOpen => depth += 1,
                TokenKind::BlockClose => {
                    depth = depth.checked_sub(1).expect("block close without open");
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "unclosed blocks at end of input");

        // The disambiguator must never panic on scanner output.
        for (i, token) in tokens.iter().enumerate() {
            if token.kind.is_punctuation(PunctuationId::LBracket) {
                let ctx = BracketContext::new(PositionKind::Type).with_preceding_in(&tokens, i);
                let _ = resolve_group(&tokens, i, ctx);
            }
        }
    }
});
