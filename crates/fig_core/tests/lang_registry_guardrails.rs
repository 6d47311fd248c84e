use std::collections::HashMap;

use fig_core::GrammarVersion;
use fig_core::lang::keywords;
use fig_core::lang::operators;
use fig_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                keywords::from_str(alias),
                Some(info.id),
                "keyword alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!("duplicate keyword alias spelling {:?}: {:?} and {:?}", alias, prev, info.id);
            }
        }
    }
}

#[test]
fn keyword_spellings_are_identifier_shaped() {
    // The lexer resolves keywords from identifier-shaped runs only.
    for info in keywords::KEYWORDS {
        for spelling in std::iter::once(&info.canonical).chain(info.aliases.iter()) {
            let mut chars = spelling.chars();
            let first = chars.next().expect("empty keyword spelling");
            assert!(first.is_ascii_alphabetic() || first == '_', "bad keyword start: {spelling}");
            assert!(
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "bad keyword spelling: {spelling}"
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert!(!info.spellings.is_empty(), "operator {:?} has no spelling", info.id);
        for &sp in info.spellings {
            assert_eq!(operators::from_str(sp), Some(info.id), "operator spelling not resolvable: {sp}");
            if let Some(prev) = seen.insert(sp, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", sp, prev, info.id);
            }
        }
        if info.is_keyword_spelling {
            assert!(
                keywords::from_str(info.spellings[0]).is_some(),
                "word operator {:?} must also be a reserved keyword",
                info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_disjoint_from_operators() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        assert!(
            operators::from_str(info.canonical).is_none(),
            "{:?} is registered both as punctuation and as an operator",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate punctuation spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn delimiters_pair_up() {
    for info in punctuation::PUNCTUATION {
        if let Some(close) = punctuation::closer_for(info.id) {
            assert_eq!(punctuation::opener_for(close), Some(info.id));
        }
    }
}

#[test]
fn every_registry_item_is_available_in_latest_grammar() {
    for info in keywords::KEYWORDS {
        assert!(info.since.available_in(GrammarVersion::LATEST));
    }
    for info in operators::OPERATORS {
        assert!(info.since.available_in(GrammarVersion::LATEST));
    }
    for info in punctuation::PUNCTUATION {
        assert!(info.since.available_in(GrammarVersion::LATEST));
    }
}
