//! Integration tests for the mode-stack lexer
//!
//! Sources here are already normalized (they start with the `\n` the pipeline prefixes).

use adocfmt::adoc::lexing::{tokenize, tokenize_with, LexerOptions, Mode};
use adocfmt::adoc::testing::{lex_helper, token_kinds};
use adocfmt::adoc::token::TokenKind::{self, *};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_headline_tokens() {
    insta::assert_debug_snapshot!(lex_helper("\n= A"), @r###"
    [
        (
            Newline,
            "\n",
        ),
        (
            Headline,
            "=",
        ),
        (
            Space,
            " ",
        ),
        (
            InlineText,
            "A",
        ),
    ]
    "###);
}

#[test]
fn test_attribute_block_tokens() {
    assert_eq!(
        lex_helper("\n[source,title=\"A B\"#main.hl%opt]"),
        vec![
            (Newline, "\n".to_string()),
            (AttributeListStart, "[".to_string()),
            (AttributeInlineText, "source".to_string()),
            (Comma, ",".to_string()),
            (AttributeInlineText, "title".to_string()),
            (Assignment, "=".to_string()),
            (StringStart, "\"".to_string()),
            (StringText, "A".to_string()),
            (Space, " ".to_string()),
            (StringText, "B".to_string()),
            (StringEnd, "\"".to_string()),
            (IdShorthand, "#".to_string()),
            (AttributeInlineText, "main".to_string()),
            (RoleShorthand, ".".to_string()),
            (AttributeInlineText, "hl".to_string()),
            (OptionShorthand, "%".to_string()),
            (AttributeInlineText, "opt".to_string()),
            (AttributeListEnd, "]".to_string()),
        ]
    );
}

#[test]
fn test_paragraph_tokens() {
    assert_eq!(
        token_kinds("\n  one\ttwo\n\t\nthree"),
        vec![
            Newline, Space, Space, InlineText, Tab, InlineText, EmptyLine, Newline, InlineText,
        ]
    );
}

#[test]
fn test_quote_without_partner_is_text() {
    assert_eq!(
        lex_helper("\n[a=\"b]"),
        vec![
            (Newline, "\n".to_string()),
            (AttributeListStart, "[".to_string()),
            (AttributeInlineText, "a".to_string()),
            (Assignment, "=".to_string()),
            (AttributeInlineText, "\"b".to_string()),
            (AttributeListEnd, "]".to_string()),
        ]
    );
}

#[test]
fn test_string_mode_keeps_list_characters() {
    let kinds: Vec<TokenKind> = token_kinds("\n[a=\"x,y=[z]\"]");
    assert_eq!(
        kinds,
        vec![
            Newline,
            AttributeListStart,
            AttributeInlineText,
            Assignment,
            StringStart,
            StringText,
            StringEnd,
            AttributeListEnd,
        ]
    );
}

#[test]
fn test_unicode_offsets_are_bytes() {
    let tokens = tokenize("\nçà va").unwrap();
    assert_eq!(tokens[1].span, 1..5);
    assert_eq!(tokens[3].span, 6..8);
}

#[test]
fn test_legacy_mode_switch() {
    let on = tokenize("\n[[x]]").unwrap();
    assert_eq!(on[2].kind, LegacyIdStart);
    assert_eq!(on[4].kind, LegacyIdEnd);

    let off = LexerOptions {
        legacy_id_brackets: false,
    };
    assert!(tokenize_with("\n[[x]]", &off).is_err());
    assert!(tokenize_with("\n[#x]", &off).is_ok());
}

#[test]
fn test_mode_tables_list_their_kinds() {
    assert!(Mode::Root.token_kinds().contains(&EmptyLine));
    assert!(!Mode::Root.token_kinds().contains(&Comma));
    assert_eq!(Mode::LegacyId.token_kinds(), &[LegacyIdEnd, AttributeInlineText]);
}

proptest! {
    #[test]
    fn prop_root_text_round_trips(text in "[a-z= \n\t\\[\\]#.,%]{0,40}") {
        let source = format!("\n{}", text);
        // every input made of these characters lexes unless it opens an attribute list
        if let Ok(tokens) = tokenize(&source) {
            let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
            prop_assert_eq!(rebuilt, source);
            for pair in tokens.windows(2) {
                prop_assert_eq!(pair[0].span.end, pair[1].span.start);
            }
        }
    }

    #[test]
    fn prop_plain_text_always_lexes(words in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let source = format!("\n{}", words.join(" "));
        let tokens = tokenize(&source).unwrap();
        let texts: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == InlineText)
            .map(|t| t.text.as_str())
            .collect();
        prop_assert_eq!(texts, words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
