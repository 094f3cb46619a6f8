//! End-to-end formatting tests
//!
//! Every case checks the canonical output and that formatting that output again is a no-op.

use adocfmt::adoc::testing::{assert_ast, assert_idempotent};
use adocfmt::{format, parse, print, AttributeFormat, Config};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::title_and_section("= My Document\n\n== Sub", "= My Document\n\n== Sub\n")]
#[case::attribute_block_then_text("[id=foo,role=bar]\nText", "[#foo.bar]\nText\n")]
#[case::literal_paragraph(" text", "  text\n")]
#[case::formal_to_shorthand("[id=id1,role=role1]", "[#id1.role1]\n")]
#[case::shorthand_is_canonical("[#id1.role1]", "[#id1.role1]\n")]
#[case::word_gaps_collapse("Some   spaced\ntext  here  ", "Some spaced\ntext here\n")]
#[case::outer_blank_lines_dropped("\n\n  \n= Title   \n\n\n", "= Title\n")]
#[case::marker_without_space("=Title", "= Title\n")]
#[case::equals_inside_text("a == b", "a == b\n")]
#[case::positional_and_quoted("[source,title=\"A B\"]", "[source,title=\"A B\"]\n")]
#[case::needless_quotes_dropped("[a=\"x\"]", "[a=x]\n")]
#[case::options_accumulate("[%header%footer]", "[%header%footer]\n")]
#[case::others_before_shorthands("[lang=rust.r#i]", "[lang=rust#i.r]\n")]
#[case::similar_key_is_not_a_shorthand("[options=o,id=i]", "[options=o#i]\n")]
#[case::legacy_id("[[legacy]]", "[#legacy]\n")]
#[case::legacy_id_merges_with_hash("[[a]#b.c]", "[#a#b.c]\n")]
#[case::quote_inside_legacy_id_stays_formal("[[l\"g]y=\"b]", "[id=l\"g,y=\"b]\n")]
#[case::multi_word_role_splits("[role=\"a b\"]", "[.a.b]\n")]
#[case::empty_list("[]", "[]\n")]
#[case::empty_value("[x=\"\"]", "[x=\"\"]\n")]
#[case::comma_value_stays_quoted("[x=\"a,b\"]", "[x=\"a,b\"]\n")]
#[case::role_with_comma_stays_formal("[role=\"a,b\"]", "[role=\"a,b\"]\n")]
#[case::blank_document("   \n\n", "\n")]
#[case::blank_lines_between_blocks(
    "Para one\n\n\n[#x]\n== Two",
    "Para one\n\n\n[#x]\n== Two\n"
)]
#[case::literal_lines_reindent("  one\n    two\nthree", "  one\n  two\n  three\n")]
fn test_default_formatting(#[case] input: &str, #[case] expected: &str) {
    let config = Config::default();
    assert_eq!(assert_idempotent(input, &config), expected);
}

#[rstest]
#[case::all_formal(
    Config::default().with_attribute_format(AttributeFormat::Formal),
    "[#foo.bar%opt]",
    "[id=foo,role=bar,option=opt]\n"
)]
#[case::formal_role_only(
    Config::default().with_role_format(AttributeFormat::Formal),
    "[#foo.a.b]",
    "[role=\"a b\"#foo]\n"
)]
#[case::formal_id_multi_value(
    Config::default().with_id_format(AttributeFormat::Formal),
    "[#a#b]",
    "[id=\"a b\"]\n"
)]
#[case::always_quote(
    Config::default().with_always_quote_attribute_values(true),
    "[a=b,c#id]",
    "[a=\"b\",\"c\"#id]\n"
)]
#[case::wide_literal_indent(
    Config::default().with_literal_paragraph_indent(4),
    " x\n y",
    "    x\n    y\n"
)]
#[case::always_quote_skips_values_with_quote_chars(
    Config::default().with_always_quote_attribute_values(true),
    "[x=a\"b]",
    "[x=a\"b]\n"
)]
#[case::zero_indent_keeps_literal_equals_apart(
    Config::default().with_literal_paragraph_indent(0),
    " a\n =b",
    "a\n =b\n"
)]
#[case::dots_quoted_when_formal(
    Config::default().with_attribute_format(AttributeFormat::Formal),
    "[file=\"a.txt\"]",
    "[file=\"a.txt\"]\n"
)]
fn test_configured_formatting(#[case] config: Config, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(assert_idempotent(input, &config), expected);
}

#[test]
fn test_shorthand_and_formal_are_equivalent() {
    let config = Config::default();
    let formal = format("[id=id1,role=role1]", &config).unwrap();
    let shorthand = format("[#id1.role1]", &config).unwrap();

    assert_eq!(formal, shorthand);
    assert_eq!(formal, "[#id1.role1]\n");
}

#[test]
fn test_heading_level_law() {
    for k in 1..=6 {
        let doc = parse(&format!("{} Heading", "=".repeat(k)), false).unwrap();
        assert_ast(&doc).item_count(1).item(0, |item| {
            item.assert_headline().level(k - 1).text("Heading");
        });
    }
}

#[test]
fn test_document_structure() {
    let doc = parse(
        "= My Document\n\n[source,lang=\"rust code\"#main]\n  literal  line\nnext",
        false,
    )
    .unwrap();

    assert_ast(&doc)
        .item_types(&["Headline", "EmptyLine", "AttributeBlock", "Paragraph"])
        .item(0, |item| {
            item.assert_headline().level(0).text("My Document");
        })
        .item(1, |item| item.assert_empty_line())
        .item(2, |item| {
            item.assert_attribute_block()
                .attribute_count(3)
                .positional(0, &["source"])
                .attribute("lang", &["rust", "code"])
                .attribute("id", &["main"]);
        })
        .item(3, |item| {
            item.assert_paragraph()
                .literal(true)
                .line_count(2)
                .line(0, "literal line")
                .line(1, "next");
        });
}

#[test]
fn test_print_reuses_a_parsed_document() {
    let doc = parse("[#a.b]\n\nText", false).unwrap();

    assert_eq!(print(&doc, &Config::default()), "[#a.b]\n\nText\n");
    assert_eq!(
        print(
            &doc,
            &Config::default().with_attribute_format(AttributeFormat::Formal)
        ),
        "[id=a,role=b]\n\nText\n"
    );
}

#[test]
fn test_config_from_host_options() {
    let config = Config::from_json(r#"{"adocIdFormat": "formal", "adocLiteralParagraphSpaces": 1}"#)
        .unwrap();

    assert_eq!(
        assert_idempotent("[#main]\n   code", &config),
        "[id=main]\n code\n"
    );
}
