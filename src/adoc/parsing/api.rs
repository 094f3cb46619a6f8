//! Parser API
//!
//! Runs the document grammar over a token stream and turns chumsky's error into a
//! [SyntaxError] that names the offending token and the expected token kinds.

use chumsky::prelude::*;
use std::sync::Arc;
use tracing::debug;

use super::cst::CstNode;
use super::grammar::{document, ParserError};
use crate::adoc::ast::range::SourceLocation;
use crate::adoc::error::SyntaxError;
use crate::adoc::token::Token;

/// Label used in expected sets and messages for the end of the token stream
pub const END_OF_INPUT: &str = "end of input";

/// Parse a token stream into the CST of a whole document
pub fn parse_to_cst(tokens: &[Token]) -> Result<CstNode, SyntaxError> {
    let shared = Arc::new(tokens.to_vec());
    let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();

    match document(&shared).parse(kinds) {
        Ok(cst) => {
            debug!(
                tokens = tokens.len(),
                blocks = cst.ordered_nodes().len(),
                "parsed document"
            );
            Ok(cst)
        }
        Err(errors) => Err(to_syntax_error(tokens, errors)),
    }
}

/// Report the error that got furthest into the input
fn to_syntax_error(tokens: &[Token], errors: Vec<ParserError>) -> SyntaxError {
    let furthest = errors.into_iter().max_by_key(|err| err.span().start);
    let index = furthest
        .as_ref()
        .map(|err| err.span().start)
        .unwrap_or(tokens.len());

    let found = tokens.get(index).cloned();
    let offset = match &found {
        Some(token) => token.start(),
        None => tokens.last().map(Token::end).unwrap_or(0),
    };

    // the lexer covers its input, so the token texts rebuild the source
    let source: String = tokens.iter().map(|token| token.text.as_str()).collect();
    let position = SourceLocation::new(&source).byte_to_position(offset);

    let mut expected: Vec<String> = furthest
        .iter()
        .flat_map(|err| err.expected())
        .map(|kind| match kind {
            Some(kind) => kind.name().to_string(),
            None => END_OF_INPUT.to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();

    SyntaxError {
        found,
        offset,
        position,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adoc::lexing::tokenize;
    use crate::adoc::parsing::cst::Rule;
    use crate::adoc::token::TokenKind;

    fn cst(source: &str) -> CstNode {
        parse_to_cst(&tokenize(source).unwrap()).unwrap()
    }

    #[test]
    fn test_document_blocks_in_order() {
        let doc = cst("\n= Title\n\n[#a]\nbody");
        let rules: Vec<Rule> = doc.ordered_nodes().iter().map(|n| n.rule).collect();

        assert_eq!(
            rules,
            vec![
                Rule::Headline,
                Rule::EmptyLine,
                Rule::AttributeBlock,
                Rule::Paragraph
            ]
        );
        assert_eq!(doc.span, Some(0..19));
    }

    #[test]
    fn test_paragraph_ends_at_headline() {
        let doc = cst("\none\n two\n== Sub");
        let paragraph = doc.first_node(Rule::Paragraph).unwrap();

        assert_eq!(paragraph.nodes(Rule::Text).count(), 2);
        assert_eq!(paragraph.tokens(TokenKind::Space).count(), 1);
        assert!(doc.first_node(Rule::Headline).is_some());
    }

    #[test]
    fn test_attribute_list_mixes_entries_and_shorthands() {
        let doc = cst("\n[source,lang=\"rust code\"#main.hl]");
        let block = doc.first_node(Rule::AttributeBlock).unwrap();
        let list = block.first_node(Rule::AttributeList).unwrap();

        assert_eq!(list.nodes(Rule::AttributeEntry).count(), 2);
        assert_eq!(list.nodes(Rule::AttributeEntryShorthand).count(), 2);
        assert_eq!(list.tokens(TokenKind::Comma).count(), 1);
    }

    #[test]
    fn test_blank_document() {
        let doc = cst("\n");
        assert!(doc.ordered_nodes().is_empty());
        assert_eq!(doc.span, Some(0..1));
    }

    #[test]
    fn test_unterminated_list_reports_end_of_input() {
        let err = parse_to_cst(&tokenize("\n[key=value").unwrap()).unwrap_err();

        assert_eq!(err.found, None);
        assert_eq!(err.offset, 11);
        assert!(err.expected.contains(&"AttributeListEnd".to_string()));
    }

    #[test]
    fn test_comma_after_shorthand_is_rejected() {
        let err = parse_to_cst(&tokenize("\n[#a,b]").unwrap()).unwrap_err();

        assert_eq!(err.found.map(|t| t.kind), Some(TokenKind::Comma));
        assert_eq!(err.offset, 4);
        assert_eq!(err.position.to_string(), "1:3");
    }

    #[test]
    fn test_headline_without_text_is_rejected() {
        let err = parse_to_cst(&tokenize("\n==").unwrap()).unwrap_err();
        assert!(err.expected.contains(&"InlineText".to_string()));
    }
}
