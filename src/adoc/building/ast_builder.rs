//! AST Builder from the CST
//!
//! This module contains the `AstBuilder`, which walks the [CstNode] tree produced by the
//! parser and constructs the final AST. The builder is total over a well-formed CST: every
//! failure it can report is an internal consistency check, never something user input can
//! trigger.

use std::collections::HashMap;

use crate::adoc::ast::elements::attribute::{ID_KEY, OPTION_KEY, ROLE_KEY};
use crate::adoc::ast::{
    Attribute, AttributeBlock, AttributeList, AttributeValue, Block, Document, EmptyLine,
    Headline, Paragraph, Span, Text,
};
use crate::adoc::error::InternalConsistencyError;
use crate::adoc::parsing::{CstNode, Rule};
use crate::adoc::token::TokenKind;

type BuildResult<T> = Result<T, InternalConsistencyError>;

/// Which canonical key a shorthand run contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ShorthandKind {
    Id,
    Role,
    Option,
}

impl ShorthandKind {
    fn of(node: &CstNode) -> BuildResult<Self> {
        if node.has_token(TokenKind::LegacyIdStart) || node.has_token(TokenKind::IdShorthand) {
            Ok(ShorthandKind::Id)
        } else if node.has_token(TokenKind::RoleShorthand) {
            Ok(ShorthandKind::Role)
        } else if node.has_token(TokenKind::OptionShorthand) {
            Ok(ShorthandKind::Option)
        } else {
            Err(InternalConsistencyError::MissingToken {
                rule: node.rule,
                kind: TokenKind::IdShorthand,
            })
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ShorthandKind::Id => ID_KEY,
            ShorthandKind::Role => ROLE_KEY,
            ShorthandKind::Option => OPTION_KEY,
        }
    }
}

/// A builder that constructs an AST from a CST
#[derive(Debug, Default, Clone, Copy)]
pub struct AstBuilder;

impl AstBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds a `Document` from the root CST node
    pub fn build(&self, root: &CstNode) -> BuildResult<Document> {
        if root.rule != Rule::Document {
            return Err(InternalConsistencyError::UnexpectedNode {
                parent: Rule::Document,
                found: root.rule,
            });
        }

        let children = root
            .ordered_nodes()
            .into_iter()
            .map(|node| self.build_block(node))
            .collect::<BuildResult<Vec<_>>>()?;

        // a document that consumed nothing at all keeps the sentinel
        let location = root
            .span
            .as_ref()
            .map(Span::from_range)
            .unwrap_or(Span::UNRESOLVED);

        Ok(Document::new(children).at(location))
    }

    fn build_block(&self, node: &CstNode) -> BuildResult<Block> {
        match node.rule {
            Rule::Headline => self.build_headline(node).map(Block::from),
            Rule::Paragraph => self.build_paragraph(node).map(Block::from),
            Rule::EmptyLine => Ok(EmptyLine::new().at(span_of(node)?).into()),
            Rule::AttributeBlock => self.build_attribute_block(node).map(Block::from),
            other => Err(InternalConsistencyError::UnexpectedNode {
                parent: Rule::Document,
                found: other,
            }),
        }
    }

    fn build_headline(&self, node: &CstNode) -> BuildResult<Headline> {
        let marker = node.first_token(TokenKind::Headline).ok_or(
            InternalConsistencyError::MissingToken {
                rule: node.rule,
                kind: TokenKind::Headline,
            },
        )?;
        let level = marker.text.chars().count().saturating_sub(1);
        let text = self.build_text(child(node, Rule::Text)?)?;

        Ok(Headline::new(level, text).at(span_of(node)?))
    }

    fn build_text(&self, node: &CstNode) -> BuildResult<Text> {
        let words = node
            .tokens(TokenKind::InlineText)
            .map(|token| token.text.clone())
            .collect();
        Ok(Text::new(words).at(span_of(node)?))
    }

    fn build_paragraph(&self, node: &CstNode) -> BuildResult<Paragraph> {
        let lines = node
            .nodes(Rule::Text)
            .map(|line| self.build_text(line))
            .collect::<BuildResult<Vec<_>>>()?;
        // spaces inside a line belong to its Text, so direct ones are line indents
        let is_literal = node.has_token(TokenKind::Space);

        Ok(Paragraph::new(lines, is_literal).at(span_of(node)?))
    }

    fn build_attribute_block(&self, node: &CstNode) -> BuildResult<AttributeBlock> {
        let list = self.build_attribute_list(child(node, Rule::AttributeList)?)?;
        Ok(AttributeBlock::new(list).at(span_of(node)?))
    }

    /// Entries keep their order. Shorthand runs of one kind merge into the attribute created
    /// by the first run of that kind.
    fn build_attribute_list(&self, node: &CstNode) -> BuildResult<AttributeList> {
        let mut attributes: Vec<Attribute> = Vec::new();
        let mut merged: HashMap<ShorthandKind, usize> = HashMap::new();

        for item in node.ordered_nodes() {
            match item.rule {
                Rule::AttributeEntry => attributes.push(self.build_attribute_entry(item)?),
                Rule::AttributeEntryShorthand => {
                    let kind = ShorthandKind::of(item)?;
                    let values: Vec<String> = item
                        .tokens(TokenKind::AttributeInlineText)
                        .map(|token| token.text.clone())
                        .collect();

                    match merged.get(&kind) {
                        Some(&index) => attributes[index].value.values.extend(values),
                        None => {
                            let value = AttributeValue::new(values).at(value_span(item));
                            let attribute = Attribute::new(Some(kind.key().to_string()), value)
                                .at(span_of(item)?);
                            merged.insert(kind, attributes.len());
                            attributes.push(attribute);
                        }
                    }
                }
                other => {
                    return Err(InternalConsistencyError::UnexpectedNode {
                        parent: node.rule,
                        found: other,
                    })
                }
            }
        }

        Ok(AttributeList::new(attributes).at(span_of(node)?))
    }

    fn build_attribute_entry(&self, node: &CstNode) -> BuildResult<Attribute> {
        let key = if node.has_token(TokenKind::Assignment) {
            node.first_token(TokenKind::AttributeInlineText)
                .map(|token| token.text.clone())
        } else {
            None
        };
        let value = self.build_attribute_value(child(node, Rule::AttributeValue)?)?;

        Ok(Attribute::new(key, value).at(span_of(node)?))
    }

    fn build_attribute_value(&self, node: &CstNode) -> BuildResult<AttributeValue> {
        let kind = if node.has_token(TokenKind::StringStart) {
            TokenKind::StringText
        } else {
            TokenKind::AttributeInlineText
        };
        let values = node.tokens(kind).map(|token| token.text.clone()).collect();

        Ok(AttributeValue::new(values).at(span_of(node)?))
    }
}

fn span_of(node: &CstNode) -> BuildResult<Span> {
    node.span
        .as_ref()
        .map(Span::from_range)
        .ok_or(InternalConsistencyError::MissingSpan { rule: node.rule })
}

fn child(node: &CstNode, rule: Rule) -> BuildResult<&CstNode> {
    node.first_node(rule)
        .ok_or(InternalConsistencyError::MissingChild {
            rule: node.rule,
            child: rule,
        })
}

/// Union of the value tokens of a shorthand run
fn value_span(node: &CstNode) -> Span {
    node.tokens(TokenKind::AttributeInlineText)
        .map(|token| Span::from_range(&token.span))
        .fold(Span::UNRESOLVED, Span::union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adoc::lexing::tokenize;
    use crate::adoc::parsing::parse_to_cst;
    use crate::adoc::token::Token;

    fn build(source: &str) -> Document {
        let cst = parse_to_cst(&tokenize(source).unwrap()).unwrap();
        AstBuilder::new().build(&cst).unwrap()
    }

    #[test]
    fn test_headline_level_is_marker_length_minus_one() {
        let doc = build("\n= Title\n=== Deep  down");
        let levels: Vec<_> = doc.headlines().map(|h| h.level).collect();
        assert_eq!(levels, vec![0, 2]);

        let deep = doc.headlines().nth(1).unwrap();
        assert_eq!(deep.text.words, vec!["Deep", "down"]);
        assert_eq!(deep.location, Span::new(8, 23));
        assert_eq!(deep.text.location, Span::new(13, 23));
    }

    #[test]
    fn test_shorthand_runs_merge_by_kind() {
        let doc = build("\n[#a.r1%o.r2#b]");
        let list = &doc.children[0].as_attribute_block().unwrap().list;

        let keys: Vec<_> = list
            .attributes
            .iter()
            .map(|a| a.key.clone().unwrap())
            .collect();
        assert_eq!(keys, vec!["id", "role", "option"]);
        assert_eq!(list.get("id").unwrap().value.values, vec!["a", "b"]);
        assert_eq!(list.get("role").unwrap().value.values, vec!["r1", "r2"]);

        // the merged attribute keeps the span of its first run
        assert_eq!(list.get("id").unwrap().location, Span::new(2, 4));
    }

    #[test]
    fn test_legacy_brackets_are_an_id() {
        let doc = build("\n[[top]#more]");
        let list = &doc.children[0].as_attribute_block().unwrap().list;

        assert_eq!(list.attributes.len(), 1);
        assert_eq!(list.get("id").unwrap().value.values, vec!["top", "more"]);
    }

    #[test]
    fn test_entries_keep_key_and_words() {
        let doc = build("\n[source,title=\"A B\"]");
        let list = &doc.children[0].as_attribute_block().unwrap().list;

        assert_eq!(list.attributes[0].key, None);
        assert_eq!(list.attributes[0].value.values, vec!["source"]);
        assert_eq!(list.attributes[1].key.as_deref(), Some("title"));
        assert_eq!(list.attributes[1].value.values, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_quoted_value() {
        let doc = build("\n[alt=\"\"]");
        let list = &doc.children[0].as_attribute_block().unwrap().list;

        assert!(list.attributes[0].value.values.is_empty());
        assert!(list.attributes[0].value.location.is_resolved());
    }

    #[test]
    fn test_literal_flag_comes_from_leading_spaces() {
        let doc = build("\nplain\n  indented\n\n normal");
        let first = doc.children[0].as_paragraph().unwrap();
        let second = doc.children[2].as_paragraph().unwrap();

        assert!(first.is_literal);
        assert_eq!(first.lines.len(), 2);
        assert!(second.is_literal);
    }

    #[test]
    fn test_rejects_non_document_root() {
        let mut text = CstNode::new(Rule::Text);
        text.push_token(Token::new(TokenKind::InlineText, "x", 0..1));

        assert_eq!(
            AstBuilder::new().build(&text),
            Err(InternalConsistencyError::UnexpectedNode {
                parent: Rule::Document,
                found: Rule::Text
            })
        );
    }

    #[test]
    fn test_node_without_span_is_an_internal_error() {
        let mut root = CstNode::new(Rule::Document);
        root.push_node(CstNode::new(Rule::EmptyLine));

        assert_eq!(
            AstBuilder::new().build(&root),
            Err(InternalConsistencyError::MissingSpan {
                rule: Rule::EmptyLine
            })
        );
    }
}
