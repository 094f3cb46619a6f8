//! Concrete syntax tree
//!
//! The CST keeps every token the grammar consumed, grouped by grammar rule. A node stores its
//! children in slots keyed by token kind or child rule, in the order they were consumed, plus
//! the union of the spans of everything it consumed. Nodes are built bottom-up by the grammar
//! and never mutated after the parse returns.

use crate::adoc::token::{Token, TokenKind};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Grammar rules that produce a CST node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Text,
    Headline,
    EmptyLine,
    Paragraph,
    AttributeValue,
    AttributeEntry,
    AttributeEntryShorthand,
    AttributeList,
    AttributeBlock,
    Document,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Text => "text",
            Rule::Headline => "headline",
            Rule::EmptyLine => "emptyLine",
            Rule::Paragraph => "paragraph",
            Rule::AttributeValue => "attributeValue",
            Rule::AttributeEntry => "attributeEntry",
            Rule::AttributeEntryShorthand => "attributeEntryShorthand",
            Rule::AttributeList => "attributeList",
            Rule::AttributeBlock => "attributeBlock",
            Rule::Document => "document",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Child slot of a CST node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Token(TokenKind),
    Rule(Rule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CstElement {
    Node(CstNode),
    Token(Token),
}

impl CstElement {
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            CstElement::Node(node) => node.span.clone(),
            CstElement::Token(token) => Some(token.span.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstNode {
    pub rule: Rule,
    pub children: BTreeMap<Slot, Vec<CstElement>>,
    /// Union of all consumed token spans, `None` if the node consumed nothing
    pub span: Option<Range<usize>>,
}

impl CstNode {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            children: BTreeMap::new(),
            span: None,
        }
    }

    pub fn push_token(&mut self, token: Token) {
        self.extend_span(&token.span);
        self.children
            .entry(Slot::Token(token.kind))
            .or_default()
            .push(CstElement::Token(token));
    }

    pub fn push_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            self.push_token(token);
        }
    }

    pub fn push_node(&mut self, node: CstNode) {
        if let Some(span) = &node.span {
            self.extend_span(span);
        }
        self.children
            .entry(Slot::Rule(node.rule))
            .or_default()
            .push(CstElement::Node(node));
    }

    fn extend_span(&mut self, other: &Range<usize>) {
        self.span = Some(match self.span.take() {
            Some(span) => span.start.min(other.start)..span.end.max(other.end),
            None => other.clone(),
        });
    }

    /// Tokens of one kind, in consumption order
    pub fn tokens(&self, kind: TokenKind) -> impl Iterator<Item = &Token> {
        self.slot(Slot::Token(kind)).iter().filter_map(|el| match el {
            CstElement::Token(token) => Some(token),
            CstElement::Node(_) => None,
        })
    }

    pub fn first_token(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens(kind).next()
    }

    pub fn has_token(&self, kind: TokenKind) -> bool {
        !self.slot(Slot::Token(kind)).is_empty()
    }

    /// Child nodes of one rule, in consumption order
    pub fn nodes(&self, rule: Rule) -> impl Iterator<Item = &CstNode> {
        self.slot(Slot::Rule(rule)).iter().filter_map(|el| match el {
            CstElement::Node(node) => Some(node),
            CstElement::Token(_) => None,
        })
    }

    pub fn first_node(&self, rule: Rule) -> Option<&CstNode> {
        self.nodes(rule).next()
    }

    /// All children across slots, in document order
    pub fn ordered_children(&self) -> Vec<&CstElement> {
        let mut all: Vec<&CstElement> = self.children.values().flatten().collect();
        all.sort_by_key(|el| el.span().map(|span| span.start).unwrap_or(usize::MAX));
        all
    }

    /// Child nodes across all rule slots, in document order
    pub fn ordered_nodes(&self) -> Vec<&CstNode> {
        self.ordered_children()
            .into_iter()
            .filter_map(|el| match el {
                CstElement::Node(node) => Some(node),
                CstElement::Token(_) => None,
            })
            .collect()
    }

    fn slot(&self, slot: Slot) -> &[CstElement] {
        self.children.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_is_union_of_children() {
        let mut text = CstNode::new(Rule::Text);
        text.push_token(Token::new(TokenKind::InlineText, "Sub", 4..7));

        let mut headline = CstNode::new(Rule::Headline);
        assert_eq!(headline.span, None);
        headline.push_token(Token::new(TokenKind::Newline, "\n", 0..1));
        headline.push_token(Token::new(TokenKind::Headline, "==", 1..3));
        headline.push_node(text);

        assert_eq!(headline.span, Some(0..7));
        assert_eq!(
            headline.first_token(TokenKind::Headline).map(|t| t.text.as_str()),
            Some("==")
        );
        assert!(headline.first_node(Rule::Text).is_some());
        assert!(!headline.has_token(TokenKind::Space));
    }

    #[test]
    fn test_ordered_children_follow_the_source() {
        let mut list = CstNode::new(Rule::AttributeList);
        let mut role = CstNode::new(Rule::AttributeEntryShorthand);
        role.push_token(Token::new(TokenKind::RoleShorthand, ".", 3..4));
        let mut id = CstNode::new(Rule::AttributeEntryShorthand);
        id.push_token(Token::new(TokenKind::IdShorthand, "#", 1..2));

        list.push_token(Token::new(TokenKind::AttributeListStart, "[", 0..1));
        list.push_node(role);
        list.push_node(id);

        let starts: Vec<_> = list
            .ordered_children()
            .iter()
            .filter_map(|el| el.span().map(|s| s.start))
            .collect();
        assert_eq!(starts, vec![0, 1, 3]);
        assert_eq!(list.ordered_nodes().len(), 2);
    }
}
