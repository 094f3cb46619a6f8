//! Grammar rules as chumsky combinators
//!
//! The parser runs over the sequence of token kinds. chumsky reports the span of every
//! consumed kind as its index in that sequence, which is how each rule recovers the full
//! [Token] for the CST.
//!
//! Alternatives are combined with ordered `choice`/`or`: they are tried top to bottom and the
//! first one that succeeds wins. The order below is significant and must not be shuffled.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::cst::{CstNode, Rule};
use crate::adoc::token::{Token, TokenKind};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenKind>;

/// The full tokens, indexed by the spans chumsky reports
pub(crate) type Tokens = Arc<Vec<Token>>;

/// Helper: match a specific token kind and yield the full token
pub(crate) fn token(
    tokens: &Tokens,
    kind: TokenKind,
) -> impl Parser<TokenKind, Token, Error = ParserError> + Clone {
    let tokens = tokens.clone();
    just(kind).map_with_span(move |_, span: Range<usize>| tokens[span.start].clone())
}

/// Text := (InlineText Space*)+
pub(crate) fn text(tokens: &Tokens) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, TokenKind::InlineText)
        .then(token(tokens, TokenKind::Space).repeated())
        .repeated()
        .at_least(1)
        .map(|words: Vec<(Token, Vec<Token>)>| {
            let mut node = CstNode::new(Rule::Text);
            for (word, spaces) in words {
                node.push_token(word);
                node.push_tokens(spaces);
            }
            node
        })
}

/// Headline := Newline Headline Space* Text
pub(crate) fn headline(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, TokenKind::Newline)
        .then(token(tokens, TokenKind::Headline))
        .then(token(tokens, TokenKind::Space).repeated())
        .then(text(tokens))
        .map(|(((newline, marker), spaces), text)| {
            let mut node = CstNode::new(Rule::Headline);
            node.push_token(newline);
            node.push_token(marker);
            node.push_tokens(spaces);
            node.push_node(text);
            node
        })
}

pub(crate) fn empty_line(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, TokenKind::EmptyLine).map(|blank| {
        let mut node = CstNode::new(Rule::EmptyLine);
        node.push_token(blank);
        node
    })
}

/// Paragraph := (Newline Space* Text)+
///
/// Leading spaces stay direct children of the paragraph; all other spaces belong to a Text.
pub(crate) fn paragraph(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, TokenKind::Newline)
        .then(token(tokens, TokenKind::Space).repeated())
        .then(text(tokens))
        .repeated()
        .at_least(1)
        .map(|lines: Vec<((Token, Vec<Token>), CstNode)>| {
            let mut node = CstNode::new(Rule::Paragraph);
            for ((newline, indent), text) in lines {
                node.push_token(newline);
                node.push_tokens(indent);
                node.push_node(text);
            }
            node
        })
}

/// AttributeValue := StringStart [StringText (Space StringText)*] StringEnd | AttributeInlineText
pub(crate) fn attribute_value(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    let words = token(tokens, TokenKind::StringText).then(
        token(tokens, TokenKind::Space)
            .then(token(tokens, TokenKind::StringText))
            .repeated(),
    );

    let quoted = token(tokens, TokenKind::StringStart)
        .then(words.or_not())
        .then(token(tokens, TokenKind::StringEnd))
        .map(|((start, words), end)| {
            let mut node = CstNode::new(Rule::AttributeValue);
            node.push_token(start);
            if let Some((first, rest)) = words {
                node.push_token(first);
                for (space, word) in rest {
                    node.push_token(space);
                    node.push_token(word);
                }
            }
            node.push_token(end);
            node
        });

    let bare = token(tokens, TokenKind::AttributeInlineText).map(|value| {
        let mut node = CstNode::new(Rule::AttributeValue);
        node.push_token(value);
        node
    });

    quoted.or(bare)
}

/// AttributeEntry := [AttributeInlineText Assignment] AttributeValue
pub(crate) fn attribute_entry(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, TokenKind::AttributeInlineText)
        .then(token(tokens, TokenKind::Assignment))
        .or_not()
        .then(attribute_value(tokens))
        .map(|(key, value)| {
            let mut node = CstNode::new(Rule::AttributeEntry);
            if let Some((key, assignment)) = key {
                node.push_token(key);
                node.push_token(assignment);
            }
            node.push_node(value);
            node
        })
}

/// One or more `marker AttributeInlineText` pairs sharing the same marker
fn shorthand_run(
    tokens: &Tokens,
    marker: TokenKind,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, marker)
        .then(token(tokens, TokenKind::AttributeInlineText))
        .repeated()
        .at_least(1)
        .map(|pairs: Vec<(Token, Token)>| {
            let mut node = CstNode::new(Rule::AttributeEntryShorthand);
            for (marker, value) in pairs {
                node.push_token(marker);
                node.push_token(value);
            }
            node
        })
}

/// AttributeEntryShorthand := `[` text `]` | (`#` text)+ | (`.` text)+ | (`%` text)+
pub(crate) fn attribute_entry_shorthand(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    let legacy = token(tokens, TokenKind::LegacyIdStart)
        .then(token(tokens, TokenKind::AttributeInlineText))
        .then(token(tokens, TokenKind::LegacyIdEnd))
        .map(|((start, value), end)| {
            let mut node = CstNode::new(Rule::AttributeEntryShorthand);
            node.push_token(start);
            node.push_token(value);
            node.push_token(end);
            node
        });

    choice((
        legacy,
        shorthand_run(tokens, TokenKind::IdShorthand),
        shorthand_run(tokens, TokenKind::RoleShorthand),
        shorthand_run(tokens, TokenKind::OptionShorthand),
    ))
}

/// AttributeList := `[` (Shorthand | Entry (`,` Entry)*)* `]`
pub(crate) fn attribute_list(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    let entries = attribute_entry(tokens)
        .then(
            token(tokens, TokenKind::Comma)
                .then(attribute_entry(tokens))
                .repeated(),
        )
        .map(|(first, rest)| {
            let mut run = vec![ListItem::Entry(first)];
            for (comma, entry) in rest {
                run.push(ListItem::Comma(comma));
                run.push(ListItem::Entry(entry));
            }
            run
        });

    let item = attribute_entry_shorthand(tokens)
        .map(|shorthand| vec![ListItem::Entry(shorthand)])
        .or(entries);

    token(tokens, TokenKind::AttributeListStart)
        .then(item.repeated())
        .then(token(tokens, TokenKind::AttributeListEnd))
        .map(|((start, items), end)| {
            let mut node = CstNode::new(Rule::AttributeList);
            node.push_token(start);
            for item in items.into_iter().flatten() {
                match item {
                    ListItem::Entry(entry) => node.push_node(entry),
                    ListItem::Comma(comma) => node.push_token(comma),
                }
            }
            node.push_token(end);
            node
        })
}

#[derive(Debug, Clone)]
enum ListItem {
    Entry(CstNode),
    Comma(Token),
}

/// AttributeBlock := Newline AttributeList
pub(crate) fn attribute_block(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    token(tokens, TokenKind::Newline)
        .then(attribute_list(tokens))
        .map(|(newline, list)| {
            let mut node = CstNode::new(Rule::AttributeBlock);
            node.push_token(newline);
            node.push_node(list);
            node
        })
}

/// Document := (Headline | AttributeBlock | Paragraph | EmptyLine)* [Newline] EOF
///
/// The trailing lone Newline is what a blank document lexes to.
pub(crate) fn document(
    tokens: &Tokens,
) -> impl Parser<TokenKind, CstNode, Error = ParserError> + Clone {
    choice((
        headline(tokens),
        attribute_block(tokens),
        paragraph(tokens),
        empty_line(tokens),
    ))
    .repeated()
    .then(token(tokens, TokenKind::Newline).or_not())
    .then_ignore(end())
    .map(|(blocks, trailing)| {
        let mut node = CstNode::new(Rule::Document);
        for block in blocks {
            node.push_node(block);
        }
        if let Some(newline) = trailing {
            node.push_token(newline);
        }
        node
    })
}
