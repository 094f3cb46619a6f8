//! Document element
//!
//! The root of the tree: an ordered sequence of blocks. Blocks do not nest, so the tree is at
//! most five levels deep (root, attribute block, list, attribute, value).

use super::super::range::Span;
use super::super::traits::AstNode;
use super::attribute::AttributeBlock;
use super::headline::Headline;
use super::paragraph::{EmptyLine, Paragraph};
use serde::Serialize;
use std::fmt;

/// A top-level block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Headline(Headline),
    Paragraph(Paragraph),
    EmptyLine(EmptyLine),
    AttributeBlock(AttributeBlock),
}

impl Block {
    pub fn as_node(&self) -> &dyn AstNode {
        match self {
            Block::Headline(headline) => headline,
            Block::Paragraph(paragraph) => paragraph,
            Block::EmptyLine(empty) => empty,
            Block::AttributeBlock(block) => block,
        }
    }

    pub fn as_headline(&self) -> Option<&Headline> {
        match self {
            Block::Headline(headline) => Some(headline),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_attribute_block(&self) -> Option<&AttributeBlock> {
        match self {
            Block::AttributeBlock(block) => Some(block),
            _ => None,
        }
    }

    pub fn is_empty_line(&self) -> bool {
        matches!(self, Block::EmptyLine(_))
    }
}

impl From<Headline> for Block {
    fn from(headline: Headline) -> Self {
        Block::Headline(headline)
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<EmptyLine> for Block {
    fn from(empty: EmptyLine) -> Self {
        Block::EmptyLine(empty)
    }
}

impl From<AttributeBlock> for Block {
    fn from(block: AttributeBlock) -> Self {
        Block::AttributeBlock(block)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "root")]
pub struct Document {
    pub children: Vec<Block>,
    pub location: Span,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Self {
            children,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over all headlines in document order
    pub fn headlines(&self) -> impl Iterator<Item = &Headline> {
        self.children.iter().filter_map(Block::as_headline)
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Root"
    }

    fn display_label(&self) -> String {
        format!("Document ({} blocks)", self.children.len())
    }

    fn location(&self) -> Span {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.children.iter().map(Block::as_node).collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} blocks)", self.children.len())
    }
}
