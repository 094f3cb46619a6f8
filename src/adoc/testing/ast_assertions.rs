//! Fluent assertion API for AST nodes
//!
//!     Tests describe what a document should contain instead of walking the node structs by
//!     hand, so a change to the AST layout only touches this module:
//!
//!     ```rust,ignore
//!     assert_ast(&doc)
//!         .item_count(2)
//!         .item(0, |item| {
//!             item.assert_headline().level(0).text("My Document");
//!         })
//!         .item(1, |item| {
//!             item.assert_attribute_block().attribute("id", &["main"]);
//!         });
//!     ```

use crate::adoc::ast::{AstNode, AttributeList, Block, Document, Headline, Paragraph};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_items(items: &[Block]) -> String {
    items
        .iter()
        .map(|item| item.as_node().node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of blocks in the document
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(&self.doc.children)
        );
        self
    }

    /// Assert the node types of all blocks, in order
    pub fn item_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .doc
            .children
            .iter()
            .map(|item| item.as_node().node_type())
            .collect();
        assert_eq!(actual, expected, "Unexpected block sequence");
        self
    }

    /// Assert on a specific block by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.children.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.children.len()
        );

        assertion(BlockAssertion {
            item: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }
}

pub struct BlockAssertion<'a> {
    item: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn assert_headline(self) -> HeadlineAssertion<'a> {
        match self.item {
            Block::Headline(headline) => HeadlineAssertion {
                headline,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Headline, found {}",
                self.context,
                other.as_node().node_type()
            ),
        }
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.item {
            Block::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Paragraph, found {}",
                self.context,
                other.as_node().node_type()
            ),
        }
    }

    pub fn assert_empty_line(self) {
        assert!(
            self.item.is_empty_line(),
            "{}: Expected EmptyLine, found {}",
            self.context,
            self.item.as_node().node_type()
        );
    }

    pub fn assert_attribute_block(self) -> AttributeListAssertion<'a> {
        match self.item {
            Block::AttributeBlock(block) => AttributeListAssertion {
                list: &block.list,
                context: self.context,
            },
            other => panic!(
                "{}: Expected AttributeBlock, found {}",
                self.context,
                other.as_node().node_type()
            ),
        }
    }
}

pub struct HeadlineAssertion<'a> {
    headline: &'a Headline,
    context: String,
}

impl<'a> HeadlineAssertion<'a> {
    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.headline.level, expected,
            "{}: Expected headline level {}, found {}",
            self.context, expected, self.headline.level
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        let actual = self.headline.text.joined();
        assert_eq!(
            actual, expected,
            "{}: Expected headline text {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
}

pub struct ParagraphAssertion<'a> {
    para: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.para.lines.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {} lines",
            self.context, expected, actual
        );
        self
    }

    /// Assert the words of one line, joined by single spaces
    pub fn line(self, index: usize, expected: &str) -> Self {
        let actual = self
            .para
            .lines
            .get(index)
            .map(|line| line.joined())
            .unwrap_or_else(|| panic!("{}: No line at index {}", self.context, index));
        assert_eq!(
            actual, expected,
            "{}: Unexpected text on line {}",
            self.context, index
        );
        self
    }

    pub fn literal(self, expected: bool) -> Self {
        assert_eq!(
            self.para.is_literal, expected,
            "{}: Expected is_literal = {}",
            self.context, expected
        );
        self
    }
}

pub struct AttributeListAssertion<'a> {
    list: &'a AttributeList,
    context: String,
}

impl<'a> AttributeListAssertion<'a> {
    pub fn attribute_count(self, expected: usize) -> Self {
        let actual = self.list.attributes.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} attributes, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the values of the first attribute with the given key
    pub fn attribute(self, key: &str, values: &[&str]) -> Self {
        let attribute = self
            .list
            .get(key)
            .unwrap_or_else(|| panic!("{}: No attribute with key {:?}", self.context, key));
        assert_eq!(
            attribute.value.values, values,
            "{}: Unexpected values for {:?}",
            self.context, key
        );
        self
    }

    /// Assert the values of a positional attribute by index
    pub fn positional(self, index: usize, values: &[&str]) -> Self {
        let attribute = self
            .list
            .attributes
            .get(index)
            .unwrap_or_else(|| panic!("{}: No attribute at index {}", self.context, index));
        assert_eq!(
            attribute.key, None,
            "{}: Attribute {} has a key",
            self.context, index
        );
        assert_eq!(attribute.value.values, values);
        self
    }
}
