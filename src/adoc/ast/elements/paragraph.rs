//! Paragraph and empty line elements
//!
//! A paragraph is a block of one or more text lines. It runs until a line that starts
//! something else: a headline, an attribute block or an empty line.
//!
//! Parsing Structure:
//!
//! | Element   | Head             | Tail                                |
//! |-----------|------------------|-------------------------------------|
//! | Paragraph | Newline, Space*  | Text, repeated line by line         |
//! | EmptyLine | `\n` + blanks    | followed by the next line's newline |
//!
//! Literal Paragraphs:
//!
//!     When any line of a paragraph starts with a space the whole paragraph is literal and
//!     is printed with a fixed indent on every line. The original indent width is not kept.

use super::super::range::Span;
use super::super::traits::{truncate_label, AstNode};
use super::text::Text;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "paragraph", rename_all = "camelCase")]
pub struct Paragraph {
    pub lines: Vec<Text>,
    pub is_literal: bool,
    pub location: Span,
}

impl Paragraph {
    pub fn new(lines: Vec<Text>, is_literal: bool) -> Self {
        Self {
            lines,
            is_literal,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        let first = self.lines.first().map(Text::joined).unwrap_or_default();
        let kind = if self.is_literal { "literal, " } else { "" };
        format!(
            "{} ({}{} lines)",
            truncate_label(&first, 30),
            kind,
            self.lines.len()
        )
    }

    fn location(&self) -> Span {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.lines.iter().map(|line| line as &dyn AstNode).collect()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} lines)", self.lines.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "emptyLine")]
pub struct EmptyLine {
    pub location: Span,
}

impl EmptyLine {
    pub fn new() -> Self {
        Self {
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }
}

impl Default for EmptyLine {
    fn default() -> Self {
        Self::new()
    }
}

impl AstNode for EmptyLine {
    fn node_type(&self) -> &'static str {
        "EmptyLine"
    }

    fn display_label(&self) -> String {
        String::new()
    }

    fn location(&self) -> Span {
        self.location
    }
}
