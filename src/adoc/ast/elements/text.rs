//! Text element
//!
//! A run of words on one line. Only the words are kept: the width of the gaps between them is
//! formatting, and the printer joins them back with single spaces.

use super::super::range::Span;
use super::super::traits::{truncate_label, AstNode};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct Text {
    pub words: Vec<String>,
    pub location: Span,
}

impl Text {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }

    /// The words joined by single spaces
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        truncate_label(&self.joined(), 50)
    }

    fn location(&self) -> Span {
        self.location
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text('{}')", self.joined())
    }
}
