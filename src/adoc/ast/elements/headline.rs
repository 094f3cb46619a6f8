//! Headline element
//!
//! A line starting with a run of `=` markers. The number of markers minus one is the level,
//! so `= Title` is the document title at level 0 and `== Section` is level 1.
//!
//! Parsing Structure:
//!
//! | Element  | Head                 | Tail |
//! |----------|----------------------|------|
//! | Headline | Newline, `=`+, Space | Text |

use super::super::range::Span;
use super::super::traits::AstNode;
use super::text::Text;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "headline")]
pub struct Headline {
    pub level: usize,
    pub text: Text,
    pub location: Span,
}

impl Headline {
    pub fn new(level: usize, text: Text) -> Self {
        Self {
            level,
            text,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }

    /// The `=` run that renders this level
    pub fn marker(&self) -> String {
        "=".repeat(self.level + 1)
    }
}

impl AstNode for Headline {
    fn node_type(&self) -> &'static str {
        "Headline"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.marker(), self.text.display_label())
    }

    fn location(&self) -> Span {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        vec![&self.text as &dyn AstNode]
    }
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Headline(level={}, '{}')", self.level, self.text.joined())
    }
}
