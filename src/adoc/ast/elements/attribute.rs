//! Attribute elements
//!
//!     An attribute block is a line holding a bracketed attribute list, `[...]`. The list
//!     carries formal entries (`key=value`, or a bare positional `value`) and shorthand
//!     entries (`#id`, `.role`, `%option`, and the legacy `[[id]]` form).
//!
//!     The AST does not remember which surface form was used. Shorthands become attributes
//!     keyed `id`, `role` and `option`, and all values of one shorthand kind within a list
//!     are gathered into a single attribute. Quoting is also dropped: a value is the list of
//!     its words and the printer decides whether to quote.

use super::super::range::Span;
use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// Canonical keys of the shorthand forms
pub const ID_KEY: &str = "id";
pub const ROLE_KEY: &str = "role";
pub const OPTION_KEY: &str = "option";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "attributeBlock")]
pub struct AttributeBlock {
    pub list: AttributeList,
    pub location: Span,
}

impl AttributeBlock {
    pub fn new(list: AttributeList) -> Self {
        Self {
            list,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for AttributeBlock {
    fn node_type(&self) -> &'static str {
        "AttributeBlock"
    }

    fn display_label(&self) -> String {
        format!("{} attributes", self.list.attributes.len())
    }

    fn location(&self) -> Span {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        vec![&self.list as &dyn AstNode]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "attributeList")]
pub struct AttributeList {
    pub attributes: Vec<Attribute>,
    pub location: Span,
}

impl AttributeList {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }

    /// First attribute with the given key
    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key.as_deref() == Some(key))
    }
}

impl AstNode for AttributeList {
    fn node_type(&self) -> &'static str {
        "AttributeList"
    }

    fn display_label(&self) -> String {
        let keys: Vec<&str> = self
            .attributes
            .iter()
            .map(|attribute| attribute.key.as_deref().unwrap_or("_"))
            .collect();
        format!("[{}]", keys.join(", "))
    }

    fn location(&self) -> Span {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.attributes
            .iter()
            .map(|attribute| attribute as &dyn AstNode)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "attribute")]
pub struct Attribute {
    /// `None` for a positional value
    pub key: Option<String>,
    pub value: AttributeValue,
    pub location: Span,
}

impl Attribute {
    pub fn new(key: Option<String>, value: AttributeValue) -> Self {
        Self {
            key,
            value,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Attribute {
    fn node_type(&self) -> &'static str {
        "Attribute"
    }

    fn display_label(&self) -> String {
        match &self.key {
            Some(key) => format!("{}={}", key, self.value.display_label()),
            None => self.value.display_label(),
        }
    }

    fn location(&self) -> Span {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        vec![&self.value as &dyn AstNode]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attribute({})", self.display_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "attributeValue")]
pub struct AttributeValue {
    pub values: Vec<String>,
    pub location: Span,
}

impl AttributeValue {
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            location: Span::UNRESOLVED,
        }
    }

    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for AttributeValue {
    fn node_type(&self) -> &'static str {
        "AttributeValue"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.values)
    }

    fn location(&self) -> Span {
        self.location
    }
}
