//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common trait that provides uniform access to AST node
//! information across all node types. Tree renderings and span checks walk the tree
//! through it instead of matching on every element type.

use super::range::Span;

/// Common interface for all AST nodes
pub trait AstNode {
    /// The node's variant name: `Root`, `Headline`, `Paragraph`...
    fn node_type(&self) -> &'static str;

    /// Short human-readable summary of the node's content
    fn display_label(&self) -> String;

    fn location(&self) -> Span;

    /// Direct children in document order
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
}

/// Truncate a label to a fixed number of characters
pub(crate) fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() > max {
        format!("{}…", label.chars().take(max).collect::<String>())
    } else {
        label.to_string()
    }
}
