//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST with one line per node, which makes it easy
//! to scan a tree and to snapshot it in tests. Nesting is encoded as indentation with tree
//! connectors, two columns per level:
//!
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (3 blocks)
//! ├─ § = Title
//! │  └─ ↵ Title
//! ├─ ␤
//! └─ ▣ 1 attributes
//!    └─ ☰ [id]
//!       └─ • id=["main"]
//!          └─ ◦ ["main"]
//!
//! Icons
//!     Root: ⧉
//!     Headline: §
//!     Paragraph: ¶
//!     Text: ↵
//!     EmptyLine: ␤
//!     AttributeBlock: ▣
//!     AttributeList: ☰
//!     Attribute: •
//!     AttributeValue: ◦

use crate::adoc::ast::{AstNode, Document};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Root" => "⧉",
        "Headline" => "§",
        "Paragraph" => "¶",
        "Text" => "↵",
        "EmptyLine" => "␤",
        "AttributeBlock" => "▣",
        "AttributeList" => "☰",
        "Attribute" => "•",
        "AttributeValue" => "◦",
        _ => "○",
    }
}

fn node_line(node: &dyn AstNode) -> String {
    let label = truncate(&node.display_label(), 30);
    if label.is_empty() {
        get_icon(node.node_type()).to_string()
    } else {
        format!("{} {}", get_icon(node.node_type()), label)
    }
}

fn format_node(node: &dyn AstNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{}{} {}\n", prefix, connector, node_line(node)));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    format_children(node, &child_prefix, output);
}

fn format_children(node: &dyn AstNode, prefix: &str, output: &mut String) {
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        format_node(child, prefix, i + 1 == count, output);
    }
}

/// Render a document as a treeviz string
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("{}\n", node_line(doc));
    format_children(doc, "", &mut output);
    output
}
