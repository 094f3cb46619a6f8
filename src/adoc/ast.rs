//! AST definitions for AsciiDoc documents
//!
//!     This module provides the typed, immutable tree the printer works from, along with
//!     span tracking and the [AstNode] trait for uniform traversal.
//!
//!     See [elements] for the node types.
//!
//! How Location Tracking Works
//!
//!     The lexer pairs every token with a byte range into the normalized source. The parser
//!     gives every CST node the union of the ranges it consumed, and the builder copies those
//!     unions onto AST nodes as [Span]s:
//!
//!         Source: "\n= Title"
//!         Tokens: Newline 0..1, Headline 1..2, Space 2..3, InlineText 3..8
//!         AST:    Headline 0..8 { Text 3..8 }
//!
//!     Spans are never recomputed after the parse. Use [SourceLocation] to turn an offset into
//!     a line and column.

pub mod elements;
pub mod range;
pub mod traits;

pub use elements::{
    Attribute, AttributeBlock, AttributeList, AttributeValue, Block, Document, EmptyLine,
    Headline, Paragraph, Text,
};
pub use range::{Position, SourceLocation, Span};
pub use traits::AstNode;
