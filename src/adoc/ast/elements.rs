//! Element-specific AST node definitions
//!
//!     The element set is closed: a document is a flat sequence of blocks and every block is
//!     one of four kinds.
//!
//!         - Headlines: a level and a line of text. See [headline](headline).
//!         - Paragraphs: one or more lines of text, optionally literal. See [paragraph](paragraph).
//!         - Empty lines: a blank line between blocks. See [paragraph](paragraph).
//!         - Attribute blocks: a bracketed attribute list on its own line. See [attribute](attribute).
//!
//!     Every node owns its children, there are no back references, and every node carries the
//!     byte span of the source it was built from.

pub mod attribute;
pub mod document;
pub mod headline;
pub mod paragraph;
pub mod text;

pub use attribute::{Attribute, AttributeBlock, AttributeList, AttributeValue};
pub use document::{Block, Document};
pub use headline::Headline;
pub use paragraph::{EmptyLine, Paragraph};
pub use text::Text;
