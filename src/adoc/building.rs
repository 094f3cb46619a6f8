//! AST building
//!
//!     Reduces the concrete syntax tree to the typed AST. This is where surface syntax is
//!     forgotten: heading markers become a level, quoting and word gaps disappear, and the
//!     shorthand and formal attribute notations collapse into one keyed shape.
//!
//!     Spans are copied from the CST, never recomputed.

pub mod ast_builder;

pub use ast_builder::AstBuilder;

use crate::adoc::ast::Document;
use crate::adoc::error::InternalConsistencyError;
use crate::adoc::parsing::CstNode;
use tracing::debug;

/// Build the AST of a whole document
pub fn build_document(cst: &CstNode) -> Result<Document, InternalConsistencyError> {
    let document = AstBuilder::new().build(cst)?;
    debug!(
        blocks = document.children.len(),
        location = %document.location,
        "built document AST"
    );
    Ok(document)
}
