//! # adocfmt
//!
//! A parser and canonical formatter for a lightweight AsciiDoc subset: headlines, blank lines,
//! paragraphs (plain and literal) and attribute lists/blocks.
//!
//! File Layout
//!
//! All functionality lives under the [adoc] module, one sibling module per pipeline stage:
//! src/adoc
//!   ├── lexing      Mode-aware tokenization (logos tables + mode stack driver)
//!   ├── parsing     Grammar (chumsky) producing the concrete syntax tree
//!   ├── building    CST to AST reduction
//!   ├── ast         The typed, immutable AST and source spans
//!   └── formats     The canonical printer and inspection formats
//!
//! The contract between the stages is text -> tokens -> CST -> AST -> text, and the whole
//! pipeline is idempotent: formatting already formatted text is a no-op.
//!
//! For the testing helpers, see the [testing module](adoc::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod adoc;

pub use adoc::ast::Document;
pub use adoc::config::{AttributeFormat, Config};
pub use adoc::error::FormatError;
pub use adoc::pipeline::{format, parse, parse_with_config, print};
