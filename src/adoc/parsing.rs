//! Parser
//!
//! Turns the token stream into a concrete syntax tree.
//!
//!     The grammar is an ordered-choice grammar written with chumsky combinators in
//!     [grammar]. A document is a sequence of blocks, each starting at a newline:
//!
//!         Document       := (Headline | AttributeBlock | Paragraph | EmptyLine)* EOF
//!         Headline       := Newline Headline Space* Text
//!         AttributeBlock := Newline AttributeList
//!         Paragraph      := (Newline Space* Text)+
//!         EmptyLine      := EmptyLine
//!
//!     Alternatives are tried in the order written and the first match wins, so a line
//!     starting with `=` or `[` is never claimed by a paragraph.
//!
//!     The CST ([cst]) keeps every consumed token. Reducing it to the typed AST is the job of
//!     the [building](crate::adoc::building) module.

pub mod api;
pub mod cst;
pub mod grammar;

pub use api::parse_to_cst;
pub use cst::{CstElement, CstNode, Rule, Slot};
