//! Lexer
//!
//! This module turns normalized source text into the flat token stream the parser consumes.
//!
//! Structure:
//!     Every lexical mode is a logos table in [modes]. The [tokenizer] drives them with an
//!     explicit [ModeStack]: a `[` at the start of a token pushes the attribute-list mode, a
//!     `"` with a closing partner pushes the string mode and so on, while closing tokens pop.
//!     The root mode is never popped.
//!
//! Line-start Conditions
//!
//!     Headlines are only recognized directly after a newline. The pipeline prefixes every
//!     document with a single `\n` so the first line is no exception. A `=` run anywhere else
//!     is ordinary text. A `[` always opens an attribute list, and the grammar only accepts one
//!     at the start of a line, so `see [1] here` is a syntax error.
//!
//! Legacy Ids
//!
//!     The `[[identifier]]` form is supported by a dedicated legacy-id mode. It can be
//!     switched off through [LexerOptions], in which case a nested `[` is a lexing error.

pub mod modes;
pub mod tokenizer;

pub use modes::{Mode, ModeStack};
pub use tokenizer::{tokenize, tokenize_with};

/// Switches that change what the lexer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Accept `[[identifier]]` inside attribute lists
    pub legacy_id_brackets: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            legacy_id_brackets: true,
        }
    }
}
