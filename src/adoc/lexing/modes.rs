//! Lexical modes and their token tables
//!
//!     Each mode is a logos table. The meaning of `[`, `]`, `"`, `=` and friends depends on
//!     which mode is active, so every table only lists the tokens valid in its context.
//!     The tables are compiled into static DFAs at build time and never change afterwards.
//!
//!     Logos picks the longest match, whereas the grammar of the format is defined in terms
//!     of an ordered first-match rule. The tables below are written so that both agree: text
//!     patterns never start with a character that has its own token in the same mode, and no
//!     two patterns share a prefix. Logos does not fall back from a failed longer match to a
//!     shorter one, so a pattern such as `\n[ \t]*\n` next to `\n` would reject every newline
//!     followed by indentation. The conditions that need context (a Headline must follow a
//!     newline, an EmptyLine must be followed by one, a string must close on the same line) are
//!     enforced by the [tokenizer](super::tokenizer) driver, which may reclassify or extend a
//!     match.

use crate::adoc::token::TokenKind;
use logos::Logos;
use std::fmt;

/// Tokens recognized at the top level of the document
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootToken {
    // Only a Headline when preceded by a newline; the driver demotes it otherwise
    #[regex(r"=+")]
    Headline,

    #[token("[")]
    AttributeListStart,

    #[token(" ")]
    Space,

    // An EmptyLine when only blanks follow up to the next newline; the driver decides
    #[token("\n")]
    Newline,

    #[token("\t")]
    Tab,

    #[regex(r"[^\s\[=][^\s]*")]
    InlineText,
}

/// Tokens recognized between `[` and `]`
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttributeListToken {
    #[token("]")]
    AttributeListEnd,

    #[token("[")]
    LegacyIdStart,

    #[token(",")]
    Comma,

    // A StringStart only if the string closes on the same line
    #[token("\"")]
    Quote,

    #[token("=")]
    Assignment,

    #[token("%")]
    OptionShorthand,

    #[token("#")]
    IdShorthand,

    #[token(".")]
    RoleShorthand,

    #[regex(r#"[^\s,=\[\]\.%#"][^\s,=\[\]\.%#]*"#)]
    AttributeInlineText,
}

/// Tokens recognized inside the inner brackets of `[[identifier]]`
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LegacyIdToken {
    #[token("]")]
    LegacyIdEnd,

    #[regex(r"[^\s,=\[\]\.%#]+")]
    AttributeInlineText,
}

/// Tokens recognized inside a quoted attribute value
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringToken {
    #[token("\"")]
    StringEnd,

    #[token(" ")]
    Space,

    #[regex(r#"[^"\s]+"#)]
    StringText,
}

/// Identifier of a lexical context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Root,
    AttributeList,
    LegacyId,
    String,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::AttributeList => "attribute-list",
            Mode::LegacyId => "legacy-id",
            Mode::String => "string",
        }
    }

    /// Token kinds of this mode, in declared order
    pub fn token_kinds(&self) -> &'static [TokenKind] {
        match self {
            Mode::Root => &[
                TokenKind::Headline,
                TokenKind::AttributeListStart,
                TokenKind::Space,
                TokenKind::EmptyLine,
                TokenKind::Newline,
                TokenKind::Tab,
                TokenKind::InlineText,
            ],
            Mode::AttributeList => &[
                TokenKind::AttributeListEnd,
                TokenKind::LegacyIdStart,
                TokenKind::Comma,
                TokenKind::StringStart,
                TokenKind::Assignment,
                TokenKind::OptionShorthand,
                TokenKind::IdShorthand,
                TokenKind::RoleShorthand,
                TokenKind::AttributeInlineText,
            ],
            Mode::LegacyId => &[TokenKind::LegacyIdEnd, TokenKind::AttributeInlineText],
            Mode::String => &[TokenKind::StringEnd, TokenKind::StringText, TokenKind::Space],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of active modes. The root mode sits at the bottom and is never popped.
#[derive(Debug, Clone)]
pub struct ModeStack {
    modes: Vec<Mode>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self {
            modes: vec![Mode::Root],
        }
    }

    pub fn current(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Root)
    }

    pub fn push(&mut self, mode: Mode) {
        self.modes.push(mode);
    }

    /// Pop the innermost mode. Returns `None` (and keeps the stack) when only root is left.
    pub fn pop(&mut self) -> Option<Mode> {
        if self.modes.len() > 1 {
            self.modes.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.modes.len()
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}
