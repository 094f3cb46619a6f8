//! Core token types shared across the lexer, parser, and tooling.
//!
//!     Every lexical mode has its own logos table (see [modes](crate::adoc::lexing::modes)),
//!     but they all emit the single closed [TokenKind] enum defined here, so the parser
//!     works over one alphabet regardless of which mode produced a token.
//!
//! Token Layers
//!
//!     Root Tokens:
//!         Headline, AttributeListStart, Space, EmptyLine, Newline, Tab, InlineText.
//!
//!     Attribute List Tokens:
//!         AttributeListEnd, LegacyIdStart, Comma, StringStart, Assignment, the three
//!         shorthand markers (`#`, `.`, `%`) and AttributeInlineText.
//!
//!     Legacy Id Tokens:
//!         LegacyIdEnd and AttributeInlineText, for the `[[identifier]]` form.
//!
//!     String Tokens:
//!         StringEnd, StringText and Space.
//!
//!     Byte ranges are preserved exactly as the lexer matched them. They index into the
//!     normalized source the lexer ran over and are never rewritten by later stages.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// All token kinds produced by any lexical mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenKind {
    // Root mode
    Headline,
    AttributeListStart,
    Space,
    EmptyLine,
    Newline,
    Tab,
    InlineText,

    // Attribute list mode
    AttributeListEnd,
    LegacyIdStart,
    Comma,
    StringStart,
    Assignment,
    OptionShorthand,
    IdShorthand,
    RoleShorthand,
    AttributeInlineText,

    // Legacy id mode
    LegacyIdEnd,

    // String mode
    StringEnd,
    StringText,
}

impl TokenKind {
    /// Stable display name, used in verbose token dumps and in syntax errors
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Headline => "Headline",
            TokenKind::AttributeListStart => "AttributeListStart",
            TokenKind::Space => "Space",
            TokenKind::EmptyLine => "EmptyLine",
            TokenKind::Newline => "Newline",
            TokenKind::Tab => "Tab",
            TokenKind::InlineText => "InlineText",
            TokenKind::AttributeListEnd => "AttributeListEnd",
            TokenKind::LegacyIdStart => "LegacyIdStart",
            TokenKind::Comma => "Comma",
            TokenKind::StringStart => "StringStart",
            TokenKind::Assignment => "Assignment",
            TokenKind::OptionShorthand => "AttributeOptionShorthand",
            TokenKind::IdShorthand => "AttributeIdShorthand",
            TokenKind::RoleShorthand => "AttributeRoleShorthand",
            TokenKind::AttributeInlineText => "AttributeInlineText",
            TokenKind::LegacyIdEnd => "LegacyIdEnd",
            TokenKind::StringEnd => "StringEnd",
            TokenKind::StringText => "StringText",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its raw text and byte range
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display_shows_kind_and_image() {
        let token = Token::new(TokenKind::Headline, "==", 1..3);
        assert_eq!(token.to_string(), "Headline(\"==\")");
        assert_eq!(token.start(), 1);
        assert_eq!(token.end(), 3);
    }
}
