//! Error types for the formatting pipeline
//!
//! Every stage fails with its own error kind and every kind aborts the whole `parse` or
//! `print` call: there is no partial output and no recovery. The public entry points
//! return [FormatError], which wraps the stage errors.

use crate::adoc::ast::range::Position;
use crate::adoc::lexing::Mode;
use crate::adoc::parsing::Rule;
use crate::adoc::token::{Token, TokenKind};
use thiserror::Error;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No token of the active mode matches at the offset
    #[error("Lexing error at {position} (offset {offset}): no {mode} token matches {snippet:?}")]
    NoMatch {
        offset: usize,
        position: Position,
        mode: Mode,
        snippet: String,
    },
    /// `[[id]]` brackets were found while legacy id support is switched off
    #[error("Lexing error at {position} (offset {offset}): legacy [[id]] brackets are disabled")]
    LegacyIdDisabled { offset: usize, position: Position },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::NoMatch { offset, .. } | LexError::LegacyIdDisabled { offset, .. } => {
                *offset
            }
        }
    }
}

/// The grammar found no viable alternative, or a mandatory token was missing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error at {position} (offset {offset}): expected one of [{}], found {}", .expected.join(", "), found_label(.found))]
pub struct SyntaxError {
    /// The offending token, `None` at end of input
    pub found: Option<Token>,
    pub offset: usize,
    pub position: Position,
    /// Sorted, de-duplicated token names; end of input is `"end of input"`
    pub expected: Vec<String>,
}

fn found_label(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

/// A well-formed tree violated one of the builder's invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalConsistencyError {
    #[error("Internal error: CST node {rule} has no resolvable source span")]
    MissingSpan { rule: Rule },
    #[error("Internal error: CST node {rule} has no {kind} token")]
    MissingToken { rule: Rule, kind: TokenKind },
    #[error("Internal error: CST node {rule} has no {child} child")]
    MissingChild { rule: Rule, child: Rule },
    #[error("Internal error: unexpected {found} node under {parent}")]
    UnexpectedNode { parent: Rule, found: Rule },
}

/// Errors that can occur while loading a [Config](crate::adoc::config::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse formatter configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// The single error value handed to callers of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Internal(#[from] InternalConsistencyError),
}
