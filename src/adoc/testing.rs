//! Testing utilities shared by unit and integration tests
//!
//!     - [ast_assertions]: the fluent `assert_ast` API for checking documents.
//!     - Token helpers: lex a snippet and get kinds or `(kind, text)` pairs back.
//!     - Formatting helpers: format with a config and check the output is a fixed point.
//!
//!     These helpers panic on failure, they are meant for tests only.

pub mod ast_assertions;

pub use ast_assertions::assert_ast;

use crate::adoc::config::Config;
use crate::adoc::lexing::tokenize;
use crate::adoc::pipeline::format;
use crate::adoc::token::TokenKind;

/// Lex already-normalized source and return the token kinds
pub fn token_kinds(source: &str) -> Vec<TokenKind> {
    lex_helper(source)
        .into_iter()
        .map(|(kind, _)| kind)
        .collect()
}

/// Lex already-normalized source and return `(kind, text)` pairs
pub fn lex_helper(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap_or_else(|err| panic!("lexing {:?} failed: {}", source, err))
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

/// Format text, panicking with the error message on failure
pub fn format_str(text: &str, config: &Config) -> String {
    format(text, config).unwrap_or_else(|err| panic!("formatting {:?} failed: {}", text, err))
}

/// Format text twice and check the second pass changes nothing; returns the output
pub fn assert_idempotent(text: &str, config: &Config) -> String {
    let once = format_str(text, config);
    let twice = format_str(&once, config);
    assert_eq!(
        twice, once,
        "formatting is not idempotent for {:?} with {:?}",
        text, config
    );
    once
}
