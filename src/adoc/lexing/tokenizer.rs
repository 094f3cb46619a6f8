//! Mode-stack tokenizer
//!
//! This is where source strings become token streams. At every offset the driver runs the
//! logos table of the current mode over the remaining input and keeps the first token it
//! produces, then applies the conditions logos cannot express:
//!
//! - A `=` run only starts a Headline directly after a newline. Anywhere else it is
//!   InlineText, extended to the end of the non-whitespace run.
//! - A `[` at the start of a token opens an attribute list wherever it appears.
//! - A newline followed by nothing but spaces and tabs up to the next newline is an
//!   EmptyLine. The closing newline is not part of it and becomes the next token.
//! - A `"` inside an attribute list only opens a string when another `"` follows on the
//!   same line. Otherwise it starts a bare AttributeInlineText.
//!
//! Mode transitions are decided by the token kind alone.

use super::modes::{AttributeListToken, LegacyIdToken, Mode, ModeStack, RootToken, StringToken};
use super::LexerOptions;
use crate::adoc::ast::range::SourceLocation;
use crate::adoc::error::LexError;
use crate::adoc::token::{Token, TokenKind};
use logos::Logos;
use tracing::trace;

/// Characters that end a bare attribute value besides whitespace
const ATTRIBUTE_TEXT_STOPS: &[char] = &[',', '=', '[', ']', '.', '%', '#'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    None,
    Push(Mode),
    Pop,
}

/// One recognized token, relative to the current offset
struct Step {
    kind: TokenKind,
    len: usize,
    transition: Transition,
}

impl Step {
    fn new(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            transition: Transition::None,
        }
    }

    fn push(kind: TokenKind, len: usize, mode: Mode) -> Self {
        Self {
            kind,
            len,
            transition: Transition::Push(mode),
        }
    }

    fn pop(kind: TokenKind, len: usize) -> Self {
        Self {
            kind,
            len,
            transition: Transition::Pop,
        }
    }
}

/// Tokenize source with the default options
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &LexerOptions::default())
}

/// Tokenize source, failing at the first offset where no token of the active mode matches
pub fn tokenize_with(source: &str, options: &LexerOptions) -> Result<Vec<Token>, LexError> {
    let mut modes = ModeStack::new();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let mode = modes.current();
        let step = match mode {
            Mode::Root => root_step(source, pos),
            Mode::AttributeList => attribute_list_step(source, pos, options)?,
            Mode::LegacyId => legacy_id_step(&source[pos..]),
            Mode::String => string_step(&source[pos..]),
        };

        let step = match step {
            Some(step) if step.len > 0 => step,
            _ => return Err(no_match(source, pos, mode)),
        };

        let end = pos + step.len;
        tokens.push(Token::new(step.kind, &source[pos..end], pos..end));

        match step.transition {
            Transition::None => {}
            Transition::Push(next) => {
                trace!(offset = pos, from = %mode, to = %next, "push lexer mode");
                modes.push(next);
            }
            Transition::Pop => {
                if let Some(popped) = modes.pop() {
                    trace!(offset = pos, mode = %popped, "pop lexer mode");
                }
            }
        }

        pos = end;
    }

    Ok(tokens)
}

/// Run a logos table at the start of `rest`, returning the first token and its length
fn first_match<'s, T>(rest: &'s str) -> Option<(T, usize)>
where
    T: Logos<'s, Source = str>,
    T::Extras: Default,
{
    let mut lexer = T::lexer(rest);
    match lexer.next() {
        Some(Ok(token)) if lexer.span().start == 0 => Some((token, lexer.span().end)),
        _ => None,
    }
}

fn follows_newline(source: &str, pos: usize) -> bool {
    source[..pos].ends_with('\n')
}

/// Length of the non-whitespace run at the start of `rest`
fn word_len(rest: &str) -> usize {
    rest.find(char::is_whitespace).unwrap_or(rest.len())
}

fn root_step(source: &str, pos: usize) -> Option<Step> {
    let rest = &source[pos..];
    let (token, len) = first_match::<RootToken>(rest)?;

    let step = match token {
        RootToken::Headline if !follows_newline(source, pos) => {
            Step::new(TokenKind::InlineText, word_len(rest))
        }
        RootToken::Headline => Step::new(TokenKind::Headline, len),
        RootToken::AttributeListStart => {
            Step::push(TokenKind::AttributeListStart, len, Mode::AttributeList)
        }
        RootToken::Space => Step::new(TokenKind::Space, len),
        RootToken::Newline => match blank_line_len(&rest[len..]) {
            Some(blanks) => Step::new(TokenKind::EmptyLine, len + blanks),
            None => Step::new(TokenKind::Newline, len),
        },
        RootToken::Tab => Step::new(TokenKind::Tab, len),
        RootToken::InlineText => Step::new(TokenKind::InlineText, len),
    };

    Some(step)
}

/// Length of the spaces and tabs at the start of `tail`, if a newline follows them
fn blank_line_len(tail: &str) -> Option<usize> {
    let blanks = tail.len() - tail.trim_start_matches([' ', '\t']).len();
    tail[blanks..].starts_with('\n').then_some(blanks)
}

fn attribute_list_step(
    source: &str,
    pos: usize,
    options: &LexerOptions,
) -> Result<Option<Step>, LexError> {
    let rest = &source[pos..];
    let Some((token, len)) = first_match::<AttributeListToken>(rest) else {
        return Ok(None);
    };

    let step = match token {
        AttributeListToken::AttributeListEnd => Step::pop(TokenKind::AttributeListEnd, len),
        AttributeListToken::LegacyIdStart if options.legacy_id_brackets => {
            Step::push(TokenKind::LegacyIdStart, len, Mode::LegacyId)
        }
        AttributeListToken::LegacyIdStart => {
            return Err(LexError::LegacyIdDisabled {
                offset: pos,
                position: SourceLocation::new(source).byte_to_position(pos),
            })
        }
        AttributeListToken::Comma => Step::new(TokenKind::Comma, len),
        AttributeListToken::Quote if string_closes_on_line(&rest[len..]) => {
            Step::push(TokenKind::StringStart, len, Mode::String)
        }
        AttributeListToken::Quote => {
            let tail = &rest[len..];
            let text_len = tail
                .find(|c: char| c.is_whitespace() || ATTRIBUTE_TEXT_STOPS.contains(&c))
                .unwrap_or(tail.len());
            Step::new(TokenKind::AttributeInlineText, len + text_len)
        }
        AttributeListToken::Assignment => Step::new(TokenKind::Assignment, len),
        AttributeListToken::OptionShorthand => Step::new(TokenKind::OptionShorthand, len),
        AttributeListToken::IdShorthand => Step::new(TokenKind::IdShorthand, len),
        AttributeListToken::RoleShorthand => Step::new(TokenKind::RoleShorthand, len),
        AttributeListToken::AttributeInlineText => Step::new(TokenKind::AttributeInlineText, len),
    };

    Ok(Some(step))
}

fn string_closes_on_line(tail: &str) -> bool {
    let line = tail.split('\n').next().unwrap_or_default();
    line.contains('"')
}

fn legacy_id_step(rest: &str) -> Option<Step> {
    let (token, len) = first_match::<LegacyIdToken>(rest)?;
    let step = match token {
        LegacyIdToken::LegacyIdEnd => Step::pop(TokenKind::LegacyIdEnd, len),
        LegacyIdToken::AttributeInlineText => Step::new(TokenKind::AttributeInlineText, len),
    };
    Some(step)
}

fn string_step(rest: &str) -> Option<Step> {
    let (token, len) = first_match::<StringToken>(rest)?;
    let step = match token {
        StringToken::StringEnd => Step::pop(TokenKind::StringEnd, len),
        StringToken::Space => Step::new(TokenKind::Space, len),
        StringToken::StringText => Step::new(TokenKind::StringText, len),
    };
    Some(step)
}

fn no_match(source: &str, pos: usize, mode: Mode) -> LexError {
    LexError::NoMatch {
        offset: pos,
        position: SourceLocation::new(source).byte_to_position(pos),
        mode,
        snippet: source[pos..].chars().take(12).collect(),
    }
}
