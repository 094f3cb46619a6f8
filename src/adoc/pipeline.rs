//! Formatting pipeline
//!
//! The entry points a host formatter calls:
//!
//!     text → normalize → tokenize → parse_to_cst → build_document → Document → print → text
//!
//! `parse` and `print` are the two halves a host with its own AST handling uses; `format` runs
//! both. Every stage error aborts the whole call.
//!
//! Normalization
//!
//!     Leading blank lines and all trailing whitespace are removed and a single `\n` is
//!     prefixed, so every block of the document, the first one included, starts at a newline.
//!     Leading spaces on the first line are kept: they are what makes a paragraph literal.
//!     All spans in the resulting tree are byte offsets into the normalized text.

use tracing::{debug, info};

use crate::adoc::ast::Document;
use crate::adoc::building::build_document;
use crate::adoc::config::Config;
use crate::adoc::error::FormatError;
use crate::adoc::formats::AdocPrinter;
use crate::adoc::lexing::tokenize_with;
use crate::adoc::parsing::parse_to_cst;
use crate::adoc::token::Token;

/// Log target of the verbose token dump
pub const TOKEN_LOG_TARGET: &str = "adocfmt::tokens";

/// Parse text into a document, optionally dumping the token stream to the log
pub fn parse(text: &str, verbose: bool) -> Result<Document, FormatError> {
    parse_with_config(text, &Config::default().with_verbose(verbose))
}

/// Parse text honoring the `verbose` and `legacy_id_brackets` settings of a config
pub fn parse_with_config(text: &str, config: &Config) -> Result<Document, FormatError> {
    let source = normalize_source(text);

    let tokens = tokenize_with(&source, &config.lexer_options())?;
    debug!(tokens = tokens.len(), bytes = source.len(), "tokenized source");
    if config.verbose {
        log_tokens(&tokens);
    }

    let cst = parse_to_cst(&tokens)?;
    Ok(build_document(&cst)?)
}

/// Render a document in canonical form
pub fn print(doc: &Document, config: &Config) -> String {
    let output = AdocPrinter::new(config).print(doc);
    debug!(bytes = output.len(), "printed document");
    output
}

/// Parse and print in one go
pub fn format(text: &str, config: &Config) -> Result<String, FormatError> {
    let doc = parse_with_config(text, config)?;
    Ok(print(&doc, config))
}

/// Drop leading blank lines and trailing whitespace, then prefix a newline
pub fn normalize_source(text: &str) -> String {
    let mut rest = text;
    while let Some(end) = rest.find('\n') {
        if !rest[..end].chars().all(|c| c == ' ' || c == '\t') {
            break;
        }
        rest = &rest[end + 1..];
    }

    let trimmed = rest.trim_end();
    if trimmed.trim_start().is_empty() {
        return "\n".to_string();
    }
    format!("\n{}", trimmed)
}

fn log_tokens(tokens: &[Token]) {
    for token in tokens {
        info!(
            target: TOKEN_LOG_TARGET,
            kind = token.kind.name(),
            text = ?token.text,
            start = token.start(),
            end = token.end(),
            "token"
        );
    }
    info!(target: TOKEN_LOG_TARGET, count = tokens.len(), "token stream");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adoc::ast::Block;
    use crate::adoc::error::SyntaxError;

    #[test]
    fn test_normalize_source() {
        assert_eq!(normalize_source("= Title"), "\n= Title");
        assert_eq!(normalize_source("\n  \n\t\n  text  \n\n"), "\n  text");
        assert_eq!(normalize_source(""), "\n");
        assert_eq!(normalize_source(" \n\t "), "\n");
    }

    #[test]
    fn test_parse_title_document() {
        let doc = parse("= My Document\n\n== Sub", false).unwrap();

        assert_eq!(doc.children.len(), 3);
        let levels: Vec<_> = doc.headlines().map(|h| h.level).collect();
        assert_eq!(levels, vec![0, 1]);
        assert!(matches!(doc.children[1], Block::EmptyLine(_)));
    }

    #[test]
    fn test_format_scenarios() {
        let config = Config::default();
        assert_eq!(
            format("= My Document\n\n== Sub", &config).unwrap(),
            "= My Document\n\n== Sub\n"
        );
        assert_eq!(
            format("[id=foo,role=bar]\nText", &config).unwrap(),
            "[#foo.bar]\nText\n"
        );
        assert_eq!(format(" text", &config).unwrap(), "  text\n");
    }

    #[test]
    fn test_unterminated_attribute_list_is_a_syntax_error() {
        let err = parse("[key=value", false).unwrap_err();
        assert!(matches!(
            err,
            FormatError::Syntax(SyntaxError { found: None, .. })
        ));
    }

    #[test]
    fn test_blank_input() {
        let doc = parse("  \n\n", false).unwrap();
        assert!(doc.is_empty());
        assert_eq!(print(&doc, &Config::default()), "\n");
    }

    #[test]
    fn test_legacy_brackets_follow_config() {
        let strict = Config::default().with_legacy_id_brackets(false);
        assert!(matches!(
            format("[[top]]", &strict),
            Err(FormatError::Lex(_))
        ));
        assert_eq!(format("[[top]]", &Config::default()).unwrap(), "[#top]\n");
    }
}
