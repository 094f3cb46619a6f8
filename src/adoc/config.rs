//! Formatter configuration
//!
//! Mirrors the knobs a host formatter exposes. Every field has a default, so a host can hand
//! over a partial JSON object of options and leave the rest alone. The host plugin's
//! `adoc*` option names are accepted next to the camelCase field names.

use crate::adoc::error::ConfigError;
use crate::adoc::lexing::LexerOptions;
use serde::{Deserialize, Serialize};

/// How id, role and option attributes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeFormat {
    /// `#id`, `.role`, `%option`
    #[default]
    Shorthand,
    /// `id=...`, `role=...`, `option=...`
    Formal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Spaces in front of every line of a literal paragraph
    #[serde(alias = "adocLiteralParagraphSpaces")]
    pub literal_paragraph_indent: usize,
    #[serde(alias = "adocAlwaysQuoteAttributeValues")]
    pub always_quote_attribute_values: bool,
    #[serde(alias = "adocIdFormat")]
    pub id_format: AttributeFormat,
    #[serde(alias = "adocOptionFormat")]
    pub option_format: AttributeFormat,
    #[serde(alias = "adocRoleFormat")]
    pub role_format: AttributeFormat,
    /// Log the token stream while parsing
    #[serde(alias = "adocVerbose")]
    pub verbose: bool,
    /// Accept the `[[id]]` form inside attribute lists
    pub legacy_id_brackets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            literal_paragraph_indent: 2,
            always_quote_attribute_values: false,
            id_format: AttributeFormat::Shorthand,
            option_format: AttributeFormat::Shorthand,
            role_format: AttributeFormat::Shorthand,
            verbose: false,
            legacy_id_brackets: true,
        }
    }
}

impl Config {
    /// Load a (possibly partial) JSON object of options; unknown keys are ignored
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_literal_paragraph_indent(mut self, indent: usize) -> Self {
        self.literal_paragraph_indent = indent;
        self
    }

    pub fn with_always_quote_attribute_values(mut self, always: bool) -> Self {
        self.always_quote_attribute_values = always;
        self
    }

    pub fn with_id_format(mut self, format: AttributeFormat) -> Self {
        self.id_format = format;
        self
    }

    pub fn with_option_format(mut self, format: AttributeFormat) -> Self {
        self.option_format = format;
        self
    }

    pub fn with_role_format(mut self, format: AttributeFormat) -> Self {
        self.role_format = format;
        self
    }

    /// Set all three shorthand-capable formats at once
    pub fn with_attribute_format(self, format: AttributeFormat) -> Self {
        self.with_id_format(format)
            .with_role_format(format)
            .with_option_format(format)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_legacy_id_brackets(mut self, enabled: bool) -> Self {
        self.legacy_id_brackets = enabled;
        self
    }

    pub fn lexer_options(&self) -> LexerOptions {
        LexerOptions {
            legacy_id_brackets: self.legacy_id_brackets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.literal_paragraph_indent, 2);
        assert!(!config.always_quote_attribute_values);
        assert_eq!(config.id_format, AttributeFormat::Shorthand);
        assert_eq!(config.role_format, AttributeFormat::Shorthand);
        assert_eq!(config.option_format, AttributeFormat::Shorthand);
        assert!(!config.verbose);
        assert!(config.lexer_options().legacy_id_brackets);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"idFormat": "formal", "unknown": 1}"#).unwrap();
        assert_eq!(config.id_format, AttributeFormat::Formal);
        assert_eq!(config.role_format, AttributeFormat::Shorthand);
        assert_eq!(config.literal_paragraph_indent, 2);
    }

    #[test]
    fn test_host_option_names_are_accepted() {
        let config = Config::from_json(
            r#"{
                "adocLiteralParagraphSpaces": 4,
                "adocAlwaysQuoteAttributeValues": true,
                "adocRoleFormat": "formal",
                "adocVerbose": true
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config::default()
                .with_literal_paragraph_indent(4)
                .with_always_quote_attribute_values(true)
                .with_role_format(AttributeFormat::Formal)
                .with_verbose(true)
        );
    }

    #[test]
    fn test_invalid_json_is_a_config_error() {
        let err = Config::from_json(r#"{"idFormat": "fancy"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse formatter configuration"));
    }
}
