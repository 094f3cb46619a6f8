//! Canonical AsciiDoc printer
//!
//! Renders the AST back to text. Every block that owns a line writes it prefixed with a
//! newline, an empty line is a bare newline, and the document is finished by dropping the
//! very first newline and appending one at the end. The result never starts with a blank
//! line and always ends with exactly one newline.
//!
//! Attribute lists are normalized: formal entries come first, joined by commas, followed by
//! the shorthand groups in id, role, option order. Whether a value is quoted depends only on
//! the value and the configuration, never on how it was written.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::adoc::ast::elements::attribute::{ID_KEY, OPTION_KEY, ROLE_KEY};
use crate::adoc::ast::{
    Attribute, AttributeBlock, AttributeList, Block, Document, Headline, Paragraph, Text,
};
use crate::adoc::config::{AttributeFormat, Config};

/// Characters that force quoting: list syntax, and the shorthand markers
static NEEDS_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\[\]=.#%]").unwrap());

/// Values that would not lex back as a single shorthand value. A `"` is excluded anywhere:
/// moved behind a bare value starting with `"` it would close a string.
static NOT_SHORTHAND: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[\s",\[\]=.#%]"#).unwrap());

pub struct AdocPrinter<'c> {
    config: &'c Config,
    output: String,
}

impl<'c> AdocPrinter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    pub fn print(mut self, doc: &Document) -> String {
        let blocks = doc.children.iter().skip_while(|block| block.is_empty_line());
        for block in blocks {
            self.print_block(block);
        }

        let mut output = match self.output.strip_prefix('\n') {
            Some(rest) => rest.to_string(),
            None => self.output,
        };
        output.push('\n');
        output
    }

    fn write_line(&mut self, text: &str) {
        self.output.push('\n');
        self.output.push_str(text);
    }

    fn print_block(&mut self, block: &Block) {
        match block {
            Block::Headline(headline) => self.print_headline(headline),
            Block::Paragraph(paragraph) => self.print_paragraph(paragraph),
            Block::EmptyLine(_) => self.output.push('\n'),
            Block::AttributeBlock(block) => self.print_attribute_block(block),
        }
    }

    fn print_headline(&mut self, headline: &Headline) {
        let line = format!("{} {}", headline.marker(), render_text(&headline.text));
        self.write_line(&line);
    }

    fn print_paragraph(&mut self, paragraph: &Paragraph) {
        let indent = if paragraph.is_literal {
            " ".repeat(self.config.literal_paragraph_indent)
        } else {
            String::new()
        };

        for line in &paragraph.lines {
            let text = render_text(line);
            // with no indent, a literal line starting with `=` would read back as a headline
            let prefix = if paragraph.is_literal && indent.is_empty() && text.starts_with('=') {
                " "
            } else {
                indent.as_str()
            };
            let line = format!("{}{}", prefix, text);
            self.write_line(&line);
        }
    }

    fn print_attribute_block(&mut self, block: &AttributeBlock) {
        let line = self.render_attribute_list(&block.list);
        self.write_line(&line);
    }

    /// `[others#ids.roles%options]`
    pub fn render_attribute_list(&self, list: &AttributeList) -> String {
        let mut others: Vec<String> = Vec::new();
        let mut ids: Vec<&str> = Vec::new();
        let mut roles: Vec<&str> = Vec::new();
        let mut options: Vec<&str> = Vec::new();

        for attribute in &list.attributes {
            let group = match attribute.key.as_deref() {
                Some(ID_KEY) if self.config.id_format == AttributeFormat::Shorthand => {
                    Some(&mut ids)
                }
                Some(ROLE_KEY) if self.config.role_format == AttributeFormat::Shorthand => {
                    Some(&mut roles)
                }
                Some(OPTION_KEY) if self.config.option_format == AttributeFormat::Shorthand => {
                    Some(&mut options)
                }
                _ => None,
            };

            match group {
                Some(group) if fits_shorthand(attribute) => {
                    group.extend(attribute.value.values.iter().map(String::as_str));
                }
                _ => others.push(self.render_entry(attribute)),
            }
        }

        let mut out = String::from("[");
        out.push_str(&others.join(","));
        for (marker, values) in [("#", ids), (".", roles), ("%", options)] {
            for value in values {
                out.push_str(marker);
                out.push_str(value);
            }
        }
        out.push(']');
        out
    }

    /// `key=value`, or just `value` for a positional attribute
    fn render_entry(&self, attribute: &Attribute) -> String {
        let value = self.render_value(&attribute.value.values);
        match &attribute.key {
            Some(key) => format!("{}={}", key, value),
            None => value,
        }
    }

    fn render_value(&self, values: &[String]) -> String {
        let joined = values.join(" ");
        if self.needs_quotes(values) {
            format!("\"{}\"", joined)
        } else {
            joined
        }
    }

    fn needs_quotes(&self, values: &[String]) -> bool {
        match values {
            // a lone value with a quote char can only be written bare
            [value] if value.contains('"') => false,
            [value] => self.config.always_quote_attribute_values || NEEDS_QUOTES.is_match(value),
            _ => true,
        }
    }
}

/// Words joined by single spaces
fn render_text(text: &Text) -> String {
    text.words.join(" ")
}

fn fits_shorthand(attribute: &Attribute) -> bool {
    attribute
        .value
        .values
        .iter()
        .all(|value| !value.is_empty() && !NOT_SHORTHAND.is_match(value))
}
