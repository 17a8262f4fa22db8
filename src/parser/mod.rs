//! Template parsing: text in, [`Command`] tree out
//!
//! The split here is [`cursor`] for raw text navigation, [`grammar`] for the
//! recursive-descent productions, and [`cache`] for sharing one compiled
//! parser per delimiter configuration. [`PromptParser`] ties them together
//! and adds the pure-literal fast path.
//!
//! Most callers want the free [`parse`] / [`parse_with_config`] functions,
//! which go through the shared cache. Hold a [`PromptParser`] directly when
//! parsing many templates against one configuration in a tight loop.

mod cache;
mod cursor;
mod grammar;

pub use cache::shared_parser;

use crate::commands::Command;
use crate::config::GrammarConfig;
use crate::error::{ConfigError, ParseError};
use grammar::Grammar;

/// A compiled parser for one delimiter configuration
#[derive(Debug)]
pub struct PromptParser {
    grammar: Grammar,
    reserved: String,
}

impl PromptParser {
    /// Validate `config` and compile its productions.
    pub fn new(config: GrammarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let reserved = config.reserved_chars();
        let grammar = Grammar::compile(config)?;
        Ok(Self { grammar, reserved })
    }

    /// The configuration this parser was compiled against.
    pub fn config(&self) -> &GrammarConfig {
        &self.grammar.config
    }

    /// Parse a template into its command tree.
    ///
    /// Empty input yields an empty literal. Input containing none of the
    /// reserved punctuation characters can only be a single literal and is
    /// returned as one without running the grammar.
    pub fn parse(&self, text: &str) -> Result<Command, ParseError> {
        if text.is_empty() {
            return Ok(Command::literal(""));
        }
        if !text.chars().any(|c| self.reserved.contains(c)) {
            return Ok(Command::literal(text));
        }
        self.grammar.parse_template(text)
    }
}

/// Parse a template with the default delimiters.
pub fn parse(text: &str) -> Result<Command, ParseError> {
    parse_with_config(text, &GrammarConfig::default())
}

/// Parse a template with a custom delimiter configuration, sharing the
/// compiled parser through the process-wide cache.
pub fn parse_with_config(text: &str, config: &GrammarConfig) -> Result<Command, ParseError> {
    let parser = cache::shared_parser(config)?;
    parser.parse(text)
}
