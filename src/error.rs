//! Error types for configuration, parsing, and generation

use std::fmt;

/// Errors raised while validating a grammar configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The named delimiter is the empty string.
    EmptyDelimiter(&'static str),
    /// Two opening delimiters are the same token and cannot be told apart.
    DuplicateDelimiter(&'static str, &'static str),
    /// The delimiter set produced an unusable scanner pattern.
    UnusableDelimiters(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDelimiter(name) => {
                write!(f, "Configuration error: {} delimiter is empty", name)
            }
            ConfigError::DuplicateDelimiter(first, second) => {
                write!(
                    f,
                    "Configuration error: {} and {} delimiters are identical",
                    first, second
                )
            }
            ConfigError::UnusableDelimiters(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while parsing a template
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input could not be parsed past `offset`.
    Syntax { offset: usize, expected: String },
    /// A variant bound was written with its lower bound above its upper bound.
    InvalidBound {
        offset: usize,
        min: usize,
        max: usize,
    },
    /// The grammar configuration backing the parse was invalid.
    Config(ConfigError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { offset, expected } => {
                write!(f, "Syntax error at offset {}: expected {}", offset, expected)
            }
            ParseError::InvalidBound { offset, min, max } => {
                write!(
                    f,
                    "Invalid bound at offset {}: lower bound {} exceeds upper bound {}",
                    offset, min, max
                )
            }
            ParseError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError::Config(err)
    }
}

/// Errors raised while generating outputs from a parsed template
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// A wildcard resolved to no values under a policy that forbids it.
    UnresolvedWildcard(String),
    /// A template, wildcard value, or dynamic wildcard name failed to parse.
    Parse(ParseError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnresolvedWildcard(name) => {
                write!(f, "Wildcard '{}' resolved to no values", name)
            }
            GenerateError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<ParseError> for GenerateError {
    fn from(err: ParseError) -> Self {
        GenerateError::Parse(err)
    }
}

impl From<ConfigError> for GenerateError {
    fn from(err: ConfigError) -> Self {
        GenerateError::Parse(ParseError::Config(err))
    }
}
