//! Grammar configuration: the delimiter set recognized by the parser
//!
//! Every delimiter is a runtime value, so templates aimed at different host
//! conventions (for example `<` `>` variant braces) can coexist in one
//! process. Two configurations compare equal when every delimiter matches;
//! the parser cache keys on that equality to share one compiled parser per
//! distinct configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Delimiters for the template grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Opens a variant / probability / condition / comment block
    pub variant_start: String,
    /// Closes a variant / probability / condition / comment block
    pub variant_end: String,
    /// Opens a variable access or assignment
    pub variable_start: String,
    /// Closes a variable access or assignment
    pub variable_end: String,
    /// Opens a wrap block
    pub wrap_start: String,
    /// Closes a wrap block
    pub wrap_end: String,
    /// Surrounds a wildcard name on both sides
    pub wildcard_wrap: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            variant_start: "{".to_string(),
            variant_end: "}".to_string(),
            variable_start: "${".to_string(),
            variable_end: "}".to_string(),
            wrap_start: "%{".to_string(),
            wrap_end: "}".to_string(),
            wildcard_wrap: "__".to_string(),
        }
    }
}

impl GrammarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.variant_start = start.into();
        self.variant_end = end.into();
        self
    }

    pub fn with_variable_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.variable_start = start.into();
        self.variable_end = end.into();
        self
    }

    pub fn with_wrap_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.wrap_start = start.into();
        self.wrap_end = end.into();
        self
    }

    pub fn with_wildcard_wrap(mut self, wrap: impl Into<String>) -> Self {
        self.wildcard_wrap = wrap.into();
        self
    }

    /// Check that the delimiter set is usable: no delimiter is empty and no
    /// two opening tokens collide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("variant_start", &self.variant_start),
            ("variant_end", &self.variant_end),
            ("variable_start", &self.variable_start),
            ("variable_end", &self.variable_end),
            ("wrap_start", &self.wrap_start),
            ("wrap_end", &self.wrap_end),
            ("wildcard_wrap", &self.wildcard_wrap),
        ];
        for (name, value) in named {
            if value.is_empty() {
                return Err(ConfigError::EmptyDelimiter(name));
            }
        }
        // Opening tokens must be distinguishable from each other; closing
        // tokens may legitimately coincide (the defaults all use `}`).
        let openers = [
            ("variant_start", &self.variant_start),
            ("variable_start", &self.variable_start),
            ("wrap_start", &self.wrap_start),
            ("wildcard_wrap", &self.wildcard_wrap),
        ];
        for (i, (first_name, first)) in openers.iter().enumerate() {
            for (second_name, second) in openers.iter().skip(i + 1) {
                if first == second {
                    return Err(ConfigError::DuplicateDelimiter(first_name, second_name));
                }
            }
        }
        Ok(())
    }

    /// Characters that can begin or terminate a directive or comment.
    ///
    /// An input containing none of these can only ever parse to a single
    /// literal, which is what the parser's fast path relies on.
    pub(crate) fn reserved_chars(&self) -> String {
        let mut reserved = String::from("#/");
        for token in [
            &self.variant_start,
            &self.variable_start,
            &self.wrap_start,
            &self.wildcard_wrap,
        ] {
            for c in token.chars() {
                if !reserved.contains(c) {
                    reserved.push(c);
                }
            }
        }
        reserved
    }
}
