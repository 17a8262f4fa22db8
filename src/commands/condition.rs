//! Condition element definition

use std::fmt;

use regex::Regex;

use super::Command;

/// One `(context_key, pattern, if_value)` branch of a condition block
///
/// `context_key` names a variable whose value is matched; without one the
/// pattern matches the ambient rendering context, the text generated so far
/// for the current output. The grammar only produces key-less single-branch
/// conditions; keyed and multi-branch forms are built programmatically.
#[derive(Debug, Clone)]
pub struct ConditionBranch {
    pub context_key: Option<String>,
    pub pattern: Regex,
    pub if_value: Command,
}

impl ConditionBranch {
    pub fn new(pattern: &str, if_value: Command) -> Result<Self, regex::Error> {
        Ok(Self {
            context_key: None,
            pattern: Regex::new(pattern.trim())?,
            if_value,
        })
    }

    pub fn keyed(
        context_key: impl Into<String>,
        pattern: &str,
        if_value: Command,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            context_key: Some(context_key.into()),
            pattern: Regex::new(pattern.trim())?,
            if_value,
        })
    }

    pub fn pattern_text(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.pattern.is_match(haystack)
    }
}

impl PartialEq for ConditionBranch {
    fn eq(&self, other: &Self) -> bool {
        self.context_key == other.context_key
            && self.pattern.as_str() == other.pattern.as_str()
            && self.if_value == other.if_value
    }
}

/// A `{pattern::value|else}` block: branches tried in order, first match wins
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionCommand {
    pub conditions: Vec<ConditionBranch>,
    pub else_value: Option<Box<Command>>,
}

impl ConditionCommand {
    pub fn new(conditions: Vec<ConditionBranch>, else_value: Option<Command>) -> Self {
        Self {
            conditions,
            else_value: else_value.map(Box::new),
        }
    }
}

impl From<ConditionCommand> for Command {
    fn from(cmd: ConditionCommand) -> Self {
        Command::Condition(cmd)
    }
}

impl fmt::Display for ConditionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Condition({} branches{})",
            self.conditions.len(),
            if self.else_value.is_some() {
                ", with else"
            } else {
                ""
            }
        )
    }
}
