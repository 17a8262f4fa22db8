//! Literal and comment element definitions

use std::fmt;

use super::Command;

/// A run of plain text, emitted verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralCommand {
    pub text: String,
}

impl LiteralCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }
}

impl From<LiteralCommand> for Command {
    fn from(cmd: LiteralCommand) -> Self {
        Command::Literal(cmd)
    }
}

impl fmt::Display for LiteralCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({:?})", self.text)
    }
}

/// A `{* ... *}` comment; renders to nothing
#[derive(Debug, Clone, PartialEq)]
pub struct CommentCommand {
    pub text: String,
}

impl CommentCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<CommentCommand> for Command {
    fn from(cmd: CommentCommand) -> Self {
        Command::Comment(cmd)
    }
}

impl fmt::Display for CommentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comment({:?})", self.text)
    }
}
