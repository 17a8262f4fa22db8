//! Sequence element definition

use std::fmt;

use super::literal::LiteralCommand;
use super::Command;

/// Consecutive template chunks; rendered outputs are joined by `separator`
///
/// The separator defaults to the empty string: adjacent chunks concatenate,
/// which is what keeps `${size=small}${size} cat` rendering as `small cat`.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceCommand {
    pub children: Vec<Command>,
    pub separator: String,
}

impl SequenceCommand {
    pub fn new(children: Vec<Command>) -> Self {
        Self {
            children,
            separator: String::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Collapse a chunk list into its canonical command.
    ///
    /// Zero chunks become an empty literal and a single chunk stands on its
    /// own; only two or more chunks produce a sequence node.
    pub fn from_children(children: Vec<Command>) -> Command {
        match children.len() {
            0 => Command::Literal(LiteralCommand::empty()),
            1 => children
                .into_iter()
                .next()
                .unwrap_or_else(|| Command::Literal(LiteralCommand::empty())),
            _ => Command::Sequence(SequenceCommand::new(children)),
        }
    }
}

impl From<SequenceCommand> for Command {
    fn from(cmd: SequenceCommand) -> Self {
        Command::Sequence(cmd)
    }
}

impl fmt::Display for SequenceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({} children)", self.children.len())
    }
}
