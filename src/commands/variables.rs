//! Variable access and assignment element definitions

use std::fmt;

use super::Command;

/// A `${name}` or `${name:default}` read
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAccessCommand {
    pub name: String,
    pub default: Option<Box<Command>>,
}

impl VariableAccessCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Command) -> Self {
        self.default = Some(Box::new(default));
        self
    }
}

impl From<VariableAccessCommand> for Command {
    fn from(cmd: VariableAccessCommand) -> Self {
        Command::VariableAccess(cmd)
    }
}

impl fmt::Display for VariableAccessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableAccess({:?})", self.name)
    }
}

/// A `${name=value}` write; renders to nothing
///
/// `?=` keeps an existing binding (`overwrite = false`); `=!` renders the
/// value once at assignment time (`immediate = true`) instead of deferring
/// it to each access.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignmentCommand {
    pub name: String,
    pub value: Box<Command>,
    pub overwrite: bool,
    pub immediate: bool,
}

impl VariableAssignmentCommand {
    pub fn new(name: impl Into<String>, value: Command) -> Self {
        Self {
            name: name.into(),
            value: Box::new(value),
            overwrite: true,
            immediate: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }
}

impl From<VariableAssignmentCommand> for Command {
    fn from(cmd: VariableAssignmentCommand) -> Self {
        Command::VariableAssignment(cmd)
    }
}

impl fmt::Display for VariableAssignmentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match (self.overwrite, self.immediate) {
            (false, _) => "?=",
            (true, true) => "=!",
            (true, false) => "=",
        };
        write!(f, "VariableAssignment({:?} {} ...)", self.name, mode)
    }
}
