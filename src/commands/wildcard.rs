//! Wildcard element definition

use std::fmt;

use super::{Command, SamplingMethod};

/// The wildcard path: fixed text, or a nested template evaluated per output
#[derive(Debug, Clone, PartialEq)]
pub enum WildcardName {
    Static(String),
    Dynamic(Box<Command>),
}

impl WildcardName {
    pub fn as_static(&self) -> Option<&str> {
        match self {
            WildcardName::Static(name) => Some(name),
            WildcardName::Dynamic(_) => None,
        }
    }
}

/// A `__name__` lookup resolved through a `WildcardResolver`
///
/// Resolved candidate values are themselves templates and are re-parsed
/// when the wildcard is rendered. Inline variables (`__name(k=v)__`) are
/// exposed to the candidate through a nested variable scope.
#[derive(Debug, Clone, PartialEq)]
pub struct WildcardCommand {
    pub name: WildcardName,
    pub sampling_method: Option<SamplingMethod>,
    pub variables: Vec<(String, Command)>,
}

impl WildcardCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: WildcardName::Static(name.into()),
            sampling_method: None,
            variables: Vec::new(),
        }
    }

    /// Build from a parsed path, simplifying a statically-literal path to a
    /// plain string.
    pub fn from_path(path: Command) -> Self {
        let name = match path {
            Command::Literal(literal) => WildcardName::Static(literal.text),
            other => WildcardName::Dynamic(Box::new(other)),
        };
        Self {
            name,
            sampling_method: None,
            variables: Vec::new(),
        }
    }

    pub fn with_sampling_method(mut self, method: Option<SamplingMethod>) -> Self {
        self.sampling_method = method;
        self
    }

    pub fn with_variables(mut self, variables: Vec<(String, Command)>) -> Self {
        self.variables = variables;
        self
    }
}

impl From<WildcardCommand> for Command {
    fn from(cmd: WildcardCommand) -> Self {
        Command::Wildcard(cmd)
    }
}

impl fmt::Display for WildcardCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            WildcardName::Static(name) => write!(f, "Wildcard({:?})", name),
            WildcardName::Dynamic(_) => write!(f, "Wildcard(<dynamic>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SequenceCommand;

    #[test]
    fn test_literal_path_simplifies_to_static() {
        let wildcard = WildcardCommand::from_path(Command::literal("colors"));
        assert_eq!(wildcard.name.as_static(), Some("colors"));
    }

    #[test]
    fn test_mixed_path_stays_dynamic() {
        let path = SequenceCommand::from_children(vec![
            Command::VariableAccess(crate::commands::VariableAccessCommand::new("theme")),
            Command::literal("_colors"),
        ]);
        let wildcard = WildcardCommand::from_path(path);
        assert!(matches!(wildcard.name, WildcardName::Dynamic(_)));
    }

    #[test]
    fn test_inline_variables() {
        let wildcard = WildcardCommand::new("wizard")
            .with_variables(vec![("gender".to_string(), Command::literal("male"))]);
        assert_eq!(wildcard.variables.len(), 1);
        assert_eq!(wildcard.variables[0].0, "gender");
    }
}
