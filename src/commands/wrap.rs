//! Wrap element definition

use std::fmt;

use super::Command;

/// Marker in a rendered wrapper where the inner content lands.
///
/// This is a fixed token, independent of the grammar configuration, and the
/// substitution happens on the wrapper's rendered text; the marker is never
/// re-parsed as template syntax.
pub const WRAP_MARKER: &str = "$$";

/// A `%{wrapper$$inner}` block
#[derive(Debug, Clone, PartialEq)]
pub struct WrapCommand {
    pub wrapper: Box<Command>,
    pub inner: Box<Command>,
}

impl WrapCommand {
    pub fn new(wrapper: Command, inner: Command) -> Self {
        Self {
            wrapper: Box::new(wrapper),
            inner: Box::new(inner),
        }
    }
}

impl From<WrapCommand> for Command {
    fn from(cmd: WrapCommand) -> Self {
        Command::Wrap(cmd)
    }
}

impl fmt::Display for WrapCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrap({} around {})", self.wrapper, self.inner)
    }
}

/// Insert `inner` at the first marker in `wrapper`.
///
/// A wrapper without a marker gets the inner content appended after it.
/// That is the usual case for wraps written in template syntax: the parser
/// consumes the `$$` delimiter, so the split point sits at the wrapper's
/// end. Markers inside the wrapper text appear when the wrapper command
/// renders from an external source.
pub fn wrap_text(wrapper: &str, inner: &str) -> String {
    match wrapper.split_once(WRAP_MARKER) {
        Some((before, after)) => format!("{}{}{}", before, inner, after),
        None => format!("{}{}", wrapper, inner),
    }
}
