//! Probability element definition

use std::fmt;

use super::{Command, SamplingMethod};

/// A `{0.5::content}` block: include `value` with the given chance
///
/// Deterministic samplers treat this as the two-option variant
/// `[value, ""]`, value arm first. A chance at or above 1 always includes
/// the value; at or below 0 it never does.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityCommand {
    pub chance: f64,
    pub value: Box<Command>,
    pub sampling_method: Option<SamplingMethod>,
}

impl ProbabilityCommand {
    pub fn new(chance: f64, value: Command) -> Self {
        let chance = if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            chance,
            value: Box::new(value),
            sampling_method: None,
        }
    }

    pub fn with_sampling_method(mut self, method: Option<SamplingMethod>) -> Self {
        self.sampling_method = method;
        self
    }

    pub fn always_includes(&self) -> bool {
        self.chance >= 1.0
    }

    pub fn never_includes(&self) -> bool {
        self.chance <= 0.0
    }
}

impl From<ProbabilityCommand> for Command {
    fn from(cmd: ProbabilityCommand) -> Self {
        Command::Probability(cmd)
    }
}

impl fmt::Display for ProbabilityCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probability({}, {})", self.chance, self.value)
    }
}
