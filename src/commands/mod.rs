//! Command tree produced by the template parser
//!
//! Every template compiles to a single [`Command`]. The enum is closed: the
//! three samplers exhaustively match on it, so adding a node type is a
//! breaking change by design. Each element lives in its own file together
//! with its construction rules.
//!
//! ## Elements
//!
//! - `literal` - plain text runs and `{* ... *}` comments
//! - `sequence` - consecutive chunks rendered in order
//! - `variant` - weighted alternatives with selection bounds
//! - `wildcard` - externally resolved value lookups
//! - `wrap` - wrapper templates with a `$$` substitution marker
//! - `probability` - chance-gated content
//! - `condition` - pattern-gated alternatives
//! - `variables` - variable access and assignment

pub mod condition;
pub mod literal;
pub mod probability;
pub mod sequence;
pub mod variables;
pub mod variant;
pub mod wildcard;
pub mod wrap;

use std::fmt;

use serde::{Deserialize, Serialize};

// Re-export the element types at module root
pub use condition::{ConditionBranch, ConditionCommand};
pub use literal::{CommentCommand, LiteralCommand};
pub use probability::ProbabilityCommand;
pub use sequence::SequenceCommand;
pub use variables::{VariableAccessCommand, VariableAssignmentCommand};
pub use variant::{VariantCommand, VariantOption};
pub use wildcard::{WildcardCommand, WildcardName};
pub use wrap::{wrap_text, WrapCommand, WRAP_MARKER};

/// How a node's alternatives are chosen during generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMethod {
    /// Independent weighted draws, with replacement.
    Random,
    /// Exhaustive enumeration in declaration order, deduplicated.
    Combinatorial,
    /// Deterministic rotation through the choice space.
    Cyclical,
}

impl SamplingMethod {
    /// The in-template override symbol for this method, e.g. `{~a|b}`.
    pub fn symbol(self) -> char {
        match self {
            SamplingMethod::Random => '~',
            SamplingMethod::Combinatorial => '!',
            SamplingMethod::Cyclical => '@',
        }
    }

    /// Map an override symbol back to its method.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '~' => Some(SamplingMethod::Random),
            '!' => Some(SamplingMethod::Combinatorial),
            '@' => Some(SamplingMethod::Cyclical),
            _ => None,
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SamplingMethod::Random => "random",
            SamplingMethod::Combinatorial => "combinatorial",
            SamplingMethod::Cyclical => "cyclical",
        };
        write!(f, "{}", name)
    }
}

/// A parsed template element
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Literal(LiteralCommand),
    Sequence(SequenceCommand),
    Variant(VariantCommand),
    Wildcard(WildcardCommand),
    Wrap(WrapCommand),
    Probability(ProbabilityCommand),
    Condition(ConditionCommand),
    Comment(CommentCommand),
    VariableAccess(VariableAccessCommand),
    VariableAssignment(VariableAssignmentCommand),
}

impl Command {
    /// Shorthand for a literal node.
    pub fn literal(text: impl Into<String>) -> Self {
        Command::Literal(LiteralCommand::new(text))
    }

    /// The node's own sampling-method override, if it carries one.
    pub fn sampling_method(&self) -> Option<SamplingMethod> {
        match self {
            Command::Variant(v) => v.sampling_method,
            Command::Wildcard(w) => w.sampling_method,
            Command::Probability(p) => p.sampling_method,
            _ => None,
        }
    }

    /// The literal text of this node, when it is statically plain text.
    pub fn as_literal_text(&self) -> Option<&str> {
        match self {
            Command::Literal(l) => Some(&l.text),
            _ => None,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Command::Literal(_) => "Literal",
            Command::Sequence(_) => "Sequence",
            Command::Variant(_) => "Variant",
            Command::Wildcard(_) => "Wildcard",
            Command::Wrap(_) => "Wrap",
            Command::Probability(_) => "Probability",
            Command::Condition(_) => "Condition",
            Command::Comment(_) => "Comment",
            Command::VariableAccess(_) => "VariableAccess",
            Command::VariableAssignment(_) => "VariableAssignment",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Literal(c) => c.fmt(f),
            Command::Sequence(c) => c.fmt(f),
            Command::Variant(c) => c.fmt(f),
            Command::Wildcard(c) => c.fmt(f),
            Command::Wrap(c) => c.fmt(f),
            Command::Probability(c) => c.fmt(f),
            Command::Condition(c) => c.fmt(f),
            Command::Comment(c) => c.fmt(f),
            Command::VariableAccess(c) => c.fmt(f),
            Command::VariableAssignment(c) => c.fmt(f),
        }
    }
}
