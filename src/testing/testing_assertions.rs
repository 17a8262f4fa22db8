//! Fluent assertion API for command trees

use super::testing_matchers::TextMatch;
use crate::commands::{
    Command, CommentCommand, ConditionBranch, ConditionCommand, LiteralCommand,
    ProbabilityCommand, SamplingMethod, SequenceCommand, VariableAccessCommand,
    VariableAssignmentCommand, VariantCommand, WildcardCommand, WildcardName, WrapCommand,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder rooted at a command
pub fn assert_command(command: &Command) -> CommandAssertion<'_> {
    CommandAssertion {
        command,
        context: "root".to_string(),
    }
}

// ============================================================================
// Command Assertions
// ============================================================================

pub struct CommandAssertion<'a> {
    command: &'a Command,
    context: String,
}

impl<'a> CommandAssertion<'a> {
    /// Assert this command is a Literal and return literal-specific assertions
    pub fn assert_literal(self) -> LiteralAssertion<'a> {
        match self.command {
            Command::Literal(literal) => LiteralAssertion {
                literal,
                context: self.context,
            },
            other => panic!("{}: Expected Literal, found {}", self.context, other),
        }
    }

    /// Assert this command is a Sequence and return sequence-specific assertions
    pub fn assert_sequence(self) -> SequenceAssertion<'a> {
        match self.command {
            Command::Sequence(sequence) => SequenceAssertion {
                sequence,
                context: self.context,
            },
            other => panic!("{}: Expected Sequence, found {}", self.context, other),
        }
    }

    /// Assert this command is a Variant and return variant-specific assertions
    pub fn assert_variant(self) -> VariantAssertion<'a> {
        match self.command {
            Command::Variant(variant) => VariantAssertion {
                variant,
                context: self.context,
            },
            other => panic!("{}: Expected Variant, found {}", self.context, other),
        }
    }

    /// Assert this command is a Wildcard and return wildcard-specific assertions
    pub fn assert_wildcard(self) -> WildcardAssertion<'a> {
        match self.command {
            Command::Wildcard(wildcard) => WildcardAssertion {
                wildcard,
                context: self.context,
            },
            other => panic!("{}: Expected Wildcard, found {}", self.context, other),
        }
    }

    /// Assert this command is a Wrap and return wrap-specific assertions
    pub fn assert_wrap(self) -> WrapAssertion<'a> {
        match self.command {
            Command::Wrap(wrap) => WrapAssertion {
                wrap,
                context: self.context,
            },
            other => panic!("{}: Expected Wrap, found {}", self.context, other),
        }
    }

    /// Assert this command is a Probability and return probability-specific assertions
    pub fn assert_probability(self) -> ProbabilityAssertion<'a> {
        match self.command {
            Command::Probability(probability) => ProbabilityAssertion {
                probability,
                context: self.context,
            },
            other => panic!("{}: Expected Probability, found {}", self.context, other),
        }
    }

    /// Assert this command is a Condition and return condition-specific assertions
    pub fn assert_condition(self) -> ConditionAssertion<'a> {
        match self.command {
            Command::Condition(condition) => ConditionAssertion {
                condition,
                context: self.context,
            },
            other => panic!("{}: Expected Condition, found {}", self.context, other),
        }
    }

    /// Assert this command is a Comment and return comment-specific assertions
    pub fn assert_comment(self) -> CommentAssertion<'a> {
        match self.command {
            Command::Comment(comment) => CommentAssertion {
                comment,
                context: self.context,
            },
            other => panic!("{}: Expected Comment, found {}", self.context, other),
        }
    }

    /// Assert this command is a VariableAccess and return access-specific assertions
    pub fn assert_access(self) -> AccessAssertion<'a> {
        match self.command {
            Command::VariableAccess(access) => AccessAssertion {
                access,
                context: self.context,
            },
            other => panic!("{}: Expected VariableAccess, found {}", self.context, other),
        }
    }

    /// Assert this command is a VariableAssignment and return assignment-specific assertions
    pub fn assert_assignment(self) -> AssignmentAssertion<'a> {
        match self.command {
            Command::VariableAssignment(assignment) => AssignmentAssertion {
                assignment,
                context: self.context,
            },
            other => panic!(
                "{}: Expected VariableAssignment, found {}",
                self.context, other
            ),
        }
    }

    /// Check if this command is a literal (non-panicking)
    pub fn is_literal(&self) -> bool {
        matches!(self.command, Command::Literal(_))
    }

    /// Check if this command is a sequence (non-panicking)
    pub fn is_sequence(&self) -> bool {
        matches!(self.command, Command::Sequence(_))
    }

    /// Check if this command is a variant (non-panicking)
    pub fn is_variant(&self) -> bool {
        matches!(self.command, Command::Variant(_))
    }

    /// Check if this command is a wildcard (non-panicking)
    pub fn is_wildcard(&self) -> bool {
        matches!(self.command, Command::Wildcard(_))
    }
}

// ============================================================================
// Literal Assertions
// ============================================================================

pub struct LiteralAssertion<'a> {
    literal: &'a LiteralCommand,
    context: String,
}

impl<'a> LiteralAssertion<'a> {
    /// Assert exact text match
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.literal.text, &self.context);
        self
    }

    /// Assert text starts with prefix
    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.literal.text, &self.context);
        self
    }

    /// Assert text contains substring
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.literal.text, &self.context);
        self
    }
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct SequenceAssertion<'a> {
    sequence: &'a SequenceCommand,
    context: String,
}

impl<'a> SequenceAssertion<'a> {
    /// Assert the number of children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.sequence.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize_commands(&self.sequence.children)
        );
        self
    }

    /// Assert the join separator
    pub fn separator(self, expected: &str) -> Self {
        assert_eq!(
            self.sequence.separator, expected,
            "{}: Expected separator '{}', but got '{}'",
            self.context, expected, self.sequence.separator
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assert!(
            index < self.sequence.children.len(),
            "{}: Child index {} out of bounds (sequence has {} children)",
            self.context,
            index,
            self.sequence.children.len()
        );

        let child = &self.sequence.children[index];
        assertion(CommandAssertion {
            command: child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    /// Assert on all children using a builder
    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ChildrenAssertion<'a>),
    {
        assertion(ChildrenAssertion {
            children: &self.sequence.children,
            context: format!("{}:children", self.context),
        });
        self
    }
}

// ============================================================================
// Variant Assertions
// ============================================================================

pub struct VariantAssertion<'a> {
    variant: &'a VariantCommand,
    context: String,
}

impl<'a> VariantAssertion<'a> {
    /// Assert the number of options
    pub fn option_count(self, expected: usize) -> Self {
        let actual = self.variant.options.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} options, found {} options: [{}]",
            self.context,
            expected,
            actual,
            summarize_options(self.variant)
        );
        self
    }

    /// Assert every option is a literal with these texts, in order
    pub fn option_texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .variant
            .options
            .iter()
            .map(|option| {
                option.value.as_literal_text().unwrap_or_else(|| {
                    panic!(
                        "{}: Expected literal options, found [{}]",
                        self.context,
                        summarize_options(self.variant)
                    )
                })
            })
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Expected option texts {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the selection bounds
    pub fn bounds(self, min: usize, max: usize) -> Self {
        assert_eq!(
            (self.variant.min_bound, self.variant.max_bound),
            (min, max),
            "{}: Expected bounds {}..={}, found {}..={}",
            self.context,
            min,
            max,
            self.variant.min_bound,
            self.variant.max_bound
        );
        self
    }

    /// Assert the join separator
    pub fn separator(self, expected: &str) -> Self {
        assert_eq!(
            self.variant.separator, expected,
            "{}: Expected separator '{}', but got '{}'",
            self.context, expected, self.variant.separator
        );
        self
    }

    /// Assert the sampling-method override
    pub fn sampling_method(self, expected: Option<SamplingMethod>) -> Self {
        assert_eq!(
            self.variant.sampling_method, expected,
            "{}: Expected sampling method {:?}, found {:?}",
            self.context, expected, self.variant.sampling_method
        );
        self
    }

    /// Assert the weight of a specific option
    pub fn weight(self, index: usize, expected: f64) -> Self {
        assert!(
            index < self.variant.options.len(),
            "{}: Option index {} out of bounds (variant has {} options)",
            self.context,
            index,
            self.variant.options.len()
        );
        let actual = self.variant.options[index].weight;
        assert_eq!(
            actual, expected,
            "{}: Expected options[{}] weight {}, found {}",
            self.context, index, expected, actual
        );
        self
    }

    /// Assert on a specific option's value by index
    pub fn option<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assert!(
            index < self.variant.options.len(),
            "{}: Option index {} out of bounds (variant has {} options)",
            self.context,
            index,
            self.variant.options.len()
        );

        let option = &self.variant.options[index];
        assertion(CommandAssertion {
            command: &option.value,
            context: format!("{}:options[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Wildcard Assertions
// ============================================================================

pub struct WildcardAssertion<'a> {
    wildcard: &'a WildcardCommand,
    context: String,
}

impl<'a> WildcardAssertion<'a> {
    /// Assert the wildcard has this static name
    pub fn name(self, expected: &str) -> Self {
        match &self.wildcard.name {
            WildcardName::Static(actual) => assert_eq!(
                actual, expected,
                "{}: Expected wildcard name '{}', but got '{}'",
                self.context, expected, actual
            ),
            WildcardName::Dynamic(_) => panic!(
                "{}: Expected static wildcard name '{}', found a dynamic name",
                self.context, expected
            ),
        }
        self
    }

    /// Assert the wildcard name is dynamic and assert on its template
    pub fn dynamic_name<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        match &self.wildcard.name {
            WildcardName::Dynamic(path) => assertion(CommandAssertion {
                command: path,
                context: format!("{}:name", self.context),
            }),
            WildcardName::Static(actual) => panic!(
                "{}: Expected dynamic wildcard name, found static '{}'",
                self.context, actual
            ),
        }
        self
    }

    /// Assert the sampling-method override
    pub fn sampling_method(self, expected: Option<SamplingMethod>) -> Self {
        assert_eq!(
            self.wildcard.sampling_method, expected,
            "{}: Expected sampling method {:?}, found {:?}",
            self.context, expected, self.wildcard.sampling_method
        );
        self
    }

    /// Assert the number of inline variables
    pub fn variable_count(self, expected: usize) -> Self {
        let actual = self.wildcard.variables.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} inline variables, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the name of a specific inline variable and assert on its value
    pub fn variable<F>(self, index: usize, name: &str, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assert!(
            index < self.wildcard.variables.len(),
            "{}: Variable index {} out of bounds (wildcard has {} inline variables)",
            self.context,
            index,
            self.wildcard.variables.len()
        );

        let (actual_name, value) = &self.wildcard.variables[index];
        assert_eq!(
            actual_name.as_str(),
            name,
            "{}: Expected variables[{}] to be '{}', found '{}'",
            self.context,
            index,
            name,
            actual_name
        );
        assertion(CommandAssertion {
            command: value,
            context: format!("{}:variables[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Wrap Assertions
// ============================================================================

pub struct WrapAssertion<'a> {
    wrap: &'a WrapCommand,
    context: String,
}

impl<'a> WrapAssertion<'a> {
    /// Assert on the wrapper template
    pub fn wrapper<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assertion(CommandAssertion {
            command: &self.wrap.wrapper,
            context: format!("{}:wrapper", self.context),
        });
        self
    }

    /// Assert on the wrapped inner template
    pub fn inner<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assertion(CommandAssertion {
            command: &self.wrap.inner,
            context: format!("{}:inner", self.context),
        });
        self
    }
}

// ============================================================================
// Probability Assertions
// ============================================================================

pub struct ProbabilityAssertion<'a> {
    probability: &'a ProbabilityCommand,
    context: String,
}

impl<'a> ProbabilityAssertion<'a> {
    /// Assert the inclusion chance
    pub fn chance(self, expected: f64) -> Self {
        assert_eq!(
            self.probability.chance, expected,
            "{}: Expected chance {}, found {}",
            self.context, expected, self.probability.chance
        );
        self
    }

    /// Assert the sampling-method override
    pub fn sampling_method(self, expected: Option<SamplingMethod>) -> Self {
        assert_eq!(
            self.probability.sampling_method, expected,
            "{}: Expected sampling method {:?}, found {:?}",
            self.context, expected, self.probability.sampling_method
        );
        self
    }

    /// Assert on the gated value
    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assertion(CommandAssertion {
            command: &self.probability.value,
            context: format!("{}:value", self.context),
        });
        self
    }
}

// ============================================================================
// Condition Assertions
// ============================================================================

pub struct ConditionAssertion<'a> {
    condition: &'a ConditionCommand,
    context: String,
}

impl<'a> ConditionAssertion<'a> {
    /// Assert the number of branches
    pub fn branch_count(self, expected: usize) -> Self {
        let actual = self.condition.conditions.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} branches, found {} branches",
            self.context, expected, actual
        );
        self
    }

    /// Assert on a specific branch by index
    pub fn branch<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BranchAssertion<'a>),
    {
        assert!(
            index < self.condition.conditions.len(),
            "{}: Branch index {} out of bounds (condition has {} branches)",
            self.context,
            index,
            self.condition.conditions.len()
        );

        let branch = &self.condition.conditions[index];
        assertion(BranchAssertion {
            branch,
            context: format!("{}:branches[{}]", self.context, index),
        });
        self
    }

    /// Assert an else value is present and assert on it
    pub fn else_value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        match self.condition.else_value.as_deref() {
            Some(else_value) => assertion(CommandAssertion {
                command: else_value,
                context: format!("{}:else", self.context),
            }),
            None => panic!("{}: Expected an else value, found none", self.context),
        }
        self
    }

    /// Assert no else value is present
    pub fn no_else(self) -> Self {
        assert!(
            self.condition.else_value.is_none(),
            "{}: Expected no else value, found one",
            self.context
        );
        self
    }
}

// ============================================================================
// Branch Assertions
// ============================================================================

pub struct BranchAssertion<'a> {
    branch: &'a ConditionBranch,
    context: String,
}

impl<'a> BranchAssertion<'a> {
    /// Assert the pattern source text
    pub fn pattern(self, expected: &str) -> Self {
        assert_eq!(
            self.branch.pattern_text(),
            expected,
            "{}: Expected pattern '{}', but got '{}'",
            self.context,
            expected,
            self.branch.pattern_text()
        );
        self
    }

    /// Assert the branch matches against this variable key
    pub fn keyed_on(self, expected: &str) -> Self {
        match self.branch.context_key.as_deref() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected branch keyed on '{}', found '{}'",
                self.context, expected, actual
            ),
            None => panic!(
                "{}: Expected branch keyed on '{}', found a key-less branch",
                self.context, expected
            ),
        }
        self
    }

    /// Assert the branch matches against the rendering context
    pub fn keyless(self) -> Self {
        assert!(
            self.branch.context_key.is_none(),
            "{}: Expected a key-less branch, found key '{}'",
            self.context,
            self.branch.context_key.as_deref().unwrap_or("")
        );
        self
    }

    /// Assert on the branch value
    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assertion(CommandAssertion {
            command: &self.branch.if_value,
            context: format!("{}:value", self.context),
        });
        self
    }
}

// ============================================================================
// Comment Assertions
// ============================================================================

pub struct CommentAssertion<'a> {
    comment: &'a CommentCommand,
    context: String,
}

impl<'a> CommentAssertion<'a> {
    /// Assert exact comment text
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.comment.text, &self.context);
        self
    }
}

// ============================================================================
// Variable Access Assertions
// ============================================================================

pub struct AccessAssertion<'a> {
    access: &'a VariableAccessCommand,
    context: String,
}

impl<'a> AccessAssertion<'a> {
    /// Assert the variable name
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.access.name, expected,
            "{}: Expected variable name '{}', but got '{}'",
            self.context, expected, self.access.name
        );
        self
    }

    /// Assert a default value is present and assert on it
    pub fn default<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        match self.access.default.as_deref() {
            Some(default) => assertion(CommandAssertion {
                command: default,
                context: format!("{}:default", self.context),
            }),
            None => panic!("{}: Expected a default value, found none", self.context),
        }
        self
    }

    /// Assert no default value is present
    pub fn no_default(self) -> Self {
        assert!(
            self.access.default.is_none(),
            "{}: Expected no default value, found one",
            self.context
        );
        self
    }
}

// ============================================================================
// Variable Assignment Assertions
// ============================================================================

pub struct AssignmentAssertion<'a> {
    assignment: &'a VariableAssignmentCommand,
    context: String,
}

impl<'a> AssignmentAssertion<'a> {
    /// Assert the variable name
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.assignment.name, expected,
            "{}: Expected variable name '{}', but got '{}'",
            self.context, expected, self.assignment.name
        );
        self
    }

    /// Assert whether the assignment overwrites an existing binding
    pub fn overwrite(self, expected: bool) -> Self {
        assert_eq!(
            self.assignment.overwrite, expected,
            "{}: Expected overwrite {}, found {}",
            self.context, expected, self.assignment.overwrite
        );
        self
    }

    /// Assert whether the value renders once at assignment time
    pub fn immediate(self, expected: bool) -> Self {
        assert_eq!(
            self.assignment.immediate, expected,
            "{}: Expected immediate {}, found {}",
            self.context, expected, self.assignment.immediate
        );
        self
    }

    /// Assert on the assigned value
    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assertion(CommandAssertion {
            command: &self.assignment.value,
            context: format!("{}:value", self.context),
        });
        self
    }
}

// ============================================================================
// Children Assertions (bulk operations)
// ============================================================================

pub struct ChildrenAssertion<'a> {
    children: &'a [Command],
    context: String,
}

impl<'a> ChildrenAssertion<'a> {
    /// Assert the number of children
    pub fn count(self, expected: usize) -> Self {
        let actual = self.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize_commands(self.children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CommandAssertion<'a>),
    {
        assert!(
            index < self.children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.children.len()
        );

        let child = &self.children[index];
        assertion(CommandAssertion {
            command: child,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert all children are literals
    pub fn all_literals(self) -> Self {
        for (i, child) in self.children.iter().enumerate() {
            assert!(
                matches!(child, Command::Literal(_)),
                "{}[{}]: Expected Literal, found {}",
                self.context,
                i,
                child.node_type()
            );
        }
        self
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Summarize commands as "[Literal, Variant, Literal]"
fn summarize_commands(commands: &[Command]) -> String {
    commands
        .iter()
        .map(|command| command.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarize variant option values as "[Literal, Wildcard]"
fn summarize_options(variant: &VariantCommand) -> String {
    variant
        .options
        .iter()
        .map(|option| option.value.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::VariantOption;

    fn colors() -> Command {
        Command::Variant(VariantCommand::from_values(vec![
            Command::literal("red"),
            Command::literal("green"),
        ]))
    }

    #[test]
    fn test_literal_text() {
        let cmd = Command::literal("Hello");
        assert_command(&cmd).assert_literal().text("Hello");
    }

    #[test]
    #[should_panic(expected = "root: Expected text to be 'Goodbye', but got 'Hello'")]
    fn test_literal_text_failure() {
        let cmd = Command::literal("Hello");
        assert_command(&cmd).assert_literal().text("Goodbye");
    }

    #[test]
    #[should_panic(expected = "root: Expected Variant, found Literal")]
    fn test_type_mismatch_literal_as_variant() {
        let cmd = Command::literal("Hello");
        assert_command(&cmd).assert_variant();
    }

    #[test]
    fn test_variant_options() {
        let cmd = colors();
        assert_command(&cmd)
            .assert_variant()
            .option_count(2)
            .option_texts(&["red", "green"])
            .bounds(1, 1)
            .separator(",")
            .sampling_method(None);
    }

    #[test]
    #[should_panic(expected = "root: Expected 3 options, found 2 options: [Literal, Literal]")]
    fn test_variant_option_count_failure() {
        let cmd = colors();
        assert_command(&cmd).assert_variant().option_count(3);
    }

    #[test]
    fn test_variant_weights() {
        let cmd = Command::Variant(VariantCommand::new(vec![
            VariantOption::weighted(Command::literal("a"), 3.0),
            VariantOption::new(Command::literal("b")),
        ]));
        assert_command(&cmd).assert_variant().weight(0, 3.0).weight(1, 1.0);
    }

    #[test]
    fn test_nested_assertions() {
        let cmd = Command::Sequence(SequenceCommand::new(vec![
            Command::literal("a "),
            colors(),
        ]));
        assert_command(&cmd)
            .assert_sequence()
            .child_count(2)
            .separator("")
            .child(0, |child| {
                child.assert_literal().text("a ");
            })
            .child(1, |child| {
                child.assert_variant().option(0, |option| {
                    option.assert_literal().text("red");
                });
            });
    }

    #[test]
    #[should_panic(
        expected = "root:children[1]:options[0]: Expected text to be 'blue', but got 'red'"
    )]
    fn test_nested_failure_reports_the_path() {
        let cmd = Command::Sequence(SequenceCommand::new(vec![
            Command::literal("a "),
            colors(),
        ]));
        assert_command(&cmd).assert_sequence().child(1, |child| {
            child.assert_variant().option(0, |option| {
                option.assert_literal().text("blue");
            });
        });
    }

    #[test]
    fn test_wildcard_assertions() {
        let cmd = Command::Wildcard(
            WildcardCommand::new("colors")
                .with_sampling_method(Some(SamplingMethod::Cyclical))
                .with_variables(vec![("kind".to_string(), Command::literal("calico"))]),
        );
        assert_command(&cmd)
            .assert_wildcard()
            .name("colors")
            .sampling_method(Some(SamplingMethod::Cyclical))
            .variable_count(1)
            .variable(0, "kind", |value| {
                value.assert_literal().text("calico");
            });
    }

    #[test]
    fn test_dynamic_wildcard_name() {
        let path = SequenceCommand::from_children(vec![
            Command::VariableAccess(VariableAccessCommand::new("theme")),
            Command::literal("_colors"),
        ]);
        let cmd = Command::Wildcard(WildcardCommand::from_path(path));
        assert_command(&cmd)
            .assert_wildcard()
            .dynamic_name(|name| {
                name.assert_sequence().child_count(2);
            });
    }

    #[test]
    #[should_panic(expected = "root: Expected static wildcard name 'colors', found a dynamic")]
    fn test_dynamic_name_is_not_static() {
        let path = SequenceCommand::new(vec![
            Command::VariableAccess(VariableAccessCommand::new("theme")),
            Command::literal("_colors"),
        ]);
        let cmd = Command::Wildcard(WildcardCommand::from_path(Command::Sequence(path)));
        assert_command(&cmd).assert_wildcard().name("colors");
    }

    #[test]
    fn test_condition_assertions() {
        let branch = ConditionBranch::keyed("animal", "cat", Command::literal("purring"))
            .expect("valid pattern");
        let cmd = Command::Condition(ConditionCommand::new(
            vec![branch],
            Some(Command::literal("quiet")),
        ));
        assert_command(&cmd)
            .assert_condition()
            .branch_count(1)
            .branch(0, |branch| {
                branch.keyed_on("animal").pattern("cat").value(|value| {
                    value.assert_literal().text("purring");
                });
            })
            .else_value(|value| {
                value.assert_literal().text("quiet");
            });
    }

    #[test]
    fn test_keyless_branch_without_else() {
        let branch = ConditionBranch::new("cat", Command::literal("purring")).expect("valid");
        let cmd = Command::Condition(ConditionCommand::new(vec![branch], None));
        assert_command(&cmd)
            .assert_condition()
            .branch(0, |branch| {
                branch.keyless();
            })
            .no_else();
    }

    #[test]
    fn test_probability_assertions() {
        let cmd = Command::Probability(ProbabilityCommand::new(0.5, Command::literal("x")));
        assert_command(&cmd)
            .assert_probability()
            .chance(0.5)
            .sampling_method(None)
            .value(|value| {
                value.assert_literal().text("x");
            });
    }

    #[test]
    fn test_assignment_assertions() {
        let cmd = Command::VariableAssignment(
            VariableAssignmentCommand::new("size", Command::literal("big")).with_immediate(true),
        );
        assert_command(&cmd)
            .assert_assignment()
            .name("size")
            .overwrite(true)
            .immediate(true)
            .value(|value| {
                value.assert_literal().text("big");
            });
    }

    #[test]
    fn test_access_assertions() {
        let with_default = Command::VariableAccess(
            VariableAccessCommand::new("size").with_default(Command::literal("small")),
        );
        assert_command(&with_default)
            .assert_access()
            .name("size")
            .default(|value| {
                value.assert_literal().text("small");
            });

        let bare = Command::VariableAccess(VariableAccessCommand::new("size"));
        assert_command(&bare).assert_access().no_default();
    }

    #[test]
    fn test_wrap_assertions() {
        let cmd = Command::Wrap(WrapCommand::new(
            Command::literal("photo of $$"),
            colors(),
        ));
        assert_command(&cmd)
            .assert_wrap()
            .wrapper(|wrapper| {
                wrapper.assert_literal().text_contains("$$");
            })
            .inner(|inner| {
                inner.assert_variant().option_count(2);
            });
    }

    #[test]
    fn test_comment_assertions() {
        let cmd = Command::Comment(CommentCommand::new(" note "));
        assert_command(&cmd).assert_comment().text(" note ");
    }

    #[test]
    fn test_children_assertion() {
        let cmd = Command::Sequence(SequenceCommand::new(vec![
            Command::literal("a"),
            Command::literal("b"),
        ]));
        assert_command(&cmd).assert_sequence().children(|children| {
            children
                .count(2)
                .all_literals()
                .item(0, |child| {
                    child.assert_literal().text("a");
                })
                .item(1, |child| {
                    child.assert_literal().text("b");
                });
        });
    }

    #[test]
    #[should_panic(expected = "root:children[1]: Expected Literal, found Variant")]
    fn test_all_literals_failure() {
        let cmd = Command::Sequence(SequenceCommand::new(vec![Command::literal("a"), colors()]));
        assert_command(&cmd).assert_sequence().children(|children| {
            children.all_literals();
        });
    }

    #[test]
    fn test_non_panicking_checks() {
        let literal = Command::literal("x");
        let assertion = assert_command(&literal);
        assert!(assertion.is_literal());
        assert!(!assertion.is_variant());
        assert!(!assertion.is_sequence());
        assert!(!assertion.is_wildcard());
    }
}
