//! Sampling: turning a command tree into output strings
//!
//! A [`Session`] backs one generate call. It owns the random number
//! generator, the cyclical position counters and the parse cache for
//! wildcard candidate texts, none of which belong in the tree: commands
//! stay immutable and shareable while all mutable sampling state lives
//! here. Each individual output is rendered against an [`OutputState`]
//! carrying that output's variable bindings and its transcript, the text
//! completed so far that ambient conditions match against.
//!
//! The walk in this module handles the structural nodes itself and routes
//! each choice node through its effective sampling method: `random` draws
//! independently, `cyclical` rotates through the choice space, and
//! `combinatorial` enumerates it exhaustively (the latter replaces the
//! walk entirely when it is the call-level method).

pub mod combinatorial;
pub mod context;
pub mod cyclical;
pub mod random;

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{
    wrap_text, Command, ConditionCommand, SamplingMethod, VariableAccessCommand,
    VariableAssignmentCommand, WildcardCommand, WildcardName,
};
use crate::error::GenerateError;
use crate::generator::EmptyWildcard;
use crate::parser::PromptParser;
use crate::wildcards::WildcardResolver;
use context::{Binding, VariableContext};

/// Per-call identity of a tree node.
///
/// Choice nodes keep their cyclical position in a session side table keyed
/// by address. Every stateful node sits behind its own heap allocation, and
/// every tree a session renders stays alive for the whole call: the root is
/// the caller's, candidate and deferred-value trees are held by the session
/// caches. Addresses are therefore distinct and stable as keys.
pub(crate) fn node_key<T>(node: &T) -> usize {
    node as *const T as usize
}

/// State scoped to a single output
pub(crate) struct OutputState {
    /// Variable bindings for this output's walk.
    pub(crate) context: VariableContext,
    /// Top-level text completed so far; keyless conditions match against it.
    pub(crate) transcript: String,
}

impl OutputState {
    pub(crate) fn new() -> Self {
        Self {
            context: VariableContext::new(),
            transcript: String::new(),
        }
    }
}

/// Mutable state for one generate call
pub(crate) struct Session<'a> {
    pub(crate) rng: StdRng,
    pub(crate) resolver: &'a dyn WildcardResolver,
    parser: Arc<PromptParser>,
    default_method: SamplingMethod,
    on_empty_wildcard: EmptyWildcard,
    /// Cyclical position per choice node, keyed by [`node_key`].
    cycles: HashMap<usize, u64>,
    /// Wildcard candidate texts parsed once per session.
    parsed: HashMap<String, Rc<Command>>,
    /// Deferred-value trees cloned out of assignments and inline variable
    /// specs, keyed by the source node. Created once per session and kept
    /// alive by this map, so their node addresses stay stable and their
    /// cyclical counters persist across outputs like any tree node's.
    deferred: HashMap<usize, Rc<Command>>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        resolver: &'a dyn WildcardResolver,
        parser: Arc<PromptParser>,
        default_method: SamplingMethod,
        on_empty_wildcard: EmptyWildcard,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            resolver,
            parser,
            default_method,
            on_empty_wildcard,
            cycles: HashMap::new(),
            parsed: HashMap::new(),
            deferred: HashMap::new(),
        }
    }

    /// The method governing `command`: its own override, or the call's.
    pub(crate) fn effective_method(&self, command: &Command) -> SamplingMethod {
        command.sampling_method().unwrap_or(self.default_method)
    }

    /// Render one complete output.
    ///
    /// Top-level chunks feed the transcript as they complete, so a
    /// condition later in the template can match on text produced earlier.
    /// Nested renderings never touch the transcript.
    pub(crate) fn render_output(&mut self, root: &Command) -> Result<String, GenerateError> {
        let mut state = OutputState::new();
        match root {
            Command::Sequence(sequence) => {
                for (i, child) in sequence.children.iter().enumerate() {
                    if i > 0 {
                        state.transcript.push_str(&sequence.separator);
                    }
                    let piece = self.render(child, &mut state)?;
                    state.transcript.push_str(&piece);
                }
                Ok(state.transcript)
            }
            other => self.render(other, &mut state),
        }
    }

    /// Render a node within the current output's walk.
    pub(crate) fn render(
        &mut self,
        command: &Command,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        match command {
            Command::Literal(literal) => Ok(literal.text.clone()),
            Command::Comment(_) => Ok(String::new()),
            Command::Sequence(sequence) => {
                let mut pieces = Vec::with_capacity(sequence.children.len());
                for child in &sequence.children {
                    pieces.push(self.render(child, state)?);
                }
                Ok(pieces.join(&sequence.separator))
            }
            // During a walk a combinatorial override rotates through its
            // enumeration one entry per visit, exactly like a cyclical one.
            Command::Variant(variant) => match self.effective_method(command) {
                SamplingMethod::Random => random::render_variant(self, variant, state),
                _ => cyclical::render_variant(self, variant, state),
            },
            Command::Wildcard(wildcard) => match self.effective_method(command) {
                SamplingMethod::Random => random::render_wildcard(self, wildcard, state),
                _ => cyclical::render_wildcard(self, wildcard, state),
            },
            Command::Probability(probability) => match self.effective_method(command) {
                SamplingMethod::Random => random::render_probability(self, probability, state),
                _ => cyclical::render_probability(self, probability, state),
            },
            Command::Wrap(wrap) => {
                let inner = self.render(&wrap.inner, state)?;
                let wrapper = self.render(&wrap.wrapper, state)?;
                Ok(wrap_text(&wrapper, &inner))
            }
            Command::Condition(condition) => self.render_condition(condition, state),
            Command::VariableAccess(access) => self.render_access(access, state),
            Command::VariableAssignment(assignment) => self.render_assignment(assignment, state),
        }
    }

    /// Advance a node's cyclical counter, returning the position to use for
    /// this visit. `choices` must be non-zero.
    pub(crate) fn next_cycle(&mut self, key: usize, choices: u64) -> u64 {
        let counter = self.cycles.entry(key).or_insert(0);
        let position = *counter % choices;
        *counter += 1;
        position
    }

    /// The wildcard's name for this visit; dynamic names re-render each time.
    pub(crate) fn wildcard_name(
        &mut self,
        wildcard: &WildcardCommand,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        match &wildcard.name {
            WildcardName::Static(name) => Ok(name.clone()),
            WildcardName::Dynamic(path) => self.render(path, state),
        }
    }

    /// What an empty wildcard resolution yields under the configured policy.
    pub(crate) fn empty_wildcard_result(
        &self,
        name: &str,
        method: SamplingMethod,
    ) -> Result<String, GenerateError> {
        let fatal = match self.on_empty_wildcard {
            EmptyWildcard::Error => true,
            EmptyWildcard::Ignore => false,
            EmptyWildcard::MethodDefault => method == SamplingMethod::Random,
        };
        if fatal {
            return Err(GenerateError::UnresolvedWildcard(name.to_string()));
        }
        warn!("Wildcard '{}' resolved to no values", name);
        Ok(String::new())
    }

    /// Parse a wildcard candidate text, caching the tree for the session.
    pub(crate) fn parse_candidate(&mut self, text: &str) -> Result<Rc<Command>, GenerateError> {
        if let Some(command) = self.parsed.get(text) {
            return Ok(Rc::clone(command));
        }
        let command = Rc::new(self.parser.parse(text)?);
        self.parsed.insert(text.to_string(), Rc::clone(&command));
        Ok(command)
    }

    /// The session-cached deferred clone of a value subtree.
    pub(crate) fn deferred_value(&mut self, value: &Command) -> Rc<Command> {
        let key = node_key(value);
        if let Some(command) = self.deferred.get(&key) {
            return Rc::clone(command);
        }
        let command = Rc::new(value.clone());
        self.deferred.insert(key, Rc::clone(&command));
        command
    }

    /// Push a scope holding the wildcard's inline variables, all deferred.
    pub(crate) fn push_inline_scope(&mut self, state: &mut OutputState, wildcard: &WildcardCommand) {
        state.context.push_scope();
        for (name, value) in &wildcard.variables {
            let value = self.deferred_value(value);
            state.context.set(name.clone(), Binding::Deferred(value));
        }
    }

    /// Render one wildcard candidate under the wildcard's inline variables.
    pub(crate) fn render_candidate(
        &mut self,
        wildcard: &WildcardCommand,
        text: &str,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        let template = self.parse_candidate(text)?;
        self.push_inline_scope(state, wildcard);
        let result = self.render(&template, state);
        state.context.pop_scope();
        result
    }

    fn render_condition(
        &mut self,
        condition: &ConditionCommand,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        for branch in &condition.conditions {
            let matched = match &branch.context_key {
                Some(key) => {
                    let haystack = self.variable_text(key, state)?;
                    branch.matches(&haystack)
                }
                None => branch.matches(&state.transcript),
            };
            if matched {
                return self.render(&branch.if_value, state);
            }
        }
        match &condition.else_value {
            Some(else_value) => self.render(else_value, state),
            None => Ok(String::new()),
        }
    }

    /// A variable's current rendering; unbound reads as empty text.
    fn variable_text(
        &mut self,
        name: &str,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        let binding = match state.context.get(name) {
            Some(binding) => binding.clone(),
            None => return Ok(String::new()),
        };
        match binding {
            Binding::Evaluated(text) => Ok(text),
            Binding::Deferred(command) => self.render(&command, state),
        }
    }

    fn render_access(
        &mut self,
        access: &VariableAccessCommand,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        // Deferred bindings re-render on every read, so two reads of the
        // same variable may differ when its value samples randomly.
        if let Some(binding) = state.context.get(&access.name).cloned() {
            return match binding {
                Binding::Evaluated(text) => Ok(text),
                Binding::Deferred(command) => self.render(&command, state),
            };
        }
        // A default renders in place of the missing binding and is never
        // written back to the context.
        match &access.default {
            Some(default) => self.render(default, state),
            None => {
                warn!("Variable '{}' is not set and has no default", access.name);
                Ok(String::new())
            }
        }
    }

    fn render_assignment(
        &mut self,
        assignment: &VariableAssignmentCommand,
        state: &mut OutputState,
    ) -> Result<String, GenerateError> {
        if !assignment.overwrite && state.context.is_bound(&assignment.name) {
            return Ok(String::new());
        }
        let binding = if assignment.immediate {
            Binding::Evaluated(self.render(&assignment.value, state)?)
        } else {
            Binding::Deferred(self.deferred_value(&assignment.value))
        };
        state.context.set(assignment.name.clone(), binding);
        Ok(String::new())
    }
}
