//! The prompt generation facade
//!
//! [`PromptGenerator`] ties the parser, the wildcard resolver, and the
//! sampling engine together behind one call: hand it a template, a
//! sampling method, and a count, and it returns concrete outputs. The
//! generator itself is cheap and immutable; every call builds a fresh
//! session, so calls never interfere and a seeded generator reproduces
//! its outputs exactly.

use std::sync::Arc;

use crate::commands::{Command, SamplingMethod};
use crate::config::GrammarConfig;
use crate::error::GenerateError;
use crate::parser::shared_parser;
use crate::samplers::{combinatorial, OutputState, Session};
use crate::wildcards::WildcardResolver;

/// What an empty wildcard resolution means for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyWildcard {
    /// Fail random generation, contribute the empty string elsewhere.
    ///
    /// A random draw from nothing has no meaningful result, so it errs.
    /// Combinatorial and cyclical enumeration treat the wildcard as the
    /// empty identity and log a warning.
    #[default]
    MethodDefault,
    /// Always fail with [`GenerateError::UnresolvedWildcard`].
    Error,
    /// Always contribute the empty string, logging a warning.
    Ignore,
}

/// Turns templates into generated outputs
///
/// ```
/// use promptspin::{MemoryResolver, PromptGenerator, SamplingMethod};
/// use std::sync::Arc;
///
/// let mut resolver = MemoryResolver::new();
/// resolver.insert("colors", ["red", "blue"]);
/// let generator = PromptGenerator::new(Arc::new(resolver));
/// let outputs = generator
///     .generate("a __colors__ box", SamplingMethod::Combinatorial, 10)
///     .unwrap();
/// assert_eq!(outputs, ["a red box", "a blue box"]);
/// ```
pub struct PromptGenerator {
    resolver: Arc<dyn WildcardResolver>,
    config: GrammarConfig,
    seed: Option<u64>,
    on_empty_wildcard: EmptyWildcard,
    ignore_whitespace: bool,
}

impl PromptGenerator {
    pub fn new(resolver: Arc<dyn WildcardResolver>) -> Self {
        Self {
            resolver,
            config: GrammarConfig::default(),
            seed: None,
            on_empty_wildcard: EmptyWildcard::default(),
            ignore_whitespace: false,
        }
    }

    /// Use a non-default grammar configuration for template parsing.
    ///
    /// Wildcard candidate texts parse under the same configuration.
    pub fn with_config(mut self, config: GrammarConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the random number generator for reproducible random sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose what an empty wildcard resolution does.
    pub fn with_empty_wildcard(mut self, policy: EmptyWildcard) -> Self {
        self.on_empty_wildcard = policy;
        self
    }

    /// Squash whitespace runs in finished outputs to single spaces.
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Parse `template` and generate up to `count` outputs.
    ///
    /// Random and cyclical sampling return exactly `count` outputs;
    /// combinatorial sampling returns the full enumeration when it is
    /// smaller than `count`.
    pub fn generate(
        &self,
        template: &str,
        method: SamplingMethod,
        count: usize,
    ) -> Result<Vec<String>, GenerateError> {
        let parser = shared_parser(&self.config)?;
        let root = parser.parse(template)?;
        self.generate_tree(&root, method, count)
    }

    /// Generate from an already-parsed command tree.
    pub fn generate_tree(
        &self,
        root: &Command,
        method: SamplingMethod,
        count: usize,
    ) -> Result<Vec<String>, GenerateError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let parser = shared_parser(&self.config)?;
        let mut session = Session::new(
            self.resolver.as_ref(),
            parser,
            method,
            self.on_empty_wildcard,
            self.seed,
        );
        let outputs = match method {
            SamplingMethod::Combinatorial => {
                let mut state = OutputState::new();
                combinatorial::expand(&mut session, root, &mut state, count)?
            }
            _ => {
                let mut outputs = Vec::with_capacity(count);
                for _ in 0..count {
                    outputs.push(session.render_output(root)?);
                }
                outputs
            }
        };
        if self.ignore_whitespace {
            return Ok(outputs.iter().map(|s| squash_whitespace(s)).collect());
        }
        Ok(outputs)
    }
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
