//! # promptspin
//!
//! A templating language for generative text prompts.
//!
//! Templates mix plain text with variant blocks (`{red|blue}`), wildcard
//! lookups (`__colors__`), variables (`${size=small}`), chance-gated
//! content, conditions, and wrappers. [`PromptGenerator`] compiles a
//! template once and produces outputs from it under a random,
//! combinatorial, or cyclical sampling method.
//!
//! ## Testing
//!
//! Parser tests assert on full command tree shapes through the fluent
//! builders in the [testing](crate::testing) module instead of matching
//! nodes by hand.

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
mod samplers;
pub mod testing;
pub mod wildcards;

pub use commands::{Command, SamplingMethod};
pub use config::GrammarConfig;
pub use error::{ConfigError, GenerateError, ParseError};
pub use generator::{squash_whitespace, EmptyWildcard, PromptGenerator};
pub use parser::{parse, parse_with_config, PromptParser};
pub use wildcards::{DirectoryResolver, MemoryResolver, WildcardResolver};
