//! Command-line interface for promptspin
//! Expands a prompt template into generated outputs, one per line.
//!
//! Usage:
//!   promptspin "a {red|blue} cat"                      - one random output
//!   promptspin -n 5 -w ./wildcards "a __colors__ cat"  - five outputs with file wildcards
//!   promptspin -m combinatorial -n 20 "{a|b}-{x|y}"    - up to 20 combinations
//!   promptspin --seed 42 -n 3 "{a|b|c}"                - reproducible outputs

use clap::{Parser, ValueEnum};
use promptspin::{
    DirectoryResolver, GrammarConfig, MemoryResolver, PromptGenerator, SamplingMethod,
    WildcardResolver,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "promptspin")]
#[command(version)]
#[command(about = "Expand a prompt template into generated outputs")]
struct Args {
    /// The template to expand
    template: String,

    /// Number of outputs to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Sampling method for nodes without an in-template override
    #[arg(short, long, value_enum, default_value_t = Method::Random)]
    method: Method,

    /// Directory of wildcard collection files (.txt, .json, .yaml)
    #[arg(short, long)]
    wildcards: Option<PathBuf>,

    /// Seed for reproducible random sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Squash whitespace runs in outputs to single spaces
    #[arg(long)]
    squash_whitespace: bool,

    /// YAML file with custom grammar delimiters
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// The sampling method as named on the command line
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Method {
    Random,
    Combinatorial,
    Cyclical,
}

impl From<Method> for SamplingMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Random => SamplingMethod::Random,
            Method::Combinatorial => SamplingMethod::Combinatorial,
            Method::Cyclical => SamplingMethod::Cyclical,
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    let resolver: Arc<dyn WildcardResolver> = match args.wildcards {
        Some(root) => Arc::new(DirectoryResolver::new(root)),
        None => Arc::new(MemoryResolver::new()),
    };

    let mut generator = PromptGenerator::new(resolver)
        .with_config(config)
        .with_ignore_whitespace(args.squash_whitespace);
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }

    match generator.generate(&args.template, args.method.into(), args.count) {
        Ok(outputs) => {
            for output in outputs {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Load grammar delimiters from a YAML file, or fall back to the defaults.
fn load_config(path: Option<&Path>) -> Result<GrammarConfig, String> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
            serde_yaml::from_str(&text)
                .map_err(|e| format!("invalid config {}: {}", path.display(), e))
        }
        None => Ok(GrammarConfig::default()),
    }
}
