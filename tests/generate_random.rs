//! Integration tests for random generation
//!
//! Drives the generator end to end with the random sampling method,
//! following the house testing guidelines:
//! - Seed the generator wherever outputs are compared exactly
//! - Assert membership, not position, for genuinely random draws
//! - Test one behavior per test

use std::sync::Arc;

use promptspin::{EmptyWildcard, GenerateError, MemoryResolver, PromptGenerator, SamplingMethod};

fn generator() -> PromptGenerator {
    let mut resolver = MemoryResolver::new();
    resolver.insert("colors", ["red", "green", "blue"]);
    resolver.insert("animals", ["{big|small} cat"]);
    PromptGenerator::new(Arc::new(resolver)).with_seed(42)
}

fn outputs(template: &str, count: usize) -> Vec<String> {
    generator()
        .generate(template, SamplingMethod::Random, count)
        .unwrap()
}

#[test]
fn test_returns_exactly_count_outputs() {
    assert_eq!(outputs("a {red|blue} box", 7).len(), 7);
}

#[test]
fn test_count_zero_returns_nothing() {
    assert!(outputs("{a|b}", 0).is_empty());
}

#[test]
fn test_outputs_come_from_declared_options() {
    for output in outputs("a {red|green|blue} box", 20) {
        assert!(
            ["a red box", "a green box", "a blue box"].contains(&output.as_str()),
            "unexpected output {:?}",
            output
        );
    }
}

#[test]
fn test_same_seed_reproduces_outputs() {
    let template = "{a|b|c} __colors__ {0.5::x}";
    let first = outputs(template, 10);
    let second = outputs(template, 10);
    assert_eq!(first, second);
}

#[test]
fn test_unseeded_generation_is_well_formed() {
    let mut resolver = MemoryResolver::new();
    resolver.insert("colors", ["red", "green", "blue"]);
    let generator = PromptGenerator::new(Arc::new(resolver));
    let outputs = generator
        .generate("__colors__", SamplingMethod::Random, 8)
        .unwrap();
    assert_eq!(outputs.len(), 8);
    for output in outputs {
        assert!(["red", "green", "blue"].contains(&output.as_str()));
    }
}

#[test]
fn test_bound_variant_draws_between_min_and_max() {
    for output in outputs("{1-3$$ $$red|green|blue}", 20) {
        let picks = output.split(' ').count();
        assert!((1..=3).contains(&picks), "unexpected output {:?}", output);
    }
}

#[test]
fn test_exact_bound_draws_exactly_that_many() {
    for output in outputs("{2$$-$$red|green|blue}", 20) {
        assert_eq!(output.split('-').count(), 2, "unexpected output {:?}", output);
    }
}

#[test]
fn test_bound_draws_are_with_replacement() {
    // Two draws from a single option can only repeat it.
    assert_eq!(outputs("{2$$-$$only}", 1), ["only-only"]);
}

#[test]
fn test_weighted_draws_favor_the_heavy_option() {
    let outputs = outputs("{9::heavy|1::light}", 200);
    let heavy = outputs.iter().filter(|o| o.as_str() == "heavy").count();
    assert!(heavy > 120, "heavy drawn {} times of 200", heavy);
}

#[test]
fn test_zero_weight_option_is_never_drawn() {
    for output in outputs("{0::red|1::green}", 30) {
        assert_eq!(output, "green");
    }
}

#[test]
fn test_probability_extremes_are_deterministic() {
    // Chances clamp into [0, 1]; 2 always includes, 0 never does.
    for output in outputs("{2::sure} thing", 10) {
        assert_eq!(output, "sure thing");
    }
    for output in outputs("{0::never} thing", 10) {
        assert_eq!(output, " thing");
    }
}

#[test]
fn test_mid_probability_produces_both_arms() {
    let seen = outputs("{0.5::x}y", 40);
    assert!(seen.iter().any(|o| o == "xy"), "value arm never taken");
    assert!(seen.iter().any(|o| o == "y"), "empty arm never taken");
}

#[test]
fn test_wildcard_draws_resolved_values() {
    for output in outputs("__colors__", 20) {
        assert!(["red", "green", "blue"].contains(&output.as_str()));
    }
}

#[test]
fn test_wildcard_values_are_parsed_as_templates() {
    for output in outputs("__animals__", 10) {
        assert!(
            output == "big cat" || output == "small cat",
            "unexpected output {:?}",
            output
        );
    }
}

#[test]
fn test_empty_wildcard_fails_random_generation() {
    match generator().generate("__missing__", SamplingMethod::Random, 1) {
        Err(GenerateError::UnresolvedWildcard(name)) => assert_eq!(name, "missing"),
        other => panic!("Expected an unresolved wildcard error, got {:?}", other),
    }
}

#[test]
fn test_empty_wildcard_can_be_ignored() {
    let outputs = generator()
        .with_empty_wildcard(EmptyWildcard::Ignore)
        .generate("a__missing__b", SamplingMethod::Random, 1)
        .unwrap();
    assert_eq!(outputs, ["ab"]);
}

#[test]
fn test_whitespace_squashing_cleans_outputs() {
    let outputs = generator()
        .with_ignore_whitespace(true)
        .generate("a  spaced  {x|x}  out", SamplingMethod::Random, 1)
        .unwrap();
    assert_eq!(outputs, ["a spaced x out"]);
}
