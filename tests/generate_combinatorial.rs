//! Integration tests for combinatorial generation
//!
//! Exercises exhaustive enumeration end to end, following the house
//! testing guidelines:
//! - Compare full output vectors; enumeration order is part of the API
//! - Test one behavior per test

use std::sync::Arc;

use promptspin::{MemoryResolver, PromptGenerator, SamplingMethod};

fn generator() -> PromptGenerator {
    let mut resolver = MemoryResolver::new();
    resolver.insert("colors", ["red", "green", "blue"]);
    resolver.insert("pets", ["{big|small} cat", "dog"]);
    PromptGenerator::new(Arc::new(resolver)).with_seed(0)
}

fn outputs(template: &str, count: usize) -> Vec<String> {
    generator()
        .generate(template, SamplingMethod::Combinatorial, count)
        .unwrap()
}

#[test]
fn test_options_enumerate_in_declaration_order() {
    assert_eq!(outputs("{a|b|c}", 10), ["a", "b", "c"]);
}

#[test]
fn test_literal_template_is_a_single_output() {
    // The full enumeration of plain text has one entry, whatever the count.
    assert_eq!(outputs("a photo of a cat", 5), ["a photo of a cat"]);
}

#[test]
fn test_count_truncates_the_enumeration() {
    assert_eq!(outputs("{a|b|c}", 2), ["a", "b"]);
}

#[test]
fn test_count_zero_returns_nothing() {
    assert!(outputs("{a|b}", 0).is_empty());
}

#[test]
fn test_duplicate_renderings_collapse() {
    assert_eq!(outputs("{a|a|b}", 10), ["a", "b"]);
}

#[test]
fn test_sequence_product_varies_the_last_chunk_fastest() {
    assert_eq!(outputs("{a|b}-{x|y}", 10), ["a-x", "a-y", "b-x", "b-y"]);
}

#[test]
fn test_truncated_product_keeps_enumeration_order() {
    assert_eq!(outputs("{a|b}{c|d}", 3), ["ac", "ad", "bc"]);
}

#[test]
fn test_two_of_three_bound_enumerates_pairs() {
    assert_eq!(
        outputs("a {2$$,$$x|y|z}", 10),
        ["a x,y", "a x,z", "a y,z"]
    );
}

#[test]
fn test_bound_range_lists_smaller_picks_first() {
    assert_eq!(outputs("{1-2$$ $$a|b}", 10), ["a", "b", "a b"]);
}

#[test]
fn test_pick_of_identical_renderings_is_skipped() {
    // The only 2-combination renders both members to "x" and is dropped.
    assert!(outputs("{2$$,$$x|x}", 10).is_empty());
}

#[test]
fn test_wildcard_enumerates_every_value() {
    assert_eq!(outputs("__colors__", 10), ["red", "green", "blue"]);
}

#[test]
fn test_wildcard_values_expand_as_templates() {
    assert_eq!(outputs("__pets__", 10), ["big cat", "small cat", "dog"]);
}

#[test]
fn test_empty_wildcard_is_the_identity_by_default() {
    assert_eq!(outputs("a __missing__ b", 10), ["a  b"]);
}

#[test]
fn test_probability_lists_the_value_then_the_empty_arm() {
    assert_eq!(outputs("a{0.5:: hat}", 10), ["a hat", "a"]);
}

#[test]
fn test_certain_probability_has_no_empty_arm() {
    assert_eq!(outputs("a{2:: hat}", 10), ["a hat"]);
}

#[test]
fn test_cyclical_override_rotates_within_the_expansion() {
    // Three rotations land on a, b, a; the distinct set is {a, b}.
    assert_eq!(outputs("{@a|b}", 3), ["a", "b"]);
}

#[test]
fn test_random_override_draws_within_the_expansion() {
    for entry in outputs("{~a|b}", 4) {
        assert!(entry == "a" || entry == "b", "unexpected entry {:?}", entry);
    }
}

#[test]
fn test_deferred_variable_re_expands_per_read() {
    assert_eq!(
        outputs("${c={x|y}}${c}-${c}", 10),
        ["x-x", "x-y", "y-x", "y-y"]
    );
}

#[test]
fn test_immediate_variable_expands_once() {
    assert_eq!(outputs("${c=!{x|y}}${c}-${c}", 10), ["x-x"]);
}

#[test]
fn test_nested_variants_flatten_into_the_enumeration() {
    assert_eq!(
        outputs("{red|{dark|light} blue}", 10),
        ["red", "dark blue", "light blue"]
    );
}

#[test]
fn test_wrap_combines_every_wrapper_with_every_inner() {
    assert_eq!(
        outputs("%{{a|b} $${x|y}}", 10),
        ["a x", "b x", "a y", "b y"]
    );
}
