//! Integration tests for variant block parsing
//!
//! Exercises variant syntax through the public parse API following the
//! house testing guidelines:
//! - Use assert_command for deep structure verification
//! - Test one construct per test
//! - Verify structure and content, not just counts

use promptspin::testing::assert_command;
use promptspin::{parse, GrammarConfig, ParseError, PromptParser, SamplingMethod};

#[test]
fn test_simple_variant() {
    // {red|green|blue}: three literal options, defaults everywhere else.
    let command = parse("{red|green|blue}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(3)
        .option_texts(&["red", "green", "blue"])
        .bounds(1, 1)
        .separator(",")
        .sampling_method(None);
}

#[test]
fn test_single_option_variant() {
    let command = parse("{only}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(1)
        .option(0, |option| {
            option.assert_literal().text("only");
        });
}

#[test]
fn test_empty_variant_is_one_blank_option() {
    let command = parse("{}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(1)
        .option(0, |option| {
            option.assert_literal().text("");
        });
}

#[test]
fn test_blank_options_are_kept() {
    // {|red|blue}: the leading blank option is a real choice.
    let command = parse("{|red|blue}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(3)
        .option_texts(&["", "red", "blue"]);
}

#[test]
fn test_option_whitespace_handling() {
    // Leading whitespace of each option is dropped, trailing rides along.
    let command = parse("{red | green }").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_texts(&["red ", "green "]);
}

#[test]
fn test_weighted_options() {
    let command = parse("{2::red|1::blue}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(2)
        .weight(0, 2.0)
        .weight(1, 1.0)
        .option_texts(&["red", "blue"]);
}

#[test]
fn test_fractional_weight_spellings() {
    // All three decimal spellings are accepted.
    let command = parse("{0.5::a|.5::b|5.::c}").unwrap();

    assert_command(&command)
        .assert_variant()
        .weight(0, 0.5)
        .weight(1, 0.5)
        .weight(2, 5.0);
}

#[test]
fn test_exact_bound() {
    let command = parse("{2$$red|green|blue}").unwrap();

    assert_command(&command)
        .assert_variant()
        .bounds(2, 2)
        .separator(",");
}

#[test]
fn test_bound_range() {
    let command = parse("{1-2$$red|green|blue}").unwrap();

    assert_command(&command).assert_variant().bounds(1, 2);
}

#[test]
fn test_open_lower_bound_defaults_to_one() {
    let command = parse("{-2$$red|green|blue}").unwrap();

    assert_command(&command).assert_variant().bounds(1, 2);
}

#[test]
fn test_open_upper_bound_defaults_to_option_count() {
    let command = parse("{2-$$red|green|blue}").unwrap();

    assert_command(&command).assert_variant().bounds(2, 3);
}

#[test]
fn test_bound_clamps_to_option_count() {
    // A written bound larger than the option list shrinks to fit.
    let command = parse("{4$$red|green}").unwrap();

    assert_command(&command).assert_variant().bounds(2, 2);
}

#[test]
fn test_inverted_bound_is_rejected() {
    match parse("{3-2$$red|green|blue}") {
        Err(ParseError::InvalidBound { min, max, .. }) => {
            assert_eq!((min, max), (3, 2));
        }
        other => panic!("Expected an invalid bound error, got {:?}", other),
    }
}

#[test]
fn test_custom_separator_is_verbatim() {
    // The separator between the $$ markers is kept exactly, spaces included.
    let command = parse("{2$$ and $$red|green|blue}").unwrap();

    assert_command(&command)
        .assert_variant()
        .bounds(2, 2)
        .separator(" and ");
}

#[test]
fn test_pipe_separator_does_not_split_options() {
    let command = parse("{2$$|$$red|green}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(2)
        .separator("|");
}

#[test]
fn test_sampling_method_symbols() {
    for (input, method) in [
        ("{~red|blue}", SamplingMethod::Random),
        ("{!red|blue}", SamplingMethod::Combinatorial),
        ("{@red|blue}", SamplingMethod::Cyclical),
    ] {
        let command = parse(input).unwrap();

        assert_command(&command)
            .assert_variant()
            .option_count(2)
            .sampling_method(Some(method));
    }
}

#[test]
fn test_nested_variant_option() {
    // The second option is itself a sequence holding a nested variant.
    let command = parse("{red|{dark |light }blue}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option_count(2)
        .option(0, |option| {
            option.assert_literal().text("red");
        })
        .option(1, |option| {
            option
                .assert_sequence()
                .child_count(2)
                .child(0, |child| {
                    child.assert_variant().option_texts(&["dark ", "light "]);
                })
                .child(1, |child| {
                    child.assert_literal().text("blue");
                });
        });
}

#[test]
fn test_wildcard_option() {
    let command = parse("{__colors__|plain}").unwrap();

    assert_command(&command)
        .assert_variant()
        .option(0, |option| {
            option.assert_wildcard().name("colors");
        })
        .option(1, |option| {
            option.assert_literal().text("plain");
        });
}

#[test]
fn test_variant_inside_a_sequence() {
    let command = parse("a {cat|dog} sits").unwrap();

    assert_command(&command)
        .assert_sequence()
        .child_count(3)
        .child(0, |child| {
            child.assert_literal().text("a ");
        })
        .child(1, |child| {
            child.assert_variant().option_texts(&["cat", "dog"]);
        })
        .child(2, |child| {
            child.assert_literal().text(" sits");
        });
}

#[test]
fn test_unclosed_variant_is_a_syntax_error() {
    match parse("ok {a|b") {
        Err(ParseError::Syntax { offset, .. }) => assert_eq!(offset, 3),
        other => panic!("Expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_custom_variant_delimiters() {
    let config = GrammarConfig::default().with_variant_delimiters("<", ">");
    let parser = PromptParser::new(config).unwrap();

    let command = parser.parse("<red|blue>").unwrap();
    assert_command(&command)
        .assert_variant()
        .option_texts(&["red", "blue"]);

    // The default braces lose their meaning under the custom config.
    let command = parser.parse("{red|blue}").unwrap();
    assert_command(&command).assert_literal().text("{red|blue}");
}
