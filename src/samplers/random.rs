//! Independent weighted draws
//!
//! Every visit draws afresh from the session RNG: variants pick `k`
//! options with replacement, wildcards pick one candidate uniformly, and
//! probability blocks flip a biased coin. Nothing carries over between
//! visits, outputs, or calls beyond the RNG stream itself, which is why a
//! seeded generator reproduces its outputs exactly.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::{OutputState, Session};
use crate::commands::{ProbabilityCommand, SamplingMethod, VariantCommand, WildcardCommand};
use crate::error::GenerateError;

pub(crate) fn render_variant(
    session: &mut Session,
    variant: &VariantCommand,
    state: &mut OutputState,
) -> Result<String, GenerateError> {
    if variant.options.is_empty() {
        return Ok(String::new());
    }
    let count = session.rng.gen_range(variant.min_bound..=variant.max_bound);
    // An all-zero weight vector has no valid distribution; fall back to
    // uniform picks instead of refusing the variant.
    let weighted = WeightedIndex::new(variant.weights()).ok();
    let mut pieces = Vec::with_capacity(count);
    for _ in 0..count {
        let index = match &weighted {
            Some(distribution) => distribution.sample(&mut session.rng),
            None => session.rng.gen_range(0..variant.options.len()),
        };
        pieces.push(session.render(&variant.options[index].value, state)?);
    }
    Ok(pieces.join(&variant.separator))
}

pub(crate) fn render_wildcard(
    session: &mut Session,
    wildcard: &WildcardCommand,
    state: &mut OutputState,
) -> Result<String, GenerateError> {
    let name = session.wildcard_name(wildcard, state)?;
    let values = session.resolver.resolve(&name);
    if values.is_empty() {
        return session.empty_wildcard_result(&name, SamplingMethod::Random);
    }
    let index = session.rng.gen_range(0..values.len());
    session.render_candidate(wildcard, &values[index], state)
}

pub(crate) fn render_probability(
    session: &mut Session,
    probability: &ProbabilityCommand,
    state: &mut OutputState,
) -> Result<String, GenerateError> {
    let include = if probability.always_includes() {
        true
    } else if probability.never_includes() {
        false
    } else {
        session.rng.gen::<f64>() < probability.chance
    };
    if include {
        session.render(&probability.value, state)
    } else {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarConfig;
    use crate::generator::EmptyWildcard;
    use crate::parser;
    use crate::wildcards::{MemoryResolver, WildcardResolver};

    fn seeded_session<'a>(resolver: &'a dyn WildcardResolver, seed: u64) -> Session<'a> {
        let parser = parser::shared_parser(&GrammarConfig::default()).unwrap();
        Session::new(
            resolver,
            parser,
            SamplingMethod::Random,
            EmptyWildcard::MethodDefault,
            Some(seed),
        )
    }

    fn outputs(template: &str, seed: u64, count: usize) -> Vec<String> {
        let mut resolver = MemoryResolver::new();
        resolver.insert("colors", ["red", "green", "blue"]);
        let mut session = seeded_session(&resolver, seed);
        let root = parser::parse(template).unwrap();
        (0..count)
            .map(|_| session.render_output(&root).unwrap())
            .collect()
    }

    #[test]
    fn test_same_seed_reproduces_outputs() {
        let first = outputs("a {red|green|blue} __colors__ box", 7, 5);
        let second = outputs("a {red|green|blue} __colors__ box", 7, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_variant_draws_only_declared_options() {
        for output in outputs("{red|green|blue}", 11, 20) {
            assert!(
                ["red", "green", "blue"].contains(&output.as_str()),
                "unexpected output {:?}",
                output
            );
        }
    }

    #[test]
    fn test_bound_draw_count_stays_in_range() {
        for output in outputs("{1-3$$ $$red|green|blue}", 3, 20) {
            let picks = output.split(' ').count();
            assert!((1..=3).contains(&picks), "unexpected output {:?}", output);
        }
    }

    #[test]
    fn test_bound_draws_with_replacement_can_repeat() {
        // Two draws from a single option must repeat it.
        let output = &outputs("{2$$-$$only}", 1, 1)[0];
        assert_eq!(output, "only-only");
    }

    #[test]
    fn test_zero_weight_option_is_never_drawn() {
        for output in outputs("{0::red|1::green}", 13, 30) {
            assert_eq!(output, "green");
        }
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_uniform() {
        let seen: std::collections::HashSet<String> =
            outputs("{0::red|0::green}", 17, 40).into_iter().collect();
        assert!(seen.contains("red"));
        assert!(seen.contains("green"));
    }

    #[test]
    fn test_probability_extremes() {
        // Chances clamp into [0, 1], so 2 always includes and 0 never does.
        for output in outputs("{2::sure}", 5, 10) {
            assert_eq!(output, "sure");
        }
        for output in outputs("{0::never}", 5, 10) {
            assert_eq!(output, "");
        }
    }

    #[test]
    fn test_wildcard_draws_resolved_values() {
        for output in outputs("__colors__", 23, 20) {
            assert!(["red", "green", "blue"].contains(&output.as_str()));
        }
    }

    #[test]
    fn test_wildcard_values_are_templates() {
        let mut resolver = MemoryResolver::new();
        resolver.insert("animals", ["{big|small} cat"]);
        let mut session = seeded_session(&resolver, 2);
        let root = parser::parse("__animals__").unwrap();
        let output = session.render_output(&root).unwrap();
        assert!(output == "big cat" || output == "small cat");
    }

    #[test]
    fn test_weighted_draws_favor_heavy_option() {
        let outputs = outputs("{9::heavy|1::light}", 29, 200);
        let heavy = outputs.iter().filter(|o| o.as_str() == "heavy").count();
        assert!(heavy > 120, "heavy drawn {} times of 200", heavy);
    }

    #[test]
    fn test_empty_variant_renders_empty() {
        let resolver = MemoryResolver::new();
        let mut session = seeded_session(&resolver, 0);
        let variant = VariantCommand::new(Vec::new());
        let mut state = OutputState::new();
        assert_eq!(
            render_variant(&mut session, &variant, &mut state).unwrap(),
            ""
        );
    }
}
