//! Exhaustive bounded enumeration
//!
//! [`expand`] lists a node's distinct renderings in declaration order,
//! truncated to the requested limit. Truncation happens at every node: the
//! first `limit` entries of a declaration-ordered product only ever combine
//! factor entries that themselves sit below `limit`, so cutting early loses
//! nothing and keeps intermediate lists small.

use std::collections::HashSet;

use log::warn;

use super::context::Binding;
use super::{OutputState, Session};
use crate::commands::{
    wrap_text, Command, ConditionCommand, ProbabilityCommand, SamplingMethod, SequenceCommand,
    VariableAccessCommand, VariableAssignmentCommand, VariantCommand, WildcardCommand, WrapCommand,
};
use crate::error::GenerateError;

/// Declaration-ordered set of renderings with a hard cap.
struct Expansion {
    seen: HashSet<String>,
    entries: Vec<String>,
    limit: usize,
}

impl Expansion {
    fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::new(),
            entries: Vec::new(),
            limit,
        }
    }

    /// Add a rendering, ignoring duplicates. Returns false once full.
    fn push(&mut self, entry: String) -> bool {
        if self.entries.len() >= self.limit {
            return false;
        }
        if self.seen.insert(entry.clone()) {
            self.entries.push(entry);
        }
        self.entries.len() < self.limit
    }

    fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// Expand `command` into up to `limit` distinct renderings.
pub(crate) fn expand(
    session: &mut Session,
    command: &Command,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    if session.effective_method(command) != SamplingMethod::Combinatorial {
        // A random or cyclical override contributes successive draws, the
        // one factor without a finite enumeration; the limit caps it.
        let mut expansion = Expansion::new(limit);
        for _ in 0..limit {
            if !expansion.push(session.render(command, state)?) {
                break;
            }
        }
        return Ok(expansion.into_entries());
    }
    match command {
        Command::Literal(literal) => Ok(vec![literal.text.clone()]),
        Command::Comment(_) => Ok(vec![String::new()]),
        Command::Sequence(sequence) => expand_sequence(session, sequence, state, limit),
        Command::Variant(variant) => expand_variant(session, variant, state, limit),
        Command::Wildcard(wildcard) => expand_wildcard(session, wildcard, state, limit),
        Command::Probability(probability) => {
            expand_probability(session, probability, state, limit)
        }
        Command::Condition(condition) => expand_condition(session, condition, state, limit),
        Command::Wrap(wrap) => expand_wrap(session, wrap, state, limit),
        Command::VariableAccess(access) => expand_access(session, access, state, limit),
        Command::VariableAssignment(assignment) => {
            expand_assignment(session, assignment, state, limit)
        }
    }
}

/// Cartesian product of the children's expansions, in child order.
fn expand_sequence(
    session: &mut Session,
    sequence: &SequenceCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    let mut acc: Vec<String> = Vec::new();
    for (i, child) in sequence.children.iter().enumerate() {
        let child_entries = expand(session, child, state, limit)?;
        if child_entries.is_empty() {
            // A child with no renderings collapses the whole product.
            return Ok(Vec::new());
        }
        if i == 0 {
            acc = child_entries;
            continue;
        }
        let mut expansion = Expansion::new(limit);
        'product: for prefix in &acc {
            for entry in &child_entries {
                let mut joined =
                    String::with_capacity(prefix.len() + sequence.separator.len() + entry.len());
                joined.push_str(prefix);
                joined.push_str(&sequence.separator);
                joined.push_str(entry);
                if !expansion.push(joined) {
                    break 'product;
                }
            }
        }
        acc = expansion.into_entries();
    }
    if acc.is_empty() {
        acc.push(String::new());
    }
    Ok(acc)
}

fn expand_variant(
    session: &mut Session,
    variant: &VariantCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    if variant.options.is_empty() {
        return Ok(Vec::new());
    }
    let mut expansion = Expansion::new(limit);
    let total = variant.combination_count();
    let mut index = 0u64;
    'combinations: while index < total {
        let combination = variant.combination(index);
        index += 1;
        let picks = combination.len();
        let mut member_lists: Vec<Vec<String>> = Vec::with_capacity(picks);
        for member in combination {
            member_lists.push(expand(session, member, state, limit)?);
        }
        if member_lists.iter().any(|entries| entries.is_empty()) {
            continue;
        }
        let mut scratch: Vec<&str> = Vec::with_capacity(picks);
        let finished = for_each_product(&member_lists, &mut scratch, &mut |members| {
            // Members that render to the same text collapse the pick below
            // its size; such tuples are skipped rather than shortened.
            let mut distinct: Vec<&str> = Vec::with_capacity(members.len());
            for &member in members {
                if !distinct.contains(&member) {
                    distinct.push(member);
                }
            }
            if distinct.len() < picks {
                return true;
            }
            expansion.push(distinct.join(variant.separator.as_str()))
        });
        if !finished {
            break 'combinations;
        }
    }
    Ok(expansion.into_entries())
}

/// Depth-first product over per-member expansions, first member most
/// significant. The visitor returns false to stop the whole product.
fn for_each_product<'a>(
    lists: &'a [Vec<String>],
    members: &mut Vec<&'a str>,
    visit: &mut dyn FnMut(&[&'a str]) -> bool,
) -> bool {
    if members.len() == lists.len() {
        return visit(members);
    }
    let depth = members.len();
    for entry in &lists[depth] {
        members.push(entry);
        let proceed = for_each_product(lists, members, visit);
        members.pop();
        if !proceed {
            return false;
        }
    }
    true
}

/// One run of entries per candidate, in resolver order.
fn expand_wildcard(
    session: &mut Session,
    wildcard: &WildcardCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    let name = session.wildcard_name(wildcard, state)?;
    let values = session.resolver.resolve(&name);
    if values.is_empty() {
        let entry = session.empty_wildcard_result(&name, SamplingMethod::Combinatorial)?;
        return Ok(vec![entry]);
    }
    let mut expansion = Expansion::new(limit);
    'values: for value in &values {
        let template = session.parse_candidate(value)?;
        session.push_inline_scope(state, wildcard);
        let expanded = expand(session, &template, state, limit);
        state.context.pop_scope();
        for entry in expanded? {
            if !expansion.push(entry) {
                break 'values;
            }
        }
    }
    Ok(expansion.into_entries())
}

/// The value's expansions, then the empty arm.
fn expand_probability(
    session: &mut Session,
    probability: &ProbabilityCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    if probability.always_includes() {
        return expand(session, &probability.value, state, limit);
    }
    if probability.never_includes() {
        return Ok(vec![String::new()]);
    }
    let mut expansion = Expansion::new(limit);
    for entry in expand(session, &probability.value, state, limit)? {
        if !expansion.push(entry) {
            return Ok(expansion.into_entries());
        }
    }
    expansion.push(String::new());
    Ok(expansion.into_entries())
}

fn expand_condition(
    session: &mut Session,
    condition: &ConditionCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    for branch in &condition.conditions {
        let matched = match &branch.context_key {
            Some(key) => {
                let haystack = variable_first_entry(session, key, state)?;
                branch.matches(&haystack)
            }
            // Expansion produces all outputs at once; no text is completed
            // yet, so ambient branches match against an empty transcript.
            None => branch.matches(&state.transcript),
        };
        if matched {
            return expand(session, &branch.if_value, state, limit);
        }
    }
    match &condition.else_value {
        Some(else_value) => expand(session, else_value, state, limit),
        None => Ok(vec![String::new()]),
    }
}

/// A variable's match text under expansion: its first entry, or empty when
/// the variable is unbound.
fn variable_first_entry(
    session: &mut Session,
    name: &str,
    state: &mut OutputState,
) -> Result<String, GenerateError> {
    let binding = match state.context.get(name) {
        Some(binding) => binding.clone(),
        None => return Ok(String::new()),
    };
    match binding {
        Binding::Evaluated(text) => Ok(text),
        Binding::Deferred(command) => Ok(expand(session, &command, state, 1)?
            .into_iter()
            .next()
            .unwrap_or_default()),
    }
}

/// Inner-major product: every wrapper rendering around every inner one.
fn expand_wrap(
    session: &mut Session,
    wrap: &WrapCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    let inner_entries = expand(session, &wrap.inner, state, limit)?;
    let wrapper_entries = expand(session, &wrap.wrapper, state, limit)?;
    let mut expansion = Expansion::new(limit);
    'product: for inner in &inner_entries {
        for wrapper in &wrapper_entries {
            if !expansion.push(wrap_text(wrapper, inner)) {
                break 'product;
            }
        }
    }
    Ok(expansion.into_entries())
}

fn expand_access(
    session: &mut Session,
    access: &VariableAccessCommand,
    state: &mut OutputState,
    limit: usize,
) -> Result<Vec<String>, GenerateError> {
    if let Some(binding) = state.context.get(&access.name).cloned() {
        return match binding {
            Binding::Evaluated(text) => Ok(vec![text]),
            Binding::Deferred(command) => expand(session, &command, state, limit),
        };
    }
    match &access.default {
        Some(default) => expand(session, default, state, limit),
        None => {
            warn!("Variable '{}' is not set and has no default", access.name);
            Ok(vec![String::new()])
        }
    }
}

fn expand_assignment(
    session: &mut Session,
    assignment: &VariableAssignmentCommand,
    state: &mut OutputState,
    _limit: usize,
) -> Result<Vec<String>, GenerateError> {
    if assignment.overwrite || !state.context.is_bound(&assignment.name) {
        let binding = if assignment.immediate {
            // Immediate assignment binds one concrete value; under
            // expansion that is the first entry of the value's enumeration.
            let first = expand(session, &assignment.value, state, 1)?
                .into_iter()
                .next()
                .unwrap_or_default();
            Binding::Evaluated(first)
        } else {
            Binding::Deferred(session.deferred_value(&assignment.value))
        };
        state.context.set(assignment.name.clone(), binding);
    }
    Ok(vec![String::new()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarConfig;
    use crate::generator::EmptyWildcard;
    use crate::parser;
    use crate::wildcards::{MemoryResolver, WildcardResolver};

    fn combinatorial_session(resolver: &dyn WildcardResolver) -> Session<'_> {
        let parser = parser::shared_parser(&GrammarConfig::default()).unwrap();
        Session::new(
            resolver,
            parser,
            SamplingMethod::Combinatorial,
            EmptyWildcard::MethodDefault,
            Some(0),
        )
    }

    fn expand_template(template: &str, limit: usize) -> Vec<String> {
        let mut resolver = MemoryResolver::new();
        resolver.insert("colors", ["red", "green", "blue"]);
        let mut session = combinatorial_session(&resolver);
        let root = parser::parse(template).unwrap();
        let mut state = OutputState::new();
        expand(&mut session, &root, &mut state, limit).unwrap()
    }

    #[test]
    fn test_variant_enumerates_in_declaration_order() {
        assert_eq!(expand_template("{a|b|c}", 10), ["a", "b", "c"]);
    }

    #[test]
    fn test_limit_truncates_enumeration() {
        assert_eq!(expand_template("{a|b|c}", 2), ["a", "b"]);
    }

    #[test]
    fn test_duplicate_options_are_deduplicated() {
        assert_eq!(expand_template("{a|a|b}", 10), ["a", "b"]);
    }

    #[test]
    fn test_sequence_product_is_first_factor_major() {
        assert_eq!(
            expand_template("{a|b}-{x|y}", 10),
            ["a-x", "a-y", "b-x", "b-y"]
        );
    }

    #[test]
    fn test_sequence_product_truncates_exactly() {
        assert_eq!(expand_template("{a|b}{c|d}", 3), ["ac", "ad", "bc"]);
    }

    #[test]
    fn test_bound_variant_enumerates_smaller_picks_first() {
        assert_eq!(expand_template("{1-2$$ $$a|b}", 10), ["a", "b", "a b"]);
    }

    #[test]
    fn test_bound_pick_of_identical_renderings_is_skipped() {
        // The only 2-combination renders both members to "x".
        assert_eq!(expand_template("{2$$,$$x|x}", 10), Vec::<String>::new());
    }

    #[test]
    fn test_worked_two_of_three_example() {
        assert_eq!(
            expand_template("a {2$$,$$x|y|z}", 10),
            ["a x,y", "a x,z", "a y,z"]
        );
    }

    #[test]
    fn test_wildcard_expands_each_value() {
        assert_eq!(expand_template("__colors__", 10), ["red", "green", "blue"]);
    }

    #[test]
    fn test_wildcard_values_expand_as_templates() {
        let mut resolver = MemoryResolver::new();
        resolver.insert("pets", ["{big|small} cat", "dog"]);
        let mut session = combinatorial_session(&resolver);
        let root = parser::parse("__pets__").unwrap();
        let mut state = OutputState::new();
        assert_eq!(
            expand(&mut session, &root, &mut state, 10).unwrap(),
            ["big cat", "small cat", "dog"]
        );
    }

    #[test]
    fn test_probability_lists_value_then_empty() {
        assert_eq!(expand_template("{0.5::x}", 10), ["x", ""]);
        assert_eq!(expand_template("{2::x}", 10), ["x"]);
        assert_eq!(expand_template("{0::x}", 10), [""]);
    }

    #[test]
    fn test_comment_expands_to_empty_identity() {
        assert_eq!(expand_template("a{* note *} b", 10), ["a b"]);
    }

    #[test]
    fn test_assignment_binds_and_expands_empty() {
        assert_eq!(expand_template("${s=small}${s} cat", 10), ["small cat"]);
    }

    #[test]
    fn test_deferred_variable_re_expands_per_read() {
        assert_eq!(
            expand_template("${c={x|y}}${c}-${c}", 10),
            ["x-x", "x-y", "y-x", "y-y"]
        );
    }

    #[test]
    fn test_immediate_variable_expands_once() {
        assert_eq!(expand_template("${c=!{x|y}}${c}-${c}", 10), ["x-x"]);
    }

    #[test]
    fn test_cyclical_override_cycles_within_expansion() {
        // Three rotations land on a, b, a; the set is {a, b}.
        assert_eq!(expand_template("{@a|b}", 3), ["a", "b"]);
    }

    #[test]
    fn test_random_override_draws_within_expansion() {
        for entry in expand_template("{~a|b}", 4) {
            assert!(entry == "a" || entry == "b");
        }
    }

    #[test]
    fn test_empty_wildcard_is_identity_by_default() {
        assert_eq!(expand_template("a __missing__b", 10), ["a b"]);
    }

    #[test]
    fn test_condition_sees_empty_transcript() {
        // Ambient conditions cannot match text during expansion.
        assert_eq!(
            expand_template("cat {cat::purrs|sits}", 10),
            ["cat sits"]
        );
    }

    #[test]
    fn test_zero_limit_expands_to_nothing() {
        assert_eq!(expand_template("{a|b}", 0), Vec::<String>::new());
    }

    #[test]
    fn test_weights_do_not_affect_enumeration() {
        assert_eq!(expand_template("{9::a|1::b}", 10), ["a", "b"]);
    }
}
