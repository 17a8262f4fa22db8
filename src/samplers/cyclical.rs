//! Deterministic round-robin selection
//!
//! Each choice node keeps a position counter in the session side table and
//! advances it once per visit. Counters start at zero for every call, so
//! repeated calls over the same tree replay the same rotation. Sibling
//! nodes rotate independently; there is no shared odometer.

use super::{node_key, OutputState, Session};
use crate::commands::{ProbabilityCommand, SamplingMethod, VariantCommand, WildcardCommand};
use crate::error::GenerateError;

/// One bound combination per visit, in enumeration order.
pub(crate) fn render_variant(
    session: &mut Session,
    variant: &VariantCommand,
    state: &mut OutputState,
) -> Result<String, GenerateError> {
    let total = variant.combination_count();
    if total == 0 {
        return Ok(String::new());
    }
    let position = session.next_cycle(node_key(variant), total);
    let combination = variant.combination(position);
    let mut pieces = Vec::with_capacity(combination.len());
    for member in combination {
        pieces.push(session.render(member, state)?);
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
        return session.empty_wildcard_result(&name, SamplingMethod::Cyclical);
    }
    let position = session.next_cycle(node_key(wildcard), values.len() as u64);
    session.render_candidate(wildcard, &values[position as usize], state)
}

/// Alternates between the value and nothing, value first.
pub(crate) fn render_probability(
    session: &mut Session,
    probability: &ProbabilityCommand,
    state: &mut OutputState,
) -> Result<String, GenerateError> {
    if probability.always_includes() {
        return session.render(&probability.value, state);
    }
    if probability.never_includes() {
        return Ok(String::new());
    }
    if session.next_cycle(node_key(probability), 2) == 0 {
        session.render(&probability.value, state)
    } else {
        Ok(String::new())
    }
}
