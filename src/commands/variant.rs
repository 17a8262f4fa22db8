//! Variant element definition
//!
//! A variant holds weighted options plus a selection bound: `{2$$a|b|c}`
//! picks two options per output. The combination helpers here give the
//! deterministic samplers a shared, declaration-ordered view of the choice
//! space without ever materializing it.

use std::fmt;

use super::{Command, SamplingMethod};

/// One alternative inside a variant block
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOption {
    pub value: Command,
    pub weight: f64,
}

impl VariantOption {
    pub fn new(value: Command) -> Self {
        Self { value, weight: 1.0 }
    }

    pub fn weighted(value: Command, weight: f64) -> Self {
        let weight = if weight.is_finite() { weight.max(0.0) } else { 0.0 };
        Self { value, weight }
    }
}

/// A `{a|b|c}` block: weighted options, selection bounds, join separator
#[derive(Debug, Clone, PartialEq)]
pub struct VariantCommand {
    pub options: Vec<VariantOption>,
    pub min_bound: usize,
    pub max_bound: usize,
    pub separator: String,
    pub sampling_method: Option<SamplingMethod>,
}

impl VariantCommand {
    pub const DEFAULT_SEPARATOR: &'static str = ",";

    pub fn new(options: Vec<VariantOption>) -> Self {
        Self {
            options,
            min_bound: 1,
            max_bound: 1,
            separator: Self::DEFAULT_SEPARATOR.to_string(),
            sampling_method: None,
        }
    }

    /// Build a single-pick variant with uniform weights.
    pub fn from_values(values: Vec<Command>) -> Self {
        Self::new(values.into_iter().map(VariantOption::new).collect())
    }

    /// Set the selection bounds, clamping both ends into `[1, option count]`.
    ///
    /// Callers that pass an open upper bound use `usize::MAX`; the clamp
    /// turns it into "all options". A programmatic `min > max` after
    /// clamping is normalized to `max = min`; the parser rejects written
    /// inverted bounds before ever getting here.
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        let limit = self.options.len().max(1);
        self.min_bound = min.clamp(1, limit);
        self.max_bound = max.clamp(1, limit).max(self.min_bound);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_sampling_method(mut self, method: Option<SamplingMethod>) -> Self {
        self.sampling_method = method;
        self
    }

    pub fn weights(&self) -> Vec<f64> {
        self.options.iter().map(|o| o.weight).collect()
    }

    /// Number of distinct option combinations across the bound range,
    /// saturating at `u64::MAX` when the space is astronomically large.
    pub fn combination_count(&self) -> u64 {
        let n = self.options.len();
        let mut total: u64 = 0;
        for k in self.min_bound..=self.max_bound.min(n) {
            total = total.saturating_add(binomial(n, k));
        }
        total
    }

    /// The `index`-th combination of option values, in enumeration order:
    /// smaller pick counts first, then lexicographic by declaration order.
    ///
    /// Returns an empty vec when `index` is out of range.
    pub fn combination(&self, mut index: u64) -> Vec<&Command> {
        let n = self.options.len();
        for k in self.min_bound..=self.max_bound.min(n) {
            let count = binomial(n, k);
            if index < count {
                return nth_combination(n, k, index)
                    .into_iter()
                    .map(|i| &self.options[i].value)
                    .collect();
            }
            index -= count;
        }
        Vec::new()
    }
}

impl From<VariantCommand> for Command {
    fn from(cmd: VariantCommand) -> Self {
        Command::Variant(cmd)
    }
}

impl fmt::Display for VariantCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Variant({} options, bounds {}..={})",
            self.options.len(),
            self.min_bound,
            self.max_bound
        )
    }
}

/// Binomial coefficient, saturating at `u64::MAX`.
pub(crate) fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1) at this step
        result = match result.checked_mul((n - i) as u64) {
            Some(value) => value / (i as u64 + 1),
            None => return u64::MAX,
        };
    }
    result
}

/// The `index`-th k-combination of `0..n` in lexicographic order.
pub(crate) fn nth_combination(n: usize, k: usize, mut index: u64) -> Vec<usize> {
    let mut combo = Vec::with_capacity(k);
    let mut candidate = 0;
    let mut remaining = k;
    while remaining > 0 {
        if candidate > n.saturating_sub(remaining) {
            // index was out of range; close out with the final combination
            break;
        }
        let with_candidate = binomial(n - candidate - 1, remaining - 1);
        if index < with_candidate {
            combo.push(candidate);
            remaining -= 1;
        } else {
            index -= with_candidate;
        }
        candidate += 1;
    }
    combo
}
