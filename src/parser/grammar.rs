//! Recursive-descent productions for the template grammar
//!
//! The grammar is roughly:
//!
//! ```text
//! <prompt>          ::= <chunk>*
//! <chunk>           ::= <comment_block> | <probability> | <condition>
//!                     | <variable_assignment> | <variable_access> | <wrap>
//!                     | <variant> | <wildcard> | <literal_sequence>
//! <variant>         ::= "{" <sampler>? <bound>? <option> ("|" <option>)* "}"
//! <option>          ::= (<number> "::")? <variant_prompt>
//! <bound>           ::= <int>? ("-" <int>?)? "$$" (<separator> "$$")?
//! <probability>     ::= "{" <number> "::" <variant_prompt>? "}"
//! <condition>       ::= "{" <pattern> "::" <variant_prompt> ("|" <variant_prompt>)? "}"
//! <comment_block>   ::= "{" "*" <text> "*" "}"
//! <wildcard>        ::= "__" <sampler>? <path> ("(" <spec> ")")? "__"
//! <variable_access> ::= "${" <name> (":" <variant_prompt>)? "}"
//! <variable_assignment> ::= "${" <name> "?"? "=" "!"? <variant_prompt> "}"
//! <wrap>            ::= "%{" <variant_prompt> "$$" <variant_prompt> "}"
//! ```
//!
//! Every delimiter shown is the default; the real tokens come from the
//! [`GrammarConfig`] this grammar was compiled against. Alternatives are
//! tried in a fixed priority order with full backtracking, so the blocks
//! that share the variant braces (probability, condition, comment, variant)
//! disambiguate on their content: a numeric head before `::` is a
//! probability, a non-numeric head is a condition, and anything else falls
//! through to the variant production.
//!
//! Line comments (`# ...`, `// ...`) and block comments (`/* ... */`) are
//! stripped uniformly while scanning; literal fragments split by a stripped
//! comment are rejoined with a single space.

use once_cell::sync::Lazy;
use regex::Regex;

use super::cursor::Cursor;
use crate::commands::{
    Command, CommentCommand, ConditionBranch, ConditionCommand, ProbabilityCommand,
    SamplingMethod, SequenceCommand, VariableAccessCommand, VariableAssignmentCommand,
    VariantCommand, VariantOption, WildcardCommand, WrapCommand,
};
use crate::config::GrammarConfig;
use crate::error::{ConfigError, ParseError};

/// Variable names: letters, digits, underscores and hyphens, not starting
/// with a digit.
static VAR_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[A-Za-z_-][A-Za-z0-9_-]*").unwrap());

/// Option weights: an integer or a decimal in any of the `1`, `1.5`, `1.`,
/// `.5` spellings.
static WEIGHT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:\d+\.\d*|\.\d+|\d+)").unwrap());

/// Probability heads scan greedily over digits and dots; the numeric parse
/// afterwards decides whether the head really is a number.
static CHANCE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[0-9.]+").unwrap());

static BOUND_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\d+").unwrap());

/// Bound separators run up to the closing `$$` and may not contain `$` or
/// the default braces; `|` and spaces are fine.
static BOUND_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[^${}]+").unwrap());

/// The raw inline-variable spec between parentheses.
static SPEC_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[^)]+").unwrap());

/// Which exclusion profile a literal scan uses.
///
/// Inside variants the option separator `|`, the bound marker `$` and the
/// closing brace also terminate a run; inside wildcard paths the inline
/// variable parentheses do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralContext {
    Top,
    Variant,
    WildcardPath,
}

/// A parsed variant bound, before clamping against the option count.
struct ParsedBound {
    min: Option<usize>,
    max: Option<usize>,
    separator: String,
}

/// Compiled productions for one delimiter configuration
///
/// Building a grammar compiles the per-context literal scanners, which is
/// the expensive part the parser cache amortizes. The grammar itself is
/// immutable and shared freely across threads.
#[derive(Debug)]
pub(super) struct Grammar {
    pub(super) config: GrammarConfig,
    top_literal: Regex,
    variant_literal: Regex,
    wildcard_literal: Regex,
    comment_text: Regex,
    literal_stops: Vec<String>,
    variant_literal_stops: Vec<String>,
}

impl Grammar {
    pub(super) fn compile(config: GrammarConfig) -> Result<Self, ConfigError> {
        let mut top = String::from("#");
        for token in [&config.variant_start, &config.variable_start, &config.wrap_start] {
            push_unique_chars(&mut top, token);
        }

        let mut variant = top.clone();
        push_unique_chars(&mut variant, "|$");
        push_unique_chars(&mut variant, &config.variant_end);

        let mut wildcard = top.clone();
        push_unique_chars(&mut wildcard, "()");

        let mut comment = String::new();
        push_unique_chars(&mut comment, &config.variant_start);
        push_unique_chars(&mut comment, &config.variant_end);
        push_unique_chars(&mut comment, "*");

        let literal_stops = vec![
            config.wildcard_wrap.clone(),
            "//".to_string(),
            "/*".to_string(),
        ];
        let mut variant_literal_stops = literal_stops.clone();
        variant_literal_stops.push("::".to_string());

        Ok(Self {
            top_literal: exclusion_regex(&top)?,
            variant_literal: exclusion_regex(&variant)?,
            wildcard_literal: exclusion_regex(&wildcard)?,
            comment_text: exclusion_regex(&comment)?,
            literal_stops,
            variant_literal_stops,
            config,
        })
    }

    /// Parse a complete template, requiring that all input is consumed.
    pub(super) fn parse_template(&self, text: &str) -> Result<Command, ParseError> {
        let mut cursor = Cursor::new(text);
        let command = self.parse_prompt(&mut cursor)?;
        if !cursor.is_at_end() {
            return Err(cursor.error("end of input"));
        }
        Ok(command)
    }

    /// `<prompt>`: zero or more top-level chunks, collapsed to one command.
    fn parse_prompt(&self, cursor: &mut Cursor) -> Result<Command, ParseError> {
        let mut children = Vec::new();
        loop {
            self.skip_comments(cursor);
            match self.try_top_chunk(cursor)? {
                Some(child) => children.push(child),
                None => break,
            }
        }
        Ok(SequenceCommand::from_children(children))
    }

    /// `<variant_prompt>`: the chunk sequence allowed inside variant
    /// options, directive operands and wrap halves.
    fn parse_variant_prompt(&self, cursor: &mut Cursor) -> Result<Command, ParseError> {
        let mut children = Vec::new();
        loop {
            self.skip_comments(cursor);
            match self.try_variant_chunk(cursor)? {
                Some(child) => children.push(child),
                None => break,
            }
        }
        Ok(SequenceCommand::from_children(children))
    }

    /// The wildcard path between enclosures. Requires at least one chunk
    /// and stops in front of an inline-variable `(`.
    fn parse_wildcard_path(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let mut children = Vec::new();
        loop {
            if cursor.starts_with("(") {
                break;
            }
            self.skip_comments(cursor);
            match self.try_wildcard_chunk(cursor)? {
                Some(child) => children.push(child),
                None => break,
            }
        }
        if children.is_empty() {
            Ok(None)
        } else {
            Ok(Some(SequenceCommand::from_children(children)))
        }
    }

    fn try_top_chunk(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        if let Some(command) = self.try_comment_block(cursor) {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_probability(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_condition(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variable_assignment(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variable_access(cursor, false)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_wrap(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variant(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_wildcard(cursor)? {
            return Ok(Some(command));
        }
        Ok(self.try_literal(cursor, LiteralContext::Top))
    }

    // Same priorities as the top level, minus variable assignment; literal
    // runs stop at the option and bound punctuation.
    fn try_variant_chunk(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        if let Some(command) = self.try_comment_block(cursor) {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variable_access(cursor, false)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_wrap(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_probability(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_condition(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variant(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_wildcard(cursor)? {
            return Ok(Some(command));
        }
        Ok(self.try_literal(cursor, LiteralContext::Variant))
    }

    // Wildcard paths allow no nested wildcard and no wrap; a variable
    // access here falls back to its own name when unbound. The
    // variant-profile literal is a last resort that lets `)` and other
    // variant punctuation through.
    fn try_wildcard_chunk(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        if let Some(command) = self.try_comment_block(cursor) {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variable_access(cursor, true)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_condition(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_probability(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_variant(cursor)? {
            return Ok(Some(command));
        }
        if let Some(command) = self.try_literal(cursor, LiteralContext::WildcardPath) {
            return Ok(Some(command));
        }
        Ok(self.try_literal(cursor, LiteralContext::Variant))
    }

    /// `{* ... *}`: a comment that survives into the tree.
    fn try_comment_block(&self, cursor: &mut Cursor) -> Option<Command> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.variant_start) {
            return None;
        }
        cursor.skip_whitespace();
        if !cursor.eat_char('*') {
            cursor.restore(start);
            return None;
        }
        let text = match cursor.take(&self.comment_text) {
            Some(text) => text.to_string(),
            None => {
                cursor.restore(start);
                return None;
            }
        };
        if !cursor.eat_char('*') {
            cursor.restore(start);
            return None;
        }
        cursor.skip_whitespace();
        if !cursor.eat(&self.config.variant_end) {
            cursor.restore(start);
            return None;
        }
        Some(Command::Comment(CommentCommand::new(text)))
    }

    /// `{0.35::value}`: the head must parse as a number, with no space
    /// before the `::`. The value keeps its leading whitespace.
    fn try_probability(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.variant_start) {
            return Ok(None);
        }
        cursor.skip_whitespace();
        let chance = match cursor.take(&CHANCE_NUMBER).and_then(|n| n.parse::<f64>().ok()) {
            Some(chance) => chance,
            None => {
                cursor.restore(start);
                return Ok(None);
            }
        };
        if !cursor.eat("::") {
            cursor.restore(start);
            return Ok(None);
        }
        let value = self.parse_variant_prompt(cursor)?;
        cursor.skip_whitespace();
        if !cursor.eat(&self.config.variant_end) {
            cursor.restore(start);
            return Ok(None);
        }
        Ok(Some(Command::Probability(ProbabilityCommand::new(
            chance, value,
        ))))
    }

    /// `{pattern::if|else}`: the pattern runs to the `::`, may contain `|`,
    /// and is rejected here when it is itself a number (that form belongs
    /// to the probability block).
    fn try_condition(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.variant_start) {
            return Ok(None);
        }
        let pattern_start = cursor.pos();
        let mut pattern = String::new();
        loop {
            if cursor.starts_with("::")
                || cursor.starts_with(&self.config.variant_end)
                || cursor.starts_with(&self.config.variant_start)
            {
                break;
            }
            match cursor.peek() {
                Some(c) if !c.is_whitespace() => {
                    pattern.push(c);
                    cursor.bump();
                    while let Some(ws) = cursor.peek() {
                        if !ws.is_whitespace() {
                            break;
                        }
                        pattern.push(ws);
                        cursor.bump();
                    }
                }
                _ => break,
            }
        }
        let trimmed = pattern.trim();
        if trimmed.parse::<f64>().is_ok() {
            cursor.restore(start);
            return Ok(None);
        }
        cursor.skip_whitespace();
        if !cursor.eat("::") {
            cursor.restore(start);
            return Ok(None);
        }
        cursor.skip_whitespace();
        let if_value = self.parse_variant_prompt(cursor)?;
        let else_value = if cursor.eat("|") {
            Some(self.parse_variant_prompt(cursor)?)
        } else {
            None
        };
        cursor.skip_whitespace();
        if !cursor.eat(&self.config.variant_end) {
            cursor.restore(start);
            return Ok(None);
        }
        let branch = ConditionBranch::new(trimmed, if_value).map_err(|_| ParseError::Syntax {
            offset: pattern_start,
            expected: "a valid condition pattern".to_string(),
        })?;
        Ok(Some(Command::Condition(ConditionCommand::new(
            vec![branch],
            else_value,
        ))))
    }

    /// `${name=value}` with the `?=` and `=!` modifiers.
    fn try_variable_assignment(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.variable_start) {
            return Ok(None);
        }
        cursor.skip_whitespace();
        let name = match cursor.take(&VAR_NAME) {
            Some(name) => name.to_string(),
            None => {
                cursor.restore(start);
                return Ok(None);
            }
        };
        cursor.skip_whitespace();
        let overwrite = !cursor.eat_char('?');
        if !cursor.eat_char('=') {
            cursor.restore(start);
            return Ok(None);
        }
        let immediate = cursor.eat_char('!');
        cursor.skip_whitespace();
        let value = self.parse_variant_prompt(cursor)?;
        cursor.skip_whitespace();
        if !cursor.eat(&self.config.variable_end) {
            cursor.restore(start);
            return Ok(None);
        }
        Ok(Some(Command::VariableAssignment(
            VariableAssignmentCommand::new(name, value)
                .with_overwrite(overwrite)
                .with_immediate(immediate),
        )))
    }

    /// `${name}` / `${name:default}`.
    ///
    /// Inside a wildcard path an access without a default falls back to a
    /// literal of its own name, and a literal default is trimmed; that way
    /// an unbound variable still produces a resolvable path.
    fn try_variable_access(
        &self,
        cursor: &mut Cursor,
        in_wildcard_path: bool,
    ) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.variable_start) {
            return Ok(None);
        }
        cursor.skip_whitespace();
        let name = match cursor.take(&VAR_NAME) {
            Some(name) => name.to_string(),
            None => {
                cursor.restore(start);
                return Ok(None);
            }
        };
        cursor.skip_whitespace();
        let mut default = if cursor.eat_char(':') {
            cursor.skip_whitespace();
            Some(self.parse_variant_prompt(cursor)?)
        } else {
            None
        };
        cursor.skip_whitespace();
        if !cursor.eat(&self.config.variable_end) {
            cursor.restore(start);
            return Ok(None);
        }
        if in_wildcard_path {
            default = match default {
                Some(Command::Literal(literal)) => Some(Command::literal(literal.text.trim())),
                Some(other) => Some(other),
                None => Some(Command::literal(name.clone())),
            };
        }
        let mut access = VariableAccessCommand::new(name);
        if let Some(default) = default {
            access = access.with_default(default);
        }
        Ok(Some(Command::VariableAccess(access)))
    }

    /// `%{wrapper$$inner}`: both halves are variant prompts, so a literal
    /// wrapper naturally stops at the `$$`.
    fn try_wrap(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.wrap_start) {
            return Ok(None);
        }
        cursor.skip_whitespace();
        let wrapper = self.parse_variant_prompt(cursor)?;
        cursor.skip_whitespace();
        if !cursor.eat("$$") {
            cursor.restore(start);
            return Ok(None);
        }
        cursor.skip_whitespace();
        let inner = self.parse_variant_prompt(cursor)?;
        if !cursor.eat(&self.config.wrap_end) {
            cursor.restore(start);
            return Ok(None);
        }
        Ok(Some(Command::Wrap(WrapCommand::new(wrapper, inner))))
    }

    /// The variant block proper, after the probability and condition
    /// readings have been ruled out.
    fn try_variant(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.variant_start) {
            return Ok(None);
        }
        cursor.skip_whitespace();
        let sampling_method = self.eat_sampler(cursor);
        let bound = self.try_bound_expr(cursor)?;
        cursor.skip_whitespace();
        let mut options = Vec::new();
        loop {
            // Leading whitespace of an option is dropped; trailing
            // whitespace rides along inside its literal chunks.
            cursor.skip_whitespace();
            let weight = self.try_weight(cursor);
            let value = self.parse_variant_prompt(cursor)?;
            options.push(VariantOption::weighted(value, weight));
            if !cursor.eat("|") {
                break;
            }
        }
        cursor.skip_whitespace();
        if !cursor.eat(&self.config.variant_end) {
            cursor.restore(start);
            return Ok(None);
        }
        let (min, max, separator) = match bound {
            Some(bound) => (bound.min, bound.max, bound.separator),
            None => (
                Some(1),
                Some(1),
                VariantCommand::DEFAULT_SEPARATOR.to_string(),
            ),
        };
        let command = VariantCommand::new(options)
            .with_separator(separator)
            .with_bounds(min.unwrap_or(1), max.unwrap_or(usize::MAX))
            .with_sampling_method(sampling_method);
        Ok(Some(Command::Variant(command)))
    }

    /// `<bound>`: `2$$`, `1-3$$`, `-3$$`, `2-$$`, optionally followed by a
    /// verbatim separator and another `$$`.
    ///
    /// A two-ended bound written inverted is an error rather than a
    /// candidate for backtracking: nothing else can parse that text, and
    /// failing here keeps the message specific.
    fn try_bound_expr(&self, cursor: &mut Cursor) -> Result<Option<ParsedBound>, ParseError> {
        let start = cursor.pos();
        let lower = cursor
            .take(&BOUND_INTEGER)
            .map(|digits| digits.parse::<usize>().unwrap_or(usize::MAX));
        let has_hyphen = cursor.eat_char('-');
        let upper = if has_hyphen {
            cursor
                .take(&BOUND_INTEGER)
                .map(|digits| digits.parse::<usize>().unwrap_or(usize::MAX))
        } else {
            None
        };
        if lower.is_none() && upper.is_none() {
            cursor.restore(start);
            return Ok(None);
        }
        if !cursor.eat("$$") {
            cursor.restore(start);
            return Ok(None);
        }
        if let (Some(min), Some(max)) = (lower, upper) {
            if min > max {
                return Err(ParseError::InvalidBound {
                    offset: start,
                    min,
                    max,
                });
            }
        }
        let separator_mark = cursor.pos();
        let separator = match cursor.take(&BOUND_SEPARATOR) {
            Some(text) if cursor.eat("$$") => text.to_string(),
            _ => {
                cursor.restore(separator_mark);
                VariantCommand::DEFAULT_SEPARATOR.to_string()
            }
        };
        let (min, max) = if has_hyphen {
            (lower, upper)
        } else {
            (lower, lower)
        };
        Ok(Some(ParsedBound { min, max, separator }))
    }

    /// An option weight is a number directly followed by `::`; anything
    /// else leaves the cursor untouched and weighs 1.
    fn try_weight(&self, cursor: &mut Cursor) -> f64 {
        let start = cursor.pos();
        if let Some(number) = cursor.take(&WEIGHT_NUMBER) {
            if cursor.eat("::") {
                if let Ok(weight) = number.parse::<f64>() {
                    return weight;
                }
            }
        }
        cursor.restore(start);
        1.0
    }

    /// `__path__`, `__~path__`, `__path(k=v, k2=v2)__`.
    fn try_wildcard(&self, cursor: &mut Cursor) -> Result<Option<Command>, ParseError> {
        let start = cursor.pos();
        if !cursor.eat(&self.config.wildcard_wrap) {
            return Ok(None);
        }
        let sampling_method = self.eat_sampler(cursor);
        let path = match self.parse_wildcard_path(cursor)? {
            Some(path) => path,
            None => {
                cursor.restore(start);
                return Ok(None);
            }
        };
        let mut variables = Vec::new();
        let spec_mark = cursor.pos();
        cursor.skip_whitespace();
        let mut spec_matched = false;
        if cursor.eat_char('(') {
            if let Some(spec) = cursor.take(&SPEC_TEXT) {
                if cursor.eat_char(')') {
                    variables = self.parse_wildcard_variables(spec)?;
                    spec_matched = true;
                }
            }
        }
        if !spec_matched {
            cursor.restore(spec_mark);
        }
        if !cursor.eat(&self.config.wildcard_wrap) {
            cursor.restore(start);
            return Ok(None);
        }
        Ok(Some(Command::Wildcard(
            WildcardCommand::from_path(path)
                .with_sampling_method(sampling_method)
                .with_variables(variables),
        )))
    }

    /// Split an inline variable spec on `,` and each pair on its first
    /// `=`. Purely alphanumeric values skip the recursive parse.
    fn parse_wildcard_variables(
        &self,
        spec: &str,
    ) -> Result<Vec<(String, Command)>, ParseError> {
        let mut variables = Vec::new();
        for pair in spec.split(',') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (pair.trim(), ""),
            };
            let command = if !value.is_empty() && value.chars().all(char::is_alphanumeric) {
                Command::literal(value)
            } else {
                self.parse_template(value)?
            };
            variables.push((key.to_string(), command));
        }
        Ok(variables)
    }

    /// A literal run: one or more fragments under the context's exclusion
    /// profile, bridged by stripped comments and rejoined with a space.
    fn try_literal(&self, cursor: &mut Cursor, context: LiteralContext) -> Option<Command> {
        let mut fragments: Vec<String> = Vec::new();
        loop {
            match self.scan_fragment(cursor, context) {
                Some(text) => fragments.push(text.to_string()),
                None => break,
            }
            let mark = cursor.pos();
            if !self.skip_comments(cursor) {
                break;
            }
            if self.peek_fragment(cursor, context).is_none() {
                cursor.restore(mark);
                break;
            }
        }
        if fragments.is_empty() {
            None
        } else {
            Some(Command::literal(fragments.join(" ")))
        }
    }

    /// One contiguous literal fragment, truncated at the first stop token
    /// (`__`, `//`, `/*`, and `::` inside variants).
    fn scan_fragment<'a>(
        &self,
        cursor: &mut Cursor<'a>,
        context: LiteralContext,
    ) -> Option<&'a str> {
        let (class, stops) = self.literal_profile(context);
        let rest = cursor.rest();
        let found = class.find(rest)?;
        let mut end = found.end();
        for stop in stops {
            if let Some(idx) = rest[..end].find(stop.as_str()) {
                end = idx;
            }
        }
        if end == 0 {
            return None;
        }
        cursor.advance(end);
        Some(&rest[..end])
    }

    fn peek_fragment(&self, cursor: &Cursor, context: LiteralContext) -> Option<usize> {
        let (class, stops) = self.literal_profile(context);
        let rest = cursor.rest();
        let found = class.find(rest)?;
        let mut end = found.end();
        for stop in stops {
            if let Some(idx) = rest[..end].find(stop.as_str()) {
                end = idx;
            }
        }
        if end == 0 {
            None
        } else {
            Some(end)
        }
    }

    fn literal_profile(&self, context: LiteralContext) -> (&Regex, &[String]) {
        match context {
            LiteralContext::Top => (&self.top_literal, &self.literal_stops),
            LiteralContext::Variant => (&self.variant_literal, &self.variant_literal_stops),
            LiteralContext::WildcardPath => (&self.wildcard_literal, &self.literal_stops),
        }
    }

    /// Skip `# ...`, `// ...` and `/* ... */` comments, together with the
    /// whitespace that introduces each one. Whitespace with no comment
    /// after it stays put, and an unterminated block comment is left for
    /// the caller to report.
    pub(super) fn skip_comments(&self, cursor: &mut Cursor) -> bool {
        let mut skipped = false;
        loop {
            let mark = cursor.pos();
            cursor.skip_whitespace();
            if cursor.starts_with("#") || cursor.starts_with("//") {
                cursor.skip_to_line_end();
                skipped = true;
            } else if cursor.starts_with("/*") {
                cursor.eat("/*");
                if cursor.skip_past("*/") {
                    skipped = true;
                } else {
                    cursor.restore(mark);
                    break;
                }
            } else {
                cursor.restore(mark);
                break;
            }
        }
        skipped
    }

    fn eat_sampler(&self, cursor: &mut Cursor) -> Option<SamplingMethod> {
        let symbol = cursor.peek()?;
        let method = SamplingMethod::from_symbol(symbol)?;
        cursor.bump();
        Some(method)
    }
}

/// Append each character of `token` that `set` does not already contain.
fn push_unique_chars(set: &mut String, token: &str) {
    for c in token.chars() {
        if !set.contains(c) {
            set.push(c);
        }
    }
}

/// Build the anchored `[^...]+` scanner for an exclusion set.
fn exclusion_regex(excluded: &str) -> Result<Regex, ConfigError> {
    let mut pattern = String::from(r"\A[^");
    for c in excluded.chars() {
        if matches!(c, '\\' | ']' | '[' | '^' | '-' | '&' | '~') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push_str("]+");
    Regex::new(&pattern).map_err(|err| ConfigError::UnusableDelimiters(err.to_string()))
}
