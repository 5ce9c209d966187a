//! The ordered rewrite cascade.
//!
//! A [`Cascade`] is a fixed list of steps applied one after another to a single
//! working buffer. Each step sees the output of the previous one, never the
//! original input. [`PENN_TREEBANK`] holds the built-in table, compiled once and
//! shared read-only by every caller.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Captures;
use serde::Serialize;

use super::rule::{
    prefix_groups_with_spaces, suffix_groups_with_spaces, surround_with_spaces, Replacement, Rule,
};
use crate::error::TokenizerResult;

/// One entry of the cascade
#[derive(Debug, Clone)]
pub enum Step {
    /// Rewrite every match of a rule across the whole buffer
    Rewrite(Rule),
    /// Add one space at the start and one at the end of the buffer
    Pad,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Rewrite(rule) => rule.name(),
            Step::Pad => "pad",
        }
    }

    /// Run this step on the buffer. Returns the buffer unchanged (borrowed)
    /// when nothing matched.
    pub fn apply<'t>(&self, buffer: &'t str) -> Cow<'t, str> {
        match self {
            Step::Rewrite(rule) => rule.apply(buffer),
            Step::Pad => Cow::Owned(format!(" {} ", buffer)),
        }
    }
}

/// The buffer after a single cascade step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// 1-based position of the step in the cascade
    pub index: usize,
    pub rule: &'static str,
    pub changed: bool,
    pub buffer: String,
}

/// An ordered list of rewrite steps
#[derive(Debug, Clone)]
pub struct Cascade {
    steps: Vec<Step>,
}

/// The Penn Treebank cascade, compiled on first use.
pub static PENN_TREEBANK: Lazy<Cascade> = Lazy::new(|| {
    Cascade::penn_treebank().expect("built-in Penn Treebank patterns must compile")
});

impl Cascade {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Build the Penn Treebank rule table.
    ///
    /// The padding step sits after the punctuation rules and before the quote
    /// and contraction rules. Contractions at the very end of the text only
    /// match because of it.
    pub fn penn_treebank() -> TokenizerResult<Self> {
        let rule = |name: &'static str, pattern: &str, replacement: Replacement| {
            Rule::new(name, pattern, replacement).map(Step::Rewrite)
        };

        let steps = vec![
            // Starting quotes
            rule("quote_at_start", r#"^""#, Replacement::Literal("``"))?,
            rule("graves", r"``", Replacement::Literal(" `` "))?,
            rule(
                "open_quote",
                r#"([ (\[{<])""#,
                Replacement::With(|caps: &Captures<'_>| format!("{} `` ", &caps[1])),
            )?,
            // Punctuation
            rule(
                "colon_or_comma",
                r"([:,])([^0-9])",
                Replacement::With(prefix_groups_with_spaces),
            )?,
            rule("ellipsis", r"\.\.\.", Replacement::Literal(" ... "))?,
            rule("special", r"[;@#$%&]", Replacement::With(surround_with_spaces))?,
            rule(
                "dot_at_end",
                r#"([^.])(\.)([\]\)}>"']*)\s*$"#,
                Replacement::With(|caps: &Captures<'_>| {
                    format!("{} {}{} ", &caps[1], &caps[2], &caps[3])
                }),
            )?,
            rule(
                "question_or_exclamation",
                r"[?!]",
                Replacement::With(surround_with_spaces),
            )?,
            rule(
                "single_quote",
                r"([^'])' ",
                Replacement::With(|caps: &Captures<'_>| format!("{} ' ", &caps[1])),
            )?,
            // Parentheses, brackets, etc.
            rule("brackets", r"[\]\[(){}<>]", Replacement::With(surround_with_spaces))?,
            rule("hyphens", r"--", Replacement::Literal(" -- "))?,
            Step::Pad,
            // Ending quotes
            rule("quote", r#"""#, Replacement::Literal(" '' "))?,
            // Possessive or close-single-quote
            rule(
                "single_quotes",
                r"(\S)('')",
                Replacement::With(suffix_groups_with_spaces),
            )?,
            // Contractions
            rule(
                "contractions",
                r"([^' ])('[smdSMD]?) ",
                Replacement::With(suffix_groups_with_spaces),
            )?,
            rule(
                "compound_contractions",
                r"(?i)([^' ])('ll|'re|'ve|n't) ",
                Replacement::With(suffix_groups_with_spaces),
            )?,
            rule("cannot", r"(?i)\bcannot\b", Replacement::Literal(" can not "))?,
        ];

        Ok(Self::new(steps))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Thread the input through every step in order and return the final buffer.
    pub fn rewrite(&self, text: &str) -> String {
        let mut buffer = text.to_owned();
        for (i, step) in self.steps.iter().enumerate() {
            if let Cow::Owned(next) = step.apply(&buffer) {
                log::trace!("step {:>2} {}: {:?}", i + 1, step.name(), next);
                buffer = next;
            }
        }
        buffer
    }

    /// Like [`Cascade::rewrite`], but record the buffer after every step.
    pub fn trace(&self, text: &str) -> Vec<TraceStep> {
        let mut buffer = text.to_owned();
        let mut trace = Vec::with_capacity(self.steps.len());

        for (i, step) in self.steps.iter().enumerate() {
            let changed = match step.apply(&buffer) {
                Cow::Owned(next) => {
                    // replace_all allocates on any match, even when the text comes out the same
                    let changed = next != buffer;
                    buffer = next;
                    changed
                }
                Cow::Borrowed(_) => false,
            };
            trace.push(TraceStep {
                index: i + 1,
                rule: step.name(),
                changed,
                buffer: buffer.clone(),
            });
        }

        trace
    }
}
