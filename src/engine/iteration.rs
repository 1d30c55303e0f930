//! The iteration engine.
//!
//! An iteration walks the range ascending. For each number it builds a
//! fresh `Value`, applies every rule in insertion order, and renders.
//! A banned number stops the walk: the ban is yielded once and the
//! iterator is exhausted from then on.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::{NumberRange, Value};
use crate::error::{GameError, Result};
use crate::rules::Rule;

/// One rendered number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub number: i64,
    pub text: String,
}

impl std::fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Apply all rules, in order, to a fresh value for `number`.
#[must_use]
pub fn evaluate(number: i64, rules: &[Rule]) -> Value {
    let mut value = Value::new(number);
    for rule in rules {
        rule.apply(&mut value);
    }
    value
}

/// Lazy pass over a range.
///
/// Yields `Ok(line)` per number, or a single `Err(GameError::BannedNumber)`
/// after which it is fused.
#[derive(Clone, Debug)]
pub struct Iteration<'a> {
    rules: &'a [Rule],
    numbers: RangeInclusive<i64>,
    halted: bool,
}

impl<'a> Iteration<'a> {
    /// Start an iteration over `range`.
    #[must_use]
    pub fn new(range: NumberRange, rules: &'a [Rule]) -> Self {
        Self {
            rules,
            numbers: range.iter(),
            halted: false,
        }
    }

    /// Check if a ban stopped this iteration.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

impl Iterator for Iteration<'_> {
    type Item = Result<RenderedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let number = self.numbers.next()?;
        match evaluate(number, self.rules).render() {
            Ok(text) => Some(Ok(RenderedLine { number, text })),
            Err(e) => {
                tracing::debug!(number, "ban triggered, halting iteration");
                self.halted = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Iteration<'_> {}

/// Start an iteration from raw bounds.
pub fn run(low: i64, high: i64, rules: &[Rule]) -> Result<Iteration<'_>> {
    Ok(Iteration::new(NumberRange::new(low, high)?, rules))
}

/// Collected outcome of an iteration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationReport {
    pub range: NumberRange,
    /// Lines rendered before the iteration finished or halted.
    pub lines: Vec<RenderedLine>,
    /// The number whose ban ended the game, if any.
    pub banned: Option<i64>,
}

impl IterationReport {
    /// Drain an iteration into a report.
    ///
    /// A ban is recorded and ends collection; any other error is returned.
    pub fn collect<I>(range: NumberRange, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<RenderedLine>>,
    {
        let mut lines = Vec::new();
        let mut banned = None;

        for item in items {
            match item {
                Ok(line) => lines.push(line),
                Err(GameError::BannedNumber(n)) => {
                    banned = Some(n);
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Self { range, lines, banned })
    }

    /// Check if every number in the range rendered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.banned.is_none()
    }

    /// Rendered text, one entry per number.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}
