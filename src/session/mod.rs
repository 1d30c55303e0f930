//! Game session: the explicit context the shell drives.
//!
//! A `Session` owns the active rule list and range. Every menu action maps
//! to one method here; failures come back as typed `GameError`s and leave
//! the session unchanged.

use crate::core::{GameConfig, NumberRange};
use crate::engine::{Iteration, IterationReport};
use crate::error::{GameError, Result};
use crate::rules::{ConflictChecker, Rule, RulePattern, RuleRegistry};

/// Active rules and range for one game.
#[derive(Clone, Debug)]
pub struct Session {
    /// Insertion order is application order.
    rules: Vec<Rule>,
    range: NumberRange,
    registry: RuleRegistry,
}

impl Session {
    /// Create a session with the standard catalog and no rules.
    pub fn new(range: NumberRange) -> Result<Self> {
        Ok(Self::with_registry(range, RuleRegistry::standard()?))
    }

    /// Create a session from configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.range)
    }

    /// Create a session with a custom predefined catalog.
    #[must_use]
    pub fn with_registry(range: NumberRange, registry: RuleRegistry) -> Self {
        Self {
            rules: Vec::new(),
            range,
            registry,
        }
    }

    /// Installed rules, in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Active range.
    #[must_use]
    pub fn range(&self) -> NumberRange {
        self.range
    }

    /// Predefined catalog.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate and append a rule.
    pub fn add_rule(&mut self, rule: Rule) -> Result<&Rule> {
        if let Err(reason) = ConflictChecker::new(&self.rules).check(&rule) {
            tracing::info!(rule = %rule, %reason, "rule rejected");
            return Err(GameError::Conflict(reason));
        }

        tracing::info!(rule = %rule, position = self.rules.len() + 1, "rule added");
        self.rules.push(rule);
        let len = self.rules.len();
        self.rules
            .last()
            .ok_or(GameError::RuleIndex { index: len, len })
    }

    /// Add a predefined rule by menu number or name.
    pub fn add_predefined(&mut self, selector: &str) -> Result<&Rule> {
        let rule = self.registry.lookup(selector)?.rule.clone();
        self.add_rule(rule)
    }

    /// Build a custom rule from raw parameters and add it.
    pub fn add_custom<S: AsRef<str>>(&mut self, pattern: RulePattern, args: &[S]) -> Result<&Rule> {
        let rule = pattern.build(args)?;
        self.add_rule(rule)
    }

    /// Remove a rule by 1-based position.
    pub fn remove_rule(&mut self, index: usize) -> Result<Rule> {
        let len = self.rules.len();
        if index == 0 || index > len {
            return Err(GameError::RuleIndex { index, len });
        }

        let removed = self.rules.remove(index - 1);
        tracing::info!(rule = %removed, index, "rule removed");
        Ok(removed)
    }

    /// Remove every rule.
    pub fn clear_rules(&mut self) {
        tracing::info!(count = self.rules.len(), "rules cleared");
        self.rules.clear();
    }

    /// Change the range. On error the range is unchanged.
    pub fn set_range(&mut self, low: i64, high: i64) -> Result<NumberRange> {
        let range = NumberRange::new(low, high)?;
        tracing::info!(%range, "range changed");
        self.range = range;
        Ok(range)
    }

    /// Start a lazy iteration over the active range.
    #[must_use]
    pub fn run_iteration(&self) -> Iteration<'_> {
        tracing::debug!(range = %self.range, rules = self.rules.len(), "iteration started");
        Iteration::new(self.range, &self.rules)
    }

    /// Run an iteration to completion (or to the first ban).
    pub fn run_to_report(&self) -> Result<IterationReport> {
        let report = IterationReport::collect(self.range, self.run_iteration())?;
        tracing::debug!(
            rendered = report.lines.len(),
            banned = ?report.banned,
            "iteration finished"
        );
        Ok(report)
    }
}
