//! Pre-insertion conflict checking.
//!
//! The checker compares a candidate rule against the installed rules and
//! rejects logical contradictions before the candidate is added. It never
//! looks at iteration output.
//!
//! Checks run in order, first failure wins:
//! 1. Same effect as an installed rule: `Duplicate`
//! 2. `swap` touching a banned number: `TargetBanned`
//! 3. `replace` of a banned number: `TargetBanned`
//! 4. `ban` of a number a `swap`/`replace` transforms: `AlreadyTransformed`
//!
//! Tag rules (`divisible`, `odd`, `even`) only add tags and conflict with
//! nothing beyond exact duplicates.

use rustc_hash::FxHashSet;

use crate::error::ConflictReason;

use super::rule::{Rule, RuleKind};

/// Conflict checker over a borrowed rule set.
#[derive(Clone, Copy, Debug)]
pub struct ConflictChecker<'a> {
    active: &'a [Rule],
}

impl<'a> ConflictChecker<'a> {
    /// Create a checker over the installed rules.
    #[must_use]
    pub fn new(active: &'a [Rule]) -> Self {
        Self { active }
    }

    /// Numbers forbidden by installed `ban` rules.
    #[must_use]
    pub fn banned_numbers(&self) -> FxHashSet<i64> {
        self.active
            .iter()
            .filter_map(|rule| match rule.kind() {
                RuleKind::Ban { number } => Some(*number),
                _ => None,
            })
            .collect()
    }

    /// Numbers whose display an installed `swap` or `replace` changes.
    #[must_use]
    pub fn transformed_numbers(&self) -> FxHashSet<i64> {
        self.active
            .iter()
            .filter(|rule| rule.kind().is_transform())
            .flat_map(|rule| rule.kind().targets())
            .collect()
    }

    /// Validate a candidate.
    pub fn check(&self, candidate: &Rule) -> Result<(), ConflictReason> {
        if self.active.iter().any(|existing| existing.same_as(candidate)) {
            return Err(ConflictReason::Duplicate);
        }

        match candidate.kind() {
            RuleKind::Swap { .. } | RuleKind::Replace { .. } => {
                let banned = self.banned_numbers();
                if candidate.kind().targets().iter().any(|n| banned.contains(n)) {
                    return Err(ConflictReason::TargetBanned);
                }
            }
            RuleKind::Ban { number } => {
                if self.transformed_numbers().contains(number) {
                    return Err(ConflictReason::AlreadyTransformed);
                }
            }
            RuleKind::Divisible { .. } | RuleKind::Odd | RuleKind::Even => {}
        }

        Ok(())
    }
}

/// Check a candidate against a rule set.
pub fn check(candidate: &Rule, existing: &[Rule]) -> Result<(), ConflictReason> {
    ConflictChecker::new(existing).check(candidate)
}
