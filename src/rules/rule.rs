//! Rule definitions.
//!
//! A rule is plain data: a kind tag with its parameters plus a
//! human-readable description. Behavior lives in a single dispatch,
//! `Rule::apply`, that switches on the kind.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::Value;
use crate::error::{GameError, Result};

/// Tag applied by the odd rule.
pub const ODD_TAG: &str = "odd";
/// Tag applied by the even rule.
pub const EVEN_TAG: &str = "even";

/// Rule kind and its parameters.
///
/// ## Display rules
///
/// Change what a single number renders as:
/// - `Swap`: `a` shows as `b` and `b` shows as `a`
/// - `Replace`: `number` shows as `text`
///
/// ## Ban
///
/// - `Ban`: rendering `number` ends the game
///
/// ## Tag rules
///
/// Append a tag to every matching number. These never conflict.
/// - `Divisible`: numbers divisible by `divisor`
/// - `Odd` / `Even`: by parity
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Swap { a: i64, b: i64 },

    Replace { number: i64, text: String },

    Ban { number: i64 },

    /// `divisor` is at least 2.
    Divisible { divisor: i64, tag: String },

    Odd,

    Even,
}

impl RuleKind {
    /// Short kind name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Swap { .. } => "swap",
            RuleKind::Replace { .. } => "replace",
            RuleKind::Ban { .. } => "ban",
            RuleKind::Divisible { .. } => "divisible",
            RuleKind::Odd => "odd",
            RuleKind::Even => "even",
        }
    }

    /// Canonical form used for duplicate detection.
    ///
    /// `swap(a, b)` and `swap(b, a)` have the same effect, so endpoints
    /// are ordered.
    #[must_use]
    pub fn identity(&self) -> RuleKind {
        match self {
            RuleKind::Swap { a, b } => RuleKind::Swap {
                a: *a.min(b),
                b: *a.max(b),
            },
            other => other.clone(),
        }
    }

    /// Numbers this rule singles out by value.
    ///
    /// Empty for tag rules, which match by predicate.
    #[must_use]
    pub fn targets(&self) -> SmallVec<[i64; 2]> {
        match self {
            RuleKind::Swap { a, b } => smallvec![*a, *b],
            RuleKind::Replace { number, .. } | RuleKind::Ban { number } => smallvec![*number],
            RuleKind::Divisible { .. } | RuleKind::Odd | RuleKind::Even => SmallVec::new(),
        }
    }

    /// Check if this rule changes the display text of its targets.
    #[must_use]
    pub fn is_transform(&self) -> bool {
        matches!(self, RuleKind::Swap { .. } | RuleKind::Replace { .. })
    }

    fn describe(&self) -> String {
        match self {
            RuleKind::Swap { a, b } => format!("Swap {} ↔ {}", a, b),
            RuleKind::Replace { number, text } => format!("Replace {} → '{}'", number, text),
            RuleKind::Ban { number } => format!("Ban {}", number),
            RuleKind::Divisible { divisor, tag } => format!("Divisible by {} → '{}'", divisor, tag),
            RuleKind::Odd => format!("Odd → '{}'", ODD_TAG),
            RuleKind::Even => format!("Even → '{}'", EVEN_TAG),
        }
    }
}

/// A validated rule with its description.
///
/// Immutable once built. Construct through the factory functions, which
/// reject degenerate parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    kind: RuleKind,
    description: String,
}

impl Rule {
    /// Swap the display of `a` and `b`.
    pub fn swap(a: i64, b: i64) -> Result<Self> {
        if a == b {
            return Err(GameError::InvalidParameter(format!(
                "swap endpoints must differ (got {} and {})",
                a, b
            )));
        }
        Ok(Self::from_kind(RuleKind::Swap { a, b }))
    }

    /// Show `number` as `text`.
    pub fn replace(number: i64, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(GameError::InvalidParameter(
                "replacement text must not be empty".to_string(),
            ));
        }
        Ok(Self::from_kind(RuleKind::Replace { number, text }))
    }

    /// Forbid `number`.
    #[must_use]
    pub fn ban(number: i64) -> Self {
        Self::from_kind(RuleKind::Ban { number })
    }

    /// Tag every multiple of `divisor`.
    pub fn divisible(divisor: i64, tag: impl Into<String>) -> Result<Self> {
        if divisor < 2 {
            return Err(GameError::InvalidParameter(format!(
                "divisor must be at least 2 (got {})",
                divisor
            )));
        }
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(GameError::InvalidParameter("tag must not be empty".to_string()));
        }
        Ok(Self::from_kind(RuleKind::Divisible { divisor, tag }))
    }

    /// Tag odd numbers with `"odd"`.
    #[must_use]
    pub fn odd() -> Self {
        Self::from_kind(RuleKind::Odd)
    }

    /// Tag even numbers with `"even"`.
    #[must_use]
    pub fn even() -> Self {
        Self::from_kind(RuleKind::Even)
    }

    fn from_kind(kind: RuleKind) -> Self {
        let description = kind.describe();
        Self { kind, description }
    }

    /// Get the kind and parameters.
    #[must_use]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Get the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if two rules have the same effect.
    #[must_use]
    pub fn same_as(&self, other: &Rule) -> bool {
        self.kind.identity() == other.kind.identity()
    }

    /// Apply this rule to a value in place.
    pub fn apply(&self, value: &mut Value) {
        let n = value.number();

        match &self.kind {
            RuleKind::Swap { a, b } => {
                if n == *a {
                    value.replace_display(b.to_string());
                } else if n == *b {
                    value.replace_display(a.to_string());
                }
            }

            RuleKind::Replace { number, text } => {
                if n == *number {
                    value.replace_display(text.as_str());
                }
            }

            RuleKind::Ban { number } => {
                if n == *number {
                    value.set_ban();
                }
            }

            RuleKind::Divisible { divisor, tag } => {
                if n % divisor == 0 {
                    value.apply_tag(tag.as_str());
                }
            }

            RuleKind::Odd => {
                if n % 2 != 0 {
                    value.apply_tag(ODD_TAG);
                }
            }

            RuleKind::Even => {
                if n % 2 == 0 {
                    value.apply_tag(EVEN_TAG);
                }
            }
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rule: &Rule, n: i64) -> String {
        let mut value = Value::new(n);
        rule.apply(&mut value);
        value.render().unwrap()
    }

    #[test]
    fn test_swap() {
        let rule = Rule::swap(6, 9).unwrap();
        assert_eq!(render(&rule, 6), "9");
        assert_eq!(render(&rule, 9), "6");
        assert_eq!(render(&rule, 7), "7");
        assert_eq!(rule.description(), "Swap 6 ↔ 9");
    }

    #[test]
    fn test_swap_same_endpoints_rejected() {
        assert!(matches!(Rule::swap(3, 3), Err(GameError::InvalidParameter(_))));
    }

    #[test]
    fn test_replace() {
        let rule = Rule::replace(1, "ewww 1").unwrap();
        assert_eq!(render(&rule, 1), "ewww 1");
        assert_eq!(render(&rule, 2), "2");
        assert!(Rule::replace(1, "  ").is_err());
    }

    #[test]
    fn test_ban() {
        let rule = Rule::ban(4);
        let mut value = Value::new(4);
        rule.apply(&mut value);
        assert!(value.is_banned());

        let mut other = Value::new(5);
        rule.apply(&mut other);
        assert!(!other.is_banned());
    }

    #[test]
    fn test_divisible() {
        let rule = Rule::divisible(3, "Fizz").unwrap();
        assert_eq!(render(&rule, 9), "9 Fizz");
        assert_eq!(render(&rule, -6), "-6 Fizz");
        assert_eq!(render(&rule, 0), "0 Fizz");
        assert_eq!(render(&rule, 10), "10");
    }

    #[test]
    fn test_degenerate_divisors_rejected() {
        for divisor in [-3, 0, 1] {
            assert!(
                matches!(Rule::divisible(divisor, "x"), Err(GameError::InvalidParameter(_))),
                "divisor {} should be rejected",
                divisor
            );
        }
        assert!(Rule::divisible(2, "").is_err());
    }

    #[test]
    fn test_parity() {
        assert_eq!(render(&Rule::odd(), 3), "3 odd");
        assert_eq!(render(&Rule::odd(), -3), "-3 odd");
        assert_eq!(render(&Rule::odd(), 4), "4");
        assert_eq!(render(&Rule::even(), 4), "4 even");
        assert_eq!(render(&Rule::even(), 0), "0 even");
        assert_eq!(render(&Rule::even(), 5), "5");
    }

    #[test]
    fn test_swap_identity_is_unordered() {
        let forward = Rule::swap(6, 9).unwrap();
        let backward = Rule::swap(9, 6).unwrap();
        assert!(forward.same_as(&backward));
        assert!(!forward.same_as(&Rule::swap(6, 8).unwrap()));
    }

    #[test]
    fn test_targets() {
        assert_eq!(Rule::swap(1, 2).unwrap().kind().targets().as_slice(), &[1, 2]);
        assert_eq!(Rule::ban(4).kind().targets().as_slice(), &[4]);
        assert!(Rule::odd().kind().targets().is_empty());
        assert!(Rule::replace(1, "x").unwrap().kind().is_transform());
        assert!(!Rule::ban(1).kind().is_transform());
    }
}
