//! Rule registry: the predefined catalog and custom rule patterns.
//!
//! `RuleRegistry` holds ready-made rules the player picks by menu number
//! or name. `RulePattern` describes one custom rule shape per kind and
//! builds a rule from raw parameter text.

use crate::error::{GameError, Result};

use super::rule::Rule;

/// A named, ready-made rule.
#[derive(Clone, Debug)]
pub struct PredefinedRule {
    /// Menu label.
    pub label: String,
    /// Lookup name (e.g. `"fizz"`).
    pub name: String,
    /// The rule itself.
    pub rule: Rule,
}

impl PredefinedRule {
    /// Create a catalog entry. The label defaults to the rule description.
    pub fn new(name: impl Into<String>, rule: Rule) -> Self {
        Self {
            label: rule.description().to_string(),
            name: name.into(),
            rule,
        }
    }
}

/// Catalog of predefined rules.
///
/// Entries keep insertion order and are numbered from 1 for menus.
///
/// ## Example
///
/// ```
/// use rule_game::rules::RuleRegistry;
///
/// let registry = RuleRegistry::standard().unwrap();
///
/// let fizz = registry.lookup("fizz").unwrap();
/// assert_eq!(fizz.rule.description(), "Divisible by 3 → 'Fizz'");
/// assert_eq!(registry.lookup("4").unwrap().name, "fizz");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    entries: Vec<PredefinedRule>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(PredefinedRule::new("swap-6-9", Rule::swap(6, 9)?))?;
        registry.register(PredefinedRule::new("replace-1", Rule::replace(1, "ewww 1")?))?;
        registry.register(PredefinedRule::new("ban-4", Rule::ban(4)))?;
        registry.register(PredefinedRule::new("fizz", Rule::divisible(3, "Fizz")?))?;
        registry.register(PredefinedRule::new("odd", Rule::odd()))?;
        registry.register(PredefinedRule::new("even", Rule::even()))?;
        Ok(registry)
    }

    /// Register an entry. Names must be unique.
    pub fn register(&mut self, entry: PredefinedRule) -> Result<()> {
        if self.find_by_name(&entry.name).is_some() {
            return Err(GameError::InvalidParameter(format!(
                "predefined rule '{}' already registered",
                entry.name
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Get an entry by 1-based menu number.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&PredefinedRule> {
        number.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    /// Find an entry by name (case-insensitive).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&PredefinedRule> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a selector: a menu number or a name.
    pub fn lookup(&self, selector: &str) -> Result<&PredefinedRule> {
        let selector = selector.trim();
        let found = match selector.parse::<usize>() {
            Ok(number) => self.get(number),
            Err(_) => self.find_by_name(selector),
        };
        found.ok_or_else(|| GameError::UnknownPredefined(selector.to_string()))
    }

    /// Iterate entries with their menu numbers.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PredefinedRule)> {
        self.entries.iter().enumerate().map(|(idx, entry)| (idx + 1, entry))
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Kind of a pattern parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Text,
}

/// One parameter a pattern prompts for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

const fn int(name: &'static str) -> ParamSpec {
    ParamSpec { name, kind: ParamKind::Integer }
}

const fn text(name: &'static str) -> ParamSpec {
    ParamSpec { name, kind: ParamKind::Text }
}

/// Custom rule shapes, one per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RulePattern {
    Swap,
    Replace,
    Ban,
    Divisible,
    Odd,
    Even,
}

impl RulePattern {
    /// All patterns in menu order.
    pub const ALL: [RulePattern; 6] = [
        RulePattern::Swap,
        RulePattern::Replace,
        RulePattern::Ban,
        RulePattern::Divisible,
        RulePattern::Odd,
        RulePattern::Even,
    ];

    /// Get a pattern by 1-based menu number.
    #[must_use]
    pub fn from_menu(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Menu label, e.g. `"Swap A B"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RulePattern::Swap => "Swap A B",
            RulePattern::Replace => "Replace N TEXT",
            RulePattern::Ban => "Ban N",
            RulePattern::Divisible => "Divisible D TEXT",
            RulePattern::Odd => "Odd",
            RulePattern::Even => "Even",
        }
    }

    /// Parameters, in prompt order.
    #[must_use]
    pub fn params(self) -> &'static [ParamSpec] {
        const SWAP: [ParamSpec; 2] = [int("A"), int("B")];
        const REPLACE: [ParamSpec; 2] = [int("N"), text("TEXT")];
        const BAN: [ParamSpec; 1] = [int("N")];
        const DIVISIBLE: [ParamSpec; 2] = [int("D"), text("TEXT")];

        match self {
            RulePattern::Swap => &SWAP,
            RulePattern::Replace => &REPLACE,
            RulePattern::Ban => &BAN,
            RulePattern::Divisible => &DIVISIBLE,
            RulePattern::Odd | RulePattern::Even => &[],
        }
    }

    /// Build a rule from raw parameter text, one entry per `params()`.
    pub fn build<S: AsRef<str>>(self, args: &[S]) -> Result<Rule> {
        let params = self.params();
        if args.len() != params.len() {
            return Err(GameError::InvalidParameter(format!(
                "{} expects {} parameter(s), got {}",
                self.label(),
                params.len(),
                args.len()
            )));
        }

        let int_at = |idx: usize| parse_int(params[idx].name, args[idx].as_ref());
        let text_at = |idx: usize| args[idx].as_ref().to_string();

        match self {
            RulePattern::Swap => Rule::swap(int_at(0)?, int_at(1)?),
            RulePattern::Replace => Rule::replace(int_at(0)?, text_at(1)),
            RulePattern::Ban => Ok(Rule::ban(int_at(0)?)),
            RulePattern::Divisible => Rule::divisible(int_at(0)?, text_at(1)),
            RulePattern::Odd => Ok(Rule::odd()),
            RulePattern::Even => Ok(Rule::even()),
        }
    }
}

fn parse_int(name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| {
        GameError::InvalidParameter(format!("{} must be an integer (got '{}')", name, raw.trim()))
    })
}
