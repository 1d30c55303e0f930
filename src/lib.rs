//! # rule-game
//!
//! A text-menu number game. The player installs transformation rules
//! (swap, replace, ban, divisibility tag, odd/even tag) and every
//! iteration renders each number of a range through them.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: `RuleKind` is a tagged variant with parameters;
//!    one dispatch function applies it. No closures are stored.
//!
//! 2. **Conflicts Rejected Up Front**: `ConflictChecker` gates every
//!    insertion, so an installed rule set is never contradictory.
//!
//! 3. **Explicit Context**: `Session` owns the rule list and range; the
//!    shell drives it through plain method calls.
//!
//! ## Modules
//!
//! - `core`: value model, number range, configuration
//! - `rules`: rule kinds, conflict checker, predefined registry, patterns
//! - `engine`: lazy iteration over a range
//! - `session`: the active rules and range
//! - `shell`: interactive menu loop

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{GameConfig, NumberRange, Value};

pub use crate::error::{ConflictReason, GameError, Result};

pub use crate::rules::{ConflictChecker, Rule, RuleKind, RulePattern, RuleRegistry};

pub use crate::engine::{Iteration, IterationReport, RenderedLine};

pub use crate::session::Session;

pub use crate::shell::{GameOver, Outcome, Shell};
