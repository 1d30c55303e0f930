//! Rule system: rule kinds, the conflict checker, and the registry.
//!
//! ## Key Types
//!
//! - `Rule`: a validated, immutable rule with its description
//! - `RuleKind`: tagged variant, one per kind, with parameters
//! - `ConflictChecker`: rejects contradictory rules before insertion
//! - `RuleRegistry`: predefined catalog
//! - `RulePattern`: custom rule shapes built from raw parameters

pub mod conflict;
pub mod registry;
pub mod rule;

pub use conflict::{check, ConflictChecker};
pub use registry::{ParamKind, ParamSpec, PredefinedRule, RulePattern, RuleRegistry};
pub use rule::{Rule, RuleKind, EVEN_TAG, ODD_TAG};
