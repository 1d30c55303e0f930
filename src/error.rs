//! Error taxonomy for the game.
//!
//! Every variant except `BannedNumber` is recoverable: the shell reports it
//! and returns to the menu. `BannedNumber` ends the game.

use thiserror::Error;

/// Why the conflict checker rejected a candidate rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConflictReason {
    /// A rule with the same kind and parameters is already installed.
    Duplicate,
    /// The candidate transforms a number that an installed `ban` forbids.
    TargetBanned,
    /// The candidate bans a number that a `swap` or `replace` already transforms.
    AlreadyTransformed,
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ConflictReason::Duplicate => "duplicate rule",
            ConflictReason::TargetBanned => "target is banned",
            ConflictReason::AlreadyTransformed => "number already has a transform",
        };
        f.write_str(reason)
    }
}

/// Errors produced by the game core and the shell.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("conflict: {0}")]
    Conflict(ConflictReason),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0} is banned")]
    BannedNumber(i64),

    #[error("invalid range {low}..{high}: low must not exceed high")]
    Range { low: i64, high: i64 },

    #[error("unknown predefined rule: {0}")]
    UnknownPredefined(String),

    #[error("no rule #{index} (have {len})")]
    RuleIndex { index: usize, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error ends the game rather than returning to the menu.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameError::BannedNumber(_))
    }
}

impl From<ConflictReason> for GameError {
    fn from(reason: ConflictReason) -> Self {
        GameError::Conflict(reason)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_reason_messages() {
        assert_eq!(ConflictReason::Duplicate.to_string(), "duplicate rule");
        assert_eq!(ConflictReason::TargetBanned.to_string(), "target is banned");
        assert_eq!(
            ConflictReason::AlreadyTransformed.to_string(),
            "number already has a transform"
        );
    }

    #[test]
    fn test_only_ban_is_game_over() {
        assert!(GameError::BannedNumber(4).is_game_over());
        assert!(!GameError::Conflict(ConflictReason::Duplicate).is_game_over());
        assert!(!GameError::Range { low: 5, high: 1 }.is_game_over());
        assert!(!GameError::InvalidParameter("x".into()).is_game_over());
    }

    #[test]
    fn test_error_display() {
        let err: GameError = ConflictReason::TargetBanned.into();
        assert_eq!(err.to_string(), "conflict: target is banned");
        assert_eq!(GameError::BannedNumber(4).to_string(), "4 is banned");
    }
}
