//! Game configuration.
//!
//! Defaults reproduce the classic game: range 1–10, three attempts to
//! define a custom rule, answers printed rather than quizzed.
//!
//! | Variable                 | Default | Description                              |
//! |--------------------------|---------|------------------------------------------|
//! | `RULE_GAME_RANGE_LOW`    | `1`     | Lower bound of the starting range        |
//! | `RULE_GAME_RANGE_HIGH`   | `10`    | Upper bound of the starting range        |
//! | `RULE_GAME_MAX_RETRIES`  | `3`     | Attempts allowed for a custom rule       |
//! | `RULE_GAME_CHALLENGE`    | `false` | Ask the player for each answer           |
//! | `RULE_GAME_LOG_LEVEL`    | `warn`  | tracing filter (written to stderr)       |

use serde::{Deserialize, Serialize};

use super::range::NumberRange;

pub const ENV_RANGE_LOW: &str = "RULE_GAME_RANGE_LOW";
pub const ENV_RANGE_HIGH: &str = "RULE_GAME_RANGE_HIGH";
pub const ENV_MAX_RETRIES: &str = "RULE_GAME_MAX_RETRIES";
pub const ENV_CHALLENGE: &str = "RULE_GAME_CHALLENGE";
pub const ENV_LOG_LEVEL: &str = "RULE_GAME_LOG_LEVEL";

/// Runtime configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting range.
    pub range: NumberRange,

    /// Attempts the custom-rule flow allows when a candidate is rejected.
    pub max_retries: u32,

    /// Challenge mode: the player types each rendered answer.
    pub challenge: bool,

    /// Tracing filter string, e.g. `"rule_game=debug"`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            range: NumberRange::default(),
            max_retries: 3,
            challenge: false,
            log_level: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting range.
    #[must_use]
    pub fn with_range(mut self, range: NumberRange) -> Self {
        self.range = range;
        self
    }

    /// Set the custom-rule attempt limit (at least 1).
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Enable or disable challenge mode.
    #[must_use]
    pub fn with_challenge(mut self, challenge: bool) -> Self {
        self.challenge = challenge;
        self
    }

    /// Set the tracing filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are skipped with a warning and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let low = parse_var::<i64, _>(&lookup, ENV_RANGE_LOW).unwrap_or(config.range.low());
        let high = parse_var::<i64, _>(&lookup, ENV_RANGE_HIGH).unwrap_or(config.range.high());
        match NumberRange::new(low, high) {
            Ok(range) => config.range = range,
            Err(e) => tracing::warn!(error = %e, "ignoring configured range"),
        }

        if let Some(retries) = parse_var::<u32, _>(&lookup, ENV_MAX_RETRIES) {
            config = config.with_max_retries(retries);
        }

        if let Some(raw) = lookup(ENV_CHALLENGE) {
            match parse_flag(&raw) {
                Some(flag) => config.challenge = flag,
                None => tracing::warn!(var = ENV_CHALLENGE, value = %raw, "ignoring invalid flag"),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                config.log_level = level.trim().to_string();
            }
        }

        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = key, value = %raw, "ignoring unparseable value");
            None
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
