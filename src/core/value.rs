//! The value model: one number under transformation.
//!
//! A `Value` is created fresh for every number in every iteration. Rules
//! mutate it in place, then `render` reads the final state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GameError, Result};

/// Delimiter between the display text and each tag.
pub const TAG_DELIMITER: &str = " ";

/// A number under transformation plus its accumulated tags and ban state.
///
/// ## Rendering
///
/// - Banned: `render` fails with `GameError::BannedNumber`
/// - Otherwise: display text followed by each tag, in application order
///
/// The display text is the original number unless `replace_display`
/// overrode it. Predicates always see the original `number`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    number: i64,
    display: Option<String>,
    /// Insertion-ordered set; most numbers carry zero or one tag.
    tags: SmallVec<[String; 2]>,
    banned: bool,
}

impl Value {
    /// Create a fresh, untagged value.
    #[must_use]
    pub fn new(number: i64) -> Self {
        Self {
            number,
            display: None,
            tags: SmallVec::new(),
            banned: false,
        }
    }

    /// The original number.
    #[must_use]
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Add a tag. Duplicate tags collapse.
    pub fn apply_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Mark the value as banned.
    pub fn set_ban(&mut self) {
        self.banned = true;
    }

    /// Override the literal number in rendering. Tags are kept.
    pub fn replace_display(&mut self, text: impl Into<String>) {
        self.display = Some(text.into());
    }

    /// Check if the value has been banned.
    #[must_use]
    pub fn is_banned(&self) -> bool {
        self.banned
    }

    /// Tags in the order they were applied.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The replacement display text, if any rule set one.
    #[must_use]
    pub fn display_override(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Render the final state.
    ///
    /// Does not mutate, so repeated calls agree.
    pub fn render(&self) -> Result<String> {
        if self.banned {
            return Err(GameError::BannedNumber(self.number));
        }

        let mut out = match &self.display {
            Some(text) => text.clone(),
            None => self.number.to_string(),
        };
        for tag in &self.tags {
            out.push_str(TAG_DELIMITER);
            out.push_str(tag);
        }
        Ok(out)
    }
}
