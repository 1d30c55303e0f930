//! Core types: the value model, number ranges, and configuration.

pub mod config;
pub mod range;
pub mod value;

pub use config::GameConfig;
pub use range::NumberRange;
pub use value::{Value, TAG_DELIMITER};
