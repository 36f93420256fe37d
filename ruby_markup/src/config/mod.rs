//! Configuration module for ruby_markup
//!
//! Compile-time limits live in [`constants`]; user preferences (class prefix,
//! logging behavior) live in [`runtime`] and come from environment variables
//! or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{ConfigError, LoggingPreferences, RenderPreferences, RuntimeConfig};
