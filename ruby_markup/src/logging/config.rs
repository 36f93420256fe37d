//! Runtime logging preferences
//!
//! Preferences are installed once at startup. Before that, defaults (read
//! from the environment) apply.

use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH};
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Get minimum log level
pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

/// Check if structured logging is enabled
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Get in-memory event buffer size
pub fn get_log_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Get configuration summary for debugging
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();
    format!(
        "Logging Configuration:\n\
         - Min Log Level: {}\n\
         - Structured Logging: {}\n\
         - Console Logging: {}\n\
         - Log Buffer Size: {}\n\
         - Max Message Length: {}\n",
        preferences.min_log_level.as_str(),
        preferences.use_structured_logging,
        preferences.enable_console_logging,
        LOG_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_summary() {
        let summary = get_config_summary();
        assert!(summary.contains("Min Log Level"));
        assert!(summary.contains(&LOG_BUFFER_SIZE.to_string()));
    }

    #[test]
    fn test_buffer_size_is_compile_time_constant() {
        assert_eq!(get_log_buffer_size(), LOG_BUFFER_SIZE);
    }
}
