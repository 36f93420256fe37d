// RUNTIME PREFERENCES (User Experience)

use crate::config::compile_time::config::{MAX_CLASS_PREFIX_LENGTH, MAX_CONFIG_FILE_SIZE};
use crate::markup::{StyleTable, DEFAULT_CLASS_PREFIX};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("Invalid class prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPreferences {
    /// Namespace prepended to every style tag (`ruby-` gives `ruby-keyword`)
    pub class_prefix: String,

    /// Whether CLI output is wrapped in `<pre class="ruby">`
    pub wrap_in_pre: bool,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            class_prefix: env::var(env_vars::RENDER_CLASS_PREFIX)
                .unwrap_or_else(|_| DEFAULT_CLASS_PREFIX.to_string()),
            wrap_in_pre: env::var(env_vars::RENDER_WRAP_IN_PRE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl RenderPreferences {
    /// Style table for the configured prefix
    pub fn style_table(&self) -> StyleTable {
        if self.class_prefix == DEFAULT_CLASS_PREFIX {
            StyleTable::ruby()
        } else {
            StyleTable::with_prefix(self.class_prefix.clone())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_class_prefix(&self.class_prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub render: RenderPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing sections and keys fall back to defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                size,
                limit: MAX_CONFIG_FILE_SIZE,
            });
        }

        let source = std::fs::read_to_string(path).map_err(io_error)?;
        let config = Self::from_toml_str(&source)?;

        crate::log_info!("Loaded configuration",
            "file" => path.display(),
            "class_prefix" => &config.render.class_prefix
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()
    }
}

/// Class prefixes must be usable inside a CSS class attribute
fn validate_class_prefix(prefix: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidPrefix {
        prefix: prefix.to_string(),
        reason: reason.to_string(),
    };

    if prefix.len() > MAX_CLASS_PREFIX_LENGTH {
        return Err(invalid("too long"));
    }
    if let Some(ch) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("character {:?} not allowed", ch)));
    }
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("must not start with a digit"));
    }
    Ok(())
}

/// Environment variable names for configuration
pub mod env_vars {
    // Rendering
    pub const RENDER_CLASS_PREFIX: &str = "RUBY_MARKUP_CLASS_PREFIX";
    pub const RENDER_WRAP_IN_PRE: &str = "RUBY_MARKUP_WRAP_IN_PRE";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "RUBY_MARKUP_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "RUBY_MARKUP_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "RUBY_MARKUP_LOGGING_MIN_LEVEL";
}
