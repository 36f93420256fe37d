//! Consolidated error codes and classification system
//!
//! Single source of truth for all log codes and their metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            requires_halt,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Token dump input error codes
pub mod input {
    use super::Code;

    pub const DUMP_NOT_FOUND: Code = Code::new("E001");
    pub const DUMP_TOO_LARGE: Code = Code::new("E002");
    pub const INVALID_DUMP: Code = Code::new("E003");
    pub const TOO_MANY_TOKENS: Code = Code::new("E004");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const INVALID_CONFIG: Code = Code::new("E010");
}

/// Output error codes
pub mod output {
    use super::Code;

    pub const WRITE_FAILED: Code = Code::new("E020");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const DUMP_LOADED: Code = Code::new("I010");
    pub const RENDERING_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

const METADATA: &[ErrorMetadata] = &[
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        true,
        "Critical internal error",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        true,
        "Logging or configuration initialization failure",
    ),
    ErrorMetadata::new(
        "E001",
        "Input",
        Severity::Medium,
        true,
        "Token dump not found or unreadable",
    ),
    ErrorMetadata::new(
        "E002",
        "Input",
        Severity::Medium,
        true,
        "Token dump exceeds maximum size",
    ),
    ErrorMetadata::new(
        "E003",
        "Input",
        Severity::Medium,
        true,
        "Token dump is not a JSON array of tokens",
    ),
    ErrorMetadata::new(
        "E004",
        "Input",
        Severity::Medium,
        true,
        "Token dump exceeds maximum token count",
    ),
    ErrorMetadata::new(
        "E010",
        "Config",
        Severity::High,
        true,
        "Configuration file missing, malformed or invalid",
    ),
    ErrorMetadata::new(
        "E020",
        "Output",
        Severity::High,
        true,
        "Rendered output could not be written",
    ),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, &'static ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, &'static ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| METADATA.iter().map(|meta| (meta.code, meta)).collect())
}

/// Metadata for `code`, if it is a registered error code
pub fn get_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code).copied()
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|meta| meta.severity)
        .unwrap_or(Severity::Low)
}

pub fn get_category(code: &str) -> &'static str {
    match get_metadata(code) {
        Some(meta) => meta.category,
        None if code.starts_with('I') => "Success",
        None if code.starts_with('W') => "Warning",
        None if code.starts_with('D') => "Debug",
        None => "Unknown",
    }
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|meta| meta.description)
        .unwrap_or("Unknown error")
}

pub fn requires_halt(code: &str) -> bool {
    get_metadata(code)
        .map(|meta| meta.requires_halt)
        .unwrap_or(false)
}
