pub mod compile_time {
    pub mod tokens {
        /// Maximum size of a token dump accepted from disk or stdin (16MB)
        /// SECURITY: Prevents memory exhaustion via oversized input
        pub const MAX_DUMP_SIZE: u64 = 16 * 1024 * 1024;

        /// Maximum number of token slots accepted from a single dump
        /// SECURITY: Bounds rendering work per request
        pub const MAX_TOKENS_PER_STREAM: usize = 1_000_000;
    }

    pub mod config {
        /// Maximum length of a CSS class prefix
        pub const MAX_CLASS_PREFIX_LENGTH: usize = 64;

        /// Maximum size of a TOML configuration file (64KB)
        pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;
    }

    pub mod logging {
        /// Events retained by in-memory loggers before the oldest are dropped
        /// RESOURCE: Controls memory usage for log capture
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length; longer messages are truncated
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 2048;
    }
}
