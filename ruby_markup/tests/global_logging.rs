//! Global logger wiring
//!
//! Runs in its own test binary because the global logger can only be
//! installed once per process.

use ruby_markup::config::runtime::LogLevel;
use ruby_markup::config::LoggingPreferences;
use ruby_markup::logging::{self, codes, LoggingService, MemoryLogger};
use ruby_markup::{to_html, Token, TokenKind, TokenStream};
use std::sync::Arc;

#[test]
fn test_library_events_reach_global_logger() {
    logging::config::init_runtime_preferences(LoggingPreferences {
        use_structured_logging: false,
        enable_console_logging: false,
        min_log_level: LogLevel::Debug,
    })
    .unwrap();

    let memory = Arc::new(MemoryLogger::new());
    logging::init_global_logging_with_service(Arc::new(LoggingService::new(
        memory.clone(),
        logging::LogLevel::Debug,
    )))
    .unwrap();
    assert!(logging::is_initialized());
    assert!(logging::init_global_logging().is_err());

    let mut stream = TokenStream::new();
    assert_eq!(stream.pop_token(), None);
    stream.add(Token::new(TokenKind::Keyword, "def"));
    let html = to_html(stream.tokens());
    assert_eq!(html, "<span class=\"ruby-keyword\">def</span>");

    let messages: Vec<String> = memory.get_events().into_iter().map(|e| e.message).collect();
    assert!(messages.iter().any(|m| m == "pop_token called on empty token stream"));
    assert!(messages.iter().any(|m| m == "Rendered token stream"));

    ruby_markup::log_error!(codes::input::INVALID_DUMP, "Bad dump", "file" => "tokens.json");
    assert!(memory.has_error_with_code(codes::input::INVALID_DUMP));
    assert_eq!(memory.get_summary().error_count, 1);
}
