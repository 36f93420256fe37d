//! JSON token dumps
//!
//! A dump is a JSON array whose elements are token objects or `null`:
//!
//! ```text
//! [{"kind": "on_kw", "text": "def"}, null, {"kind": "on_op", "text": "*", "state": "arg"}]
//! ```

use crate::config::compile_time::tokens::{MAX_DUMP_SIZE, MAX_TOKENS_PER_STREAM};
use crate::tokens::Token;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum TokenIoError {
    #[error("Invalid token dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read token dump '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Token dump is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("Token dump holds {count} tokens, limit is {limit}")]
    TooManyTokens { count: usize, limit: usize },
}

/// Parse a token dump
pub fn read_tokens(json: &str) -> Result<Vec<Option<Token>>, TokenIoError> {
    if json.len() as u64 > MAX_DUMP_SIZE {
        return Err(TokenIoError::TooLarge {
            size: json.len() as u64,
            limit: MAX_DUMP_SIZE,
        });
    }

    let tokens: Vec<Option<Token>> = serde_json::from_str(json)?;
    if tokens.len() > MAX_TOKENS_PER_STREAM {
        return Err(TokenIoError::TooManyTokens {
            count: tokens.len(),
            limit: MAX_TOKENS_PER_STREAM,
        });
    }

    let unknown = tokens
        .iter()
        .flatten()
        .filter(|token| token.kind.is_other())
        .count();
    crate::log_debug!("Token dump parsed",
        "slots" => tokens.len(),
        "unstyled_kinds" => unknown
    );

    Ok(tokens)
}

/// Read and parse a token dump from disk
pub fn read_tokens_from_file(path: &Path) -> Result<Vec<Option<Token>>, TokenIoError> {
    let io_error = |source| TokenIoError::Io {
        path: path.display().to_string(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_error)?.len();
    if size > MAX_DUMP_SIZE {
        return Err(TokenIoError::TooLarge {
            size,
            limit: MAX_DUMP_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(io_error)?;
    read_tokens(&content)
}

/// Serialize tokens as a dump
pub fn write_tokens(tokens: &[Option<Token>]) -> Result<String, TokenIoError> {
    Ok(serde_json::to_string(tokens)?)
}
