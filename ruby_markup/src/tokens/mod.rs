//! Token system for Ruby source highlighting
//!
//! Tokens are produced by an external lexer (Ripper, in practice) and only
//! consumed here. This module defines their in-memory shape and the buffer
//! code entities use to collect them during a parse pass.
//!
//! ## Key Components
//!
//! - **[`Token`]** - kind, literal text, optional lexer state and position
//! - **[`TokenKind`]** - the Ripper event vocabulary the renderer understands
//! - **[`TokenStream`]** - append/pop buffer owned by one code entity
//! - **[`io`]** - JSON token dumps for exchanging streams with other tools
//!
//! ## Empty Slots
//!
//! A stream element is `Option<Token>`. Empty slots are legal everywhere:
//! they never render, never contribute text, and popping one yields `None`
//! exactly like popping an empty stream.

pub mod io;
pub mod token;
pub mod token_stream;

// Re-export key types for convenience
pub use io::{read_tokens, read_tokens_from_file, write_tokens, TokenIoError};
pub use token::{LexState, Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamBuilder, TokenTree};
