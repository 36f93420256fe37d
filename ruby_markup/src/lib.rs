// Internal modules
pub mod config;
pub mod entity;
#[macro_use]
pub mod logging;
pub mod markup;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use entity::{CodeEntity, EntityKind, TokenCollector};
pub use markup::{to_html, Renderer, StyleTable, StyleTag};
pub use tokens::{LexState, Token, TokenKind, TokenStream, TokenTree};
