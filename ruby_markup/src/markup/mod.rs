//! HTML syntax highlighting for Ruby token streams
//!
//! Rendering is a pure function of the token sequence: every token is
//! classified on its own (kind, plus the lexer state for operators), escaped,
//! and wrapped in a `<span>` carrying a `ruby-*` class when it has a style.
//! The output is a fragment meant to be embedded in a larger document.

pub mod escape;
pub mod renderer;
pub mod style;

pub use escape::escape_html;
pub use renderer::{to_html, RenderStats, Renderer};
pub use style::{classify, StyleTable, StyleTag, DEFAULT_CLASS_PREFIX};
