//! Source location tracking for lexer-produced tokens
//!
//! Tokens handed to this crate may carry the line and column the lexer saw
//! them at. Rendering never looks at positions; they exist so that log events
//! and token dumps can point back into the original source.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0-based, as reported by Ripper)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create the starting position (line 1, column 0)
    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    /// Position after consuming `text` starting at this position
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, |pos, ch| match ch {
            '\n' => Self {
                line: pos.line + 1,
                column: 0,
            },
            _ => Self {
                line: pos.line,
                column: pos.column + 1,
            },
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_over_newline() {
        let pos = Position::start().advance_str("def foo\n  bar");
        assert_eq!(pos, Position::new(2, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "3:7");
    }
}
