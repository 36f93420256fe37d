//! Ruby token representation as handed over by the lexer
//!
//! Kinds follow Ripper's event names (`on_const`, `on_kw`, ...). Only the
//! kinds the renderer styles get their own variant; everything else the
//! lexer produces (spaces, newlines, parens, commas) is carried verbatim in
//! [`TokenKind::Other`].

use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenKind {
    Constant,           // on_const
    Keyword,            // on_kw
    InstanceVariable,   // on_ivar
    ClassVariable,      // on_cvar
    GlobalVariable,     // on_gvar
    Operator,           // on_op
    LambdaArrow,        // on_tlambda
    Identifier,         // on_ident
    Label,              // on_label
    Backreference,      // on_backref
    DoubleQuotedString, // on_dstring
    Comment,            // on_comment
    EmbeddedDoc,        // on_embdoc
    Regexp,             // on_regexp
    StringContent,      // on_tstring
    Integer,            // on_int
    Float,              // on_float
    Rational,           // on_rational
    Imaginary,          // on_imaginary
    HeredocBody,        // on_heredoc
    Symbol,             // on_symbol
    Character,          // on_CHAR
    HeredocBegin,       // on_heredoc_beg
    HeredocEnd,         // on_heredoc_end
    /// Any lexer kind without a dedicated variant, keyed by its Ripper name
    Other(String),
}

impl TokenKind {
    /// Map a Ripper event name to a kind. Never fails.
    pub fn from_ripper(name: &str) -> Self {
        match name {
            "on_const" => Self::Constant,
            "on_kw" => Self::Keyword,
            "on_ivar" => Self::InstanceVariable,
            "on_cvar" => Self::ClassVariable,
            "on_gvar" => Self::GlobalVariable,
            "on_op" => Self::Operator,
            "on_tlambda" => Self::LambdaArrow,
            "on_ident" => Self::Identifier,
            "on_label" => Self::Label,
            "on_backref" => Self::Backreference,
            "on_dstring" => Self::DoubleQuotedString,
            "on_comment" => Self::Comment,
            "on_embdoc" => Self::EmbeddedDoc,
            "on_regexp" => Self::Regexp,
            "on_tstring" => Self::StringContent,
            "on_int" => Self::Integer,
            "on_float" => Self::Float,
            "on_rational" => Self::Rational,
            "on_imaginary" => Self::Imaginary,
            "on_heredoc" => Self::HeredocBody,
            "on_symbol" => Self::Symbol,
            "on_CHAR" => Self::Character,
            "on_heredoc_beg" => Self::HeredocBegin,
            "on_heredoc_end" => Self::HeredocEnd,
            other => Self::Other(other.to_string()),
        }
    }

    /// Ripper event name for this kind
    pub fn as_ripper_str(&self) -> &str {
        match self {
            Self::Constant => "on_const",
            Self::Keyword => "on_kw",
            Self::InstanceVariable => "on_ivar",
            Self::ClassVariable => "on_cvar",
            Self::GlobalVariable => "on_gvar",
            Self::Operator => "on_op",
            Self::LambdaArrow => "on_tlambda",
            Self::Identifier => "on_ident",
            Self::Label => "on_label",
            Self::Backreference => "on_backref",
            Self::DoubleQuotedString => "on_dstring",
            Self::Comment => "on_comment",
            Self::EmbeddedDoc => "on_embdoc",
            Self::Regexp => "on_regexp",
            Self::StringContent => "on_tstring",
            Self::Integer => "on_int",
            Self::Float => "on_float",
            Self::Rational => "on_rational",
            Self::Imaginary => "on_imaginary",
            Self::HeredocBody => "on_heredoc",
            Self::Symbol => "on_symbol",
            Self::Character => "on_CHAR",
            Self::HeredocBegin => "on_heredoc_beg",
            Self::HeredocEnd => "on_heredoc_end",
            Self::Other(name) => name,
        }
    }

    /// Kinds whose trailing whitespace is stripped and whose final newline
    /// is moved outside the markup wrapper
    pub fn defers_newline(&self) -> bool {
        matches!(self, Self::Comment | Self::EmbeddedDoc | Self::HeredocEnd)
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<String> for TokenKind {
    fn from(name: String) -> Self {
        Self::from_ripper(&name)
    }
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        kind.as_ripper_str().to_string()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ripper_str())
    }
}

/// Lexer state attached to operator tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LexState {
    /// The operator sits where an argument expression is expected (EXPR_ARG)
    Argument,
    /// Any other lexer state
    Other,
}

impl LexState {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "arg" | "argument" | "expr_arg" => Self::Argument,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "arg",
            Self::Other => "other",
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument)
    }
}

impl From<String> for LexState {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<LexState> for String {
    fn from(state: LexState) -> Self {
        state.as_str().to_string()
    }
}

/// A single lexical token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text; may be empty or end in a newline
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<LexState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            state: None,
            position: None,
        }
    }

    /// Operator token with an explicit lexer state
    pub fn operator(text: impl Into<String>, state: LexState) -> Self {
        Self::new(TokenKind::Operator, text).with_state(state)
    }

    pub fn with_state(mut self, state: LexState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// True when the lexer flagged this token as sitting in argument position
    pub fn in_argument_position(&self) -> bool {
        self.state.map(|s| s.is_argument()).unwrap_or(false)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
