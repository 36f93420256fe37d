//! Token classification and CSS class naming
//!
//! Downstream stylesheets key off the exact class names produced here
//! (`ruby-constant`, `ruby-keyword`, ...), so both the tag vocabulary and the
//! default prefix are part of the output contract.

use crate::tokens::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Default class-name namespace
pub const DEFAULT_CLASS_PREFIX: &str = "ruby-";

/// Semantic style categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Constant,
    Keyword,
    Ivar,
    Identifier,
    Operator,
    Value,
    Node,
    Comment,
    Regexp,
    String,
}

impl StyleTag {
    pub const ALL: [StyleTag; 10] = [
        StyleTag::Constant,
        StyleTag::Keyword,
        StyleTag::Ivar,
        StyleTag::Identifier,
        StyleTag::Operator,
        StyleTag::Value,
        StyleTag::Node,
        StyleTag::Comment,
        StyleTag::Regexp,
        StyleTag::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Constant => "constant",
            StyleTag::Keyword => "keyword",
            StyleTag::Ivar => "ivar",
            StyleTag::Identifier => "identifier",
            StyleTag::Operator => "operator",
            StyleTag::Value => "value",
            StyleTag::Node => "node",
            StyleTag::Comment => "comment",
            StyleTag::Regexp => "regexp",
            StyleTag::String => "string",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the style for a token, or `None` for unstyled output.
///
/// Arms are evaluated top to bottom. A bare `=` operator matches no arm.
pub fn classify(token: &Token) -> Option<StyleTag> {
    let style = match &token.kind {
        TokenKind::Constant => StyleTag::Constant,
        TokenKind::Keyword => StyleTag::Keyword,
        TokenKind::InstanceVariable => StyleTag::Ivar,
        TokenKind::ClassVariable | TokenKind::GlobalVariable => StyleTag::Identifier,
        TokenKind::Operator if token.text != "=" => {
            if token.in_argument_position() {
                StyleTag::Identifier
            } else {
                StyleTag::Operator
            }
        }
        TokenKind::LambdaArrow => StyleTag::Operator,
        TokenKind::Identifier => StyleTag::Identifier,
        TokenKind::Label => StyleTag::Value,
        TokenKind::Backreference | TokenKind::DoubleQuotedString => StyleTag::Node,
        TokenKind::Comment | TokenKind::EmbeddedDoc => StyleTag::Comment,
        TokenKind::Regexp => StyleTag::Regexp,
        TokenKind::StringContent => StyleTag::String,
        TokenKind::Integer
        | TokenKind::Float
        | TokenKind::Rational
        | TokenKind::Imaginary
        | TokenKind::HeredocBody
        | TokenKind::Symbol
        | TokenKind::Character => StyleTag::Value,
        TokenKind::HeredocBegin | TokenKind::HeredocEnd => StyleTag::Identifier,
        _ => return None,
    };
    Some(style)
}

/// Immutable mapping from style tags to class names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    prefix: Cow<'static, str>,
}

impl StyleTable {
    /// The `ruby-` namespace used by stock stylesheets
    pub const fn ruby() -> Self {
        Self {
            prefix: Cow::Borrowed(DEFAULT_CLASS_PREFIX),
        }
    }

    /// Table with a caller-chosen namespace
    pub fn with_prefix(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full class name for `tag`, e.g. `ruby-keyword`
    pub fn class_name(&self, tag: StyleTag) -> String {
        format!("{}{}", self.prefix, tag.as_str())
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::ruby()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::LexState;

    fn style_of(kind: TokenKind, text: &str) -> Option<StyleTag> {
        classify(&Token::new(kind, text))
    }

    #[test]
    fn test_variable_kinds() {
        assert_eq!(style_of(TokenKind::InstanceVariable, "@a"), Some(StyleTag::Ivar));
        assert_eq!(style_of(TokenKind::ClassVariable, "@@a"), Some(StyleTag::Identifier));
        assert_eq!(style_of(TokenKind::GlobalVariable, "$a"), Some(StyleTag::Identifier));
    }

    #[test]
    fn test_operator_depends_on_state() {
        assert_eq!(
            classify(&Token::operator("*", LexState::Argument)),
            Some(StyleTag::Identifier)
        );
        assert_eq!(
            classify(&Token::operator("*", LexState::Other)),
            Some(StyleTag::Operator)
        );
        assert_eq!(style_of(TokenKind::Operator, "+"), Some(StyleTag::Operator));
    }

    #[test]
    fn test_bare_equals_is_unstyled() {
        assert_eq!(style_of(TokenKind::Operator, "="), None);
        assert_eq!(classify(&Token::operator("=", LexState::Argument)), None);
        assert_eq!(style_of(TokenKind::Operator, "=="), Some(StyleTag::Operator));
        assert_eq!(style_of(TokenKind::Operator, "+="), Some(StyleTag::Operator));
    }

    #[test]
    fn test_literal_kinds_are_values() {
        for kind in [
            TokenKind::Label,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::Rational,
            TokenKind::Imaginary,
            TokenKind::HeredocBody,
            TokenKind::Symbol,
            TokenKind::Character,
        ] {
            assert_eq!(style_of(kind, "x"), Some(StyleTag::Value));
        }
    }

    #[test]
    fn test_other_kinds_are_unstyled() {
        assert_eq!(style_of(TokenKind::Other("on_sp".into()), " "), None);
        assert_eq!(style_of(TokenKind::Other("on_lparen".into()), "("), None);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(StyleTable::ruby().class_name(StyleTag::Ivar), "ruby-ivar");
        assert_eq!(
            StyleTable::with_prefix("rb-").class_name(StyleTag::Node),
            "rb-node"
        );
        assert_eq!(StyleTable::default().prefix(), DEFAULT_CLASS_PREFIX);
    }
}
