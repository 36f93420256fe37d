//! Code entities that collect their own source tokens
//!
//! A documentation parser walks a file and, for each method, class or module
//! it finds, records the tokens making up that entity's source. Any type that
//! owns a [`TokenStream`] gets the collection surface by implementing
//! [`TokenCollector`].

use crate::markup::Renderer;
use crate::tokens::{Token, TokenStream, TokenTree};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token collection surface exposed to the embedding parser
pub trait TokenCollector {
    fn token_stream_mut(&mut self) -> &mut TokenStream;

    fn token_stream(&self) -> &TokenStream;

    /// Begin a fresh collection, discarding earlier tokens
    fn start_collecting(&mut self) {
        self.token_stream_mut().start_collecting();
    }

    /// Append a token, an empty slot, or a nested group
    fn add(&mut self, tokens: impl Into<TokenTree>)
    where
        Self: Sized,
    {
        self.token_stream_mut().add(tokens);
    }

    fn add_token(&mut self, token: Token) {
        self.token_stream_mut().add_token(token);
    }

    fn add_tokens<I, T>(&mut self, tokens: I)
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
        T: Into<TokenTree>,
    {
        self.token_stream_mut().add_tokens(tokens);
    }

    /// Remove the last token; `None` when nothing is left
    fn pop_token(&mut self) -> Option<Token> {
        self.token_stream_mut().pop_token()
    }

    fn tokens_to_s(&self) -> String {
        self.token_stream().tokens_to_s()
    }
}

/// What kind of code object an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Method,
    SingletonMethod,
    Class,
    Module,
    Attribute,
    Constant,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Method => "method",
            EntityKind::SingletonMethod => "singleton_method",
            EntityKind::Class => "class",
            EntityKind::Module => "module",
            EntityKind::Attribute => "attribute",
            EntityKind::Constant => "constant",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named code object with its collected source tokens
#[derive(Debug, Clone, PartialEq)]
pub struct CodeEntity {
    pub name: String,
    pub kind: EntityKind,
    tokens: TokenStream,
}

impl CodeEntity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            tokens: TokenStream::new(),
        }
    }

    /// Highlighted source of this entity
    pub fn source_html(&self, renderer: &Renderer) -> String {
        crate::log_debug!("Rendering entity source",
            "entity" => &self.name,
            "kind" => self.kind,
            "tokens" => self.tokens.len()
        );
        renderer.render(&self.tokens)
    }
}

impl TokenCollector for CodeEntity {
    fn token_stream_mut(&mut self) -> &mut TokenStream {
        &mut self.tokens
    }

    fn token_stream(&self) -> &TokenStream {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    fn sample_method() -> CodeEntity {
        let mut method = CodeEntity::new("greet", EntityKind::Method);
        method.start_collecting();
        method.add(Token::new(TokenKind::Keyword, "def"));
        method.add(vec![
            Some(Token::new(TokenKind::Other("on_sp".into()), " ")),
            None,
            Some(Token::new(TokenKind::Identifier, "greet")),
        ]);
        method
    }

    #[test]
    fn test_entity_collects_through_trait() {
        let method = sample_method();
        assert_eq!(method.tokens_to_s(), "def greet");
        assert_eq!(method.token_stream().len(), 4);
    }

    #[test]
    fn test_pop_and_restart() {
        let mut method = sample_method();
        assert_eq!(method.pop_token().map(|t| t.text), Some("greet".to_string()));
        assert_eq!(method.pop_token(), None);
        assert_eq!(method.tokens_to_s(), "def ");

        method.start_collecting();
        assert!(method.token_stream().is_empty());
        assert_eq!(method.pop_token(), None);
    }

    #[test]
    fn test_entities_do_not_share_streams() {
        let mut first = CodeEntity::new("a", EntityKind::Method);
        let mut second = CodeEntity::new("B", EntityKind::Class);
        first.add_token(Token::new(TokenKind::Identifier, "a"));
        second.add_tokens([Token::new(TokenKind::Constant, "B")]);

        assert_eq!(first.tokens_to_s(), "a");
        assert_eq!(second.tokens_to_s(), "B");
    }

    #[test]
    fn test_source_html() {
        let html = sample_method().source_html(&Renderer::default());
        assert_eq!(
            html,
            "<span class=\"ruby-keyword\">def</span> <span class=\"ruby-identifier\">greet</span>"
        );
    }
}
