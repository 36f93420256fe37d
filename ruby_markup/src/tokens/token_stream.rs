//! Token collection buffer for a single parse pass
//!
//! A [`TokenStream`] records the tokens of one code entity in lexer order.
//! Slots may be empty (`None`): lexers occasionally emit placeholders and the
//! stream keeps them so that positions line up, while every reader skips them.

use crate::tokens::token::{Token, TokenKind};
use crate::utils::Position;

/// A token, an empty slot, or an arbitrarily nested group of either.
///
/// Used by [`TokenStream::add`] so callers can push whatever shape their
/// parser produced; groups are flattened depth-first.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    Token(Option<Token>),
    Group(Vec<TokenTree>),
}

impl TokenTree {
    fn flatten_into(self, out: &mut Vec<Option<Token>>) {
        match self {
            TokenTree::Token(token) => out.push(token),
            TokenTree::Group(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }
}

impl From<Token> for TokenTree {
    fn from(token: Token) -> Self {
        TokenTree::Token(Some(token))
    }
}

impl From<Option<Token>> for TokenTree {
    fn from(token: Option<Token>) -> Self {
        TokenTree::Token(token)
    }
}

impl<T: Into<TokenTree>> From<Vec<T>> for TokenTree {
    fn from(items: Vec<T>) -> Self {
        TokenTree::Group(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered, owned token buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Option<Token>>,
}

impl TokenStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a stream holding `tokens` as-is
    pub fn from_tokens(tokens: Vec<Option<Token>>) -> Self {
        Self { tokens }
    }

    /// Discard everything collected so far and start a fresh, empty sequence
    pub fn start_collecting(&mut self) {
        if !self.tokens.is_empty() {
            crate::log_debug!("Discarding collected tokens",
                "discarded" => self.tokens.len()
            );
        }
        self.tokens = Vec::new();
    }

    /// Append a token, an empty slot, or a nested group of them
    pub fn add(&mut self, tokens: impl Into<TokenTree>) {
        tokens.into().flatten_into(&mut self.tokens);
    }

    /// Append a single token
    pub fn add_token(&mut self, token: Token) {
        self.tokens.push(Some(token));
    }

    /// Append every item of `tokens` in order, flattening nested groups
    pub fn add_tokens<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<TokenTree>,
    {
        for item in tokens {
            self.add(item);
        }
    }

    /// Remove and return the last token.
    ///
    /// Returns `None` when the stream is empty or when the last slot was empty.
    pub fn pop_token(&mut self) -> Option<Token> {
        match self.tokens.pop() {
            Some(slot) => slot,
            None => {
                crate::log_debug!("pop_token called on empty token stream");
                None
            }
        }
    }

    /// Read-only view of the collected slots, empty slots included
    pub fn tokens(&self) -> &[Option<Token>] {
        &self.tokens
    }

    /// Iterate over present tokens only
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().flatten()
    }

    /// Concatenated text of every present token, no separator
    pub fn tokens_to_s(&self) -> String {
        self.iter().map(|token| token.text.as_str()).collect()
    }

    /// Number of slots, empty slots included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Last present token, if any
    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.iter().rev().flatten().next()
    }

    /// Give up ownership of the collected slots
    pub fn into_tokens(self) -> Vec<Option<Token>> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Option<Token>;
    type IntoIter = std::slice::Iter<'a, Option<Token>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Option<Token>> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Option<Token>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Some).collect(),
        }
    }
}

/// Builds a stream from (kind, text) pairs, tracking positions as it goes
#[derive(Debug)]
pub struct TokenStreamBuilder {
    stream: TokenStream,
    current_position: Position,
}

impl TokenStreamBuilder {
    /// Create a new builder starting at the beginning of the file
    pub fn new() -> Self {
        Self::starting_at(Position::start())
    }

    /// Create a builder whose first token sits at `position`
    pub fn starting_at(position: Position) -> Self {
        Self {
            stream: TokenStream::new(),
            current_position: position,
        }
    }

    /// Add a token with a computed position
    pub fn push(mut self, kind: TokenKind, text: &str) -> Self {
        let token = Token::new(kind, text).with_position(self.current_position);
        self.current_position = self.current_position.advance_str(text);
        self.stream.add_token(token);
        self
    }

    /// Add a fully formed token; its text still advances the position
    pub fn push_token(mut self, token: Token) -> Self {
        self.current_position = self.current_position.advance_str(&token.text);
        self.stream.add_token(token);
        self
    }

    /// Add an empty slot
    pub fn push_placeholder(mut self) -> Self {
        self.stream.add(None::<Token>);
        self
    }

    pub fn build(self) -> TokenStream {
        self.stream
    }
}

impl Default for TokenStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::LexState;

    fn ident(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text)
    }

    #[test]
    fn test_add_then_pop_leaves_prefix() {
        let (t1, t2, t3) = (ident("a"), ident("b"), ident("c"));
        let mut stream = TokenStream::new();
        stream.start_collecting();
        stream.add(t1.clone());
        stream.add(vec![t2.clone(), t3.clone()]);

        assert_eq!(stream.pop_token(), Some(t3));
        assert_eq!(stream.tokens(), &[Some(t1), Some(t2)]);
        assert_eq!(stream.tokens_to_s(), "ab");
    }

    #[test]
    fn test_pop_on_empty_returns_none() {
        let mut stream = TokenStream::new();
        assert_eq!(stream.pop_token(), None);
        assert!(stream.is_empty());
    }

    #[test]
    fn test_nested_groups_are_flattened_in_order() {
        let mut stream = TokenStream::new();
        stream.add(TokenTree::Group(vec![
            ident("a").into(),
            TokenTree::Group(vec![ident("b").into(), None::<Token>.into()]),
            vec![ident("c")].into(),
        ]));

        let texts: Vec<&str> = stream.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(stream.len(), 4);
        assert_eq!(stream.tokens()[2], None);
    }

    #[test]
    fn test_start_collecting_discards_previous_tokens() {
        let mut stream = TokenStream::new();
        stream.add_tokens([ident("x"), ident("y")]);
        stream.start_collecting();
        assert!(stream.is_empty());
        assert_eq!(stream.tokens_to_s(), "");
    }

    #[test]
    fn test_tokens_to_s_skips_empty_slots() {
        let stream: TokenStream = vec![
            Some(Token::new(TokenKind::Keyword, "def")),
            None,
            Some(Token::new(TokenKind::Other("on_sp".into()), " ")),
            Some(ident("foo")),
        ]
        .into_iter()
        .collect();

        assert_eq!(stream.tokens_to_s(), "def foo");
        assert_eq!(stream.last_token().map(|t| t.text.as_str()), Some("foo"));
    }

    #[test]
    fn test_pop_of_empty_slot_returns_none_and_shrinks() {
        let mut stream = TokenStream::new();
        stream.add(ident("a"));
        stream.add(None::<Token>);
        assert_eq!(stream.pop_token(), None);
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_builder_tracks_positions() {
        let stream = TokenStreamBuilder::new()
            .push(TokenKind::Keyword, "def")
            .push(TokenKind::Other("on_sp".into()), " ")
            .push(TokenKind::Identifier, "foo")
            .push(TokenKind::Other("on_nl".into()), "\n")
            .push_token(Token::operator("*", LexState::Argument))
            .push(TokenKind::Keyword, "end")
            .build();

        let positions: Vec<Position> = stream.iter().filter_map(|t| t.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 0),
                Position::new(1, 3),
                Position::new(1, 4),
                Position::new(1, 7),
                Position::new(2, 1),
            ]
        );
        assert_eq!(stream.tokens_to_s(), "def foo\n*end");
    }
}
