//! Property-based tests for rendering
//!
//! Token kinds are drawn from the styled Ripper events plus a handful the
//! renderer leaves unstyled; text mixes HTML-reserved characters, spaces and
//! newlines.

use proptest::prelude::*;
use ruby_markup::markup::escape_html;
use ruby_markup::{to_html, LexState, Token, TokenKind, TokenStream};

const KIND_NAMES: &[&str] = &[
    "on_const",
    "on_kw",
    "on_ivar",
    "on_cvar",
    "on_gvar",
    "on_op",
    "on_tlambda",
    "on_ident",
    "on_label",
    "on_backref",
    "on_dstring",
    "on_comment",
    "on_embdoc",
    "on_regexp",
    "on_tstring",
    "on_int",
    "on_float",
    "on_rational",
    "on_imaginary",
    "on_heredoc",
    "on_symbol",
    "on_CHAR",
    "on_heredoc_beg",
    "on_heredoc_end",
    // Unstyled
    "on_sp",
    "on_nl",
    "on_lparen",
    "on_tstring_beg",
    "on_semicolon",
];

fn kind_strategy() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(KIND_NAMES).prop_map(TokenKind::from_ripper)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_=]{0,8}",
        "[a-z<>&\"' =]{1,12}",
        "[a-z <>&]{0,8}\n",
    ]
}

fn state_strategy() -> impl Strategy<Value = Option<LexState>> {
    prop_oneof![
        Just(None),
        Just(Some(LexState::Argument)),
        Just(Some(LexState::Other)),
    ]
}

fn token_strategy() -> impl Strategy<Value = Token> {
    (kind_strategy(), text_strategy(), state_strategy()).prop_map(|(kind, text, state)| {
        let token = Token::new(kind, text);
        match state {
            Some(state) => token.with_state(state),
            None => token,
        }
    })
}

fn slots_strategy() -> impl Strategy<Value = Vec<Option<Token>>> {
    prop::collection::vec(prop::option::of(token_strategy()), 0..24)
}

/// Text between the opening and closing tag, or the whole output when unstyled
fn inner_text(html: &str) -> &str {
    let html = html.strip_suffix('\n').unwrap_or(html);
    match html
        .strip_prefix("<span class=\"")
        .and_then(|rest| rest.split_once("\">"))
    {
        Some((_, body)) => body.strip_suffix("</span>").unwrap_or(body),
        None => html,
    }
}

proptest! {
    #[test]
    fn test_absent_slots_are_skipped(slots in slots_strategy()) {
        let present: Vec<Option<Token>> = slots.iter().filter(|slot| slot.is_some()).cloned().collect();
        prop_assert_eq!(to_html(&slots), to_html(&present));
    }

    #[test]
    fn test_reserved_characters_are_escaped(token in token_strategy()) {
        let html = to_html(&vec![Some(token.clone())]);
        let inner = inner_text(&html);

        for reserved in ['<', '>', '"', '\''] {
            prop_assert!(!inner.contains(reserved), "raw {:?} in {:?}", reserved, html);
        }
        prop_assert!(inner.starts_with(escape_html(token.text.trim_end()).as_ref()));
    }

    #[test]
    fn test_rendering_is_concatenation(slots in slots_strategy()) {
        let pieces: String = slots
            .iter()
            .map(|slot| to_html(std::slice::from_ref(slot)))
            .collect();
        prop_assert_eq!(to_html(&slots), pieces);
    }

    #[test]
    fn test_text_survives_collection(slots in slots_strategy()) {
        let expected: String = slots.iter().flatten().map(|token| token.text.as_str()).collect();
        let stream: TokenStream = slots.into_iter().collect();
        prop_assert_eq!(stream.tokens_to_s(), expected);
    }

    #[test]
    fn test_bare_equals_never_styled(state in state_strategy()) {
        let token = Token::new(TokenKind::Operator, "=");
        let token = match state {
            Some(state) => token.with_state(state),
            None => token,
        };
        prop_assert_eq!(to_html(&vec![Some(token)]), "=");
    }
}
