//! Token stream to HTML rendering
//!
//! Each token becomes either its escaped text or
//! `<span class="ruby-TAG">escaped text</span>`; the pieces are concatenated
//! without separators. Comments, embedded docs and heredoc terminators lose
//! their trailing whitespace, and a final newline is re-emitted after the
//! closing tag so the span never straddles a line break.

use super::escape::push_escaped;
use super::style::{classify, StyleTable};
use crate::tokens::Token;

/// Stateless HTML renderer over a fixed style table
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    styles: StyleTable,
}

/// Counters from one rendering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub styled: usize,
    pub unstyled: usize,
    pub skipped: usize,
}

impl Renderer {
    pub fn new(styles: StyleTable) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Render a token sequence; empty slots produce nothing
    pub fn render<'a, I>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = &'a Option<Token>>,
    {
        self.render_with_stats(tokens).0
    }

    /// Render and report how many tokens were styled, unstyled or skipped
    pub fn render_with_stats<'a, I>(&self, tokens: I) -> (String, RenderStats)
    where
        I: IntoIterator<Item = &'a Option<Token>>,
    {
        let mut html = String::new();
        let mut stats = RenderStats::default();

        for slot in tokens {
            let Some(token) = slot else {
                stats.skipped += 1;
                continue;
            };

            if self.render_token(token, &mut html) {
                stats.styled += 1;
            } else {
                stats.unstyled += 1;
            }
        }

        crate::log_debug!("Rendered token stream",
            "styled" => stats.styled,
            "unstyled" => stats.unstyled,
            "skipped" => stats.skipped,
            "html_bytes" => html.len()
        );

        (html, stats)
    }

    /// Append the markup for one token to `out`. Returns whether it was styled.
    pub fn render_token(&self, token: &Token, out: &mut String) -> bool {
        let Some(tag) = classify(token) else {
            push_escaped(out, &token.text);
            return false;
        };

        let (text, trailing_newline) = if token.kind.defers_newline() {
            (token.text.trim_end(), token.text.ends_with('\n'))
        } else {
            (token.text.as_str(), false)
        };

        out.push_str("<span class=\"");
        out.push_str(&self.styles.class_name(tag));
        out.push_str("\">");
        push_escaped(out, text);
        out.push_str("</span>");
        if trailing_newline {
            out.push('\n');
        }
        true
    }
}

/// Render with the stock `ruby-` class names
pub fn to_html<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Option<Token>>,
{
    Renderer::default().render(tokens)
}
