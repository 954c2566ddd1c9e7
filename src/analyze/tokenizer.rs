//! The complex tokenizer: a single cursor scan that recognizes dates,
//! currency amounts and plain numbers.
//!
//! At each position the grammars are tried in a fixed priority order: the
//! four date styles from most to least specific, then currency, then plain
//! number. Dates go before numbers so that date components are not captured
//! as standalone numbers; currency goes before number so that an amount like
//! `$10` is not split into symbol and number. The first success claims the
//! span and moves the cursor past it; if every grammar fails the cursor
//! advances by exactly one character. Claimed spans can therefore never
//! overlap, and a successful parse always consumes at least one character.

use crate::locale::{DateStyle, FormatProvider};

/// The kind of a recognized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain number.
    Number,
    /// Currency amount.
    Currency,
    /// Calendar date.
    Date,
}

/// A recognized token with its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the span was recognized as.
    pub kind: TokenKind,
    /// Start byte offset in the source text.
    pub start: usize,
    /// End byte offset (exclusive) in the source text.
    pub end: usize,
    /// The token text used for grouping: canonical re-rendered form for
    /// dates and numbers, the literal matched substring for currencies.
    pub text: String,
}

/// Scans a document for numbers, currency amounts and dates.
#[derive(Debug, Clone)]
pub struct ComplexTokenizer<'a> {
    provider: &'a FormatProvider,
}

impl<'a> ComplexTokenizer<'a> {
    /// Creates a tokenizer over the given locale's grammars.
    pub fn new(provider: &'a FormatProvider) -> Self {
        Self { provider }
    }

    /// Scans the whole text and returns the recognized tokens in source
    /// order.
    pub fn scan(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            if let Some(token) = self.match_at(text, pos) {
                pos = token.end;
                tokens.push(token);
            } else {
                // No grammar matched here; advance one character and retry.
                pos += text[pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
            }
        }
        tokens
    }

    /// Tries every grammar at `pos` in priority order.
    fn match_at(&self, text: &str, pos: usize) -> Option<Token> {
        for style in DateStyle::ALL {
            let grammar = self.provider.date(style);
            if let Some((date, end)) = grammar.parse_at(text, pos) {
                return Some(Token {
                    kind: TokenKind::Date,
                    start: pos,
                    end,
                    text: grammar.format(date),
                });
            }
        }
        if let Some((_, end)) = self.provider.currency().parse_at(text, pos) {
            return Some(Token {
                kind: TokenKind::Currency,
                start: pos,
                end,
                // Literal substring: textual variants of equal amounts are
                // deliberately not merged.
                text: text[pos..end].to_string(),
            });
        }
        if let Some((value, end)) = self.provider.number().parse_at(text, pos) {
            return Some(Token {
                kind: TokenKind::Number,
                start: pos,
                end,
                text: self.provider.number().format(value),
            });
        }
        None
    }
}
