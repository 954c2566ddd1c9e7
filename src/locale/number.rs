//! Number and currency-amount grammars.
//!
//! Both grammars parse a prefix of the text starting exactly at a given byte
//! position and report the parsed value together with the position past the
//! consumed characters. A failed attempt consumes nothing.
//!
//! Grouping is strict: a group separator is consumed only when followed by
//! exactly three digits, which keeps parsing consistent with the canonical
//! formatter output.

use super::data::LocaleData;

/// Byte length of the leading ASCII digit run of `s`.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Plain-number grammar for one locale.
#[derive(Debug, Clone, Copy)]
pub struct NumberGrammar {
    data: &'static LocaleData,
}

impl NumberGrammar {
    pub(super) fn new(data: &'static LocaleData) -> Self {
        Self { data }
    }

    /// Attempts to parse a number starting exactly at byte `pos`.
    ///
    /// On success returns the value and the byte position past the match.
    /// `pos` must lie on a character boundary.
    pub fn parse_at(&self, text: &str, pos: usize) -> Option<(f64, usize)> {
        let rest = &text[pos..];
        let mut i = 0;
        let mut canonical = String::new();

        if rest.starts_with(self.data.minus_sign) {
            let sign_len = self.data.minus_sign.len_utf8();
            if digit_run(&rest[sign_len..]) > 0 {
                canonical.push('-');
                i += sign_len;
            }
        }

        let head = digit_run(&rest[i..]);
        if head == 0 {
            return None;
        }
        canonical.push_str(&rest[i..i + head]);
        i += head;

        let sep_len = self.data.group_sep.len_utf8();
        while rest[i..].starts_with(self.data.group_sep)
            && digit_run(&rest[i + sep_len..]) == 3
        {
            canonical.push_str(&rest[i + sep_len..i + sep_len + 3]);
            i += sep_len + 3;
        }

        if rest[i..].starts_with(self.data.decimal_sep) {
            let dec_len = self.data.decimal_sep.len_utf8();
            let frac = digit_run(&rest[i + dec_len..]);
            if frac > 0 {
                canonical.push('.');
                canonical.push_str(&rest[i + dec_len..i + dec_len + frac]);
                i += dec_len + frac;
            }
        }

        let value = canonical.parse::<f64>().ok()?;
        Some((value, pos + i))
    }

    /// Renders a value back to canonical locale text: grouped integer part,
    /// at most three fraction digits, trailing zeros trimmed.
    pub fn format(&self, value: f64) -> String {
        let negative = value < 0.0;
        let magnitude = value.abs();
        if !magnitude.is_finite() || magnitude >= 1e15 {
            return format!("{value}");
        }

        let scaled = (magnitude * 1000.0).round() as u64;
        let int_part = scaled / 1000;
        let frac_part = scaled % 1000;

        let mut out = String::new();
        if negative {
            out.push(self.data.minus_sign);
        }

        let digits = int_part.to_string();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.data.group_sep);
            }
            out.push(ch);
        }

        if frac_part > 0 {
            let mut frac = format!("{frac_part:03}");
            while frac.ends_with('0') {
                frac.pop();
            }
            out.push(self.data.decimal_sep);
            out.push_str(&frac);
        }
        out
    }
}

/// Currency-amount grammar for one locale.
///
/// An amount is the locale's currency symbol and a plain number, in the
/// locale's order; suffix locales allow one space (regular or no-break)
/// between the amount and the symbol.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyGrammar {
    data: &'static LocaleData,
}

impl CurrencyGrammar {
    pub(super) fn new(data: &'static LocaleData) -> Self {
        Self { data }
    }

    /// Attempts to parse a currency amount starting exactly at byte `pos`.
    pub fn parse_at(&self, text: &str, pos: usize) -> Option<(f64, usize)> {
        let number = NumberGrammar::new(self.data);
        let symbol = self.data.currency_symbol.as_str();

        if self.data.currency_prefix {
            if !text[pos..].starts_with(symbol) {
                return None;
            }
            number.parse_at(text, pos + symbol.len())
        } else {
            let (value, end) = number.parse_at(text, pos)?;
            let gap = text[end..]
                .chars()
                .next()
                .filter(|c| *c == ' ' || *c == '\u{a0}')
                .map_or(0, char::len_utf8);
            if !text[end + gap..].starts_with(symbol) {
                return None;
            }
            Some((value, end + gap + symbol.len()))
        }
    }
}
