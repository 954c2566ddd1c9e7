//! Locale resolution and locale-specific format grammars.
//!
//! A [`Locale`] is resolved from a `language[_COUNTRY[_VARIANT]]` string.
//! A [`FormatProvider`] bundles everything the analysis pipeline needs for
//! one locale: number, currency and date grammars, canonical formatters,
//! and sentence/word boundary segmentation.

mod data;
mod date;
mod number;
mod segment;

pub use data::{DateField, LocaleData};
pub use date::{DateGrammar, DateStyle};
pub use number::{CurrencyGrammar, NumberGrammar};

use crate::error::{Result, TextStatError};
use serde::{Deserialize, Serialize};

/// A locale identifier: language plus optional country and variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// ISO 639 language code, e.g. `en`.
    pub language: String,
    /// ISO 3166 country code, e.g. `US`. Empty when absent.
    pub country: String,
    /// Locale variant. Empty when absent.
    pub variant: String,
}

impl Locale {
    /// Parses a locale string of the form `language[_COUNTRY[_VARIANT]]`.
    ///
    /// # Errors
    /// Returns [`TextStatError::UnrecognizedLocale`] if the string has no
    /// language part or more than three components.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() > 3 || parts[0].is_empty() {
            return Err(TextStatError::UnrecognizedLocale(s.to_string()));
        }
        Ok(Self {
            language: parts[0].to_string(),
            country: parts.get(1).copied().unwrap_or("").to_string(),
            variant: parts.get(2).copied().unwrap_or("").to_string(),
        })
    }

    /// Returns the canonical `language[_COUNTRY[_VARIANT]]` identifier.
    pub fn id(&self) -> String {
        let mut id = self.language.clone();
        if !self.country.is_empty() {
            id.push('_');
            id.push_str(&self.country);
        }
        if !self.variant.is_empty() {
            id.push('_');
            id.push_str(&self.variant);
        }
        id
    }
}

/// Format grammars and boundary segmentation for one locale.
///
/// Built-in format data exists for `en_US`, `ru_RU` and `de_DE`. Other
/// locales resolve by language and otherwise fall back to `en_US` data,
/// mirroring the root-locale fallback of platform locale registries.
#[derive(Debug, Clone)]
pub struct FormatProvider {
    locale: Locale,
    data: &'static LocaleData,
}

impl FormatProvider {
    /// Creates a provider for the given locale.
    pub fn new(locale: Locale) -> Self {
        let data = data::lookup(&locale);
        Self { locale, data }
    }

    /// The locale this provider was created for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The format data backing this provider.
    pub fn data(&self) -> &'static LocaleData {
        self.data
    }

    /// The plain-number grammar for this locale.
    pub fn number(&self) -> NumberGrammar {
        NumberGrammar::new(self.data)
    }

    /// The currency-amount grammar for this locale.
    pub fn currency(&self) -> CurrencyGrammar {
        CurrencyGrammar::new(self.data)
    }

    /// The date grammar for one of the four styles.
    pub fn date(&self, style: DateStyle) -> DateGrammar {
        DateGrammar::new(self.data, style)
    }

    /// Segments text into sentence spans.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        segment::sentences(text)
    }

    /// Segments text into word-boundary spans.
    ///
    /// The returned spans include punctuation and whitespace runs; callers
    /// filter them through the object normalizer.
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        segment::words(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("en").unwrap();
        assert_eq!(locale.language, "en");
        assert_eq!(locale.country, "");
        assert_eq!(locale.id(), "en");
    }

    #[test]
    fn test_parse_language_country() {
        let locale = Locale::parse("ru_RU").unwrap();
        assert_eq!(locale.language, "ru");
        assert_eq!(locale.country, "RU");
        assert_eq!(locale.id(), "ru_RU");
    }

    #[test]
    fn test_parse_with_variant() {
        let locale = Locale::parse("no_NO_NY").unwrap();
        assert_eq!(locale.variant, "NY");
        assert_eq!(locale.id(), "no_NO_NY");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("a_b_c_d").is_err());
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let provider = FormatProvider::new(Locale::parse("xx_YY").unwrap());
        assert_eq!(provider.data().language, "en");
    }

    #[test]
    fn test_language_level_fallback() {
        // "de" without a country still resolves to the German tables.
        let provider = FormatProvider::new(Locale::parse("de").unwrap());
        assert_eq!(provider.data().language, "de");
    }
}
