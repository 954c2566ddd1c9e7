//! Object normalization: turning a raw span into a grouping key and a
//! display form.

use crate::locale::Locale;

/// Normalizes raw spans into `(key, display)` pairs.
///
/// The display form is the trimmed span with its original case; the key is
/// its locale-folded lowercase, used only to merge occurrences that differ
/// by letter case.
#[derive(Debug, Clone)]
pub struct Normalizer {
    turkic: bool,
}

impl Normalizer {
    /// Creates a normalizer for the given locale.
    pub fn new(locale: &Locale) -> Self {
        Self {
            turkic: locale.language == "tr" || locale.language == "az",
        }
    }

    /// Normalizes a raw span.
    ///
    /// Returns `None` for spans that are empty after trimming or consist of
    /// exactly one character that is neither a letter nor a digit.
    pub fn normalize(&self, span: &str) -> Option<(String, String)> {
        let trimmed = span.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if chars.next().is_none() && !first.is_alphanumeric() {
            return None;
        }
        Some((self.fold(trimmed), trimmed.to_string()))
    }

    /// Locale-aware lowercasing. Turkic locales map the dotted and dotless
    /// capital I differently from the default algorithm.
    fn fold(&self, s: &str) -> String {
        if !self.turkic {
            return s.to_lowercase();
        }
        s.chars()
            .flat_map(|c| {
                match c {
                    'I' => vec!['ı'],
                    'İ' => vec!['i'],
                    other => other.to_lowercase().collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(id: &str) -> Normalizer {
        Normalizer::new(&Locale::parse(id).unwrap())
    }

    #[test]
    fn test_trims_and_folds() {
        let n = normalizer("en_US");
        assert_eq!(
            n.normalize("  Hi. "),
            Some(("hi.".to_string(), "Hi.".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let n = normalizer("en_US");
        assert_eq!(n.normalize(""), None);
        assert_eq!(n.normalize("   "), None);
    }

    #[test]
    fn test_rejects_lone_punctuation() {
        let n = normalizer("en_US");
        assert_eq!(n.normalize("."), None);
        assert_eq!(n.normalize(","), None);
        // A lone letter or digit is kept.
        assert!(n.normalize("a").is_some());
        assert!(n.normalize("5").is_some());
    }

    #[test]
    fn test_multi_char_punctuation_kept() {
        // Only single non-alphanumeric characters are rejected.
        let n = normalizer("en_US");
        assert!(n.normalize("...").is_some());
    }

    #[test]
    fn test_cyrillic_fold() {
        let n = normalizer("ru_RU");
        assert_eq!(
            n.normalize("Привет"),
            Some(("привет".to_string(), "Привет".to_string()))
        );
    }

    #[test]
    fn test_turkic_dotless_i() {
        let n = normalizer("tr_TR");
        assert_eq!(n.normalize("I").unwrap().0, "ı");
        assert_eq!(n.normalize("İs").unwrap().0, "is");
    }
}
