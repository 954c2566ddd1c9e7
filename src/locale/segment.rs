//! Sentence and word boundary segmentation.
//!
//! Boundaries follow the UAX #29 default rules. Spans cover the whole input:
//! word segmentation also yields punctuation and whitespace runs, which the
//! object normalizer filters out downstream.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentence spans, boundary to boundary.
pub(super) fn sentences(text: &str) -> Vec<&str> {
    text.split_sentence_bounds().collect()
}

/// Splits text into word-boundary spans, boundary to boundary.
pub(super) fn words(text: &str) -> Vec<&str> {
    text.split_word_bounds().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_cover_text() {
        let text = "Hi. Hi. Hi. Hi. ";
        let spans = sentences(text);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans.concat(), text);
    }

    #[test]
    fn test_words_include_punctuation_runs() {
        let spans = words("Hi. Hi, hi, hi.");
        assert!(spans.contains(&"Hi"));
        assert!(spans.contains(&"."));
        let letters: Vec<&&str> = spans
            .iter()
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .collect();
        assert_eq!(letters.len(), 4);
    }

    #[test]
    fn test_spans_are_contiguous() {
        let text = "One to one. One to one.";
        assert_eq!(words(text).concat(), text);
    }
}
