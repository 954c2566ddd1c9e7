//! Category extraction: building the six grouped mappings for a document.

use super::grouping::{fold_span, GroupedMapping};
use super::normalize::Normalizer;
use super::tokenizer::{ComplexTokenizer, TokenKind};
use crate::locale::FormatProvider;
use log::debug;
use serde::{Deserialize, Serialize};

/// The six object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sentences from boundary segmentation.
    Sentences,
    /// Input lines as read.
    Lines,
    /// Words from boundary segmentation.
    Words,
    /// Plain numbers from the complex tokenizer.
    Numbers,
    /// Currency amounts from the complex tokenizer.
    Currencies,
    /// Dates from the complex tokenizer.
    Dates,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Sentences,
        Category::Lines,
        Category::Words,
        Category::Numbers,
        Category::Currencies,
        Category::Dates,
    ];

    /// Stable lowercase name, used for label lookup.
    pub fn name(self) -> &'static str {
        match self {
            Category::Sentences => "sentences",
            Category::Lines => "lines",
            Category::Words => "words",
            Category::Numbers => "numbers",
            Category::Currencies => "currencies",
            Category::Dates => "dates",
        }
    }

    fn index(self) -> usize {
        match self {
            Category::Sentences => 0,
            Category::Lines => 1,
            Category::Words => 2,
            Category::Numbers => 3,
            Category::Currencies => 4,
            Category::Dates => 5,
        }
    }
}

/// The grouped mappings of one analyzed document, one per category.
///
/// Produced once by [`Analysis::of_lines`] and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Analysis {
    mappings: [GroupedMapping; 6],
}

impl Analysis {
    /// Analyzes a document given as its lines (without line terminators).
    ///
    /// Lines are one category directly; sentence and word segmentation and
    /// the complex tokenizer run over the lines joined with a single space
    /// after each.
    pub fn of_lines(lines: &[String], provider: &FormatProvider) -> Self {
        let normalizer = Normalizer::new(provider.locale());

        let mut lines_map = GroupedMapping::new();
        let mut joined = String::new();
        for line in lines {
            fold_span(&mut lines_map, &normalizer, line);
            joined.push_str(line);
            joined.push(' ');
        }

        let mut sentences = GroupedMapping::new();
        for span in provider.sentences(&joined) {
            fold_span(&mut sentences, &normalizer, span);
        }

        let mut words = GroupedMapping::new();
        for span in provider.words(&joined) {
            fold_span(&mut words, &normalizer, span);
        }

        let mut numbers = GroupedMapping::new();
        let mut currencies = GroupedMapping::new();
        let mut dates = GroupedMapping::new();
        for token in ComplexTokenizer::new(provider).scan(&joined) {
            let mapping = match token.kind {
                TokenKind::Number => &mut numbers,
                TokenKind::Currency => &mut currencies,
                TokenKind::Date => &mut dates,
            };
            fold_span(mapping, &normalizer, &token.text);
        }

        let analysis = Self {
            mappings: [sentences, lines_map, words, numbers, currencies, dates],
        };
        for category in Category::ALL {
            debug!(
                "{}: {} occurrences, {} distinct",
                category.name(),
                analysis.total_count(category),
                analysis.mapping(category).len()
            );
        }
        analysis
    }

    /// Analyzes a document given as one string; lines are split as read.
    pub fn of_text(text: &str, provider: &FormatProvider) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        Self::of_lines(&lines, provider)
    }

    /// The grouped mapping of one category.
    pub fn mapping(&self, category: Category) -> &GroupedMapping {
        &self.mappings[category.index()]
    }

    /// Total occurrence count of one category.
    pub fn total_count(&self, category: Category) -> usize {
        self.mapping(category).values().map(|o| o.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn analyze(text: &str) -> Analysis {
        let provider = FormatProvider::new(Locale::parse("en_US").unwrap());
        Analysis::of_text(text, &provider)
    }

    #[test]
    fn test_lines_as_read() {
        let analysis = analyze("Hi.\nHi.\nBye.");
        let lines = analysis.mapping(Category::Lines);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines["hi."].count, 2);
        assert_eq!(lines["bye."].count, 1);
    }

    #[test]
    fn test_words_fold_by_case() {
        let analysis = analyze("Hi. Hi, hi, hi.");
        let words = analysis.mapping(Category::Words);
        assert_eq!(words.len(), 1);
        assert_eq!(words["hi"].count, 4);
        assert_eq!(words["hi"].display, "Hi");
    }

    #[test]
    fn test_sentences_span_joined_lines() {
        // A sentence broken across a line boundary is still one sentence.
        let analysis = analyze("One to\none.");
        let sentences = analysis.mapping(Category::Sentences);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences["one to one."].display, "One to one.");
    }

    #[test]
    fn test_tokenizer_categories() {
        let analysis = analyze("Pay $10 on May 19, 2019 or 3 times.");
        assert_eq!(analysis.total_count(Category::Currencies), 1);
        assert_eq!(analysis.total_count(Category::Dates), 1);
        assert_eq!(analysis.total_count(Category::Numbers), 1);
    }

    #[test]
    fn test_empty_document() {
        let analysis = analyze("");
        for category in Category::ALL {
            assert_eq!(analysis.total_count(category), 0);
            assert!(analysis.mapping(category).is_empty());
        }
    }
}
