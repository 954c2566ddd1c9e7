//! The aggregation fold: one pass over a grouped mapping in ascending key
//! order, producing an immutable [`StatsRecord`].
//!
//! Ordering relation per category: numbers and currencies compare by parsed
//! numeric magnitude, dates by chronological instant. Text categories have
//! no value ordering: the minimum stays fixed at the first entry and the
//! maximum is overwritten by every entry, ending as the last entry in key
//! order. Length extrema use strict comparisons, so the first entry
//! encountered wins ties.

use super::record::StatsRecord;
use crate::analyze::{Category, GroupedMapping, GroupedObject};
use crate::locale::{DateStyle, FormatProvider};
use chrono::NaiveDate;

/// Re-parses a display text through the category's numeric grammar.
fn numeric_value(category: Category, provider: &FormatProvider, text: &str) -> Option<f64> {
    match category {
        Category::Numbers => provider.number().parse_at(text, 0).map(|(v, _)| v),
        Category::Currencies => provider.currency().parse_at(text, 0).map(|(v, _)| v),
        _ => None,
    }
}

/// Re-parses a display text through the first date style that matches.
fn date_value(provider: &FormatProvider, text: &str) -> Option<NaiveDate> {
    DateStyle::ALL
        .iter()
        .find_map(|style| provider.date(*style).parse_at(text, 0))
        .map(|(date, _)| date)
}

struct Acc {
    count: usize,
    sum_length: usize,
    min_value: String,
    max_value: String,
    shortest: String,
    shortest_len: usize,
    longest: String,
    longest_len: usize,
    min_instant: Option<NaiveDate>,
    max_instant: Option<NaiveDate>,
}

impl Acc {
    /// Initializes every tracker from the first entry. For the date
    /// category the chronological baseline is its parsed instant.
    fn first(
        object: &GroupedObject,
        length: usize,
        category: Category,
        provider: &FormatProvider,
    ) -> Self {
        let instant = if category == Category::Dates {
            date_value(provider, &object.display)
        } else {
            None
        };
        Self {
            count: object.count,
            sum_length: object.count * length,
            min_value: object.display.clone(),
            max_value: object.display.clone(),
            shortest: object.display.clone(),
            shortest_len: length,
            longest: object.display.clone(),
            longest_len: length,
            min_instant: instant,
            max_instant: instant,
        }
    }
}

/// Aggregates one grouped mapping into a statistics record.
///
/// A value that fails to re-parse under its own grammar is skipped for the
/// value extrema but still counted and length-measured.
pub fn aggregate(
    mapping: &GroupedMapping,
    category: Category,
    provider: &FormatProvider,
) -> StatsRecord {
    let mut acc: Option<Acc> = None;

    for object in mapping.values() {
        let display = &object.display;
        let length = display.chars().count();

        match acc.as_mut() {
            None => {
                acc = Some(Acc::first(object, length, category, provider));
            }
            Some(state) => {
                match category {
                    Category::Numbers | Category::Currencies => {
                        if let (Some(candidate), Some(current_min)) = (
                            numeric_value(category, provider, display),
                            numeric_value(category, provider, &state.min_value),
                        ) {
                            if candidate < current_min {
                                state.min_value = display.clone();
                            }
                            if let Some(current_max) =
                                numeric_value(category, provider, &state.max_value)
                            {
                                if candidate > current_max {
                                    state.max_value = display.clone();
                                }
                            }
                        }
                    }
                    Category::Dates => {
                        if let (Some(candidate), Some(min_instant), Some(max_instant)) =
                            (date_value(provider, display), state.min_instant, state.max_instant)
                        {
                            if candidate < min_instant {
                                state.min_value = display.clone();
                                state.min_instant = Some(candidate);
                            } else if candidate > max_instant {
                                // A value that just replaced the minimum is
                                // never tested against the maximum.
                                state.max_value = display.clone();
                                state.max_instant = Some(candidate);
                            }
                        }
                    }
                    Category::Sentences | Category::Lines | Category::Words => {
                        // No value ordering: max tracks the last entry seen.
                        state.max_value = display.clone();
                    }
                }

                if length < state.shortest_len {
                    state.shortest = display.clone();
                    state.shortest_len = length;
                }
                if length > state.longest_len {
                    state.longest = display.clone();
                    state.longest_len = length;
                }
                state.count += object.count;
                state.sum_length += object.count * length;
            }
        }
    }

    match acc {
        None => StatsRecord {
            unique: mapping.len(),
            ..StatsRecord::default()
        },
        Some(state) => StatsRecord {
            count: state.count,
            unique: mapping.len(),
            min_value: Some(state.min_value),
            max_value: Some(state.max_value),
            sum_length: state.sum_length,
            shortest_value: Some(state.shortest),
            longest_value: Some(state.longest),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::Analysis;
    use crate::locale::Locale;

    fn en() -> FormatProvider {
        FormatProvider::new(Locale::parse("en_US").unwrap())
    }

    fn stats(text: &str, category: Category) -> StatsRecord {
        let provider = en();
        let analysis = Analysis::of_text(text, &provider);
        aggregate(analysis.mapping(category), category, &provider)
    }

    #[test]
    fn test_numbers_extrema_by_magnitude() {
        let record = stats("A 1. 456. I want 1, 2 or 3.", Category::Numbers);
        assert_eq!(record.count, 5);
        assert_eq!(record.unique, 4);
        assert_eq!(record.min_value.as_deref(), Some("1"));
        assert_eq!(record.max_value.as_deref(), Some("456"));
        assert_eq!(record.sum_length, 7);
        assert_eq!(record.shortest_value.as_deref(), Some("1"));
        assert_eq!(record.longest_value.as_deref(), Some("456"));
    }

    #[test]
    fn test_currencies_keep_literal_text() {
        let record = stats(
            "Give me $10 or 10 € pls.\nThen $111 and $111, go go go.",
            Category::Currencies,
        );
        assert_eq!(record.count, 3);
        assert_eq!(record.unique, 2);
        assert_eq!(record.min_value.as_deref(), Some("$10"));
        assert_eq!(record.max_value.as_deref(), Some("$111"));
        assert_eq!(record.sum_length, 11);
    }

    #[test]
    fn test_dates_chronological() {
        let record = stats(
            "On Monday, May 25, 2020. On May 19, 2019 or 5/25/21",
            Category::Dates,
        );
        assert_eq!(record.count, 3);
        assert_eq!(record.unique, 3);
        assert_eq!(record.min_value.as_deref(), Some("May 19, 2019"));
        assert_eq!(record.max_value.as_deref(), Some("5/25/21"));
        assert_eq!(record.sum_length, 39);
    }

    #[test]
    fn test_text_min_first_max_last() {
        // Key order is ["one", "to"]: min stays at the first entry, max
        // ends at the last one.
        let record = stats("One to one.\nOne to one.", Category::Words);
        assert_eq!(record.count, 6);
        assert_eq!(record.unique, 2);
        assert_eq!(record.min_value.as_deref(), Some("One"));
        assert_eq!(record.max_value.as_deref(), Some("to"));
        assert_eq!(record.shortest_value.as_deref(), Some("to"));
        assert_eq!(record.longest_value.as_deref(), Some("One"));
    }

    #[test]
    fn test_length_ties_keep_first() {
        // "ab" and "cd" have equal length; the first entry in key order
        // holds both length extrema.
        let record = stats("ab cd", Category::Words);
        assert_eq!(record.shortest_value.as_deref(), Some("ab"));
        assert_eq!(record.longest_value.as_deref(), Some("ab"));
    }

    #[test]
    fn test_empty_category() {
        let record = stats("no digits here", Category::Numbers);
        assert_eq!(record.count, 0);
        assert_eq!(record.unique, 0);
        assert_eq!(record.sum_length, 0);
        assert_eq!(record.min_value, None);
        assert_eq!(record.max_value, None);
        assert_eq!(record.shortest_value, None);
        assert_eq!(record.longest_value, None);
    }

    #[test]
    fn test_single_entry_holds_all_extrema() {
        let record = stats("only 7 here", Category::Numbers);
        assert_eq!(record.count, 1);
        assert_eq!(record.min_value.as_deref(), Some("7"));
        assert_eq!(record.max_value.as_deref(), Some("7"));
        assert_eq!(record.shortest_value.as_deref(), Some("7"));
        assert_eq!(record.longest_value.as_deref(), Some("7"));
    }

    #[test]
    fn test_sum_length_counts_occurrences() {
        // "Hi" occurs four times as one distinct value.
        let record = stats("Hi. Hi, hi, hi.", Category::Words);
        assert_eq!(record.count, 4);
        assert_eq!(record.unique, 1);
        assert_eq!(record.sum_length, 8);
        assert_eq!(record.mean_length(), Some(2.0));
    }
}
