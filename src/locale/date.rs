//! Date grammars for the four locale date styles.
//!
//! A grammar walks its locale pattern left to right, consuming name fields,
//! digit runs and literal fragments. Parsing is a prefix match: success
//! reports the date and the byte position past the consumed text, failure
//! consumes nothing. The parsed fields must form a real calendar date.

use super::data::{DateField, LocaleData};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The four date styles, ordered from most to least specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateStyle {
    /// Weekday and full month name, e.g. `Monday, May 25, 2020`.
    Full,
    /// Full month name, e.g. `May 25, 2020`.
    Long,
    /// Abbreviated month name, e.g. `May 25, 2020` (en) / `25 мая 2020 г.` (ru).
    Medium,
    /// All-numeric, e.g. `5/25/20`.
    Short,
}

impl DateStyle {
    /// All styles in parse priority order.
    pub const ALL: [DateStyle; 4] = [
        DateStyle::Full,
        DateStyle::Long,
        DateStyle::Medium,
        DateStyle::Short,
    ];

    fn index(self) -> usize {
        match self {
            DateStyle::Full => 0,
            DateStyle::Long => 1,
            DateStyle::Medium => 2,
            DateStyle::Short => 3,
        }
    }
}

/// Date grammar for one locale and style.
#[derive(Debug, Clone, Copy)]
pub struct DateGrammar {
    data: &'static LocaleData,
    style: DateStyle,
}

/// Matches the longest name from `table` at the start of `s`, returning the
/// table index and the matched byte length.
fn match_name(table: &[String], s: &str) -> Option<(usize, usize)> {
    table
        .iter()
        .enumerate()
        .filter(|(_, name)| s.starts_with(name.as_str()))
        .max_by_key(|(_, name)| name.len())
        .map(|(i, name)| (i, name.len()))
}

/// Reads a run of one to four ASCII digits, returning the value and the run
/// byte length. Longer runs do not form a date component.
fn read_digits(s: &str) -> Option<(u32, usize)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || len > 4 {
        return None;
    }
    s[..len].parse::<u32>().ok().map(|v| (v, len))
}

impl DateGrammar {
    pub(super) fn new(data: &'static LocaleData, style: DateStyle) -> Self {
        Self { data, style }
    }

    fn pattern(&self) -> &'static [DateField] {
        &self.data.date_patterns[self.style.index()]
    }

    /// Attempts to parse a date starting exactly at byte `pos`.
    pub fn parse_at(&self, text: &str, pos: usize) -> Option<(NaiveDate, usize)> {
        let mut cur = pos;
        let mut day = None;
        let mut month = None;
        let mut year: Option<i32> = None;

        for field in self.pattern() {
            let rest = &text[cur..];
            match field {
                DateField::Lit(fragment) => {
                    if !rest.starts_with(fragment.as_str()) {
                        return None;
                    }
                    cur += fragment.len();
                }
                DateField::WeekdayWide => {
                    let (_, len) = match_name(&self.data.weekdays_wide, rest)?;
                    cur += len;
                }
                DateField::MonthWide => {
                    let (idx, len) = match_name(&self.data.months_wide, rest)?;
                    month = Some(idx as u32 + 1);
                    cur += len;
                }
                DateField::MonthAbbrev => {
                    let (idx, len) = match_name(&self.data.months_abbrev, rest)?;
                    month = Some(idx as u32 + 1);
                    cur += len;
                }
                DateField::MonthNum | DateField::MonthTwo => {
                    let (value, len) = read_digits(rest)?;
                    month = Some(value);
                    cur += len;
                }
                DateField::DayNum | DateField::DayTwo => {
                    let (value, len) = read_digits(rest)?;
                    day = Some(value);
                    cur += len;
                }
                DateField::YearFull => {
                    let (value, len) = read_digits(rest)?;
                    year = Some(value as i32);
                    cur += len;
                }
                DateField::YearTwo => {
                    let (value, len) = read_digits(rest)?;
                    // Two-digit years pivot on a fixed window; other run
                    // lengths are literal years.
                    let resolved = if len == 2 {
                        if value <= 68 { 2000 + value } else { 1900 + value }
                    } else {
                        value
                    };
                    year = Some(resolved as i32);
                    cur += len;
                }
            }
        }

        let date = NaiveDate::from_ymd_opt(year?, month?, day?)?;
        Some((date, cur))
    }

    /// Renders a date back to canonical text for this style.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        for field in self.pattern() {
            match field {
                DateField::Lit(fragment) => out.push_str(fragment),
                DateField::WeekdayWide => {
                    let idx = date.weekday().num_days_from_monday() as usize;
                    out.push_str(&self.data.weekdays_wide[idx]);
                }
                DateField::MonthWide => {
                    out.push_str(&self.data.months_wide[date.month0() as usize]);
                }
                DateField::MonthAbbrev => {
                    out.push_str(&self.data.months_abbrev[date.month0() as usize]);
                }
                DateField::MonthNum => out.push_str(&date.month().to_string()),
                DateField::MonthTwo => out.push_str(&format!("{:02}", date.month())),
                DateField::DayNum => out.push_str(&date.day().to_string()),
                DateField::DayTwo => out.push_str(&format!("{:02}", date.day())),
                DateField::YearFull => out.push_str(&date.year().to_string()),
                DateField::YearTwo => {
                    out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::{FormatProvider, Locale};
    use super::*;

    fn provider(id: &str) -> FormatProvider {
        FormatProvider::new(Locale::parse(id).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_style() {
        let grammar = provider("en_US").date(DateStyle::Full);
        let text = "Monday, May 25, 2020. More";
        assert_eq!(grammar.parse_at(text, 0), Some((date(2020, 5, 25), 20)));
        assert_eq!(grammar.format(date(2020, 5, 25)), "Monday, May 25, 2020");
    }

    #[test]
    fn test_long_style() {
        let grammar = provider("en_US").date(DateStyle::Long);
        assert_eq!(
            grammar.parse_at("May 19, 2019 or", 0),
            Some((date(2019, 5, 19), 12))
        );
        assert_eq!(grammar.format(date(2019, 5, 19)), "May 19, 2019");
    }

    #[test]
    fn test_medium_style_abbrev() {
        let grammar = provider("en_US").date(DateStyle::Medium);
        assert_eq!(
            grammar.parse_at("Sep 1, 2021", 0),
            Some((date(2021, 9, 1), 11))
        );
        // Full month names are not abbreviations of themselves here.
        assert!(grammar.parse_at("September 1, 2021", 0).is_none());
    }

    #[test]
    fn test_short_style_pivot() {
        let grammar = provider("en_US").date(DateStyle::Short);
        assert_eq!(grammar.parse_at("5/25/21", 0), Some((date(2021, 5, 25), 7)));
        assert_eq!(grammar.parse_at("5/25/99", 0), Some((date(1999, 5, 25), 7)));
        assert_eq!(
            grammar.parse_at("5/25/2020", 0),
            Some((date(2020, 5, 25), 9))
        );
        assert_eq!(grammar.format(date(2021, 5, 25)), "5/25/21");
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        let grammar = provider("en_US").date(DateStyle::Short);
        assert!(grammar.parse_at("13/40/21", 0).is_none());
        assert!(grammar.parse_at("2/30/21", 0).is_none());
    }

    #[test]
    fn test_weekday_consumed_but_not_validated() {
        // Lenient platform parsers ignore the weekday field when the date
        // fields are present; May 25, 2020 was in fact a Monday.
        let grammar = provider("en_US").date(DateStyle::Full);
        assert_eq!(
            grammar.parse_at("Tuesday, May 25, 2020", 0),
            Some((date(2020, 5, 25), 21))
        );
    }

    #[test]
    fn test_russian_long_style() {
        let grammar = provider("ru_RU").date(DateStyle::Long);
        let text = "25 мая 2020 г.";
        let (parsed, end) = grammar.parse_at(text, 0).unwrap();
        assert_eq!(parsed, date(2020, 5, 25));
        assert_eq!(end, text.len());
        assert_eq!(grammar.format(parsed), text);
    }

    #[test]
    fn test_german_short_style() {
        let grammar = provider("de_DE").date(DateStyle::Short);
        assert_eq!(
            grammar.parse_at("25.05.20", 0),
            Some((date(2020, 5, 25), 8))
        );
        assert_eq!(grammar.format(date(2020, 5, 25)), "25.05.20");
    }

    #[test]
    fn test_no_match_leaves_cursor() {
        let grammar = provider("en_US").date(DateStyle::Long);
        assert!(grammar.parse_at("hello", 0).is_none());
    }
}
