//! Built-in locale format data tables.
//!
//! Each [`LocaleData`] value carries everything the grammars need for one
//! locale: separators, currency placement, month and weekday names, and the
//! date patterns for the four styles.

use super::Locale;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One element of a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateField {
    /// Full weekday name, e.g. `Monday`. Parsed but not validated against
    /// the date fields, matching lenient platform parsers.
    WeekdayWide,
    /// Full month name, e.g. `May`.
    MonthWide,
    /// Abbreviated month name, e.g. `Sep`.
    MonthAbbrev,
    /// Numeric month without padding.
    MonthNum,
    /// Numeric month, zero-padded to two digits on output.
    MonthTwo,
    /// Day of month without padding.
    DayNum,
    /// Day of month, zero-padded to two digits on output.
    DayTwo,
    /// Four-digit year (parses any literal year).
    YearFull,
    /// Two-digit year with a fixed pivot (`<= 68` maps to 20xx).
    YearTwo,
    /// A literal fragment that must match exactly.
    Lit(String),
}

fn lit(s: &str) -> DateField {
    DateField::Lit(s.to_string())
}

/// Format data for one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleData {
    /// Language code this data applies to.
    pub language: String,
    /// Country code this data applies to.
    pub country: String,
    /// Decimal separator.
    pub decimal_sep: char,
    /// Grouping separator.
    pub group_sep: char,
    /// Minus sign.
    pub minus_sign: char,
    /// Currency symbol.
    pub currency_symbol: String,
    /// Whether the currency symbol precedes the amount (`$10`) rather than
    /// following it (`10 €`).
    pub currency_prefix: bool,
    /// Full month names, January first.
    pub months_wide: Vec<String>,
    /// Abbreviated month names, January first.
    pub months_abbrev: Vec<String>,
    /// Full weekday names, Monday first.
    pub weekdays_wide: Vec<String>,
    /// Date patterns for the full, long, medium and short styles.
    pub date_patterns: [Vec<DateField>; 4],
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn en_us() -> LocaleData {
    use DateField::*;
    LocaleData {
        language: "en".to_string(),
        country: "US".to_string(),
        decimal_sep: '.',
        group_sep: ',',
        minus_sign: '-',
        currency_symbol: "$".to_string(),
        currency_prefix: true,
        months_wide: names(&[
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ]),
        months_abbrev: names(&[
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ]),
        weekdays_wide: names(&[
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ]),
        date_patterns: [
            vec![WeekdayWide, lit(", "), MonthWide, lit(" "), DayNum, lit(", "), YearFull],
            vec![MonthWide, lit(" "), DayNum, lit(", "), YearFull],
            vec![MonthAbbrev, lit(" "), DayNum, lit(", "), YearFull],
            vec![MonthNum, lit("/"), DayNum, lit("/"), YearTwo],
        ],
    }
}

fn ru_ru() -> LocaleData {
    use DateField::*;
    LocaleData {
        language: "ru".to_string(),
        country: "RU".to_string(),
        decimal_sep: ',',
        group_sep: '\u{a0}',
        minus_sign: '-',
        currency_symbol: "\u{20bd}".to_string(),
        currency_prefix: false,
        months_wide: names(&[
            "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа",
            "сентября", "октября", "ноября", "декабря",
        ]),
        months_abbrev: names(&[
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ]),
        weekdays_wide: names(&[
            "понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье",
        ]),
        date_patterns: [
            vec![
                WeekdayWide, lit(", "), DayNum, lit(" "), MonthWide, lit(" "), YearFull,
                lit(" г."),
            ],
            vec![DayNum, lit(" "), MonthWide, lit(" "), YearFull, lit(" г.")],
            vec![DayNum, lit(" "), MonthAbbrev, lit(" "), YearFull, lit(" г.")],
            vec![DayTwo, lit("."), MonthTwo, lit("."), YearTwo],
        ],
    }
}

fn de_de() -> LocaleData {
    use DateField::*;
    LocaleData {
        language: "de".to_string(),
        country: "DE".to_string(),
        decimal_sep: ',',
        group_sep: '.',
        minus_sign: '-',
        currency_symbol: "\u{20ac}".to_string(),
        currency_prefix: false,
        months_wide: names(&[
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Dezember",
        ]),
        months_abbrev: names(&[
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
            "Nov.", "Dez.",
        ]),
        weekdays_wide: names(&[
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ]),
        date_patterns: [
            vec![WeekdayWide, lit(", "), DayNum, lit(". "), MonthWide, lit(" "), YearFull],
            vec![DayNum, lit(". "), MonthWide, lit(" "), YearFull],
            vec![DayTwo, lit("."), MonthTwo, lit("."), YearFull],
            vec![DayTwo, lit("."), MonthTwo, lit("."), YearTwo],
        ],
    }
}

/// Built-in locale data. The first entry is the fallback.
static BUILTIN: Lazy<Vec<LocaleData>> = Lazy::new(|| vec![en_us(), ru_ru(), de_de()]);

/// Resolves format data for a locale: exact language+country match first,
/// then language alone, then the fallback entry.
pub(super) fn lookup(locale: &Locale) -> &'static LocaleData {
    BUILTIN
        .iter()
        .find(|d| d.language == locale.language && d.country == locale.country)
        .or_else(|| BUILTIN.iter().find(|d| d.language == locale.language))
        .unwrap_or(&BUILTIN[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        let locale = Locale::parse("ru_RU").unwrap();
        assert_eq!(lookup(&locale).currency_symbol, "\u{20bd}");
    }

    #[test]
    fn test_lookup_by_language() {
        let locale = Locale::parse("en_GB").unwrap();
        assert_eq!(lookup(&locale).language, "en");
    }

    #[test]
    fn test_twelve_months_everywhere() {
        for data in BUILTIN.iter() {
            assert_eq!(data.months_wide.len(), 12, "locale {}", data.language);
            assert_eq!(data.months_abbrev.len(), 12, "locale {}", data.language);
            assert_eq!(data.weekdays_wide.len(), 7, "locale {}", data.language);
        }
    }
}
