//! Localized report labels.
//!
//! Label bundles exist for English and Russian; any other output locale
//! falls back to English. Bundles are selected by an explicit locale
//! parameter, never by ambient process state.

use crate::analyze::Category;
use crate::locale::Locale;

/// Labels for one category block of the report.
#[derive(Debug, Clone, Copy)]
pub struct CategoryLabels {
    /// Block heading.
    pub title: &'static str,
    /// Occurrence-count line prefix.
    pub count: &'static str,
    /// Minimum-value line prefix.
    pub min: &'static str,
    /// Maximum-value line prefix.
    pub max: &'static str,
    /// Minimum-length line prefix.
    pub min_length: &'static str,
    /// Maximum-length line prefix.
    pub max_length: &'static str,
    /// Average-length line prefix.
    pub mean_length: &'static str,
}

/// A full label bundle for one output language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// Prefix of the analyzed-file heading.
    pub analyzed_file: &'static str,
    /// Heading of the summary section.
    pub summary_title: &'static str,
    /// Stem of the "unique" word in count parentheticals.
    pub unique: &'static str,
    sentences: CategoryLabels,
    lines: CategoryLabels,
    words: CategoryLabels,
    numbers: CategoryLabels,
    currencies: CategoryLabels,
    dates: CategoryLabels,
}

impl Labels {
    /// The labels of one category block.
    pub fn category(&self, category: Category) -> &CategoryLabels {
        match category {
            Category::Sentences => &self.sentences,
            Category::Lines => &self.lines,
            Category::Words => &self.words,
            Category::Numbers => &self.numbers,
            Category::Currencies => &self.currencies,
            Category::Dates => &self.dates,
        }
    }

    /// The localized "unique" word for a count parenthetical.
    ///
    /// Russian needs an adjective ending agreeing with the counted noun's
    /// gender and the count's grammatical number.
    pub fn unique_word(&self, locale: &Locale, category: Category, count: usize) -> String {
        if locale.language != "ru" {
            return self.unique.to_string();
        }
        let neuter = matches!(
            category,
            Category::Words | Category::Sentences | Category::Numbers
        );
        let suffix = if count % 10 == 1 && count != 11 {
            if neuter { "ое" } else { "ая" }
        } else {
            "ых"
        };
        format!("{}{}", self.unique, suffix)
    }
}

static EN: Labels = Labels {
    analyzed_file: "Analyzed file: ",
    summary_title: "Summary statistics",
    unique: "unique",
    sentences: CategoryLabels {
        title: "Statistics on sentences",
        count: "Number of sentences: ",
        min: "Minimum sentence: ",
        max: "Maximum sentence: ",
        min_length: "Minimum sentence length: ",
        max_length: "Maximum sentence length: ",
        mean_length: "Average sentence length: ",
    },
    lines: CategoryLabels {
        title: "Statistics on lines",
        count: "Number of lines: ",
        min: "Minimum line: ",
        max: "Maximum line: ",
        min_length: "Minimum line length: ",
        max_length: "Maximum line length: ",
        mean_length: "Average line length: ",
    },
    words: CategoryLabels {
        title: "Statistics on words",
        count: "Number of words: ",
        min: "Minimum word: ",
        max: "Maximum word: ",
        min_length: "Minimum word length: ",
        max_length: "Maximum word length: ",
        mean_length: "Average word length: ",
    },
    numbers: CategoryLabels {
        title: "Statistics on numbers",
        count: "Number of numbers: ",
        min: "Minimum number: ",
        max: "Maximum number: ",
        min_length: "Minimum number length: ",
        max_length: "Maximum number length: ",
        mean_length: "Average number length: ",
    },
    currencies: CategoryLabels {
        title: "Statistics on currency amounts",
        count: "Number of currency amounts: ",
        min: "Minimum amount: ",
        max: "Maximum amount: ",
        min_length: "Minimum amount length: ",
        max_length: "Maximum amount length: ",
        mean_length: "Average amount length: ",
    },
    dates: CategoryLabels {
        title: "Statistics on dates",
        count: "Number of dates: ",
        min: "Minimum date: ",
        max: "Maximum date: ",
        min_length: "Minimum date length: ",
        max_length: "Maximum date length: ",
        mean_length: "Average date length: ",
    },
};

static RU: Labels = Labels {
    analyzed_file: "Анализируемый файл: ",
    summary_title: "Сводная статистика",
    unique: "уникальн",
    sentences: CategoryLabels {
        title: "Статистика по предложениям",
        count: "Число предложений: ",
        min: "Минимальное предложение: ",
        max: "Максимальное предложение: ",
        min_length: "Минимальная длина предложения: ",
        max_length: "Максимальная длина предложения: ",
        mean_length: "Средняя длина предложения: ",
    },
    lines: CategoryLabels {
        title: "Статистика по строкам",
        count: "Число строк: ",
        min: "Минимальная строка: ",
        max: "Максимальная строка: ",
        min_length: "Минимальная длина строки: ",
        max_length: "Максимальная длина строки: ",
        mean_length: "Средняя длина строки: ",
    },
    words: CategoryLabels {
        title: "Статистика по словам",
        count: "Число слов: ",
        min: "Минимальное слово: ",
        max: "Максимальное слово: ",
        min_length: "Минимальная длина слова: ",
        max_length: "Максимальная длина слова: ",
        mean_length: "Средняя длина слова: ",
    },
    numbers: CategoryLabels {
        title: "Статистика по числам",
        count: "Число чисел: ",
        min: "Минимальное число: ",
        max: "Максимальное число: ",
        min_length: "Минимальная длина числа: ",
        max_length: "Максимальная длина числа: ",
        mean_length: "Средняя длина числа: ",
    },
    currencies: CategoryLabels {
        title: "Статистика по суммам денег",
        count: "Число сумм: ",
        min: "Минимальная сумма: ",
        max: "Максимальная сумма: ",
        min_length: "Минимальная длина суммы: ",
        max_length: "Максимальная длина суммы: ",
        mean_length: "Средняя длина суммы: ",
    },
    dates: CategoryLabels {
        title: "Статистика по датам",
        count: "Число дат: ",
        min: "Минимальная дата: ",
        max: "Максимальная дата: ",
        min_length: "Минимальная длина даты: ",
        max_length: "Максимальная длина даты: ",
        mean_length: "Средняя длина даты: ",
    },
};

/// Selects the label bundle for an output locale.
pub fn labels_for(locale: &Locale) -> &'static Labels {
    if locale.language == "ru" { &RU } else { &EN }
}
