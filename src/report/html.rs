//! HTML report rendering.
//!
//! The report opens with the analyzed file name and a summary of the six
//! top-level counts, followed by one block per category with the full
//! seven-field statistics. Extremum sentinels render as `-`.

use super::labels::{labels_for, CategoryLabels};
use crate::analyze::{Analysis, Category};
use crate::locale::{FormatProvider, Locale};
use crate::stats::{aggregate, StatsRecord};

const HEADER: &str = "<html><head><meta charset=\"UTF-8\"/><title>Stats</title></head><body>";
const FOOTER: &str = "</body></html>";
const NONE: &str = "-";

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn heading(out: &mut String, level: u8, text: &str) {
    out.push_str(&format!("<h{level}>{text}</h{level}>\n"));
}

fn paragraph(out: &mut String, text: &str) {
    out.push_str(&format!("<p>{text}</p>\n"));
}

/// One extremum line: label plus value or the sentinel.
fn value_line(out: &mut String, label: &str, value: Option<&String>) {
    match value {
        Some(v) => paragraph(out, &format!("{label}{}", escape(v))),
        None => paragraph(out, &format!("{label}{NONE}")),
    }
}

/// One length-extremum line: label plus length and the value in parentheses,
/// or the sentinel.
fn length_line(out: &mut String, label: &str, value: Option<&String>) {
    match value {
        Some(v) => {
            let length = v.chars().count();
            paragraph(out, &format!("{label}{length} ({})", escape(v)));
        }
        None => paragraph(out, &format!("{label}{NONE}")),
    }
}

fn block(
    out: &mut String,
    labels: &CategoryLabels,
    unique_word: &str,
    record: &StatsRecord,
) {
    heading(out, 4, labels.title);
    let mut count_line = format!("{}{}", labels.count, record.count);
    if record.count > 0 {
        count_line.push_str(&format!(" ({} {unique_word})", record.unique));
    }
    paragraph(out, &count_line);
    value_line(out, labels.min, record.min_value.as_ref());
    value_line(out, labels.max, record.max_value.as_ref());
    length_line(out, labels.min_length, record.shortest_value.as_ref());
    length_line(out, labels.max_length, record.longest_value.as_ref());
    match record.mean_length() {
        Some(mean) => paragraph(out, &format!("{}{mean}", labels.mean_length)),
        None => paragraph(out, &format!("{}{NONE}", labels.mean_length)),
    }
    paragraph(out, "");
}

/// Renders the full HTML report for one analyzed document.
///
/// `provider` is the input locale's provider (the aggregation re-parses
/// values under it); `output_locale` only selects the report labels.
pub fn render_report(
    analysis: &Analysis,
    provider: &FormatProvider,
    output_locale: &Locale,
    input_name: &str,
) -> String {
    let labels = labels_for(output_locale);
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    heading(&mut out, 3, &format!("{}{}", labels.analyzed_file, escape(input_name)));
    heading(&mut out, 4, labels.summary_title);
    for category in Category::ALL {
        paragraph(
            &mut out,
            &format!(
                "{}{}",
                labels.category(category).count,
                analysis.total_count(category)
            ),
        );
    }
    paragraph(&mut out, "");
    for category in Category::ALL {
        let record = aggregate(analysis.mapping(category), category, provider);
        let unique_word = labels.unique_word(output_locale, category, record.count);
        block(&mut out, labels.category(category), &unique_word, &record);
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}
