use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Record, RecordView};

static DAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Day ([0-9]+) of ML:").expect("valid regex"));

/// Extract the day number from the first `Day N of ML:` header in `text`.
///
/// Filtering and rendering both go through this function so they always agree.
pub fn day_number(text: &str) -> Option<&str> {
    DAY_HEADER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Every line after the first, trimmed, with one leading `"> "` removed.
///
/// Trimming also drops a byte-order mark. Blank lines survive as empty strings.
pub fn bullet_points(text: &str) -> Vec<String> {
    text.split('\n')
        .skip(1)
        .map(|line| {
            let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
            line.strip_prefix("> ").unwrap_or(line).to_string()
        })
        .collect()
}

pub fn render_record(record: &Record) -> RecordView {
    RecordView {
        day: day_number(&record.text).map(str::to_string),
        bullets: bullet_points(&record.text),
        link: record.link.clone(),
    }
}
