use crate::day::{day_number, render_record};
use crate::model::{Record, RecordView};

/// Records whose day number equals `search_term` exactly, in input order.
///
/// An empty term selects everything, including records with no day header.
/// Comparison is on the digit string, so `"01"` never matches `"1"`.
pub fn filter_records<'a>(records: &'a [Record], search_term: &str) -> Vec<&'a Record> {
    if search_term.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| day_number(&r.text) == Some(search_term))
        .collect()
}

/// Message shown when nothing matches the current term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

impl EmptyState {
    fn for_term(search_term: &str) -> Self {
        Self {
            message: format!("No results found for Day {search_term} of ML."),
            hint: "Try searching for a different day or clear the search.".to_string(),
        }
    }
}

/// Everything the page needs to draw one state of the browser.
#[derive(Debug, Clone)]
pub struct BrowserView {
    pub cards: Vec<RecordView>,
    /// Cards in the filtered view that the preview limit held back.
    pub hidden: usize,
    /// A preview limit is in force and the filtered view exceeds it.
    pub toggleable: bool,
    pub empty: Option<EmptyState>,
}

impl BrowserView {
    pub fn total(&self) -> usize {
        self.cards.len() + self.hidden
    }
}

/// Per-session UI state for browsing the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBrowser {
    search_term: String,
    show_all: bool,
}

impl RecordBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.show_all = false;
    }

    /// The clear control is offered only while a term is active.
    pub fn can_clear(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn filtered<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter_records(records, &self.search_term)
    }

    /// Filter, then render up to `preview_limit` cards unless `show_all` is set.
    pub fn view(&self, records: &[Record], preview_limit: Option<usize>) -> BrowserView {
        let matched = self.filtered(records);
        if matched.is_empty() {
            return BrowserView {
                cards: Vec::new(),
                hidden: 0,
                toggleable: false,
                empty: Some(EmptyState::for_term(&self.search_term)),
            };
        }

        let shown = match preview_limit {
            Some(limit) if !self.show_all => limit.min(matched.len()),
            _ => matched.len(),
        };
        BrowserView {
            cards: matched[..shown].iter().map(|r| render_record(r)).collect(),
            hidden: matched.len() - shown,
            toggleable: preview_limit.is_some_and(|limit| matched.len() > limit),
            empty: None,
        }
    }
}
