use std::collections::HashSet;

use crate::model::{CollectedPost, Record};

/// Posts worth keeping from a collector batch mention both "Day" and "ML".
pub fn is_day_log(content: &str) -> bool {
    content.contains("Day") && content.contains("ML")
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub records: Vec<Record>,
    pub added: usize,
}

/// Fold a newest-first batch into `existing`.
///
/// The batch is walked in reverse; links already known (from `existing` or earlier in
/// the batch) are skipped. New records come first, followed by `existing` unchanged.
pub fn merge_new_records(existing: Vec<Record>, incoming: &[Record]) -> MergeOutcome {
    let mut fresh = Vec::new();
    {
        let mut seen: HashSet<&str> = existing.iter().map(|r| r.link.as_str()).collect();
        for record in incoming.iter().rev() {
            if seen.insert(record.link.as_str()) {
                fresh.push(record.clone());
            }
        }
    }

    let added = fresh.len();
    let mut records = fresh;
    records.extend(existing);
    MergeOutcome { records, added }
}

/// Drop off-topic and duplicate posts from a collector batch, keeping the first
/// occurrence of each link.
pub fn relevant_posts(batch: Vec<CollectedPost>) -> Vec<Record> {
    let mut seen = HashSet::new();
    batch
        .into_iter()
        .filter(|post| is_day_log(&post.content))
        .filter(|post| seen.insert(post.link.clone()))
        .map(|post| Record::new(post.content, post.link))
        .collect()
}
