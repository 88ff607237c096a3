/// Folds a collector batch into the dataset (and its CSV mirror).
///
/// Each store is merged independently against its own existing links, so a CSV mirror
/// that drifted from the JSON file is repaired rather than overwritten.
use std::path::Path;

use tracing::info;

use watercodes_common::dataset::{self, Dataset};
use watercodes_common::error::CommonError;
use watercodes_common::merge::{merge_new_records, relevant_posts};
use watercodes_common::model::{CollectedPost, Record};

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub candidates: usize,
    pub added_json: usize,
    pub added_csv: Option<usize>,
}

pub struct UpdateService {
    config: Config,
}

impl UpdateService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<UpdateSummary, AppError> {
        let batch = read_batch(&self.config.incoming_path())?;
        let collected = batch.len();
        let incoming = relevant_posts(batch);
        info!(collected, relevant = incoming.len(), "batch loaded");

        let added_json = update_json(&self.config.data_path(), &incoming)?;
        let added_csv = match self.config.csv_path() {
            Some(path) => Some(update_csv(&path, &incoming)?),
            None => None,
        };

        Ok(UpdateSummary {
            candidates: incoming.len(),
            added_json,
            added_csv,
        })
    }
}

fn read_batch(path: &Path) -> Result<Vec<CollectedPost>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| CommonError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| AppError::Batch {
        path: path.display().to_string(),
        source,
    })
}

fn update_json(path: &Path, incoming: &[Record]) -> Result<usize, AppError> {
    let existing = Dataset::load_or_empty(path)?;
    let outcome = merge_new_records(existing.into_records(), incoming);
    Dataset::new(outcome.records).save(path)?;
    info!(path = %path.display(), added = outcome.added, "json dataset updated");
    Ok(outcome.added)
}

fn update_csv(path: &Path, incoming: &[Record]) -> Result<usize, AppError> {
    let existing = dataset::read_csv(path)?;
    let outcome = merge_new_records(existing, incoming);
    dataset::write_csv(path, &outcome.records)?;
    info!(path = %path.display(), added = outcome.added, "csv mirror updated");
    Ok(outcome.added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_batch(dir: &Path) -> String {
        let path = dir.join("batch.json");
        std::fs::write(
            &path,
            r#"[
  {"tweetContent": "Day 3 of ML:\n> attention", "tweetLink": "https://x.com/w/status/3"},
  {"tweetContent": "coffee", "tweetLink": "https://x.com/w/status/99"},
  {"tweetContent": "Day 2 of ML:\n> backprop", "tweetLink": "https://x.com/w/status/2"}
]"#,
        )
        .expect("write batch");
        path.to_string_lossy().to_string()
    }

    fn config(dir: &Path, csv: bool) -> Config {
        Config {
            data_path: dir.join("WaterCodes.json").to_string_lossy().to_string(),
            incoming_path: write_batch(dir),
            csv_path: csv.then(|| dir.join("waterIsCoding.csv").to_string_lossy().to_string()),
        }
    }

    #[test]
    fn creates_dataset_from_first_batch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config(dir.path(), false);
        let summary = UpdateService::new(config.clone()).run().expect("run");
        assert_eq!(
            summary,
            UpdateSummary {
                candidates: 2,
                added_json: 2,
                added_csv: None,
            }
        );

        let dataset = Dataset::load(&config.data_path()).expect("load");
        let links: Vec<&str> = dataset.records().iter().map(|r| r.link.as_str()).collect();
        assert_eq!(
            links,
            vec!["https://x.com/w/status/2", "https://x.com/w/status/3"]
        );
    }

    #[test]
    fn rerun_adds_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config(dir.path(), true);
        UpdateService::new(config.clone()).run().expect("first run");
        let summary = UpdateService::new(config.clone()).run().expect("second run");
        assert_eq!(summary.added_json, 0);
        assert_eq!(summary.added_csv, Some(0));
        assert_eq!(Dataset::load(&config.data_path()).expect("load").len(), 2);
        assert_eq!(
            dataset::read_csv(&config.csv_path().expect("csv path"))
                .expect("read csv")
                .len(),
            2
        );
    }

    #[test]
    fn new_posts_go_before_existing_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config(dir.path(), true);
        Dataset::new(vec![Record::new("Day 1 of ML:\n> linear models", "https://x.com/w/status/1")])
            .save(&config.data_path())
            .expect("seed");

        let summary = UpdateService::new(config.clone()).run().expect("run");
        assert_eq!(summary.added_json, 2);
        assert_eq!(summary.added_csv, Some(2));

        let dataset = Dataset::load(&config.data_path()).expect("load");
        assert_eq!(dataset.records()[2].link, "https://x.com/w/status/1");
        assert_eq!(dataset.records()[0].text, "Day 2 of ML:\n> backprop");
    }

    #[test]
    fn malformed_batch_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = config(dir.path(), false);
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"[{"Tweet": "Day 1 of ML:", "Link": "x"}]"#).expect("write");
        config.incoming_path = bad.to_string_lossy().to_string();
        assert!(matches!(
            UpdateService::new(config).run(),
            Err(AppError::Batch { .. })
        ));
    }
}
