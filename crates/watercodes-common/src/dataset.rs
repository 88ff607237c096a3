/// Loading and saving the record asset.
///
/// The JSON file is the source of truth: an ordered array of `{ "Tweet", "Link" }`
/// objects. A CSV mirror with the same two columns can be kept alongside it.
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::day::day_number;
use crate::error::CommonError;
use crate::model::Record;

const CSV_HEADER: [&str; 2] = ["Tweet", "Link"];

/// Ordered, immutable collection of records loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self, CommonError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    pub fn load(path: &Path) -> Result<Self, CommonError> {
        let json = std::fs::read_to_string(path).map_err(|source| CommonError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        let headerless = dataset
            .records
            .iter()
            .filter(|r| day_number(&r.text).is_none())
            .count();
        if headerless > 0 {
            warn!(path = %path.display(), headerless, "records without a day header");
        }
        info!(path = %path.display(), records = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Like [`Dataset::load`], but a missing file yields an empty dataset.
    pub fn load_or_empty(path: &Path) -> Result<Self, CommonError> {
        if !path.exists() {
            info!(path = %path.display(), "dataset not found, starting empty");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the dataset as pretty-printed JSON (two-space indent).
    pub fn save(&self, path: &Path) -> Result<(), CommonError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json).map_err(|source| CommonError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read a `Tweet,Link` CSV file. A missing file reads as empty.
pub fn read_csv(path: &Path) -> Result<Vec<Record>, CommonError> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) if is_not_found(&e) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let (Some(text), Some(link)) = (row.get(0), row.get(1)) else {
            warn!(path = %path.display(), "skipping short csv row");
            continue;
        };
        records.push(Record::new(text, link));
    }
    Ok(records)
}

pub fn write_csv(path: &Path, records: &[Record]) -> Result<(), CommonError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([record.text.as_str(), record.link.as_str()])?;
    }
    writer.flush().map_err(|source| CommonError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_asset_field_names() {
        let dataset = Dataset::from_json(
            r#"[{"Tweet": "Day 1 of ML:\n> A", "Link": "https://x"}, {"Tweet": "No header here", "Link": "https://y"}]"#,
        )
        .expect("valid json");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0], Record::new("Day 1 of ML:\n> A", "https://x"));
        assert_eq!(dataset.records()[1].link, "https://y");
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(matches!(
            Dataset::from_json(r#"{"Tweet": "x"}"#),
            Err(CommonError::Json(_))
        ));
        assert!(Dataset::from_json(r#"[{"text": "x", "link": "y"}]"#).is_err());
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("WaterCodes.json");
        let dataset = Dataset::new(vec![
            Record::new("Day 2 of ML:\n> b", "https://b"),
            Record::new("Day 1 of ML:\n> a", "https://a"),
        ]);
        dataset.save(&path).expect("save");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("[\n  {\n    \"Tweet\""));

        let loaded = Dataset::load(&path).expect("load");
        assert_eq!(loaded.records(), dataset.records());
    }

    #[test]
    fn missing_file_is_an_error_for_load_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        assert!(matches!(Dataset::load(&path), Err(CommonError::Read { .. })));
        assert!(Dataset::load_or_empty(&path).expect("empty").is_empty());
    }

    #[test]
    fn csv_mirror_keeps_multiline_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("waterIsCoding.csv");
        assert!(read_csv(&path).expect("missing reads empty").is_empty());

        let records = vec![Record::new("Day 1 of ML:\n> a, with comma", "https://a")];
        write_csv(&path, &records).expect("write");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("Tweet,Link\n"));
        assert_eq!(read_csv(&path).expect("read"), records);
    }
}
