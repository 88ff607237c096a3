use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Paths used by a single refresh run, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON dataset served by the web crate. Created if missing.
    pub data_path: String,
    /// Collector output: `[{ "tweetContent", "tweetLink" }]`, newest first.
    pub incoming_path: String,
    /// Optional CSV mirror of the dataset.
    pub csv_path: Option<String>,
}

impl Config {
    /// Required:
    /// - `WATERCODES_DATA_PATH`
    /// - `WATERCODES_INCOMING_PATH`
    ///
    /// Optional:
    /// - `WATERCODES_CSV_PATH`
    pub fn from_env() -> Result<Self, AppError> {
        let data_path = std::env::var("WATERCODES_DATA_PATH").map_err(|_| {
            AppError::Config("WATERCODES_DATA_PATH environment variable is required".to_string())
        })?;

        let incoming_path = std::env::var("WATERCODES_INCOMING_PATH").map_err(|_| {
            AppError::Config(
                "WATERCODES_INCOMING_PATH environment variable is required".to_string(),
            )
        })?;
        if !Path::new(&incoming_path).exists() {
            return Err(AppError::Config(format!(
                "incoming batch not found at {incoming_path}"
            )));
        }

        Ok(Self {
            data_path,
            incoming_path,
            csv_path: std::env::var("WATERCODES_CSV_PATH").ok(),
        })
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path)
    }

    pub fn incoming_path(&self) -> PathBuf {
        PathBuf::from(&self.incoming_path)
    }

    pub fn csv_path(&self) -> Option<PathBuf> {
        self.csv_path.as_ref().map(PathBuf::from)
    }
}
