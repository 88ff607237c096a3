use std::path::{Path, PathBuf};

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_PROFILE_URL: &str = "https://twitter.com/wateriscoding";
const DEFAULT_SITE_TITLE: &str = "WaterCodes";

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the bundled JSON asset.
    pub data_path: String,
    pub listen_addr: String,
    /// When set, only this many cards are shown until the visitor asks for all.
    pub preview_limit: Option<usize>,
    /// Target of the site title link in the header.
    pub profile_url: String,
    pub site_title: String,
}

impl Config {
    /// Required:
    /// - `WATERCODES_DATA_PATH`: path to the JSON dataset
    ///
    /// Optional:
    /// - `WATERCODES_LISTEN_ADDR` (default: "127.0.0.1:3000")
    /// - `WATERCODES_PREVIEW_LIMIT`: positive integer, enables "Show all"
    /// - `WATERCODES_PROFILE_URL`
    /// - `WATERCODES_SITE_TITLE` (default: "WaterCodes")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let data_path = lookup("WATERCODES_DATA_PATH").ok_or_else(|| {
            AppError::Config("WATERCODES_DATA_PATH environment variable is required".to_string())
        })?;
        if !Path::new(&data_path).exists() {
            return Err(AppError::Config(format!("dataset not found at {data_path}")));
        }

        let preview_limit = match lookup("WATERCODES_PREVIEW_LIMIT") {
            None => None,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(AppError::Config(format!(
                        "WATERCODES_PREVIEW_LIMIT must be a positive integer, got {raw:?}"
                    )))
                }
                Ok(n) => Some(n),
            },
        };

        Ok(Self {
            data_path,
            listen_addr: lookup("WATERCODES_LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            preview_limit,
            profile_url: lookup("WATERCODES_PROFILE_URL")
                .unwrap_or_else(|| DEFAULT_PROFILE_URL.to_string()),
            site_title: lookup("WATERCODES_SITE_TITLE")
                .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
        })
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let path = file.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup_from(&[("WATERCODES_DATA_PATH", path.as_str())]))
            .expect("config");
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.preview_limit, None);
        assert_eq!(config.site_title, "WaterCodes");
        assert_eq!(config.data_path(), file.path());
    }

    #[test]
    fn data_path_is_required_and_must_exist() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("WATERCODES_DATA_PATH", "/no/such/file.json")])),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn preview_limit_must_be_positive() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let path = file.path().to_string_lossy().to_string();
        for bad in ["0", "-1", "many"] {
            let result = Config::from_lookup(lookup_from(&[
                ("WATERCODES_DATA_PATH", path.as_str()),
                ("WATERCODES_PREVIEW_LIMIT", bad),
            ]));
            assert!(result.is_err(), "{bad} should be rejected");
        }
        let config = Config::from_lookup(lookup_from(&[
            ("WATERCODES_DATA_PATH", path.as_str()),
            ("WATERCODES_PREVIEW_LIMIT", "20"),
        ]))
        .expect("config");
        assert_eq!(config.preview_limit, Some(20));
    }
}
