//! Configuration structures for the request parser and its outputs.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripSpecError};
use crate::models::trip::Currency;

/// Main configuration for tripspec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSpecConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Request extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency for bare budget numbers and unrecognized currency words.
    pub default_currency: Currency,

    /// Fixed "today" for year-less dates. Unset means the local calendar date.
    pub reference_date: Option<NaiveDate>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::Usd,
            reference_date: None,
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Default output format.
    pub format: OutputFormat,
}

/// Output formats for rendered trip specs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The JSON response envelope.
    #[default]
    Json,
    /// Plain text summary.
    Text,
}

impl TripSpecConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TripSpecError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location under `base` (usually the platform config dir).
    pub fn default_path(base: &Path) -> PathBuf {
        base.join("tripspec").join("config.json")
    }
}

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_reference_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TripSpecError::InvalidReferenceDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TripSpecConfig::default();
        assert_eq!(config.extraction.default_currency, Currency::Usd);
        assert!(config.extraction.reference_date.is_none());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: TripSpecConfig =
            serde_json::from_str(r#"{"extraction": {"default_currency": "EUR"}}"#).unwrap();
        assert_eq!(config.extraction.default_currency, Currency::Eur);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = TripSpecConfig::default_path(dir.path());

        let mut config = TripSpecConfig::default();
        config.extraction.reference_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        config.output.pretty = true;
        config.save(&path).unwrap();

        let loaded = TripSpecConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            TripSpecConfig::from_file(&path),
            Err(TripSpecError::Config(_))
        ));
    }

    #[test]
    fn test_parse_reference_date() {
        assert_eq!(
            parse_reference_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(matches!(
            parse_reference_date("2025-02-30"),
            Err(TripSpecError::InvalidReferenceDate(_))
        ));
    }
}
