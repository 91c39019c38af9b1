//! CLI command implementations.

pub mod batch;
pub mod config;
pub mod parse;
pub mod ping;

use std::path::{Path, PathBuf};

use tracing::debug;

use tripspec_core::models::config::{OutputFormat, TripSpecConfig, parse_reference_date};
use tripspec_core::{ParseResponse, TripRequestParser};

/// Output format selectable on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON response envelope
    Json,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Config file location: the `--config` override or the platform config dir.
pub fn config_path(override_path: Option<&str>) -> PathBuf {
    match override_path {
        Some(path) => PathBuf::from(path),
        None => TripSpecConfig::default_path(
            &dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")),
        ),
    }
}

/// Load the configuration, falling back to defaults when no file exists yet.
pub fn load_config(override_path: Option<&str>) -> anyhow::Result<TripSpecConfig> {
    let path = config_path(override_path);
    debug!("Loading configuration from {}", path.display());
    Ok(TripSpecConfig::load_or_default(&path)?)
}

/// Build a parser from config, letting a command-line reference date win.
pub fn build_parser(
    config: &TripSpecConfig,
    reference_date: Option<&str>,
) -> anyhow::Result<TripRequestParser> {
    let mut parser = TripRequestParser::from_config(&config.extraction);
    if let Some(date) = reference_date {
        parser = parser.with_reference_date(parse_reference_date(date)?);
    }
    Ok(parser)
}

/// Render a parse response in the requested format.
pub fn render(response: &ParseResponse, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
        OutputFormat::Text => Ok(response.spec.summary().trim_end().to_string()),
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
