use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Resolved configuration with all values filled in (no Options).
///
/// Can be deserialized by the TOML loader; missing keys take their defaults. Credentials are
/// never part of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Base URL of the directory service. Each directory is requested at
    /// `{base_url}/{directory}?format={format}`.
    pub base_url: String,
    /// Directory the routing number files are written to
    pub output_dir: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, contains unknown keys, or `base_url` is not an http(s) URL.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        config.base_url()?;
        Ok(config)
    }

    /// Parses `base_url`, accepting only `http` and `https`.
    pub fn base_url(&self) -> AppResult<Url> {
        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::InvalidInput(format!(
                "Base URL must use http or https, got: {other}"
            ))),
        }
    }
}
