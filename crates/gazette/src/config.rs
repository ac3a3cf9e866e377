//! `gazette.toml` configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure (gazette.toml).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Article dataset
    #[serde(default = "default_data")]
    pub data: String,
    /// Article page template
    #[serde(default = "default_template")]
    pub template: String,
    /// Static assets copied to `<output>/public`
    #[serde(default = "default_public")]
    pub public: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            template: default_template(),
            public: default_public(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: false,
        }
    }
}

fn default_data() -> String {
    "src/articles.json".to_string()
}
fn default_template() -> String {
    "src/template.html".to_string()
}
fn default_public() -> String {
    "public".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
