//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bloodline/bloodline.toml`
//! 3. Local config: `<dir>/.bloodline.toml`
//! 4. Environment variables: `BLOODLINE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Tree reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay between revealed nodes in milliseconds (0 = immediate)
    pub interval_ms: u64,
    /// Print parent -> child edges before each node
    pub show_edges: bool,
    /// Print the explanation for each node
    pub explain: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            show_edges: false,
            explain: true,
        }
    }
}

impl RevealConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn merge(&self, overlay: &RawRevealConfig) -> Self {
        Self {
            interval_ms: overlay.interval_ms.unwrap_or(self.interval_ms),
            show_edges: overlay.show_edges.unwrap_or(self.show_edges),
            explain: overlay.explain.unwrap_or(self.explain),
        }
    }
}

/// Output format for resolve/tree results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApplicationError::Config {
                message: format!("unknown format {other:?} (expected text or json)"),
            }),
        }
    }
}

/// Raw reveal config for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRevealConfig {
    pub interval_ms: Option<u64>,
    pub show_edges: Option<bool>,
    pub explain: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub reveal: RawRevealConfig,
}

/// Unified configuration for bloodline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default output format
    pub format: OutputFormat,
    /// Tree reveal settings
    pub reveal: RevealConfig,
}

/// Get the XDG config directory for bloodline.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bloodline").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bloodline.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".bloodline.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            reveal: self.reveal.merge(&overlay.reveal),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.bloodline.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), local_dir)
    }

    /// Load settings from an explicit global config path.
    ///
    /// Missing files are skipped; unreadable or malformed files are errors.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BLOODLINE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BLOODLINE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_string("reveal.interval_ms") {
            settings.reveal.interval_ms = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("BLOODLINE_REVEAL__INTERVAL_MS={val}: {e}"),
            })?;
        }
        if let Some(val) =
            env_bool(&config, "reveal.show_edges", "BLOODLINE_REVEAL__SHOW_EDGES")?
        {
            settings.reveal.show_edges = val;
        }
        if let Some(val) = env_bool(&config, "reveal.explain", "BLOODLINE_REVEAL__EXPLAIN")? {
            settings.reveal.explain = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bloodline configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bloodline/bloodline.toml
#   Local:  <dir>/.bloodline.toml
#   Env:    BLOODLINE_* environment variables, e.g. BLOODLINE_REVEAL__INTERVAL_MS=500

# Output format for resolve and tree: "text" or "json"
# format = "text"

[reveal]
# Delay between revealed tree nodes in milliseconds (0 renders immediately)
# interval_ms = 4000

# Print parent -> child edges while revealing
# show_edges = false

# Print an explanation next to revealed nodes
# explain = true
"#
        .to_string()
    }
}

/// Absent keys are `None`; present values must be booleans.
fn env_bool(config: &Config, key: &str, var: &str) -> Result<Option<bool>, ApplicationError> {
    match config.get_bool(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{var}: {e}"),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert_eq!(settings.reveal.interval_ms, 4000);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.reveal.explain);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_values() {
        let base = Settings::default();
        let overlay = RawSettings {
            format: None,
            reveal: RawRevealConfig {
                interval_ms: Some(250),
                show_edges: None,
                explain: Some(false),
            },
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.format, OutputFormat::Text);
        assert_eq!(result.reveal.interval_ms, 250);
        assert!(!result.reveal.show_edges);
        assert!(!result.reveal.explain);
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.format.is_none());
        assert!(raw.reveal.interval_ms.is_none());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
