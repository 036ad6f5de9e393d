use crate::error::{RcAlignError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "rcalign.toml";

/// Represents the complete configuration for rc-align.
///
/// Contains bot markers, conventional commit settings, output naming and the
/// policy applied to histories without any tag.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub baseline: BaselineConfig,
}

/// Returns the markers the automation stamps on its own commits.
fn default_bot_markers() -> Vec<String> {
    vec![
        "Release-As:".to_string(),
        "chore: enforce correct rc version".to_string(),
    ]
}

/// Markers identifying commits authored by the automation itself.
///
/// A commit whose subject contains any marker (literal, case-sensitive) is
/// not counted as new work.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BotConfig {
    #[serde(default = "default_bot_markers")]
    pub markers: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            markers: default_bot_markers(),
        }
    }
}

/// Returns the commit types whose `!` form marks a breaking change.
fn default_breaking_types() -> Vec<String> {
    vec!["feat".to_string(), "fix".to_string(), "refactor".to_string()]
}

/// Returns the commit types that mark a new feature.
fn default_feature_types() -> Vec<String> {
    vec!["feat".to_string()]
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    vec!["BREAKING CHANGE".to_string()]
}

/// Configuration for conventional commit analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_breaking_types")]
    pub breaking_types: Vec<String>,

    #[serde(default = "default_feature_types")]
    pub feature_types: Vec<String>,

    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            breaking_types: default_breaking_types(),
            feature_types: default_feature_types(),
            breaking_change_indicators: default_breaking_change_indicators(),
        }
    }
}

fn default_output_key() -> String {
    "next_version".to_string()
}

/// Configuration for the emitted output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_key")]
    pub key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            key: default_output_key(),
        }
    }
}

/// What to do when the history carries no tag at all.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UntaggedPolicy {
    /// Treat the baseline as `0.0.0` and calculate
    #[default]
    FromZero,
    /// Emit nothing and leave versioning to the native tool
    Defer,
}

/// Configuration for baseline handling.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaselineConfig {
    #[serde(default)]
    pub untagged: UntaggedPolicy,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RcAlignError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `rcalign.toml` in current directory
/// 3. `.rcalign.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        read(path)?
    } else if local.exists() {
        read(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| RcAlignError::config(format!("Cannot read '{}': {}", path.display(), e)))
}
