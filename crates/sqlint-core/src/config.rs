//! Configuration types for sqlint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for sqlint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing run (default: error).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Linter configuration.
    #[serde(default)]
    pub linter: LinterConfig,

    /// Per-rule configurations, keyed by rule code or rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the configuration for a rule, looked up by code first, then name.
    #[must_use]
    pub fn rule_config(&self, code: &str, name: &str) -> Option<&RuleConfig> {
        self.rules.get(code).or_else(|| self.rules.get(name))
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, code: &str, name: &str) -> bool {
        self.rule_config(code, name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, code: &str, name: &str) -> Option<Severity> {
        self.rule_config(code, name).and_then(|c| c.severity)
    }

    /// Returns the effective failure threshold.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Linter-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Root directory holding parse trees (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns, relative to `root`, to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Rule selectors to enable: codes, names, or group tags.
    #[serde(default = "default_rule_selectors")]
    pub rules: Vec<String>,

    /// Rule selectors to subtract from `rules`.
    #[serde(default)]
    pub exclude_rules: Vec<String>,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            respect_gitignore: true,
            rules: default_rule_selectors(),
            exclude_rules: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/target/**".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_rule_selectors() -> Vec<String> {
    vec!["all".to_string()]
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Creates a rule configuration from string options.
    #[must_use]
    pub fn with_options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            options: options
                .into_iter()
                .map(|(k, v)| (k.into(), toml::Value::String(v.into())))
                .collect(),
            ..Self::default()
        }
    }

    /// Gets an option as the raw string a rule would receive.
    ///
    /// Strings are returned as-is, arrays are joined with `,`, and other
    /// scalars use their TOML representation.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.options.get(key).map(raw_string)
    }

    /// Returns the option keys present in this configuration.
    pub fn option_keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }
}

fn raw_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => items.iter().map(raw_string).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
