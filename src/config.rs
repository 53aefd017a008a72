use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration for secwatch.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target repository identity.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// API authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Poll cycle settings.
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Target repository identity.
///
/// Both fields may also be supplied with `--owner` / `--repo`; the watch
/// command fails at startup if neither source provides them.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Repository owner or organization.
    #[serde(default)]
    pub owner: Option<String>,

    /// Repository name.
    #[serde(default)]
    pub repo: Option<String>,
}

/// API authentication settings.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Personal access token. Falls back to the GITHUB_TOKEN environment
    /// variable when absent.
    #[serde(default)]
    pub token: Option<String>,
}

/// Poll cycle settings.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WatchConfig {
    /// Seconds between poll cycles (default: 3600).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Labels an issue must all carry to be fetched.
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Case-insensitive keywords matched against issue titles.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            labels: default_labels(),
            keywords: default_keywords(),
        }
    }
}

fn default_interval_secs() -> u64 {
    3600
}

fn default_labels() -> Vec<String> {
    vec!["security".to_string(), "vulnerability".to_string()]
}

fn default_keywords() -> Vec<String> {
    vec![
        "security".to_string(),
        "vulnerability".to_string(),
        "漏洞".to_string(),
        "安全".to_string(),
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// No token in the config file and GITHUB_TOKEN is unset.
    #[error("No GitHub token configured: set auth.token or the GITHUB_TOKEN environment variable")]
    MissingToken,
}

/// Load configuration from an explicit path, or from
/// ~/.config/secwatch/config.ya?ml when no path is given.
/// Returns Config::default() if no config file exists.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        return parse_config(&content, path);
    }

    let Some(dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("secwatch"))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Parse YAML content into Config.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Resolve the API token: the config value wins, GITHUB_TOKEN is the fallback.
pub fn resolve_token(config: &Config) -> Result<String, ConfigError> {
    if let Some(token) = config.auth.token.as_deref()
        && !token.is_empty()
    {
        return Ok(token.to_string());
    }

    match std::env::var("GITHUB_TOKEN") {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(ConfigError::MissingToken),
    }
}
