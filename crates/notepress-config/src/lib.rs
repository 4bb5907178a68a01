//! Configuration management for notepress.
//!
//! Parses `notepress.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `blog.base_url`
//! - `blog.token`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use notepress_meta::{PastSchedulePolicy, PostStatus};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "notepress.toml";

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Remote blog API configuration.
    pub blog: Option<BlogConfig>,
    /// Publishing defaults.
    pub publish: PublishConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Remote blog API configuration.
#[derive(Debug, Deserialize)]
pub struct BlogConfig {
    /// Blog API base URL.
    pub base_url: String,
    /// API access token (sent as a bearer token).
    pub token: String,
}

impl BlogConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "blog.base_url")?;
        require_http_url(&self.base_url, "blog.base_url")?;
        require_non_empty(&self.token, "blog.token")?;
        Ok(())
    }
}

/// Publishing defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PublishConfig {
    /// Status used when front matter carries none (or an unrecognized one).
    pub default_status: PostStatus,
    /// What to do with an explicitly scheduled post whose date is past or
    /// absent.
    pub past_schedule: PastSchedulePolicy,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`blog.token`").
        field: String,
        /// Error message (e.g., "${`NOTEPRESS_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `notepress.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or if
    /// parsing or expansion fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Get validated blog configuration.
    ///
    /// Returns the blog config if the `[blog]` section is present and all
    /// fields are valid. Use this instead of accessing the `blog` field
    /// directly when the command requires the remote API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or
    /// invalid.
    pub fn require_blog(&self) -> Result<&BlogConfig, ConfigError> {
        let blog = self
            .blog
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("[blog] section required in config".into()))?;
        blog.validate()?;
        Ok(blog)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut blog) = self.blog {
            blog.base_url = expand::expand_env(&blog.base_url, "blog.base_url")?;
            blog.token = expand::expand_env(&blog.token, "blog.token")?;
        }
        Ok(())
    }
}
