//! Configuration management for mkindex.
//!
//! Parses optional `mkindex.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Without a config
//! file, paths default to `mkdocs.yml` and `docs/` in the current directory.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `mkdocs.path`
//! - `output.docs_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override path to `mkdocs.yml`.
    pub mkdocs_path: Option<PathBuf>,
    /// Override docs root directory.
    pub docs_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mkindex.toml";

const DEFAULT_MKDOCS_PATH: &str = "mkdocs.yml";
const DEFAULT_DOCS_DIR: &str = "docs";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[mkdocs]` section (paths are relative strings from TOML).
    mkdocs: MkDocsConfigRaw,
    /// `[output]` section (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw `[mkdocs]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct MkDocsConfigRaw {
    path: Option<String>,
}

/// Raw `[output]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    docs_dir: Option<String>,
}

/// Resolved input and output paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Path to `mkdocs.yml`.
    pub mkdocs_path: PathBuf,
    /// Root directory holding one directory per topic.
    pub docs_dir: PathBuf,
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
        /// Config field path (e.g., "`output.docs_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mkindex.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(mkdocs_path) = &settings.mkdocs_path {
            self.paths.mkdocs_path.clone_from(mkdocs_path);
        }
        if let Some(docs_dir) = &settings.docs_dir {
            self.paths.docs_dir.clone_from(docs_dir);
        }
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            mkdocs: MkDocsConfigRaw::default(),
            output: OutputConfigRaw::default(),
            paths: PathsConfig {
                mkdocs_path: base.join(DEFAULT_MKDOCS_PATH),
                docs_dir: base.join(DEFAULT_DOCS_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation and path resolution
        config.expand_env_vars()?;
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a path is set to an empty string.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.mkdocs.path.as_deref(), "mkdocs.path")?;
        require_non_empty(self.output.docs_dir.as_deref(), "output.docs_dir")?;
        Ok(())
    }

    /// Expand environment variable references in configured paths.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.mkdocs.path {
            self.mkdocs.path = Some(expand::expand_env(path, "mkdocs.path")?);
        }
        if let Some(ref docs_dir) = self.output.docs_dir {
            self.output.docs_dir = Some(expand::expand_env(docs_dir, "output.docs_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths = PathsConfig {
            mkdocs_path: resolve(self.mkdocs.path.as_deref(), DEFAULT_MKDOCS_PATH),
            docs_dir: resolve(self.output.docs_dir.as_deref(), DEFAULT_DOCS_DIR),
        };
    }
}
