//! Configuration management for Docport.
//!
//! Parses `docport.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docport.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory (content root).
    pub source_dir: Option<PathBuf>,
    /// Override legacy navigation file path.
    pub nav_file: Option<PathBuf>,
    /// Override snippet base directory.
    pub snippet_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Snippet resolution configuration.
    snippets: SnippetsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved snippets configuration (set after loading).
    #[serde(skip)]
    pub snippets_resolved: SnippetsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    nav_file: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct DocsConfig {
    /// Content root for markdown files and slug existence checks.
    pub source_dir: PathBuf,
    /// Legacy navigation file converted into the sidebar model.
    pub nav_file: PathBuf,
}

/// Raw snippets configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SnippetsConfigRaw {
    base_dir: Option<String>,
}

/// Resolved snippet configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct SnippetsConfig {
    /// Base directory for resolving relative snippet references.
    ///
    /// Defaults to the docs source directory.
    pub base_dir: PathBuf,
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
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docport.toml` in current directory and parents.
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
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(nav_file) = &settings.nav_file {
            self.docs_resolved.nav_file.clone_from(nav_file);
        }
        if let Some(snippet_dir) = &settings.snippet_dir {
            self.snippets_resolved.base_dir.clone_from(snippet_dir);
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
            docs: DocsConfigRaw::default(),
            snippets: SnippetsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                nav_file: base.join("mkdocs.yml"),
            },
            snippets_resolved: SnippetsConfig {
                base_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.docs_resolved.nav_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "docs.nav_file cannot be empty".to_owned(),
            ));
        }
        if self.docs_resolved.source_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "docs.source_dir cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// The snippet base directory defaults to the docs source directory when
    /// not configured.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            nav_file: resolve(self.docs.nav_file.as_deref(), "mkdocs.yml"),
        };
        self.snippets_resolved = SnippetsConfig {
            base_dir: self.snippets.base_dir.as_deref().map_or_else(
                || self.docs_resolved.source_dir.clone(),
                |dir| config_dir.join(dir),
            ),
        };
    }
}
