//! Configuration management for quire.
//!
//! Parses `quire.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! content_dir = "content"
//! static_dir = "static"
//! output_dir = "docs"
//! template = "template.html"
//! base_path = "/"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub content_dir: Option<PathBuf>,
    /// Override generated site directory.
    pub output_dir: Option<PathBuf>,
    /// Override URL prefix for root-relative links.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct SiteConfigRaw {
    content_dir: Option<String>,
    static_dir: Option<String>,
    output_dir: Option<String>,
    template: Option<String>,
    base_path: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Markdown sources.
    pub content_dir: PathBuf,
    /// Static assets copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Generated site, wiped on every build.
    pub output_dir: PathBuf,
    /// Page template containing `{{ Title }}` and `{{ Content }}`.
    pub template: PathBuf,
    /// URL prefix, always starting and ending with `/`.
    pub base_path: String,
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

/// Normalize a base path so it starts and ends with `/`.
///
/// ```
/// use quire_config::normalize_base_path;
///
/// assert_eq!(normalize_base_path("blog"), "/blog/");
/// assert_eq!(normalize_base_path("/"), "/");
/// ```
pub fn normalize_base_path(raw: &str) -> String {
    let mut path = raw.trim().to_owned();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
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

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.site_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(base_path) = &settings.base_path {
            self.site_resolved.base_path = normalize_base_path(base_path);
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
        let site = SiteConfigRaw::default();
        let site_resolved = site.resolve(base);
        Self {
            site,
            site_resolved,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.site_resolved = config.site.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;

        if !site.base_path.starts_with('/') || !site.base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_path must start and end with '/', got {:?}",
                site.base_path
            )));
        }
        if site.output_dir == site.content_dir {
            return Err(ConfigError::Validation(
                "site.output_dir cannot be the content directory".to_owned(),
            ));
        }
        if site.output_dir == site.static_dir {
            return Err(ConfigError::Validation(
                "site.output_dir cannot be the static directory".to_owned(),
            ));
        }

        Ok(())
    }
}

impl SiteConfigRaw {
    /// Resolve relative paths against the config directory.
    fn resolve(&self, config_dir: &Path) -> SiteConfig {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        SiteConfig {
            content_dir: resolve(self.content_dir.as_deref(), "content"),
            static_dir: resolve(self.static_dir.as_deref(), "static"),
            output_dir: resolve(self.output_dir.as_deref(), "docs"),
            template: resolve(self.template.as_deref(), "template.html"),
            base_path: normalize_base_path(self.base_path.as_deref().unwrap_or("/")),
        }
    }
}
