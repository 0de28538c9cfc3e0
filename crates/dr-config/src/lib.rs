//! Site configuration for dr.
//!
//! Parses `dr.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.name`
//! - `site.base_url`
//! - `breadcrumbs.root_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site name.
    pub site_name: Option<String>,
    /// Override site base URL.
    pub base_url: Option<String>,
    /// Override navigation file path.
    pub navigation: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dr.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Breadcrumb trail configuration.
    pub breadcrumbs: BreadcrumbsConfig,

    /// Resolved navigation file path (set after loading).
    #[serde(skip)]
    pub navigation_path: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    #[allow(clippy::derivable_impls)]
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name of the site, used for the site crumb.
    pub name: String,
    /// Base URL the site is served under (e.g., "/help", "" for root).
    pub base_url: String,
    /// Navigation file, relative to the config file.
    navigation: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Docs".to_owned(),
            base_url: String::new(),
            navigation: None,
        }
    }
}

/// Breadcrumb trail configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    /// Title of the first crumb in every trail.
    pub root_title: String,
    /// External URL of the first crumb.
    pub root_url: String,
    /// Platform names stripped from section titles (`"Guides for iOS"` -> `"Guides"`).
    pub platforms: Vec<String>,
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self {
            root_title: "All docs".to_owned(),
            root_url: "https://docs.mapbox.com".to_owned(),
            platforms: ["iOS", "Android", "Vision", "Unity"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
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
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
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
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `dr.toml` in current directory and parents.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(name) = &settings.site_name {
            self.site.name.clone_from(name);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = normalize_base_url(base_url);
        }
        if let Some(navigation) = &settings.navigation {
            self.navigation_path.clone_from(navigation);
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
            site: SiteConfig::default(),
            breadcrumbs: BreadcrumbsConfig::default(),
            navigation_path: base.join("navigation.json"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.site.base_url = normalize_base_url(&config.site.base_url);

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_breadcrumbs()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;

        if !self.site.base_url.is_empty() && !self.site.base_url.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must be empty or start with /".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate breadcrumbs configuration.
    fn validate_breadcrumbs(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.breadcrumbs.root_title, "breadcrumbs.root_title")?;
        require_non_empty(&self.breadcrumbs.root_url, "breadcrumbs.root_url")?;
        require_http_url(&self.breadcrumbs.root_url, "breadcrumbs.root_url")?;

        if self
            .breadcrumbs
            .platforms
            .iter()
            .any(|p| p.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "breadcrumbs.platforms cannot contain empty names".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.name = expand::expand_env(&self.site.name, "site.name")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        self.breadcrumbs.root_url =
            expand::expand_env(&self.breadcrumbs.root_url, "breadcrumbs.root_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.navigation_path =
            config_dir.join(self.site.navigation.as_deref().unwrap_or("navigation.json"));
    }
}

/// Trim trailing slashes so `"{base}/"` never doubles up.
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.name, "Docs");
        assert_eq!(config.site.base_url, "");
        assert_eq!(
            config.navigation_path,
            PathBuf::from("/test/navigation.json")
        );
        assert_eq!(config.breadcrumbs.root_title, "All docs");
        assert_eq!(config.breadcrumbs.root_url, "https://docs.mapbox.com");
        assert_eq!(
            config.breadcrumbs.platforms,
            vec!["iOS", "Android", "Vision", "Unity"]
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.name, "Docs");
        assert_eq!(config.breadcrumbs.root_title, "All docs");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
name = "Maps SDK for iOS"
base_url = "/ios/maps"
navigation = "data/navigation.yaml"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Maps SDK for iOS");
        assert_eq!(config.site.base_url, "/ios/maps");
        assert_eq!(
            config.site.navigation.as_deref(),
            Some("data/navigation.yaml")
        );
    }

    #[test]
    fn test_parse_breadcrumbs_config() {
        let toml = r#"
[breadcrumbs]
root_title = "Help"
root_url = "https://example.com/help"
platforms = ["iOS", "macOS"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.breadcrumbs.root_title, "Help");
        assert_eq!(config.breadcrumbs.root_url, "https://example.com/help");
        assert_eq!(config.breadcrumbs.platforms, vec!["iOS", "macOS"]);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
navigation = "nav/navigation.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.navigation_path,
            PathBuf::from("/project/nav/navigation.json")
        );
    }

    #[test]
    fn test_resolve_paths_default_navigation() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.navigation_path,
            PathBuf::from("/project/navigation.json")
        );
    }

    #[test]
    fn test_load_from_file_trims_base_url() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("dr.toml");
        std::fs::write(
            &path,
            r#"
[site]
name = "Help"
base_url = "/help/"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.base_url, "/help");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(
            config.navigation_path,
            temp_dir.path().join("navigation.json")
        );
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/dr.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("dr.toml");
        std::fs::write(&path, "[site\nname = ").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_empty_site_name() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.name = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.name"));
    }

    #[test]
    fn test_validate_rejects_relative_base_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = "help".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_validate_rejects_non_http_root_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.breadcrumbs.root_url = "docs.mapbox.com".to_owned();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_validate_rejects_empty_platform() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.breadcrumbs.platforms.push("  ".to_owned());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("breadcrumbs.platforms"));
    }

    #[test]
    fn test_apply_cli_settings_site_name() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            site_name: Some("Maps".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.name, "Maps");
        assert_eq!(config.site.base_url, ""); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_base_url_is_normalized() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_url: Some("/android/maps/".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.base_url, "/android/maps");
    }

    #[test]
    fn test_apply_cli_settings_navigation() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            navigation: Some(PathBuf::from("/custom/nav.yaml")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.navigation_path, PathBuf::from("/custom/nav.yaml"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let config_before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.name, config_before.site.name);
        assert_eq!(config.site.base_url, config_before.site.base_url);
        assert_eq!(config.navigation_path, config_before.navigation_path);
    }

    #[test]
    fn test_expand_env_vars_site() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DR_CONFIG_TEST_BASE", "/help");
        }

        let toml = r#"
[site]
name = "Help"
base_url = "${DR_CONFIG_TEST_BASE}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.base_url, "/help");

        unsafe {
            std::env::remove_var("DR_CONFIG_TEST_BASE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_var_errors() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DR_CONFIG_TEST_MISSING");
        }

        let toml = r#"
[breadcrumbs]
root_url = "${DR_CONFIG_TEST_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("breadcrumbs.root_url"));
    }
}
