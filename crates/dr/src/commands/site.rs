//! Shared site loading for CLI commands.

use std::path::{Path, PathBuf};

use clap::Args;
use dr_config::{CliSettings, Config};
use dr_nav::{BreadcrumbConfig, BreadcrumbResolver, FrontMatter, NavigationIndex, load_navigation};

use crate::error::CliError;

/// Site options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover dr.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation file, JSON or YAML (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Site name used for the site crumb (overrides config).
    #[arg(long, env = "DR_SITE_NAME")]
    site_name: Option<String>,

    /// Base URL the site is served under (overrides config).
    #[arg(long, env = "DR_BASE_URL")]
    base_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration, navigation and resolver for one site.
pub(crate) struct LoadedSite {
    pub config: Config,
    pub index: NavigationIndex,
    pub resolver: BreadcrumbResolver,
}

impl SiteArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            site_name: self.site_name.clone(),
            base_url: self.base_url.clone(),
            navigation: self.navigation.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration, navigation index and breadcrumb resolver.
    pub(crate) fn load(&self) -> Result<LoadedSite, CliError> {
        let config = self.load_config()?;
        tracing::info!(
            site = %config.site.name,
            base_url = %config.site.base_url,
            "Loading site navigation"
        );
        let index = load_navigation(&config.navigation_path)?;
        let resolver = BreadcrumbResolver::new(breadcrumb_config(&config))?;
        Ok(LoadedSite {
            config,
            index,
            resolver,
        })
    }
}

/// Convert site configuration into resolver settings.
pub(crate) fn breadcrumb_config(config: &Config) -> BreadcrumbConfig {
    BreadcrumbConfig {
        site_name: config.site.name.clone(),
        base_url: config.site.base_url.clone(),
        root_title: config.breadcrumbs.root_title.clone(),
        root_url: config.breadcrumbs.root_url.clone(),
        platforms: config.breadcrumbs.platforms.clone(),
    }
}

/// Read front matter from a Markdown (`.md`, `.mdx`) or YAML file.
pub(crate) fn read_front_matter(path: &Path) -> Result<FrontMatter, CliError> {
    let content = std::fs::read_to_string(path)?;
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "md" | "mdx" | "markdown"));

    let front_matter = if is_markdown {
        FrontMatter::from_markdown(&content)?
    } else {
        FrontMatter::from_yaml(&content)?
    };
    Ok(front_matter)
}
