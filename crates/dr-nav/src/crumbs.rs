//! Breadcrumb trail resolution.
//!
//! A trail is assembled in a fixed order (docs root, site, section, parent,
//! current page) and then collapsed with [`create_unique_crumbs`] so that no
//! two consecutive crumbs point at the same path.

use regex::Regex;
use serde::Serialize;

use crate::error::NavigationError;
use crate::index::{NavigationEntry, NavigationIndex};

/// One link in a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

impl Crumb {
    /// Create a crumb.
    #[must_use]
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Collapse consecutive crumbs that share a path.
///
/// The first crumb of a run is kept. Non-adjacent duplicates are left alone.
#[must_use]
pub fn create_unique_crumbs(candidates: impl IntoIterator<Item = Crumb>) -> Vec<Crumb> {
    let mut crumbs: Vec<Crumb> = Vec::new();
    for crumb in candidates {
        if crumbs.last().is_some_and(|last| last.path == crumb.path) {
            continue;
        }
        crumbs.push(crumb);
    }
    crumbs
}

/// Settings for [`BreadcrumbResolver`].
#[derive(Clone, Debug)]
pub struct BreadcrumbConfig {
    /// Site name, used for the site crumb.
    pub site_name: String,
    /// Base URL the site is served under, without trailing slash.
    pub base_url: String,
    /// Title of the first crumb.
    pub root_title: String,
    /// External URL of the first crumb.
    pub root_url: String,
    /// Platform names stripped from section titles.
    pub platforms: Vec<String>,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            site_name: "Docs".to_owned(),
            base_url: String::new(),
            root_title: "All docs".to_owned(),
            root_url: "https://docs.mapbox.com".to_owned(),
            platforms: ["iOS", "Android", "Vision", "Unity"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Builds breadcrumb trails from a [`NavigationIndex`].
///
/// Stateless apart from its configuration; one resolver can serve every
/// page of a site.
#[derive(Debug)]
pub struct BreadcrumbResolver {
    config: BreadcrumbConfig,
    platform_suffix: Option<Regex>,
}

impl BreadcrumbResolver {
    /// Create a resolver.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Pattern`] if the platform qualifier
    /// pattern cannot be compiled.
    pub fn new(mut config: BreadcrumbConfig) -> Result<Self, NavigationError> {
        config.base_url = config.base_url.trim_end_matches('/').to_owned();

        let platform_suffix = if config.platforms.is_empty() {
            None
        } else {
            let alternatives = config
                .platforms
                .iter()
                .map(|platform| regex::escape(platform.trim()))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\s+for\s+(?:{alternatives})\s*$"))?)
        };

        Ok(Self {
            config,
            platform_suffix,
        })
    }

    /// Resolver configuration.
    #[must_use]
    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// Strip a trailing `" for <Platform>"` qualifier from a section title.
    ///
    /// Titles naming a platform outside the configured set are returned
    /// unchanged.
    #[must_use]
    pub fn trim_section_title(&self, title: &str) -> String {
        match &self.platform_suffix {
            Some(re) => re.replace(title, "").into_owned(),
            None => title.to_owned(),
        }
    }

    /// Build the breadcrumb trail for a page.
    ///
    /// # Arguments
    ///
    /// * `index` - Site navigation
    /// * `current_path` - URL path of the page being rendered
    /// * `title` - Page title from front matter
    ///
    /// Section and parent crumbs are omitted when the page has no
    /// navigation entry; the trail is never empty.
    #[must_use]
    pub fn build_breadcrumbs(
        &self,
        index: &NavigationIndex,
        current_path: &str,
        title: &str,
    ) -> Vec<Crumb> {
        let mut candidates = Vec::with_capacity(5);

        candidates.push(Crumb::new(
            self.config.root_title.as_str(),
            self.config.root_url.as_str(),
        ));
        candidates.push(Crumb::new(
            self.config.site_name.as_str(),
            format!("{}/", self.config.base_url),
        ));

        if let Some(section) = index.has_section(current_path) {
            candidates.push(Crumb::new(
                self.trim_section_title(&section.title),
                self.section_href(&section.path),
            ));
        }

        if let Some(parent) = Self::parent_entry(index, current_path) {
            candidates.push(Crumb::new(
                parent.title.as_str(),
                self.parent_href(&parent.path),
            ));
        }

        candidates.push(Crumb::new(title, current_path));

        create_unique_crumbs(candidates)
    }

    /// Navigation entry of the page's parent, if it has a title.
    fn parent_entry<'a>(
        index: &'a NavigationIndex,
        current_path: &str,
    ) -> Option<&'a NavigationEntry> {
        let parent_path = index.find_parent_path(current_path)?;
        let Some(parent) = index.entry(parent_path) else {
            tracing::debug!(
                path = current_path,
                parent = parent_path,
                "Parent has no navigation entry"
            );
            return None;
        };
        (!parent.title.trim().is_empty()).then_some(parent)
    }

    /// Section href, always `<base>/<path>/`.
    fn section_href(&self, path: &str) -> String {
        let relative = path.trim_matches('/');
        if relative.is_empty() {
            format!("{}/", self.config.base_url)
        } else {
            format!("{}/{relative}/", self.config.base_url)
        }
    }

    /// Parent href (`<base>/<path>/`).
    ///
    /// Paths already carrying the base URL are not prefixed again.
    fn parent_href(&self, path: &str) -> String {
        let base = self.config.base_url.as_str();
        let trimmed = path.trim_end_matches('/');

        let carries_base = !base.is_empty()
            && trimmed
                .strip_prefix(base)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if carries_base {
            return format!("{trimmed}/");
        }

        self.section_href(trimmed)
    }
}
