//! Page resolution.
//!
//! [`resolve_page`] gathers everything the page shell needs before any
//! markup is produced: the defaulted layout, merged layout options, the
//! navigation scope shown in the sidebar, and the breadcrumb trail.

use serde::Serialize;

use crate::crumbs::{BreadcrumbResolver, Crumb};
use crate::front_matter::{FrontMatter, Layout, LayoutOptions};
use crate::index::{NavigationIndex, SectionInfo};

/// Resolved page shell data.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Page layout after defaulting.
    pub layout: Layout,
    /// Layout options after merging front matter overrides.
    pub options: LayoutOptions,
    /// Section the page belongs to (multi-structured sites only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionInfo>,
    /// Parent page path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_path: Option<String>,
    /// Section path whose navigation is shown, `None` for the root navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Breadcrumb trail, `None` when the page hides breadcrumbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Crumb>>,
    /// Render the sidebar.
    pub show_sidebar: bool,
    /// Render the page heading.
    pub show_title: bool,
    /// Render the feedback widget.
    pub show_feedback: bool,
    /// Pad the content below the shell header.
    pub shell_header_buffer: bool,
}

/// Resolve the page shell data for a page.
///
/// # Arguments
///
/// * `index` - Site navigation
/// * `resolver` - Breadcrumb resolver for the site
/// * `path` - URL path of the page
/// * `front_matter` - Page front matter as parsed; it is not modified
///
/// The breadcrumb title falls back to the navigation entry title, then to
/// the path itself, when the front matter has none.
#[must_use]
pub fn resolve_page(
    index: &NavigationIndex,
    resolver: &BreadcrumbResolver,
    path: &str,
    front_matter: &FrontMatter,
) -> PageView {
    let front_matter = front_matter.with_defaults();
    let layout = front_matter.layout.unwrap_or_default();
    let options = LayoutOptions::for_layout(front_matter.effective_layout()).merge(&front_matter);

    let section = index.has_section(path).cloned();
    let parent_path = index.find_parent_path(path).map(str::to_owned);
    let scope = section.as_ref().map(|s| s.path.clone());

    let breadcrumbs = if front_matter.hide_breadcrumbs.unwrap_or(false) {
        None
    } else {
        let title = front_matter
            .title
            .as_deref()
            .or_else(|| index.entry(path).map(|entry| entry.title.as_str()))
            .unwrap_or(path);
        Some(resolver.build_breadcrumbs(index, path, title))
    };

    PageView {
        layout,
        show_title: !options.hide_title,
        show_feedback: !options.hide_feedback,
        options,
        section,
        parent_path,
        scope,
        breadcrumbs,
        show_sidebar: !front_matter.hide_sidebar.unwrap_or(false),
        shell_header_buffer: !front_matter.no_shell_header_buffer.unwrap_or(false),
    }
}
