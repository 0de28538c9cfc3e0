//! Page front matter and layout options.
//!
//! Front matter is the YAML block at the top of a Markdown page. It picks
//! the page layout and overrides individual layout options.
//!
//! # Defaults
//!
//! Defaulting never mutates the parsed front matter:
//! [`FrontMatter::with_defaults`] returns a derived copy, and
//! [`LayoutOptions::merge`] overlays the options a page sets on top of the
//! per-layout defaults.

use serde::{Deserialize, Serialize};

/// Page layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// Regular content page.
    #[default]
    Page,
    /// Single example page.
    Example,
    /// Index of example cards.
    ExampleIndex,
    /// Full-width page.
    Full,
}

/// Page front matter.
///
/// Every field is optional; `None` means the page did not set it. Unknown
/// keys are ignored, unknown `layout` values are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Position in the top-level navigation tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_order: Option<u32>,
    /// Position in the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_title: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_feedback: Option<bool>,
    /// CSS classes for the sidebar container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_cards: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_width_cards: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_col_size: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_card_language: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_card_description: Option<bool>,
    /// Filter names offered above the example cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_filters: Option<Vec<String>>,
    /// Drop the prose styling from the content area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_prose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_shell_header_buffer: Option<bool>,
    /// Leave the page out of the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_from_nav: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_breadcrumbs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_sidebar: Option<bool>,
}

/// Error type for front matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

impl FrontMatter {
    /// Parse front matter from YAML content.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a field has the wrong type.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontMatterError::Parse(format!("Invalid front matter: {e}")))
    }

    /// Parse the leading `---` block of a Markdown document.
    ///
    /// Documents without a front matter block return a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not closed or is not valid front matter.
    pub fn from_markdown(content: &str) -> Result<Self, FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content.lines();
        if lines.next().map(str::trim_end) != Some("---") {
            return Ok(Self::default());
        }

        let mut block = Vec::new();
        for line in lines {
            if line.trim_end() == "---" {
                return Self::from_yaml(&block.join("\n"));
            }
            block.push(line);
        }

        Err(FrontMatterError::Parse(
            "Unterminated front matter block".to_owned(),
        ))
    }

    /// Derived copy with defaults applied (`layout` falls back to `page`).
    #[must_use]
    pub fn with_defaults(&self) -> Self {
        Self {
            layout: Some(self.layout.unwrap_or_default()),
            ..self.clone()
        }
    }

    /// Layout used to pick layout options.
    ///
    /// An `example` page with a `navOrder` is a top-level example listing
    /// and uses the `exampleIndex` options.
    #[must_use]
    pub fn effective_layout(&self) -> Layout {
        match self.layout.unwrap_or_default() {
            Layout::Example if self.nav_order.is_some() => Layout::ExampleIndex,
            layout => layout,
        }
    }
}

/// Resolved layout options for a page.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// CSS classes for the sidebar container.
    pub sidebar_theme: String,
    /// Hide the page heading.
    pub hide_title: bool,
    /// Hide the feedback widget.
    pub hide_feedback: bool,
    /// Render child pages as cards.
    pub show_cards: bool,
    /// Let cards span the full content width.
    pub full_width_cards: bool,
    /// Grid column size of each card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_col_size: Option<u8>,
    /// Omit the language label on cards.
    pub hide_card_language: bool,
    /// Omit the description on cards.
    pub hide_card_description: bool,
    /// Filter names offered above the cards.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub show_filters: Vec<String>,
    /// Drop the prose styling from the content area.
    pub un_prose: bool,
}

impl LayoutOptions {
    /// Default options for a layout.
    #[must_use]
    pub fn for_layout(layout: Layout) -> Self {
        let base = Self {
            sidebar_theme: "bg-gray-faint".to_owned(),
            hide_title: false,
            hide_feedback: false,
            show_cards: false,
            full_width_cards: false,
            card_col_size: None,
            hide_card_language: false,
            hide_card_description: false,
            show_filters: Vec::new(),
            un_prose: false,
        };

        match layout {
            Layout::Page | Layout::Example => base,
            Layout::ExampleIndex => Self {
                show_cards: true,
                card_col_size: Some(4),
                ..base
            },
            Layout::Full => Self {
                sidebar_theme: String::new(),
                un_prose: true,
                ..base
            },
        }
    }

    /// Overlay every option the front matter sets.
    #[must_use]
    pub fn merge(mut self, front_matter: &FrontMatter) -> Self {
        if let Some(theme) = &front_matter.sidebar_theme {
            self.sidebar_theme.clone_from(theme);
        }
        if let Some(value) = front_matter.hide_title {
            self.hide_title = value;
        }
        if let Some(value) = front_matter.hide_feedback {
            self.hide_feedback = value;
        }
        if let Some(value) = front_matter.show_cards {
            self.show_cards = value;
        }
        if let Some(value) = front_matter.full_width_cards {
            self.full_width_cards = value;
        }
        if let Some(value) = front_matter.card_col_size {
            self.card_col_size = Some(value);
        }
        if let Some(value) = front_matter.hide_card_language {
            self.hide_card_language = value;
        }
        if let Some(value) = front_matter.hide_card_description {
            self.hide_card_description = value;
        }
        if let Some(filters) = &front_matter.show_filters {
            self.show_filters.clone_from(filters);
        }
        if let Some(value) = front_matter.un_prose {
            self.un_prose = value;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_yaml_empty_returns_default() {
        assert_eq!(FrontMatter::from_yaml("  \n").unwrap(), FrontMatter::default());
    }

    #[test]
    fn test_from_yaml_camel_case_fields() {
        let yaml = r"
title: Add markers
layout: exampleIndex
navOrder: 2
hideBreadcrumbs: true
sidebarTheme: bg-white
cardColSize: 6
";
        let fm = FrontMatter::from_yaml(yaml).unwrap();

        assert_eq!(fm.title.as_deref(), Some("Add markers"));
        assert_eq!(fm.layout, Some(Layout::ExampleIndex));
        assert_eq!(fm.nav_order, Some(2));
        assert_eq!(fm.hide_breadcrumbs, Some(true));
        assert_eq!(fm.sidebar_theme.as_deref(), Some("bg-white"));
        assert_eq!(fm.card_col_size, Some(6));
        assert_eq!(fm.hide_sidebar, None);
    }

    #[test]
    fn test_from_yaml_ignores_unknown_keys() {
        let fm = FrontMatter::from_yaml("title: A\nheadings: []\ncustom: 1").unwrap();
        assert_eq!(fm.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_layout() {
        let err = FrontMatter::from_yaml("layout: sidebar").unwrap_err();
        assert!(err.to_string().contains("Invalid front matter"));
    }

    #[test]
    fn test_from_yaml_rejects_wrong_type() {
        assert!(FrontMatter::from_yaml("hideSidebar: maybe").is_err());
    }

    #[test]
    fn test_from_markdown() {
        let markdown = "---\ntitle: Setup\nlayout: full\n---\n\n# Setup\n";
        let fm = FrontMatter::from_markdown(markdown).unwrap();

        assert_eq!(fm.title.as_deref(), Some("Setup"));
        assert_eq!(fm.layout, Some(Layout::Full));
    }

    #[test]
    fn test_from_markdown_without_block() {
        let fm = FrontMatter::from_markdown("# Just content\n").unwrap();
        assert_eq!(fm, FrontMatter::default());
    }

    #[test]
    fn test_from_markdown_unterminated_block() {
        let err = FrontMatter::from_markdown("---\ntitle: Setup\n").unwrap_err();
        assert!(err.to_string().contains("Unterminated"));
    }

    #[test]
    fn test_with_defaults_sets_page_layout_without_mutating() {
        let fm = FrontMatter {
            title: Some("A".to_owned()),
            ..Default::default()
        };

        let defaulted = fm.with_defaults();

        assert_eq!(defaulted.layout, Some(Layout::Page));
        assert_eq!(defaulted.title.as_deref(), Some("A"));
        assert_eq!(fm.layout, None);
    }

    #[test]
    fn test_with_defaults_keeps_explicit_layout() {
        let fm = FrontMatter {
            layout: Some(Layout::Full),
            ..Default::default()
        };
        assert_eq!(fm.with_defaults().layout, Some(Layout::Full));
    }

    #[test]
    fn test_effective_layout_example_with_nav_order() {
        let fm = FrontMatter {
            layout: Some(Layout::Example),
            nav_order: Some(1),
            ..Default::default()
        };
        assert_eq!(fm.effective_layout(), Layout::ExampleIndex);
    }

    #[test]
    fn test_effective_layout_example_without_nav_order() {
        let fm = FrontMatter {
            layout: Some(Layout::Example),
            ..Default::default()
        };
        assert_eq!(fm.effective_layout(), Layout::Example);
    }

    #[test]
    fn test_effective_layout_page_with_nav_order() {
        let fm = FrontMatter {
            nav_order: Some(1),
            ..Default::default()
        };
        assert_eq!(fm.effective_layout(), Layout::Page);
    }

    #[test]
    fn test_layout_options_defaults() {
        assert!(!LayoutOptions::for_layout(Layout::Page).show_cards);
        assert!(LayoutOptions::for_layout(Layout::ExampleIndex).show_cards);
        assert!(LayoutOptions::for_layout(Layout::Full).un_prose);
        assert_eq!(LayoutOptions::for_layout(Layout::Full).sidebar_theme, "");
    }

    #[test]
    fn test_layout_options_merge_overrides_set_fields_only() {
        let fm = FrontMatter {
            show_cards: Some(false),
            sidebar_theme: Some("bg-white".to_owned()),
            hide_card_language: Some(true),
            show_filters: Some(vec!["language".to_owned(), "topic".to_owned()]),
            ..Default::default()
        };

        let options = LayoutOptions::for_layout(Layout::ExampleIndex).merge(&fm);

        assert!(!options.show_cards);
        assert_eq!(options.sidebar_theme, "bg-white");
        assert_eq!(options.card_col_size, Some(4));
        assert!(options.hide_card_language);
        assert!(!options.hide_card_description);
        assert_eq!(options.show_filters, vec!["language", "topic"]);
        assert!(!options.un_prose);
    }

    #[test]
    fn test_from_yaml_card_options() {
        let yaml = "hideCardDescription: true\nshowFilters: [language, level]\n";
        let fm = FrontMatter::from_yaml(yaml).unwrap();

        assert_eq!(fm.hide_card_description, Some(true));
        assert_eq!(fm.hide_card_language, None);
        assert_eq!(
            fm.show_filters,
            Some(vec!["language".to_owned(), "level".to_owned()])
        );
    }
}
