//! Navigation index for page hierarchy lookups.
//!
//! The index maps page paths to their navigation entry (title and parent
//! path). Multi-structured sites additionally carry an ordered list of
//! sections, each with its own nested index.
//!
//! # Architecture
//!
//! Entries are stored in a flat `Vec<NavigationEntry>` with a `path_index`
//! `HashMap` for O(1) lookups. Sections are kept in a `Vec` so that lookups
//! across sections follow their defined order: when more than one section
//! could claim a path, the first one wins.
//!
//! Paths are normalized on insertion and lookup: a leading `/` is ensured
//! and trailing slashes are trimmed, so `/docs/ios/` and `docs/ios` address
//! the same entry.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;

use crate::error::NavigationError;

/// Navigation entry for a single page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// Normalized page path (e.g., "/docs/ios/setup").
    pub path: String,
    /// Normalized parent path, `None` for top-level pages.
    pub parent_path: Option<String>,
    /// Page title.
    pub title: String,
}

/// Section metadata for multi-structured sites.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    /// Section title as configured (e.g., "Guides for iOS").
    pub title: String,
    /// Normalized path to the section root (e.g., "/docs/ios").
    pub path: String,
}

/// A section together with its sub-navigation.
#[derive(Debug)]
pub struct Section {
    info: SectionInfo,
    index: NavigationIndex,
}

impl Section {
    /// Section metadata.
    #[must_use]
    pub fn info(&self) -> &SectionInfo {
        &self.info
    }

    /// Nested navigation index of this section.
    #[must_use]
    pub fn index(&self) -> &NavigationIndex {
        &self.index
    }

    /// Whether `path` belongs to this section.
    fn claims(&self, path: &str) -> bool {
        self.info.path == path || self.index.path_index.contains_key(path)
    }
}

/// Read-only navigation index.
///
/// Built once through [`NavigationIndexBuilder`] and shared freely
/// afterwards; nothing mutates it after [`NavigationIndexBuilder::build`].
#[derive(Debug, Default)]
pub struct NavigationIndex {
    title: Option<String>,
    entries: Vec<NavigationEntry>,
    path_index: HashMap<String, usize>,
    sections: Vec<Section>,
}

/// Normalize a URL path for lookups.
///
/// Ensures a leading slash and trims trailing slashes; the root stays `/`.
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim();
    let is_normalized = trimmed.len() == path.len()
        && path.starts_with('/')
        && (path == "/" || !path.ends_with('/'))
        && !path.starts_with("//");
    if is_normalized {
        return Cow::Borrowed(path);
    }

    let inner = trimmed.trim_matches('/');
    Cow::Owned(format!("/{inner}"))
}

impl NavigationIndex {
    /// Start building a new index.
    #[must_use]
    pub fn builder() -> NavigationIndexBuilder {
        NavigationIndexBuilder::new()
    }

    /// Site or section title, if configured.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Number of entries in this index (not counting sections).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this index has no entries and no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.sections.is_empty()
    }

    /// Entries of this index in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter()
    }

    /// Sections in their defined order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Get an entry of this index only, ignoring sections.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&NavigationEntry> {
        self.get_normalized(&normalize_path(path))
    }

    fn get_normalized(&self, path: &str) -> Option<&NavigationEntry> {
        self.path_index.get(path).map(|&i| &self.entries[i])
    }

    /// Get an entry from this index or, failing that, from the first
    /// section that has it.
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&NavigationEntry> {
        let path = normalize_path(path);
        self.get_normalized(&path).or_else(|| {
            self.sections
                .iter()
                .find_map(|section| section.index.get_normalized(&path))
        })
    }

    /// Get a section by its own path.
    #[must_use]
    pub fn section(&self, section_path: &str) -> Option<&Section> {
        let section_path = normalize_path(section_path);
        self.sections
            .iter()
            .find(|section| section.info.path == section_path)
    }

    /// Find the section a page belongs to.
    ///
    /// Returns `None` for single-structured sites or pages outside every
    /// section. Sections are checked in their defined order and the first
    /// one whose nested index contains `path` (or whose root is `path`)
    /// wins.
    #[must_use]
    pub fn has_section(&self, path: &str) -> Option<&SectionInfo> {
        let path = normalize_path(path);
        self.sections
            .iter()
            .find(|section| section.claims(&path))
            .map(|section| &section.info)
    }

    /// Find the parent path of a page.
    ///
    /// Returns `None` when the page is top-level or has no navigation
    /// entry. A missing entry is expected (utility pages are often left out
    /// of the navigation) and is not an error.
    #[must_use]
    pub fn find_parent_path(&self, path: &str) -> Option<&str> {
        let Some(entry) = self.entry(path) else {
            tracing::debug!(path, "No navigation entry for path");
            return None;
        };
        entry.parent_path.as_deref()
    }

    /// Navigation to show alongside a page.
    ///
    /// Returns the section's nested index when the page belongs to a
    /// section, otherwise this index.
    #[must_use]
    pub fn scoped(&self, path: &str) -> &NavigationIndex {
        let path = normalize_path(path);
        self.sections
            .iter()
            .find(|section| section.claims(&path))
            .map_or(self, |section| &section.index)
    }
}

/// Builder for constructing [`NavigationIndex`] instances.
#[derive(Debug, Default)]
pub struct NavigationIndexBuilder {
    title: Option<String>,
    entries: Vec<NavigationEntry>,
    path_index: HashMap<String, usize>,
    sections: Vec<Section>,
}

impl NavigationIndexBuilder {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a page entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Page path (normalized before storing)
    /// * `parent_path` - Parent page path, `None` for top-level pages
    /// * `title` - Page title
    ///
    /// # Returns
    ///
    /// Index of the added entry.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::DuplicatePath`] if the path is already
    /// registered and [`NavigationError::Validation`] if the page names
    /// itself as its parent.
    pub fn add_entry(
        &mut self,
        path: &str,
        parent_path: Option<&str>,
        title: impl Into<String>,
    ) -> Result<usize, NavigationError> {
        let path = normalize_path(path).into_owned();
        if self.path_index.contains_key(&path) {
            return Err(NavigationError::DuplicatePath(path));
        }

        let parent_path = parent_path
            .filter(|parent| !parent.trim().is_empty())
            .map(|parent| normalize_path(parent).into_owned());
        if parent_path.as_deref() == Some(path.as_str()) {
            return Err(NavigationError::Validation(format!(
                "{path} cannot be its own parent"
            )));
        }

        let idx = self.entries.len();
        self.path_index.insert(path.clone(), idx);
        self.entries.push(NavigationEntry {
            path,
            parent_path,
            title: title.into(),
        });

        Ok(idx)
    }

    /// Add a section with its nested index.
    ///
    /// Sections keep the order they are added in.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::DuplicateSection`] if a section with the
    /// same path already exists.
    pub fn add_section(
        &mut self,
        path: &str,
        title: impl Into<String>,
        index: NavigationIndex,
    ) -> Result<(), NavigationError> {
        let path = normalize_path(path).into_owned();
        if self.sections.iter().any(|section| section.info.path == path) {
            return Err(NavigationError::DuplicateSection(path));
        }

        self.sections.push(Section {
            info: SectionInfo {
                title: title.into(),
                path,
            },
            index,
        });

        Ok(())
    }

    /// Build the [`NavigationIndex`] instance.
    #[must_use]
    pub fn build(self) -> NavigationIndex {
        NavigationIndex {
            title: self.title,
            entries: self.entries,
            path_index: self.path_index,
            sections: self.sections,
        }
    }
}
