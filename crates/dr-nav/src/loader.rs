//! Navigation file loading.
//!
//! Navigation is produced by the site build as JSON (or written by hand as
//! YAML). The file is validated once here; everything downstream trusts the
//! resulting [`NavigationIndex`].
//!
//! # Format
//!
//! ```json
//! {
//!   "title": "Maps SDK",
//!   "hierarchy": {
//!     "/docs/help": { "parent": "/docs", "title": "Help" }
//!   },
//!   "sections": [
//!     {
//!       "path": "/docs/ios",
//!       "title": "Guides for iOS",
//!       "hierarchy": { "/docs/ios/setup": { "parent": "/docs/ios", "title": "Setup" } }
//!     }
//!   ]
//! }
//! ```
//!
//! `sections` is a list so that its order is the lookup order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::NavigationError;
use crate::index::{NavigationIndex, NavigationIndexBuilder};

/// Serialization format of a navigation file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl NavigationFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Raw navigation file as deserialized.
#[derive(Debug, Deserialize)]
struct NavigationFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    hierarchy: BTreeMap<String, RawEntry>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    parent: Option<String>,
    title: String,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    path: String,
    title: String,
    #[serde(default)]
    hierarchy: BTreeMap<String, RawEntry>,
}

/// Load a navigation index from a JSON or YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, fails to parse, or fails validation.
pub fn load_navigation(path: &Path) -> Result<NavigationIndex, NavigationError> {
    let format = NavigationFormat::from_path(path)
        .ok_or_else(|| NavigationError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| NavigationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let index = parse_navigation(&content, format)?;
    tracing::info!(
        path = %path.display(),
        entries = index.len(),
        sections = index.sections().count(),
        "Loaded navigation"
    );
    Ok(index)
}

/// Parse and validate navigation content.
///
/// # Errors
///
/// Returns an error if the content fails to parse or fails validation.
pub fn parse_navigation(
    content: &str,
    format: NavigationFormat,
) -> Result<NavigationIndex, NavigationError> {
    let file: NavigationFile = match format {
        NavigationFormat::Json => serde_json::from_str(content)?,
        NavigationFormat::Yaml => serde_yaml::from_str(content)?,
    };
    build_index(file)
}

fn build_index(file: NavigationFile) -> Result<NavigationIndex, NavigationError> {
    let mut builder = NavigationIndex::builder();
    if let Some(title) = file.title {
        builder = builder.with_title(title);
    }
    add_hierarchy(&mut builder, file.hierarchy, "hierarchy")?;

    for section in file.sections {
        if section.path.trim().trim_matches('/').is_empty() {
            return Err(NavigationError::Validation(
                "sections[].path cannot be empty".to_owned(),
            ));
        }
        require_title(&section.title, &format!("sections[{}].title", section.path))?;

        let mut nested = NavigationIndex::builder().with_title(section.title.as_str());
        add_hierarchy(
            &mut nested,
            section.hierarchy,
            &format!("sections[{}].hierarchy", section.path),
        )?;
        builder.add_section(&section.path, section.title, nested.build())?;
    }

    Ok(builder.build())
}

fn add_hierarchy(
    builder: &mut NavigationIndexBuilder,
    hierarchy: BTreeMap<String, RawEntry>,
    field: &str,
) -> Result<(), NavigationError> {
    for (path, entry) in hierarchy {
        require_title(&entry.title, &format!("{field}[{path}].title"))?;
        builder.add_entry(&path, entry.parent.as_deref(), entry.title)?;
    }
    Ok(())
}

fn require_title(title: &str, field: &str) -> Result<(), NavigationError> {
    if title.trim().is_empty() {
        return Err(NavigationError::Validation(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
