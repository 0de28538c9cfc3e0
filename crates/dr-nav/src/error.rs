//! Error types for navigation loading.

use std::path::PathBuf;

/// Error returned when a navigation index cannot be built.
///
/// Lookups never fail: a path missing from the index is a normal case
/// and is handled by omission. These errors only come from loading and
/// building an index.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// I/O error reading a navigation file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Navigation file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// JSON parsing error.
    #[error("Invalid JSON navigation: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("Invalid YAML navigation: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is neither JSON nor YAML.
    #[error("Unsupported navigation format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Same page path registered twice in one index.
    #[error("Duplicate navigation path: {0}")]
    DuplicatePath(String),
    /// Same section path registered twice.
    #[error("Duplicate section: {0}")]
    DuplicateSection(String),
    /// Navigation data failed validation.
    #[error("Invalid navigation: {0}")]
    Validation(String),
    /// Platform qualifier pattern failed to compile.
    #[error("Invalid platform pattern: {0}")]
    Pattern(#[from] regex::Error),
}
