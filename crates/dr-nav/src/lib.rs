//! Navigation index and breadcrumb resolution for documentation sites.
//!
//! This crate provides:
//! - [`NavigationIndex`]: page hierarchy with section and parent lookups
//! - [`BreadcrumbResolver`]: de-duplicated breadcrumb trails
//! - [`load_navigation`]: validated loading of navigation files
//! - [`resolve_page`]: layout, scope and breadcrumbs for a page shell
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dr_nav::{BreadcrumbConfig, BreadcrumbResolver, NavigationIndex};
//!
//! let mut ios = NavigationIndex::builder();
//! ios.add_entry("/docs/ios/setup", Some("/docs/ios"), "Setup")?;
//!
//! let mut builder = NavigationIndex::builder();
//! builder.add_section("/docs/ios", "Guides for iOS", ios.build())?;
//! let index = builder.build();
//!
//! let resolver = BreadcrumbResolver::new(BreadcrumbConfig::default())?;
//! let crumbs = resolver.build_breadcrumbs(&index, "/docs/ios/setup", "Setup");
//!
//! assert_eq!(crumbs[2].title, "Guides");
//! # Ok(())
//! # }
//! ```

mod crumbs;
mod error;
mod front_matter;
mod index;
mod loader;
mod page;

pub use crumbs::{BreadcrumbConfig, BreadcrumbResolver, Crumb, create_unique_crumbs};
pub use error::NavigationError;
pub use front_matter::{FrontMatter, FrontMatterError, Layout, LayoutOptions};
pub use index::{
    NavigationEntry, NavigationIndex, NavigationIndexBuilder, Section, SectionInfo,
    normalize_path,
};
pub use loader::{NavigationFormat, load_navigation, parse_navigation};
pub use page::{PageView, resolve_page};
