//! `dr check` command implementation.

use clap::Args;
use dr_nav::{NavigationEntry, NavigationIndex};

use super::site::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loading validates the navigation file; dangling parent links are
    /// reported as warnings since their crumbs are simply omitted.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load()?;

        if let Some(path) = &site.config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Navigation: {}",
            site.config.navigation_path.display()
        ));
        output.info(&format!("Entries: {}", site.index.len()));
        for section in site.index.sections() {
            let info = section.info();
            output.info(&format!(
                "Section {} \"{}\" ({} entries, crumb \"{}\")",
                info.path,
                info.title,
                section.index().len(),
                site.resolver.trim_section_title(&info.title)
            ));
        }

        let dangling = dangling_parents(&site.index);
        for entry in &dangling {
            output.warning(&format!(
                "{}: parent {} has no navigation entry",
                entry.path,
                entry.parent_path.as_deref().unwrap_or_default()
            ));
        }

        output.success(&format!(
            "Navigation is valid ({} dangling parent link(s))",
            dangling.len()
        ));
        Ok(())
    }
}

/// Entries whose parent is neither an entry nor a section root.
fn dangling_parents(index: &NavigationIndex) -> Vec<&NavigationEntry> {
    let sections = index.sections().map(|section| section.index());
    std::iter::once(index)
        .chain(sections)
        .flat_map(|nav| nav.entries())
        .filter(|entry| {
            entry.parent_path.as_deref().is_some_and(|parent| {
                index.entry(parent).is_none() && index.section(parent).is_none()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dangling_parents() {
        let mut ios = NavigationIndex::builder();
        ios.add_entry("/ios/setup", Some("/ios"), "Setup").unwrap();
        ios.add_entry("/ios/orphan", Some("/ios/missing"), "Orphan")
            .unwrap();

        let mut builder = NavigationIndex::builder();
        builder.add_entry("/help", None, "Help").unwrap();
        builder
            .add_entry("/help/faq", Some("/help"), "FAQ")
            .unwrap();
        builder
            .add_entry("/help/lost", Some("/gone"), "Lost")
            .unwrap();
        builder.add_section("/ios", "iOS", ios.build()).unwrap();
        let index = builder.build();

        let paths: Vec<_> = dangling_parents(&index)
            .into_iter()
            .map(|entry| entry.path.as_str())
            .collect();

        assert_eq!(paths, vec!["/help/lost", "/ios/orphan"]);
    }

    #[test]
    fn test_dangling_parents_empty_index() {
        assert!(dangling_parents(&NavigationIndex::default()).is_empty());
    }
}
