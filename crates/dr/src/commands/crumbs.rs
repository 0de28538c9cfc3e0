//! `dr crumbs` command implementation.

use std::path::PathBuf;

use clap::Args;
use dr_nav::Crumb;

use super::site::{SiteArgs, read_front_matter};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the crumbs command.
#[derive(Args)]
pub(crate) struct CrumbsArgs {
    /// URL path of the page (e.g., /docs/ios/setup).
    path: String,

    /// Page title (default: front matter title, then navigation title).
    #[arg(short, long)]
    title: Option<String>,

    /// Markdown or YAML file to read the page title from.
    #[arg(short, long, conflicts_with = "title")]
    front_matter: Option<PathBuf>,

    /// Print the trail as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl CrumbsArgs {
    /// Execute the crumbs command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load()?;

        let front_matter_title = match &self.front_matter {
            Some(path) => read_front_matter(path)?.title,
            None => None,
        };
        let title = self
            .title
            .or(front_matter_title)
            .or_else(|| site.index.entry(&self.path).map(|e| e.title.clone()))
            .unwrap_or_else(|| self.path.clone());

        let crumbs = site
            .resolver
            .build_breadcrumbs(&site.index, &self.path, &title);

        if self.json {
            output.result(&serde_json::to_string_pretty(&crumbs)?)?;
        } else {
            print_trail(output, &crumbs)?;
        }
        Ok(())
    }
}

/// Print one crumb per line, the current page highlighted.
fn print_trail(output: &Output, crumbs: &[Crumb]) -> Result<(), CliError> {
    let Some((current, ancestors)) = crumbs.split_last() else {
        return Ok(());
    };
    for crumb in ancestors {
        output.result(&format_crumb(crumb))?;
    }
    output.result_highlight(&format_crumb(current))?;
    Ok(())
}

fn format_crumb(crumb: &Crumb) -> String {
    format!("{}  {}", crumb.title, crumb.path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_crumb() {
        let crumb = Crumb::new("Guides", "/docs/ios/");
        assert_eq!(format_crumb(&crumb), "Guides  /docs/ios/");
    }
}
