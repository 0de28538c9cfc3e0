//! `dr page` command implementation.

use std::path::PathBuf;

use clap::Args;
use dr_nav::{FrontMatter, resolve_page};

use super::site::{SiteArgs, read_front_matter};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// URL path of the page (e.g., /docs/ios/setup).
    path: String,

    /// Markdown or YAML file with the page front matter.
    #[arg(short, long)]
    front_matter: Option<PathBuf>,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl PageArgs {
    /// Execute the page command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load()?;

        let front_matter = match &self.front_matter {
            Some(path) => read_front_matter(path)?,
            None => FrontMatter::default(),
        };

        let view = resolve_page(&site.index, &site.resolver, &self.path, &front_matter);
        output.result(&serde_json::to_string_pretty(&view)?)?;
        Ok(())
    }
}
