//! dr CLI - documentation site navigation.
//!
//! Provides commands for:
//! - `crumbs`: Print the breadcrumb trail for a page
//! - `page`: Print the resolved page shell data for a page
//! - `check`: Validate a navigation file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, CrumbsArgs, PageArgs};
use output::Output;

/// dr - documentation site navigation.
#[derive(Parser)]
#[command(name = "dr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the breadcrumb trail for a page.
    Crumbs(CrumbsArgs),
    /// Print layout, navigation scope and breadcrumbs for a page as JSON.
    Page(PageArgs),
    /// Validate the navigation file.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Crumbs(args) => args.site.verbose,
            Self::Page(args) => args.site.verbose,
            Self::Check(args) => args.site.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Crumbs(args) => args.execute(&output),
        Commands::Page(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
