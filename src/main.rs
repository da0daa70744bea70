//! Vitrine CLI - interactive wholesale storefront
//!
//! Usage: vitrine [COMMAND]
//!
//! Commands:
//!   browse   Open the interactive storefront session (default)
//!   catalog  Parse and display the product catalog
//!
//! Running `vitrine` with no command opens the storefront.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

use ui::context::ColorWhen;

/// Vitrine - interactive wholesale storefront
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog source file (overrides configuration)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, value_enum)]
    color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive storefront session (default)
    Browse,

    /// Parse and display the product catalog (debugging)
    Catalog {
        /// Machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let mut config = vitrine::Config::load_or_default(Some(&cwd));
    if let Some(source) = cli.source {
        config.catalog.source = source;
    }

    match cli.command {
        Some(Commands::Catalog { json }) => {
            commands::catalog::cmd_catalog(&config, cli.color, json, cli.verbose)
        }
        Some(Commands::Browse) | None => commands::browse::cmd_browse(config, cli.color, cli.verbose),
    }
}
