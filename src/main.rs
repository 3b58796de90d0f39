//! revup - MODX Revolution install orchestrator
//!
//! Resolves a site source (extracted tree, zip archive, or git checkout
//! needing a build step), relocates folders to custom destinations, decides
//! between a fresh install and an upgrade, and drives the product's own
//! setup program to completion.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod installer;
mod instance;
mod path_utils;
mod process;
mod progress;
mod source;
mod ui;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
