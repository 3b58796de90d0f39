//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// revup - MODX Revolution install orchestrator
///
/// Build and install or upgrade MODX Revolution sites from a zip archive,
/// an extracted tree, or a git checkout.
#[derive(Parser, Debug)]
#[command(
    name = "revup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install orchestrator for MODX Revolution",
    long_about = "revup resolves a site source (extracted tree, zip archive, or git checkout \
                  needing a build step), relocates folders to custom destinations, decides \
                  between a fresh install and an upgrade, and drives the product's own setup \
                  program to completion.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  revup install ./modx-3.0.4-pl\n    \
                  revup install ./modx-3.0.4-pl.zip --set database_type=mysql\n    \
                  revup install ./revolution --config-file site.yaml\n    \
                  revup install ./modx --move core=/var/www/shared/core\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/revup-tools/revup"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install or upgrade a site from a source tree, archive, or checkout
    Install(InstallArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Fresh install from an extracted tree:\n    \
                  revup install ./modx-3.0.4-pl --set database_type=mysql --set https=0\n\n\
                  Install from a zip archive:\n    \
                  revup install ./modx-3.0.4-pl-advanced.zip --config-file site.yaml\n\n\
                  Build and install from a git checkout:\n    \
                  revup install ./revolution\n\n\
                  Relocate the core folder:\n    \
                  revup install ./modx --move core=/var/www/shared/core\n\n\
                  Use a custom configuration key:\n    \
                  revup install ./modx --config-key staging")]
pub struct InstallArgs {
    /// Site source: extracted tree, zip archive, or git checkout
    pub source: PathBuf,

    /// Setup configuration entry (repeatable), overrides --config-file
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// YAML file with setup config and folder destinations
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Relocate a source folder to a custom destination (repeatable)
    #[arg(long = "move", value_name = "FOLDER=PATH")]
    pub moves: Vec<String>,

    /// Configuration key of the installation
    #[arg(long, default_value = "config")]
    pub config_key: String,

    /// PHP interpreter used for the build, setup, and bootstrap runs
    #[arg(long, env = "REVUP_PHP", default_value = "php")]
    pub php: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    revup completions --shell bash > ~/.bash_completion.d/revup\n\n\
                  Generate zsh completions:\n    revup completions --shell zsh > ~/.zfunc/_revup\n\n\
                  Generate fish completions:\n    revup completions --shell fish > ~/.config/fish/completions/revup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
