//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

const LONG_ABOUT: &str = "\
Merge the sources of multiple MkDocs sites into a single one, converting each of
the given sites into a sub-site of the master site.

The master's mkdocs.yml is kept as is, except for its navigation: every merged
site becomes one top-level section. Merging a site again replaces its section.";

const UNIFY_HELP: &str = "Unify sites with the same \"site_name\" into a single sub-site. \
Contents of unified sub-sites are stored in the same sub-site folder";

/// Merge multiple MkDocs sites into a single master site
#[derive(Parser, Debug)]
#[command(name = "mkdocs-merge")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge sites into the master site
    Run {
        /// Base site all other sites are merged into
        #[arg(value_hint = ValueHint::DirPath)]
        master_site: PathBuf,

        /// Sites to merge, each becomes a sub-site of the master
        #[arg(value_hint = ValueHint::DirPath)]
        sites: Vec<PathBuf>,

        #[arg(short = 'u', long, help = UNIFY_HELP)]
        unify_sites: bool,

        /// Show the resulting navigation without copying files or writing mkdocs.yml
        #[arg(long)]
        dry_run: bool,
    },

    /// Show a site's navigation as it would be merged
    Nav {
        /// Site directory
        #[arg(value_hint = ValueHint::DirPath)]
        site: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
    /// Write a commented template to the global config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
