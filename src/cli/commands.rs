//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::{MergeOptions, MergeReport, SiteOutcome};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output::{self, ConsoleReporter};
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run {
            master_site,
            sites,
            unify_sites,
            dry_run,
        }) => cmd_run(master_site, sites, *unify_sites, *dry_run),
        Some(Commands::Nav { site }) => cmd_nav(site),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see \"mkdocs-merge --help\"".to_string(),
        )),
    }
}

fn container() -> CliResult<ServiceContainer> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings, Arc::new(ConsoleReporter)))
}

#[instrument]
fn cmd_run(master_site: &Path, sites: &[PathBuf], unify: bool, dry_run: bool) -> CliResult<()> {
    let container = container()?;
    let options = MergeOptions {
        unify: unify || container.settings.unify_sites,
        dry_run,
    };

    let report = container
        .merge_service()
        .run(master_site, sites, options)
        .map_err(|e| {
            // fatal conditions the service has already reported
            let reported = matches!(
                e,
                ApplicationError::NoSites
                    | ApplicationError::MasterConfigMissing(_)
                    | ApplicationError::LegacyNavigation(_)
            );
            if reported {
                CliError::Reported(InfraError::Application(e))
            } else {
                e.into()
            }
        })?;

    print_summary(&report);
    if dry_run {
        output::info(&output::nav_tree("nav", &report.document.navigation));
    }
    Ok(())
}

fn print_summary(report: &MergeReport) {
    output::header("Merge summary");
    for outcome in &report.outcomes {
        match outcome {
            SiteOutcome::Merged {
                site,
                identity,
                destination,
            } => output::success_detail(&format!(
                "{} -> \"{}\" ({})",
                site.display(),
                identity.name,
                destination.display()
            )),
            SiteOutcome::Skipped { site, reason } => {
                output::failure(&format!("{}: {}", site.display(), reason))
            }
        }
    }
    if report.replaced > 0 {
        output::detail(&format!("{} existing section(s) replaced", report.replaced));
    }
    if report.written {
        output::action("Updated", &report.master_config.display());
    }
}

#[instrument]
fn cmd_nav(site: &Path) -> CliResult<()> {
    let container = container()?;
    let (identity, nav) = container.merge_service().inspect_site(site)?;
    output::action("Site", &identity.name);
    output::action("Root", &identity.root);
    output::info(&output::nav_tree("nav", &nav));
    Ok(())
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "no home directory, global config unavailable".to_string(),
                ))
            }
        },
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no home directory, global config unavailable".to_string())
            })?;
            if path.exists() && !force {
                return Err(CliError::InvalidArgs(format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
