//! Tests for argument parsing and exit code mapping

use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;

use mkdocs_merge::application::{ApplicationError, SkipReason};
use mkdocs_merge::cli::{Cli, CliError, Commands};
use mkdocs_merge::exitcode;
use mkdocs_merge::infrastructure::InfraError;

#[test]
fn given_run_args_when_parsed_then_master_and_sites_in_order() {
    // Act
    let cli = Cli::try_parse_from(["mkdocs-merge", "run", "master", "a", "b", "-u"]).unwrap();

    // Assert
    match cli.command {
        Some(Commands::Run {
            master_site,
            sites,
            unify_sites,
            dry_run,
        }) => {
            assert_eq!(master_site, PathBuf::from("master"));
            assert_eq!(sites, vec![PathBuf::from("a"), PathBuf::from("b")]);
            assert!(unify_sites);
            assert!(!dry_run);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_run_without_sites_when_parsed_then_accepted() {
    // The empty site list is reported by the merge itself
    let cli = Cli::try_parse_from(["mkdocs-merge", "run", "master"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Run { ref sites, .. }) if sites.is_empty()));
}

#[test]
fn given_verbose_flags_when_parsed_then_counted() {
    let cli = Cli::try_parse_from(["mkdocs-merge", "-vv", "nav", "site"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

#[test]
fn given_run_without_master_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["mkdocs-merge", "run"]).is_err());
}

fn app(e: ApplicationError) -> CliError {
    CliError::from(e)
}

#[rstest]
#[case(app(ApplicationError::NoSites), exitcode::USAGE)]
#[case(app(ApplicationError::MasterConfigMissing(PathBuf::from("m"))), exitcode::NOINPUT)]
#[case(app(ApplicationError::LegacyNavigation(PathBuf::from("m"))), exitcode::DATAERR)]
#[case(app(SkipReason::NavigationMissing(PathBuf::from("s")).into()), exitcode::DATAERR)]
#[case(app(ApplicationError::Config { message: "bad".into() }), exitcode::CONFIG)]
#[case(CliError::Usage("no command".into()), exitcode::USAGE)]
#[case(CliError::Infra(InfraError::io("write", std::io::Error::other("x"))), exitcode::IOERR)]
fn given_error_when_exit_code_then_sysexits_value(#[case] error: CliError, #[case] code: i32) {
    assert_eq!(error.exit_code(), code);
}

#[test]
fn given_reported_error_when_checked_then_not_displayed_again() {
    let reported = CliError::Reported(InfraError::Application(ApplicationError::NoSites));
    assert!(!reported.needs_display());
    assert!(app(ApplicationError::NoSites).needs_display());
}
