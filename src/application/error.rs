//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
///
/// Every variant aborts the whole merge run.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("no sites to merge: specify one or more sites to merge into the master site")]
    NoSites,

    #[error("master site configuration not found: {0}")]
    MasterConfigMissing(PathBuf),

    #[error("invalid master site configuration {path}: {source}")]
    MasterConfigInvalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("unsupported legacy configuration {0}: uses 'pages' instead of 'nav'")]
    LegacyNavigation(PathBuf),

    #[error("{0}")]
    Site(#[from] SkipReason),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Why a child site was left out of a merge.
///
/// Recovered locally: the site is skipped and the run continues.
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("site configuration not found: {0}")]
    ConfigMissing(PathBuf),

    #[error("cannot read site configuration {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("no 'nav' entry in site configuration: {0}")]
    NavigationMissing(PathBuf),

    #[error("docs folder not found: {0}")]
    DocsFolderMissing(PathBuf),

    #[error(
        "error copying files of site \"{site_name}\": {source}{}",
        removed_note(.section_removed)
    )]
    CopyFailed {
        site_name: String,
        /// The site's previous master section was already stripped
        section_removed: bool,
        #[source]
        source: std::io::Error,
    },
}

fn removed_note(section_removed: &bool) -> &'static str {
    if *section_removed {
        "; its previous section was removed from the master navigation"
    } else {
        ""
    }
}
