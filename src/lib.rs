//! Merge multiple MkDocs sites into a single master site.
//!
//! Every child site's docs folder is copied into the master's docs folder under
//! the site's root, its navigation is prefixed with that root, and the result is
//! added to the master navigation as one top-level section. Merging a site again
//! replaces its section instead of adding a second one.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
