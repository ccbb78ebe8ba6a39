//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Reporter)
//! but are themselves concrete structs, not traits.

mod merge;

pub use merge::{MergeOptions, MergeReport, MergeService, SiteOutcome};
