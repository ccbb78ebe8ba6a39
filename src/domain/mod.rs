//! Domain layer: navigation trees and site identity
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod aggregate;
pub mod document;
pub mod entities;
pub mod error;
pub mod navigation;

pub use aggregate::{fold_in, strip_existing};
pub use document::{MasterDocument, SiteConfig, SiteNav};
pub use entities::*;
pub use error::DomainError;
pub use navigation::{nav_to_yaml, parse_nav, prefix_all, NavNode};
