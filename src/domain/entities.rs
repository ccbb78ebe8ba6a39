//! Domain entities: site identity and merged sections

use std::fmt;
use std::path::Path;

use crate::domain::navigation::NavNode;

/// Folder-safe identifier of a site.
///
/// Used as the sub-folder under the master's docs directory, as the path
/// prefix of the site's pages, and as the unify/dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteRoot(String);

impl SiteRoot {
    /// Derive a root from a display name: spaces become `_`, lower-cased.
    ///
    /// `"Project A"` → `project_a`
    pub fn from_name(name: &str) -> Self {
        Self(name.replace(' ', "_").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where a site's display name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// `site_name` in the site configuration
    Declared,
    /// Base name of the site directory
    DirectoryFallback,
}

/// Resolved name and root of a child site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub name: String,
    pub root: SiteRoot,
    pub source: NameSource,
}

impl SiteIdentity {
    /// Resolve identity from the declared name, falling back to the directory name.
    ///
    /// Empty or whitespace-only declared names count as absent.
    pub fn resolve(declared: Option<&str>, site_dir: &Path) -> Self {
        match declared.filter(|name| !name.trim().is_empty()) {
            Some(name) => Self::with_source(name.to_string(), NameSource::Declared),
            None => Self::with_source(dir_name(site_dir), NameSource::DirectoryFallback),
        }
    }

    fn with_source(name: String, source: NameSource) -> Self {
        let root = SiteRoot::from_name(&name);
        Self { name, root, source }
    }
}

fn dir_name(site_dir: &Path) -> String {
    site_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| site_dir.to_string_lossy().into_owned())
}

/// Top-level navigation group contributed by merged sites.
///
/// Carries its root explicitly so grouping never re-derives identity from
/// the display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSection {
    pub root: SiteRoot,
    pub title: String,
    pub children: Vec<NavNode>,
}

impl SiteSection {
    pub fn new(identity: &SiteIdentity, children: Vec<NavNode>) -> Self {
        Self {
            root: identity.root.clone(),
            title: identity.name.clone(),
            children,
        }
    }
}

impl From<SiteSection> for NavNode {
    fn from(section: SiteSection) -> Self {
        NavNode::Section {
            title: section.title,
            children: section.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_declared_name_wins() {
        let id = SiteIdentity::resolve(Some("Project A"), Path::new("sites/whatever"));
        assert_eq!(id.name, "Project A");
        assert_eq!(id.root.as_str(), "project_a");
        assert_eq!(id.source, NameSource::Declared);
    }

    #[test]
    fn test_fallback_to_directory_name() {
        let id = SiteIdentity::resolve(None, &PathBuf::from("sites/My Docs/"));
        assert_eq!(id.name, "My Docs");
        assert_eq!(id.root.as_str(), "my_docs");
        assert_eq!(id.source, NameSource::DirectoryFallback);
    }

    #[test]
    fn test_blank_declared_name_is_absent() {
        let id = SiteIdentity::resolve(Some("  "), Path::new("foo"));
        assert_eq!(id.name, "foo");
        assert_eq!(id.source, NameSource::DirectoryFallback);
    }
}
