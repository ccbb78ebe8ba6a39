//! Site configuration documents (`mkdocs.yml`)
//!
//! Child sites are read as plain data. The master keeps its source text and
//! only its `nav` block is regenerated, so every key it does not own survives a
//! rewrite byte for byte.

use std::ops::Range;

use serde_yaml::{Mapping, Value};

use crate::domain::error::DomainError;
use crate::domain::navigation::{nav_to_yaml, parse_nav, scalar_text, NavNode};

pub const SITE_NAME_KEY: &str = "site_name";
pub const DOCS_DIR_KEY: &str = "docs_dir";
pub const NAV_KEY: &str = "nav";
/// Navigation key used by MkDocs before 1.0
pub const LEGACY_NAV_KEY: &str = "pages";

/// Navigation section of a child site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteNav {
    Present(Vec<NavNode>),
    /// No `nav` key, or an empty one
    Missing,
    /// Only the deprecated `pages` key is present
    Legacy,
}

/// Child site configuration, read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: Option<String>,
    pub docs_dir: Option<String>,
    pub nav: SiteNav,
}

impl SiteConfig {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        let mapping = parse_mapping(content)?;
        let nodes = match non_null(&mapping, NAV_KEY) {
            Some(value) => parse_nav(value)?,
            None => Vec::new(),
        };
        let nav = if !nodes.is_empty() {
            SiteNav::Present(nodes)
        } else if non_null(&mapping, LEGACY_NAV_KEY).is_some() {
            SiteNav::Legacy
        } else {
            SiteNav::Missing
        };

        Ok(Self {
            site_name: non_null(&mapping, SITE_NAME_KEY).and_then(scalar_text),
            docs_dir: docs_dir(&mapping)?,
            nav,
        })
    }

    pub fn docs_dir_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.docs_dir.as_deref().unwrap_or(default)
    }
}

/// Master site configuration, rewritten after a merge.
///
/// Only the top-level `nav` block is regenerated; every other line of the
/// source, including comments and custom tags such as `!!python/name:`, is
/// written back untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterDocument {
    source: String,
    nav_span: Option<Range<usize>>,
    pub docs_dir: Option<String>,
    pub navigation: Vec<NavNode>,
}

impl MasterDocument {
    /// Parse the master configuration. A missing or empty `nav` is an empty
    /// navigation unless the legacy `pages` key is present.
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        let data = parse_mapping(content)?;
        let navigation = match non_null(&data, NAV_KEY) {
            Some(value) => parse_nav(value)?,
            None => Vec::new(),
        };
        if navigation.is_empty() && non_null(&data, LEGACY_NAV_KEY).is_some() {
            return Err(DomainError::LegacyNavigation);
        }

        let nav_span = nav_block(content);
        if data.contains_key(NAV_KEY) && nav_span.is_none() {
            return Err(DomainError::InvalidField {
                key: NAV_KEY.to_string(),
                expected: "top-level block entry".to_string(),
            });
        }

        Ok(Self {
            source: content.to_string(),
            nav_span,
            docs_dir: docs_dir(&data)?,
            navigation,
        })
    }

    pub fn docs_dir_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.docs_dir.as_deref().unwrap_or(default)
    }

    /// Source text with the current navigation in place of the loaded one.
    ///
    /// A document without `nav` gets the block appended.
    pub fn to_yaml_string(&self) -> Result<String, DomainError> {
        let mut block = Mapping::new();
        block.insert(
            Value::String(NAV_KEY.to_string()),
            nav_to_yaml(&self.navigation),
        );
        let block =
            serde_yaml::to_string(&block).map_err(|e| DomainError::InvalidYaml(e.to_string()))?;

        let mut out = String::with_capacity(self.source.len() + block.len());
        match &self.nav_span {
            Some(span) => {
                out.push_str(&self.source[..span.start]);
                out.push_str(&block);
                out.push_str(&self.source[span.end..]);
            }
            None => {
                out.push_str(&self.source);
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&block);
            }
        }
        Ok(out)
    }
}

/// Byte range of the top-level `nav` entry: its key line plus every following
/// indented, blank, comment or `- ` line, minus trailing blanks and comments.
fn nav_block(content: &str) -> Option<Range<usize>> {
    let mut offset = 0;
    let mut start = None;
    let mut end = 0;
    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let text = line.trim_end();

        if start.is_none() {
            if is_nav_key(text) {
                start = Some(line_start);
                end = offset;
            }
            continue;
        }
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        if is_document_marker(text) || !text.starts_with([' ', '\t', '-']) {
            break;
        }
        end = offset;
    }
    start.map(|start| start..end)
}

fn is_nav_key(line: &str) -> bool {
    ["nav", "\"nav\"", "'nav'"].iter().any(|key| {
        line.strip_prefix(key)
            .map(|rest| rest.trim_start_matches(' '))
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
    })
}

fn is_document_marker(line: &str) -> bool {
    line == "---" || line == "..." || line.starts_with("--- ")
}

fn parse_mapping(content: &str) -> Result<Mapping, DomainError> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| DomainError::InvalidYaml(e.to_string()))?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(DomainError::NotAMapping),
    }
}

fn non_null<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(key).filter(|v| !v.is_null())
}

fn docs_dir(mapping: &Mapping) -> Result<Option<String>, DomainError> {
    match non_null(mapping, DOCS_DIR_KEY) {
        None => Ok(None),
        Some(Value::String(dir)) if !dir.trim().is_empty() => Ok(Some(dir.clone())),
        Some(_) => Err(DomainError::InvalidField {
            key: DOCS_DIR_KEY.to_string(),
            expected: "non-empty string".to_string(),
        }),
    }
}
