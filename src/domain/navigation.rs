//! Navigation tree: the typed form of an MkDocs `nav` section.
//!
//! Loaded YAML is converted into [`NavNode`] at the parse boundary, so every
//! shape violation is reported there and the rewrite below is total.

use serde_yaml::{Mapping, Value};

use crate::domain::error::DomainError;

/// One entry of a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    /// Bare page path: `- index.md`
    Page(String),
    /// Titled page: `- Home: index.md`
    Link { title: String, path: String },
    /// Titled group of entries: `- Projects: [...]`
    Section {
        title: String,
        children: Vec<NavNode>,
    },
}

impl NavNode {
    pub fn page(path: impl Into<String>) -> Self {
        Self::Page(path.into())
    }

    pub fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Link {
            title: title.into(),
            path: path.into(),
        }
    }

    pub fn section(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }

    /// Display title, `None` for bare pages.
    pub fn title(&self) -> Option<&str> {
        match self {
            NavNode::Page(_) => None,
            NavNode::Link { title, .. } | NavNode::Section { title, .. } => Some(title),
        }
    }

    /// Prefix every page path below this node with `prefix/`.
    ///
    /// Not idempotent: a second call prefixes again.
    pub fn prefix_paths(&mut self, prefix: &str) {
        match self {
            NavNode::Page(path) | NavNode::Link { path, .. } => {
                *path = format!("{}/{}", prefix, path);
            }
            NavNode::Section { children, .. } => prefix_all(children, prefix),
        }
    }

    /// All page paths below this node, depth first.
    pub fn page_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        self.collect_paths(&mut paths);
        paths
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            NavNode::Page(path) | NavNode::Link { path, .. } => out.push(path),
            NavNode::Section { children, .. } => {
                for child in children {
                    child.collect_paths(out);
                }
            }
        }
    }

    /// Convert back into a YAML value with the single-key mapping shape.
    pub fn to_yaml(&self) -> Value {
        match self {
            NavNode::Page(path) => Value::String(path.clone()),
            NavNode::Link { title, path } => single_key(title, Value::String(path.clone())),
            NavNode::Section { title, children } => single_key(title, nav_to_yaml(children)),
        }
    }

    fn from_yaml(value: &Value, location: &str) -> Result<Self, DomainError> {
        match value {
            Value::String(path) => Ok(NavNode::Page(non_empty_path(path, location)?)),
            Value::Mapping(mapping) => {
                if mapping.len() != 1 {
                    return Err(DomainError::nav(
                        location,
                        format!("expected exactly one title, found {}", mapping.len()),
                    ));
                }
                let (key, inner) = mapping
                    .iter()
                    .next()
                    .ok_or_else(|| DomainError::nav(location, "empty mapping"))?;
                let title = scalar_text(key)
                    .ok_or_else(|| DomainError::nav(location, "title must be text"))?;
                let inner_location = format!("{}.{}", location, title);
                match inner {
                    Value::String(path) => Ok(NavNode::Link {
                        path: non_empty_path(path, &inner_location)?,
                        title,
                    }),
                    Value::Sequence(_) => Ok(NavNode::Section {
                        children: parse_entries(inner, &inner_location)?,
                        title,
                    }),
                    _ => Err(DomainError::nav(
                        inner_location,
                        "expected a page path or a list of entries",
                    )),
                }
            }
            _ => Err(DomainError::nav(
                location,
                "expected a page path or a titled entry",
            )),
        }
    }
}

/// Prefix every page path in a list of entries, keeping order and shape.
pub fn prefix_all(nodes: &mut [NavNode], prefix: &str) {
    for node in nodes.iter_mut() {
        node.prefix_paths(prefix);
    }
}

/// Parse a `nav` value into typed entries.
pub fn parse_nav(value: &Value) -> Result<Vec<NavNode>, DomainError> {
    parse_entries(value, "nav")
}

/// Convert typed entries back into a YAML sequence.
pub fn nav_to_yaml(nodes: &[NavNode]) -> Value {
    Value::Sequence(nodes.iter().map(NavNode::to_yaml).collect())
}

fn parse_entries(value: &Value, location: &str) -> Result<Vec<NavNode>, DomainError> {
    let Value::Sequence(items) = value else {
        return Err(DomainError::nav(location, "expected a list of entries"));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| NavNode::from_yaml(item, &format!("{}[{}]", location, i)))
        .collect()
}

fn non_empty_path(path: &str, location: &str) -> Result<String, DomainError> {
    if path.trim().is_empty() {
        return Err(DomainError::nav(location, "empty page path"));
    }
    Ok(path.to_string())
}

fn single_key(title: &str, value: Value) -> Value {
    let mut mapping = Mapping::new();
    mapping.insert(Value::String(title.to_string()), value);
    Value::Mapping(mapping)
}

/// Text form of a scalar YAML value (strings, numbers, booleans).
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_all_three_shapes() {
        let nav = parse_nav(&yaml("- index.md\n- Home: home.md\n- Group:\n  - a.md\n")).unwrap();
        assert_eq!(
            nav,
            vec![
                NavNode::page("index.md"),
                NavNode::link("Home", "home.md"),
                NavNode::section("Group", vec![NavNode::page("a.md")]),
            ]
        );
    }

    #[test]
    fn test_prefix_bare_page_in_place() {
        let mut nav = vec![NavNode::page("a.md"), NavNode::link("B", "b.md")];
        prefix_all(&mut nav, "root");
        assert_eq!(nav[0], NavNode::page("root/a.md"));
        assert_eq!(nav[1], NavNode::link("B", "root/b.md"));
    }

    #[test]
    fn test_numeric_title_is_text() {
        let nav = parse_nav(&yaml("- 2024: news.md\n")).unwrap();
        assert_eq!(nav, vec![NavNode::link("2024", "news.md")]);
    }

    #[test]
    fn test_multi_key_mapping_rejected() {
        let err = parse_nav(&yaml("- A: a.md\n  B: b.md\n")).unwrap_err();
        assert!(err.to_string().contains("nav[0]"));
    }

    #[test]
    fn test_null_value_rejected_with_location() {
        let err = parse_nav(&yaml("- Group:\n  - Broken:\n")).unwrap_err();
        assert!(err.to_string().contains("nav[0].Group[0].Broken"), "{}", err);
    }
}
