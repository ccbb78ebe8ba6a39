//! Folding child sites into the master navigation.

use std::collections::HashSet;

use crate::domain::entities::{SiteRoot, SiteSection};
use crate::domain::navigation::NavNode;

/// Fold one site's rewritten section into the sections built during this run.
///
/// Without `unify` the section is always appended. With `unify` the children are
/// appended to the first section sharing the same root, or the section is appended
/// if none exists yet.
pub fn fold_in(output: &mut Vec<SiteSection>, section: SiteSection, unify: bool) {
    if unify {
        if let Some(existing) = output.iter_mut().find(|s| s.root == section.root) {
            existing.children.extend(section.children);
            return;
        }
    }
    output.push(section);
}

/// Split master top-level groups whose title resolves to a root being merged
/// from the rest.
///
/// Returns `(kept, removed)`. Pages, links and groups for other roots are kept in
/// their original order.
pub fn strip_existing(
    navigation: Vec<NavNode>,
    roots: &HashSet<SiteRoot>,
) -> (Vec<NavNode>, Vec<NavNode>) {
    navigation.into_iter().partition(|node| match node {
        NavNode::Section { .. } => !node
            .title()
            .is_some_and(|title| roots.contains(&SiteRoot::from_name(title))),
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(root: &str, title: &str, pages: &[&str]) -> SiteSection {
        SiteSection {
            root: SiteRoot::from_name(root),
            title: title.to_string(),
            children: pages.iter().map(|p| NavNode::page(*p)).collect(),
        }
    }

    #[test]
    fn test_unify_first_match_wins() {
        let mut out = vec![
            section("a", "A", &["a/1.md"]),
            section("a", "A", &["a/2.md"]),
        ];
        fold_in(&mut out, section("a", "A", &["a/3.md"]), true);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].children.len(), 2);
        assert_eq!(out[1].children.len(), 1);
    }

    #[test]
    fn test_strip_keeps_links_with_matching_title() {
        let nav = vec![NavNode::link("Project A", "a.md")];
        let roots = HashSet::from([SiteRoot::from_name("Project A")]);
        assert_eq!(strip_existing(nav.clone(), &roots), (nav, vec![]));
    }
}
