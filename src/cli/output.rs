//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::NavNode;
use crate::infrastructure::traits::{ReportLevel, Reporter};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print success status indented (green checkmark with leading spaces)
pub fn success_detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print failure status (red X, indented)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✗".red(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Navigation entries as a printable tree under `root`.
pub fn nav_tree(root: &str, nodes: &[NavNode]) -> Tree<String> {
    Tree::new(root.to_string()).with_leaves(nodes.iter().map(node_tree))
}

fn node_tree(node: &NavNode) -> Tree<String> {
    match node {
        NavNode::Page(path) => Tree::new(path.clone()),
        NavNode::Link { title, path } => Tree::new(format!("{}: {}", title, path)),
        NavNode::Section { title, children } => {
            Tree::new(title.clone()).with_leaves(children.iter().map(node_tree))
        }
    }
}

/// Reporter writing progress lines to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => info(message),
            ReportLevel::Success => success(message),
            ReportLevel::Warning => warning(message),
            ReportLevel::Error => error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_tree_renders_nesting() {
        let nav = vec![
            NavNode::link("Home", "index.md"),
            NavNode::section("Guide", vec![NavNode::page("guide/intro.md")]),
        ];
        let rendered = nav_tree("nav", &nav).to_string();
        assert!(rendered.starts_with("nav\n"));
        assert!(rendered.contains("Home: index.md"));
        assert!(rendered.contains("guide/intro.md"));
    }
}
