//! Tests for navigation parsing and path rewriting

use rstest::rstest;
use serde_yaml::Value;

use mkdocs_merge::domain::{nav_to_yaml, parse_nav, prefix_all, DomainError, NavNode};

fn yaml(s: &str) -> Value {
    serde_yaml::from_str(s).unwrap()
}

// ============================================================
// prefix_all()
// ============================================================

#[test]
fn given_nested_nav_when_prefixed_then_every_page_rewritten() {
    // Arrange
    let mut nav = parse_nav(&yaml(
        r#"
- Home: index.md
- Projects:
    - First: projects/first.md
"#,
    ))
    .unwrap();

    // Act
    prefix_all(&mut nav, "new_root");

    // Assert
    assert_eq!(
        nav_to_yaml(&nav),
        yaml(
            r#"
- Home: new_root/index.md
- Projects:
    - First: new_root/projects/first.md
"#
        )
    );
}

#[test]
fn given_bare_pages_and_deep_groups_when_prefixed_then_shape_preserved() {
    // Arrange
    let mut nav = vec![
        NavNode::page("index.md"),
        NavNode::section(
            "A",
            vec![NavNode::section(
                "B",
                vec![NavNode::page("a/b.md"), NavNode::link("C", "a/b/c.md")],
            )],
        ),
    ];

    // Act
    prefix_all(&mut nav, "site");

    // Assert
    assert_eq!(
        nav,
        vec![
            NavNode::page("site/index.md"),
            NavNode::section(
                "A",
                vec![NavNode::section(
                    "B",
                    vec![
                        NavNode::page("site/a/b.md"),
                        NavNode::link("C", "site/a/b/c.md")
                    ],
                )],
            ),
        ]
    );
}

#[test]
fn given_empty_group_when_prefixed_then_stays_empty() {
    let mut nav = vec![NavNode::section("Empty", vec![])];
    prefix_all(&mut nav, "root");
    assert_eq!(nav, vec![NavNode::section("Empty", vec![])]);
}

// ============================================================
// parse_nav() validation
// ============================================================

#[rstest]
#[case::two_titles("- Home: index.md\n  About: about.md\n")]
#[case::not_a_list("Home: index.md\n")]
#[case::number_entry("- 42\n")]
#[case::nested_mapping("- Home:\n    page: index.md\n")]
#[case::empty_path("- Home: ''\n")]
fn given_malformed_nav_when_parsed_then_invalid_entry(#[case] input: &str) {
    let result = parse_nav(&yaml(input));
    assert!(
        matches!(result, Err(DomainError::InvalidNavEntry { .. })),
        "expected InvalidNavEntry, got {:?}",
        result
    );
}

#[test]
fn given_bad_nested_entry_when_parsed_then_error_names_location() {
    // Arrange
    let input = yaml("- Home: index.md\n- Group:\n    - Broken: 3\n");

    // Act
    let err = parse_nav(&input).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::InvalidNavEntry {
            location: "nav[1].Group[0].Broken".to_string(),
            message: "expected a page path or a list of entries".to_string(),
        }
    );
}

#[test]
fn given_numeric_title_when_parsed_then_title_is_text() {
    let nav = parse_nav(&yaml("- 2024: news.md\n")).unwrap();
    assert_eq!(nav, vec![NavNode::link("2024", "news.md")]);
}

#[test]
fn given_nav_when_page_paths_then_depth_first_order() {
    let nav = parse_nav(&yaml("- Group:\n    - a.md\n    - Sub:\n        - B: b.md\n    - c.md\n"))
        .unwrap();
    assert_eq!(nav[0].page_paths(), vec!["a.md", "b.md", "c.md"]);
    assert_eq!(nav[0].title(), Some("Group"));
}
