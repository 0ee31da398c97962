//! Core layer: pure transformations over locators and trees.

use crate::data::{Group, Node};

/// Name a fetched leaf is stored under: the locator's trailing `/` segment.
pub fn leaf_name(locator: &str) -> &str {
    match locator.rsplit_once('/') {
        Some((_, name)) => name,
        None => locator,
    }
}

/// Total number of leaves in a group's subtree.
pub fn leaf_count(group: &Group) -> usize {
    group
        .children
        .iter()
        .map(|child| match child {
            Node::Leaf(_) => 1,
            Node::Group(sub) => leaf_count(sub),
        })
        .sum()
}

/// Filename for an emitted archive artifact.
pub fn artifact_filename(root_name: &str) -> String { format!("{root_name}.zip") }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_name_takes_trailing_segment() {
        assert_eq!(leaf_name("https://files.test/a/b/report.pdf"), "report.pdf");
        assert_eq!(leaf_name("a/1.txt"), "1.txt");
        assert_eq!(leaf_name("plain.txt"), "plain.txt");
    }

    #[test]
    fn leaf_name_keeps_source_semantics_for_trailing_slash() {
        assert_eq!(leaf_name("https://files.test/dir/"), "");
    }

    #[test]
    fn leaf_count_spans_nesting() {
        let tree = Group::new(
            "root",
            vec![
                Node::leaf("a/1.txt"),
                Node::group(
                    "sub",
                    vec![Node::leaf("a/2.txt"), Node::group("deeper", vec![Node::leaf("a/3.txt")])],
                ),
                Node::group("empty", vec![]),
            ],
        );
        assert_eq!(leaf_count(&tree), 3);
    }

    #[test]
    fn artifact_filename_appends_extension() {
        assert_eq!(artifact_filename("R"), "R.zip");
    }
}
