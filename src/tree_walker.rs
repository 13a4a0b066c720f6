//! Breadth-first flattening of a resource tree.
//!
//! Walks a top-level resource and all of its descendants into a single flat
//! operation list. The walk uses an explicit FIFO queue, so stack depth does
//! not grow with tree depth.

use crate::apidoc::Operation;
use crate::error::Result;
use crate::operation_builder;
use crate::raml::ResourceNode;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Flattens `root` and every descendant into one operation list.
///
/// Nodes are visited in breadth-first discovery order. Each dequeued node
/// contributes one operation per declared HTTP method, built with the
/// accumulated resource name as context. Child segments are appended to the
/// accumulated name without a separator: segments carry their own `/` and
/// parameter placeholders are embedded in the segment itself.
///
/// The final list is stable-sorted ascending by path. Operations without a
/// path compare equal to each other and sort after every operation with
/// one, so they keep discovery order among themselves.
///
/// # Errors
///
/// Propagates the first operation-construction failure, aborting the walk.
pub fn walk(root: &ResourceNode) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();
    let mut queue: VecDeque<(String, &ResourceNode)> = VecDeque::new();

    queue.push_back((String::new(), root));

    while let Some((name, node)) = queue.pop_front() {
        operations.extend(operation_builder::build_operations(&name, node)?);

        for (segment, child) in &node.resources {
            queue.push_back((format!("{}{}", name, segment), child));
        }
    }

    operations.sort_by(compare_by_path);

    Ok(operations)
}

fn compare_by_path(a: &Operation, b: &Operation) -> Ordering {
    match (&a.path, &b.path) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raml::{Action, Method, ResourceNode};

    fn node(methods: &[Method], children: Vec<(&str, ResourceNode)>) -> ResourceNode {
        ResourceNode {
            description: None,
            actions: methods.iter().map(|m| (*m, Action::default())).collect(),
            resources: children
                .into_iter()
                .map(|(segment, child)| (segment.to_string(), child))
                .collect(),
        }
    }

    #[test]
    fn test_operation_count_covers_every_descendant_method() {
        // root: GET, /a: GET+POST, /a/{id}: GET+DELETE, /b: POST
        let tree = node(
            &[Method::Get],
            vec![
                (
                    "/a",
                    node(
                        &[Method::Get, Method::Post],
                        vec![("/{id}", node(&[Method::Get, Method::Delete], vec![]))],
                    ),
                ),
                ("/b", node(&[Method::Post], vec![])),
            ],
        );

        let operations = walk(&tree).unwrap();

        assert_eq!(operations.len(), 6);
    }

    #[test]
    fn test_only_placeholder_segments_get_paths() {
        let tree = node(
            &[Method::Get],
            vec![(
                "/a",
                node(&[Method::Get], vec![("/{id}", node(&[Method::Get], vec![]))]),
            )],
        );

        let operations = walk(&tree).unwrap();

        let paths: Vec<Option<&str>> = operations.iter().map(|o| o.path.as_deref()).collect();
        assert_eq!(paths, vec![Some("/a/:id"), None, None]);
    }

    #[test]
    fn test_operations_sorted_by_path_with_pathless_last() {
        let tree = node(
            &[Method::Get],
            vec![
                ("/z{v}", node(&[Method::Get], vec![])),
                ("/a{w}", node(&[Method::Get], vec![])),
                ("/plain", node(&[Method::Get], vec![])),
            ],
        );

        let operations = walk(&tree).unwrap();

        let paths: Vec<Option<&str>> = operations.iter().map(|o| o.path.as_deref()).collect();
        assert_eq!(paths, vec![Some("/a:w"), Some("/z:v"), None, None]);
    }

    #[test]
    fn test_pathless_operations_keep_discovery_order() {
        // Three path-less nodes: the root, then /first, then /second
        let tree = node(
            &[Method::Put],
            vec![
                ("/first", node(&[Method::Get], vec![])),
                ("/second", node(&[Method::Post], vec![])),
            ],
        );

        let operations = walk(&tree).unwrap();

        let methods: Vec<&str> = operations.iter().map(|o| o.method.as_str()).collect();
        assert_eq!(methods, vec!["PUT", "GET", "POST"]);
    }

    #[test]
    fn test_breadth_first_accumulates_names_without_separator() {
        let tree = node(
            &[],
            vec![(
                "/parent",
                node(
                    &[],
                    vec![("/{child}", node(&[Method::Get], vec![]))],
                ),
            )],
        );

        let operations = walk(&tree).unwrap();

        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].path.as_deref(), Some("/parent/:child"));
    }

    #[test]
    fn test_deep_tree_is_walked_without_recursion() {
        let mut tree = node(&[Method::Get], vec![]);
        for _ in 0..200 {
            tree = node(&[Method::Get], vec![("/n", tree)]);
        }

        let operations = walk(&tree).unwrap();

        assert_eq!(operations.len(), 201);
    }

    #[test]
    fn test_empty_tree_yields_no_operations() {
        let operations = walk(&node(&[], vec![])).unwrap();

        assert!(operations.is_empty());
    }
}
