//! Property-based tests for the tree model and generators.
//!
//! Uses `proptest` to generate random trees, paths, and scalar nodes and
//! verify the model's addressing contract:
//!
//! - `get(set(tree, p, n), p) == n` for all paths and nodes
//! - auto-vivification produces object nodes at every proper prefix
//! - `set` leaves unrelated root siblings untouched
//! - `delete` after `set` removes the mapping
//! - the generators are deterministic over arbitrary trees
//!
//! Doubles are drawn from a finite range: NaN is excluded because the JSON
//! interchange cannot produce it and it breaks node equality.

use proptest::prelude::*;

use datamap_core::{generate_file, generate_structure, Node, NodeKind, Platform};

// ============================================================================
// Strategies
// ============================================================================

/// Generate a plain object key (non-empty, alphanumeric).
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}").unwrap()
}

/// Generate a path of 1 to 4 segments.
fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_key(), 1..=4)
}

/// Generate a random scalar node of any of the three scalar kinds.
fn arb_scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(Node::String),
        (-1.0e6..1.0e6f64).prop_map(Node::Double),
        any::<bool>().prop_map(Node::Boolean),
    ]
}

/// Deduplicate generated entries by key (first occurrence wins) so the
/// object invariant of unique keys holds.
fn unique_children(entries: Vec<(String, Node)>) -> Node {
    let mut children: Vec<(String, Node)> = Vec::new();
    for (key, node) in entries {
        if !children.iter().any(|(k, _)| k == &key) {
            children.push((key, node));
        }
    }
    Node::Object(children)
}

/// Generate a random node: a scalar, or an object with unique keys, up to
/// 3 levels deep.
fn arb_node() -> impl Strategy<Value = Node> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec((arb_key(), inner), 0..4).prop_map(unique_children)
    })
}

/// Generate a random tree: always object-rooted, like a real data map.
fn arb_tree() -> impl Strategy<Value = Node> {
    prop::collection::vec((arb_key(), arb_node()), 0..4).prop_map(unique_children)
}

fn as_segments(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}

// ============================================================================
// Addressing contract
// ============================================================================

proptest! {
    #[test]
    fn set_then_get_round_trips(tree in arb_tree(), path in arb_path(), node in arb_scalar()) {
        let mut tree = tree;
        let segments = as_segments(&path);
        tree.set(&segments, node.clone()).unwrap();
        prop_assert_eq!(tree.get(&segments).unwrap(), &node);
    }

    #[test]
    fn set_vivifies_objects_at_every_prefix(path in arb_path(), node in arb_scalar()) {
        let mut tree = Node::empty_object();
        let segments = as_segments(&path);
        tree.set(&segments, node).unwrap();
        for len in 0..segments.len() {
            prop_assert_eq!(tree.get(&segments[..len]).unwrap().kind(), NodeKind::Object);
        }
    }

    #[test]
    fn set_preserves_unrelated_root_siblings(
        tree in arb_tree(),
        path in arb_path(),
        node in arb_scalar(),
    ) {
        let before = tree.clone();
        let mut tree = tree;
        let segments = as_segments(&path);
        tree.set(&segments, node).unwrap();
        for (key, child) in before.children() {
            if key != &path[0] {
                prop_assert_eq!(tree.get(&[key.as_str()]).unwrap(), child);
            }
        }
    }

    #[test]
    fn delete_after_set_removes_the_mapping(path in arb_path(), node in arb_scalar()) {
        let mut tree = Node::empty_object();
        let segments = as_segments(&path);
        tree.set(&segments, node).unwrap();
        tree.delete(&segments).unwrap();
        prop_assert!(tree.get(&segments).is_err());
    }

    #[test]
    fn json_interchange_round_trips(tree in arb_tree()) {
        let json = tree.to_json();
        prop_assert_eq!(Node::parse(&json).unwrap(), tree);
    }
}

// ============================================================================
// Generator determinism
// ============================================================================

proptest! {
    #[test]
    fn structure_generation_is_deterministic(tree in arb_tree()) {
        prop_assert_eq!(
            generate_structure(&tree, "tag"),
            generate_structure(&tree, "tag")
        );
    }

    #[test]
    fn structure_of_an_object_starts_with_its_constructor(tree in arb_tree()) {
        let code = generate_structure(&tree, "tag");
        prop_assert!(code.starts_with("tag = new CompoundTag();"));
    }

    #[test]
    fn full_file_generation_is_deterministic(tree in arb_tree()) {
        prop_assert_eq!(
            generate_file(&tree, "universal_laws", Platform::NeoForge),
            generate_file(&tree, "universal_laws", Platform::NeoForge)
        );
    }
}
