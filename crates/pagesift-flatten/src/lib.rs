//! Collision-aware flattening of nested JSON documents.
//!
//! Documents of the shape this crate targets repeat terminal field names
//! (`count`, `id`, `text`) at many nesting levels, so a naive last-key-only
//! flattening collides. [`flatten`] prefixes only as much ancestor context
//! as needed to keep keys unique, which keeps them short while staying
//! collision-free in the overwhelming majority of real documents.

/// Flat key → value table.
pub mod flat;

/// Borrowed document tree built during a flatten pass.
pub mod tree;

pub use flat::FlatIndex;
pub use tree::{DocumentTree, Leaf, TreeNode};

use std::collections::VecDeque;

use serde_json::Value as JsonValue;

/// Flatten `document` into a single-level [`FlatIndex`].
///
/// Leaves are visited in traversal order. Each leaf's key starts as its own
/// terminal segment; while the candidate key is already taken, one more
/// ancestor segment is prefixed (stringified, joined with `_`) until a free
/// key is found. If the whole path is exhausted without finding a free key,
/// the leaf overwrites the existing entry — a rare, lossy edge case kept
/// for compatibility with consumers of the historical behavior.
///
/// A bare-scalar root has no key material to synthesize and produces an
/// empty index.
///
/// ```
/// use serde_json::json;
///
/// let flat = pagesift_flatten::flatten(&json!({"a": {"b": 5}, "c": {"b": 7}}));
/// assert_eq!(flat.get("b"), Some(&json!(5)));
/// assert_eq!(flat.get("c_b"), Some(&json!(7)));
/// ```
pub fn flatten(document: &JsonValue) -> FlatIndex {
    let tree = DocumentTree::build(document);
    let mut flat = FlatIndex::new();
    for leaf in tree.leaves() {
        if leaf.path().is_empty() {
            continue;
        }
        let mut parts: VecDeque<String> = VecDeque::new();
        let mut key = String::new();
        for segment in leaf.path().iter().rev() {
            parts.push_front(segment.as_flat_key().into_owned());
            key = join_key(&parts);
            if !flat.contains_key(&key) {
                break;
            }
        }
        flat.insert(key, leaf.value().clone());
    }
    flat
}

fn join_key(parts: &VecDeque<String>) -> String {
    parts
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("_")
}
