//! Prefix location and pruned subtree collection.
//!
//! Keys sharing a prefix form a contiguous range in BST order, so a single
//! comparator against the key truncated to the prefix length is enough to
//! steer both the anchor search and the collection walk.

use std::cmp::Ordering;

use crate::node::Node;

/// Compares `prefix` with `key` cut to `prefix.len()` bytes.
///
/// `Equal` means `key` starts with `prefix`. A key shorter than the prefix
/// is compared whole and can never be `Equal`, since the lengths differ.
/// Truncation is on bytes, so a prefix that ends inside a multi-byte
/// character is still well defined.
#[inline]
pub(crate) fn compare_truncated(prefix: &[u8], key: &[u8]) -> Ordering {
    let cut = key.len().min(prefix.len());
    prefix.cmp(&key[..cut])
}

/// Descends from `cursor` to the first node whose key starts with `prefix`.
/// Returns `None` on reaching an absent child.
pub(crate) fn locate<'a>(mut cursor: Option<&'a Node>, prefix: &[u8]) -> Option<&'a Node> {
    while let Some(node) = cursor {
        cursor = match compare_truncated(prefix, node.key.as_bytes()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}

/// Pushes every node below `node` whose key starts with `prefix`, in
/// ascending key order. Matching nodes recurse into both children;
/// non-matching nodes recurse only toward the side the range lies on.
pub(crate) fn collect<'a>(node: Option<&'a Node>, prefix: &[u8], out: &mut Vec<&'a Node>) {
    let Some(node) = node else {
        return;
    };
    match compare_truncated(prefix, node.key.as_bytes()) {
        Ordering::Equal => {
            collect(node.left.as_deref(), prefix, out);
            out.push(node);
            collect(node.right.as_deref(), prefix, out);
        }
        Ordering::Less => collect(node.left.as_deref(), prefix, out),
        Ordering::Greater => collect(node.right.as_deref(), prefix, out),
    }
}

/// All nodes whose key starts with `prefix`, in ascending key order.
pub(crate) fn matches<'a>(root: Option<&'a Node>, prefix: &[u8]) -> Vec<&'a Node> {
    let mut out = Vec::new();
    if let Some(anchor) = locate(root, prefix) {
        collect(Some(anchor), prefix, &mut out);
    }
    out
}
