//! Owned AVL node with height maintenance and rotation-based rebalancing.
//!
//! Every node exclusively owns its children; there are no parent pointers.
//! An absent child has height 0 and a leaf has height 1.

use std::cmp::Ordering;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) key: String,
    pub(crate) frequency: i64,
    pub(crate) height: u32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

#[inline]
pub(crate) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

impl Node {
    pub(crate) fn leaf(key: &str, frequency: i64) -> Box<Self> {
        Box::new(Self {
            key: key.to_owned(),
            frequency,
            height: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(right) - height(left)`; positive means right-heavy.
    #[inline]
    pub(crate) fn balance(&self) -> i64 {
        i64::from(height(&self.right)) - i64::from(height(&self.left))
    }
}

/// Promotes the right child. Heights of the two nodes whose children changed
/// are recomputed bottom-up.
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    log::trace!("rotate left at {:?}", node.key);
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    log::trace!("rotate right at {:?}", node.key);
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Recomputes the node's height and restores `|balance| <= 1` with at most
/// one single or one double rotation. Returns the new subtree root.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        // Right-left case: straighten the right child first.
        if let Some(right) = node.right.take() {
            node.right = Some(if right.balance() < 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        rotate_left(node)
    } else if balance < -1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if left.balance() > 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        rotate_right(node)
    } else {
        node
    }
}

/// Inserts `(key, frequency)` below `slot`, rebalancing every ancestor on the
/// way back up. Returns `false` without touching the tree if `key` exists.
pub(crate) fn insert(slot: &mut Link, key: &str, frequency: i64) -> bool {
    let node = match slot {
        Some(node) => node,
        None => {
            *slot = Some(Node::leaf(key, frequency));
            return true;
        }
    };

    let inserted = match key.cmp(node.key.as_str()) {
        Ordering::Equal => return false,
        Ordering::Less => insert(&mut node.left, key, frequency),
        Ordering::Greater => insert(&mut node.right, key, frequency),
    };

    if inserted {
        if let Some(node) = slot.take() {
            *slot = Some(rebalance(node));
        }
    }
    inserted
}

/// Exact-key lookup, bounded by tree height.
pub(crate) fn find<'a>(mut cursor: Option<&'a Node>, key: &str) -> Option<&'a Node> {
    while let Some(node) = cursor {
        cursor = match key.cmp(node.key.as_str()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}

pub(crate) fn count(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}
