//! # prefix-avl
//!
//! Frequency-ranked prefix autocomplete over an AVL-balanced binary search
//! tree keyed by string.
//!
//! Each key carries a frequency weight. [`PrefixTree::completions`] finds the
//! keys starting with a prefix and returns the most frequent ones, best first.
//!
//! ## Example
//!
//! ```rust
//! use prefix_avl::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("cat", 5);
//! tree.insert("car", 9);
//! tree.insert("cap", 3);
//! tree.insert("dog", 7);
//!
//! assert_eq!(tree.completions("ca"), ["car", "cat", "cap"]);
//! assert_eq!(tree.size(), 4);
//! ```
//!
//! Keys are ordered by their bytes. There is no case folding or Unicode
//! normalization, and re-inserting a key never changes its frequency.

#![warn(missing_docs)]

mod config;
pub mod dict;
mod node;
mod prefix;
mod rank;

pub use config::Config;

use node::{Link, Node};
use rank::TopK;

/// AVL-balanced string tree ranking prefix completions by frequency.
///
/// Not synchronized: wrap it in a lock if it has to be shared across threads.
#[derive(Clone, Default)]
pub struct PrefixTree {
    root: Link,
    config: Config,
}

impl PrefixTree {
    /// Creates an empty tree returning up to three completions per prefix.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty tree with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self { root: None, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds `key` with `frequency`.
    ///
    /// Returns `false` and leaves the stored frequency untouched if `key` is
    /// already present. Runs in O(log n).
    pub fn insert(&mut self, key: &str, frequency: i64) -> bool {
        node::insert(&mut self.root, key, frequency)
    }

    /// Number of distinct keys, counted by walking the whole tree.
    pub fn size(&self) -> usize {
        node::count(&self.root)
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// O(1), unlike [`size`](Self::size).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; 0 when empty, 1 for a single key.
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Frequency stored for `key`.
    pub fn get(&self, key: &str) -> Option<i64> {
        node::find(self.root.as_deref(), key).map(|n| n.frequency)
    }

    /// Whether `key` has been inserted.
    pub fn contains_key(&self, key: &str) -> bool {
        node::find(self.root.as_deref(), key).is_some()
    }

    /// The most frequent keys starting with `prefix`, most frequent first.
    ///
    /// At most [`Config::max_completions`] keys are returned. Equal
    /// frequencies rank the smaller key first. An empty prefix matches every
    /// key, and a prefix with no matches (or an empty tree) gives an empty
    /// vector.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.ranked(prefix)
            .into_iter()
            .map(|(_, n)| n.key.clone())
            .collect()
    }

    /// Like [`completions`](Self::completions), paired with frequencies.
    pub fn completions_with_frequency(&self, prefix: &str) -> Vec<(String, i64)> {
        self.ranked(prefix)
            .into_iter()
            .map(|(f, n)| (n.key.clone(), f))
            .collect()
    }

    fn ranked(&self, prefix: &str) -> Vec<(i64, &Node)> {
        let candidates = prefix::matches(self.root.as_deref(), prefix.as_bytes());
        let mut top = TopK::new(self.config.max_completions);
        top.extend(candidates.into_iter().map(|n| (n.frequency, n)));
        top.into_sorted_vec()
    }

    /// Iterates over `(key, frequency)` in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl std::fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: AsRef<str>> Extend<(K, i64)> for PrefixTree {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (key, frequency) in iter {
            self.insert(key.as_ref(), frequency);
        }
    }
}

impl<K: AsRef<str>> FromIterator<(K, i64)> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type Item = (&'a str, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`PrefixTree`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut cursor: Option<&'a Node>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((node.key.as_str(), node.frequency))
    }
}


#[cfg(test)]
mod proptests;
