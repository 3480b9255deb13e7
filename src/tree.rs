//! Mutable radix tree.
//!
//! This module contains the main [`RadixTree`] implementation: insertion with edge splitting,
//! removal with node merging, and the prefix and ordering queries built on top of them.

use std::fmt::{self, Debug};

use crate::iter::Iter;
use crate::node::{DefaultNode, Node};
use crate::partials::Partial;
use crate::stats::{update_tree_stats, TreeStats, TreeStatsTrait};
use crate::utils::key_str_rep;

/// A mutable, ordered radix tree keyed by byte sequences.
///
/// Every operation walks from the root consuming key bytes against edge labels, so the cost of
/// lookups, insertions and removals is bounded by the length of the key, not by the number of
/// entries. Paths are kept maximally compressed: no node other than the root is ever left as a
/// value-less pass-through with a single child.
///
/// Keys are anything that can be viewed as bytes (`&str`, `String`, `&[u8]`, `Vec<u8>`,
/// [`VectorKey`](crate::keys::vector_key::VectorKey), ...). Ordering is plain lexicographic byte
/// order; the empty key is valid and sorts first.
///
/// ## Examples
///
/// ```rust
/// use radixtree::RadixTree;
///
/// let mut tree = RadixTree::new();
/// assert_eq!(tree.insert("John", 1), None);
/// assert_eq!(tree.insert("Jonathan", 2), None);
/// assert_eq!(tree.insert("John", 3), Some(1));
///
/// assert_eq!(tree.get("John"), Some(&3));
/// assert_eq!(tree.find("Jo"), vec![&3, &2]);
/// assert_eq!(tree.longest_prefix("Johnson"), Some(&3));
/// assert_eq!(tree.successor("John"), Some(&2));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone)]
pub struct RadixTree<V> {
    root: DefaultNode<V>,
    size: usize,
}

/// Where a predecessor search has to rewind to.
enum Rewind<'a, V> {
    /// The preceding sibling subtree; its maximum is the answer.
    Sibling(&'a DefaultNode<V>),
    /// An ancestor carrying a value; that value is the answer.
    Ancestor(&'a DefaultNode<V>),
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTree<V> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root: Node::new_root(),
            size: 0,
        }
    }

    /// Number of values stored in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.root = Node::new_root();
        self.size = 0;
    }

    /// Get the value stored under exactly `key`.
    #[inline]
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        self.seek_node(key.as_ref())?.value()
    }

    /// Get a mutable reference to the value stored under exactly `key`.
    pub fn get_mut<K: AsRef<[u8]>>(&mut self, key: K) -> Option<&mut V> {
        let mut key = key.as_ref();
        let mut cur = &mut self.root;
        while let Some(&k) = key.first() {
            let child = cur.seek_child_mut(k)?;
            if !child.prefix.is_prefix_of(key) {
                return None;
            }
            key = &key[child.prefix.len()..];
            cur = child;
        }
        cur.value_mut()
    }

    #[inline]
    pub fn contains_key<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Insert a key-value pair.
    ///
    /// Follows standard Rust container conventions by returning the old value when a key is
    /// replaced.
    ///
    /// # Returns
    ///
    /// - `Some(old_value)` if a previous value was replaced; the length is unchanged
    /// - `None` if this was a new key; the length grows by one
    pub fn insert<K: AsRef<[u8]>>(&mut self, key: K, value: V) -> Option<V> {
        let mut key = key.as_ref();
        let mut cur = &mut self.root;

        while let Some(&k) = key.first() {
            let Some(idx) = cur.child_index(k) else {
                // Nothing starts with this byte yet, so the rest of the key hangs off here.
                cur.add_child(Node::new_leaf(key.into(), value));
                self.size += 1;
                return None;
            };

            let child = cur.child_at_mut(idx);
            let longest_common_prefix = child.prefix.prefix_length_slice(key);

            // The key diverges from (or ends inside) the child's edge. Break the edge at the
            // divergence point and hang the new value off the new branch.
            if longest_common_prefix < child.prefix.len() {
                child.split(longest_common_prefix);
                key = &key[longest_common_prefix..];
                if key.is_empty() {
                    child.value = Some(value);
                } else {
                    child.add_child(Node::new_leaf(key.into(), value));
                }
                self.size += 1;
                return None;
            }

            key = &key[longest_common_prefix..];
            cur = child;
        }

        // The key lands exactly on an existing node, which may or may not hold a value yet.
        let old = cur.value.replace(value);
        if old.is_none() {
            self.size += 1;
        }
        old
    }

    /// Remove the value stored under exactly `key`, returning it.
    ///
    /// Keys that only exist as internal branch points, without a value of their own, are not
    /// present and yield `None`.
    pub fn remove<K: AsRef<[u8]>>(&mut self, key: K) -> Option<V> {
        let key = key.as_ref();
        let result = if key.is_empty() {
            // The root is never merged or pruned, it only gives up its value.
            self.root.value.take()
        } else {
            Self::remove_recurse(&mut self.root, key, true)
        };
        if result.is_some() {
            self.size -= 1;
        }
        result
    }

    fn remove_recurse(parent: &mut DefaultNode<V>, key: &[u8], parent_is_root: bool) -> Option<V> {
        let idx = parent.child_index(key[0])?;
        let child = parent.child_at_mut(idx);
        if !child.prefix.is_prefix_of(key) {
            return None;
        }

        let rest = &key[child.prefix.len()..];
        if !rest.is_empty() {
            return Self::remove_recurse(child, rest, false);
        }

        let value = child.value.take()?;

        // Clearing the value can leave the child either useless (no children) or a
        // pass-through with one child; fix it up so paths stay maximally compressed.
        match child.num_children() {
            0 => {
                parent.delete_child_at(idx);
            }
            1 => child.merge_with_only_child(),
            _ => {}
        }

        // Pruning the child can in turn leave the parent as a pass-through.
        if !parent_is_root && !parent.has_value() && parent.num_children() == 1 {
            parent.merge_with_only_child();
        }

        Some(value)
    }

    /// All values whose key starts with `prefix`, in ascending key order.
    pub fn find<K: AsRef<[u8]>>(&self, prefix: K) -> Vec<&V> {
        let mut results = Vec::new();
        self.walk(prefix, |v| {
            results.push(v);
            true
        });
        results
    }

    /// All values in ascending key order.
    pub fn values(&self) -> Vec<&V> {
        let mut results = Vec::with_capacity(self.len());
        self.root.walk(&mut |v| {
            results.push(v);
            true
        });
        results
    }

    /// Visit, in ascending key order, every value whose key starts with `prefix`. Traversal stops
    /// as soon as `f` returns false.
    pub fn walk<'a, K, F>(&'a self, prefix: K, mut f: F)
    where
        K: AsRef<[u8]>,
        F: FnMut(&'a V) -> bool,
    {
        if let Some((node, _)) = self.seek_prefix(prefix.as_ref()) {
            node.walk(&mut f);
        }
    }

    /// The value of the longest stored key that is a prefix of `key` (including `key` itself).
    pub fn longest_prefix<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        let mut key = key.as_ref();
        let mut cur = &self.root;
        let mut last = cur.value();

        while let Some(&k) = key.first() {
            let Some(child) = cur.seek_child(k) else {
                break;
            };
            if !child.prefix.is_prefix_of(key) {
                break;
            }
            if child.has_value() {
                last = child.value();
            }
            key = &key[child.prefix.len()..];
            cur = child;
        }
        last
    }

    /// Value of the smallest key in the tree.
    pub fn min(&self) -> Option<&V> {
        self.root.min()
    }

    /// Value of the largest key in the tree.
    pub fn max(&self) -> Option<&V> {
        self.root.max()
    }

    /// Value of the key immediately before `key`.
    ///
    /// `key` must be a path in the tree; `None` is returned both when it is not and when nothing
    /// precedes it.
    pub fn predecessor<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        let mut key = key.as_ref();
        let mut cur = &self.root;
        let mut rewind = None;

        while let Some(&k) = key.first() {
            let idx = cur.child_index(k)?;
            let child = cur.child_at(idx);
            if !child.prefix.is_prefix_of(key) {
                return None;
            }

            if idx > 0 {
                rewind = Some(Rewind::Sibling(cur.child_at(idx - 1)));
            } else if cur.has_value() {
                rewind = Some(Rewind::Ancestor(cur));
            }
            key = &key[child.prefix.len()..];
            cur = child;
        }

        match rewind? {
            Rewind::Sibling(node) => node.max(),
            Rewind::Ancestor(node) => node.value(),
        }
    }

    /// Value of the key immediately after `key`.
    ///
    /// `key` must be a path in the tree; `None` is returned both when it is not and when nothing
    /// follows it.
    pub fn successor<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        let mut key = key.as_ref();
        let mut cur = &self.root;
        let mut next = None;

        while let Some(&k) = key.first() {
            let idx = cur.child_index(k)?;
            let child = cur.child_at(idx);
            if !child.prefix.is_prefix_of(key) {
                return None;
            }

            if idx + 1 < cur.num_children() {
                next = Some(cur.child_at(idx + 1));
            }
            key = &key[child.prefix.len()..];
            cur = child;
        }

        // Anything below the key itself is closer than any sibling further right.
        if let Some(first) = cur.children.first() {
            next = Some(first);
        }

        next?.min()
    }

    /// Iterate over all key-value pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(Some(&self.root), Vec::new())
    }

    /// Iterate, in ascending key order, over the key-value pairs whose key starts with `prefix`.
    pub fn prefix_iter<K: AsRef<[u8]>>(&self, prefix: K) -> Iter<'_, V> {
        let prefix = prefix.as_ref();
        match self.seek_prefix(prefix) {
            Some((node, consumed)) => {
                let mut key = prefix[..consumed].to_vec();
                key.extend_from_slice(node.prefix.to_slice());
                Iter::new(Some(node), key)
            }
            None => Iter::new(None, Vec::new()),
        }
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Dump the node structure to stderr.
    pub fn print_tree(&self) {
        Self::print_tree_recurse(&self.root, 0);
    }

    fn print_tree_recurse(node: &DefaultNode<V>, depth: usize) {
        let indent = "  ".repeat(depth);
        eprintln!(
            "{}prefix {}, {}, {} #children",
            indent,
            key_str_rep(node.prefix.to_slice()),
            if node.has_value() { "value" } else { "no value" },
            node.num_children()
        );
        for (_k, child) in node.iter() {
            Self::print_tree_recurse(child, depth + 1);
        }
    }

    /// Check the structural invariants of the tree, reporting the first violation found.
    ///
    /// A correctly functioning tree always passes; this exists for tests and fuzzing.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.root.prefix.is_empty(),
            "root prefix must be empty, found {}",
            key_str_rep(self.root.prefix.to_slice())
        );
        let mut path = Vec::new();
        let values = crate::validate::validate_subtree(&self.root, &mut path, true)?;
        anyhow::ensure!(
            values == self.size,
            "tree reports {} values but holds {}",
            self.size,
            values
        );
        Ok(())
    }

    /// Node reached by consuming all of `key` along whole edges.
    fn seek_node(&self, mut key: &[u8]) -> Option<&DefaultNode<V>> {
        let mut cur = &self.root;
        while let Some(&k) = key.first() {
            let child = cur.seek_child(k)?;
            if !child.prefix.is_prefix_of(key) {
                return None;
            }
            key = &key[child.prefix.len()..];
            cur = child;
        }
        Some(cur)
    }

    /// Root of the subtree holding every key that starts with `prefix`, along with the number of
    /// `prefix` bytes consumed before that node's own edge. The prefix may end part-way through
    /// the node's edge.
    fn seek_prefix(&self, prefix: &[u8]) -> Option<(&DefaultNode<V>, usize)> {
        let mut cur = &self.root;
        let mut depth = 0;
        while depth < prefix.len() {
            let rest = &prefix[depth..];
            let child = cur.seek_child(rest[0])?;
            let longest_common_prefix = child.prefix.prefix_length_slice(rest);
            if longest_common_prefix == rest.len() {
                return Some((child, depth));
            }
            if longest_common_prefix < child.prefix.len() {
                return None;
            }
            depth += longest_common_prefix;
            cur = child;
        }
        Some((cur, depth))
    }

    fn get_tree_stats_recurse(node: &DefaultNode<V>, tree_stats: &mut TreeStats, height: usize) {
        if height > tree_stats.max_height {
            tree_stats.max_height = height;
        }
        update_tree_stats(tree_stats, node);
        for (_k, child) in node.iter() {
            Self::get_tree_stats_recurse(child, tree_stats, height + 1);
        }
    }
}

impl<V> TreeStatsTrait for RadixTree<V> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        Self::get_tree_stats_recurse(&self.root, &mut stats, 1);
        stats
    }
}

impl<V: Debug> Debug for RadixTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (key_str_rep(&k), v)))
            .finish()
    }
}

impl<'a, V> IntoIterator for &'a RadixTree<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for RadixTree<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = RadixTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: AsRef<[u8]>, V> Extend<(K, V)> for RadixTree<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
