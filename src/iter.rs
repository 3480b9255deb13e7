use std::slice;

use crate::node::DefaultNode;
use crate::partials::Partial;

/// Ascending-order iterator over the entries of a tree, or of the subtree under a prefix.
///
/// Keys are rebuilt from the edge labels as the iterator descends, so each yielded key is a fresh
/// `Vec<u8>`.
pub struct Iter<'a, V> {
    // A node's own value, yielded before any of its children.
    pending: Option<(Vec<u8>, &'a V)>,
    // Child iterators for each level of the current path, along with the length the key had
    // before that level's children were appended.
    node_iter_stack: Vec<(slice::Iter<'a, DefaultNode<V>>, usize)>,
    cur_key: Vec<u8>,
}

impl<'a, V> Iter<'a, V> {
    /// `key` is the full key of `node`, including its own prefix.
    pub(crate) fn new(node: Option<&'a DefaultNode<V>>, key: Vec<u8>) -> Self {
        let Some(node) = node else {
            return Self {
                pending: None,
                node_iter_stack: Vec::new(),
                cur_key: Vec::new(),
            };
        };

        Self {
            pending: node.value().map(|v| (key.clone(), v)),
            node_iter_stack: vec![(node.children.iter(), key.len())],
            cur_key: key,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.pending.take() {
            return Some(entry);
        }

        // Grab the last iterator from the stack, and see if there's more to iterate off of it.
        // If not, pop it off and continue. Otherwise descend into the next child, pushing its
        // children, and return its value if it has one.
        loop {
            let (last_iter, key_len) = self.node_iter_stack.last_mut()?;
            let key_len = *key_len;

            let Some(node) = last_iter.next() else {
                self.node_iter_stack.pop();
                continue;
            };

            self.cur_key.truncate(key_len);
            self.cur_key.extend_from_slice(node.prefix.to_slice());
            if !node.is_leaf() {
                self.node_iter_stack
                    .push((node.children.iter(), self.cur_key.len()));
            }

            if let Some(v) = node.value() {
                return Some((self.cur_key.clone(), v));
            }
        }
    }
}
