use crate::mapping::sorted_mapping::SortedMapping;
use crate::mapping::NodeMapping;
use crate::partials::vector_partial::VectorPartial;
use crate::partials::Partial;
use crate::utils::trace_event;

/// A node of the tree. Every node may carry a value, and every node may have children; a node
/// without a value is a pure branch point.
#[derive(Clone)]
pub(crate) struct Node<P: Partial, V> {
    pub(crate) prefix: P,
    pub(crate) value: Option<V>,
    pub(crate) children: SortedMapping<Node<P, V>>,
}

pub(crate) type DefaultNode<V> = Node<VectorPartial, V>;

impl<P: Partial, V> Node<P, V> {
    #[inline]
    pub(crate) fn new_root() -> Self {
        Self::new_inner(P::from(&[] as &[u8]))
    }

    #[inline]
    pub(crate) fn new_leaf(prefix: P, value: V) -> Self {
        Self {
            prefix,
            value: Some(value),
            children: SortedMapping::new(),
        }
    }

    #[inline]
    pub(crate) fn new_inner(prefix: P) -> Self {
        Self {
            prefix,
            value: None,
            children: SortedMapping::new(),
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }

    pub fn num_children(&self) -> usize {
        self.children.num_children()
    }

    pub(crate) fn seek_child(&self, key: u8) -> Option<&Node<P, V>> {
        self.children.seek_child(key)
    }

    pub(crate) fn seek_child_mut(&mut self, key: u8) -> Option<&mut Node<P, V>> {
        self.children.seek_child_mut(key)
    }

    pub(crate) fn child_index(&self, key: u8) -> Option<usize> {
        self.children.index(key)
    }

    pub(crate) fn child_at(&self, idx: usize) -> &Node<P, V> {
        self.children.child_at(idx)
    }

    pub(crate) fn child_at_mut(&mut self, idx: usize) -> &mut Node<P, V> {
        self.children.child_at_mut(idx)
    }

    /// Adds `node` under the discriminator taken from the first byte of its prefix.
    /// Panics if a sibling already uses that discriminator.
    pub(crate) fn add_child(&mut self, node: Node<P, V>) {
        assert!(!node.prefix.is_empty(), "child prefix must not be empty");
        let key = node.prefix.at(0);
        self.children.add_child(key, node);
    }

    pub(crate) fn delete_child_at(&mut self, idx: usize) -> Node<P, V> {
        let node = self.children.delete_at(idx);
        trace_event!(prefix = %crate::utils::key_str_rep(node.prefix.to_slice()), "pruned edge");
        node
    }

    /// Splits this node's edge `at` bytes in. This node becomes a value-less branch holding the
    /// first `at` bytes of the old prefix, with the old contents as its only child.
    pub(crate) fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.prefix.len());
        let head = self.prefix.partial_before(at);
        let tail = self.prefix.partial_after(at);
        trace_event!(
            head = %crate::utils::key_str_rep(head.to_slice()),
            tail = %crate::utils::key_str_rep(tail.to_slice()),
            "split edge"
        );

        let mut old = std::mem::replace(self, Node::new_inner(head));
        old.prefix = tail;
        self.add_child(old);
    }

    /// Collapses a value-less node with exactly one child into a single node, concatenating the
    /// prefixes. The child's value and children move up.
    pub(crate) fn merge_with_only_child(&mut self) {
        debug_assert!(self.value.is_none());
        let (_, child) = self.children.take_single_child();
        self.prefix = self.prefix.partial_extended_with(&child.prefix);
        self.value = child.value;
        self.children = child.children;
        trace_event!(prefix = %crate::utils::key_str_rep(self.prefix.to_slice()), "merged node");
    }

    /// Value of the smallest key at or below this node.
    pub(crate) fn min(&self) -> Option<&V> {
        let mut cur = self;
        while !cur.has_value() {
            cur = cur.children.first()?;
        }
        cur.value()
    }

    /// Value of the largest key at or below this node: always found at the bottom of the
    /// rightmost path.
    pub(crate) fn max(&self) -> Option<&V> {
        let mut cur = self;
        while let Some(last) = cur.children.last() {
            cur = last;
        }
        cur.value()
    }

    /// Visits the values of this subtree in key order until `f` returns false. Returns false if
    /// the walk was stopped.
    pub(crate) fn walk<'a, F>(&'a self, f: &mut F) -> bool
    where
        F: FnMut(&'a V) -> bool,
    {
        if let Some(v) = self.value() {
            if !f(v) {
                return false;
            }
        }
        for child in self.children.iter() {
            if !child.walk(f) {
                return false;
            }
        }
        true
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u8, &Self)> + '_ {
        self.children.iter_keyed()
    }
}
