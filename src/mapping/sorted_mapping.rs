use crate::mapping::NodeMapping;
use crate::utils::u8_keys::{
    u8_keys_find_insert_position_sorted, u8_keys_find_key_position_sorted,
};

/// Maps a key to a node, using a sorted array of keys and a corresponding array of nodes.
/// The key at a position is the discriminator of the node at the same position in children.
/// Keeping both arrays sorted gives binary search lookups and in-order iteration for free; on
/// insert or delete the entries to the right are shifted.
/// Unlike the fixed width node mappings, this one grows as needed up to the full 256 keys.
#[derive(Clone, Debug)]
pub struct SortedMapping<N> {
    keys: Vec<u8>,
    children: Vec<N>,
}

impl<N> Default for SortedMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SortedMapping<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Position at which `key` is, or would be inserted.
    #[inline]
    pub fn search(&self, key: u8) -> usize {
        u8_keys_find_insert_position_sorted(key, &self.keys)
    }

    /// Position of the child registered under `key`.
    #[inline]
    pub fn index(&self, key: u8) -> Option<usize> {
        u8_keys_find_key_position_sorted(key, &self.keys)
    }

    #[inline]
    pub fn child_at(&self, idx: usize) -> &N {
        &self.children[idx]
    }

    #[inline]
    pub fn child_at_mut(&mut self, idx: usize) -> &mut N {
        &mut self.children[idx]
    }

    pub fn first(&self) -> Option<&N> {
        self.children.first()
    }

    pub fn last(&self) -> Option<&N> {
        self.children.last()
    }

    pub fn delete_at(&mut self, idx: usize) -> N {
        self.keys.remove(idx);
        self.children.remove(idx)
    }

    // Return the only child, and remove it from the mapping.
    pub fn take_single_child(&mut self) -> (u8, N) {
        assert_eq!(self.children.len(), 1, "mapping must hold exactly one child");
        match (self.keys.pop(), self.children.pop()) {
            (Some(key), Some(node)) => (key, node),
            _ => unreachable!("Should not be possible."),
        }
    }

    pub fn keys(&self) -> &[u8] {
        &self.keys
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.children.iter()
    }

    pub fn iter_keyed(&self) -> impl DoubleEndedIterator<Item = (u8, &N)> + '_ {
        self.keys.iter().copied().zip(self.children.iter())
    }
}

impl<N> NodeMapping<N> for SortedMapping<N> {
    #[inline]
    fn add_child(&mut self, key: u8, node: N) {
        let idx = self.search(key);
        assert!(
            idx == self.keys.len() || self.keys[idx] != key,
            "duplicate discriminator {key:#04x}"
        );
        self.keys.insert(idx, key);
        self.children.insert(idx, node);
    }

    fn seek_child(&self, key: u8) -> Option<&N> {
        let idx = self.index(key)?;
        Some(&self.children[idx])
    }

    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        let idx = self.index(key)?;
        Some(&mut self.children[idx])
    }

    fn delete_child(&mut self, key: u8) -> Option<N> {
        let idx = self.index(key)?;
        Some(self.delete_at(idx))
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.children.len()
    }
}
