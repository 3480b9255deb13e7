pub mod vector_partial;

/// An edge label: the run of key bytes that leads from a node's parent to the node itself.
///
/// Concatenating the partials along a path from the root yields the full key of the node at the
/// end of that path.
pub trait Partial: AsRef<[u8]> + for<'a> From<&'a [u8]> {
    /// Returns a partial up to `length` bytes.
    fn partial_before(&self, length: usize) -> Self;
    /// Returns a partial from `start` onwards.
    fn partial_after(&self, start: usize) -> Self;
    /// Extends the partial with another partial.
    fn partial_extended_with(&self, other: &Self) -> Self;
    /// Returns the byte at `pos`.
    fn at(&self, pos: usize) -> u8;
    /// Returns the length of the partial.
    fn len(&self) -> usize;
    /// Returns true if the partial is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the length of the common prefix between `self` and `slice`.
    fn prefix_length_slice(&self, slice: &[u8]) -> usize;
    /// Return a slice form of the partial.
    fn to_slice(&self) -> &[u8];

    /// Returns true if `key` begins with the whole of this partial.
    fn is_prefix_of(&self, key: &[u8]) -> bool {
        key.starts_with(self.to_slice())
    }
}
