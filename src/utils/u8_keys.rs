//! Search helpers over a sorted array of discriminator bytes.
//!
//! Children of a node are ordered by the first byte of their prefix, and those bytes are kept
//! in their own contiguous array so lookups touch as little memory as possible.

/// Below this many keys a linear scan beats binary search.
const LINEAR_SCAN_WIDTH: usize = 8;

/// Returns the first position whose key is `>= key`, i.e. where `key` would have to be inserted
/// to keep `keys` sorted.
pub fn u8_keys_find_insert_position_sorted(key: u8, keys: &[u8]) -> usize {
    if keys.len() <= LINEAR_SCAN_WIDTH {
        return keys.iter().position(|&k| k >= key).unwrap_or(keys.len());
    }

    let mut left = 0;
    let mut right = keys.len();
    while left < right {
        let mid = (left + right) / 2;
        if keys[mid] < key {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

/// Returns the position of `key` in `keys`, if present.
pub fn u8_keys_find_key_position_sorted(key: u8, keys: &[u8]) -> Option<usize> {
    let idx = u8_keys_find_insert_position_sorted(key, keys);
    (idx < keys.len() && keys[idx] == key).then_some(idx)
}
