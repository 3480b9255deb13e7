//! Structural checks over a whole tree, used by tests and fuzzing.

use anyhow::Context;

use crate::node::DefaultNode;
use crate::partials::Partial;
use crate::utils::key_str_rep;

/// Checks every node below (and including) `node`, returning the number of values found.
/// `path` holds the key of `node`'s parent on entry and is restored before returning.
pub(crate) fn validate_subtree<V>(
    node: &DefaultNode<V>,
    path: &mut Vec<u8>,
    is_root: bool,
) -> anyhow::Result<usize> {
    let prefix = node.prefix.to_slice();
    let parent_len = path.len();
    path.extend_from_slice(prefix);

    if !is_root {
        anyhow::ensure!(
            !prefix.is_empty(),
            "node at {} has an empty prefix",
            key_str_rep(path)
        );
        anyhow::ensure!(
            node.has_value() || node.num_children() > 1,
            "node at {} has no value and {} children, it should have been {}",
            key_str_rep(path),
            node.num_children(),
            if node.is_leaf() { "pruned" } else { "merged" }
        );
    }

    let keys = node.children.keys();
    for pair in keys.windows(2) {
        anyhow::ensure!(
            pair[0] < pair[1],
            "children of {} out of order or duplicated: {:#04x} then {:#04x}",
            key_str_rep(path),
            pair[0],
            pair[1]
        );
    }

    let mut values = usize::from(node.has_value());
    for (k, child) in node.iter() {
        let first = child.prefix.to_slice().first().copied();
        anyhow::ensure!(
            first == Some(k),
            "child of {} registered under {:#04x} but its prefix is {}",
            key_str_rep(path),
            k,
            key_str_rep(child.prefix.to_slice())
        );
        values += validate_subtree(child, path, false)
            .with_context(|| format!("below {}", key_str_rep(path)))?;
    }

    path.truncate(parent_len);
    Ok(values)
}
