//! Statistics and introspection for the radix tree.
//!
//! This module gathers statistics about the internal shape of a tree: how many nodes exist,
//! how many carry values, and how wide the branching is at each level.
//!
//! Statistics can be useful for:
//! - Understanding memory usage patterns
//! - Debugging tree structure issues
//! - Checking that paths stay compressed under a given workload

use std::collections::BTreeMap;

use crate::node::Node;
use crate::partials::Partial;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

/// Aggregate figures for all nodes sharing the same number of children.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeStats {
    pub width: usize,
    pub total_nodes: usize,
    pub total_values: usize,
}

#[derive(Debug, Default, Clone)]
pub struct TreeStats {
    /// Keyed by number of children.
    pub node_stats: BTreeMap<usize, NodeStats>,
    pub num_nodes: usize,
    pub num_leaves: usize,
    pub num_values: usize,
    pub num_inner_nodes: usize,
    pub max_height: usize,
}

impl TreeStats {
    /// Average number of children per inner node.
    pub fn average_fanout(&self) -> f64 {
        if self.num_inner_nodes == 0 {
            return 0.0;
        }
        // Every node except the root is somebody's child.
        (self.num_nodes - 1) as f64 / self.num_inner_nodes as f64
    }
}

pub(crate) fn update_tree_stats<P: Partial, V>(tree_stats: &mut TreeStats, node: &Node<P, V>) {
    let width = node.num_children();
    let has_value = usize::from(node.has_value());

    tree_stats.num_nodes += 1;
    tree_stats.num_values += has_value;
    if node.is_leaf() {
        tree_stats.num_leaves += 1;
    } else {
        tree_stats.num_inner_nodes += 1;
    }

    tree_stats
        .node_stats
        .entry(width)
        .and_modify(|e| {
            e.total_nodes += 1;
            e.total_values += has_value;
        })
        .or_insert(NodeStats {
            width,
            total_nodes: 1,
            total_values: has_value,
        });
}
