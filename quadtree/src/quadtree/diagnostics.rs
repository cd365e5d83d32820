//! Read-only walkers over the node and occupancy tables, for validation and
//! depth-utilisation checks in tests and tooling.

use super::*;

/// Per-depth usage tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthUsage {
    pub depth: usize,
    /// Slots at this depth with nonzero occupancy.
    pub used_nodes: usize,
    /// All possible slots at this depth (`4^depth`).
    pub total_nodes: usize,
    /// Elements stored in leaves at this depth.
    pub leaf_elements: usize,
}

/// Snapshot of one leaf descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafNode {
    pub slot: usize,
    pub first_child_index: usize,
    pub count: usize,
}

impl<T: Copy> QuadTree<T> {
    /// The raw occupancy table: one counter per node slot across all depths.
    pub fn occupancy_table(&self) -> &[u32] {
        &self.lookup
    }

    /// Every slot currently flagged as a leaf.
    pub fn leaf_nodes(&self) -> Vec<LeafNode> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf)
            .map(|(slot, node)| LeafNode {
                slot,
                first_child_index: node.first_child_index as usize,
                count: node.count as usize,
            })
            .collect()
    }

    /// Sum of all leaf counts; equals `entry_count()` on a consistent tree.
    pub fn leaf_element_total(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf)
            .map(|node| node.count as usize)
            .sum()
    }

    /// Occupied-node and leaf-element tallies per depth, walked over the
    /// implicit layout.
    pub fn depth_usage(&self) -> Vec<DepthUsage> {
        let mut usage: Vec<DepthUsage> = (0..=self.max_depth)
            .map(|depth| DepthUsage {
                depth,
                used_nodes: 0,
                total_nodes: 1 << (2 * depth),
                leaf_elements: 0,
            })
            .collect();
        if self.lookup[0] > 0 {
            usage[0].used_nodes = 1;
        }
        self.depth_usage_recursive(1, 1, &mut usage);
        usage
    }

    fn depth_usage_recursive(&self, prev_offset: usize, depth: usize, usage: &mut [DepthUsage]) {
        for quadrant in 0..4 {
            let at = prev_offset + quadrant * self.child_block_size(depth);
            let occupancy = self.lookup[at];
            if occupancy == 0 {
                continue;
            }
            usage[depth].used_nodes += 1;
            let node = self.nodes[at];
            if node.is_leaf {
                usage[depth].leaf_elements += node.count as usize;
            } else if depth < self.max_depth {
                self.depth_usage_recursive(at + 1, depth + 1, usage);
            }
        }
    }
}
