mod bulk_insert;
mod config;
mod diagnostics;
mod estimate;
mod lookup;
mod query_circle;
mod query_rect;
mod types;

pub use self::config::Config;
pub use self::diagnostics::{DepthUsage, LeafNode};
pub use self::types::QuadElement;

use self::lookup::{DEPTH_SIZE_LOOKUP, MAX_SUPPORTED_DEPTH};
use self::types::QuadNode;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Aabb2d;
use common::Vec2;

/// Bounded-region quadtree over point elements, built for bulk rebuilds and
/// window queries.
///
/// The tree is implicit: node slots for every possible node across all depths
/// live in two flat arrays, addressed through interleaved-bit (morton) codes.
/// `lookup` holds per-slot occupancy (ancestors include descendant counts),
/// `nodes` holds leaf descriptors, and `elements` is partitioned into
/// contiguous per-leaf runs. All three are rebuilt from scratch by
/// `clear_and_bulk_insert`; there is no incremental mutation.
pub struct QuadTree<T: Copy> {
    bounds: Aabb2d,
    max_depth: usize,
    max_leaf_elements: u32,
    element_count: usize,
    lookup: Vec<u32>,
    nodes: Vec<QuadNode>,
    elements: Vec<QuadElement<T>>,
}

impl<T: Copy> QuadTree<T> {
    pub fn new(bounds: Aabb2d) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Aabb2d, config: Config) -> QuadtreeResult<Self> {
        if config.max_depth == 0 || config.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(QuadtreeError::DepthOutOfRange {
                max_depth: config.max_depth,
            });
        }
        let extents = bounds.extents;
        if !(extents.x.is_finite() && extents.y.is_finite()) || extents.x <= 0.0 || extents.y <= 0.0
        {
            return Err(QuadtreeError::InvalidBoundsExtents {
                x: extents.x,
                y: extents.y,
            });
        }
        // The per-depth bit-shift arithmetic assumes one scale for both axes.
        if extents.x != extents.y {
            return Err(QuadtreeError::NonSquareBounds {
                x: extents.x,
                y: extents.y,
            });
        }

        // One slot for every possible node through max_depth, flat.
        let total_slots = DEPTH_SIZE_LOOKUP[config.max_depth + 1];
        Ok(Self {
            bounds,
            max_depth: config.max_depth,
            max_leaf_elements: config.max_leaf_elements,
            element_count: 0,
            lookup: vec![0; total_slots],
            nodes: vec![QuadNode::default(); total_slots],
            elements: Vec::with_capacity(config.initial_capacity),
        })
    }

    /// Reset to an empty tree. Backing allocations are kept for reuse.
    pub fn clear(&mut self) {
        self.lookup.fill(0);
        self.nodes.fill(QuadNode::default());
        self.elements.clear();
        self.element_count = 0;
    }

    pub fn entry_count(&self) -> usize {
        self.element_count
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_leaf_elements(&self) -> u32 {
        self.max_leaf_elements
    }

    pub fn bounds(&self) -> Aabb2d {
        self.bounds
    }

    /// Slot of the child a morton code selects when stepping from a node at
    /// `depth` one level down. The `+1` skips the node's own slot; children
    /// follow their parent in the flat layout.
    #[inline]
    fn step_into_child(&self, morton_code: u32, depth: usize, at: usize) -> usize {
        let at_depth = self.max_depth - depth;
        let quadrant = ((morton_code >> ((at_depth - 1) * 2)) & 0b11) as usize;
        at + DEPTH_SIZE_LOOKUP[at_depth] * quadrant + 1
    }

    /// Number of slots one child subtree occupies at `depth`; sibling slots
    /// at the same depth are this far apart.
    #[inline]
    fn child_block_size(&self, depth: usize) -> usize {
        DEPTH_SIZE_LOOKUP[self.max_depth - depth + 1]
    }

    /// Spatial bounds of a child quadrant, derived by halving the parent.
    /// Quadrant order matches the morton layout after the world->array Y
    /// flip: 0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right.
    #[inline]
    fn child_bounds(parent: Aabb2d, quadrant: usize) -> Aabb2d {
        let half = parent.extents.x * 0.5;
        let offset = match quadrant {
            0 => Vec2::new(-half, half),
            1 => Vec2::new(half, half),
            2 => Vec2::new(-half, -half),
            _ => Vec2::new(half, -half),
        };
        Aabb2d::square(parent.center + offset, half)
    }

    /// Contiguous element run owned by a leaf.
    #[inline]
    fn leaf_run(&self, node: QuadNode) -> &[QuadElement<T>] {
        let first = node.first_child_index as usize;
        &self.elements[first..first + node.count as usize]
    }
}
