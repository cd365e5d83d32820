use super::lookup::{DEPTH_SCALE_LOOKUP, MORTON_LOOKUP};
use super::*;

impl<T: Copy> QuadTree<T> {
    /// Full rebuild from a complete element set.
    ///
    /// Four passes over the input, each depending on the whole state built by
    /// the previous one: morton code generation, top-down occupancy counting,
    /// leaf-boundary decision, element scatter. The only scratch allocation
    /// is the morton code array, dropped when the call returns.
    pub fn clear_and_bulk_insert(&mut self, incoming: &[QuadElement<T>]) {
        self.clear();
        if incoming.is_empty() {
            return;
        }
        self.reserve_elements(incoming.len());
        // The scatter writes leaf runs out of input order; pre-fill so the
        // indexed writes stay in bounds. Every slot gets overwritten.
        self.elements.resize(incoming.len(), incoming[0]);

        let morton_codes = self.prepare_morton_codes(incoming);
        self.count_occupancy(&morton_codes);
        self.prepare_leaves(1, 1);
        self.scatter(&morton_codes, incoming);
        self.verify_leaf_counts();
    }

    /// Grow geometrically: double, or exact fit when doubling is not enough.
    fn reserve_elements(&mut self, required: usize) {
        let capacity = self.elements.capacity();
        if capacity < required {
            self.elements.reserve(required.max(capacity * 2));
        }
    }

    /// One morton code per element, input order preserved. Positions are
    /// remapped into the depth-scaled array space: offset by the bounds
    /// center, Y flipped (world is Y-up, the addressing is Y-down), shifted
    /// positive, then scaled to `2^max_depth` buckets per axis.
    fn prepare_morton_codes(&self, incoming: &[QuadElement<T>]) -> Vec<u32> {
        let scale = DEPTH_SCALE_LOOKUP[self.max_depth];
        let depth_extents_scaling = Vec2::splat(scale as f32) / self.bounds.extents;
        let limit = (scale - 1) as i32;
        let mut codes = Vec::with_capacity(incoming.len());
        for element in incoming {
            let mut pos = element.pos - self.bounds.center;
            pos.y = -pos.y;
            let pos = (pos + self.bounds.extents) * 0.5 * depth_extents_scaling;
            // Truncate to bucket coordinates; positions outside the bounds
            // land in the nearest edge bucket.
            let x = (pos.x as i32).clamp(0, limit) as usize;
            let y = (pos.y as i32).clamp(0, limit) as usize;
            codes.push(MORTON_LOOKUP[x] as u32 | ((MORTON_LOOKUP[y] as u32) << 1));
        }
        codes
    }

    /// Walk every element from the root to max depth, incrementing the
    /// occupancy counter at each slot its code passes through. Ancestors end
    /// up holding the sum of all descendant counts.
    fn count_occupancy(&mut self, morton_codes: &[u32]) {
        for &code in morton_codes {
            let mut at = 0;
            for depth in 0..=self.max_depth {
                self.lookup[at] += 1;
                if depth < self.max_depth {
                    at = self.step_into_child(code, depth, at);
                }
            }
        }
    }

    /// Depth-first leaf decision over the four children below `prev_offset`.
    /// A subtree over the leaf threshold keeps subdividing until max depth;
    /// nonzero remainders become leaves and claim the next run in the element
    /// store. The decision is local per subtree, so siblings may settle at
    /// different depths. Empty slots stay unmarked and are never visited by
    /// queries.
    fn prepare_leaves(&mut self, prev_offset: usize, depth: usize) {
        for quadrant in 0..4 {
            let at = prev_offset + quadrant * self.child_block_size(depth);
            let occupancy = self.lookup[at];
            if occupancy > self.max_leaf_elements && depth < self.max_depth {
                self.prepare_leaves(at + 1, depth + 1);
            } else if occupancy != 0 {
                self.nodes[at] = QuadNode {
                    first_child_index: self.element_count as u32,
                    count: 0,
                    is_leaf: true,
                };
                self.element_count += occupancy as usize;
            }
        }
    }

    /// Re-walk each element to the first leaf on its path and write it into
    /// that leaf's run.
    fn scatter(&mut self, morton_codes: &[u32], incoming: &[QuadElement<T>]) {
        for (code, element) in morton_codes.iter().zip(incoming) {
            let mut at = 0;
            let mut depth = 0;
            loop {
                let node = self.nodes[at];
                if node.is_leaf {
                    self.elements[node.first_child_index as usize + node.count as usize] =
                        *element;
                    self.nodes[at].count += 1;
                    break;
                }
                assert!(
                    depth < self.max_depth,
                    "no leaf on the path of morton code {:#06x}; addressing defect",
                    code
                );
                at = self.step_into_child(*code, depth, at);
                depth += 1;
            }
        }
    }

    /// Every leaf must have received exactly the occupancy counted for it; a
    /// mismatch means the scatter and the counting pass disagreed on
    /// addressing.
    fn verify_leaf_counts(&self) {
        for (slot, node) in self.nodes.iter().enumerate() {
            if node.is_leaf {
                assert_eq!(
                    node.count, self.lookup[slot],
                    "leaf at slot {} holds {} elements but {} were counted",
                    slot, node.count, self.lookup[slot]
                );
            }
        }
    }
}
