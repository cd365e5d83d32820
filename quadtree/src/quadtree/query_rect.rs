use super::*;

impl<T: Copy> QuadTree<T> {
    /// Append every element inside `query` to `results`. The caller clears
    /// the buffer between queries if reuse is wanted.
    pub fn query_rect(&self, query: &Aabb2d, results: &mut Vec<QuadElement<T>>) {
        if self.element_count == 0 {
            return;
        }
        self.query_rect_recursive(query, self.bounds, false, 1, 1, results);
    }

    // Keep in sync with query_circle.rs; duplicated for perf.
    fn query_rect_recursive(
        &self,
        query: &Aabb2d,
        parent_bounds: Aabb2d,
        parent_contained: bool,
        prev_offset: usize,
        depth: usize,
        results: &mut Vec<QuadElement<T>>,
    ) {
        let block_size = self.child_block_size(depth);
        for quadrant in 0..4 {
            let child_bounds = Self::child_bounds(parent_bounds, quadrant);

            // Once a subtree is proven fully contained it is never shape
            // tested again, only copied. Disjoint subtrees are pruned whole.
            let mut contained = parent_contained;
            if !contained {
                if query.contains_aabb(&child_bounds) {
                    contained = true;
                } else if !query.intersects_aabb(&child_bounds) {
                    continue;
                }
            }

            let at = prev_offset + quadrant * block_size;
            let occupancy = self.lookup[at];
            if occupancy > self.max_leaf_elements && depth < self.max_depth {
                self.query_rect_recursive(
                    query,
                    child_bounds,
                    contained,
                    at + 1,
                    depth + 1,
                    results,
                );
            } else if occupancy != 0 {
                let run = self.leaf_run(self.nodes[at]);
                if contained {
                    results.extend_from_slice(run);
                } else {
                    results.reserve(run.len());
                    for element in run {
                        if query.contains_point(element.pos) {
                            results.push(*element);
                        }
                    }
                }
            }
        }
    }
}
