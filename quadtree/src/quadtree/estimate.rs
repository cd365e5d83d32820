use super::*;
use common::shapes::Circle2d;

impl<T: Copy> QuadTree<T> {
    /// Expected result count for a rect query assuming uniform density. A
    /// planning aid for pre-sizing result buffers; carries no correctness
    /// weight.
    pub fn estimate_result_size_rect(&self, query: &Aabb2d) -> usize {
        self.estimate_from_area(query.area())
    }

    /// Circle variant of [`Self::estimate_result_size_rect`].
    pub fn estimate_result_size_circle(&self, query: &Circle2d) -> usize {
        self.estimate_from_area(query.area())
    }

    fn estimate_from_area(&self, shape_area: f32) -> usize {
        if self.element_count == 0 {
            return 0;
        }
        let density = self.element_count as f32 / self.bounds.area();
        ((shape_area * density).ceil() as usize).min(self.element_count)
    }
}
