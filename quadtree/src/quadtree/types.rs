use common::Vec2;

/// One entry in the tree: a position and an opaque payload the index never
/// interprets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadElement<T: Copy> {
    pub pos: Vec2,
    pub element: T,
}

impl<T: Copy> QuadElement<T> {
    pub fn new(pos: Vec2, element: T) -> Self {
        Self { pos, element }
    }
}

/// Leaf descriptor. `first_child_index` is the offset of this leaf's run in
/// the element store; `count` is filled in during the scatter phase and must
/// end equal to the occupancy recorded for the slot.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct QuadNode {
    pub(crate) first_child_index: u32,
    pub(crate) count: u32,
    pub(crate) is_leaf: bool,
}
