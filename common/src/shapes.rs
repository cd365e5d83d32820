use glam::Vec2;
use rand::Rng;

/// Axis-aligned box stored as center + half-size extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2d {
    pub center: Vec2,
    pub extents: Vec2,
}

impl Aabb2d {
    pub fn new(center: Vec2, extents: Vec2) -> Self {
        Self { center, extents }
    }

    /// Square box, the form the quadtree uses for its own bounds.
    pub fn square(center: Vec2, half_size: f32) -> Self {
        Self {
            center,
            extents: Vec2::splat(half_size),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.extents
    }

    pub fn size(&self) -> Vec2 {
        self.extents * 2.0
    }

    pub fn area(&self) -> f32 {
        let size = self.size();
        size.x * size.y
    }

    /// Closed on all edges: a point exactly on the boundary is contained.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// All four corners of `other` must be contained; shared edges count.
    pub fn contains_aabb(&self, other: &Aabb2d) -> bool {
        let min = other.min();
        let max = other.max();
        self.contains_point(min)
            && self.contains_point(Vec2::new(min.x, max.y))
            && self.contains_point(Vec2::new(max.x, min.y))
            && self.contains_point(max)
    }

    /// The circle's own bounding square must fit inside the box.
    pub fn contains_circle(&self, circle: &Circle2d) -> bool {
        let min = self.min();
        let max = self.max();
        circle.center.x - circle.radius >= min.x
            && circle.center.x + circle.radius <= max.x
            && circle.center.y - circle.radius >= min.y
            && circle.center.y + circle.radius <= max.y
    }

    /// Open separating-axis test: boxes that only touch along an edge do not
    /// intersect.
    pub fn intersects_aabb(&self, other: &Aabb2d) -> bool {
        (self.center.x - other.center.x).abs() < self.extents.x + other.extents.x
            && (self.center.y - other.center.y).abs() < self.extents.y + other.extents.y
    }

    pub fn intersects_circle(&self, circle: &Circle2d) -> bool {
        circle.intersects_aabb(self)
    }

    /// Uniformly distributed point inside the box, for test data.
    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Vec2 {
        let min = self.min();
        let max = self.max();
        Vec2::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle2d {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle2d {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Closed: a point exactly on the rim is contained.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }

    /// All four corners of the box must pass the distance test.
    pub fn contains_aabb(&self, aabb: &Aabb2d) -> bool {
        let min = aabb.min();
        let max = aabb.max();
        self.contains_point(min)
            && self.contains_point(Vec2::new(min.x, max.y))
            && self.contains_point(Vec2::new(max.x, min.y))
            && self.contains_point(max)
    }

    /// Closest-point-on-box test. Closed so that epsilon-radius point probes
    /// still hit the node they sit on the edge of.
    pub fn intersects_aabb(&self, aabb: &Aabb2d) -> bool {
        let closest = self.center.clamp(aabb.min(), aabb.max());
        self.contains_point(closest)
    }

    pub fn intersects_circle(&self, other: &Circle2d) -> bool {
        let combined = self.radius + other.radius;
        self.center.distance_squared(other.center) <= combined * combined
    }
}
