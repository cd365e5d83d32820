use common::shapes::{Aabb2d, Circle2d};
use common::Vec2;

use rand::prelude::*;

#[test]
fn aabb_accessors() {
    let aabb = Aabb2d::new(Vec2::new(10.0, -5.0), Vec2::new(4.0, 2.0));
    assert_eq!(aabb.min(), Vec2::new(6.0, -7.0));
    assert_eq!(aabb.max(), Vec2::new(14.0, -3.0));
    assert_eq!(aabb.size(), Vec2::new(8.0, 4.0));
    assert_eq!(aabb.area(), 32.0);
}

#[test]
fn aabb_contains_point_is_closed() {
    let aabb = Aabb2d::square(Vec2::ZERO, 10.0);
    assert!(aabb.contains_point(Vec2::ZERO));
    assert!(aabb.contains_point(Vec2::new(10.0, 10.0)));
    assert!(aabb.contains_point(Vec2::new(-10.0, 3.0)));
    assert!(!aabb.contains_point(Vec2::new(10.1, 0.0)));
    assert!(!aabb.contains_point(Vec2::new(0.0, -10.1)));
}

#[test]
fn aabb_intersects_aabb_is_open() {
    let a = Aabb2d::square(Vec2::ZERO, 10.0);
    let overlapping = Aabb2d::square(Vec2::new(15.0, 0.0), 10.0);
    assert!(a.intersects_aabb(&overlapping));
    assert!(overlapping.intersects_aabb(&a));

    // Boxes sharing only an edge do not intersect.
    let touching = Aabb2d::square(Vec2::new(20.0, 0.0), 10.0);
    assert!(!a.intersects_aabb(&touching));
    assert!(!touching.intersects_aabb(&a));

    let apart = Aabb2d::square(Vec2::new(25.0, 0.0), 10.0);
    assert!(!a.intersects_aabb(&apart));
}

#[test]
fn aabb_contains_aabb_allows_shared_edges() {
    let outer = Aabb2d::square(Vec2::ZERO, 10.0);
    assert!(outer.contains_aabb(&Aabb2d::square(Vec2::new(5.0, 5.0), 5.0)));
    assert!(outer.contains_aabb(&outer));
    assert!(!outer.contains_aabb(&Aabb2d::square(Vec2::new(6.0, 0.0), 5.0)));
}

#[test]
fn aabb_contains_circle_uses_bounding_square() {
    let outer = Aabb2d::square(Vec2::ZERO, 10.0);
    assert!(outer.contains_circle(&Circle2d::new(Vec2::new(5.0, 5.0), 5.0)));
    assert!(outer.contains_circle(&Circle2d::new(Vec2::ZERO, 10.0)));
    assert!(!outer.contains_circle(&Circle2d::new(Vec2::new(6.0, 0.0), 5.0)));
}

#[test]
fn circle_contains_point_is_closed() {
    let circle = Circle2d::new(Vec2::ZERO, 5.0);
    assert!(circle.contains_point(Vec2::ZERO));
    assert!(circle.contains_point(Vec2::new(5.0, 0.0)));
    assert!(circle.contains_point(Vec2::new(3.0, 4.0)));
    assert!(!circle.contains_point(Vec2::new(3.1, 4.0)));
}

#[test]
fn circle_contains_aabb_checks_corners() {
    let circle = Circle2d::new(Vec2::ZERO, 5.0);
    // Corner distance sqrt(2) * 3 is within the radius.
    assert!(circle.contains_aabb(&Aabb2d::square(Vec2::ZERO, 3.0)));
    // Corner distance sqrt(2) * 4 is not.
    assert!(!circle.contains_aabb(&Aabb2d::square(Vec2::ZERO, 4.0)));
}

#[test]
fn circle_intersects_aabb_is_closed() {
    let circle = Circle2d::new(Vec2::new(15.0, 0.0), 5.0);
    let aabb = Aabb2d::square(Vec2::ZERO, 10.0);
    // Tangent along an edge still intersects.
    assert!(circle.intersects_aabb(&aabb));
    assert!(aabb.intersects_circle(&circle));
    assert!(!Circle2d::new(Vec2::new(15.1, 0.0), 5.0).intersects_aabb(&aabb));

    // Center inside the box.
    assert!(Circle2d::new(Vec2::new(1.0, 1.0), 0.0001).intersects_aabb(&aabb));
}

#[test]
fn circle_intersects_circle_is_closed() {
    let a = Circle2d::new(Vec2::ZERO, 3.0);
    assert!(a.intersects_circle(&Circle2d::new(Vec2::new(5.0, 0.0), 2.0)));
    assert!(!a.intersects_circle(&Circle2d::new(Vec2::new(5.5, 0.0), 2.0)));
}

#[test]
fn circle_area() {
    let circle = Circle2d::new(Vec2::ZERO, 2.0);
    assert!((circle.area() - 4.0 * std::f32::consts::PI).abs() < 1e-4);
}

#[test]
fn random_points_stay_inside() {
    let aabb = Aabb2d::new(Vec2::new(-30.0, 40.0), Vec2::new(20.0, 5.0));
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..1_000 {
        assert!(aabb.contains_point(aabb.random_point_inside(&mut rng)));
    }
}
