use std::f64::consts::PI;
use crate::interactions::{gjk_collision_detection, gjk_collision_detection_with_config};
use crate::models::{ConvexHull, Quaternion, RigidBody, StockShape};
use crate::utils::CollisionConfig;

fn stock_at(stock: StockShape, position: (f64, f64, f64)) -> RigidBody {
    RigidBody::new(ConvexHull::stock(stock), position, 1.0).unwrap()
}

#[test]
fn test_gjk_cube_cube_no_collision() {
    let a = stock_at(StockShape::Box, (0.0, 0.0, 0.0));
    let b = stock_at(StockShape::Box, (5.0, 0.0, 0.0));

    assert!(!gjk_collision_detection(&a, &b), "GJK should not detect collision between distant cubes");
    assert!(!gjk_collision_detection(&b, &a));
}

#[test]
fn test_gjk_cube_cube_overlap() {
    for offset in [0.0, 0.4, 0.8, 1.0] {
        let a = stock_at(StockShape::Box, (0.0, 0.0, 0.0));
        let b = stock_at(StockShape::Box, (offset, 0.0, 0.0));

        assert!(gjk_collision_detection(&a, &b), "GJK should detect overlap at offset {}", offset);
        assert!(gjk_collision_detection(&b, &a), "GJK should be symmetric at offset {}", offset);
    }
}

#[test]
fn test_gjk_rotated_cubes() {
    let a = stock_at(StockShape::Box, (0.0, 0.0, 0.0));
    let b = stock_at(StockShape::Box, (0.9, 0.1, 0.0))
        .with_orientation(Quaternion::from_axis_angle((0.0, 0.0, 1.0), PI / 4.0));

    assert!(gjk_collision_detection(&a, &b), "Rotated corner reaching into the cube should collide");

    // The rotated corner reaches 0.5 + sqrt(2)/2 from the centre; at 1.3 there is a gap
    let far = stock_at(StockShape::Box, (1.3, 0.0, 0.0))
        .with_orientation(Quaternion::from_axis_angle((0.0, 0.0, 1.0), PI / 4.0));
    assert!(!gjk_collision_detection(&a, &far));
}

#[test]
fn test_gjk_dodecahedra() {
    let a = stock_at(StockShape::Dodecahedron, (0.0, 0.0, 0.0));

    assert!(gjk_collision_detection(&a, &stock_at(StockShape::Dodecahedron, (3.5, 0.0, 0.0))));
    assert!(!gjk_collision_detection(&a, &stock_at(StockShape::Dodecahedron, (4.0, 0.0, 0.0))));
}

#[test]
fn test_gjk_iteration_cap_reports_no_collision() {
    let a = stock_at(StockShape::Box, (0.0, 0.0, 0.0));
    let b = stock_at(StockShape::Box, (0.4, 0.0, 0.0));

    let starved = CollisionConfig::new(Some(1), None, None, None);
    assert!(!gjk_collision_detection_with_config(&a, &b, &starved), "A single iteration cannot enclose the origin");

    let enough = CollisionConfig::new(Some(2), None, None, None);
    assert!(gjk_collision_detection_with_config(&a, &b, &enough));
}
