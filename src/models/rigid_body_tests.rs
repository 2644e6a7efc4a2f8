use approx::assert_abs_diff_eq;
use std::f64::consts::PI;
use crate::models::{ConvexBody, ConvexHull, Quaternion, RigidBody, Shape3D, StockShape};
use crate::utils::CollisionError;

fn unit_cube_at(position: (f64, f64, f64)) -> RigidBody {
    RigidBody::new(ConvexHull::stock(StockShape::Box), position, 1.0).unwrap()
}

#[test]
fn test_rejects_invalid_mass() {
    let hull = ConvexHull::stock(StockShape::Box);
    assert_eq!(RigidBody::new(hull.clone(), (0.0, 0.0, 0.0), 0.0).unwrap_err(), CollisionError::InvalidMass);
    assert_eq!(RigidBody::new(hull, (0.0, 0.0, 0.0), f64::INFINITY).unwrap_err(), CollisionError::InvalidMass);
}

#[test]
fn test_semi_implicit_euler_step() {
    let mut body = RigidBody::new(ConvexHull::stock(StockShape::Box), (0.0, 0.0, 0.0), 2.0).unwrap();
    body.apply_force((4.0, 0.0, 0.0));
    body.update(0.5);

    // v = 0 + (4 / 2) * 0.5 = 1, x = 0 + 1 * 0.5 = 0.5 (new velocity drives the position)
    assert_eq!(body.velocity(), (1.0, 0.0, 0.0));
    assert_eq!(body.position(), (0.5, 0.0, 0.0));

    // The force was consumed, so the next step coasts
    body.update(0.5);
    assert_eq!(body.velocity(), (1.0, 0.0, 0.0), "Force accumulator should be cleared");
    assert_eq!(body.position(), (1.0, 0.0, 0.0));
}

#[test]
fn test_update_clears_contact_flag() {
    let mut body = unit_cube_at((0.0, 0.0, 0.0));
    body.mark_contact();
    assert!(body.in_contact());

    body.update(0.01);
    assert!(!body.in_contact());
}

#[test]
fn test_world_model_transforms() {
    let body = unit_cube_at((1.0, 2.0, 3.0))
        .with_orientation(Quaternion::from_axis_angle((0.0, 0.0, 1.0), PI / 2.0));

    // Model +x maps to world +y after a quarter turn about z
    let world = body.model_to_world((1.0, 0.0, 0.0));
    assert_abs_diff_eq!(world.0, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(world.1, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(world.2, 3.0, epsilon = 1e-12);

    let model = body.world_to_model(world);
    assert_abs_diff_eq!(model.0, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(model.1, 0.0, epsilon = 1e-12);

    // Directions ignore translation
    let dir = body.world_to_model_direction((0.0, 1.0, 0.0));
    assert_abs_diff_eq!(dir.0, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dir.1, 0.0, epsilon = 1e-12);
}

#[test]
fn test_world_support_point_follows_pose() {
    let body = unit_cube_at((5.0, 0.0, 0.0));
    assert_eq!(body.support_point((1.0, 0.0, 0.0)), (5.5, -0.5, -0.5));

    let rotated = RigidBody::new(ConvexHull::new(Shape3D::new_cuboid(2.0, 1.0, 1.0)).unwrap(), (0.0, 0.0, 0.0), 1.0)
        .unwrap()
        .with_orientation(Quaternion::from_axis_angle((0.0, 0.0, 1.0), PI / 2.0));
    // The long axis now points along world y
    let top = rotated.support_point((0.0, 1.0, 0.0));
    assert_abs_diff_eq!(top.1, 1.0, epsilon = 1e-12);
}

#[test]
fn test_translate_keeps_velocity() {
    let mut body = unit_cube_at((0.0, 0.0, 0.0));
    body.set_velocity((1.0, 0.0, 0.0));
    body.translate((0.0, 2.0, 0.0));

    assert_eq!(body.position(), (0.0, 2.0, 0.0));
    assert_eq!(body.velocity(), (1.0, 0.0, 0.0));
}

#[test]
fn test_update_turns_spin_into_orientation() {
    let mut body = unit_cube_at((0.0, 0.0, 0.0));
    body.set_angular_velocity((0.0, 0.0, PI / 2.0));

    for _ in 0..100 {
        body.update(0.01);
    }

    // A quarter turn about z after one second
    let turned = body.orientation().rotate_point((1.0, 0.0, 0.0));
    assert_abs_diff_eq!(turned.0, 0.0, epsilon = 1e-2);
    assert_abs_diff_eq!(turned.1, 1.0, epsilon = 1e-2);
    assert_eq!(body.position(), (0.0, 0.0, 0.0), "Spin alone should not move the body");
}
