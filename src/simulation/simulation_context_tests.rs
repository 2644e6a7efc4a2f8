use std::f64::consts::PI;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::models::{ConvexBody, ConvexHull, RigidBody, StockShape};
use crate::simulation::{attractor_force, SimulationContext};
use crate::utils::{CollisionError, SimulationConfig};

fn cube_at(position: (f64, f64, f64)) -> RigidBody {
    RigidBody::new(ConvexHull::stock(StockShape::Box), position, 1.0).unwrap()
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = SimulationConfig::new(Some(0.0), None, None, None);
    assert_eq!(SimulationContext::new(config).err(), Some(CollisionError::InvalidTimeStep));
}

#[test]
fn test_attractor_force() {
    let force = attractor_force((0.0, 0.0, 0.0), (10.0, 0.0, 0.0), 2.0);
    assert_eq!(force, (-2.0, 0.0, 0.0));

    // No direction to pull in when the body sits on the attractor
    assert_eq!(attractor_force((1.0, 1.0, 1.0), (1.0, 1.0, 1.0), 2.0), (0.0, 0.0, 0.0));
}

#[test]
fn test_step_integrates_towards_attractor() {
    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    let index = context.add_body(cube_at((10.0, 0.0, 0.0)));

    context.step();

    // v = -2 * 0.01, x = 10 + v * 0.01
    let body = context.body(index).unwrap();
    assert_relative_eq!(body.velocity().0, -0.02, epsilon = 1e-12);
    assert_relative_eq!(body.position().0, 10.0 - 0.0002, epsilon = 1e-12);
    assert_eq!(context.step_count(), 1);
}

#[test]
fn test_step_flags_overlapping_bodies() {
    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    context.add_body(cube_at((-0.3, 0.0, 0.0)));
    context.add_body(cube_at((0.3, 0.0, 0.0)));
    context.add_body(cube_at((20.0, 0.0, 0.0)));

    let report = context.step();
    assert_eq!(report.stats.pairs_tested, 3);
    assert_eq!(report.stats.collisions, 1);

    assert!(context.bodies()[0].in_contact());
    assert!(context.bodies()[1].in_contact());
    assert!(!context.bodies()[2].in_contact());

    context.step();
    assert_eq!(context.stats().collisions, 2, "Statistics accumulate across steps");
    assert_eq!(context.stats().pairs_tested, 6);
}

#[test]
fn test_velocity_hooks() {
    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    context.add_body(cube_at((0.0, 5.0, 0.0)));

    context.set_velocity(0, (1.0, 0.0, 0.0)).unwrap();
    context.add_velocity(0, (0.0, 0.0, -1.0)).unwrap();
    assert_eq!(context.body(0).unwrap().velocity(), (1.0, 0.0, -1.0));

    assert_eq!(context.set_velocity(5, (0.0, 0.0, 0.0)), Err(CollisionError::BodyNotFound(5)));
    assert!(context.body(1).is_err());
}

#[test]
fn test_spinning_body_reaches_its_neighbour() {
    let config = SimulationConfig::new(None, None, Some(0.0), None);
    let mut still = SimulationContext::new(config).unwrap();
    let mut spinning = SimulationContext::new(config).unwrap();
    for context in [&mut still, &mut spinning] {
        context.add_body(cube_at((0.0, 0.0, 0.0)));
        context.add_body(cube_at((1.05, 0.0, 0.0)));
    }

    // An eighth of a turn about z over one second swings B's edge 0.16 into A
    spinning.set_angular_velocity(1, (0.0, 0.0, PI / 4.0)).unwrap();
    assert_eq!(spinning.step().stats.collisions, 0);
    for _ in 1..100 {
        still.step();
        spinning.step();
    }

    assert_eq!(still.last_report().stats.collisions, 0);
    assert_eq!(spinning.last_report().stats.collisions, 1);
    assert!(spinning.bodies()[1].in_contact());
    assert_eq!(spinning.bodies()[1].position(), (1.05, 0.0, 0.0));

    assert_eq!(spinning.set_angular_velocity(2, (1.0, 0.0, 0.0)), Err(CollisionError::BodyNotFound(2)));
}

#[test]
fn test_advance_runs_fixed_steps() {
    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    context.add_body(cube_at((3.0, 0.0, 0.0)));

    assert_eq!(context.advance(0.035).unwrap(), 3);
    // The leftover 5ms carries into the next frame
    assert_eq!(context.advance(0.007).unwrap(), 1);
    assert_eq!(context.step_count(), 4);
}

#[test]
fn test_advance_throttles_long_frames() {
    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    context.add_body(cube_at((3.0, 0.0, 0.0)));

    assert_eq!(context.advance(0.5).unwrap(), 0, "A long frame should be dropped");
    assert_eq!(context.advance(0.079).unwrap(), 7);

    assert_eq!(context.advance(-0.1), Err(CollisionError::InvalidTimeStep));
    assert_eq!(context.advance(f64::NAN), Err(CollisionError::InvalidTimeStep));
}

#[test]
fn test_populate_grid() {
    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(context.populate_grid(3, 10.0, &mut rng).unwrap(), 27);
    assert_eq!(context.bodies().len(), 27);
    assert_eq!(context.bodies()[0].position(), (-10.0, -10.0, -10.0));
    assert_eq!(context.bodies()[26].position(), (10.0, 10.0, 10.0));

    // Stock shapes are far smaller than the spacing
    let report = context.step();
    assert_eq!(report.stats.pairs_tested, 27 * 26 / 2);
    assert_eq!(report.stats.collisions, 0);

    assert!(context.populate_grid(2, 0.0, &mut rng).is_err());
}
