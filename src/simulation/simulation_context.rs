//! Rigid-body scene: owns the bodies, integrates them under a central attractor, and runs
//! the all-pairs narrow phase after every step.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rs_narrowphase::simulation::SimulationContext;
//! use rs_narrowphase::utils::SimulationConfig;
//!
//! let mut context = SimulationContext::new(SimulationConfig::default()).expect("valid config");
//! let mut rng = StdRng::seed_from_u64(7);
//! context.populate_grid(2, 10.0, &mut rng).expect("valid grid");
//!
//! // 50ms of wall time at the default 10ms step
//! let steps = context.advance(0.05).expect("valid frame time");
//! assert!(steps >= 4);
//! assert_eq!(context.last_report().stats.pairs_tested, 28);
//! ```

use log::debug;
use rand::Rng;
use crate::interactions::{detect_collisions, CollisionReport, CollisionStats};
use crate::models::{ConvexBody, ConvexHull, RigidBody, StockShape};
use crate::utils::{
    add_vectors, normalize_vector, scale_vector, subtract_vectors, CollisionError, SimulationConfig,
    Vector3, ZERO_VECTOR,
};

/// Mass given to bodies created by [`SimulationContext::populate_grid`].
const GRID_BODY_MASS: f64 = 1.0;

pub struct SimulationContext {
    config: SimulationConfig,
    bodies: Vec<RigidBody>,
    accumulator: f64,
    step_count: usize,
    last_report: CollisionReport,
    stats: CollisionStats,
}

impl SimulationContext {
    /// # Errors
    /// Returns the first validation error of `config`.
    pub fn new(config: SimulationConfig) -> Result<Self, CollisionError> {
        config.validate()?;

        Ok(Self {
            config,
            bodies: Vec::new(),
            accumulator: 0.0,
            step_count: 0,
            last_report: CollisionReport::default(),
            stats: CollisionStats::default(),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Result<&RigidBody, CollisionError> {
        self.bodies.get(index).ok_or(CollisionError::BodyNotFound(index))
    }

    fn body_mut(&mut self, index: usize) -> Result<&mut RigidBody, CollisionError> {
        self.bodies.get_mut(index).ok_or(CollisionError::BodyNotFound(index))
    }

    pub fn set_velocity(&mut self, index: usize, velocity: Vector3) -> Result<(), CollisionError> {
        self.body_mut(index)?.set_velocity(velocity);
        Ok(())
    }

    /// Adds `delta` to a body's velocity, the way a steering input would.
    pub fn add_velocity(&mut self, index: usize, delta: Vector3) -> Result<(), CollisionError> {
        let body = self.body_mut(index)?;
        body.set_velocity(add_vectors(body.velocity(), delta));
        Ok(())
    }

    /// Sets a body's spin (radians per second about world axes).
    pub fn set_angular_velocity(&mut self, index: usize, angular_velocity: Vector3) -> Result<(), CollisionError> {
        self.body_mut(index)?.set_angular_velocity(angular_velocity);
        Ok(())
    }

    /// Collision report of the most recent step.
    pub fn last_report(&self) -> &CollisionReport {
        &self.last_report
    }

    /// Statistics summed over every step so far.
    pub fn stats(&self) -> &CollisionStats {
        &self.stats
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// One fixed step: attractor force and integration for every body, then the pairwise
    /// collision pass on the new poses.
    pub fn step(&mut self) -> &CollisionReport {
        let dt = self.config.time_step;

        for body in &mut self.bodies {
            let force = attractor_force(self.config.attractor_point, body.position(), self.config.attractor_strength);
            body.apply_force(force);
            body.update(dt);
        }

        let report = detect_collisions(&mut self.bodies, &self.config.collision);
        self.stats.merge(&report.stats);
        self.last_report = report;
        self.step_count += 1;

        &self.last_report
    }

    /// Feeds `frame_dt` seconds of wall time into the fixed-step accumulator and runs as many
    /// steps as it covers. A frame of `max_frame_steps * time_step` or longer is dropped.
    ///
    /// Returns the number of steps run.
    pub fn advance(&mut self, frame_dt: f64) -> Result<usize, CollisionError> {
        if frame_dt < 0.0 || !frame_dt.is_finite() {
            return Err(CollisionError::InvalidTimeStep);
        }

        let step = self.config.time_step;
        let mut frame_dt = frame_dt;
        if frame_dt >= step * self.config.max_frame_steps {
            debug!("throttle: dropping a {:.3}s frame", frame_dt);
            frame_dt = 0.0;
        }

        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= step {
            self.step();
            self.accumulator -= step;
            steps += 1;
        }

        Ok(steps)
    }

    /// Fills a `dimensions`³ grid centred on the origin with randomly chosen stock shapes,
    /// `spacing` apart. Returns the number of bodies added.
    pub fn populate_grid<R: Rng>(
        &mut self,
        dimensions: usize,
        spacing: f64,
        rng: &mut R,
    ) -> Result<usize, CollisionError> {
        if spacing <= 0.0 || !spacing.is_finite() {
            return Err(CollisionError::InvalidDimension(format!("grid spacing {}", spacing)));
        }

        let start = -spacing * dimensions as f64 / 2.0 + spacing / 2.0;
        let hulls: Vec<ConvexHull> = StockShape::ALL.iter().map(|stock| ConvexHull::stock(*stock)).collect();

        for row in 0..dimensions {
            for col in 0..dimensions {
                for layer in 0..dimensions {
                    let hull = hulls[rng.random_range(0..hulls.len())].clone();
                    let position = (
                        start + spacing * row as f64,
                        start + spacing * col as f64,
                        start + spacing * layer as f64,
                    );
                    self.add_body(RigidBody::new(hull, position, GRID_BODY_MASS)?);
                }
            }
        }

        Ok(dimensions.pow(3))
    }
}

/// Constant-magnitude pull towards `attractor`; zero for a body sitting on it.
pub fn attractor_force(attractor: Vector3, position: Vector3, strength: f64) -> Vector3 {
    match normalize_vector(subtract_vectors(attractor, position)) {
        Ok(direction) => scale_vector(direction, strength),
        Err(_) => ZERO_VECTOR,
    }
}
