// src/utils/constants_config.rs

use crate::utils::{CollisionError, Vector3, DEFAULT_COLLISION_CONFIG, DEFAULT_SIMULATION_CONFIG};

/// Which narrow-phase pipeline the pairwise dispatcher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrowPhaseStrategy {
    /// MPR hit test followed by MPR contact recovery.
    Mpr,
    /// GJK existence test first; MPR only runs for pairs GJK reports as colliding.
    GjkThenMpr,
}

/// Tuning values for the GJK and MPR collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    /// Hard limit on GJK simplex updates. Shapes with near-parallel faces (dodecahedra in
    /// particular) can cycle; reaching the limit reports "not colliding".
    pub gjk_max_iterations: usize,
    /// Limit on each MPR loop (portal validation and portal refinement).
    pub mpr_max_iterations: usize,
    /// Minimum distance a new support point has to reach past the portal plane for
    /// refinement to continue.
    pub mpr_refinement_epsilon: f64,
    /// Length below which a cross product counts as the zero vector.
    pub degenerate_epsilon: f64,
    /// When the first MPR support point is collinear with the interior point, decide the
    /// hit from `dot(v, a)` instead of always reporting a miss.
    pub resolve_collinear_origin: bool,
    pub strategy: NarrowPhaseStrategy,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        DEFAULT_COLLISION_CONFIG
    }
}

impl CollisionConfig {
    pub fn new(
        gjk_max_iterations: Option<usize>,
        mpr_max_iterations: Option<usize>,
        mpr_refinement_epsilon: Option<f64>,
        strategy: Option<NarrowPhaseStrategy>
    ) -> Self {
        let default = CollisionConfig::default();
        Self {
            gjk_max_iterations: gjk_max_iterations.unwrap_or(default.gjk_max_iterations),
            mpr_max_iterations: mpr_max_iterations.unwrap_or(default.mpr_max_iterations),
            mpr_refinement_epsilon: mpr_refinement_epsilon.unwrap_or(default.mpr_refinement_epsilon),
            strategy: strategy.unwrap_or(default.strategy),
            ..default
        }
    }

    /// Same settings with the legacy collinear behaviour (always a miss).
    pub fn with_legacy_collinear_branch(mut self) -> Self {
        self.resolve_collinear_origin = false;
        self
    }

    pub fn validate(&self) -> Result<(), CollisionError> {
        if self.gjk_max_iterations == 0 {
            return Err(CollisionError::InvalidConfiguration("gjk_max_iterations must be positive".to_string()));
        }
        if self.mpr_max_iterations == 0 {
            return Err(CollisionError::InvalidConfiguration("mpr_max_iterations must be positive".to_string()));
        }
        if !(self.mpr_refinement_epsilon >= 0.0) || !self.mpr_refinement_epsilon.is_finite() {
            return Err(CollisionError::InvalidConfiguration("mpr_refinement_epsilon must be non-negative".to_string()));
        }
        if !(self.degenerate_epsilon >= 0.0) || !self.degenerate_epsilon.is_finite() {
            return Err(CollisionError::InvalidConfiguration("degenerate_epsilon must be non-negative".to_string()));
        }
        Ok(())
    }
}

/// Settings for the rigid-body step loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Fixed physics step in seconds.
    pub time_step: f64,
    /// Point every body is pulled towards.
    pub attractor_point: Vector3,
    /// Magnitude of the attractor force.
    pub attractor_strength: f64,
    /// Frames longer than `max_frame_steps * time_step` are dropped instead of simulated.
    pub max_frame_steps: f64,
    pub collision: CollisionConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    pub fn new(
        time_step: Option<f64>,
        attractor_point: Option<Vector3>,
        attractor_strength: Option<f64>,
        collision: Option<CollisionConfig>
    ) -> Self {
        let default = SimulationConfig::default();
        Self {
            time_step: time_step.unwrap_or(default.time_step),
            attractor_point: attractor_point.unwrap_or(default.attractor_point),
            attractor_strength: attractor_strength.unwrap_or(default.attractor_strength),
            collision: collision.unwrap_or(default.collision),
            ..default
        }
    }

    pub fn validate(&self) -> Result<(), CollisionError> {
        if !(self.time_step > 0.0) || !self.time_step.is_finite() {
            return Err(CollisionError::InvalidTimeStep);
        }
        if !self.attractor_strength.is_finite() {
            return Err(CollisionError::InvalidConfiguration("attractor_strength must be finite".to_string()));
        }
        if !(self.max_frame_steps >= 1.0) {
            return Err(CollisionError::InvalidConfiguration("max_frame_steps must be at least 1".to_string()));
        }
        self.collision.validate()
    }
}
