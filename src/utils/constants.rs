use crate::utils::{CollisionConfig, NarrowPhaseStrategy, SimulationConfig};

pub const DEFAULT_COLLISION_CONFIG: CollisionConfig = CollisionConfig {
    gjk_max_iterations: 50,
    mpr_max_iterations: 100,
    mpr_refinement_epsilon: 0.0001,
    degenerate_epsilon: 1e-10,
    resolve_collinear_origin: true,
    strategy: NarrowPhaseStrategy::Mpr,
};

pub const DEFAULT_SIMULATION_CONFIG: SimulationConfig = SimulationConfig {
    time_step: 0.01,
    attractor_point: (0.0, 0.0, 0.0),
    attractor_strength: 2.0,
    max_frame_steps: 8.0,
    collision: DEFAULT_COLLISION_CONFIG,
};

/// Offset used when both bodies share a centre and MPR needs a non-zero interior point.
pub const COINCIDENT_CENTER_NUDGE: f64 = 0.00001;
