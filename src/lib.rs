//! Convex narrow-phase collision detection for rigid polyhedra.
//!
//! Bodies expose a support mapping through [`models::ConvexBody`]. The
//! [`interactions`] module builds the Minkowski difference of two bodies and answers
//! "do they touch?" with GJK or Minkowski Portal Refinement. MPR can also recover a
//! contact normal, penetration depth and a contact point on each body.
//! [`simulation::SimulationContext`] drives a small rigid-body scene that runs the
//! all-pairs test after every fixed step.
pub mod utils;
pub mod models;
pub mod interactions;
pub mod simulation;
