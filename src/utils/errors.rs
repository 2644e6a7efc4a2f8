use std::fmt;
use std::error::Error;

/// Errors raised while building shapes, bodies, or simulation settings.
///
/// The narrow-phase queries themselves never fail; degenerate geometry and
/// non-convergence are reported as "no collision".
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A convex hull was built from an empty vertex set.
    EmptyVertexSet,
    /// A shape dimension is non-positive, non-finite, or otherwise unusable.
    InvalidDimension(String),
    /// Indicates an invalid mass value (e.g., negative or zero mass).
    InvalidMass,
    /// Indicates an invalid time step (e.g., zero or negative).
    InvalidTimeStep,
    /// No body exists at the given index.
    BodyNotFound(usize),
    /// A tuning value in a configuration struct is out of range.
    InvalidConfiguration(String),
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollisionError::EmptyVertexSet => write!(f, "Convex hull needs at least one vertex"),
            CollisionError::InvalidDimension(msg) => write!(f, "Invalid shape dimension: {}", msg),
            CollisionError::InvalidMass => write!(f, "Invalid mass value"),
            CollisionError::InvalidTimeStep => write!(f, "Invalid time step"),
            CollisionError::BodyNotFound(index) => write!(f, "No body at index {}", index),
            CollisionError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for CollisionError {}
