//! Traits for convex shapes representable by a support mapping function.

use crate::models::Quaternion;
use crate::utils::{add_vectors, subtract_vectors, Vector3};

/// A convex shape in its own model space.
pub trait SupportMap {
    /// Returns the model-space point of the shape that maximizes `dot(direction, point)`.
    ///
    /// Ties are broken deterministically so that repeated queries return the same point.
    fn local_support_point(&self, direction: Vector3) -> Vector3;
}

/// A convex shape placed in the world by a rigid transform.
///
/// This is the only contract the configuration space object and the GJK / MPR tests
/// depend on; they never look at the concrete shape.
pub trait ConvexBody {
    /// World-space position of the model-space origin.
    fn position(&self) -> Vector3;

    /// Unit rotation from model space to world space.
    fn orientation(&self) -> Quaternion;

    /// Support point in model space for a model-space direction.
    fn local_support_point(&self, direction: Vector3) -> Vector3;

    /// Rotates a world-space direction into model space. Directions are free vectors, so
    /// only the inverse orientation applies.
    fn world_to_model_direction(&self, direction: Vector3) -> Vector3 {
        self.orientation().inverse_rotate_point(direction)
    }

    fn world_to_model(&self, point: Vector3) -> Vector3 {
        self.orientation().inverse_rotate_point(subtract_vectors(point, self.position()))
    }

    fn model_to_world(&self, point: Vector3) -> Vector3 {
        add_vectors(self.orientation().rotate_point(point), self.position())
    }

    /// World-space support point for a world-space direction.
    fn support_point(&self, direction: Vector3) -> Vector3 {
        let local_dir = self.world_to_model_direction(direction);
        self.model_to_world(self.local_support_point(local_dir))
    }
}
