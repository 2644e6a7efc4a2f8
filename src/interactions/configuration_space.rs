use crate::models::{ConvexBody, SupportPoint};
use crate::utils::{negate_vector, subtract_vectors, Vector3};

/// Minkowski difference `first - second` of two placed convex bodies.
///
/// Built per pair test and dropped afterwards; it only borrows the bodies.
pub struct ConfigurationSpaceObject<'a, A: ConvexBody + ?Sized, B: ConvexBody + ?Sized> {
    first: &'a A,
    second: &'a B,
}

impl<'a, A: ConvexBody + ?Sized, B: ConvexBody + ?Sized> ConfigurationSpaceObject<'a, A, B> {
    pub fn new(first: &'a A, second: &'a B) -> Self {
        Self { first, second }
    }

    /// World-space support point of the difference for a world-space direction:
    /// `first.support(d) - second.support(-d)`.
    pub fn support(&self, direction: Vector3) -> Vector3 {
        self.support_info(direction).point
    }

    /// Same as [`ConfigurationSpaceObject::support`], keeping the two world-space points
    /// the difference was built from.
    pub fn support_info(&self, direction: Vector3) -> SupportPoint {
        let point_a = self.first.support_point(direction);
        let point_b = self.second.support_point(negate_vector(direction));

        SupportPoint::new(subtract_vectors(point_a, point_b), point_a, point_b)
    }
}
