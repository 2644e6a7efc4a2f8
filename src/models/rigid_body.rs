use crate::models::{ConvexBody, ConvexHull, Quaternion, SupportMap};
use crate::utils::{add_vectors, scale_vector, CollisionError, Vector3, ZERO_VECTOR};

/// Rigid convex body: an immutable hull plus the pose and motion state the integrator owns.
///
/// Position and orientation only change through [`RigidBody::update`] and
/// [`RigidBody::translate`]; the collision phase reads them through [`ConvexBody`].
#[derive(Debug, Clone)]
pub struct RigidBody {
    hull: ConvexHull,
    position: Vector3,
    orientation: Quaternion,
    velocity: Vector3,
    angular_velocity: Vector3,
    mass: f64,
    force: Vector3,
    in_contact: bool,
}

impl RigidBody {
    /// Creates a resting body at `position` with identity orientation.
    ///
    /// # Errors
    /// Returns `InvalidMass` if the mass is not a positive finite number.
    pub fn new(hull: ConvexHull, position: Vector3, mass: f64) -> Result<Self, CollisionError> {
        if mass <= 0.0 || !mass.is_finite() {
            return Err(CollisionError::InvalidMass);
        }

        Ok(Self {
            hull,
            position,
            orientation: Quaternion::identity(),
            velocity: ZERO_VECTOR,
            angular_velocity: ZERO_VECTOR,
            mass,
            force: ZERO_VECTOR,
            in_contact: false,
        })
    }

    pub fn with_orientation(mut self, orientation: Quaternion) -> Self {
        self.orientation = orientation.normalized();
        self
    }

    pub fn hull(&self) -> &ConvexHull {
        &self.hull
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Whether the last collision pass found this body touching another one.
    pub fn in_contact(&self) -> bool {
        self.in_contact
    }

    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Spin in radians per second about world axes; [`RigidBody::update`] turns it into
    /// orientation changes.
    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) {
        self.angular_velocity = angular_velocity;
    }

    pub(crate) fn mark_contact(&mut self) {
        self.in_contact = true;
    }

    /// Adds a force to the accumulator; it is consumed by the next [`RigidBody::update`].
    pub fn apply_force(&mut self, force: Vector3) {
        self.force = add_vectors(self.force, force);
    }

    /// Moves the body without touching its velocity.
    pub fn translate(&mut self, delta: Vector3) {
        self.position = add_vectors(self.position, delta);
    }

    /// Semi-implicit Euler step: velocity first from the accumulated force, then position
    /// from the new velocity. Orientation follows the angular velocity. Clears the force
    /// accumulator and the contact flag.
    pub fn update(&mut self, dt: f64) {
        let acceleration = scale_vector(self.force, 1.0 / self.mass);
        self.velocity = add_vectors(self.velocity, scale_vector(acceleration, dt));
        self.position = add_vectors(self.position, scale_vector(self.velocity, dt));
        self.orientation = self.orientation.integrate(self.angular_velocity, dt);

        self.force = ZERO_VECTOR;
        self.in_contact = false;
    }
}

impl ConvexBody for RigidBody {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn orientation(&self) -> Quaternion {
        self.orientation
    }

    fn local_support_point(&self, direction: Vector3) -> Vector3 {
        self.hull.local_support_point(direction)
    }
}
