use crate::utils::{add_vectors, cross_product, scale_vector, vector_magnitude, Vector3};

/// Quaternion representation for 3D rotations to avoid gimbal lock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl Quaternion {
    /// Creates a new identity quaternion (no rotation)
    pub const fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Creates a quaternion from axis-angle representation
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let magnitude = vector_magnitude(axis);
        if magnitude < 1e-10 {
            return Quaternion::identity();
        }

        let half_angle = angle / 2.0;
        let sin_half = half_angle.sin();

        Quaternion {
            w: half_angle.cos(),
            x: axis.0 / magnitude * sin_half,
            y: axis.1 / magnitude * sin_half,
            z: axis.2 / magnitude * sin_half,
        }
    }

    /// Returns the length/magnitude of the quaternion
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized version of the quaternion
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-10 || !mag.is_finite() {
            return Quaternion::identity();
        }
        Quaternion {
            w: self.w / mag,
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Multiplies two quaternions (composition of rotations)
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// Returns the conjugate of the quaternion
    pub fn conjugate(&self) -> Quaternion {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Rotates a point (or free vector) by the normalized quaternion.
    ///
    /// Uses the expanded form of `q * p * q^-1`: `p + w t + u × t` with `t = 2 (u × p)`.
    pub fn rotate_point(&self, point: Vector3) -> Vector3 {
        let q = self.normalized();
        let u = (q.x, q.y, q.z);
        let t = scale_vector(cross_product(u, point), 2.0);

        add_vectors(add_vectors(point, scale_vector(t, q.w)), cross_product(u, t))
    }

    /// Rotates a point by the inverse rotation.
    pub fn inverse_rotate_point(&self, point: Vector3) -> Vector3 {
        self.conjugate().rotate_point(point)
    }

    /// Advances the orientation by a constant angular velocity (radians per second, world
    /// axes) over `dt` seconds and renormalizes.
    pub fn integrate(&self, angular_velocity: Vector3, dt: f64) -> Quaternion {
        let omega = Quaternion {
            w: 0.0,
            x: angular_velocity.0,
            y: angular_velocity.1,
            z: angular_velocity.2,
        };
        let spin = omega.multiply(self);
        let half_dt = 0.5 * dt;

        Quaternion {
            w: self.w + spin.w * half_dt,
            x: self.x + spin.x * half_dt,
            y: self.y + spin.y * half_dt,
            z: self.z + spin.z * half_dt,
        }.normalized()
    }
}
