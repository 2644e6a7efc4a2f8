//! Value-typed 3D vector helpers.
//!
//! Vectors are plain `(f64, f64, f64)` tuples. They are `Copy`, so every read hands out an
//! independent value and no caller can alias another body's position or orientation.

/// A 3D vector or point as `(x, y, z)`.
pub type Vector3 = (f64, f64, f64);

/// The zero vector.
pub const ZERO_VECTOR: Vector3 = (0.0, 0.0, 0.0);

/// Component-wise sum of two vectors.
#[inline]
pub fn add_vectors(v1: Vector3, v2: Vector3) -> Vector3 {
    (v1.0 + v2.0, v1.1 + v2.1, v1.2 + v2.2)
}

/// Component-wise difference `v1 - v2`.
#[inline]
pub fn subtract_vectors(v1: Vector3, v2: Vector3) -> Vector3 {
    (v1.0 - v2.0, v1.1 - v2.1, v1.2 - v2.2)
}

/// Multiplies every component of `v` by `scalar`.
#[inline]
pub fn scale_vector(v: Vector3, scalar: f64) -> Vector3 {
    (v.0 * scalar, v.1 * scalar, v.2 * scalar)
}

/// returns the inverse of the vector
#[inline]
pub fn negate_vector(v: Vector3) -> Vector3 {
    (-v.0, -v.1, -v.2)
}

/// Calculates the cross product of two 3D vectors.
///
/// # Example
/// ```
/// use rs_narrowphase::utils::cross_product;
///
/// let v1 = (1.0, 0.0, 0.0);
/// let v2 = (0.0, 1.0, 0.0);
///
/// assert_eq!(cross_product(v1, v2), (0.0, 0.0, 1.0));
/// ```
#[inline]
pub fn cross_product(v1: Vector3, v2: Vector3) -> Vector3 {
    (
        v1.1 * v2.2 - v1.2 * v2.1,
        v1.2 * v2.0 - v1.0 * v2.2,
        v1.0 * v2.1 - v1.1 * v2.0
    )
}

/// Calculates the dot product of two 3D vectors.
///
/// # Example
/// ```
/// use rs_narrowphase::utils::dot_product;
///
/// assert_eq!(dot_product((1.0, 2.0, 3.0), (4.0, 5.0, 6.0)), 32.0);
/// ```
#[inline]
pub fn dot_product(v1: Vector3, v2: Vector3) -> f64 {
    v1.0 * v2.0 + v1.1 * v2.1 + v1.2 * v2.2
}

/// Triple product `(a × b) × c`
#[inline]
pub fn triple_product(a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
    cross_product(cross_product(a, b), c)
}

#[inline]
pub fn vector_magnitude_squared(v: Vector3) -> f64 {
    dot_product(v, v)
}

/// Calculates the magnitude (length) of a 3D vector.
#[inline]
pub fn vector_magnitude(v: Vector3) -> f64 {
    vector_magnitude_squared(v).sqrt()
}

/// Normalizes a 3D vector (makes it a unit vector).
///
/// # Errors
/// Returns an error if the input is a zero vector.
///
/// # Example
/// ```
/// use rs_narrowphase::utils::normalize_vector;
///
/// let normalized = normalize_vector((3.0, 0.0, 4.0)).unwrap();
///
/// assert!((normalized.0 - 0.6).abs() < 1e-10);
/// assert!((normalized.2 - 0.8).abs() < 1e-10);
/// assert!(normalize_vector((0.0, 0.0, 0.0)).is_err());
/// ```
pub fn normalize_vector(v: Vector3) -> Result<Vector3, &'static str> {
    let magnitude = vector_magnitude(v);

    if magnitude == 0.0 || !magnitude.is_finite() {
        return Err("Cannot normalize a zero vector");
    }

    Ok((v.0 / magnitude, v.1 / magnitude, v.2 / magnitude))
}

/// True when the length of `v` is at most `epsilon`.
///
/// An `epsilon` of `0.0` only accepts the exact zero vector.
#[inline]
pub fn is_zero_vector(v: Vector3, epsilon: f64) -> bool {
    vector_magnitude_squared(v) <= epsilon * epsilon
}

/// Weighted sum `wa * a + wb * b + wc * c`.
#[inline]
pub fn weighted_sum(weights: (f64, f64, f64), a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
    add_vectors(
        add_vectors(scale_vector(a, weights.0), scale_vector(b, weights.1)),
        scale_vector(c, weights.2)
    )
}
