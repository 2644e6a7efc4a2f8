use crate::utils::{Vector3, ZERO_VECTOR};

/// A point of the configuration space object together with the two world-space support
/// points it was built from, so that `point == point_a - point_b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportPoint {
    pub point: Vector3,
    /// Support point on the first shape of the configuration space object.
    pub point_a: Vector3,
    /// Support point on the second shape of the configuration space object.
    pub point_b: Vector3,
}

impl SupportPoint {
    pub fn new(point: Vector3, point_a: Vector3, point_b: Vector3) -> Self {
        Self { point, point_a, point_b }
    }

    /// A bare configuration space point with no contact provenance.
    pub fn from_point(point: Vector3) -> Self {
        Self { point, point_a: ZERO_VECTOR, point_b: ZERO_VECTOR }
    }
}

/// simplex (for use with GJK)
///
/// Points are stored oldest first; `a` is always the most recently added one.
#[derive(Debug, Clone, Default)]
pub struct Simplex {
    points: Vec<SupportPoint>,
}

impl Simplex {
    pub fn new() -> Self {
        Self { points: Vec::with_capacity(4) }
    }

    pub fn push(&mut self, point: SupportPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SupportPoint] {
        &self.points
    }

    /// Newest point, if any.
    pub fn a(&self) -> Option<&SupportPoint> {
        self.points.last()
    }

    /// Replaces the contents, oldest first.
    pub fn set(&mut self, points: &[SupportPoint]) {
        self.points.clear();
        self.points.extend_from_slice(points);
    }
}

/// The triangle of configuration space points MPR refines toward the origin, plus the
/// interior reference point `v` the portal is viewed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub v: SupportPoint,
    pub a: SupportPoint,
    pub b: SupportPoint,
    pub c: SupportPoint,
}

impl Portal {
    pub fn new(v: SupportPoint, a: SupportPoint, b: SupportPoint, c: SupportPoint) -> Self {
        Self { v, a, b, c }
    }

    pub fn swap_ab(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
    }

    pub fn swap_bc(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
    }

    pub fn swap_ac(&mut self) {
        std::mem::swap(&mut self.a, &mut self.c);
    }
}
