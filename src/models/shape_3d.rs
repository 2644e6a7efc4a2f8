use crate::models::SupportMap;
use crate::utils::{dot_product, scale_vector, subtract_vectors, CollisionError, Vector3};
use std::f64::consts::PI;

/// Radial segments used for cylinders unless a caller asks for something else.
pub const DEFAULT_CYLINDER_SEGMENTS: usize = 8;

/// Represents the convex shapes a body can have
#[derive(Debug, Clone, PartialEq)]
pub enum Shape3D {
    /// Regular cuboid with dimensions (width, height, depth)
    Cuboid(f64, f64, f64),
    /// Faceted cylinder with radius, height and number of radial segments, axis along y
    Cylinder(f64, f64, usize),
    /// Regular dodecahedron with the given circumradius
    Dodecahedron(f64),
    /// Arbitrary convex hull given by its vertices
    Polyhedron(Vec<Vector3>),
}

impl Shape3D {
    /// Creates a new cuboid with the given dimensions
    pub fn new_cuboid(width: f64, height: f64, depth: f64) -> Self {
        Shape3D::Cuboid(width, height, depth)
    }

    /// Creates a new cylinder with the given radius and height
    pub fn new_cylinder(radius: f64, height: f64) -> Self {
        Shape3D::Cylinder(radius, height, DEFAULT_CYLINDER_SEGMENTS)
    }

    pub fn new_dodecahedron(radius: f64) -> Self {
        Shape3D::Dodecahedron(radius)
    }

    /// Creates a new polyhedron from the vertices of its convex hull
    pub fn new_polyhedron(vertices: Vec<Vector3>) -> Self {
        Shape3D::Polyhedron(vertices)
    }

    /// Checks that every dimension is usable for hull construction.
    pub fn validate(&self) -> Result<(), CollisionError> {
        let positive = |name: &str, value: f64| {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(CollisionError::InvalidDimension(format!("{} must be positive, got {}", name, value)))
            }
        };

        match self {
            Shape3D::Cuboid(w, h, d) => {
                positive("width", *w)?;
                positive("height", *h)?;
                positive("depth", *d)
            },
            Shape3D::Cylinder(radius, height, segments) => {
                positive("radius", *radius)?;
                positive("height", *height)?;
                if *segments < 3 {
                    return Err(CollisionError::InvalidDimension(
                        format!("cylinder needs at least 3 segments, got {}", segments)
                    ));
                }
                Ok(())
            },
            Shape3D::Dodecahedron(radius) => positive("radius", *radius),
            Shape3D::Polyhedron(vertices) => {
                if vertices.is_empty() {
                    return Err(CollisionError::EmptyVertexSet);
                }
                if vertices.iter().any(|v| !(v.0.is_finite() && v.1.is_finite() && v.2.is_finite())) {
                    return Err(CollisionError::InvalidDimension("polyhedron vertices must be finite".to_string()));
                }
                Ok(())
            }
        }
    }

    /// Creates vertices for the shape
    /// Returns a vector of (x,y,z) coordinates
    pub fn create_vertices(&self) -> Vec<Vector3> {
        match self {
            Shape3D::Cuboid(w, h, d) => {
                // 8 vertices of a cuboid
                let w2 = w / 2.0;
                let h2 = h / 2.0;
                let d2 = d / 2.0;

                vec![
                    (-w2, -h2, -d2),
                    (w2, -h2, -d2),
                    (w2, h2, -d2),
                    (-w2, h2, -d2),
                    (-w2, -h2, d2),
                    (w2, -h2, d2),
                    (w2, h2, d2),
                    (-w2, h2, d2),
                ]
            },
            Shape3D::Cylinder(radius, height, segments) => {
                // Top ring first, then bottom ring. Cap centres lie inside the hull and are skipped.
                let h2 = height / 2.0;
                let mut vertices = Vec::with_capacity(segments * 2);

                for y in [h2, -h2] {
                    for i in 0..*segments {
                        let theta = 2.0 * PI * (i as f64) / (*segments as f64);
                        vertices.push((radius * theta.sin(), y, radius * theta.cos()));
                    }
                }

                vertices
            },
            Shape3D::Dodecahedron(radius) => {
                let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
                let inv_phi = 1.0 / phi;
                // Canonical vertices have circumradius sqrt(3)
                let scale = radius / 3.0_f64.sqrt();

                let mut vertices = Vec::with_capacity(20);
                for x in [-1.0, 1.0] {
                    for y in [-1.0, 1.0] {
                        for z in [-1.0, 1.0] {
                            vertices.push((x, y, z));
                        }
                    }
                }
                for a in [-1.0, 1.0] {
                    for b in [-1.0, 1.0] {
                        vertices.push((0.0, a * inv_phi, b * phi));
                        vertices.push((a * inv_phi, b * phi, 0.0));
                        vertices.push((a * phi, 0.0, b * inv_phi));
                    }
                }

                vertices.into_iter().map(|v| scale_vector(v, scale)).collect()
            },
            Shape3D::Polyhedron(vertices) => vertices.clone(),
        }
    }

    pub fn shape_type_string(&self) -> String {
        match self {
            Shape3D::Cuboid(_, _, _) => "Cuboid".to_string(),
            Shape3D::Cylinder(_, _, _) => "Cylinder".to_string(),
            Shape3D::Dodecahedron(_) => "Dodecahedron".to_string(),
            Shape3D::Polyhedron(_) => "Polyhedron".to_string(),
        }
    }
}

/// The stock shapes the demo scenes are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockShape {
    /// 1 x 1 x 1 box
    Box,
    /// Radius 1, height 3
    Cylinder,
    /// Circumradius 2
    Dodecahedron,
}

impl StockShape {
    pub const ALL: [StockShape; 3] = [StockShape::Box, StockShape::Cylinder, StockShape::Dodecahedron];

    pub fn shape(&self) -> Shape3D {
        match self {
            StockShape::Box => Shape3D::new_cuboid(1.0, 1.0, 1.0),
            StockShape::Cylinder => Shape3D::new_cylinder(1.0, 3.0),
            StockShape::Dodecahedron => Shape3D::new_dodecahedron(2.0),
        }
    }
}

/// Immutable vertex set of a convex shape, centred on its vertex centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    shape: Shape3D,
    vertices: Vec<Vector3>,
    centroid: Vector3,
}

impl ConvexHull {
    /// Builds the hull of `shape` and moves its vertex centroid to the model origin.
    ///
    /// # Errors
    /// Returns an error if the shape has invalid dimensions or no vertices.
    ///
    /// # Example
    /// ```
    /// use rs_narrowphase::models::{ConvexHull, Shape3D};
    ///
    /// let hull = ConvexHull::new(Shape3D::new_cuboid(1.0, 1.0, 1.0)).unwrap();
    /// assert_eq!(hull.vertices().len(), 8);
    /// assert!(ConvexHull::new(Shape3D::new_polyhedron(vec![])).is_err());
    /// ```
    pub fn new(shape: Shape3D) -> Result<Self, CollisionError> {
        shape.validate()?;
        Ok(Self::centred(shape))
    }

    /// Hull from a raw list of points.
    pub fn from_vertices(vertices: Vec<Vector3>) -> Result<Self, CollisionError> {
        Self::new(Shape3D::new_polyhedron(vertices))
    }

    /// Hull of one of the stock shapes. Stock dimensions are always valid.
    pub fn stock(stock: StockShape) -> Self {
        Self::centred(stock.shape())
    }

    // Callers guarantee a validated shape, so the vertex list is non-empty
    fn centred(shape: Shape3D) -> Self {
        let raw = shape.create_vertices();
        let count = raw.len() as f64;
        let sum = raw.iter().fold((0.0, 0.0, 0.0), |acc, v| (acc.0 + v.0, acc.1 + v.1, acc.2 + v.2));
        let centroid = (sum.0 / count, sum.1 / count, sum.2 / count);

        let vertices = raw.into_iter().map(|v| subtract_vectors(v, centroid)).collect();

        Self { shape, vertices, centroid }
    }

    pub fn shape(&self) -> &Shape3D {
        &self.shape
    }

    /// Model-space vertices after centring.
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Offset that was removed from the input vertices during construction.
    pub fn centroid(&self) -> Vector3 {
        self.centroid
    }
}

impl SupportMap for ConvexHull {
    /// Linear scan over the vertex set; the first vertex with the largest projection wins.
    fn local_support_point(&self, direction: Vector3) -> Vector3 {
        let mut selected = self.vertices[0];
        let mut max = dot_product(direction, selected);

        for &vertex in &self.vertices[1..] {
            let projection = dot_product(direction, vertex);
            if projection > max {
                max = projection;
                selected = vertex;
            }
        }

        selected
    }
}
