use log::{debug, trace};
use crate::interactions::ConfigurationSpaceObject;
use crate::models::{ConvexBody, Simplex, SupportPoint};
use crate::utils::{
    cross_product, dot_product, is_zero_vector, negate_vector, subtract_vectors, triple_product,
    CollisionConfig, Vector3, DEFAULT_COLLISION_CONFIG,
};

/// GJK (Gilbert-Johnson-Keerthi) existence test between two convex bodies
///
/// Grows a simplex inside `CSO(a, b)` towards the origin. Returns `true` once a
/// tetrahedron encloses the origin (or the search direction collapses onto it) and
/// `false` as soon as a support point fails to pass the origin.
///
/// Uses the default iteration cap; see [`gjk_collision_detection_with_config`].
///
/// # Example
/// ```
/// use rs_narrowphase::interactions::gjk_collision_detection;
/// use rs_narrowphase::models::{ConvexHull, RigidBody, StockShape};
///
/// let a = RigidBody::new(ConvexHull::stock(StockShape::Box), (0.0, 0.0, 0.0), 1.0).unwrap();
/// let b = RigidBody::new(ConvexHull::stock(StockShape::Box), (0.4, 0.0, 0.0), 1.0).unwrap();
/// assert!(gjk_collision_detection(&a, &b));
/// ```
pub fn gjk_collision_detection<A, B>(a: &A, b: &B) -> bool
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    gjk_collision_detection_with_config(a, b, &DEFAULT_COLLISION_CONFIG)
}

/// GJK existence test with explicit tuning.
///
/// Hitting `gjk_max_iterations` reports no collision. Near-parallel faces (dodecahedra
/// resting on each other) are the usual way to get there.
pub fn gjk_collision_detection_with_config<A, B>(a: &A, b: &B, config: &CollisionConfig) -> bool
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    let cso = ConfigurationSpaceObject::new(a, b);

    let mut direction = get_initial_direction(a.position(), b.position(), config.degenerate_epsilon);
    let first = cso.support_info(direction);

    let mut simplex = Simplex::new();
    simplex.push(first);
    direction = negate_vector(first.point);

    for iteration in 0..config.gjk_max_iterations {
        if is_zero_vector(direction, config.degenerate_epsilon) {
            debug!("GJK search direction collapsed onto the origin after {} iterations", iteration);
            return true;
        }

        let point = cso.support_info(direction);
        if dot_product(point.point, direction) < 0.0 {
            trace!("GJK separating direction {:?} found after {} iterations", direction, iteration);
            return false;
        }

        simplex.push(point);
        if do_simplex(&mut simplex, &mut direction) {
            trace!("GJK enclosed the origin after {} iterations", iteration + 1);
            return true;
        }
    }

    debug!("GJK reached its iteration cap ({}), reporting no collision", config.gjk_max_iterations);
    false
}

/// Direction from the second body towards the first, or +x when the centres coincide.
fn get_initial_direction(position_a: Vector3, position_b: Vector3, epsilon: f64) -> Vector3 {
    let initial_dir = subtract_vectors(position_a, position_b);

    if is_zero_vector(initial_dir, epsilon) {
        (1.0, 0.0, 0.0)
    } else {
        initial_dir
    }
}

/// Reduces the simplex to the feature closest to the origin and updates the search
/// direction. Returns `true` when the simplex encloses the origin.
pub(crate) fn do_simplex(simplex: &mut Simplex, direction: &mut Vector3) -> bool {
    let points: Vec<SupportPoint> = simplex.points().to_vec();

    match points.as_slice() {
        [b, a] => {
            handle_line_case(simplex, *a, *b, direction);
            false
        }
        [c, b, a] => {
            handle_triangle_case(simplex, *a, *b, *c, direction);
            false
        }
        [d, c, b, a] => handle_tetrahedron_case(simplex, *a, *b, *c, *d, direction),
        _ => {
            *direction = (1.0, 0.0, 0.0);
            false
        }
    }
}

/// Line simplex: `a` is the newest point.
fn handle_line_case(simplex: &mut Simplex, a: SupportPoint, b: SupportPoint, direction: &mut Vector3) {
    let ab = subtract_vectors(b.point, a.point);
    let ao = negate_vector(a.point);

    if dot_product(ab, ao) > 0.0 {
        // Origin lies beside the segment; steer perpendicular to it
        *direction = triple_product(ab, ao, ab);
    } else {
        simplex.set(&[a]);
        *direction = ao;
    }
}

/// Triangle simplex: search on the side of the plane that holds the origin.
fn handle_triangle_case(
    simplex: &mut Simplex,
    a: SupportPoint,
    b: SupportPoint,
    c: SupportPoint,
    direction: &mut Vector3,
) {
    let abc = cross_product(subtract_vectors(b.point, a.point), subtract_vectors(c.point, a.point));
    let ao = negate_vector(a.point);

    if dot_product(abc, ao) > 0.0 {
        *direction = abc;
    } else {
        // Flip the winding so the next tetrahedron's faces keep pointing outwards
        simplex.set(&[b, c, a]);
        *direction = negate_vector(abc);
    }
}

/// Tetrahedron simplex with base `bcd`: if the origin is outside one of the three faces
/// touching `a`, drop the vertex opposite that face and keep searching along its normal.
fn handle_tetrahedron_case(
    simplex: &mut Simplex,
    a: SupportPoint,
    b: SupportPoint,
    c: SupportPoint,
    d: SupportPoint,
    direction: &mut Vector3,
) -> bool {
    let ao = negate_vector(a.point);
    let ab = subtract_vectors(b.point, a.point);
    let ac = subtract_vectors(c.point, a.point);
    let ad = subtract_vectors(d.point, a.point);

    let abc = cross_product(ab, ac);
    let acd = cross_product(ac, ad);
    let adb = cross_product(ad, ab);

    if dot_product(abc, ao) > 0.0 {
        simplex.set(&[c, b, a]);
        *direction = abc;
        false
    } else if dot_product(acd, ao) > 0.0 {
        simplex.set(&[d, c, a]);
        *direction = acd;
        false
    } else if dot_product(adb, ao) > 0.0 {
        simplex.set(&[b, d, a]);
        *direction = adb;
        false
    } else {
        true
    }
}
