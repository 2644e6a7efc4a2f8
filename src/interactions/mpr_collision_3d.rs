use log::{debug, trace, warn};
use crate::interactions::ConfigurationSpaceObject;
use crate::models::{ConvexBody, Portal, SupportPoint};
use crate::utils::{
    cross_product, dot_product, is_zero_vector, negate_vector, normalize_vector, scale_vector,
    subtract_vectors, vector_magnitude, vector_magnitude_squared, weighted_sum, CollisionConfig,
    Vector3, COINCIDENT_CENTER_NUDGE, DEFAULT_COLLISION_CONFIG,
};

/// Contact information from collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactInfo {
    pub point_a: Vector3,         // Contact point on body A (world space)
    pub point_b: Vector3,         // Contact point on body B (world space)
    pub normal: Vector3,          // Unit contact normal, pointing from B towards A
    pub penetration_depth: f64,   // Distance to push A along `normal` to separate
}

impl ContactInfo {
    /// `normal * penetration_depth`
    pub fn penetration_vector(&self) -> Vector3 {
        scale_vector(self.normal, self.penetration_depth)
    }
}

/// How a portal test decided the bodies touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortalHit {
    /// Refinement converged on a portal facing the origin.
    Refined { portal: Portal, normal: Vector3 },
    /// The first support point along the ray was collinear with the interior point and
    /// already past the origin, so no portal could be built.
    Collinear { support: SupportPoint, normal: Vector3, interior: Vector3 },
}

impl PortalHit {
    /// Unit normal of the hit, pointing from B towards A.
    pub fn normal(&self) -> Vector3 {
        match self {
            PortalHit::Refined { normal, .. } | PortalHit::Collinear { normal, .. } => *normal,
        }
    }
}

/// Verdict of one MPR pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MprOutcome {
    Separated,
    Hit(PortalHit),
    /// Validation or refinement did not settle within `mpr_max_iterations`.
    IterationLimit,
}

impl MprOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, MprOutcome::Hit(_))
    }
}

/// Result of the two-pass contact query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactOutcome {
    Separated,
    IterationLimit,
    /// Contact recovered from the second, normal-seeded pass.
    Contact(ContactInfo),
    /// The second pass failed; the contact comes from the hit-test portal.
    FallbackContact(ContactInfo),
}

impl ContactOutcome {
    pub fn contact(&self) -> Option<ContactInfo> {
        match self {
            ContactOutcome::Contact(contact) | ContactOutcome::FallbackContact(contact) => Some(*contact),
            ContactOutcome::Separated | ContactOutcome::IterationLimit => None,
        }
    }
}

/// Minkowski Portal Refinement hit test
///
/// # Example
/// ```
/// use rs_narrowphase::interactions::test_collision;
/// use rs_narrowphase::models::{ConvexHull, RigidBody, StockShape};
///
/// let a = RigidBody::new(ConvexHull::stock(StockShape::Box), (0.0, 0.0, 0.0), 1.0).unwrap();
/// let b = RigidBody::new(ConvexHull::stock(StockShape::Box), (5.0, 0.0, 0.0), 1.0).unwrap();
/// assert!(!test_collision(&a, &b));
/// ```
pub fn test_collision<A, B>(a: &A, b: &B) -> bool
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    test_collision_with_config(a, b, &DEFAULT_COLLISION_CONFIG)
}

pub fn test_collision_with_config<A, B>(a: &A, b: &B, config: &CollisionConfig) -> bool
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    mpr_collision(a, b, config).is_hit()
}

/// Runs the MPR hit test over `CSO(b, a)`, with the interior point at `b - a` and the
/// ray pointing back at the origin.
pub fn mpr_collision<A, B>(a: &A, b: &B, config: &CollisionConfig) -> MprOutcome
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    let cso = ConfigurationSpaceObject::new(b, a);
    let interior = subtract_vectors(b.position(), a.position());

    mpr_portal_test(&cso, interior, negate_vector(interior), config)
}

/// Contact normal, penetration depth and the contact point on each body, or `None` when
/// the bodies are apart (or MPR gave up).
///
/// # Example
/// ```
/// use rs_narrowphase::interactions::compute_contact;
/// use rs_narrowphase::models::{ConvexHull, RigidBody, StockShape};
///
/// let a = RigidBody::new(ConvexHull::stock(StockShape::Box), (0.0, 0.0, 0.0), 1.0).unwrap();
/// let b = RigidBody::new(ConvexHull::stock(StockShape::Box), (0.8, 0.0, 0.0), 1.0).unwrap();
///
/// let contact = compute_contact(&a, &b).unwrap();
/// assert!((contact.penetration_depth - 0.2).abs() < 1e-9);
/// assert!((contact.normal.0 + 1.0).abs() < 1e-9);
/// ```
pub fn compute_contact<A, B>(a: &A, b: &B) -> Option<ContactInfo>
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    compute_contact_with_config(a, b, &DEFAULT_COLLISION_CONFIG)
}

pub fn compute_contact_with_config<A, B>(a: &A, b: &B, config: &CollisionConfig) -> Option<ContactInfo>
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    compute_contact_outcome(a, b, config).contact()
}

/// Two-pass contact query.
///
/// The first pass is the plain hit test. The second reruns the portal search along the
/// first pass's normal (`r = n`, `v = -n * s`) so that the refined portal is the one the
/// origin projects onto, then interpolates the contact from it. `s` is picked from the
/// first pass's portal so that `v` stays inside the difference for bodies of any size.
pub fn compute_contact_outcome<A, B>(a: &A, b: &B, config: &CollisionConfig) -> ContactOutcome
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    let first = match mpr_collision(a, b, config) {
        MprOutcome::Hit(hit) => hit,
        MprOutcome::Separated => return ContactOutcome::Separated,
        MprOutcome::IterationLimit => return ContactOutcome::IterationLimit,
    };

    let cso = ConfigurationSpaceObject::new(b, a);
    let normal = first.normal();

    let seed_distance = contact_seed_distance(&first);
    if seed_distance <= config.degenerate_epsilon {
        debug!("No interior point behind the origin along the MPR normal, using the hit-test portal");
        return ContactOutcome::FallbackContact(contact_from_hit(&first));
    }

    match mpr_portal_test(&cso, scale_vector(normal, -seed_distance), normal, config) {
        MprOutcome::Hit(second) => ContactOutcome::Contact(contact_from_hit(&second)),
        outcome => {
            debug!("MPR contact pass ended with {:?}, using the hit-test portal instead", outcome);
            ContactOutcome::FallbackContact(contact_from_hit(&first))
        }
    }
}

/// How far behind the origin, along `-normal`, the contact pass can put its interior point.
///
/// The interior point and the hit portal span a tetrahedron that lies inside the
/// difference and holds the origin. The result is half the distance from the origin to
/// the boundary of that tetrahedron along `-normal`, or `0.0` when the origin sits on a
/// side face the ray leaves through. For a collinear hit the segment from the interior
/// point to the origin plays the same role.
fn contact_seed_distance(hit: &PortalHit) -> f64 {
    match hit {
        PortalHit::Collinear { interior, .. } => 0.5 * vector_magnitude(*interior),
        PortalHit::Refined { portal, normal } => {
            let direction = negate_vector(*normal);
            let corners = [portal.v.point, portal.a.point, portal.b.point, portal.c.point];
            let faces = [(0, 1, 2, 3), (0, 2, 3, 1), (0, 3, 1, 2), (1, 2, 3, 0)];

            let mut reach = f64::INFINITY;
            for (i, j, k, opposite) in faces {
                let face_normal = cross_product(
                    subtract_vectors(corners[j], corners[i]),
                    subtract_vectors(corners[k], corners[i]),
                );
                let outward = match normalize_vector(face_normal) {
                    Ok(n) if dot_product(n, subtract_vectors(corners[opposite], corners[i])) > 0.0 => negate_vector(n),
                    Ok(n) => n,
                    Err(_) => return 0.0,
                };

                let along = dot_product(outward, direction);
                if along > 0.0 {
                    // The origin is inside, so its offset from every face plane is non-negative
                    let offset = dot_product(outward, corners[i]).max(0.0);
                    reach = reach.min(offset / along);
                }
            }

            if reach.is_finite() { 0.5 * reach } else { 0.0 }
        }
    }
}

/// One MPR pass over `cso` with interior point `interior` and ray `ray`.
///
/// `cso` is `CSO(b, a)`, so support points carry the point on B in `point_a` and the
/// point on A in `point_b`.
pub fn mpr_portal_test<A, B>(
    cso: &ConfigurationSpaceObject<'_, A, B>,
    interior: Vector3,
    ray: Vector3,
    config: &CollisionConfig,
) -> MprOutcome
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    let eps = config.degenerate_epsilon;

    let (v, r) = if is_zero_vector(interior, eps) {
        debug!("MPR interior point at the origin, nudging it off-centre");
        let nudged = (COINCIDENT_CENTER_NUDGE, 0.0, 0.0);
        (nudged, negate_vector(nudged))
    } else {
        (interior, ray)
    };

    // Portal generation
    let a = cso.support_info(r);
    let n = cross_product(v, a.point);
    if is_zero_vector(n, eps) {
        return collinear_outcome(v, r, a, config);
    }

    let b = cso.support_info(n);
    let n = cross_product(subtract_vectors(a.point, v), subtract_vectors(b.point, v));
    if is_zero_vector(n, eps) {
        debug!("MPR portal generation produced a degenerate triangle");
        return MprOutcome::Separated;
    }

    let c = cso.support_info(n);
    let mut portal = Portal::new(SupportPoint::from_point(v), a, b, c);

    if !validate_portal(cso, &mut portal, r, config) {
        warn!("MPR portal validation exceeded {} iterations", config.mpr_max_iterations);
        return MprOutcome::IterationLimit;
    }

    refine_portal(cso, portal, config)
}

fn collinear_outcome(v: Vector3, r: Vector3, support: SupportPoint, config: &CollisionConfig) -> MprOutcome {
    if !config.resolve_collinear_origin || dot_product(v, support.point) > 0.0 {
        debug!("MPR first support point is collinear with the interior point, no portal");
        return MprOutcome::Separated;
    }

    match normalize_vector(r) {
        Ok(normal) => MprOutcome::Hit(PortalHit::Collinear { support, normal, interior: v }),
        Err(_) => MprOutcome::Separated,
    }
}

/// Rotates support points into the portal until the ray passes through it.
/// Returns `false` if the cap is reached first.
fn validate_portal<A, B>(
    cso: &ConfigurationSpaceObject<'_, A, B>,
    portal: &mut Portal,
    r: Vector3,
    config: &CollisionConfig,
) -> bool
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    let v = portal.v.point;

    for iteration in 0..config.mpr_max_iterations {
        let va = subtract_vectors(portal.a.point, v);
        let vb = subtract_vectors(portal.b.point, v);
        let vc = subtract_vectors(portal.c.point, v);

        let nvab = cross_product(va, vb);
        let nvbc = cross_product(vb, vc);
        let nvca = cross_product(vc, va);

        if dot_product(r, nvab) > 0.0 {
            portal.c = cso.support_info(nvab);
            portal.swap_ab();
        } else if dot_product(r, nvbc) > 0.0 {
            portal.a = cso.support_info(nvbc);
            portal.swap_bc();
        } else if dot_product(r, nvca) > 0.0 {
            portal.b = cso.support_info(nvca);
            portal.swap_ac();
        } else {
            trace!("MPR portal valid after {} iterations", iteration);
            return true;
        }
    }

    false
}

fn refine_portal<A, B>(
    cso: &ConfigurationSpaceObject<'_, A, B>,
    mut portal: Portal,
    config: &CollisionConfig,
) -> MprOutcome
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    let v = portal.v.point;
    let mut hit = false;

    for iteration in 0..config.mpr_max_iterations {
        let n = cross_product(
            subtract_vectors(portal.c.point, portal.a.point),
            subtract_vectors(portal.b.point, portal.a.point),
        );

        if dot_product(portal.a.point, n) >= 0.0 {
            hit = true;
        }

        let p = cso.support_info(n);
        // Measured along the unit normal, so the tolerance is a distance
        let n_length = vector_magnitude(n);
        let progress = if n_length > 0.0 {
            dot_product(subtract_vectors(p.point, portal.c.point), n) / n_length
        } else {
            0.0
        };

        if progress <= config.mpr_refinement_epsilon || dot_product(p.point, n) < 0.0 {
            trace!("MPR refinement stopped after {} iterations (hit: {})", iteration, hit);
            return finish_refinement(portal, n, hit, config);
        }

        let pa = dot_product(v, cross_product(p.point, portal.a.point));
        if pa > 0.0 {
            if dot_product(v, cross_product(p.point, portal.b.point)) < 0.0 {
                portal.c = p;
            } else {
                portal.a = p;
            }
        } else if dot_product(v, cross_product(p.point, portal.c.point)) > 0.0 {
            portal.b = p;
        } else {
            portal.a = p;
        }
    }

    warn!("MPR portal refinement exceeded {} iterations", config.mpr_max_iterations);
    MprOutcome::IterationLimit
}

fn finish_refinement(portal: Portal, n: Vector3, hit: bool, config: &CollisionConfig) -> MprOutcome {
    if !hit {
        return MprOutcome::Separated;
    }

    if is_zero_vector(n, config.degenerate_epsilon) {
        debug!("MPR final portal is degenerate");
        return MprOutcome::Separated;
    }

    match normalize_vector(n) {
        Ok(normal) => MprOutcome::Hit(PortalHit::Refined { portal, normal }),
        Err(_) => MprOutcome::Separated,
    }
}

/// Barycentric weights `(wa, wb, wc)` of `point` projected onto the plane of triangle
/// `abc`. `None` for a degenerate triangle.
pub fn projected_barycentric_coordinates(
    point: Vector3,
    a: Vector3,
    b: Vector3,
    c: Vector3,
) -> Option<(f64, f64, f64)> {
    let u = subtract_vectors(b, a);
    let w = subtract_vectors(c, a);
    let normal = cross_product(u, w);

    let normal_sq = vector_magnitude_squared(normal);
    if normal_sq <= f64::EPSILON * f64::EPSILON {
        return None;
    }

    let denom = 1.0 / normal_sq;
    let ap = subtract_vectors(point, a);

    let wc = dot_product(cross_product(u, ap), normal) * denom;
    let wb = dot_product(cross_product(ap, w), normal) * denom;

    Some((1.0 - wb - wc, wb, wc))
}

fn contact_from_hit(hit: &PortalHit) -> ContactInfo {
    match hit {
        PortalHit::Collinear { support, normal, .. } => ContactInfo {
            point_a: support.point_b,
            point_b: support.point_a,
            normal: *normal,
            penetration_depth: dot_product(support.point, *normal).max(0.0),
        },
        PortalHit::Refined { portal, normal } => {
            let weights = projected_barycentric_coordinates(
                portal.v.point,
                portal.a.point,
                portal.b.point,
                portal.c.point,
            )
            .unwrap_or_else(|| {
                debug!("MPR final portal has no area, taking its first vertex as the contact");
                (1.0, 0.0, 0.0)
            });

            let origin_projection = weighted_sum(weights, portal.a.point, portal.b.point, portal.c.point);

            ContactInfo {
                point_a: weighted_sum(weights, portal.a.point_b, portal.b.point_b, portal.c.point_b),
                point_b: weighted_sum(weights, portal.a.point_a, portal.b.point_a, portal.c.point_a),
                normal: *normal,
                penetration_depth: vector_magnitude(origin_projection),
            }
        }
    }
}
