use crate::models::{Portal, Simplex, SupportPoint};

fn sp(x: f64) -> SupportPoint {
    SupportPoint::from_point((x, 0.0, 0.0))
}

#[test]
fn test_simplex_newest_last() {
    let mut simplex = Simplex::new();
    assert!(simplex.is_empty());
    assert!(simplex.a().is_none());

    simplex.push(sp(1.0));
    simplex.push(sp(2.0));
    assert_eq!(simplex.len(), 2);
    assert_eq!(simplex.a().map(|p| p.point), Some((2.0, 0.0, 0.0)));

    simplex.set(&[sp(3.0)]);
    assert_eq!(simplex.points(), &[sp(3.0)]);
}

#[test]
fn test_portal_swaps() {
    let mut portal = Portal::new(sp(0.0), sp(1.0), sp(2.0), sp(3.0));

    portal.swap_ab();
    assert_eq!((portal.a, portal.b), (sp(2.0), sp(1.0)));

    portal.swap_bc();
    assert_eq!((portal.b, portal.c), (sp(3.0), sp(1.0)));

    portal.swap_ac();
    assert_eq!((portal.a, portal.c), (sp(1.0), sp(2.0)));
    assert_eq!(portal.v, sp(0.0));
}
