//! All-pairs narrow phase over a body list.
//!
//! There is no broad phase: every unordered pair `(i, j)` with `i < j` goes through the
//! configured strategy, so the cost is quadratic in the number of bodies.

use log::trace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use crate::interactions::{compute_contact_outcome, gjk_collision_detection_with_config, ContactInfo, ContactOutcome};
use crate::models::{ConvexBody, RigidBody};
use crate::utils::{CollisionConfig, NarrowPhaseStrategy};

/// Counters for one or more collision passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: usize,
    pub collisions: usize,
    /// Hits whose contact pass failed and whose contact came from the hit-test portal.
    pub fallback_contacts: usize,
    /// Pairs where MPR hit its iteration cap; they count as not colliding.
    pub iteration_limits: usize,
    /// Pairs the GJK pre-test ruled out before MPR ran.
    pub gjk_rejections: usize,
}

impl CollisionStats {
    pub fn merge(&mut self, other: &CollisionStats) {
        self.pairs_tested += other.pairs_tested;
        self.collisions += other.collisions;
        self.fallback_contacts += other.fallback_contacts;
        self.iteration_limits += other.iteration_limits;
        self.gjk_rejections += other.gjk_rejections;
    }
}

/// A colliding pair. `index_a < index_b`; the contact normal points from body `index_b`
/// towards body `index_a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    pub index_a: usize,
    pub index_b: usize,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub contacts: Vec<PairContact>,
    pub stats: CollisionStats,
}

impl CollisionReport {
    pub fn is_colliding(&self, index: usize) -> bool {
        self.contacts.iter().any(|pair| pair.index_a == index || pair.index_b == index)
    }

    pub fn contact_between(&self, i: usize, j: usize) -> Option<&PairContact> {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.contacts.iter().find(|pair| pair.index_a == lo && pair.index_b == hi)
    }
}

#[derive(Debug, Clone, Copy)]
enum PairOutcome {
    Separated,
    GjkRejected,
    IterationLimit,
    Contact(ContactInfo),
    FallbackContact(ContactInfo),
}

/// Runs the narrow phase on one pair.
fn evaluate_pair<A, B>(a: &A, b: &B, config: &CollisionConfig) -> PairOutcome
where
    A: ConvexBody + ?Sized,
    B: ConvexBody + ?Sized,
{
    if config.strategy == NarrowPhaseStrategy::GjkThenMpr && !gjk_collision_detection_with_config(a, b, config) {
        return PairOutcome::GjkRejected;
    }

    match compute_contact_outcome(a, b, config) {
        ContactOutcome::Separated => PairOutcome::Separated,
        ContactOutcome::IterationLimit => PairOutcome::IterationLimit,
        ContactOutcome::Contact(contact) => PairOutcome::Contact(contact),
        ContactOutcome::FallbackContact(contact) => PairOutcome::FallbackContact(contact),
    }
}

fn build_report(outcomes: impl IntoIterator<Item = (usize, usize, PairOutcome)>) -> CollisionReport {
    let mut report = CollisionReport::default();

    for (index_a, index_b, outcome) in outcomes {
        report.stats.pairs_tested += 1;

        let contact = match outcome {
            PairOutcome::Separated => continue,
            PairOutcome::GjkRejected => {
                report.stats.gjk_rejections += 1;
                continue;
            }
            PairOutcome::IterationLimit => {
                report.stats.iteration_limits += 1;
                continue;
            }
            PairOutcome::Contact(contact) => contact,
            PairOutcome::FallbackContact(contact) => {
                report.stats.fallback_contacts += 1;
                contact
            }
        };

        trace!("bodies {} and {} collide, depth {}", index_a, index_b, contact.penetration_depth);
        report.stats.collisions += 1;
        report.contacts.push(PairContact { index_a, index_b, contact });
    }

    report
}

/// Tests every unordered pair of `bodies` without touching them.
///
/// With the `parallel` feature the pairs are evaluated on the rayon pool; the report is
/// identical to the sequential one.
///
/// # Example
/// ```
/// use rs_narrowphase::interactions::scan_pairs;
/// use rs_narrowphase::models::{ConvexHull, RigidBody, StockShape};
/// use rs_narrowphase::utils::CollisionConfig;
///
/// let bodies: Vec<RigidBody> = [0.0, 0.6, 5.0]
///     .iter()
///     .map(|&x| RigidBody::new(ConvexHull::stock(StockShape::Box), (x, 0.0, 0.0), 1.0).unwrap())
///     .collect();
///
/// let report = scan_pairs(&bodies, &CollisionConfig::default());
/// assert_eq!(report.stats.pairs_tested, 3);
/// assert_eq!(report.contacts.len(), 1);
/// ```
pub fn scan_pairs<T>(bodies: &[T], config: &CollisionConfig) -> CollisionReport
where
    T: ConvexBody + Sync,
{
    let count = bodies.len();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(usize, usize, PairOutcome)> = (0..count)
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..count).map(move |j| (i, j, evaluate_pair(&bodies[i], &bodies[j], config)))
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = (0..count).flat_map(|i| {
        (i + 1..count).map(move |j| (i, j, evaluate_pair(&bodies[i], &bodies[j], config)))
    });

    build_report(outcomes)
}

/// [`scan_pairs`], then flags both bodies of every colliding pair as in contact.
pub fn detect_collisions(bodies: &mut [RigidBody], config: &CollisionConfig) -> CollisionReport {
    let report = scan_pairs(bodies, config);

    for pair in &report.contacts {
        bodies[pair.index_a].mark_contact();
        bodies[pair.index_b].mark_contact();
    }

    report
}
