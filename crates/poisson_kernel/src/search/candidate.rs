//! Best-candidate selection of the next point.
use glam::DVec3;
use rand::RngCore;

use crate::sampling::DomainSampling;

/// Smallest squared distance from `point` to any entry of `points`.
///
/// Returns `f64::INFINITY` for an empty slice.
#[inline]
pub fn min_distance_squared(points: &[DVec3], point: DVec3) -> f64 {
    points
        .iter()
        .fold(f64::INFINITY, |best, q| best.min(q.distance_squared(point)))
}

/// Draws `candidate_budget` candidates from `domain` and returns the one whose
/// nearest neighbour in `existing` is farthest away.
///
/// `existing` is expected to already contain the periodic images of every placed
/// point. The first candidate is always accepted and later ones only replace it
/// when strictly farther, so a point is returned even when every candidate
/// coincides with an existing point.
pub fn find_next_point(
    existing: &[DVec3],
    domain: &dyn DomainSampling,
    candidate_budget: usize,
    rng: &mut dyn RngCore,
) -> DVec3 {
    debug_assert!(candidate_budget >= 1, "candidate_budget must be >= 1");

    let mut best = domain.sample_one(rng);
    let mut best_d2 = min_distance_squared(existing, best);

    for _ in 1..candidate_budget {
        let candidate = domain.sample_one(rng);
        let d2 = min_distance_squared(existing, candidate);
        if d2 > best_d2 {
            best_d2 = d2;
            best = candidate;
        }
    }

    best
}
