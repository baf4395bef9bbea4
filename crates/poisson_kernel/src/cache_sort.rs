//! Locality-preserving reordering of finished kernels.
//!
//! Points are discretized into `buckets_per_axis` cells per axis and sorted by a
//! raster key (z-major, then y top-down, then x), so taps that are close in space
//! are also close in the emitted array.
use glam::DVec3;

use crate::domain::PointSet;

/// Raster sort key of `point` for a grid of `buckets_per_axis` cells per axis.
///
/// `floor(x*b) + floor(-y*b) * 2b + floor(z*b) * 4b`. The y axis is negated so
/// rows are visited top to bottom.
pub fn bucket_key(point: DVec3, buckets_per_axis: u32) -> i64 {
    let b = buckets_per_axis as f64;
    let weight = buckets_per_axis as i64;
    let bx = (point.x * b).floor() as i64;
    let by = (-point.y * b).floor() as i64;
    let bz = (point.z * b).floor() as i64;
    bx + by * 2 * weight + bz * 4 * weight
}

/// Reorders `points` by [`bucket_key`]. With zero buckets the input is returned unchanged.
///
/// The sort is stable, so points sharing a bucket keep their placement order.
pub fn reorder(points: &PointSet, buckets_per_axis: u32) -> PointSet {
    if buckets_per_axis < 1 {
        return points.clone();
    }

    let mut keyed: Vec<(i64, DVec3)> = points
        .iter()
        .map(|&p| (bucket_key(p, buckets_per_axis), p))
        .collect();
    keyed.sort_by_key(|&(key, _)| key);

    PointSet::new(
        points.num_dim(),
        keyed.into_iter().map(|(_, p)| p).collect(),
    )
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::{BoxSampling, DomainSampling};

    fn square(points: &[(f64, f64)]) -> PointSet {
        PointSet::new(
            2,
            points
                .iter()
                .map(|&(x, y)| DVec3::new(x, y, 0.0))
                .collect(),
        )
    }

    fn sorted_bits(set: &PointSet) -> Vec<[u64; 3]> {
        let mut out: Vec<[u64; 3]> = set
            .iter()
            .map(|p| p.to_array().map(f64::to_bits))
            .collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn zero_buckets_is_identity() {
        let set = square(&[(0.9, 0.9), (0.1, 0.1), (0.5, 0.2)]);
        assert_eq!(reorder(&set, 0), set);
    }

    #[test]
    fn two_buckets_visit_rows_top_down_left_to_right() {
        let set = square(&[(0.1, 0.1), (0.9, 0.9), (0.1, 0.9), (0.9, 0.1)]);
        // Keys: (0.1,0.1) -> -4, (0.9,0.9) -> -7, (0.1,0.9) -> -8, (0.9,0.1) -> -3.
        let keys: Vec<i64> = set.iter().map(|&p| bucket_key(p, 2)).collect();
        assert_eq!(keys, vec![-4, -7, -8, -3]);

        let sorted = reorder(&set, 2);
        assert_eq!(
            sorted,
            square(&[(0.1, 0.9), (0.9, 0.9), (0.1, 0.1), (0.9, 0.1)])
        );
    }

    #[test]
    fn z_axis_has_the_largest_weight() {
        assert_eq!(bucket_key(DVec3::new(0.6, 0.1, 0.6), 2), 1 - 4 + 8);
        let high_z = bucket_key(DVec3::new(0.0, 0.0, 0.9), 4);
        let far_x = bucket_key(DVec3::new(0.9, 0.0, 0.1), 4);
        assert!(high_z > far_x);
    }

    #[test]
    fn line_keys_follow_x() {
        let set = PointSet::new(
            1,
            vec![
                DVec3::new(0.8, 0.0, 0.0),
                DVec3::new(0.1, 0.0, 0.0),
                DVec3::new(0.4, 0.0, 0.0),
            ],
        );
        let xs: Vec<f64> = reorder(&set, 4).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.1, 0.4, 0.8]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let set = square(&[(0.3, 0.3), (0.1, 0.1), (0.2, 0.4)]);
        assert_eq!(reorder(&set, 1), set);
    }

    #[test]
    fn reorder_is_a_permutation_with_sorted_keys() {
        let mut rng = StdRng::seed_from_u64(17);
        let set = PointSet::new(3, BoxSampling::new(3).unwrap().sample(128, &mut rng));
        let sorted = reorder(&set, 4);
        assert_eq!(sorted.len(), set.len());
        assert_eq!(sorted_bits(&sorted), sorted_bits(&set));

        let keys: Vec<i64> = sorted.iter().map(|&p| bucket_key(p, 4)).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}
