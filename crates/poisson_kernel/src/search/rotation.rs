//! Separation scoring of finished point sets.
//!
//! With a single rotation the score is the smallest pairwise distance of the set.
//! With `K > 1` rotations the set is unioned with its copies rotated about the
//! origin by `2πk/K` and the smallest pairwise distance of that union is used, so
//! a kernel that is rotated per pixel stays well separated from itself.
use std::f64::consts::TAU;

use glam::DVec3;

/// Smallest Euclidean distance between any two entries, `f64::INFINITY` for
/// fewer than two points.
pub fn min_pairwise_distance(points: &[DVec3]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(a.distance_squared(*b));
        }
    }
    best.sqrt()
}

/// Rotates every point counter-clockwise by `angle` radians in the XY plane.
pub fn rotate_xy(points: &[DVec3], angle: f64) -> Vec<DVec3> {
    let (s, c) = angle.sin_cos();
    points
        .iter()
        .map(|p| DVec3::new(c * p.x - s * p.y, s * p.x + c * p.y, p.z))
        .collect()
}

/// Separation score of `points` under `rotation_count` discrete rotations.
pub fn separation_score(points: &[DVec3], rotation_count: usize) -> f64 {
    if rotation_count <= 1 {
        return min_pairwise_distance(points);
    }

    let mut union = Vec::with_capacity(points.len() * rotation_count);
    union.extend_from_slice(points);
    for k in 1..rotation_count {
        let angle = TAU * k as f64 / rotation_count as f64;
        union.extend(rotate_xy(points, angle));
    }
    min_pairwise_distance(&union)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn min_pairwise_distance_of_small_sets() {
        assert_eq!(min_pairwise_distance(&[]), f64::INFINITY);
        assert_eq!(min_pairwise_distance(&[DVec3::ONE]), f64::INFINITY);

        let pts = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(min_pairwise_distance(&pts), 1.0);
    }

    #[test]
    fn single_rotation_is_plain_min_distance() {
        let pts = [DVec3::new(0.1, 0.2, 0.0), DVec3::new(0.7, 0.4, 0.0)];
        assert_eq!(separation_score(&pts, 1), min_pairwise_distance(&pts));
        assert_eq!(separation_score(&pts, 0), min_pairwise_distance(&pts));
    }

    #[test]
    fn rotate_xy_quarter_turn() {
        let r = rotate_xy(&[DVec3::new(1.0, 0.0, 0.0)], FRAC_PI_2);
        assert!((r[0] - DVec3::new(0.0, 1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn rotated_copies_of_single_point_form_a_polygon() {
        let score = separation_score(&[DVec3::new(1.0, 0.0, 0.0)], 4);
        assert!((score - 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn point_symmetric_set_collapses_under_half_turn() {
        let pts = [DVec3::new(0.5, 0.0, 0.0), DVec3::new(-0.5, 0.0, 0.0)];
        assert_eq!(separation_score(&pts, 1), 1.0);
        assert!(separation_score(&pts, 2) < EPS);
    }

    #[test]
    fn rotations_never_increase_the_score() {
        let pts = [
            DVec3::new(0.3, 0.1, 0.0),
            DVec3::new(-0.2, 0.6, 0.0),
            DVec3::new(-0.4, -0.5, 0.0),
        ];
        let plain = separation_score(&pts, 1);
        for k in 2..8 {
            assert!(separation_score(&pts, k) <= plain);
        }
    }
}
