//! Volume-uniform sampling in the unit ball.
use std::f64::consts::TAU;

use glam::DVec3;
use rand::RngCore;

use crate::sampling::{rand01, DomainSampling};

/// Uniform sampling over the volume of the unit ball centered at the origin.
///
/// The polar angle is `acos(2u - 1)` so directions are uniform over solid angle,
/// and the radius is the cube root of a uniform draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SphereSampling;

impl DomainSampling for SphereSampling {
    fn num_dim(&self) -> usize {
        3
    }

    fn sample_one(&self, rng: &mut dyn RngCore) -> DVec3 {
        let theta = rand01(rng) * TAU;
        let phi = (2.0 * rand01(rng) - 1.0).acos();
        let radius = rand01(rng).cbrt();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        DVec3::new(
            cos_theta * sin_phi * radius,
            sin_theta * sin_phi * radius,
            cos_phi * radius,
        )
    }

    fn contains(&self, point: DVec3) -> bool {
        point.length_squared() <= 1.0 + 1e-12
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn samples_lie_inside_unit_ball() {
        let mut rng = StdRng::seed_from_u64(11);
        for p in SphereSampling.sample(1000, &mut rng) {
            assert!(p.length() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn sampling_is_volume_uniform() {
        let mut rng = StdRng::seed_from_u64(77);
        let n = 20_000;
        let inner = SphereSampling
            .sample(n, &mut rng)
            .iter()
            .filter(|p| p.length() < 0.5)
            .count();
        let fraction = inner as f64 / n as f64;
        assert!((fraction - 0.125).abs() < 0.02, "fraction = {fraction}");
    }

    #[test]
    fn directions_are_uniform_over_solid_angle() {
        // With a uniform polar angle instead, the caps |z| > 0.5 would be undersampled.
        let mut rng = StdRng::seed_from_u64(8);
        let n = 20_000;
        let upper = SphereSampling
            .sample(n, &mut rng)
            .iter()
            .filter(|p| p.z / p.length() > 0.5)
            .count();
        let fraction = upper as f64 / n as f64;
        assert!((fraction - 0.25).abs() < 0.02, "fraction = {fraction}");
    }
}
