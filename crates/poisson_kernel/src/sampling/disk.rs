//! Area-uniform sampling in the unit disk.
use std::f64::consts::TAU;

use glam::DVec3;
use rand::RngCore;

use crate::sampling::{rand01, DomainSampling};

/// Uniform sampling over the area of the unit disk centered at the origin.
///
/// The radius is the square root of a uniform draw; a linear radius would
/// crowd samples towards the center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskSampling;

impl DomainSampling for DiskSampling {
    fn num_dim(&self) -> usize {
        2
    }

    fn sample_one(&self, rng: &mut dyn RngCore) -> DVec3 {
        let alpha = rand01(rng) * TAU;
        let radius = rand01(rng).sqrt();
        let (s, c) = alpha.sin_cos();
        DVec3::new(c * radius, s * radius, 0.0)
    }

    fn contains(&self, point: DVec3) -> bool {
        point.z == 0.0 && point.length_squared() <= 1.0 + 1e-12
    }
}
