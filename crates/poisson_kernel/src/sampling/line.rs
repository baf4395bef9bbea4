//! Uniform sampling on the unit interval.
use glam::DVec3;
use rand::RngCore;

use crate::sampling::{rand01, DomainSampling};

/// Uniform sampling on `[0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSampling;

impl DomainSampling for LineSampling {
    fn num_dim(&self) -> usize {
        1
    }

    fn sample_one(&self, rng: &mut dyn RngCore) -> DVec3 {
        DVec3::new(rand01(rng), 0.0, 0.0)
    }

    fn contains(&self, point: DVec3) -> bool {
        (0.0..1.0).contains(&point.x) && point.y == 0.0 && point.z == 0.0
    }
}
