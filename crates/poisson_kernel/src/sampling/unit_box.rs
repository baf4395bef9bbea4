//! Uniform sampling in the unit square or cube.
use glam::DVec3;
use rand::RngCore;

use crate::domain::check_num_dim;
use crate::error::Result;
use crate::sampling::{rand01, DomainSampling};

/// Uniform sampling in `[0, 1)^num_dim`, each axis drawn independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSampling {
    pub(super) num_dim: usize,
}

impl BoxSampling {
    /// Create a box sampler over `num_dim` axes; `num_dim` must be 1, 2 or 3.
    pub fn new(num_dim: usize) -> Result<Self> {
        check_num_dim(num_dim)?;
        Ok(Self { num_dim })
    }
}

impl DomainSampling for BoxSampling {
    fn num_dim(&self) -> usize {
        self.num_dim
    }

    fn sample_one(&self, rng: &mut dyn RngCore) -> DVec3 {
        let mut p = [0.0_f64; 3];
        for axis in p.iter_mut().take(self.num_dim) {
            *axis = rand01(rng);
        }
        DVec3::from_array(p)
    }

    fn contains(&self, point: DVec3) -> bool {
        point
            .to_array()
            .iter()
            .enumerate()
            .all(|(axis, &v)| {
                if axis < self.num_dim {
                    (0.0..1.0).contains(&v)
                } else {
                    v == 0.0
                }
            })
    }
}
