//! Uniform random point sampling inside the supported domains.
//!
//! Each shape has its own sampler implementing [`DomainSampling`]. [`Domain`] is
//! the closed set of those samplers and is what the search works with.
use glam::DVec3;
use rand::RngCore;

use crate::domain::Shape;

pub mod disk;
pub mod line;
pub mod sphere;
pub mod unit_box;

pub use disk::DiskSampling;
pub use line::LineSampling;
pub use sphere::SphereSampling;
pub use unit_box::BoxSampling;

/// Capability interface of a sampling domain.
pub trait DomainSampling: Send + Sync {
    /// Dimensionality of the points produced.
    fn num_dim(&self) -> usize;

    /// Draws one point, uniformly distributed over the domain's length/area/volume.
    fn sample_one(&self, rng: &mut dyn RngCore) -> DVec3;

    /// Draws `count` independent points.
    fn sample(&self, count: usize, rng: &mut dyn RngCore) -> Vec<DVec3> {
        (0..count).map(|_| self.sample_one(rng)).collect()
    }

    /// Canonical origin of the domain.
    fn zero_point(&self) -> DVec3 {
        DVec3::ZERO
    }

    /// Whether `point` lies inside the domain.
    fn contains(&self, point: DVec3) -> bool;
}

/// The closed set of domain samplers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    Line(LineSampling),
    Box(BoxSampling),
    Disk(DiskSampling),
    Sphere(SphereSampling),
}

impl Domain {
    /// Sampler for `shape` in `num_dim` dimensions.
    ///
    /// Only reachable through [`crate::domain::DomainSpec::domain`], which has
    /// already validated the combination. A box in 1D is the unit interval.
    pub(crate) fn new(shape: Shape, num_dim: usize) -> Self {
        debug_assert!(
            shape.supports_dim(num_dim),
            "{shape:?} is not defined in {num_dim}D"
        );
        match shape {
            Shape::Line => Domain::Line(LineSampling),
            Shape::Box if num_dim <= 1 => Domain::Line(LineSampling),
            Shape::Box => Domain::Box(BoxSampling { num_dim }),
            Shape::Disk => Domain::Disk(DiskSampling),
            Shape::Sphere => Domain::Sphere(SphereSampling),
        }
    }

    fn inner(&self) -> &dyn DomainSampling {
        match self {
            Domain::Line(s) => s,
            Domain::Box(s) => s,
            Domain::Disk(s) => s,
            Domain::Sphere(s) => s,
        }
    }
}

impl DomainSampling for Domain {
    fn num_dim(&self) -> usize {
        self.inner().num_dim()
    }

    fn sample_one(&self, rng: &mut dyn RngCore) -> DVec3 {
        self.inner().sample_one(rng)
    }

    fn zero_point(&self) -> DVec3 {
        self.inner().zero_point()
    }

    fn contains(&self, point: DVec3) -> bool {
        self.inner().contains(point)
    }
}

/// Generate a random float in the half-open range [0, 1) with 53 bits of precision.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
