#![forbid(unsafe_code)]
//! poisson_kernel: best-candidate blue-noise kernels in 1D, 2D and 3D.
//!
//! Modules:
//! - sampling: uniform random points on the line, box, disk and sphere
//! - replicate: periodic images for tileable patterns
//! - search: best-candidate placement, separation scoring, trial loop
//! - cache_sort: locality-preserving reordering of the result
//! - events: progress and trial events emitted during a search
//!
//! ```
//! use poisson_kernel::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let generator = Generator::configure(2, Shape::Box, true, false)?;
//! let config = SearchConfig::new(8).with_candidates_per_step(64);
//! let mut rng = StdRng::seed_from_u64(7);
//! let points = generator.search(&config, &mut rng, None)?;
//! let points = reorder(&points, 4);
//! assert_eq!(points.len(), 8);
//! # Ok::<(), poisson_kernel::error::Error>(())
//! ```
pub mod cache_sort;
pub mod domain;
pub mod error;
pub mod events;
pub mod replicate;
pub mod sampling;
pub mod search;

/// Convenient re-exports for common types. Import with `use poisson_kernel::prelude::*;`.
pub mod prelude {
    pub use crate::cache_sort::{bucket_key, reorder};
    pub use crate::domain::{DomainSpec, PointSet, Shape};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, ProgressSink, SearchEvent, VecSink};
    pub use crate::replicate::{num_perms, periodic_offsets, replicate};
    pub use crate::sampling::{
        BoxSampling, DiskSampling, Domain, DomainSampling, LineSampling, SphereSampling,
    };
    pub use crate::search::{
        find_next_point, min_pairwise_distance, separation_score, Generator, SearchConfig,
        SearchOutcome,
    };
}
