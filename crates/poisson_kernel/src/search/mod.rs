//! Greedy best-candidate search for well-separated point sets.
//!
//! - [`candidate`]: picks the next point farthest from the current working set
//! - [`rotation`]: separation scoring, optionally under discrete rotations
//! - [`optimizer`]: the trial loop driving the two above
pub mod candidate;
pub mod optimizer;
pub mod rotation;

pub use candidate::{find_next_point, min_distance_squared};
pub use optimizer::{Generator, SearchConfig, SearchOutcome};
pub use rotation::{min_pairwise_distance, rotate_xy, separation_score};
