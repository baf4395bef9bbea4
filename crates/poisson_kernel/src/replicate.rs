//! Periodic images of points for tileable patterns.
//!
//! In repeat mode every placed point is stored together with its translates into
//! the neighbouring unit tiles, so plain Euclidean distances against the working
//! set already account for wrap-around.
use glam::DVec3;

/// Number of working-set entries per primary: `3^num_dim` in repeat mode, else 1.
pub fn num_perms(num_dim: usize, repeat: bool) -> usize {
    if repeat {
        3usize.pow(num_dim as u32)
    } else {
        1
    }
}

/// Non-zero offsets in `{-1, 0, 1}^num_dim`, first axis varying fastest.
pub fn periodic_offsets(num_dim: usize) -> Vec<DVec3> {
    let range = |axis: usize| if axis < num_dim { -1..=1 } else { 0..=0 };

    let mut out = Vec::with_capacity(num_perms(num_dim, true) - 1);
    for z in range(2) {
        for y in range(1) {
            for x in range(0) {
                if x != 0 || y != 0 || z != 0 {
                    out.push(DVec3::new(x as f64, y as f64, z as f64));
                }
            }
        }
    }
    out
}

/// The point followed by its periodic images when `repeat` is set.
///
/// Index 0 is always the untranslated point; the output length is
/// [`num_perms`]`(num_dim, repeat)`.
pub fn replicate(point: DVec3, num_dim: usize, repeat: bool) -> Vec<DVec3> {
    if !repeat {
        return vec![point];
    }
    let mut out = Vec::with_capacity(num_perms(num_dim, true));
    out.push(point);
    out.extend(periodic_offsets(num_dim).into_iter().map(|o| point + o));
    out
}
