//! Domain shapes, the validated domain description and the ordered point set type.
//!
//! Points are stored as [`DVec3`] regardless of dimensionality. Axes at or beyond
//! `num_dim` are always exactly zero, so distances between zero-padded points are
//! the same as in the lower-dimensional space.
use glam::DVec3;

use crate::error::{Error, Result};
use crate::replicate::num_perms;
use crate::sampling::Domain;

/// Supported domain shapes.
///
/// `Line` and `Box` are the unit interval/square/cube `[0, 1)^d`. `Disk` and
/// `Sphere` are the unit ball centered at the origin.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Line,
    Box,
    Disk,
    Sphere,
}

impl Shape {
    /// Resolves a shape from a dimension and a "round" flag.
    ///
    /// One-dimensional domains are always a line; in 2D and 3D the flag selects
    /// disk/sphere over square/box.
    pub fn for_dim(num_dim: usize, round: bool) -> Result<Self> {
        check_num_dim(num_dim)?;
        Ok(match (num_dim, round) {
            (1, _) => Shape::Line,
            (2, true) => Shape::Disk,
            (3, true) => Shape::Sphere,
            _ => Shape::Box,
        })
    }

    /// Whether the shape is a ball (curved, bounded, not tileable).
    pub fn is_round(self) -> bool {
        matches!(self, Shape::Disk | Shape::Sphere)
    }

    /// Whether the shape is defined for `num_dim` dimensions.
    pub fn supports_dim(self, num_dim: usize) -> bool {
        match self {
            Shape::Line => num_dim == 1,
            Shape::Box => (1..=3).contains(&num_dim),
            Shape::Disk => num_dim == 2,
            Shape::Sphere => num_dim == 3,
        }
    }
}

pub(crate) fn check_num_dim(num_dim: usize) -> Result<()> {
    if !(1..=3).contains(&num_dim) {
        return Err(Error::InvalidConfig(format!(
            "num_dim must be 1, 2 or 3 (got {num_dim})"
        )));
    }
    Ok(())
}

/// Validated description of the sampling domain.
///
/// Deserialized values go through [`DomainSpec::new`], so they obey the same
/// invariants as constructed ones.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDomainSpec")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSpec {
    num_dim: usize,
    shape: Shape,
    repeat: bool,
}

impl DomainSpec {
    /// Creates a domain description. Repeat mode is forced off for disks and spheres.
    pub fn new(num_dim: usize, shape: Shape, repeat: bool) -> Result<Self> {
        check_num_dim(num_dim)?;
        if !shape.supports_dim(num_dim) {
            return Err(Error::InvalidConfig(format!(
                "shape {shape:?} is not defined in {num_dim}D"
            )));
        }
        Ok(Self {
            num_dim,
            shape,
            repeat: repeat && !shape.is_round(),
        })
    }

    pub fn num_dim(&self) -> usize {
        self.num_dim
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Effective repeat flag (always `false` for round shapes).
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    /// Number of working-set entries per primary point.
    pub fn num_perms(&self) -> usize {
        num_perms(self.num_dim, self.repeat)
    }

    /// Sampler for this domain.
    pub fn domain(&self) -> Domain {
        Domain::new(self.shape, self.num_dim)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDomainSpec {
    num_dim: usize,
    shape: Shape,
    repeat: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDomainSpec> for DomainSpec {
    type Error = Error;

    fn try_from(raw: RawDomainSpec) -> Result<Self> {
        DomainSpec::new(raw.num_dim, raw.shape, raw.repeat)
    }
}

/// An ordered sequence of points of a fixed dimensionality.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPointSet")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    num_dim: usize,
    points: Vec<DVec3>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPointSet {
    num_dim: usize,
    points: Vec<DVec3>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPointSet> for PointSet {
    type Error = Error;

    fn try_from(raw: RawPointSet) -> Result<Self> {
        PointSet::try_new(raw.num_dim, raw.points)
    }
}

impl PointSet {
    /// Creates a point set from points produced by this crate.
    ///
    /// Callers guarantee `num_dim` is 1, 2 or 3; use [`PointSet::try_new`] for
    /// untrusted input.
    pub fn new(num_dim: usize, points: Vec<DVec3>) -> Self {
        debug_assert!((1..=3).contains(&num_dim), "num_dim must be 1, 2 or 3");
        Self { num_dim, points }
    }

    /// Checks `num_dim` and that every axis at or beyond it is zero.
    pub fn try_new(num_dim: usize, points: Vec<DVec3>) -> Result<Self> {
        check_num_dim(num_dim)?;
        if let Some(index) = points
            .iter()
            .position(|p| p.to_array()[num_dim..].iter().any(|&v| v != 0.0))
        {
            return Err(Error::InvalidConfig(format!(
                "point {index} has non-zero coordinates beyond {num_dim}D"
            )));
        }
        Ok(Self { num_dim, points })
    }

    pub fn num_dim(&self) -> usize {
        self.num_dim
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }

    pub fn get(&self, index: usize) -> Option<DVec3> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DVec3> {
        self.points.iter()
    }

    /// Coordinates of the point at `index`, truncated to `num_dim` values.
    pub fn coords(&self, index: usize) -> Option<Vec<f64>> {
        self.get(index)
            .map(|p| p.to_array()[..self.num_dim].to_vec())
    }

    /// All points as `num_dim`-length coordinate rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|p| p.to_array()[..self.num_dim].to_vec())
            .collect()
    }

    /// Points as `mint` vectors for consumers on other math libraries.
    pub fn to_mint(&self) -> Vec<mint::Vector3<f64>> {
        self.points.iter().copied().map(Into::into).collect()
    }

    /// Every `stride`-th point starting at index 0.
    pub fn every_nth(&self, stride: usize) -> PointSet {
        let stride = stride.max(1);
        PointSet {
            num_dim: self.num_dim,
            points: self.points.iter().copied().step_by(stride).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a DVec3;
    type IntoIter = std::slice::Iter<'a, DVec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_for_dim_follows_round_flag() {
        assert_eq!(Shape::for_dim(1, true).unwrap(), Shape::Line);
        assert_eq!(Shape::for_dim(1, false).unwrap(), Shape::Line);
        assert_eq!(Shape::for_dim(2, false).unwrap(), Shape::Box);
        assert_eq!(Shape::for_dim(2, true).unwrap(), Shape::Disk);
        assert_eq!(Shape::for_dim(3, false).unwrap(), Shape::Box);
        assert_eq!(Shape::for_dim(3, true).unwrap(), Shape::Sphere);
        assert!(Shape::for_dim(0, false).is_err());
        assert!(Shape::for_dim(4, true).is_err());
    }

    #[test]
    fn repeat_is_forced_off_for_round_shapes() {
        let disk = DomainSpec::new(2, Shape::Disk, true).unwrap();
        assert!(!disk.repeat());
        assert_eq!(disk.num_perms(), 1);

        let sphere = DomainSpec::new(3, Shape::Sphere, true).unwrap();
        assert!(!sphere.repeat());

        let square = DomainSpec::new(2, Shape::Box, true).unwrap();
        assert!(square.repeat());
        assert_eq!(square.num_perms(), 9);
    }

    #[test]
    fn mismatched_shape_and_dimension_is_rejected() {
        assert!(matches!(
            DomainSpec::new(3, Shape::Disk, false),
            Err(Error::InvalidConfig(_))
        ));
        assert!(DomainSpec::new(2, Shape::Line, false).is_err());
        assert!(DomainSpec::new(2, Shape::Sphere, false).is_err());
        assert!(DomainSpec::new(0, Shape::Box, false).is_err());
        assert!(DomainSpec::new(1, Shape::Box, true).is_ok());
    }

    #[test]
    fn rows_are_truncated_to_num_dim() {
        let set = PointSet::new(
            2,
            vec![DVec3::new(0.25, 0.5, 0.0), DVec3::new(0.75, 0.125, 0.0)],
        );
        assert_eq!(set.rows(), vec![vec![0.25, 0.5], vec![0.75, 0.125]]);
        assert_eq!(set.coords(1), Some(vec![0.75, 0.125]));
        assert_eq!(set.coords(2), None);
    }

    #[test]
    fn every_nth_keeps_stride_starting_at_zero() {
        let points = (0..9).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let set = PointSet::new(1, points);
        let picked = set.every_nth(3);
        let xs: Vec<f64> = picked.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn try_new_rejects_bad_dimensions_and_padding() {
        assert!(PointSet::try_new(2, vec![DVec3::new(0.5, 0.5, 0.0)]).is_ok());
        assert!(matches!(
            PointSet::try_new(0, Vec::new()),
            Err(Error::InvalidConfig(_))
        ));
        assert!(PointSet::try_new(5, vec![DVec3::ONE]).is_err());
        assert!(PointSet::try_new(2, vec![DVec3::new(0.5, 0.5, 0.25)]).is_err());
        assert!(PointSet::try_new(1, vec![DVec3::new(0.5, 0.1, 0.0)]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_domain_spec_is_validated() {
        let disk: DomainSpec =
            serde_json::from_str(r#"{"num_dim":2,"shape":"Disk","repeat":true}"#).unwrap();
        assert!(!disk.repeat());
        assert_eq!(disk.num_perms(), 1);

        let square: DomainSpec =
            serde_json::from_str(r#"{"num_dim":2,"shape":"Box","repeat":true}"#).unwrap();
        assert_eq!(square, DomainSpec::new(2, Shape::Box, true).unwrap());

        for bad in [
            r#"{"num_dim":5,"shape":"Box","repeat":true}"#,
            r#"{"num_dim":0,"shape":"Line","repeat":false}"#,
            r#"{"num_dim":3,"shape":"Disk","repeat":false}"#,
        ] {
            assert!(serde_json::from_str::<DomainSpec>(bad).is_err(), "{bad}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_point_set_is_validated() {
        let set = PointSet::new(2, vec![DVec3::new(0.25, 0.5, 0.0)]);
        let json = serde_json::to_string(&set).unwrap();
        let back: PointSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let bad = json.replace(r#""num_dim":2"#, r#""num_dim":5"#);
        assert_ne!(bad, json);
        assert!(serde_json::from_str::<PointSet>(&bad).is_err());
    }

    #[test]
    fn to_mint_preserves_coordinates() {
        let set = PointSet::new(3, vec![DVec3::new(0.1, 0.2, 0.3)]);
        let m = set.to_mint();
        assert_eq!(m[0].x, 0.1);
        assert_eq!(m[0].y, 0.2);
        assert_eq!(m[0].z, 0.3);
    }
}
