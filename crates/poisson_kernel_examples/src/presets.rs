//! Named domain presets for the command-line front end.
use clap::ValueEnum;
use poisson_kernel::domain::Shape;
use poisson_kernel::error::Result;
use poisson_kernel::search::Generator;

/// The domain choices offered by the generator front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Line,
    RepeatedLine,
    Disk,
    RotatedDisk,
    Rect,
    RepeatedRect,
    Sphere,
    Box,
    RepeatedBox,
}

impl Preset {
    /// `(num_dim, shape, repeat)` of the preset.
    pub fn domain(self) -> (usize, Shape, bool) {
        match self {
            Preset::Line => (1, Shape::Line, false),
            Preset::RepeatedLine => (1, Shape::Line, true),
            Preset::Disk | Preset::RotatedDisk => (2, Shape::Disk, false),
            Preset::Rect => (2, Shape::Box, false),
            Preset::RepeatedRect => (2, Shape::Box, true),
            Preset::Sphere => (3, Shape::Sphere, false),
            Preset::Box => (3, Shape::Box, false),
            Preset::RepeatedBox => (3, Shape::Box, true),
        }
    }

    /// Only the rotated disk honors a rotation count; every other preset uses 1.
    pub fn rotation_count(self, requested: usize) -> usize {
        if self == Preset::RotatedDisk {
            requested
        } else {
            1
        }
    }

    pub fn generator(self, first_point_fixed_at_origin: bool) -> Result<Generator> {
        let (num_dim, shape, repeat) = self.domain();
        Generator::configure(num_dim, shape, repeat, first_point_fixed_at_origin)
    }
}
