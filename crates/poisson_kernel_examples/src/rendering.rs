//! PNG previews of generated kernels and logging setup for the executables.
//!
//! 3D kernels are drawn as an orthographic projection onto the XY plane.
use std::f64::consts::TAU;
use std::path::Path;

use glam::{DVec2, DVec3};
use image::{Rgb, RgbImage};
use poisson_kernel::domain::{DomainSpec, PointSet};
use poisson_kernel::replicate::periodic_offsets;
use poisson_kernel::search::rotate_xy;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Colors and sizes used by [`render_kernel`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width and height of the square image in pixels.
    pub size_px: u32,
    pub background: [u8; 3],
    /// Color of the primary points.
    pub point_color: [u8; 3],
    /// Color of periodic and rotated copies.
    pub copy_color: [u8; 3],
    /// Color of tile borders and the unit circle.
    pub guide_color: [u8; 3],
    pub point_radius_px: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size_px: 800,
            background: [250, 250, 250],
            point_color: [200, 40, 40],
            copy_color: [60, 90, 200],
            guide_color: [20, 20, 20],
            point_radius_px: 5,
        }
    }
}

impl RenderConfig {
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_radius(mut self, point_radius_px: i32) -> Self {
        self.point_radius_px = point_radius_px;
        self
    }
}

/// Maps domain coordinates to pixels; y grows upwards in the domain.
struct View {
    min: f64,
    max: f64,
    size_px: u32,
}

impl View {
    fn for_spec(spec: &DomainSpec, size_px: u32) -> Self {
        let (lo, hi) = if spec.shape().is_round() {
            (-1.0, 1.0)
        } else if spec.repeat() {
            (0.0, 2.0)
        } else {
            (0.0, 1.0)
        };
        let margin = (hi - lo) * 0.05;
        Self {
            min: lo - margin,
            max: hi + margin,
            size_px,
        }
    }

    fn to_px(&self, p: DVec2) -> (i32, i32) {
        let scale = self.size_px as f64 / (self.max - self.min);
        let x = ((p.x - self.min) * scale).round() as i32;
        let y = ((self.max - p.y) * scale).round() as i32;
        (x, y)
    }
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn fill_circle(img: &mut RgbImage, (cx, cy): (i32, i32), radius: i32, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_segment(img: &mut RgbImage, view: &View, a: DVec2, b: DVec2, color: [u8; 3]) {
    let steps = view.size_px.max(2) * 2;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let (x, y) = view.to_px(a.lerp(b, t));
        put(img, x, y, color);
    }
}

/// Position of a point in the 2D preview; 1D kernels are drawn on a horizontal line.
fn plot_pos(p: DVec3, num_dim: usize) -> DVec2 {
    if num_dim == 1 {
        DVec2::new(p.x, 0.5)
    } else {
        DVec2::new(p.x, p.y)
    }
}

fn draw_guides(img: &mut RgbImage, view: &View, spec: &DomainSpec, color: [u8; 3]) {
    if spec.shape().is_round() {
        let steps = 4 * view.size_px.max(16);
        for i in 0..steps {
            let (s, c) = (TAU * i as f64 / steps as f64).sin_cos();
            let (x, y) = view.to_px(DVec2::new(c, s));
            put(img, x, y, color);
        }
        return;
    }

    let extent = if spec.repeat() { 2.0 } else { 1.0 };
    let tiles = if spec.repeat() { 2 } else { 1 };
    if spec.num_dim() == 1 {
        draw_segment(img, view, DVec2::new(0.0, 0.5), DVec2::new(extent, 0.5), color);
        for i in 0..=tiles {
            let x = i as f64;
            draw_segment(img, view, DVec2::new(x, 0.45), DVec2::new(x, 0.55), color);
        }
        return;
    }
    for i in 0..=tiles {
        let v = i as f64;
        draw_segment(img, view, DVec2::new(v, 0.0), DVec2::new(v, extent), color);
        draw_segment(img, view, DVec2::new(0.0, v), DVec2::new(extent, v), color);
    }
}

/// Renders `points` with guides, periodic copies (repeat mode) and rotated
/// copies (`rotation_count > 1`).
pub fn render_kernel(
    points: &PointSet,
    spec: &DomainSpec,
    rotation_count: usize,
    config: &RenderConfig,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.size_px, config.size_px, Rgb(config.background));
    let view = View::for_spec(spec, config.size_px);
    let num_dim = points.num_dim();

    draw_guides(&mut img, &view, spec, config.guide_color);

    if spec.repeat() {
        let copies: Vec<DVec3> = periodic_offsets(num_dim.min(2))
            .into_iter()
            .filter(|o| o.min_element() >= 0.0)
            .collect();
        for &p in points {
            for &o in &copies {
                let pos = plot_pos(p + o, num_dim);
                fill_circle(&mut img, view.to_px(pos), config.point_radius_px, config.copy_color);
            }
        }
    }

    for k in 1..rotation_count {
        let angle = TAU * k as f64 / rotation_count as f64;
        for p in rotate_xy(points.points(), angle) {
            let pos = plot_pos(p, num_dim);
            fill_circle(&mut img, view.to_px(pos), config.point_radius_px, config.copy_color);
        }
    }

    for &p in points {
        let pos = plot_pos(p, num_dim);
        fill_circle(&mut img, view.to_px(pos), config.point_radius_px, config.point_color);
    }

    img
}

/// Renders `points` (see [`render_kernel`]) and writes a PNG to `path`.
pub fn render_kernel_to_png(
    points: &PointSet,
    spec: &DomainSpec,
    rotation_count: usize,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let img = render_kernel(points, spec, rotation_count, config);
    img.save(path.as_ref())?;
    Ok(())
}
