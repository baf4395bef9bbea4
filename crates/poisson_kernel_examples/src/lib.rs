#![forbid(unsafe_code)]

pub mod emit;
pub mod presets;
mod rendering;

pub use emit::{format_cpp, format_hlsl, format_points};
pub use presets::Preset;
pub use rendering::{init_tracing, render_kernel, render_kernel_to_png, RenderConfig};
