//! Command-line front end: search a kernel, print it as HLSL/C++ arrays and
//! optionally write a PNG preview.
use std::path::PathBuf;
use std::thread;

use anyhow::{anyhow, Result};
use clap::Parser;
use poisson_kernel::prelude::*;
use poisson_kernel_examples::{
    format_points, init_tracing, render_kernel_to_png, Preset, RenderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "poisson-kernel")]
#[command(about = "Generate blue-noise sampling kernels for shaders")]
struct Args {
    /// Domain preset.
    #[arg(long, value_enum, default_value_t = Preset::RepeatedRect)]
    preset: Preset,
    /// Number of points in the kernel.
    #[arg(long, default_value_t = 8)]
    points: usize,
    /// Independent trials; the best-separated one is kept.
    #[arg(long, default_value_t = 4)]
    trials: usize,
    /// Random candidates per placed point.
    #[arg(long, default_value_t = 128)]
    candidates: usize,
    /// Rotations to check against (rotated-disk preset only).
    #[arg(long, default_value_t = 1)]
    rotations: usize,
    /// Cache-locality buckets per axis; 0 keeps placement order.
    #[arg(long, default_value_t = 0)]
    sort_buckets: u32,
    /// Start every trial at a random point instead of the domain origin.
    #[arg(long)]
    first_point_random: bool,
    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Write the array literals to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write a PNG preview to this path.
    #[arg(long)]
    png: Option<PathBuf>,
    /// Side length of the PNG preview in pixels.
    #[arg(long, default_value_t = 800)]
    png_size: u32,
}

impl Args {
    fn first_point_at_origin(&self) -> bool {
        !self.first_point_random
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let generator = args.preset.generator(args.first_point_at_origin())?;
    let rotation_count = args.preset.rotation_count(args.rotations);
    let config = SearchConfig::new(args.points)
        .with_trial_count(args.trials)
        .with_candidates_per_step(args.candidates)
        .with_rotation_count(rotation_count);
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Preset {:?}, seed {}.", args.preset, seed);

    // The search runs on a worker; progress is relayed back to this thread.
    let (tx, rx) = crossbeam_channel::unbounded::<f64>();
    let worker = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut report = |p: f64| {
            let _ = tx.send(p);
        };
        generator.search(&config, &mut rng, Some(&mut report))
    });
    for progress in rx.iter() {
        info!("Progress: {:.0}%", progress * 100.0);
    }
    let points = worker
        .join()
        .map_err(|_| anyhow!("search worker panicked"))??;
    info!("Progress: 100%");

    let points = reorder(&points, args.sort_buckets);
    let text = format_points(&points);
    match &args.out {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!("Wrote {}.", path.display());
        }
        None => print!("{text}"),
    }

    if let Some(path) = &args.png {
        let rc = RenderConfig::new(args.png_size);
        render_kernel_to_png(&points, generator.spec(), rotation_count, &rc, path)?;
        info!("Wrote {}.", path.display());
    }

    Ok(())
}
