use poisson_kernel::prelude::*;
use poisson_kernel_examples::{format_points, init_tracing, render_kernel_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 16 taps that tile seamlessly, first tap pinned to the origin.
    let generator = Generator::configure(2, Shape::Box, true, true)?;
    let config = SearchConfig::new(16)
        .with_trial_count(8)
        .with_candidates_per_step(256);

    let mut rng = StdRng::seed_from_u64(42);
    let mut sink = FnSink::new(|event| {
        if let SearchEvent::TrialFinished {
            index,
            score,
            improved: true,
            ..
        } = event
        {
            tracing::info!("Trial {} improved separation to {:.4}.", index, score);
        }
    });
    let outcome = generator.search_with_events(&config, &mut rng, &mut sink)?;

    // Row-major 4x4 tiles keep neighbouring taps adjacent in memory.
    let points = reorder(&outcome.points, 4);
    print!("{}", format_points(&points));

    render_kernel_to_png(
        &points,
        generator.spec(),
        outcome.rotation_count,
        &RenderConfig::new(800),
        "kernel-tileable-square.png",
    )?;
    Ok(())
}
