use poisson_kernel::prelude::*;
use poisson_kernel_examples::{format_points, init_tracing, render_kernel_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Compare a plain disk kernel against one that stays separated under 4 rotations.
    let generator = Generator::configure(2, Shape::Disk, false, false)?;
    let mut rng = StdRng::seed_from_u64(7);

    for (rotations, out_path) in [
        (1, "kernel-disk.png"),
        (4, "kernel-rotated-disk.png"),
    ] {
        let config = SearchConfig::new(12)
            .with_trial_count(16)
            .with_candidates_per_step(128)
            .with_rotation_count(rotations);
        let outcome = generator.search_with_events(&config, &mut rng, &mut ())?;
        tracing::info!(
            "{} rotation(s): separation {:.4} (plain {:.4}).",
            rotations,
            outcome.separation,
            min_pairwise_distance(outcome.points.points())
        );
        print!("{}", format_points(&outcome.points));

        render_kernel_to_png(
            &outcome.points,
            generator.spec(),
            outcome.rotation_count,
            &RenderConfig::new(800).with_background([255, 255, 255]),
            out_path,
        )?;
    }
    Ok(())
}
