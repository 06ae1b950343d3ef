//! A small demo: draws the conventional 50 000-iteration chain with B = 5 and compares
//! the sample means against the theoretical marginal mean.

use std::error::Error;

use trunc_gibbs::config::{GibbsConfig, InitPolicy};
use trunc_gibbs::distributions::ExpProduct;

/// Main entry point: runs the sampler with a progress bar, prints summary
/// numbers and, with the `csv` feature, saves the trace.
fn main() -> Result<(), Box<dyn Error>> {
    const ITERATIONS: usize = 50_000;
    const BOUND: f64 = 5.0;
    const SEED: u64 = 42;

    let config = GibbsConfig::default()
        .with_iterations(ITERATIONS)
        .with_bound(BOUND)
        .with_init(InitPolicy::Midpoint)
        .set_seed(SEED)
        .with_progress(true);

    let trace = trunc_gibbs::sample(&config)?;
    println!("Generated {} rows", trace.nrows());

    let mean_x = trace.xs().mean().ok_or("empty trace")?;
    let mean_y = trace.ys().mean().ok_or("empty trace")?;
    let expected = ExpProduct::new(BOUND)?.marginal_mean();
    println!("Sample means: ({:.4}, {:.4})", mean_x, mean_y);
    println!("Theoretical marginal mean: {:.4}", expected);

    #[cfg(feature = "csv")]
    {
        trunc_gibbs::io::csv::save_trace_csv(&trace, "gibbs_trace.csv")?;
        println!("Saved trace to gibbs_trace.csv");
    }

    Ok(())
}

#[test]
fn test_main() {
    main().expect("Expected main to not return an error.");
}
