//! Statistical checks of the sampler against the theoretical marginal of the
//! `exp(−x·y)` target, obtained by numerical integration.
//!
//! 1. `test_marginal_means_converge`: sample means of x and y match the marginal mean.
//! 2. `test_marginals_pass_ks`: thinned x and y traces pass a one-sample KS test.
//! 3. `test_ks_rejects_wrong_bound`: the same KS test rejects a mismatched marginal.

use trunc_gibbs::config::InitPolicy;
use trunc_gibbs::distributions::ExpProduct;
use trunc_gibbs::gibbs::GibbsSampler;
use trunc_gibbs::ks_test::one_sample_ks_test;
use trunc_gibbs::Trace;

const ITERATIONS: usize = 50_000;
const BOUND: f64 = 5.0;
const SEED: u64 = 42;
/// Keeps every `STRIDE`-th row so the KS samples are close to independent.
const STRIDE: usize = 25;

fn long_run(init: InitPolicy) -> Trace {
    GibbsSampler::new(BOUND, init)
        .expect("Expected a valid sampler")
        .set_seed(SEED)
        .run(ITERATIONS)
        .expect("Expected the run to complete")
}

fn every_nth(values: impl Iterator<Item = f64>, stride: usize) -> Vec<f64> {
    values.skip(1).step_by(stride).collect()
}

#[test]
fn test_marginal_means_converge() {
    let target = ExpProduct::new(BOUND).unwrap();
    let expected = target.marginal_mean();
    // Independent check of the closed form: γ + ln 25 ≈ 3.79609, 4.8 / Z ≈ 1.26446.
    assert!((expected - 1.264_46).abs() < 1e-4, "Unexpected mean {expected}");

    for init in [InitPolicy::Midpoint, InitPolicy::UniformRandom] {
        let trace = long_run(init);
        let mean_x = trace.xs().mean().unwrap();
        let mean_y = trace.ys().mean().unwrap();
        println!("{init:?}: mean x = {mean_x}, mean y = {mean_y}, expected {expected}");

        assert!(
            (mean_x - expected).abs() < 0.05,
            "Empirical mean of x {} deviates too much from theoretical {}",
            mean_x,
            expected
        );
        assert!(
            (mean_y - expected).abs() < 0.05,
            "Empirical mean of y {} deviates too much from theoretical {}",
            mean_y,
            expected
        );
    }
}

#[test]
fn test_marginals_pass_ks() {
    let target = ExpProduct::new(BOUND).unwrap();
    let trace = long_run(InitPolicy::Midpoint);

    for (name, column) in [("x", trace.xs()), ("y", trace.ys())] {
        let mut sample = every_nth(column.iter().copied(), STRIDE);
        let result = one_sample_ks_test(&mut sample, |t| target.marginal_cdf(t), 0.001)
            .expect("Expected KS test to succeed");
        println!("{name}: {result:?}");
        assert!(
            !result.is_rejected,
            "KS test rejected the {name} marginal: {result:?}"
        );
    }
}

#[test]
fn test_ks_rejects_wrong_bound() {
    let wrong = ExpProduct::new(2.0).unwrap();
    let trace = long_run(InitPolicy::Midpoint);

    let mut sample = every_nth(trace.xs().iter().copied(), STRIDE);
    let result = one_sample_ks_test(&mut sample, |t| wrong.marginal_cdf(t), 0.001)
        .expect("Expected KS test to succeed");
    assert!(result.is_rejected, "Expected rejection: {result:?}");
}
