/*!
The Gibbs sampler for `p(x, y) ∝ exp(−x·y)` on `(0, B)²`.

Each iteration redraws `x` from its truncated exponential conditional given the
current `y`, then redraws `y` given the *new* `x`. The chain is strictly sequential.

# Examples

```rust
use trunc_gibbs::config::InitPolicy;
use trunc_gibbs::gibbs::GibbsSampler;

let mut sampler = GibbsSampler::new(5.0, InitPolicy::Midpoint)
    .unwrap()
    .set_seed(42);
let trace = sampler.run(1_000).unwrap();
assert_eq!(trace.nrows(), 1_001);
assert_eq!(trace.initial_state(), [2.5, 2.5]);
```
*/

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{GibbsConfig, InitPolicy};
use crate::core::{run_chain, run_chain_with_progress, MarkovChain};
use crate::distributions::ExpProduct;
use crate::error::{check_positive, Coordinate, GibbsError};
use crate::trace::Trace;
use crate::uniform::{entropy_seed, UniformSource};

/// A single chain: the target, its current state and the uniform source it draws from.
pub struct GibbsMarkovChain<U: UniformSource> {
    /// The distribution that provides conditional samples.
    pub target: ExpProduct,

    /// Current state `[x, y]` of the Markov chain.
    pub current_state: [f64; 2],

    /// Number of iterations performed so far.
    pub iteration: usize,

    /// Uniform variates for the inverse-CDF draws.
    pub source: U,
}

impl<U: UniformSource> GibbsMarkovChain<U> {
    /// Creates a chain and draws its starting point according to `init`.
    pub fn new(target: ExpProduct, init: InitPolicy, mut source: U) -> Result<Self, GibbsError> {
        init.validate(target.bound())?;
        let [x, y] = init.initial_state(target.bound(), &mut source)?;
        let current_state = [
            check_positive(x, 0, Coordinate::X)?,
            check_positive(y, 0, Coordinate::Y)?,
        ];
        Ok(Self {
            target,
            current_state,
            iteration: 0,
            source,
        })
    }
}

impl<U: UniformSource> MarkovChain for GibbsMarkovChain<U> {
    /// Performs one full Gibbs sweep: x given y, then y given the updated x.
    fn step(&mut self) -> Result<&[f64; 2], GibbsError> {
        self.iteration += 1;
        for i in 0..2 {
            let draw =
                self.target
                    .sample(i, &self.current_state, &mut self.source, self.iteration)?;
            self.current_state[i] = draw;
        }
        Ok(&self.current_state)
    }

    fn current_state(&self) -> &[f64; 2] {
        &self.current_state
    }
}

/**
Owns the target, the initialization policy and a seeded generator, and builds a
fresh chain for every run.

Consecutive runs continue the same random stream, so they differ from each other
but are reproducible as a sequence for a fixed seed.
*/
pub struct GibbsSampler {
    pub target: ExpProduct,
    pub init: InitPolicy,

    /// Reserved thinning interval, never applied.
    pub thin: usize,

    /// Random seed for reproducibility.
    pub seed: u64,

    /// RNG shared by all runs of this sampler.
    pub rng: SmallRng,
}

impl GibbsSampler {
    /// Creates a sampler seeded from the operating system.
    pub fn new(bound: f64, init: InitPolicy) -> Result<Self, GibbsError> {
        let target = ExpProduct::new(bound)?;
        init.validate(bound)?;
        let seed = entropy_seed()?;
        Ok(Self {
            target,
            init,
            thin: GibbsConfig::default().thin,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    pub fn from_config(config: &GibbsConfig) -> Result<Self, GibbsError> {
        config.validate()?;
        let sampler = Self::new(config.bound, config.init)?.with_thin(config.thin);
        Ok(match config.seed {
            Some(seed) => sampler.set_seed(seed),
            None => sampler,
        })
    }

    /// Sets a new seed and resets the generator accordingly.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Stores a thinning interval. It does not alter any trace.
    pub fn with_thin(mut self, thin: usize) -> Self {
        if thin != 1 {
            log::debug!("thin = {thin} is reserved and has no effect on the trace");
        }
        self.thin = thin;
        self
    }

    /// Runs `n_steps` iterations and returns the `(n_steps + 1) × 3` trace.
    pub fn run(&mut self, n_steps: usize) -> Result<Trace, GibbsError> {
        self.log_start(n_steps);
        let mut chain = GibbsMarkovChain::new(self.target, self.init, &mut self.rng)?;
        let result = run_chain(&mut chain, n_steps);
        log_outcome(&result);
        result
    }

    /// Like [`run`](Self::run), with a progress bar on stderr.
    pub fn run_with_progress(&mut self, n_steps: usize) -> Result<Trace, GibbsError> {
        self.log_start(n_steps);
        let pb = ProgressBar::new(n_steps as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{prefix} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.set_prefix("Gibbs");

        let mut chain = GibbsMarkovChain::new(self.target, self.init, &mut self.rng)?;
        let result = run_chain_with_progress(&mut chain, n_steps, &pb);
        if result.is_ok() {
            pb.finish_with_message("Done!");
        }
        log_outcome(&result);
        result
    }

    /// Runs `n_steps` iterations drawing uniforms from `source` instead of the
    /// sampler's generator.
    pub fn run_with_source<U: UniformSource>(
        &self,
        n_steps: usize,
        source: U,
    ) -> Result<Trace, GibbsError> {
        self.log_start(n_steps);
        let mut chain = GibbsMarkovChain::new(self.target, self.init, source)?;
        let result = run_chain(&mut chain, n_steps);
        log_outcome(&result);
        result
    }

    fn log_start(&self, n_steps: usize) {
        log::debug!(
            "starting Gibbs run: n_steps={}, bound={}, init={:?}, seed={}",
            n_steps,
            self.target.bound(),
            self.init,
            self.seed
        );
    }
}

fn log_outcome(result: &Result<Trace, GibbsError>) {
    match result {
        Ok(trace) => log::debug!(
            "Gibbs run finished: {} rows, final state {:?}",
            trace.nrows(),
            trace.final_state()
        ),
        Err(e) => log::warn!("Gibbs run aborted: {e}"),
    }
}

/// Runs the sampler described by `config`.
pub fn sample(config: &GibbsConfig) -> Result<Trace, GibbsError> {
    let mut sampler = GibbsSampler::from_config(config)?;
    if config.progress {
        sampler.run_with_progress(config.n_iterations)
    } else {
        sampler.run(config.n_iterations)
    }
}

/**
Draws `n` iterations with bound `bound`, starting at the midpoint `(B/2, B/2)` and
seeding from the operating system.

`thin` is accepted for interface compatibility and ignored: the trace always has
`n + 1` rows. A negative `n` or `thin`, or a bound that is not finite and positive,
is a domain error.

# Examples

```rust
let trace = trunc_gibbs::gibbs(100, 1_000, 5.0).unwrap();
assert_eq!(trace.nrows(), 101);
assert!(trunc_gibbs::gibbs(-1, 1, 5.0).unwrap_err().is_domain());
```
*/
pub fn gibbs(n: i64, thin: i64, bound: f64) -> Result<Trace, GibbsError> {
    let n_iterations = usize::try_from(n)
        .map_err(|_| GibbsError::domain("n", n, "must be a non-negative integer"))?;
    let thin = usize::try_from(thin)
        .map_err(|_| GibbsError::domain("thin", thin, "must be a non-negative integer"))?;
    let config = GibbsConfig::default()
        .with_iterations(n_iterations)
        .with_thin(thin)
        .with_bound(bound);
    sample(&config)
}
