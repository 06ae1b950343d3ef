//! Run configuration: chain length, bound, starting point and seeding.

use crate::error::GibbsError;
use crate::uniform::UniformSource;

/// How the chain state is initialized before the first iteration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitPolicy {
    /// Start at `x = y = B/2`.
    #[default]
    Midpoint,
    /// Draw `x` then `y` independently from U(0, B). Consumes two uniforms.
    UniformRandom,
    /// Start at the given point, which must lie in (0, B)².
    Fixed { x: f64, y: f64 },
}

impl InitPolicy {
    /// Rejects fixed starting points outside the open square (0, B)².
    pub fn validate(&self, bound: f64) -> Result<(), GibbsError> {
        if let InitPolicy::Fixed { x, y } = *self {
            for (name, v) in [("initial x", x), ("initial y", y)] {
                if !(v > 0.0 && v < bound) {
                    return Err(GibbsError::domain(
                        name,
                        v,
                        "must lie strictly between 0 and the bound",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Produces the starting state `[x₀, y₀]`.
    pub fn initial_state<U: UniformSource + ?Sized>(
        &self,
        bound: f64,
        source: &mut U,
    ) -> Result<[f64; 2], GibbsError> {
        match *self {
            InitPolicy::Midpoint => Ok([bound / 2.0, bound / 2.0]),
            InitPolicy::UniformRandom => {
                let x = bound * source.next_uniform()?;
                let y = bound * source.next_uniform()?;
                Ok([x, y])
            }
            InitPolicy::Fixed { x, y } => Ok([x, y]),
        }
    }
}

/**
Parameters of a sampler run.

`thin` is accepted for compatibility with callers that pass a thinning interval. It
is stored but never changes the size or the values of the trace.

# Examples

```rust
use trunc_gibbs::config::{GibbsConfig, InitPolicy};

let config = GibbsConfig::default()
    .with_iterations(1_000)
    .with_bound(2.0)
    .with_init(InitPolicy::UniformRandom)
    .set_seed(42);
assert!(config.validate().is_ok());
assert_eq!(config.thin, 1_000);
```
*/
#[derive(Debug, Clone, PartialEq)]
pub struct GibbsConfig {
    /// Number of iterations N; the trace has N + 1 rows.
    pub n_iterations: usize,

    /// Reserved thinning interval. Has no effect.
    pub thin: usize,

    /// Truncation bound B shared by both conditionals.
    pub bound: f64,

    pub init: InitPolicy,

    /// Seed for the generator. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Show a progress bar while sampling.
    pub progress: bool,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        Self {
            n_iterations: 50_000,
            thin: 1_000,
            bound: 5.0,
            init: InitPolicy::Midpoint,
            seed: None,
            progress: false,
        }
    }
}

impl GibbsConfig {
    pub fn with_iterations(mut self, n_iterations: usize) -> Self {
        self.n_iterations = n_iterations;
        self
    }

    pub fn with_bound(mut self, bound: f64) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_thin(mut self, thin: usize) -> Self {
        self.thin = thin;
        self
    }

    pub fn with_init(mut self, init: InitPolicy) -> Self {
        self.init = init;
        self
    }

    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Checks the static parameters. Runs call this before drawing anything.
    pub fn validate(&self) -> Result<(), GibbsError> {
        if !(self.bound.is_finite() && self.bound > 0.0) {
            return Err(GibbsError::domain(
                "bound",
                self.bound,
                "must be finite and strictly positive",
            ));
        }
        self.init.validate(self.bound)
    }
}
