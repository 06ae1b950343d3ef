/*!
The laws the sampler is built from: the truncated exponential conditional and the
bivariate target

```text
p(x, y) ∝ exp(−x·y)   on (0, B) × (0, B)
```

whose full conditionals are truncated exponentials on (0, B): x | y has rate y and
y | x has rate x. The target is symmetric in x and y, so both coordinates share the
marginal density

```text
f(t) = (1 − exp(−B·t)) / (t · Z)   on (0, B),
```

where `Z` is computed numerically by [`ExpProduct::normalizer`].

# Examples

```rust
use trunc_gibbs::distributions::{ExpProduct, TruncatedExponential};

let law = TruncatedExponential::new(2.0, 5.0).unwrap();
let x = law.inverse_cdf(0.5);
assert!(x > 0.0 && x < 5.0);
assert!((law.cdf(x) - 0.5).abs() < 1e-12);

let target = ExpProduct::new(5.0).unwrap();
println!("E[x] = {}", target.marginal_mean());
```
*/

use crate::error::{check_positive, Coordinate, GibbsError};
use crate::uniform::UniformSource;

/// Number of Simpson panels used for marginal integrals. Must be even.
const SIMPSON_INTERVALS: usize = 2_000;

/**
An exponential law with the given `rate`, truncated to the interval (0, `upper`).

Its CDF is

```text
F(x) = (1 − exp(−rate·x)) / (1 − exp(−rate·upper)),
```

and [`inverse_cdf`](Self::inverse_cdf) maps a uniform(0, 1) variate to a draw from it.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedExponential {
    rate: f64,
    upper: f64,
}

impl TruncatedExponential {
    /// Creates the law, rejecting rates and bounds that are not finite and positive.
    pub fn new(rate: f64, upper: f64) -> Result<Self, GibbsError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(GibbsError::domain(
                "rate",
                rate,
                "must be finite and strictly positive",
            ));
        }
        if !(upper.is_finite() && upper > 0.0) {
            return Err(GibbsError::domain(
                "upper",
                upper,
                "must be finite and strictly positive",
            ));
        }
        Ok(Self { rate, upper })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Probability mass the untruncated exponential puts on (0, upper).
    fn mass(&self) -> f64 {
        -(-self.rate * self.upper).exp_m1()
    }

    /// Quantile function: `−ln(1 − u·mass) / rate`.
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        -(-u * self.mass()).ln_1p() / self.rate
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= self.upper {
            1.0
        } else {
            -(-self.rate * x).exp_m1() / self.mass()
        }
    }

    /// `1/rate − upper / (exp(rate·upper) − 1)`.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate - self.upper / (self.rate * self.upper).exp_m1()
    }
}

/**
The bivariate target `p(x, y) ∝ exp(−x·y)` on `(0, B)²`.

The state is laid out as `[x, y]`; coordinate `i` is redrawn from its truncated
exponential conditional given coordinate `1 − i`.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpProduct {
    bound: f64,
}

impl ExpProduct {
    pub fn new(bound: f64) -> Result<Self, GibbsError> {
        if !(bound.is_finite() && bound > 0.0) {
            return Err(GibbsError::domain(
                "bound",
                bound,
                "must be finite and strictly positive",
            ));
        }
        Ok(Self { bound })
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Log of the unnormalized joint density; `−∞` outside the support.
    pub fn unnorm_log_prob(&self, state: &[f64; 2]) -> f64 {
        let [x, y] = *state;
        if x > 0.0 && x < self.bound && y > 0.0 && y < self.bound {
            -x * y
        } else {
            f64::NEG_INFINITY
        }
    }

    /// The conditional law of one coordinate given the other.
    ///
    /// `given` must already be known to be finite and positive.
    pub fn conditional(&self, given: f64) -> TruncatedExponential {
        TruncatedExponential {
            rate: given,
            upper: self.bound,
        }
    }

    /// Draws coordinate `i` of `state` from its conditional given the other coordinate.
    ///
    /// Both the conditioning value and the draw are checked; a non-positive or
    /// non-finite value is reported as a numeric error at `iteration`.
    pub fn sample<U: UniformSource + ?Sized>(
        &self,
        i: usize,
        state: &[f64; 2],
        source: &mut U,
        iteration: usize,
    ) -> Result<f64, GibbsError> {
        let other = 1 - i;
        let rate = check_positive(state[other], iteration, Coordinate::from_index(other))?;
        let u = source.next_uniform()?;
        let draw = self.conditional(rate).inverse_cdf(u);
        check_positive(draw, iteration, Coordinate::from_index(i))
    }

    /// Unnormalized marginal density `(1 − exp(−B·t)) / t`, continuous at 0.
    fn marginal_kernel(&self, t: f64) -> f64 {
        if t == 0.0 {
            self.bound
        } else {
            -(-self.bound * t).exp_m1() / t
        }
    }

    /// Normalizing constant `Z = ∫₀ᴮ (1 − exp(−B·t)) / t dt`.
    pub fn normalizer(&self) -> f64 {
        simpson(|t| self.marginal_kernel(t), 0.0, self.bound, SIMPSON_INTERVALS)
    }

    /// Density of either coordinate's marginal.
    pub fn marginal_density(&self, t: f64) -> f64 {
        if t <= 0.0 || t >= self.bound {
            return 0.0;
        }
        self.marginal_kernel(t) / self.normalizer()
    }

    /// CDF of either coordinate's marginal.
    pub fn marginal_cdf(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= self.bound {
            return 1.0;
        }
        simpson(|s| self.marginal_kernel(s), 0.0, t, SIMPSON_INTERVALS) / self.normalizer()
    }

    /// Mean of either coordinate's marginal, `(B − (1 − exp(−B²)) / B) / Z`.
    pub fn marginal_mean(&self) -> f64 {
        let b = self.bound;
        (b + (-b * b).exp_m1() / b) / self.normalizer()
    }
}

/// Composite Simpson rule over `[a, b]` with `n` (even) subintervals.
fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> f64 {
    let h = (b - a) / n as f64;
    let inner: f64 = (1..n)
        .map(|k| {
            let w = if k % 2 == 1 { 4.0 } else { 2.0 };
            w * f(a + k as f64 * h)
        })
        .sum();
    (f(a) + inner + f(b)) * h / 3.0
}
