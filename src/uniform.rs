/*!
Sources of uniform variates on the open interval (0, 1).

Any [`rand::RngCore`] is a [`UniformSource`]: draws go through [`rand_distr::Open01`],
so neither endpoint is ever produced. [`ReplaySource`] serves a fixed list of
values instead, which makes single iterations exactly reproducible by hand.

# Examples

```rust
use rand::rngs::SmallRng;
use rand::SeedableRng;
use trunc_gibbs::uniform::{ReplaySource, UniformSource};

let mut rng = SmallRng::seed_from_u64(42);
let u = rng.next_uniform().unwrap();
assert!(u > 0.0 && u < 1.0);

let mut replay = ReplaySource::new(vec![0.25]);
assert_eq!(replay.next_uniform().unwrap(), 0.25);
assert!(replay.next_uniform().is_err());
```
*/

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use rand_distr::Open01;

use crate::error::GibbsError;

/// A stream of uniform(0, 1) variates.
pub trait UniformSource {
    /// Returns the next variate, strictly inside (0, 1).
    fn next_uniform(&mut self) -> Result<f64, GibbsError>;
}

impl<R: RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> Result<f64, GibbsError> {
        Ok(self.sample(Open01))
    }
}

/// A uniform source that replays a fixed sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Number of values left before the source is exhausted.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> Result<f64, GibbsError> {
        let u = *self.values.get(self.position).ok_or_else(|| {
            GibbsError::Entropy(format!(
                "replay source exhausted after {} draws",
                self.position
            ))
        })?;
        if !(u > 0.0 && u < 1.0) {
            return Err(GibbsError::Entropy(format!(
                "replayed draw {} = {} lies outside (0, 1)",
                self.position, u
            )));
        }
        self.position += 1;
        Ok(u)
    }
}

/// Draws a fresh 64-bit seed from the operating system.
pub fn entropy_seed() -> Result<u64, GibbsError> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| GibbsError::Entropy(format!("could not seed from the OS: {e}")))?;
    let seed = u64::from_le_bytes(bytes);
    log::trace!("drew seed {seed} from the OS");
    Ok(seed)
}
