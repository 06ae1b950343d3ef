use indicatif::ProgressBar;

use crate::error::GibbsError;
use crate::trace::Trace;

pub trait MarkovChain {
    /// Does one iteration of the chain, returning the new current state.
    fn step(&mut self) -> Result<&[f64; 2], GibbsError>;

    /// Get the current state without stepping.
    fn current_state(&self) -> &[f64; 2];
}

/// Runs `n_steps` iterations, recording the current state in row 0 and the state
/// after iteration `i` in row `i`. Stops at the first failing step.
pub fn run_chain<M>(chain: &mut M, n_steps: usize) -> Result<Trace, GibbsError>
where
    M: MarkovChain,
{
    let mut out = Trace::with_initial(n_steps, chain.current_state());

    for i in 1..=n_steps {
        let state = chain.step()?;
        out.record(i, state);
    }

    Ok(out)
}

pub fn run_chain_with_progress<M>(
    chain: &mut M,
    n_steps: usize,
    pb: &ProgressBar,
) -> Result<Trace, GibbsError>
where
    M: MarkovChain,
{
    let mut out = Trace::with_initial(n_steps, chain.current_state());

    pb.set_length(n_steps as u64);

    for i in 1..=n_steps {
        let state = match chain.step() {
            Ok(state) => state,
            Err(e) => {
                pb.abandon_with_message("Failed");
                return Err(e);
            }
        };
        out.record(i, state);

        // Update progress bar
        pb.inc(1);
    }

    Ok(out)
}
