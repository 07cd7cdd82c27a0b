//! Optional per-iteration instrumentation hook for the annealer. Where the
//! teacher's `search::progress::SearchProgress` accumulates its own history
//! struct (iteration counts, a candidate-frequency map) across the run,
//! this crate instead hands the caller a plain closure: the core stays
//! agnostic to how, or whether, iterations get recorded, and nothing is
//! serialized to disk from in here (the teacher's arrow/parquet dump is an
//! ambient-stack swap noted in DESIGN.md, not something this hook
//! reintroduces).

use crate::types::Cost;

/// Called once per SA iteration with `(iteration, temperature,
/// candidate_cost, current_cost, best_cost)`. `candidate_cost` is
/// `Cost::INFINITY` when the sampled move was discarded before a candidate
/// ever reached the Metropolis draw (infeasible placement, or a no-op move
/// with nothing to apply).
pub trait ProgressHook {
    fn on_iteration(
        &mut self,
        iteration: usize,
        temperature: f64,
        candidate_cost: Cost,
        current_cost: Cost,
        best_cost: Cost,
    );
}

impl<F> ProgressHook for F
where
    F: FnMut(usize, f64, Cost, Cost, Cost),
{
    fn on_iteration(
        &mut self,
        iteration: usize,
        temperature: f64,
        candidate_cost: Cost,
        current_cost: Cost,
        best_cost: Cost,
    ) {
        self(iteration, temperature, candidate_cost, current_cost, best_cost)
    }
}

/// A hook that does nothing, used by [`crate::search::anneal`] so callers
/// who don't care about per-iteration instrumentation pay nothing for it.
pub(crate) fn noop() -> impl ProgressHook {
    |_: usize, _: f64, _: Cost, _: Cost, _: Cost| {}
}
