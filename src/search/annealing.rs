//! Simulated-annealing metaheuristic: takes a feasible starting solution
//! (normally the greedy construction) and perturbs it with the four
//! neighborhood moves, using Metropolis acceptance and geometric cooling
//! to escape the local optima the greedy pass gets stuck in.
//!
//! Each iteration draws from a single RNG stream in a fixed order — move
//! kind, then vehicle choice, then index selection (all inside the move
//! functions themselves), then the Metropolis acceptance draw last — so a
//! run is fully reproducible from its seed.

use rand::Rng;

use crate::config::SaParams;
use crate::cost::global_cost;
use crate::model::Problem;
use crate::search::moves::{candidate_moves, insert_unassigned, move_inter, swap_inter, swap_intra, MoveKind};
use crate::search::progress::{self, ProgressHook};
use crate::solution::Solution;
use crate::types::Cost;

/// Runs simulated annealing starting from `initial` and returns the best
/// `(cost, solution)` pair seen across the run — the initial solution
/// itself, if nothing found during the search ever beat it. Equivalent to
/// [`anneal_with_progress`] with a hook that does nothing.
pub fn anneal(
    problem: &Problem,
    initial: Solution,
    params: &SaParams,
    rng: &mut impl Rng,
) -> (Cost, Solution) {
    anneal_with_progress(problem, initial, params, rng, &mut progress::noop())
}

/// Runs simulated annealing exactly as [`anneal`] does, additionally
/// invoking `hook` once per iteration with `(iteration, temperature,
/// candidate_cost, current_cost, best_cost)` — a plugin point for
/// instrumentation without baking a recording format into the core.
pub fn anneal_with_progress(
    problem: &Problem,
    initial: Solution,
    params: &SaParams,
    rng: &mut impl Rng,
    hook: &mut impl ProgressHook,
) -> (Cost, Solution) {
    let mut current_cost = global_cost(problem, &initial);
    let mut current = initial;

    let mut best_cost = current_cost;
    let mut best = current.clone();

    let mut temperature = params.initial_temp;

    for iteration in 0..params.max_iterations as usize {
        let mut candidate = current.clone();
        let moves = candidate_moves(!candidate.unassigned().is_empty());
        let kind = moves[rng.random_range(0..moves.len())];

        let applied = match kind {
            MoveKind::InsertUnassigned => insert_unassigned(problem, &mut candidate, rng),
            MoveKind::SwapInter => swap_inter(problem, &mut candidate, rng),
            MoveKind::MoveInter => move_inter(problem, &mut candidate, rng),
            MoveKind::SwapIntra => swap_intra(problem, &mut candidate, rng),
        };

        let mut candidate_cost = Cost::INFINITY;

        if applied {
            candidate_cost = global_cost(problem, &candidate);
            let delta = candidate_cost - current_cost;
            let accept = delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp();

            if accept {
                current = candidate;
                current_cost = candidate_cost;

                if current_cost < best_cost {
                    best_cost = current_cost;
                    best = current.clone();
                }
            }
        }

        hook.on_iteration(iteration, temperature, candidate_cost, current_cost, best_cost);

        temperature *= params.cooling_rate;
    }

    (best_cost, best)
}
