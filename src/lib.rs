//! CVRPTW solver core: greedy construction followed by simulated-annealing
//! refinement over a fixed fleet and order list. A library with a thin CLI
//! driver (`src/main.rs`) on top, no HTTP surface or file ingestion of its
//! own — callers hand it an already-parsed `Problem` (or JSON via
//! [`input`]) and get back a [`solution::Solution`] or [`report::SolveReport`].

pub mod config;
pub mod construct;
pub mod cost;
pub mod evaluate;
pub mod geo;
pub mod input;
pub mod model;
pub mod report;
pub mod search;
pub mod solution;
pub mod types;

use rand::SeedableRng;
use rand_xoshiro::SplitMix64;

use config::SaParams;
use model::Problem;
use solution::Solution;
use types::Cost;

/// Runs the full pipeline — greedy construction, then annealing — with an
/// unseeded RNG. Convenient for one-off runs where reproducibility doesn't
/// matter.
pub fn solve(problem: &Problem, params: &SaParams) -> (Cost, Solution) {
    let mut rng = rand::rng();
    let initial = construct::greedy_construct(problem);
    search::anneal(problem, initial, params, &mut rng)
}

/// Runs the full pipeline with a seeded RNG, so the same seed and the same
/// problem always produce the same solution.
pub fn solve_seeded(problem: &Problem, params: &SaParams, seed: u64) -> (Cost, Solution) {
    let mut rng = SplitMix64::seed_from_u64(seed);
    let initial = construct::greedy_construct(problem);
    search::anneal(problem, initial, params, &mut rng)
}
