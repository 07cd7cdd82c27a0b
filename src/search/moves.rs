//! The four neighborhood moves the annealer samples from. Each move
//! mutates its `Solution` argument in place and returns whether the move
//! was both applicable and left every route it touched feasible — a
//! `false` here means the caller's whole candidate is discarded for this
//! iteration and the annealer moves on without ever computing its cost.

use rand::Rng;

use crate::cost::route_cost;
use crate::model::Problem;
use crate::solution::Solution;
use crate::types::{Cost, OrderId, VehicleId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    InsertUnassigned,
    SwapInter,
    MoveInter,
    SwapIntra,
}

/// The move kinds sampled each iteration, doubling `InsertUnassigned`'s
/// odds when there is something unassigned to insert.
pub fn candidate_moves(has_unassigned: bool) -> Vec<MoveKind> {
    let mut moves = vec![MoveKind::SwapInter, MoveKind::MoveInter, MoveKind::SwapIntra];
    if has_unassigned {
        moves.push(MoveKind::InsertUnassigned);
        moves.push(MoveKind::InsertUnassigned);
    }
    moves
}

fn route_is_feasible(problem: &Problem, solution: &Solution, vehicle: VehicleId) -> bool {
    route_cost(problem, vehicle, solution.route(vehicle)).is_finite()
}

/// Picks a random unassigned order and a random vehicle, then inserts the
/// order at the cheapest feasible position in that vehicle's route. A
/// no-op (returns `false`) if no feasible position exists.
pub fn insert_unassigned(problem: &Problem, solution: &mut Solution, rng: &mut impl Rng) -> bool {
    if solution.unassigned().is_empty() {
        return false;
    }
    let idx = rng.random_range(0..solution.unassigned().len());
    let order = solution.unassigned()[idx].order;

    let vehicle = VehicleId::new(rng.random_range(0..problem.vehicles.len()));
    let route = solution.route(vehicle).to_vec();

    let mut best: Option<(usize, Cost)> = None;
    for position in 0..=route.len() {
        let mut candidate = route.clone();
        candidate.insert(position, order);
        let cost = route_cost(problem, vehicle, &candidate);
        if cost.is_finite() {
            let better = best.map(|(_, best_cost)| cost < best_cost).unwrap_or(true);
            if better {
                best = Some((position, cost));
            }
        }
    }

    match best {
        Some((position, _)) => {
            solution.assign(order, vehicle, position);
            true
        }
        None => false,
    }
}

/// Swaps one order each between two distinct vehicles with non-empty
/// routes. Requires at least two such vehicles.
pub fn swap_inter(problem: &Problem, solution: &mut Solution, rng: &mut impl Rng) -> bool {
    let occupied: Vec<VehicleId> = problem
        .vehicle_ids()
        .filter(|&v| !solution.route(v).is_empty())
        .collect();
    if occupied.len() < 2 {
        return false;
    }

    let i = rng.random_range(0..occupied.len());
    let mut j = rng.random_range(0..occupied.len() - 1);
    if j >= i {
        j += 1;
    }
    let (v1, v2) = (occupied[i], occupied[j]);

    let idx1 = rng.random_range(0..solution.route(v1).len());
    let idx2 = rng.random_range(0..solution.route(v2).len());

    let o1 = solution.route(v1)[idx1];
    let o2 = solution.route(v2)[idx2];

    solution.detach(o1);
    solution.detach(o2);
    solution.assign(o2, v1, idx1);
    solution.assign(o1, v2, idx2);

    route_is_feasible(problem, solution, v1) && route_is_feasible(problem, solution, v2)
}

/// Moves a random order from one vehicle's route to a random position in
/// a different vehicle's route. Requires at least two vehicles and a
/// non-empty source route.
pub fn move_inter(problem: &Problem, solution: &mut Solution, rng: &mut impl Rng) -> bool {
    if problem.vehicles.len() < 2 {
        return false;
    }
    let non_empty: Vec<VehicleId> = problem
        .vehicle_ids()
        .filter(|&v| !solution.route(v).is_empty())
        .collect();
    if non_empty.is_empty() {
        return false;
    }

    let source = non_empty[rng.random_range(0..non_empty.len())];
    let mut dest_idx = rng.random_range(0..problem.vehicles.len() - 1);
    let all: Vec<VehicleId> = problem.vehicle_ids().collect();
    let source_pos = all.iter().position(|&v| v == source).unwrap();
    if dest_idx >= source_pos {
        dest_idx += 1;
    }
    let dest = all[dest_idx];

    let idx = rng.random_range(0..solution.route(source).len());
    let order = solution.route(source)[idx];
    let dest_len = solution.route(dest).len();
    let insert_at = rng.random_range(0..=dest_len);

    solution.assign(order, dest, insert_at);

    route_is_feasible(problem, solution, source) && route_is_feasible(problem, solution, dest)
}

/// Swaps the order of two stops within one vehicle's route. Requires a
/// route of length at least 2.
pub fn swap_intra(problem: &Problem, solution: &mut Solution, rng: &mut impl Rng) -> bool {
    let eligible: Vec<VehicleId> = problem
        .vehicle_ids()
        .filter(|&v| solution.route(v).len() >= 2)
        .collect();
    if eligible.is_empty() {
        return false;
    }

    let vehicle = eligible[rng.random_range(0..eligible.len())];
    let len = solution.route(vehicle).len();
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }

    let oi = solution.route(vehicle)[i];
    let oj = solution.route(vehicle)[j];
    solution.assign(oj, vehicle, i);
    solution.assign(oi, vehicle, j);

    route_is_feasible(problem, solution, vehicle)
}
