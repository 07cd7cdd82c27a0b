//! Cost function: per-route cost, per-unassigned-order penalty, and the
//! global scalar the greedy constructor and annealer both minimize.

use crate::config::{W_CAP, W_DIST, W_UNASSIGNED, W_WAIT};
use crate::evaluate::evaluate;
use crate::model::Problem;
use crate::solution::Solution;
use crate::types::{Cost, OrderId, VehicleId};

/// Cost of a single route: `+infinity` if infeasible, otherwise a weighted
/// combination of distance, waiting time and squared load ratio. Used both
/// by the greedy constructor (cheapest-insertion) and by the annealer for
/// fast local-delta rejection.
pub fn route_cost(problem: &Problem, vehicle: VehicleId, route: &[OrderId]) -> Cost {
    let metrics = evaluate(problem, vehicle, route);
    if !metrics.feasible {
        return Cost::INFINITY;
    }

    let veh = problem.vehicle(vehicle);
    let load_ratio = metrics.load_kg / veh.capacity_kg;

    W_DIST * metrics.distance_km + W_WAIT * (metrics.wait_minutes / 60.0) + W_CAP * load_ratio.powi(2)
}

/// Penalty for leaving `order` unassigned: priority squared, so
/// higher-priority unassigned orders dominate.
pub fn unassigned_cost(problem: &Problem, order: OrderId) -> Cost {
    let priority = problem.order(order).priority as Cost;
    W_UNASSIGNED * priority.powi(2)
}

/// `C(solution) = sum of C_route + sum of C_unassigned`. `+infinity` if any
/// route is infeasible.
pub fn global_cost(problem: &Problem, solution: &Solution) -> Cost {
    let mut total = 0.0;

    for vehicle in problem.vehicle_ids() {
        let c = route_cost(problem, vehicle, solution.route(vehicle));
        if c.is_infinite() {
            return Cost::INFINITY;
        }
        total += c;
    }

    for unassigned in solution.unassigned() {
        total += unassigned_cost(problem, unassigned.order);
    }

    total
}
