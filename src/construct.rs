//! Greedy constructive insertion heuristic: a deterministic, feasible-by
//! construction starting point for the annealer.

use crate::cost::route_cost;
use crate::evaluate::evaluate;
use crate::model::Problem;
use crate::solution::Solution;
use crate::types::{Cost, OrderId, VehicleId};

/// Builds an initial solution by inserting orders, highest priority first
/// (ties broken by earliest window open), into whichever (vehicle,
/// position) pair has the smallest marginal cost among all feasible
/// placements. Ties among placements are broken by iteration order: the
/// first vehicle in `problem.vehicles`, the smallest position.
pub fn greedy_construct(problem: &Problem) -> Solution {
    let mut solution = Solution::empty(problem);
    let max_capacity = problem.max_capacity_kg();

    let mut order_ids: Vec<OrderId> = problem.order_ids().collect();
    order_ids.sort_by(|&a, &b| {
        let oa = problem.order(a);
        let ob = problem.order(b);
        ob.priority
            .cmp(&oa.priority)
            .then(oa.window_open.cmp(&ob.window_open))
    });

    for order_id in order_ids {
        let order = problem.order(order_id);

        if order.weight_kg > max_capacity {
            solution.unassign(order_id, "weight exceeds fleet max");
            continue;
        }

        let mut best: Option<(VehicleId, usize, Cost)> = None;
        let mut rejection_reasons: Vec<String> = Vec::new();

        for vehicle in problem.vehicle_ids() {
            let current_route = solution.route(vehicle).to_vec();
            let base_cost = route_cost(problem, vehicle, &current_route);
            let base_cost = if base_cost.is_finite() { base_cost } else { 0.0 };

            for position in 0..=current_route.len() {
                let mut candidate = current_route.clone();
                candidate.insert(position, order_id);

                let new_cost = route_cost(problem, vehicle, &candidate);
                if new_cost.is_finite() {
                    let delta = new_cost - base_cost;
                    let improves = match &best {
                        Some((_, _, best_delta)) => delta < *best_delta,
                        None => true,
                    };
                    if improves {
                        best = Some((vehicle, position, delta));
                    }
                } else {
                    let metrics = evaluate(problem, vehicle, &candidate);
                    let reason = format!("{}: {}", problem.vehicle(vehicle).external_id, metrics.rejection_reason);
                    if !rejection_reasons.contains(&reason) {
                        rejection_reasons.push(reason);
                    }
                }
            }
        }

        match best {
            Some((vehicle, position, _)) => solution.assign(order_id, vehicle, position),
            None => {
                let reason = if rejection_reasons.is_empty() {
                    "no feasible placement in any vehicle".to_string()
                } else {
                    rejection_reasons.join("; ")
                };
                solution.unassign(order_id, reason);
            }
        }
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLon;
    use crate::model::{Order, Vehicle};

    fn vehicle(id: &str, cap: f64) -> Vehicle {
        Vehicle {
            external_id: id.into(),
            capacity_kg: cap,
            origin: LatLon::new(19.4326, -99.1332),
        }
    }

    fn order(id: &str, weight: f64, priority: u8) -> Order {
        Order {
            external_id: id.into(),
            destination: LatLon::new(19.5, -99.1),
            weight_kg: weight,
            window_open: 0,
            window_close: 1439,
            priority,
        }
    }

    // Capacity overflow: only the higher-priority order is assigned.
    #[test]
    fn capacity_overflow_picks_higher_priority_first() {
        let problem = Problem::new(
            vec![vehicle("V1", 100.0)],
            vec![order("O1", 60.0, 5), order("O2", 60.0, 4)],
        )
        .unwrap();

        let solution = greedy_construct(&problem);
        assert_eq!(solution.unassigned().len(), 1);

        let assigned_order = problem
            .order_ids()
            .find(|&o| solution.is_assigned(o))
            .unwrap();
        assert_eq!(problem.order(assigned_order).external_id, "O1");
    }

    #[test]
    fn weight_over_fleet_max_is_unassigned_immediately() {
        let problem = Problem::new(vec![vehicle("V1", 10.0)], vec![order("O1", 50.0, 3)]).unwrap();
        let solution = greedy_construct(&problem);
        assert_eq!(solution.unassigned().len(), 1);
        assert_eq!(solution.unassigned()[0].reason, "weight exceeds fleet max");
    }

    #[test]
    fn every_order_appears_exactly_once() {
        let problem = Problem::new(
            vec![vehicle("V1", 100.0), vehicle("V2", 100.0)],
            vec![order("O1", 10.0, 1), order("O2", 20.0, 5), order("O3", 30.0, 3)],
        )
        .unwrap();
        let solution = greedy_construct(&problem);

        let mut seen = std::collections::HashSet::new();
        for v in problem.vehicle_ids() {
            for &o in solution.route(v) {
                assert!(seen.insert(o), "order placed twice");
            }
        }
        for u in solution.unassigned() {
            assert!(seen.insert(u.order), "order placed twice");
        }
        assert_eq!(seen.len(), problem.orders.len());
    }

    #[test]
    fn deterministic_vehicle_iteration_breaks_ties() {
        let problem = Problem::new(
            vec![vehicle("V1", 100.0), vehicle("V2", 100.0)],
            vec![order("O1", 10.0, 3)],
        )
        .unwrap();
        let solution = greedy_construct(&problem);
        assert_eq!(solution.route(VehicleId::new(0)).len(), 1);
        assert!(solution.route(VehicleId::new(1)).is_empty());
    }
}
