use crate::model::Problem;
use crate::solution::route::Route;
use crate::types::{OrderId, VehicleId};

/// An order the solver could not place anywhere, with the reason why.
#[derive(Clone, Debug, PartialEq)]
pub struct UnassignedOrder {
    pub order: OrderId,
    pub reason: String,
}

/// A mapping from vehicle to its route, plus the orders that could not be
/// placed. Routes plus an assignment table, with no pickup/delivery
/// pairing to track since every stop here is a single visit.
#[derive(Clone, Debug)]
pub struct Solution {
    routes: Vec<Route>,
    assignment: Vec<Option<VehicleId>>,
    unassigned: Vec<UnassignedOrder>,
}

impl Solution {
    /// An empty solution: every order unassigned, every route empty.
    pub fn empty(problem: &Problem) -> Self {
        Solution {
            routes: vec![Route::new(); problem.vehicles.len()],
            assignment: vec![None; problem.orders.len()],
            unassigned: Vec::new(),
        }
    }

    pub fn route(&self, vehicle: VehicleId) -> &[OrderId] {
        &self.routes[vehicle.index()]
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn unassigned(&self) -> &[UnassignedOrder] {
        &self.unassigned
    }

    pub fn vehicle_of(&self, order: OrderId) -> Option<VehicleId> {
        self.assignment[order.index()]
    }

    pub fn is_assigned(&self, order: OrderId) -> bool {
        self.assignment[order.index()].is_some()
    }

    /// Places `order` into `vehicle`'s route at `position`, removing it
    /// from wherever it currently sits (another route, or the unassigned
    /// list) first. Panics if `position` is out of bounds for an insert —
    /// callers are expected to have validated a feasible (vehicle,
    /// position) pair already.
    pub fn assign(&mut self, order: OrderId, vehicle: VehicleId, position: usize) {
        self.detach(order);
        self.routes[vehicle.index()].insert(position, order);
        self.assignment[order.index()] = Some(vehicle);
    }

    /// Removes `order` from its route (if any) and records it as
    /// unassigned with `reason`.
    pub fn unassign(&mut self, order: OrderId, reason: impl Into<String>) {
        self.detach(order);
        self.unassigned.push(UnassignedOrder {
            order,
            reason: reason.into(),
        });
    }

    /// Removes `order` from whichever route or unassigned slot currently
    /// holds it, without recording a new placement. Returns its previous
    /// location, if it had one assigned.
    pub fn detach(&mut self, order: OrderId) -> Option<(VehicleId, usize)> {
        self.unassigned.retain(|u| u.order != order);

        if let Some(vehicle) = self.assignment[order.index()].take() {
            let route = &mut self.routes[vehicle.index()];
            if let Some(pos) = route.iter().position(|&o| o == order) {
                route.remove(pos);
                return Some((vehicle, pos));
            }
        }
        None
    }

    /// True when every route is empty (and so every order is unassigned).
    pub fn is_empty(&self) -> bool {
        self.routes.iter().all(|r| r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLon;
    use crate::model::{Order, Vehicle};

    fn toy_problem(n_vehicles: usize, n_orders: usize) -> Problem {
        let vehicles = (0..n_vehicles)
            .map(|i| Vehicle {
                external_id: format!("V{i}"),
                capacity_kg: 1000.0,
                origin: LatLon::new(0.0, 0.0),
            })
            .collect();
        let orders = (0..n_orders)
            .map(|i| Order {
                external_id: format!("O{i}"),
                destination: LatLon::new(1.0, 1.0),
                weight_kg: 10.0,
                window_open: 480,
                window_close: 600,
                priority: 3,
            })
            .collect();
        Problem::new(vehicles, orders).unwrap()
    }

    #[test]
    fn assign_then_reassign_moves_order() {
        let problem = toy_problem(2, 1);
        let mut sol = Solution::empty(&problem);
        let v0 = VehicleId::new(0);
        let v1 = VehicleId::new(1);
        let o0 = OrderId::new(0);

        sol.assign(o0, v0, 0);
        assert_eq!(sol.route(v0), &[o0]);
        assert_eq!(sol.vehicle_of(o0), Some(v0));

        sol.assign(o0, v1, 0);
        assert_eq!(sol.route(v0), &[] as &[OrderId]);
        assert_eq!(sol.route(v1), &[o0]);
    }

    #[test]
    fn unassign_records_reason() {
        let problem = toy_problem(1, 1);
        let mut sol = Solution::empty(&problem);
        let o0 = OrderId::new(0);
        sol.unassign(o0, "weight exceeds fleet max");
        assert_eq!(sol.unassigned().len(), 1);
        assert_eq!(sol.unassigned()[0].reason, "weight exceeds fleet max");
        assert!(!sol.is_assigned(o0));
    }

    #[test]
    fn assign_removes_from_unassigned() {
        let problem = toy_problem(1, 1);
        let mut sol = Solution::empty(&problem);
        let o0 = OrderId::new(0);
        sol.unassign(o0, "temp");
        sol.assign(o0, VehicleId::new(0), 0);
        assert!(sol.unassigned().is_empty());
        assert!(sol.is_assigned(o0));
    }
}
