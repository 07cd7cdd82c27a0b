//! Route evaluator: simulates a single vehicle's route in time and space
//! and classifies it feasible or not. A single linear pass building up a
//! metrics record, short-circuiting on the first hard-constraint violation.

use crate::config::{AVG_SPEED_KMH, MAX_WORKDAY_HOURS, SERVICE_MINUTES, START_TIME};
use crate::geo::haversine_km;
use crate::model::Problem;
use crate::types::{Minute, OrderId, VehicleId};

/// Derived, non-persistent metrics for one vehicle's route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub wait_minutes: f64,
    pub load_kg: f64,
    pub overtime_hours: f64,
    pub lateness_count: u32,
    pub feasible: bool,
    pub rejection_reason: String,
}

impl RouteMetrics {
    fn infeasible(load_kg: f64, reason: impl Into<String>) -> Self {
        RouteMetrics {
            distance_km: 0.0,
            wait_minutes: 0.0,
            load_kg,
            overtime_hours: 0.0,
            lateness_count: 0,
            feasible: false,
            rejection_reason: reason.into(),
        }
    }
}

/// Simulates `route` (an ordered sequence of orders) for `vehicle` and
/// returns the resulting metrics. Capacity, lateness and workday violations
/// are hard constraints: the function returns as soon as the first one is
/// detected, with whatever partial metrics had accumulated up to that point
/// by design: later stops in an infeasible route are never simulated.
pub fn evaluate(problem: &Problem, vehicle: VehicleId, route: &[OrderId]) -> RouteMetrics {
    let veh = problem.vehicle(vehicle);

    let total_weight: f64 = route.iter().map(|&o| problem.order(o).weight_kg).sum();
    if total_weight > veh.capacity_kg {
        return RouteMetrics::infeasible(total_weight, "capacity exceeded");
    }

    let mut clock = START_TIME as f64;
    let day_start = START_TIME as f64;
    let mut pos = veh.origin;
    let mut distance_km = 0.0;
    let mut wait_minutes = 0.0;

    for &order_id in route {
        let order = problem.order(order_id);

        let d = haversine_km(pos, order.destination);
        distance_km += d;
        clock += (d / AVG_SPEED_KMH) * 60.0;

        let window_open = order.window_open as f64;
        let window_close = order.window_close as f64;

        if clock < window_open {
            wait_minutes += window_open - clock;
            clock = window_open;
        }
        if clock > window_close {
            return RouteMetrics {
                distance_km,
                wait_minutes,
                load_kg: total_weight,
                overtime_hours: 0.0,
                lateness_count: 1,
                feasible: false,
                rejection_reason: format!("late arrival at {}", order.external_id),
            };
        }

        clock += SERVICE_MINUTES as f64;
        pos = order.destination;
    }

    let total_hours = (clock - day_start) / 60.0;
    if total_hours > MAX_WORKDAY_HOURS {
        return RouteMetrics {
            distance_km,
            wait_minutes,
            load_kg: total_weight,
            overtime_hours: total_hours - MAX_WORKDAY_HOURS,
            lateness_count: 0,
            feasible: false,
            rejection_reason: "workday exceeded".to_string(),
        };
    }

    RouteMetrics {
        distance_km,
        wait_minutes,
        load_kg: total_weight,
        overtime_hours: 0.0,
        lateness_count: 0,
        feasible: true,
        rejection_reason: String::new(),
    }
}

/// Recomputes each stop's estimated delivery time (`HH:MM`) for a feasible
/// route, for report output. Re-simulates rather than reusing `evaluate`'s
/// internal state so the reported times always reflect the exact route
/// order in the final solution (see SPEC_FULL.md's re-simulation note).
pub fn stop_arrival_times(problem: &Problem, vehicle: VehicleId, route: &[OrderId]) -> Vec<Minute> {
    let veh = problem.vehicle(vehicle);
    let mut clock = START_TIME as f64;
    let mut pos = veh.origin;
    let mut out = Vec::with_capacity(route.len());

    for &order_id in route {
        let order = problem.order(order_id);
        let d = haversine_km(pos, order.destination);
        clock += (d / AVG_SPEED_KMH) * 60.0;
        if clock < order.window_open as f64 {
            clock = order.window_open as f64;
        }
        out.push(clock.round() as Minute);
        clock += SERVICE_MINUTES as f64;
        pos = order.destination;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLon;
    use crate::model::{Order, Vehicle};

    fn problem_with(vehicle_cap: f64, orders: Vec<Order>) -> Problem {
        Problem::new(
            vec![Vehicle {
                external_id: "V1".into(),
                capacity_kg: vehicle_cap,
                origin: LatLon::new(19.4326, -99.1332),
            }],
            orders,
        )
        .unwrap()
    }

    fn order(id: &str, lat: f64, lon: f64, weight: f64, open: u16, close: u16, priority: u8) -> Order {
        Order {
            external_id: id.into(),
            destination: LatLon::new(lat, lon),
            weight_kg: weight,
            window_open: open,
            window_close: close,
            priority,
        }
    }

    #[test]
    fn empty_route_is_trivially_feasible() {
        let problem = problem_with(1000.0, vec![]);
        let metrics = evaluate(&problem, VehicleId::new(0), &[]);
        assert_eq!(
            metrics,
            RouteMetrics {
                distance_km: 0.0,
                wait_minutes: 0.0,
                load_kg: 0.0,
                overtime_hours: 0.0,
                lateness_count: 0,
                feasible: true,
                rejection_reason: String::new(),
            }
        );
    }

    // Single vehicle, single order, well within its window.
    #[test]
    fn single_order_within_window() {
        let o = order("O1", 19.55, -99.10, 50.0, 480, 18 * 60, 3);
        let problem = problem_with(1000.0, vec![o]);
        let metrics = evaluate(&problem, VehicleId::new(0), &[OrderId::new(0)]);
        assert!(metrics.feasible);
        assert!((metrics.distance_km - 13.56).abs() < 0.1);

        let arrivals = stop_arrival_times(&problem, VehicleId::new(0), &[OrderId::new(0)]);
        // 13.56 km / 30 km/h ≈ 27 minutes after 08:00 -> ≈ 08:27 (507 min).
        assert!((arrivals[0] as i32 - 507).abs() <= 1);
    }

    #[test]
    fn capacity_overflow_short_circuits() {
        let o1 = order("O1", 19.5, -99.1, 60.0, 480, 18 * 60, 5);
        let problem = problem_with(50.0, vec![o1]);
        let metrics = evaluate(&problem, VehicleId::new(0), &[OrderId::new(0)]);
        assert!(!metrics.feasible);
        assert_eq!(metrics.rejection_reason, "capacity exceeded");
        assert_eq!(metrics.load_kg, 60.0);
        assert_eq!(metrics.distance_km, 0.0);
    }

    // Time-window violation: far order, tight window.
    #[test]
    fn late_arrival_is_infeasible() {
        let o = order("O1", 21.0, -101.0, 10.0, 480, 510, 3);
        let problem = problem_with(1000.0, vec![o]);
        let metrics = evaluate(&problem, VehicleId::new(0), &[OrderId::new(0)]);
        assert!(!metrics.feasible);
        assert_eq!(metrics.rejection_reason, "late arrival at O1");
    }

    #[test]
    fn workday_overrun_is_infeasible() {
        // Several far-apart orders whose windows are wide enough to pass
        // individually but whose cumulative travel blows the workday cap.
        let orders = vec![
            order("O1", 25.0, -99.0, 10.0, 0, 1439, 3),
            order("O2", 19.4, -99.1, 10.0, 0, 1439, 3),
            order("O3", 25.0, -99.0, 10.0, 0, 1439, 3),
        ];
        let problem = problem_with(1000.0, orders);
        let route = [OrderId::new(0), OrderId::new(1), OrderId::new(2)];
        let metrics = evaluate(&problem, VehicleId::new(0), &route);
        assert!(!metrics.feasible);
        assert_eq!(metrics.rejection_reason, "workday exceeded");
        assert!(metrics.overtime_hours > 0.0);
    }
}
