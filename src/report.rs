//! Turns a solved `Solution` into the JSON-serializable report shape
//! callers receive. Stop times are recomputed by re-simulating each final
//! route rather than threading evaluator-internal state through, so the
//! reported schedule always matches the route order actually returned.

use serde::Serialize;

use crate::evaluate::{evaluate, stop_arrival_times};
use crate::model::Problem;
use crate::solution::Solution;
use crate::types::Minute;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn format_hhmm(minute: Minute) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

#[derive(Clone, Debug, Serialize)]
pub struct Origin {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Stop {
    pub order_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sequence: u32,
    pub estimated_delivery_time: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VehicleReport {
    pub id: String,
    pub origin: Origin,
    pub assigned_order_ids: Vec<String>,
    pub stops: Vec<Stop>,
    pub used_capacity_kg: f64,
    pub max_capacity_kg: f64,
    pub route_distance_km: f64,
    pub route_time_hours: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct UnassignedReport {
    pub id: String,
    pub rejection_reason: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct GeneralMetrics {
    pub total_orders: usize,
    pub assigned_orders: usize,
    pub unassigned_orders: usize,
    pub total_distance_km: f64,
    pub total_time_hours: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SolveReport {
    pub scenario: String,
    pub general_metrics: GeneralMetrics,
    pub vehicles: Vec<VehicleReport>,
    pub unassigned_orders: Vec<UnassignedReport>,
}

/// Builds the output report for `solution`. `scenario` is a caller-supplied
/// label (the original's per-worksheet scenario name); this crate has no
/// spreadsheet ingestion of its own, so it is passed straight through.
pub fn build_report(problem: &Problem, solution: &Solution, scenario: &str) -> SolveReport {
    let mut vehicles = Vec::new();
    let mut total_distance_km = 0.0;
    let mut total_time_hours = 0.0;

    for vehicle_id in problem.vehicle_ids() {
        let route = solution.route(vehicle_id);
        if route.is_empty() {
            continue;
        }
        let vehicle = problem.vehicle(vehicle_id);
        let metrics = evaluate(problem, vehicle_id, route);
        let arrivals = stop_arrival_times(problem, vehicle_id, route);

        let stops: Vec<Stop> = route
            .iter()
            .zip(arrivals.iter())
            .enumerate()
            .map(|(i, (&order_id, &arrival))| {
                let order = problem.order(order_id);
                Stop {
                    order_id: order.external_id.clone(),
                    latitude: order.destination.latitude,
                    longitude: order.destination.longitude,
                    sequence: (i + 1) as u32,
                    estimated_delivery_time: format_hhmm(arrival),
                }
            })
            .collect();

        let assigned_order_ids = route.iter().map(|&o| problem.order(o).external_id.clone()).collect();
        let duration_hours = metrics.wait_minutes / 60.0
            + (metrics.distance_km / crate::config::AVG_SPEED_KMH)
            + (crate::config::SERVICE_MINUTES as f64 * route.len() as f64) / 60.0;

        total_distance_km += metrics.distance_km;
        total_time_hours += duration_hours;

        vehicles.push(VehicleReport {
            id: vehicle.external_id.clone(),
            origin: Origin {
                latitude: vehicle.origin.latitude,
                longitude: vehicle.origin.longitude,
            },
            assigned_order_ids,
            stops,
            used_capacity_kg: metrics.load_kg,
            max_capacity_kg: vehicle.capacity_kg,
            route_distance_km: round2(metrics.distance_km),
            route_time_hours: round2(duration_hours),
        });
    }

    let unassigned_orders: Vec<UnassignedReport> = solution
        .unassigned()
        .iter()
        .map(|u| UnassignedReport {
            id: problem.order(u.order).external_id.clone(),
            rejection_reason: u.reason.clone(),
        })
        .collect();

    let assigned_count = problem.orders.len() - unassigned_orders.len();

    SolveReport {
        scenario: scenario.to_string(),
        general_metrics: GeneralMetrics {
            total_orders: problem.orders.len(),
            assigned_orders: assigned_count,
            unassigned_orders: unassigned_orders.len(),
            total_distance_km: round2(total_distance_km),
            total_time_hours: round2(total_time_hours),
        },
        vehicles,
        unassigned_orders,
    }
}
