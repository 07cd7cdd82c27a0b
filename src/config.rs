//! Compile-time design parameters, exposed as named knobs (teacher's
//! `operators::params` groups tunables the same way: plain constants and
//! small structs rather than a runtime config file, since this solver has
//! no deployment-time configuration surface of its own).

use crate::types::Minute;

/// Average travel speed assumed for every vehicle, in km/h.
pub const AVG_SPEED_KMH: f64 = 30.0;

/// Fixed service time spent at each stop, in minutes.
pub const SERVICE_MINUTES: Minute = 10;

/// Shared start-of-day clock, minute-of-day (08:00).
pub const START_TIME: Minute = 480;

/// Maximum hours a vehicle may be on the road before its route is infeasible.
pub const MAX_WORKDAY_HOURS: f64 = 8.0;

/// Earth radius used by the haversine distance, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Weight on total route distance (km) in the cost function.
pub const W_DIST: f64 = 1.0;
/// Weight on total route waiting time (hours) in the cost function.
pub const W_WAIT: f64 = 0.5;
/// Weight on the squared load ratio (load_kg / capacity_kg)^2.
pub const W_CAP: f64 = 20.0;
/// Weight on the squared priority of an unassigned order.
pub const W_UNASSIGNED: f64 = 600.0;
/// Lateness penalty weight. Unused: lateness is a hard constraint, so this
/// never enters the cost function today. Preserved as a named knob for a
/// future soft-constraint mode (spec requirement, not dead code to prune).
pub const W_LATE: f64 = 200.0;
/// Overtime penalty weight. Unused for the same reason as `W_LATE`.
pub const W_OT: f64 = 500.0;

/// Parameters driving the simulated-annealing metaheuristic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SaParams {
    pub initial_temp: f64,
    pub cooling_rate: f64,
    pub max_iterations: u32,
}

impl Default for SaParams {
    fn default() -> Self {
        SaParams {
            initial_temp: 1000.0,
            cooling_rate: 0.995,
            max_iterations: 10_000,
        }
    }
}
