//! JSON input contract: deserializable mirrors of `Vehicle`/`Order` using
//! caller-facing types (`"HH:MM"` windows, raw floats) converted into the
//! validated `Problem` the solver core operates on.

use serde::Deserialize;

use crate::geo::LatLon;
use crate::model::{LoadError, Order, Problem, Vehicle};
use crate::types::Minute;

#[derive(Clone, Debug, Deserialize)]
pub struct VehicleInput {
    pub id: String,
    pub capacity_kg: f64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderInput {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub weight_kg: f64,
    pub window_open: String,
    pub window_close: String,
    pub priority: u8,
}

/// Raised when a `window_open`/`window_close` string isn't `"HH:MM"`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeParseError {
    pub order_id: String,
    pub value: String,
}

/// Parses `"HH:MM"` into minute-of-day, matching the original's
/// `datetime.strptime(value, "%H:%M")` conversion.
fn parse_hhmm(order_id: &str, value: &str) -> Result<Minute, TimeParseError> {
    let err = || TimeParseError {
        order_id: order_id.to_string(),
        value: value.to_string(),
    };

    let (h, m) = value.split_once(':').ok_or_else(err)?;
    let h: u16 = h.parse().map_err(|_| err())?;
    let m: u16 = m.parse().map_err(|_| err())?;
    if h > 23 || m > 59 {
        return Err(err());
    }
    Ok(h * 60 + m)
}

#[derive(Clone, Debug, PartialEq)]
pub enum IngestError {
    Time(TimeParseError),
    Load(LoadError),
}

/// Converts wire-format input into a validated `Problem`, parsing time
/// windows first (so a malformed `"HH:MM"` is reported before the
/// domain-invariant checks in `Problem::new` run).
pub fn load_problem(vehicles: Vec<VehicleInput>, orders: Vec<OrderInput>) -> Result<Problem, IngestError> {
    let vehicles = vehicles
        .into_iter()
        .map(|v| Vehicle {
            external_id: v.id,
            capacity_kg: v.capacity_kg,
            origin: LatLon::new(v.latitude, v.longitude),
        })
        .collect();

    let mut parsed_orders = Vec::with_capacity(orders.len());
    for o in orders {
        let window_open = parse_hhmm(&o.id, &o.window_open).map_err(IngestError::Time)?;
        let window_close = parse_hhmm(&o.id, &o.window_close).map_err(IngestError::Time)?;
        parsed_orders.push(Order {
            external_id: o.id,
            destination: LatLon::new(o.latitude, o.longitude),
            weight_kg: o.weight_kg,
            window_open,
            window_close,
            priority: o.priority,
        });
    }

    Problem::new(vehicles, parsed_orders).map_err(IngestError::Load)
}
