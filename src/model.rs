//! The read-only problem instance: vehicles and orders, loaded once and
//! shared by every candidate solution for the rest of the solve.

use std::collections::HashMap;

use crate::geo::LatLon;
use crate::types::{Minute, OrderId, VehicleId};

#[derive(Clone, Debug)]
pub struct Vehicle {
    pub external_id: String,
    pub capacity_kg: f64,
    pub origin: LatLon,
}

#[derive(Clone, Debug)]
pub struct Order {
    pub external_id: String,
    pub destination: LatLon,
    pub weight_kg: f64,
    pub window_open: Minute,
    pub window_close: Minute,
    pub priority: u8,
}

/// Raised when the caller's input violates the contract the core assumes
/// has already been validated by the ingestion layer (spec §7: a
/// programming-error/caller-misuse condition, not a domain outcome). The
/// core fails fast here instead of producing undefined behavior deeper in
/// the solver.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadError {
    NonPositiveCapacity { vehicle_id: String },
    NonPositiveWeight { order_id: String },
    InvalidLatitude { order_id: String, latitude: f64 },
    InvalidLongitude { order_id: String, longitude: f64 },
    InvertedWindow { order_id: String, window_open: Minute, window_close: Minute },
    InvalidPriority { order_id: String, priority: u8 },
    NoVehicles,
    DuplicateVehicleId { vehicle_id: String },
    DuplicateOrderId { order_id: String },
}

/// Bidirectional lookup between a caller's opaque string id and the dense
/// internal handle assigned to it at load time. Built once in
/// `Problem::new` by inserting each id as it's visited, which doubles as
/// the duplicate-id check (a single linear pass over a hash map, not a
/// nested scan). The reverse direction — internal handle back to external
/// id — doesn't need its own table: it's just `Problem::vehicle`/`order`,
/// which already carry `external_id`.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    vehicles_by_external_id: HashMap<String, VehicleId>,
    orders_by_external_id: HashMap<String, OrderId>,
}

impl Registry {
    pub fn vehicle_id(&self, external_id: &str) -> Option<VehicleId> {
        self.vehicles_by_external_id.get(external_id).copied()
    }

    pub fn order_id(&self, external_id: &str) -> Option<OrderId> {
        self.orders_by_external_id.get(external_id).copied()
    }
}

pub struct Problem {
    pub vehicles: Vec<Vehicle>,
    pub orders: Vec<Order>,
    pub registry: Registry,
}

impl Problem {
    pub fn new(vehicles: Vec<Vehicle>, orders: Vec<Order>) -> Result<Self, LoadError> {
        if vehicles.is_empty() {
            return Err(LoadError::NoVehicles);
        }

        for v in &vehicles {
            if v.capacity_kg <= 0.0 {
                return Err(LoadError::NonPositiveCapacity {
                    vehicle_id: v.external_id.clone(),
                });
            }
        }

        let mut vehicles_by_external_id = HashMap::with_capacity(vehicles.len());
        for (i, v) in vehicles.iter().enumerate() {
            if vehicles_by_external_id
                .insert(v.external_id.clone(), VehicleId::new(i))
                .is_some()
            {
                return Err(LoadError::DuplicateVehicleId {
                    vehicle_id: v.external_id.clone(),
                });
            }
        }

        for o in &orders {
            if o.weight_kg <= 0.0 {
                return Err(LoadError::NonPositiveWeight {
                    order_id: o.external_id.clone(),
                });
            }
            if !(-90.0..=90.0).contains(&o.destination.latitude) {
                return Err(LoadError::InvalidLatitude {
                    order_id: o.external_id.clone(),
                    latitude: o.destination.latitude,
                });
            }
            if !(-180.0..=180.0).contains(&o.destination.longitude) {
                return Err(LoadError::InvalidLongitude {
                    order_id: o.external_id.clone(),
                    longitude: o.destination.longitude,
                });
            }
            if o.window_open > o.window_close {
                return Err(LoadError::InvertedWindow {
                    order_id: o.external_id.clone(),
                    window_open: o.window_open,
                    window_close: o.window_close,
                });
            }
            if o.priority < 1 || o.priority > 5 {
                return Err(LoadError::InvalidPriority {
                    order_id: o.external_id.clone(),
                    priority: o.priority,
                });
            }
        }

        let mut orders_by_external_id = HashMap::with_capacity(orders.len());
        for (i, o) in orders.iter().enumerate() {
            if orders_by_external_id
                .insert(o.external_id.clone(), OrderId::new(i))
                .is_some()
            {
                return Err(LoadError::DuplicateOrderId {
                    order_id: o.external_id.clone(),
                });
            }
        }

        Ok(Problem {
            vehicles,
            orders,
            registry: Registry {
                vehicles_by_external_id,
                orders_by_external_id,
            },
        })
    }

    #[inline(always)]
    pub fn vehicle(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id.index()]
    }

    #[inline(always)]
    pub fn order(&self, id: OrderId) -> &Order {
        &self.orders[id.index()]
    }

    pub fn vehicle_ids(&self) -> impl Iterator<Item = VehicleId> {
        (0..self.vehicles.len()).map(VehicleId::new)
    }

    pub fn order_ids(&self) -> impl Iterator<Item = OrderId> {
        (0..self.orders.len()).map(OrderId::new)
    }

    pub fn max_capacity_kg(&self) -> f64 {
        self.vehicles
            .iter()
            .map(|v| v.capacity_kg)
            .fold(f64::MIN, f64::max)
    }

    /// Looks up a vehicle by the caller-facing id, via the registry.
    pub fn vehicle_by_external_id(&self, external_id: &str) -> Option<&Vehicle> {
        self.registry.vehicle_id(external_id).map(|id| self.vehicle(id))
    }

    /// Looks up an order by the caller-facing id, via the registry.
    pub fn order_by_external_id(&self, external_id: &str) -> Option<&Order> {
        self.registry.order_id(external_id).map(|id| self.order(id))
    }
}
