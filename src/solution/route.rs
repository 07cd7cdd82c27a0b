use crate::types::OrderId;

/// One vehicle's ordered sequence of order visits. A thin wrapper over
/// `Vec<OrderId>` — a stop here is a single visit, so there is no sparse
/// slot bookkeeping or pickup/delivery pairing to maintain.
pub type Route = Vec<OrderId>;
