mod route;
mod solution;

pub use route::Route;
pub use solution::{Solution, UnassignedOrder};
