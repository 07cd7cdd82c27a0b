mod annealing;
mod moves;
mod progress;

pub use annealing::{anneal, anneal_with_progress};
pub use moves::MoveKind;
pub use progress::ProgressHook;
