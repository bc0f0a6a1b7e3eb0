pub mod cuckoo;
pub mod levy;

pub use cuckoo::{CuckooSearch, StepOutcome};
pub use levy::Levy;
