//! Business rules enforced at the call boundary, not inside the store

mod allocation;

pub use allocation::{validate_allocation, AllocationViolation};
