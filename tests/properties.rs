//! Property tests for Warden.
//!
//! Properties use randomized input generation to protect the store's
//! cross-entity invariants: occupancy consistency under arbitrary operation
//! sequences, payment-tuple dedup, and "never panics" on unknown ids.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/occupancy.rs"]
mod occupancy;

#[path = "properties/payments.rs"]
mod payments;
