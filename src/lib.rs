//! Warden - hostel administration toolkit
//!
//! An in-memory domain store over five collections (students, rooms,
//! payments, complaints, applications) with the cross-entity rules of a
//! student residence: occupancy tracking, a fee verification workflow,
//! complaint and application lifecycles, and an approval flow that merges
//! profile updates into student records. A policy-aware chat assistant
//! answers questions over the live dataset.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seed;

// Re-exports for convenience
pub use assistant::Assistant;
pub use config::HostelConfig;
pub use domain::entities::{
    Application, ApplicationDraft, Complaint, ComplaintDraft, Payment, PaymentDraft, PaymentPatch,
    Room, Student, StudentDraft, StudentPatch,
};
pub use domain::store::HostelStore;
pub use error::{WardenError, WardenResult};
pub use seed::{seed_rooms, seed_store};
