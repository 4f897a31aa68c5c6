//! Core domain entities - the five record types the store owns
//!
//! Entities are plain serde structs; each has a `*Draft` input type
//! (everything but the store-assigned fields) and, where partial updates
//! exist, a typed `*Patch`.

mod application;
mod complaint;
mod payment;
mod room;
mod student;

pub use application::{Application, ApplicationDraft};
pub use complaint::{Complaint, ComplaintDraft};
pub use payment::{Payment, PaymentDraft, PaymentPatch};
pub use room::Room;
pub use student::{Student, StudentDraft, StudentPatch};
