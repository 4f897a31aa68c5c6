//! Value objects - immutable enum types shared across entities

mod application_kind;
mod building;
mod complaint_kind;
mod fee;
mod gender;

pub use application_kind::{ApplicationStatus, ApplicationType};
pub use building::{Building, RoomType};
pub use complaint_kind::{ComplaintCategory, ComplaintStatus};
pub use fee::{FeeType, PaymentMethod, PaymentStatus};
pub use gender::Gender;
