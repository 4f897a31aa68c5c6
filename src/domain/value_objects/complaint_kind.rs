//! Complaint category and status value objects

use serde::{Deserialize, Serialize};

/// Top-level complaint category
///
/// The free-text subcategory on the complaint record is constrained by the
/// category at the input surface, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintCategory {
    Maintenance,
    Food,
    Discipline,
    Other,
}

impl ComplaintCategory {
    /// All categories, in display order
    pub const ALL: [ComplaintCategory; 4] = [
        ComplaintCategory::Maintenance,
        ComplaintCategory::Food,
        ComplaintCategory::Discipline,
        ComplaintCategory::Other,
    ];
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintCategory::Maintenance => write!(f, "Maintenance"),
            ComplaintCategory::Food => write!(f, "Food"),
            ComplaintCategory::Discipline => write!(f, "Discipline"),
            ComplaintCategory::Other => write!(f, "Other"),
        }
    }
}

/// Lifecycle state of a complaint: Pending until resolved, never reopened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

impl ComplaintStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, ComplaintStatus::Pending)
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::Pending => write!(f, "Pending"),
            ComplaintStatus::Resolved => write!(f, "Resolved"),
        }
    }
}
