//! Application type and status value objects

use serde::{Deserialize, Serialize};

/// What a student application asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationType {
    /// Leave of absence (may carry a proof attachment)
    Leave,
    /// Bonafide certificate request
    Bonafide,
    /// Anything else
    Other,
    /// Request to change personal-detail fields, applied on approval
    ProfileUpdate,
}

impl std::fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationType::Leave => write!(f, "Leave"),
            ApplicationType::Bonafide => write!(f, "Bonafide"),
            ApplicationType::Other => write!(f, "Other"),
            ApplicationType::ProfileUpdate => write!(f, "Profile Update"),
        }
    }
}

/// Decision state of an application: Pending until decided, never reopened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn is_decided(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "Pending"),
            ApplicationStatus::Approved => write!(f, "Approved"),
            ApplicationStatus::Rejected => write!(f, "Rejected"),
        }
    }
}
