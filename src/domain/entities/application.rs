//! Application entity
//!
//! Leave, bonafide, profile-update and miscellaneous student requests.
//! Created Pending; decided once. Approving a profile-update application
//! merges its patch into the referenced student as part of the decision.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::StudentPatch;
use crate::domain::value_objects::{ApplicationStatus, ApplicationType};

/// A student application awaiting (or past) an admin decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Store-assigned id, unique among applications, immutable
    pub id: u32,
    pub student_id: u32,
    pub kind: ApplicationType,
    pub title: String,
    pub description: String,
    /// Proposed field changes; present only for profile updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<StudentPatch>,
    /// Attachment reference (e.g. a medical certificate for leave)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub date: NaiveDate,
}

/// Input for submitting an application; the store assigns id, status, date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub student_id: u32,
    pub kind: ApplicationType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub data: Option<StudentPatch>,
    #[serde(default)]
    pub proof_url: Option<String>,
}
