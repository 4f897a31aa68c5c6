//! Complaint entity
//!
//! Created Pending, resolved once, never reopened or deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ComplaintCategory, ComplaintStatus};

/// A student complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    /// Store-assigned id, unique among complaints, immutable
    pub id: u32,
    pub student_id: u32,
    pub category: ComplaintCategory,
    /// Free text, constrained by the category at the input surface
    pub subcategory: String,
    pub description: String,
    pub status: ComplaintStatus,
    /// Creation date, immutable
    pub date: NaiveDate,
}

/// Input for filing a complaint; the store assigns id, status and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub student_id: u32,
    pub category: ComplaintCategory,
    pub subcategory: String,
    pub description: String,
}
