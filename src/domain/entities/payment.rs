//! Payment entity
//!
//! A fee record for one `(student, fee type, billing period)` tuple. The
//! store keeps at most one record per tuple: recording against an existing
//! tuple patches the record in place instead of inserting a duplicate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FeeType, PaymentMethod, PaymentStatus};

/// A mess or hostel fee payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Store-assigned id, unique among payments, immutable
    pub id: u32,
    pub student_id: u32,
    /// Amount in rupees
    pub amount: u32,
    pub fee_type: FeeType,
    /// Billing period key: `YYYY-MM` for Mess, `YYYY` for Hostel
    pub month: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Gateway reference for online payments; unique across the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl Payment {
    /// True when this record covers the given billing tuple
    pub fn covers(&self, student_id: u32, fee_type: FeeType, month: &str) -> bool {
        self.student_id == student_id && self.fee_type == fee_type && self.month == month
    }

    /// A student-submitted claim waiting for an admin decision
    pub fn awaiting_verification(&self) -> bool {
        self.status.is_pending() && (self.transaction_id.is_some() || self.proof_url.is_some())
    }
}

/// Input for recording a payment (everything but the store-assigned id)
///
/// Callers choose the initial status: `Paid` for admin-entered
/// confirmations, `Pending` for student self-reported claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub student_id: u32,
    pub amount: u32,
    pub fee_type: FeeType,
    pub month: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub proof_url: Option<String>,
}

impl PaymentDraft {
    /// The patch this draft applies when its billing tuple already exists
    pub fn as_patch(&self) -> PaymentPatch {
        PaymentPatch {
            amount: Some(self.amount),
            status: Some(self.status),
            payment_method: self.payment_method,
            date: self.date,
            transaction_id: self.transaction_id.clone(),
            payer_name: self.payer_name.clone(),
            proof_url: self.proof_url.clone(),
            rejection_reason: None,
        }
    }
}

/// Partial update to a payment record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl PaymentPatch {
    /// Field-by-field overwrite; absent fields leave the record untouched
    pub fn apply(&self, payment: &mut Payment) {
        if let Some(amount) = self.amount {
            payment.amount = amount;
        }
        if let Some(status) = self.status {
            payment.status = status;
        }
        if let Some(method) = self.payment_method {
            payment.payment_method = Some(method);
        }
        if let Some(date) = self.date {
            payment.date = Some(date);
        }
        if let Some(transaction_id) = &self.transaction_id {
            payment.transaction_id = Some(transaction_id.clone());
        }
        if let Some(payer_name) = &self.payer_name {
            payment.payer_name = Some(payer_name.clone());
        }
        if let Some(proof_url) = &self.proof_url {
            payment.proof_url = Some(proof_url.clone());
        }
        if let Some(reason) = &self.rejection_reason {
            payment.rejection_reason = Some(reason.clone());
        }
    }
}
