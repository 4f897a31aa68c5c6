//! Fee and payment value objects

use serde::{Deserialize, Serialize};

/// Which billing cycle a payment applies to
///
/// Mess fees bill monthly (`YYYY-MM` period keys), hostel fees bill
/// annually (`YYYY` period keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeType {
    Mess,
    Hostel,
}

impl std::fmt::Display for FeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeType::Mess => write!(f, "Mess"),
            FeeType::Hostel => write!(f, "Hostel"),
        }
    }
}

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Online,
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Online => write!(f, "Online"),
            PaymentMethod::Cash => write!(f, "Cash"),
        }
    }
}

/// Verification state of a payment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// Awaiting admin verification (student self-reported)
    #[default]
    Pending,
    /// Settled
    Paid,
    /// Claim rejected by an admin
    Rejected,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Rejected => write!(f, "Rejected"),
        }
    }
}
