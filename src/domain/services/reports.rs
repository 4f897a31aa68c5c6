//! Reporting services
//!
//! Pure functions over store state; nothing here mutates. The CLI `stats`
//! command is the only consumer, but the summaries are domain facts, not
//! presentation.

use serde::Serialize;

use crate::domain::entities::{Complaint, Payment, Room};
use crate::domain::value_objects::{Building, ComplaintCategory, FeeType};

/// Occupancy figures for one building
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancySummary {
    pub building: Building,
    pub rooms: usize,
    pub capacity: u32,
    pub occupied: u32,
    pub rooms_full: usize,
    pub beds_free: u32,
}

impl OccupancySummary {
    /// Occupancy as a percentage of capacity, 0 when the building is empty
    pub fn percent(&self) -> u32 {
        if self.capacity == 0 {
            0
        } else {
            self.occupied * 100 / self.capacity
        }
    }
}

/// Per-building occupancy, in a fixed building order
pub fn occupancy_by_building(rooms: &[Room]) -> Vec<OccupancySummary> {
    [Building::Boys, Building::Girls]
        .into_iter()
        .map(|building| {
            let in_building: Vec<&Room> = rooms.iter().filter(|r| r.building == building).collect();
            OccupancySummary {
                building,
                rooms: in_building.len(),
                capacity: in_building.iter().map(|r| r.capacity).sum(),
                occupied: in_building.iter().map(|r| r.occupied).sum(),
                rooms_full: in_building.iter().filter(|r| r.is_full()).count(),
                beds_free: in_building.iter().map(|r| r.vacancies()).sum(),
            }
        })
        .collect()
}

/// Collection figures for one fee type and billing period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSummary {
    pub fee_type: FeeType,
    pub month: String,
    pub paid: usize,
    pub pending: usize,
    pub rejected: usize,
    /// Rupees collected from Paid records
    pub collected: u32,
    /// Pending claims carrying a transaction id or proof, waiting on admin
    pub awaiting_verification: usize,
}

pub fn fee_summary(payments: &[Payment], fee_type: FeeType, month: &str) -> FeeSummary {
    let in_period: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.fee_type == fee_type && p.month == month)
        .collect();
    FeeSummary {
        fee_type,
        month: month.to_string(),
        paid: in_period.iter().filter(|p| p.status.is_paid()).count(),
        pending: in_period.iter().filter(|p| p.status.is_pending()).count(),
        rejected: in_period
            .iter()
            .filter(|p| !p.status.is_paid() && !p.status.is_pending())
            .count(),
        collected: in_period
            .iter()
            .filter(|p| p.status.is_paid())
            .map(|p| p.amount)
            .sum(),
        awaiting_verification: in_period.iter().filter(|p| p.awaiting_verification()).count(),
    }
}

/// Open/resolved and per-category complaint counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintSummary {
    pub open: usize,
    pub resolved: usize,
    /// Counts in `ComplaintCategory::ALL` order
    pub by_category: Vec<(ComplaintCategory, usize)>,
}

pub fn complaint_summary(complaints: &[Complaint]) -> ComplaintSummary {
    ComplaintSummary {
        open: complaints.iter().filter(|c| c.status.is_open()).count(),
        resolved: complaints.iter().filter(|c| !c.status.is_open()).count(),
        by_category: ComplaintCategory::ALL
            .into_iter()
            .map(|category| {
                (
                    category,
                    complaints.iter().filter(|c| c.category == category).count(),
                )
            })
            .collect(),
    }
}
