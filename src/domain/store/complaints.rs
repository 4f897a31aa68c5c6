//! Complaint operations: filing and resolution

use crate::domain::entities::{Complaint, ComplaintDraft};
use crate::domain::ports::StoreEvent;
use crate::domain::store::HostelStore;
use crate::domain::value_objects::ComplaintStatus;

impl HostelStore {
    /// File a complaint and return the assigned id
    ///
    /// Status starts Pending, the creation date is stamped from the clock,
    /// and the record is prepended so the collection reads most-recent-first.
    pub fn add_complaint(&mut self, draft: ComplaintDraft) -> u32 {
        let id = self.next_complaint_id;
        self.next_complaint_id += 1;

        let category = draft.category;
        let complaint = Complaint {
            id,
            student_id: draft.student_id,
            category: draft.category,
            subcategory: draft.subcategory,
            description: draft.description,
            status: ComplaintStatus::Pending,
            date: self.today(),
        };
        self.complaints.insert(0, complaint);
        self.emit(StoreEvent::ComplaintFiled { id, category });
        id
    }

    /// Mark a complaint Resolved; no-op on an unknown id, irreversible
    pub fn resolve_complaint(&mut self, id: u32) {
        let Some(complaint) = self.complaints.iter_mut().find(|c| c.id == id) else {
            return;
        };
        complaint.status = ComplaintStatus::Resolved;
        self.emit(StoreEvent::ComplaintResolved { id });
    }
}
