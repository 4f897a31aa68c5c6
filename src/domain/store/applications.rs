//! Application operations: submission and the approval workflow
//!
//! Approving a profile-update application is the one place a decision
//! mutates a second collection: the carried patch merges into the student
//! record atomically with the status change.

use crate::domain::entities::{Application, ApplicationDraft};
use crate::domain::ports::StoreEvent;
use crate::domain::store::HostelStore;
use crate::domain::value_objects::{ApplicationStatus, ApplicationType};

impl HostelStore {
    /// Submit an application and return the assigned id
    ///
    /// Status starts Pending, the date is stamped from the clock, and the
    /// record is prepended (most-recent-first).
    pub fn submit_application(&mut self, draft: ApplicationDraft) -> u32 {
        let id = self.next_application_id;
        self.next_application_id += 1;

        let kind = draft.kind;
        let application = Application {
            id,
            student_id: draft.student_id,
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            data: draft.data,
            proof_url: draft.proof_url,
            status: ApplicationStatus::Pending,
            rejection_reason: None,
            date: self.today(),
        };
        self.applications.insert(0, application);
        self.emit(StoreEvent::ApplicationSubmitted { id, kind });
        id
    }

    /// Decide an application; no-op on an unknown id
    ///
    /// Approving a profile update merges its patch into the referenced
    /// student (skipped silently if the student no longer exists).
    /// Rejecting stores the reason; any other decision clears it.
    pub fn update_application_status(
        &mut self,
        id: u32,
        status: ApplicationStatus,
        reason: Option<&str>,
    ) {
        let Some(index) = self.applications.iter().position(|a| a.id == id) else {
            return;
        };

        let mut profile_updated = false;
        if status == ApplicationStatus::Approved
            && self.applications[index].kind == ApplicationType::ProfileUpdate
        {
            if let Some(patch) = self.applications[index].data.clone() {
                let student_id = self.applications[index].student_id;
                if let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) {
                    patch.apply(student);
                    profile_updated = true;
                }
            }
        }

        let application = &mut self.applications[index];
        application.status = status;
        application.rejection_reason = if status == ApplicationStatus::Rejected {
            reason.map(String::from)
        } else {
            None
        };

        self.emit(StoreEvent::ApplicationDecided {
            id,
            status,
            profile_updated,
        });
    }
}
