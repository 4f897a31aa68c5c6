//! Student operations: registration, deletion, room allocation

use crate::domain::entities::{Student, StudentDraft};
use crate::domain::ports::StoreEvent;
use crate::domain::store::HostelStore;

impl HostelStore {
    /// Register a student and return the assigned id
    ///
    /// A draft carrying a room number triggers the allocation side effect
    /// immediately. Capacity and building/gender checks are the caller's
    /// concern (see `policies::validate_allocation`); the store accepts
    /// whatever it is handed.
    pub fn add_student(&mut self, draft: StudentDraft) -> u32 {
        let id = self.next_student_id;
        self.next_student_id += 1;

        let requested_room = draft.room_number;
        let student = Student {
            id,
            name: draft.name,
            gender: draft.gender,
            branch: draft.branch,
            year: draft.year,
            blood_group: draft.blood_group,
            caste: draft.caste,
            contact: draft.contact,
            email: draft.email,
            permanent_address: draft.permanent_address,
            temporary_address: draft.temporary_address,
            parent_name: draft.parent_name,
            parent_contact: draft.parent_contact,
            room_number: None,
            admission_date: draft.admission_date,
            profile_photo: draft.profile_photo,
        };
        let name = student.name.clone();
        self.students.push(student);
        self.emit(StoreEvent::StudentRegistered { id, name });

        if let Some(room_number) = requested_room {
            self.allocate_room(id, &room_number);
        }

        id
    }

    /// Remove a student; no-op on an unknown id
    ///
    /// Releases any held room first. Payments, complaints and applications
    /// referencing the student are retained for historical reporting.
    pub fn delete_student(&mut self, id: u32) {
        let Some(index) = self.students.iter().position(|s| s.id == id) else {
            return;
        };

        let released_room = self.students[index].room_number.clone();
        if let Some(room_number) = &released_room {
            self.release_room(room_number);
        }

        self.students.remove(index);
        self.emit(StoreEvent::StudentRemoved { id, released_room });
    }

    /// Bind a student to a room; no-op on an unknown student id
    ///
    /// Any previously held room is released before the new room's count is
    /// incremented, so a move never inflates occupancy. Re-allocating the
    /// room the student already holds changes nothing. The target room's
    /// existence, capacity and building are not checked here.
    pub fn allocate_room(&mut self, student_id: u32, room_number: &str) {
        let Some(index) = self.students.iter().position(|s| s.id == student_id) else {
            return;
        };

        let previous = self.students[index].room_number.clone();
        if previous.as_deref() == Some(room_number) {
            return;
        }

        self.students[index].room_number = Some(room_number.to_string());
        if let Some(prev) = &previous {
            self.release_room(prev);
        }
        self.occupy_room(room_number);

        self.emit(StoreEvent::RoomAllocated {
            student_id,
            room_number: room_number.to_string(),
            released: previous,
        });
    }
}
