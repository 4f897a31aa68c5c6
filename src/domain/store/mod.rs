//! Hostel domain store
//!
//! Single source of truth for the five collections. Every mutation entry
//! point funnels through here so the cross-entity rules (occupancy counts,
//! payment-tuple dedup, transaction-id uniqueness, profile merges) cannot
//! be bypassed.
//!
//! Operations addressed by id are silent no-ops on an unknown id. The only
//! operation that can fail is payment recording, which refuses a
//! transaction id already held by another record.
//!
//! Single-threaded, synchronous mutation model: each operation is an
//! atomic, non-yielding transformation of the in-memory collections.

mod applications;
mod complaints;
mod payments;
mod students;

use std::sync::Arc;

use crate::domain::entities::{Application, Complaint, Payment, Room, Student};
use crate::domain::ports::{Clock, NoopEventSink, StoreEventSink, SystemClock};
use crate::domain::value_objects::FeeType;

/// In-memory store over the five entity collections
///
/// Construct one per process or per test; there is no ambient singleton.
/// Students and rooms keep insertion order; complaints and applications
/// are kept most-recent-first.
pub struct HostelStore {
    students: Vec<Student>,
    rooms: Vec<Room>,
    payments: Vec<Payment>,
    complaints: Vec<Complaint>,
    applications: Vec<Application>,
    next_student_id: u32,
    next_payment_id: u32,
    next_complaint_id: u32,
    next_application_id: u32,
    clock: Box<dyn Clock>,
    events: Arc<dyn StoreEventSink>,
}

impl HostelStore {
    /// Create an empty store over a seeded room grid
    ///
    /// Rooms are fixed for the life of the store; they are never created
    /// or deleted at runtime.
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            students: Vec::new(),
            rooms,
            payments: Vec::new(),
            complaints: Vec::new(),
            applications: Vec::new(),
            next_student_id: 1,
            next_payment_id: 1,
            next_complaint_id: 1,
            next_application_id: 1,
            clock: Box::new(SystemClock),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Create a store over a pre-built dataset (seeded demo data)
    ///
    /// The dataset is trusted: occupancy counts must already match room
    /// assignments. Id counters resume above the dataset's maxima.
    pub fn with_dataset(
        rooms: Vec<Room>,
        students: Vec<Student>,
        payments: Vec<Payment>,
        complaints: Vec<Complaint>,
        applications: Vec<Application>,
    ) -> Self {
        let next_student_id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let next_payment_id = payments.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let next_complaint_id = complaints.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let next_application_id = applications.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            students,
            rooms,
            payments,
            complaints,
            applications,
            next_student_id,
            next_payment_id,
            next_complaint_id,
            next_application_id,
            clock: Box::new(SystemClock),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Builder: replace the clock (tests use `FixedClock`)
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builder: attach an event sink
    pub fn with_events(mut self, events: Arc<dyn StoreEventSink>) -> Self {
        self.events = events;
        self
    }

    // --- Read access ---

    /// Students, in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Rooms, in seed order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Payments, in insertion order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Complaints, most recent first
    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Applications, most recent first
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn student(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn room(&self, room_number: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_number == room_number)
    }

    pub fn payment(&self, id: u32) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    pub fn complaint(&self, id: u32) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id == id)
    }

    pub fn application(&self, id: u32) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    /// The payment covering a billing tuple, if one exists
    pub fn payment_for(&self, student_id: u32, fee_type: FeeType, month: &str) -> Option<&Payment> {
        self.payments
            .iter()
            .find(|p| p.covers(student_id, fee_type, month))
    }

    // --- Shared internals ---

    pub(crate) fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub(crate) fn emit(&self, event: crate::domain::ports::StoreEvent) {
        self.events.on_event(event);
    }

    /// Decrement a room's occupancy, floored at zero
    pub(crate) fn release_room(&mut self, room_number: &str) {
        if let Some(room) = self.rooms.iter_mut().find(|r| r.room_number == room_number) {
            room.occupied = room.occupied.saturating_sub(1);
        }
    }

    /// Increment a room's occupancy; unknown rooms are ignored
    pub(crate) fn occupy_room(&mut self, room_number: &str) {
        if let Some(room) = self.rooms.iter_mut().find(|r| r.room_number == room_number) {
            room.occupied += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Building, RoomType};

    fn two_rooms() -> Vec<Room> {
        vec![
            Room::new("B-G01", Building::Boys, 2, RoomType::NonAc),
            Room::new("G-G01", Building::Girls, 2, RoomType::NonAc),
        ]
    }

    #[test]
    fn new_store_is_empty_except_rooms() {
        let store = HostelStore::new(two_rooms());
        assert!(store.students().is_empty());
        assert!(store.payments().is_empty());
        assert!(store.complaints().is_empty());
        assert!(store.applications().is_empty());
        assert_eq!(store.rooms().len(), 2);
    }

    #[test]
    fn room_lookup_by_number() {
        let store = HostelStore::new(two_rooms());
        assert!(store.room("B-G01").is_some());
        assert!(store.room("B-999").is_none());
    }

    #[test]
    fn release_room_floors_at_zero() {
        let mut store = HostelStore::new(two_rooms());
        store.release_room("B-G01");
        assert_eq!(store.room("B-G01").unwrap().occupied, 0);
    }

    #[test]
    fn with_dataset_resumes_id_counters() {
        let rooms = two_rooms();
        let store = HostelStore::with_dataset(rooms, Vec::new(), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(store.next_student_id, 1);
        assert_eq!(store.next_payment_id, 1);
    }
}
