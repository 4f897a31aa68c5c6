//! Store event port
//!
//! Every successful mutation publishes an event. Sinks give the
//! presentation layer a narration channel (console, NDJSON for machine
//! output) without the store knowing anything about rendering.

use std::sync::Mutex;

use serde::Serialize;

use crate::domain::value_objects::{ApplicationStatus, ApplicationType, ComplaintCategory};

/// Event emitted after a store mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A student was registered
    StudentRegistered { id: u32, name: String },

    /// A student was removed; `released_room` is the room freed, if any
    StudentRemoved {
        id: u32,
        released_room: Option<String>,
    },

    /// A student was bound to a room; `released` is the previously held
    /// room when this was a move rather than a first allocation
    RoomAllocated {
        student_id: u32,
        room_number: String,
        released: Option<String>,
    },

    /// A payment was recorded; `updated` is true when an existing billing
    /// tuple was patched instead of a new record inserted
    PaymentRecorded {
        id: u32,
        student_id: u32,
        updated: bool,
    },

    /// A pending payment claim was verified
    PaymentVerified { id: u32 },

    /// A pending payment claim was rejected
    PaymentRejected { id: u32, reason: String },

    /// A complaint was filed
    ComplaintFiled {
        id: u32,
        category: ComplaintCategory,
    },

    /// A complaint was resolved
    ComplaintResolved { id: u32 },

    /// An application was submitted
    ApplicationSubmitted { id: u32, kind: ApplicationType },

    /// An application was decided; `profile_updated` is true when an
    /// approved profile update merged changes into the student record
    ApplicationDecided {
        id: u32,
        status: ApplicationStatus,
        profile_updated: bool,
    },
}

/// Trait for receiving store events
///
/// Implementations:
/// - console narration in the CLI
/// - NDJSON stream for machine output
/// - `RecordingEventSink` for tests
/// - `NoopEventSink` for silent operation (the default)
pub trait StoreEventSink: Send + Sync {
    fn on_event(&self, event: StoreEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StoreEventSink for NoopEventSink {
    fn on_event(&self, _event: StoreEvent) {}
}

/// Event sink that records everything it sees; for tests
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<StoreEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events received so far
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl StoreEventSink for RecordingEventSink {
    fn on_event(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}
