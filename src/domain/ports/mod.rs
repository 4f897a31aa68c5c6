//! Ports - trait seams between the domain and the outside world
//!
//! The store and assistant never touch the clock, the terminal, or the
//! network directly; everything goes through these traits.

mod clock;
mod store_events;
mod text_generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store_events::{NoopEventSink, RecordingEventSink, StoreEvent, StoreEventSink};
pub use text_generator::TextGenerator;
