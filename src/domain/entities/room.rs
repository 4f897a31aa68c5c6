//! Room entity
//!
//! Rooms are seeded once at startup and never created or deleted at
//! runtime. `occupied` is stored and incrementally maintained by the store
//! rather than recomputed from student records.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Building, RoomType};

/// A hostel room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique key, not reassignable (e.g. "B-G01", "G-305")
    pub room_number: String,
    pub building: Building,
    pub capacity: u32,
    /// Beds currently taken; `0 <= occupied <= capacity` under valid call
    /// sequences (capacity checks are a caller concern)
    pub occupied: u32,
    pub room_type: RoomType,
    pub facilities: Vec<String>,
}

impl Room {
    pub fn new(
        room_number: impl Into<String>,
        building: Building,
        capacity: u32,
        room_type: RoomType,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            building,
            capacity,
            occupied: 0,
            room_type,
            facilities: Vec::new(),
        }
    }

    /// Builder: set the facilities list
    pub fn with_facilities(mut self, facilities: Vec<String>) -> Self {
        self.facilities = facilities;
        self
    }

    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity
    }

    /// Free beds, zero when over-allocated
    pub fn vacancies(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }
}
