//! Allocation policy
//!
//! The store accepts any allocation it is handed; callers that want the
//! house rules enforced run the prospective allocation through this check
//! first. The CLI always does.

use thiserror::Error;

use crate::domain::entities::{Room, Student};
use crate::domain::value_objects::{Building, Gender};

/// Why a prospective allocation is not allowed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationViolation {
    #[error("room {room_number} does not exist")]
    UnknownRoom { room_number: String },

    #[error("room {room_number} is full ({occupied}/{capacity})")]
    RoomFull {
        room_number: String,
        occupied: u32,
        capacity: u32,
    },

    #[error("room {room_number} is in the {building}, which does not house {gender} students")]
    WrongBuilding {
        room_number: String,
        building: Building,
        gender: Gender,
    },
}

/// Validate a prospective allocation against the room grid
///
/// Checks existence, free capacity, and building/gender match, in that
/// order; the first violation wins.
pub fn validate_allocation(
    student: &Student,
    rooms: &[Room],
    room_number: &str,
) -> Result<(), AllocationViolation> {
    let Some(room) = rooms.iter().find(|r| r.room_number == room_number) else {
        return Err(AllocationViolation::UnknownRoom {
            room_number: room_number.to_string(),
        });
    };

    if room.is_full() {
        return Err(AllocationViolation::RoomFull {
            room_number: room.room_number.clone(),
            occupied: room.occupied,
            capacity: room.capacity,
        });
    }

    if !room.building.admits(student.gender) {
        return Err(AllocationViolation::WrongBuilding {
            room_number: room.room_number.clone(),
            building: room.building,
            gender: student.gender,
        });
    }

    Ok(())
}
