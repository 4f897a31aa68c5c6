//! Building and room-type value objects
//!
//! Rooms belong to exactly one building; each building houses one gender.

use serde::{Deserialize, Serialize};

use super::Gender;

/// Hostel building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Building {
    #[serde(rename = "Boys Hostel")]
    Boys,
    #[serde(rename = "Girls Hostel")]
    Girls,
}

impl Building {
    /// The gender this building houses
    pub fn houses(&self) -> Gender {
        match self {
            Building::Boys => Gender::Male,
            Building::Girls => Gender::Female,
        }
    }

    /// Check whether a student of the given gender may live here
    pub fn admits(&self, gender: Gender) -> bool {
        self.houses() == gender
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Building::Boys => write!(f, "Boys Hostel"),
            Building::Girls => write!(f, "Girls Hostel"),
        }
    }
}

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoomType {
    #[serde(rename = "AC")]
    Ac,
    #[default]
    #[serde(rename = "Non-AC")]
    NonAc,
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::Ac => write!(f, "AC"),
            RoomType::NonAc => write!(f, "Non-AC"),
        }
    }
}
