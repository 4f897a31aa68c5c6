//! Hostel profile configuration
//!
//! A TOML file describing the institution, its buildings, the fee
//! schedule, and the assistant settings. Every table has built-in defaults
//! mirroring the reference campus, so a missing file means a fully working
//! demo profile:
//!
//! ```toml
//! [institution]
//! name = "Government College of Engineering, Nagpur"
//!
//! [[building]]
//! building = "Boys Hostel"
//! floors = 6
//! rooms = 92
//!
//! [fees]
//! mess_monthly = 2500
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Building;
use crate::error::{WardenError, WardenResult};

/// Default institution policy text fed to the assistant prompt
const DEFAULT_POLICY: &str = "\
Hostel Structure:
- Boys' Hostel: G+6 Floors, Capacity 184.
- Girls' Hostel: G+3 Floors, Capacity 98.
- Occupancy: Double occupancy (2 students per room).

Rules & Regulations:
- Silence Hours: 9:00 PM to 6:00 AM daily.
- Curfew (In-Time):
  - Boys: 10:30 PM (Biometric at 10:00 PM).
  - Girls: 7:30 PM (Biometric at 7:30 PM).
- Visitors: 8:00 AM - 8:00 PM (Designated areas only, no room entry).
- Prohibited: Electrical appliances (heaters, irons), pets, ragging (Zero Tolerance).

Governance (HAC):
- Chairperson: Principal
- Members: Rector, Wardens, Student Council (21 members).";

/// Top-level hostel profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelConfig {
    #[serde(default)]
    pub institution: InstitutionConfig,

    #[serde(default = "default_buildings", rename = "building")]
    pub buildings: Vec<BuildingConfig>,

    #[serde(default)]
    pub fees: FeeConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Institution identity and house rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionConfig {
    #[serde(default = "default_institution_name")]
    pub name: String,

    #[serde(default = "default_institution_location")]
    pub location: String,

    /// Free-form policy text quoted verbatim in the assistant prompt
    #[serde(default = "default_policy")]
    pub policy: String,
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            name: default_institution_name(),
            location: default_institution_location(),
            policy: default_policy(),
        }
    }
}

/// One building's room-grid shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingConfig {
    pub building: Building,

    /// Floors above ground (G+N)
    pub floors: u32,

    /// Total rooms across all floors
    pub rooms: u32,

    #[serde(default = "default_capacity_per_room")]
    pub capacity_per_room: u32,
}

/// Fee schedule in rupees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    #[serde(default = "default_mess_monthly")]
    pub mess_monthly: u32,

    #[serde(default = "default_hostel_annual")]
    pub hostel_annual: u32,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            mess_monthly: default_mess_monthly(),
            hostel_annual: default_hostel_annual(),
        }
    }
}

/// Assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_assistant_model")]
    pub model: String,

    #[serde(default = "default_assistant_greeting")]
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_assistant_model(),
            greeting: default_assistant_greeting(),
        }
    }
}

fn default_institution_name() -> String {
    "Government College of Engineering, Nagpur".to_string()
}

fn default_institution_location() -> String {
    "New Khapri, Nagpur".to_string()
}

fn default_policy() -> String {
    DEFAULT_POLICY.to_string()
}

fn default_buildings() -> Vec<BuildingConfig> {
    vec![
        BuildingConfig {
            building: Building::Boys,
            floors: 6,
            rooms: 92,
            capacity_per_room: 2,
        },
        BuildingConfig {
            building: Building::Girls,
            floors: 3,
            rooms: 49,
            capacity_per_room: 2,
        },
    ]
}

fn default_capacity_per_room() -> u32 {
    2
}

fn default_mess_monthly() -> u32 {
    2500
}

fn default_hostel_annual() -> u32 {
    12000
}

fn default_assistant_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_assistant_greeting() -> String {
    "Hello! I am the hostel assistant. Ask me about rules, curfew timings, room availability, or fees.".to_string()
}

impl Default for HostelConfig {
    fn default() -> Self {
        Self {
            institution: InstitutionConfig::default(),
            buildings: default_buildings(),
            fees: FeeConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

impl HostelConfig {
    /// Load a profile from a TOML file
    ///
    /// A missing file yields the built-in defaults; a present but
    /// malformed file is an error.
    pub fn load(path: &Path) -> WardenResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| WardenError::InvalidConfig {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Default user-level profile path (`~/.config/warden/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("warden").join("config.toml"))
    }
}
