//! Warden CLI - argument surface
//!
//! Usage: warden <COMMAND>
//!
//! Commands:
//!   stats     Occupancy, fee and complaint summaries
//!   students  List students
//!   rooms     List rooms
//!   demo      Run a scripted admin session
//!   ask       Ask the hostel assistant a question

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::value_objects::Building;

/// Warden - hostel administration toolkit
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a hostel profile (defaults to ~/.config/warden/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Building selector for list filters
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildingFilter {
    Boys,
    Girls,
}

impl From<BuildingFilter> for Building {
    fn from(filter: BuildingFilter) -> Self {
        match filter {
            BuildingFilter::Boys => Building::Boys,
            BuildingFilter::Girls => Building::Girls,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Occupancy, fee and complaint summaries
    Stats {
        /// Billing month for the mess-fee summary (YYYY-MM)
        #[arg(long, default_value = "2024-03")]
        month: String,
    },

    /// List students
    Students {
        /// Restrict to one building
        #[arg(long)]
        building: Option<BuildingFilter>,

        /// Only students without a room
        #[arg(long)]
        unallocated: bool,
    },

    /// List rooms
    Rooms {
        /// Restrict to one building
        #[arg(long)]
        building: Option<BuildingFilter>,

        /// Only rooms with free beds
        #[arg(long)]
        vacant: bool,
    },

    /// Run a scripted admin session against a fresh store
    Demo,

    /// Ask the hostel assistant a question
    Ask {
        /// The question to answer from policy and live records
        question: String,
    },
}
