use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};

use crate::cli::{
    ClearArgs, CompareArgs, MergeArgs, ProfileCommands, RealityCommands, RequestArgs,
};

/// Command-line interface for the reality lab
///
/// Reality lab keeps generated career plans ("realities") on disk, tracks
/// which reality was forked from which, and compares or merges two of them
/// while surfacing the conflicts between their timelines, statuses, and
/// risks. Plans themselves come from an external generator; `rl request`
/// prints what to send it and `rl reality import` stores what comes back.
#[derive(Parser)]
#[command(version, about, name = "rl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/realitylab/realitylab.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Storage quota in bytes, or "unlimited". Defaults to 5 MiB
    #[arg(long, global = true)]
    pub capacity: Option<Capacity>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the reality lab CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved realities
    #[command(alias = "r")]
    Reality {
        #[command(subcommand)]
        command: RealityCommands,
    },
    /// Compare two saved realities
    #[command(alias = "c")]
    Compare(CompareArgs),
    /// Merge two saved realities, optionally saving the result
    #[command(alias = "m")]
    Merge(MergeArgs),
    /// Manage the career profile
    #[command(alias = "p")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Print the generation request for a prompt as JSON
    Request(RequestArgs),
    /// Show storage usage against the quota
    Storage,
    /// Remove every reality, the profile, and the active pointer
    Clear(ClearArgs),
}

/// Storage quota given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Bytes(usize),
    Unlimited,
}

impl Capacity {
    /// The quota to hand to the lab; `None` disables the check.
    pub fn bytes(self) -> Option<usize> {
        match self {
            Capacity::Bytes(bytes) => Some(bytes),
            Capacity::Unlimited => None,
        }
    }
}

impl FromStr for Capacity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(Capacity::Unlimited);
        }
        s.parse()
            .map(Capacity::Bytes)
            .map_err(|_| format!("Invalid capacity: {s} (expected a byte count or 'unlimited')"))
    }
}
