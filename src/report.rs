//! Human-readable renderings of store results
//!
//! The store returns plain data; these types decide how it reads on a
//! terminal.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::hunt::TIMESTAMP_FORMAT;
use crate::record::Treasure;

const RULE: &str = "-------------------------------------------";

/// Filesystem metadata of a records file
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsFileInfo {
    /// Size in bytes, straight from metadata
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl RecordsFileInfo {
    pub fn new(size: u64, modified: SystemTime) -> Self {
        Self {
            size,
            modified: DateTime::<Local>::from(modified),
        }
    }
}

/// Result of listing a hunt
#[derive(Debug, Clone, PartialEq)]
pub struct HuntListing {
    pub hunt_id: String,
    /// `None` when the hunt has no records file yet
    pub file: Option<RecordsFileInfo>,
    pub treasures: Vec<Treasure>,
}

impl fmt::Display for HuntListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(info) = &self.file else {
            return writeln!(f, "No treasures found in hunt {}", self.hunt_id);
        };

        writeln!(f, "Hunt: {}", self.hunt_id)?;
        writeln!(f, "File Size: {} bytes", info.size)?;
        writeln!(f, "Last Modified: {}", info.modified.format(TIMESTAMP_FORMAT))?;
        writeln!(f)?;
        writeln!(f, "Treasures:")?;
        writeln!(f, "{}", RULE)?;

        for treasure in &self.treasures {
            writeln!(
                f,
                "ID: {}, User: {}, Value: {}",
                treasure.id, treasure.username, treasure.value
            )?;
        }

        if self.treasures.is_empty() {
            writeln!(f, "No treasures found")
        } else {
            writeln!(f, "{}", RULE)?;
            writeln!(f, "Total treasures: {}", self.treasures.len())
        }
    }
}

/// Full detail block for one treasure
///
/// Coordinates use the shortest representation that round-trips, so no
/// precision is lost on display.
#[derive(Debug)]
pub struct TreasureDetails<'a>(pub &'a Treasure);

impl fmt::Display for TreasureDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        writeln!(f, "Treasure Details:")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "ID: {}", t.id)?;
        writeln!(f, "User: {}", t.username)?;
        writeln!(f, "Location: {}, {}", t.latitude, t.longitude)?;
        writeln!(f, "Clue: {}", t.clue)?;
        writeln!(f, "Value: {}", t.value)?;
        writeln!(f, "{}", RULE)
    }
}
