//! Path resolution for a single hunt

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{HuntError, Result};

/// Records file name inside a hunt directory
pub const RECORDS_FILE: &str = "treasures.dat";

/// Audit log file name inside a hunt directory
pub const LOG_FILE: &str = "logged_hunt";

/// Reject ids that would not name a single directory entry
pub fn validate_hunt_id(hunt_id: &str) -> Result<()> {
    let bad = hunt_id.is_empty()
        || hunt_id == "."
        || hunt_id == ".."
        || hunt_id.contains('\0')
        || hunt_id.chars().any(std::path::is_separator);
    if bad {
        return Err(HuntError::InvalidHuntId(hunt_id.to_string()));
    }
    Ok(())
}

/// Every path belonging to one hunt
#[derive(Debug, Clone)]
pub struct HuntLayout {
    hunt_id: String,
    dir: PathBuf,
    link_dir: PathBuf,
    shared_root: bool,
}

impl HuntLayout {
    pub fn new(config: &Config, hunt_id: &str) -> Self {
        Self {
            hunt_id: hunt_id.to_string(),
            dir: config.base_dir.join(hunt_id),
            link_dir: config.link_dir.clone(),
            shared_root: config.base_dir == config.link_dir,
        }
    }

    pub fn hunt_id(&self) -> &str {
        &self.hunt_id
    }

    /// The hunt directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    /// Where the `logged_hunt-{hunt_id}` link lives
    pub fn link_path(&self) -> PathBuf {
        self.link_dir.join(format!("{}-{}", LOG_FILE, self.hunt_id))
    }

    /// What the link points at
    ///
    /// Relative (`{hunt_id}/logged_hunt`) when links sit next to the hunt
    /// directories, so the pair can be moved together.
    pub fn link_target(&self) -> PathBuf {
        if self.shared_root {
            Path::new(&self.hunt_id).join(LOG_FILE)
        } else {
            self.log_path()
        }
    }
}
