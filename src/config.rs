//! Configuration for the treasure hunt store
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a HuntStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding one sub-directory per hunt
    /// Internal structure:
    ///   {base_dir}/
    ///     └── {hunt_id}/
    ///           ├── treasures.dat   (fixed-width records)
    ///           └── logged_hunt     (audit log)
    pub base_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Link Configuration
    // -------------------------------------------------------------------------
    /// Directory where `logged_hunt-{hunt_id}` links are created
    pub link_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            link_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Config rooted at `dir` for both hunts and links
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            base_dir: dir.clone(),
            link_dir: dir,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory hunts live in
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_dir = path.into();
        self
    }

    /// Set the directory log links are created in
    pub fn link_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.link_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
