//! # Treasure Hunt
//!
//! Flat-file storage for treasure hunts:
//! - Fixed-width binary records, one file per hunt
//! - Append-only, timestamped audit log per hunt
//! - A `logged_hunt-{hunt_id}` link to each log in the working directory
//! - One operation per process invocation, no locking
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 treasure_manager (CLI)                      │
//! │          --<operation> <hunt_id> [<treasure_id>]            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      HuntStore                              │
//! └──────┬──────────────────────┬─────────────────────┬─────────┘
//!        │                      │                     │
//!        ▼                      ▼                     ▼
//!  ┌───────────┐        ┌──────────────┐      ┌──────────────┐
//!  │  Records  │        │  Audit Log   │      │   Log Link   │
//!  │ (.dat)    │        │  (append)    │      │  (symlink)   │
//!  └───────────┘        └──────────────┘      └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logging;

pub mod record;
pub mod hunt;
pub mod report;
pub mod prompt;
pub mod store;
pub mod command;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{HuntError, Result};
pub use config::Config;
pub use command::Command;
pub use store::HuntStore;
pub use record::{Treasure, TreasureDraft};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
