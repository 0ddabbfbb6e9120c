//! Hunt Module
//!
//! On-disk artifacts that make up a hunt.
//!
//! ## Layout
//! ```text
//! {link_dir}/logged_hunt-{hunt_id}  ──symlink──┐
//!                                              │
//! {base_dir}/{hunt_id}/                        │
//!   ├── treasures.dat   (records)              │
//!   └── logged_hunt     (audit log)  ◄─────────┘
//! ```
//!
//! The directory's existence is the only marker that a hunt exists.

mod audit;
mod layout;
mod link;

pub use audit::{AuditEntry, AuditLog, TIMESTAMP_FORMAT};
pub use layout::{validate_hunt_id, HuntLayout, LOG_FILE, RECORDS_FILE};
pub use link::LogLink;
