//! Record Module
//!
//! Fixed-width treasure records and the flat files that hold them.
//!
//! ## Responsibilities
//! - Define the in-memory treasure record
//! - Encode/decode the versionless fixed-width binary layout
//! - Stream complete records out of a records file
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Record 1 (336 bytes, little-endian)                          │
//! │ ┌────────┬───────────────┬───────┬─────────┬─────────┐       │
//! │ │ Id (4) │ Username (50) │Pad (2)│ Lat (8) │ Lon (8) │       │
//! │ └────────┴───────────────┴───────┴─────────┴─────────┘       │
//! │ ┌────────────┬───────────┬───────┐                           │
//! │ │ Clue (256) │ Value (4) │Pad (4)│                           │
//! │ └────────────┴───────────┴───────┘                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Record 2 ...                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no header: a records file is a plain concatenation of records in
//! append order. Text fields are NUL-padded and always keep at least one NUL.

mod codec;
mod file;
mod treasure;

pub use codec::{decode, decode_id, encode, RECORD_SIZE};
pub use file::{append_record, RecordReader};
pub use treasure::{Treasure, TreasureDraft, CLUE_LEN, USERNAME_LEN};
