//! Hunt Store
//!
//! Coordinates hunt directories, record files and audit logs.
//!
//! ## Responsibilities
//! - Create, check and destroy hunts
//! - Append, scan, look up and delete treasure records
//! - Audit every successful operation in the hunt's log
//! - Keep the log link in step with the hunt's lifecycle
//!
//! ## Record file lifecycle
//! ```text
//! {absent} ──add──► {N records} ──add──► {N+1 records}
//!                        │
//!                        └──remove(found)──► copy all but the match to a
//!                                            temp file, rename over original
//! ```
//!
//! Every invocation is short-lived and nothing is locked: concurrent
//! processes can allocate the same id or lose an append that lands during
//! a remove.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};

use tracing::{debug, error, warn};

use crate::config::Config;
use crate::error::{HuntError, Result};
use crate::hunt::{validate_hunt_id, AuditLog, HuntLayout, LogLink};
use crate::record::{append_record, decode_id, RecordReader, Treasure, TreasureDraft};
use crate::report::{HuntListing, RecordsFileInfo};

/// Prefix of the scratch file used while rewriting a records file
const TEMP_PREFIX: &str = "temp_treasures";

/// Persistence and audit operations over hunts
#[derive(Debug, Clone, Default)]
pub struct HuntStore {
    config: Config,
}

impl HuntStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the paths of a hunt
    pub fn layout(&self, hunt_id: &str) -> HuntLayout {
        HuntLayout::new(&self.config, hunt_id)
    }

    fn checked_layout(&self, hunt_id: &str) -> Result<HuntLayout> {
        validate_hunt_id(hunt_id)?;
        Ok(self.layout(hunt_id))
    }

    /// Require an existing hunt and return its layout
    fn existing_hunt(&self, hunt_id: &str) -> Result<HuntLayout> {
        let layout = self.checked_layout(hunt_id)?;
        if !layout.dir().is_dir() {
            return Err(HuntError::HuntNotFound(hunt_id.to_string()));
        }
        Ok(layout)
    }

    // =========================================================================
    // Hunt Lifecycle
    // =========================================================================

    /// True iff the hunt directory exists
    pub fn hunt_exists(&self, hunt_id: &str) -> bool {
        self.layout(hunt_id).dir().is_dir()
    }

    /// Create the hunt if its directory is missing
    ///
    /// Returns `true` when the hunt was created. An existing directory is
    /// taken as a fully initialized hunt without checking its contents.
    pub fn ensure_hunt_dir(&self, hunt_id: &str) -> Result<bool> {
        let layout = self.checked_layout(hunt_id)?;
        if layout.dir().is_dir() {
            return Ok(false);
        }

        match fs::create_dir(layout.dir()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(source) => {
                return Err(HuntError::HuntDirCreate {
                    path: layout.dir().to_path_buf(),
                    source,
                })
            }
        }

        let log = AuditLog::new(layout.log_path());
        log.create().map_err(|source| HuntError::LogCreate {
            path: log.path().to_path_buf(),
            source,
        })?;

        self.create_symlink(hunt_id);

        debug!(hunt = hunt_id, "created hunt");
        Ok(true)
    }

    /// Point `logged_hunt-{hunt_id}` at the hunt's log
    ///
    /// Failures are logged as warnings and never reach the caller.
    pub fn create_symlink(&self, hunt_id: &str) {
        let link = LogLink::for_hunt(&self.layout(hunt_id));
        match link.refresh() {
            Ok(()) => debug!(link = %link.path().display(), target = %link.target().display(), "log link refreshed"),
            Err(e) => warn!("Failed to create symbolic link {}: {}", link.path().display(), e),
        }
    }

    /// Delete a hunt's records, log, link and finally its directory
    ///
    /// Missing artifacts are fine. Other deletion failures are reported and
    /// the remaining deletions still run. The directory is removed only if
    /// it is empty by then; there is no recursive fallback.
    pub fn remove_hunt(&self, hunt_id: &str) -> Result<()> {
        let layout = self.existing_hunt(hunt_id)?;

        for (what, path) in [
            ("treasure file", layout.records_path()),
            ("log file", layout.log_path()),
        ] {
            match fs::remove_file(&path) {
                Err(e) if e.kind() != ErrorKind::NotFound => {
                    error!("Failed to remove {} {}: {}", what, path.display(), e);
                }
                _ => {}
            }
        }

        let link = LogLink::for_hunt(&layout);
        if let Err(e) = link.remove() {
            error!("Failed to remove symlink {}: {}", link.path().display(), e);
        }

        fs::remove_dir(layout.dir()).map_err(|source| HuntError::HuntDirRemove {
            path: layout.dir().to_path_buf(),
            source,
        })?;

        debug!(hunt = hunt_id, "removed hunt");
        Ok(())
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Id for the next record: complete records on disk plus one
    ///
    /// An unreadable or absent records file counts as empty. Ids freed by a
    /// removal can be handed out again.
    pub fn get_next_id(&self, hunt_id: &str) -> i32 {
        let path = self.layout(hunt_id).records_path();
        let count = match RecordReader::open(&path) {
            Ok(reader) => reader.count_complete(),
            Err(_) => 0,
        };
        i32::try_from(count).map_or(i32::MAX, |n| n.saturating_add(1))
    }

    /// Append a new treasure, creating the hunt if needed
    ///
    /// Safe to call on its own or after `ensure_hunt_dir`; hunt creation is
    /// idempotent.
    ///
    /// The record counts as added only once all of its bytes are written; a
    /// failed write is rolled back to the previous file length.
    pub fn add_treasure(&self, hunt_id: &str, draft: TreasureDraft) -> Result<Treasure> {
        self.ensure_hunt_dir(hunt_id)?;
        let layout = self.layout(hunt_id);
        let path = layout.records_path();

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| HuntError::RecordsOpen { path: path.clone(), source })?;

        let treasure = draft.into_treasure(self.get_next_id(hunt_id));

        let original_len = file.metadata().map(|m| m.len()).ok();
        if let Err(e) = append_record(&mut file, &treasure) {
            if let Some(len) = original_len {
                if let Err(trunc) = file.set_len(len) {
                    warn!("Failed to roll back partial record in {}: {}", path.display(), trunc);
                }
            }
            return Err(HuntError::RecordWrite(e));
        }
        drop(file);

        self.log_operation(
            hunt_id,
            &format!("Added treasure {} by {}", treasure.id, treasure.username),
        );
        debug!(hunt = hunt_id, id = treasure.id, "treasure appended");
        Ok(treasure)
    }

    /// All complete records of a hunt plus records-file metadata
    ///
    /// A missing records file yields an empty listing, not an error.
    pub fn list_treasures(&self, hunt_id: &str) -> Result<HuntListing> {
        let layout = self.existing_hunt(hunt_id)?;
        let path = layout.records_path();

        let mut listing = HuntListing {
            hunt_id: hunt_id.to_string(),
            file: None,
            treasures: Vec::new(),
        };

        match fs::metadata(&path) {
            Ok(meta) => {
                let modified = meta
                    .modified()
                    .map_err(|source| HuntError::RecordsMetadata { path: path.clone(), source })?;
                listing.file = Some(RecordsFileInfo::new(meta.len(), modified));

                match RecordReader::open(&path) {
                    Ok(reader) => {
                        for record in reader {
                            let treasure = record
                                .map_err(|source| HuntError::RecordsRead { path: path.clone(), source })?;
                            listing.treasures.push(treasure);
                        }
                    }
                    Err(e) if e.kind() == ErrorKind::NotFound => listing.file = None,
                    Err(source) => return Err(HuntError::RecordsOpen { path, source }),
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(HuntError::RecordsMetadata { path, source }),
        }

        self.log_operation(hunt_id, "Listed all treasures");
        Ok(listing)
    }

    /// First record carrying `treasure_id`
    pub fn view_treasure(&self, hunt_id: &str, treasure_id: i32) -> Result<Treasure> {
        let layout = self.existing_hunt(hunt_id)?;
        let path = layout.records_path();

        let reader = RecordReader::open(&path)
            .map_err(|source| HuntError::RecordsOpen { path: path.clone(), source })?;

        for record in reader {
            let treasure =
                record.map_err(|source| HuntError::RecordsRead { path: path.clone(), source })?;
            if treasure.id == treasure_id {
                self.log_operation(hunt_id, &format!("Viewed treasure {}", treasure_id));
                return Ok(treasure);
            }
        }

        Err(HuntError::TreasureNotFound {
            hunt: hunt_id.to_string(),
            id: treasure_id,
        })
    }

    /// Drop the first record carrying `treasure_id`
    ///
    /// The survivors are copied byte for byte, in order, to a temp file in the hunt
    /// directory which then replaces the records file by rename. On any
    /// failure, or when nothing matched, the temp file is discarded and the
    /// original stays byte-for-byte as it was.
    pub fn remove_treasure(&self, hunt_id: &str, treasure_id: i32) -> Result<()> {
        let layout = self.existing_hunt(hunt_id)?;
        let path = layout.records_path();

        let mut reader = RecordReader::open(&path)
            .map_err(|source| HuntError::RecordsOpen { path: path.clone(), source })?;
        let permissions = fs::metadata(&path)
            .map_err(|source| HuntError::RecordsMetadata { path: path.clone(), source })?
            .permissions();

        // Removed from disk when dropped unless persisted
        let temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(layout.dir())
            .map_err(HuntError::TempCreate)?;

        let mut found = false;
        {
            let mut writer = BufWriter::new(temp.as_file());
            while let Some(record) = reader.next_raw() {
                let raw =
                    record.map_err(|source| HuntError::RecordsRead { path: path.clone(), source })?;
                if !found && decode_id(raw) == Some(treasure_id) {
                    found = true;
                    continue;
                }
                // Survivors are copied verbatim, padding and all
                writer.write_all(raw).map_err(HuntError::TempWrite)?;
            }
            writer.flush().map_err(HuntError::TempWrite)?;
        }

        if !found {
            return Err(HuntError::TreasureNotFound {
                hunt: hunt_id.to_string(),
                id: treasure_id,
            });
        }

        temp.as_file().set_permissions(permissions).map_err(HuntError::TempWrite)?;
        temp.persist(&path).map_err(|e| HuntError::RecordsReplace {
            path: path.clone(),
            source: e.error,
        })?;

        self.log_operation(hunt_id, &format!("Removed treasure {}", treasure_id));
        debug!(hunt = hunt_id, id = treasure_id, "treasure removed");
        Ok(())
    }

    // =========================================================================
    // Audit Logging
    // =========================================================================

    /// Append a line to the hunt's audit log
    ///
    /// Failures are reported and swallowed; the operation being audited has
    /// already completed.
    pub fn log_operation(&self, hunt_id: &str, operation: &str) {
        let log = AuditLog::new(self.layout(hunt_id).log_path());
        if let Err(e) = log.append(operation) {
            error!("Failed to write to log file {}: {}", log.path().display(), e);
        }
    }

    /// Audit log handle of an existing hunt
    pub fn audit_log(&self, hunt_id: &str) -> Result<AuditLog> {
        let layout = self.existing_hunt(hunt_id)?;
        Ok(AuditLog::new(layout.log_path()))
    }
}
