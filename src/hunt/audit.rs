//! Audit Log
//!
//! Append-only, newline-delimited history of operations on one hunt.
//! Each line is `[YYYY-MM-DD HH:MM:SS] <text>` in local time.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

/// Timestamp format used for audit lines and file listings
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Handle to a hunt's audit log file
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

/// One parsed audit line
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub timestamp: NaiveDateTime,
    pub text: String,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file if missing, leaving existing content alone
    pub fn create(&self) -> io::Result<()> {
        OpenOptions::new().write(true).create(true).truncate(false).open(&self.path)?;
        Ok(())
    }

    /// Append one timestamped line, creating the file if needed
    ///
    /// The whole line goes out in a single write so concurrent appenders
    /// interleave at line granularity at best; no locking is attempted.
    pub fn append(&self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        let line = format!("[{}] {}\n", Local::now().format(TIMESTAMP_FORMAT), text);
        file.write_all(line.as_bytes())
    }

    /// Read back every well-formed line in append order
    ///
    /// Lines that do not carry a parsable timestamp are skipped.
    pub fn entries(&self) -> io::Result<Vec<AuditEntry>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            if let Some(entry) = parse_line(&line?) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

fn parse_line(line: &str) -> Option<AuditEntry> {
    let rest = line.strip_prefix('[')?;
    let (stamp, text) = rest.split_once("] ")?;
    let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some(AuditEntry {
        timestamp,
        text: text.to_string(),
    })
}
