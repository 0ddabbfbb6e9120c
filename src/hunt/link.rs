//! Log link
//!
//! The `logged_hunt-{hunt_id}` symlink pointing at a hunt's audit log. It is
//! a convenience only: callers treat every failure here as a warning.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use super::HuntLayout;

/// Lifecycle of one hunt's log link
#[derive(Debug, Clone)]
pub struct LogLink {
    path: PathBuf,
    target: PathBuf,
}

impl LogLink {
    pub fn for_hunt(layout: &HuntLayout) -> Self {
        Self {
            path: layout.link_path(),
            target: layout.link_target(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Create the link, replacing whatever currently sits at its path
    pub fn refresh(&self) -> io::Result<()> {
        self.remove()?;
        make_symlink(&self.target, &self.path)
    }

    /// Remove the link; a missing link is not an error
    pub fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn make_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
