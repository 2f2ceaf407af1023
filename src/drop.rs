//! Staging, publication, and cleanup for the file-drop protocol.
//!
//! A transmission assembles its complete file set in an isolated staging
//! directory, then publishes it by copying everything into the watched final
//! root and writing the sentinel marker last. The staging directory is
//! removed unconditionally afterwards, whether or not the publish succeeded.

use crate::error::DropError;
use crate::naming::EXTENSION_OK;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, warn};

// Millisecond timestamps alone are not unique under back-to-back calls; the
// counter makes staging names collision-resistant while keeping them sortable.
static STAGING_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// An isolated staging directory holding one transmission's file set.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create a fresh staging directory under `root`.
    ///
    /// Returns `None` when the directory cannot be created (already exists,
    /// missing root, permission denied): the drop contract reports this as a
    /// plain failure with nothing written anywhere.
    pub fn create(root: &Path) -> Option<Self> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seq = STAGING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let path = root.join(format!("{millis}-{seq}"));

        match fs::create_dir(&path) {
            Ok(()) => {
                debug!(staging = %path.display(), "staging directory created");
                Some(Self { path })
            }
            Err(e) => {
                error!(
                    staging = %path.display(),
                    error = %e,
                    "could not create staging directory"
                );
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one payload file into the staging directory.
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> Result<(), DropError> {
        fs::write(self.path.join(name), bytes)?;
        Ok(())
    }
}

/// Publish the staged file set into `<final_root>/<destination>`.
///
/// The destination subdirectory is created idempotently (an existing
/// directory is not an error), every staging file is copied byte-for-byte,
/// and only then is the empty sentinel `<destination>.OK` written as a
/// sibling of the subdirectory. The sentinel is the sole completion signal
/// for the downstream agent, so it must never precede a payload file.
pub fn publish(staging: &Path, final_root: &Path, destination: &str) -> Result<(), DropError> {
    let dest_dir = final_root.join(destination);
    if let Err(e) = fs::create_dir(&dest_dir) {
        if e.kind() != io::ErrorKind::AlreadyExists {
            return Err(e.into());
        }
        debug!(destination = %dest_dir.display(), "destination directory already present");
    }

    // A failed listing means the staged set cannot be verified complete and
    // must surface as an error rather than publishing an empty drop.
    for entry in fs::read_dir(staging)? {
        let entry = entry?;
        fs::copy(entry.path(), dest_dir.join(entry.file_name()))?;
    }

    let sentinel = final_root.join(format!("{destination}{EXTENSION_OK}"));
    fs::File::create(&sentinel)?;
    debug!(sentinel = %sentinel.display(), "drop published");

    Ok(())
}

/// Remove the staging directory and everything directly inside it.
///
/// Best effort: missing files are not errors, and any other failure is
/// logged rather than raised so cleanup never masks the publish outcome.
pub fn cleanup(staging: &Path) {
    match fs::read_dir(staging) {
        Ok(entries) => {
            for entry in entries.flatten() {
                if let Err(e) = fs::remove_file(entry.path()) {
                    warn!(file = %entry.path().display(), error = %e, "could not remove staged file");
                }
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(staging = %staging.display(), error = %e, "could not list staging directory");
        }
    }

    if let Err(e) = fs::remove_dir(staging) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(staging = %staging.display(), error = %e, "could not remove staging directory");
        }
    }
}
