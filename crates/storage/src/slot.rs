// SPDX-License-Identifier: MIT

//! The named key-value slot behind the store.
//!
//! The trait is the seam for tests: production uses [`FileSlot`], tests
//! construct a fresh [`MemorySlot`] per case.

use parking_lot::Mutex;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One named payload: read it, replace it, or drop it.
pub trait Slot {
    /// Returns the payload, or `None` when the slot has never been written
    /// (or has been cleared).
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the payload wholesale.
    fn write(&self, payload: &str) -> io::Result<()>;

    /// Remove the payload. Clearing an absent slot is fine.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed slot. Writes go to a sibling temp file first, then rename
/// over the target, so readers never observe a half-written payload.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory slot for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a payload (e.g. a malformed one).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.payload.lock().clone())
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        *self.payload.lock() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.payload.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
