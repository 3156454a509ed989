// SPDX-License-Identifier: MIT

//! Load/save of the record set through a [`Slot`].

use crate::slot::Slot;
use jt_core::JobRecord;

/// Failures surfaced by mutating store operations.
///
/// Reads never fail; see [`Store::load`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write record store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The sole owner of the persisted record set.
pub struct Store<S: Slot> {
    slot: S,
}

impl<S: Slot> Store<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Read the persisted set.
    ///
    /// An absent, unreadable, or malformed payload yields the empty set
    /// rather than an error. Problems are logged.
    pub fn load(&self) -> Vec<JobRecord> {
        let payload = match self.slot.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "record store unreadable, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "record store payload malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full set, replacing prior content. Called after every
    /// mutation.
    pub fn save(&self, records: &[JobRecord]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records)?;
        self.slot.write(&payload)?;
        tracing::debug!(count = records.len(), "record store saved");
        Ok(())
    }

    /// Empty the store. Irreversible.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.slot.clear()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
