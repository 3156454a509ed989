// SPDX-License-Identifier: MIT

//! Merge-import of an externally supplied record dump.
//!
//! Existing records win on id collision; colliding incoming records are
//! silently dropped. Merging the same dump twice is a no-op the second
//! time.

use jt_core::JobRecord;
use std::collections::HashSet;

/// Error shown to the user when an import payload is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Not a JSON array of records.
    #[error("invalid file format")]
    InvalidFormat(#[source] serde_json::Error),
}

/// Parse an import payload.
///
/// Anything that is not a JSON array of records (a JSON object, a bare
/// value, malformed JSON, or array elements missing required fields) is
/// rejected as [`ImportError::InvalidFormat`].
pub fn parse(payload: &str) -> Result<Vec<JobRecord>, ImportError> {
    serde_json::from_str(payload).map_err(ImportError::InvalidFormat)
}

/// Merge `incoming` into `existing`.
///
/// Incoming records whose id is not already present come first, in their
/// original order, followed by all of `existing` unchanged.
pub fn merge(incoming: Vec<JobRecord>, existing: Vec<JobRecord>) -> Vec<JobRecord> {
    let existing_ids: HashSet<String> =
        existing.iter().map(|r| r.id.to_string()).collect();
    let mut merged: Vec<JobRecord> = incoming
        .into_iter()
        .filter(|r| !existing_ids.contains(r.id.as_str()))
        .collect();
    merged.extend(existing);
    merged
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
