// SPDX-License-Identifier: MIT

//! Collection-level editing of the record set.
//!
//! The record set is a plain `Vec<JobRecord>`, newest creation first. All
//! lookups accept either a full id or a unique prefix (like git hashes).
//! Not-found is a silent no-op reported through the return value; nothing
//! in here is fatal.

use crate::clock::Clock;
use crate::record::{JobRecord, RecordDraft, RecordPatch, ValidationError};

/// Create a record from a draft and prepend it to the set.
///
/// Returns the id of the new record. Validation failures leave the set
/// untouched.
pub fn create(
    records: &mut Vec<JobRecord>,
    draft: RecordDraft,
    clock: &impl Clock,
) -> Result<crate::record::RecordId, ValidationError> {
    let record = JobRecord::new(draft, clock)?;
    let id = record.id.clone();
    records.insert(0, record);
    Ok(id)
}

/// Merge a patch into the record matching `id`, refreshing `updated_at`.
///
/// Returns false when no record matches; the set is left unchanged.
pub fn update(
    records: &mut [JobRecord],
    id: &str,
    patch: RecordPatch,
    clock: &impl Clock,
) -> bool {
    match find_mut(records, id) {
        Some(record) => {
            record.apply(patch, clock);
            true
        }
        None => false,
    }
}

/// Remove the record matching `id`. Returns false when no record matches.
pub fn delete(records: &mut Vec<JobRecord>, id: &str) -> bool {
    match position(records, id) {
        Some(idx) => {
            records.remove(idx);
            true
        }
        None => false,
    }
}

/// Find a record by id or unique prefix.
pub fn find<'a>(records: &'a [JobRecord], id: &str) -> Option<&'a JobRecord> {
    position(records, id).map(|idx| &records[idx])
}

/// Find a record mutably by id or unique prefix.
pub fn find_mut<'a>(records: &'a mut [JobRecord], id: &str) -> Option<&'a mut JobRecord> {
    position(records, id).map(move |idx| &mut records[idx])
}

/// Resolve an id or unique prefix to an index.
///
/// An exact id always wins; otherwise a prefix must match exactly one
/// record to count (an ambiguous prefix matches nothing).
fn position(records: &[JobRecord], id: &str) -> Option<usize> {
    if id.is_empty() {
        return None;
    }
    if let Some(idx) = records.iter().position(|r| r.id == *id) {
        return Some(idx);
    }
    let mut matches = records.iter().enumerate().filter(|(_, r)| {
        r.id.as_str().starts_with(id) || r.id.suffix().starts_with(id)
    });
    let first = matches.next();
    match (first, matches.next()) {
        (Some((idx, _)), None) => Some(idx),
        _ => None,
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
