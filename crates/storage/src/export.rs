// SPDX-License-Identifier: MIT

//! Full structured dump of the record set, suitable for re-import.

use chrono::NaiveDate;
use jt_core::JobRecord;

/// Pretty-printed JSON array of all records.
pub fn to_json(records: &[JobRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Default export file name, dated: `job-applications-2026-08-30.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("job-applications-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
