// SPDX-License-Identifier: MIT

//! Per-status board column: filter by status and search query, most
//! recently touched first.

use jt_core::{JobRecord, Status};

/// Records for one board column.
///
/// Keeps records whose status equals `status`; a non-empty `query` further
/// keeps only records where the lowercased query is a substring of company
/// name, job title, source, or resume. Sorted by `updated_at` descending;
/// `sort_by` is stable, so ties keep their original relative order.
pub fn column<'a>(records: &'a [JobRecord], status: Status, query: &str) -> Vec<&'a JobRecord> {
    let query = query.to_lowercase();
    let mut out: Vec<&JobRecord> = records
        .iter()
        .filter(|r| r.status == status)
        .filter(|r| query.is_empty() || matches_query(r, &query))
        .collect();
    out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    out
}

fn matches_query(record: &JobRecord, query: &str) -> bool {
    record.company_name.to_lowercase().contains(query)
        || record.job_title.to_lowercase().contains(query)
        || record.source.to_lowercase().contains(query)
        || record.resume_used.to_lowercase().contains(query)
}

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
