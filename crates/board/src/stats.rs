// SPDX-License-Identifier: MIT

//! Aggregate statistics over the full record set.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use jt_core::{JobRecord, Status};
use serde::Serialize;

/// How many entries the top-sources and recent lists carry.
const TOP_N: usize = 5;

/// Count and share for one status in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub status: Status,
    pub count: usize,
    /// Percentage of total, rounded; 0 when the set is empty.
    pub percent: u32,
}

/// One source with its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// A full statistics snapshot, computed eagerly from the record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub total: usize,
    /// Records that have moved past `saved`.
    pub applied: usize,
    /// Records at `interview` or `offer`.
    pub interviews: usize,
    pub offers: usize,
    /// Records created strictly within the last 7 days.
    pub this_week: usize,
    /// applied / total, as a rounded percentage (0 when total is 0).
    pub applied_rate: u32,
    /// interviews / applied (0 when applied is 0).
    pub interview_rate: u32,
    /// offers / interviews (0 when interviews is 0).
    pub offer_rate: u32,
    /// Count and share per status, in fixed label order.
    pub breakdown: Vec<StatusSlice>,
    /// Up to five sources by record count, descending; ties keep
    /// first-encountered order.
    pub top_sources: Vec<SourceCount>,
    /// Up to five most recently created records, newest first.
    pub recent: Vec<JobRecord>,
}

impl Snapshot {
    pub fn compute(records: &[JobRecord], now: DateTime<Utc>) -> Self {
        let total = records.len();
        let applied = records.iter().filter(|r| r.status != Status::Saved).count();
        let interviews = records
            .iter()
            .filter(|r| matches!(r.status, Status::Interview | Status::Offer))
            .count();
        let offers = records.iter().filter(|r| r.status == Status::Offer).count();
        let week_ago = now - Duration::days(7);
        let this_week = records.iter().filter(|r| r.created_at > week_ago).count();

        let breakdown = Status::ALL
            .iter()
            .map(|&status| {
                let count = records.iter().filter(|r| r.status == status).count();
                StatusSlice {
                    status,
                    count,
                    percent: pct(count, total),
                }
            })
            .collect();

        Self {
            total,
            applied,
            interviews,
            offers,
            this_week,
            applied_rate: pct(applied, total),
            interview_rate: pct(interviews, applied),
            offer_rate: pct(offers, interviews),
            breakdown,
            top_sources: top_sources(records),
            recent: recent(records),
        }
    }
}

/// Rounded percentage; 0 when the denominator is 0 (never NaN, never a
/// division error).
fn pct(num: usize, den: usize) -> u32 {
    if den == 0 {
        return 0;
    }
    ((num as f64 / den as f64) * 100.0).round() as u32
}

/// Group by exact source string (case-sensitive), count descending, top 5.
///
/// The insertion-ordered map plus a stable sort gives ties
/// first-encountered order.
fn top_sources(records: &[JobRecord]) -> Vec<SourceCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.source.as_str()).or_insert(0) += 1;
    }
    let mut all: Vec<SourceCount> = counts
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();
    all.sort_by(|a, b| b.count.cmp(&a.count));
    all.truncate(TOP_N);
    all
}

/// Most recently created records, newest first, top 5.
fn recent(records: &[JobRecord]) -> Vec<JobRecord> {
    let mut all: Vec<JobRecord> = records.to_vec();
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    all.truncate(TOP_N);
    all
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
