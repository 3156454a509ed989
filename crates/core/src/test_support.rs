// SPDX-License-Identifier: MIT

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::clock::{Clock, FakeClock};
use crate::record::{JobRecord, RecordDraft};
use crate::status::Status;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core record types.
pub mod strategies {
    use crate::status::Status;
    use proptest::prelude::*;

    pub fn arb_status() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::Saved),
            Just(Status::Applied),
            Just(Status::Screening),
            Just(Status::Interview),
            Just(Status::Offer),
            Just(Status::Rejected),
            Just(Status::Withdrawn),
        ]
    }
}

// ── Record factory functions ────────────────────────────────────────────

/// Build a valid record via the real creation path with a fake clock.
pub fn record(company: &str, title: &str, status: Status) -> JobRecord {
    record_at(company, title, status, &FakeClock::new())
}

/// Build a valid record via the real creation path with the given clock.
#[allow(clippy::unwrap_used)]
pub fn record_at(company: &str, title: &str, status: Status, clock: &impl Clock) -> JobRecord {
    JobRecord::new(
        RecordDraft::new(company, title, "Standard Resume").status(status),
        clock,
    )
    .unwrap()
}

/// Draft with the required fields filled in.
pub fn draft(company: &str, title: &str) -> RecordDraft {
    RecordDraft::new(company, title, "Standard Resume")
}
