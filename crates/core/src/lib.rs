// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jt-core: Record model and editor for the jobtrack (jt) CLI tool

pub mod macros;

pub mod clock;
pub mod editor;
pub mod id;
pub mod record;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::short;
#[cfg(any(test, feature = "test-support"))]
pub use record::JobRecordBuilder;
pub use record::{
    JobRecord, JobUpdate, RecordDraft, RecordId, RecordPatch, UpdateId, ValidationError,
    RESUME_PRESETS, SUGGESTED_SOURCES,
};
pub use status::{Status, UnknownStatus};
