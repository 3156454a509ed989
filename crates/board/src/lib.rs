// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jt-board: Derived views over the record set.
//!
//! Everything in here is a pure function of the full record set; there is
//! no cached incremental state. At tens to low hundreds of records a full
//! recompute per call is plenty.

pub mod column;
pub mod stats;

pub use column::column;
pub use stats::Snapshot;
