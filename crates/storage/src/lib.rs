// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jt-storage: The persistence slot for the record set.
//!
//! One named slot holds the whole record set as a JSON array. A missing or
//! malformed payload degrades to the empty set, so the store never fails a
//! read. Writes replace the payload wholesale and go through a temp file
//! plus rename so a crash mid-write cannot corrupt the slot.

pub mod export;
pub mod import;
pub mod slot;
pub mod store;

pub use export::{export_file_name, to_json};
pub use import::{merge, parse, ImportError};
pub use slot::{FileSlot, MemorySlot, Slot};
pub use store::{Store, StoreError};
