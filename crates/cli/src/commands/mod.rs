// SPDX-License-Identifier: MIT

//! CLI command implementations

pub mod add;
pub mod data;
pub mod delete;
pub mod edit;
pub mod list;
pub mod mv;
pub mod note;
pub mod show;
pub mod stats;

use jt_core::{editor, JobRecord};

/// Standard notice for a lookup miss. A miss is not an error; the record
/// set is simply left unchanged.
pub(crate) fn not_found(id: &str) {
    println!("No record matching '{}'", id);
}

/// Resolve an id or unique prefix, printing the notice on a miss.
pub(crate) fn resolve<'a>(records: &'a [JobRecord], id: &str) -> Option<&'a JobRecord> {
    let found = editor::find(records, id);
    if found.is_none() {
        not_found(id);
    }
    found
}
