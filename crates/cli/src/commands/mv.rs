// SPDX-License-Identifier: MIT

//! `jt move` - Move a record to another column
//!
//! Any status can move to any other status; the pipeline order is for
//! display, not enforcement.

use anyhow::Result;
use clap::Args;

use jt_core::{editor, short, Clock, RecordPatch, Status};
use jt_storage::{Slot, Store};

#[derive(Args)]
pub struct MoveArgs {
    /// Record id or unique prefix
    pub id: String,

    /// Target column
    pub status: Status,
}

pub fn handle<S: Slot>(args: MoveArgs, store: &Store<S>, clock: &impl Clock) -> Result<()> {
    let mut records = store.load();
    if !editor::update(&mut records, &args.id, RecordPatch::status_change(args.status), clock) {
        super::not_found(&args.id);
        return Ok(());
    }
    store.save(&records)?;
    println!("Moved {} to {}", short(&args.id, 12), args.status);
    Ok(())
}
