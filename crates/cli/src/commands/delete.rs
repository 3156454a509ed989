// SPDX-License-Identifier: MIT

//! `jt delete` - Remove a record

use anyhow::Result;
use clap::Args;

use jt_core::editor;
use jt_storage::{Slot, Store};

use crate::confirm::confirm;

#[derive(Args)]
pub struct DeleteArgs {
    /// Record id or unique prefix
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn handle<S: Slot>(args: DeleteArgs, store: &Store<S>) -> Result<()> {
    let mut records = store.load();
    let Some(record) = super::resolve(&records, &args.id) else {
        return Ok(());
    };

    let prompt = format!("Delete {} - {}?", record.company_name, record.job_title);
    let id = record.id.clone();
    if !confirm(&prompt, args.yes)? {
        println!("Aborted");
        return Ok(());
    }

    editor::delete(&mut records, id.as_str());
    store.save(&records)?;
    println!("Deleted {}", id.short(8));
    Ok(())
}
