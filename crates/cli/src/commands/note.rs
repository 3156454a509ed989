// SPDX-License-Identifier: MIT

//! `jt note` - Progress notes on a record
//!
//! Note edits persist through a combined record save, so `updated_at`
//! refreshes once per command, matching a single form submission.

use anyhow::Result;
use clap::{Args, Subcommand};

use jt_core::{editor, Clock, RecordPatch};
use jt_storage::{Slot, Store};

#[derive(Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    pub command: NoteCommand,
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Add a progress note (newest first)
    Add {
        /// Record id or unique prefix
        id: String,
        /// Note text
        message: String,
    },
    /// Remove a note by its update id
    Rm {
        /// Record id or unique prefix
        id: String,
        /// Update id (or unique prefix of one)
        update_id: String,
    },
}

pub fn handle<S: Slot>(args: NoteArgs, store: &Store<S>, clock: &impl Clock) -> Result<()> {
    match args.command {
        NoteCommand::Add { id, message } => {
            let mut records = store.load();
            let Some(record) = editor::find_mut(&mut records, &id) else {
                super::not_found(&id);
                return Ok(());
            };
            let update_id = record.push_update(&message, clock)?.id.clone();
            record.apply(RecordPatch::default(), clock);
            store.save(&records)?;
            println!("Noted ({})", update_id.short(8));
        }
        NoteCommand::Rm { id, update_id } => {
            let mut records = store.load();
            let Some(record) = editor::find_mut(&mut records, &id) else {
                super::not_found(&id);
                return Ok(());
            };
            let target = record.find_update(&update_id).map(|u| u.id.clone());
            let Some(target) = target else {
                println!("No note matching '{}'", update_id);
                return Ok(());
            };
            record.remove_update(target.as_str());
            record.apply(RecordPatch::default(), clock);
            store.save(&records)?;
            println!("Removed note {}", target.short(8));
        }
    }
    Ok(())
}
