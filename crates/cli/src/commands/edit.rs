// SPDX-License-Identifier: MIT

//! `jt edit` - Change fields on an existing record

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use jt_core::{editor, short, Clock, RecordPatch, Status};
use jt_storage::{Slot, Store};

#[derive(Args)]
pub struct EditArgs {
    /// Record id or unique prefix
    pub id: String,

    #[arg(long, short = 'c')]
    pub company: Option<String>,

    #[arg(long, short = 't')]
    pub title: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long, short = 'r')]
    pub resume: Option<String>,

    #[arg(long)]
    pub status: Option<Status>,

    /// Date applied (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub applied: Option<NaiveDate>,

    #[arg(long)]
    pub salary: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Replace the notes text
    #[arg(long)]
    pub notes: Option<String>,
}

impl EditArgs {
    fn into_patch(self) -> (String, RecordPatch) {
        let patch = RecordPatch {
            company_name: self.company,
            job_title: self.title,
            job_url: self.url.map(Some),
            source: self.source,
            resume_used: self.resume,
            status: self.status,
            date_applied: self.applied.map(Some),
            salary: self.salary.map(Some),
            location: self.location.map(Some),
            notes: self.notes,
            updates: None,
        };
        (self.id, patch)
    }
}

pub fn handle<S: Slot>(args: EditArgs, store: &Store<S>, clock: &impl Clock) -> Result<()> {
    let (id, patch) = args.into_patch();
    if patch.is_empty() {
        println!("Nothing to change for '{}'", id);
        return Ok(());
    }

    let mut records = store.load();
    if !editor::update(&mut records, &id, patch, clock) {
        super::not_found(&id);
        return Ok(());
    }
    store.save(&records)?;
    println!("Updated {}", short(&id, 12));
    Ok(())
}
