// SPDX-License-Identifier: MIT

//! `jt add` - Track a new job application

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use jt_core::{editor, Clock, RecordDraft, Status};
use jt_storage::{Slot, Store};

#[derive(Args)]
pub struct AddArgs {
    /// Company name
    #[arg(long, short = 'c')]
    pub company: String,

    /// Job title
    #[arg(long, short = 't')]
    pub title: String,

    /// Resume variant used for this application
    #[arg(long, short = 'r', default_value = jt_core::RESUME_PRESETS[0])]
    pub resume: String,

    /// Posting URL
    #[arg(long)]
    pub url: Option<String>,

    /// Where the posting came from (LinkedIn, Referral, ...)
    #[arg(long, default_value = jt_core::SUGGESTED_SOURCES[0])]
    pub source: String,

    /// Column to add the record to (defaults to saved)
    #[arg(long, default_value = "saved")]
    pub status: Status,

    /// Date applied (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub applied: Option<NaiveDate>,

    /// Advertised salary or range
    #[arg(long)]
    pub salary: Option<String>,

    /// Job location
    #[arg(long)]
    pub location: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn handle<S: Slot>(args: AddArgs, store: &Store<S>, clock: &impl Clock) -> Result<()> {
    let mut draft = RecordDraft::new(args.company, args.title, args.resume)
        .source(args.source)
        .status(args.status);
    draft.job_url = args.url;
    draft.date_applied = args.applied;
    draft.salary = args.salary;
    draft.location = args.location;
    if let Some(notes) = args.notes {
        draft = draft.notes(notes);
    }

    let mut records = store.load();
    let id = editor::create(&mut records, draft, clock)?;
    store.save(&records)?;

    let record = &records[0];
    println!(
        "Added {} - {} ({}) to {}",
        record.company_name,
        record.job_title,
        id.short(8),
        record.status
    );
    Ok(())
}
