// SPDX-License-Identifier: MIT

//! `jt show` - Full detail for a single record

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use jt_core::JobRecord;
use jt_storage::{Slot, Store};

use crate::color;
use crate::output::{format_or_json, format_time_ago, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Record id or unique prefix
    pub id: String,
}

pub fn handle<S: Slot>(
    args: ShowArgs,
    store: &Store<S>,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> Result<()> {
    let records = store.load();
    let Some(record) = super::resolve(&records, &args.id) else {
        return Ok(());
    };

    format_or_json(format, record, || print_record(record, now))
}

fn print_record(record: &JobRecord, now: DateTime<Utc>) {
    println!(
        "{}",
        color::header(&format!("{} - {}", record.company_name, record.job_title))
    );
    field("id", record.id.as_str());
    field("status", &color::status(record.status, &record.status.to_string()));
    field("source", &record.source);
    field("resume", &record.resume_used);
    if let Some(date) = record.date_applied {
        field("applied", &date.to_string());
    }
    if let Some(url) = &record.job_url {
        field("url", url);
    }
    if let Some(salary) = &record.salary {
        field("salary", salary);
    }
    if let Some(location) = &record.location {
        field("location", location);
    }
    field("created", &format_time_ago(record.created_at, now));
    field("updated", &format_time_ago(record.updated_at, now));
    if !record.notes.is_empty() {
        field("notes", &record.notes);
    }

    if !record.updates.is_empty() {
        println!();
        println!("{}", color::header("Updates"));
        for update in &record.updates {
            println!(
                "  {}  {}  {}",
                color::muted(update.id.short(8)),
                color::context(&update.date.format("%Y-%m-%d").to_string()),
                update.message
            );
        }
    }
}

fn field(name: &str, value: &str) {
    // Pad before coloring so escape codes don't skew alignment.
    println!("  {} {}", color::context(&format!("{name:<9}")), value);
}
