// SPDX-License-Identifier: MIT

//! `jt list` - The board, one column per status

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use jt_board::column;
use jt_core::{JobRecord, Status};
use jt_storage::{Slot, Store};

use crate::color;
use crate::output::{format_or_json, format_time_ago, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ListArgs {
    /// Show a single column instead of the whole board
    #[arg(long, short = 's')]
    pub status: Option<Status>,

    /// Search query (case-insensitive substring over company, title,
    /// source, and resume)
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,
}

#[derive(Serialize)]
struct ColumnView<'a> {
    status: Status,
    records: Vec<&'a JobRecord>,
}

pub fn handle<S: Slot>(
    args: ListArgs,
    store: &Store<S>,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> Result<()> {
    let records = store.load();
    let statuses: Vec<Status> = match args.status {
        Some(status) => vec![status],
        None => Status::COLUMNS.to_vec(),
    };

    let board: Vec<ColumnView<'_>> = statuses
        .iter()
        .map(|&status| ColumnView {
            status,
            records: column(&records, status, &args.query),
        })
        .collect();

    format_or_json(format, &board, || {
        let mut out = std::io::stdout().lock();
        let mut first = true;
        for view in &board {
            if !first {
                let _ = writeln!(out);
            }
            first = false;
            let _ = writeln!(
                out,
                "{}",
                color::status(
                    view.status,
                    &format!("{} ({})", view.status.label(), view.records.len())
                )
            );
            if view.records.is_empty() {
                continue;
            }
            let mut table = Table::new(vec![
                Column::muted("ID"),
                Column::left("COMPANY"),
                Column::left("TITLE"),
                Column::left("SOURCE"),
                Column::muted("UPDATED"),
            ]);
            for r in &view.records {
                table.row(vec![
                    r.id.short(8).to_string(),
                    r.company_name.clone(),
                    r.job_title.clone(),
                    r.source.clone(),
                    format_time_ago(r.updated_at, now),
                ]);
            }
            table.render(&mut out);
        }
    })
}
