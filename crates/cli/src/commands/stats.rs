// SPDX-License-Identifier: MIT

//! `jt stats` - Aggregate pipeline statistics

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use jt_board::Snapshot;
use jt_storage::{Slot, Store};

use crate::color;
use crate::output::{format_or_json, format_time_ago, OutputFormat};

#[derive(Args)]
pub struct StatsArgs {}

pub fn handle<S: Slot>(
    _args: StatsArgs,
    store: &Store<S>,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> Result<()> {
    let records = store.load();
    let snapshot = Snapshot::compute(&records, now);

    format_or_json(format, &snapshot, || print_snapshot(&snapshot, now))
}

fn print_snapshot(snapshot: &Snapshot, now: DateTime<Utc>) {
    println!("{}", color::header("Pipeline"));
    metric("total", snapshot.total, None);
    metric("applied", snapshot.applied, Some(snapshot.applied_rate));
    metric("interviews", snapshot.interviews, Some(snapshot.interview_rate));
    metric("offers", snapshot.offers, Some(snapshot.offer_rate));
    metric("this week", snapshot.this_week, None);

    println!();
    println!("{}", color::header("By status"));
    for slice in &snapshot.breakdown {
        let label = format!("{:<10}", slice.status.label().to_lowercase());
        println!(
            "  {} {:>3}  {}",
            color::status(slice.status, &label),
            slice.count,
            color::muted(&format!("{}%", slice.percent))
        );
    }

    if !snapshot.top_sources.is_empty() {
        println!();
        println!("{}", color::header("Top sources"));
        for source in &snapshot.top_sources {
            println!(
                "  {} {:>3}",
                color::context(&format!("{:<16}", source.source)),
                source.count
            );
        }
    }

    if !snapshot.recent.is_empty() {
        println!();
        println!("{}", color::header("Recent"));
        for record in &snapshot.recent {
            println!(
                "  {}  {} - {}  {}",
                color::muted(record.id.short(8)),
                record.company_name,
                record.job_title,
                color::muted(&format_time_ago(record.created_at, now))
            );
        }
    }
}

fn metric(name: &str, count: usize, rate: Option<u32>) {
    let rate = match rate {
        Some(pct) => color::muted(&format!("  ({pct}%)")),
        None => String::new(),
    };
    println!("  {} {:>3}{}", color::context(&format!("{name:<10}")), count, rate);
}
