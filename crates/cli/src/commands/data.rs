// SPDX-License-Identifier: MIT

//! `jt export`, `jt import`, `jt clear` - Whole-set data operations

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use jt_storage::{export, import, Slot, Store};

use crate::confirm::confirm;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (defaults to a dated name in the current directory)
    #[arg(long, short = 'o')]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to merge in (an earlier export, or a compatible dump)
    pub file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn export<S: Slot>(
    args: ExportArgs,
    store: &Store<S>,
    now: DateTime<Utc>,
) -> Result<()> {
    let records = store.load();
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(export::export_file_name(now.date_naive())));
    let payload = export::to_json(&records)?;
    std::fs::write(&path, payload)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn import<S: Slot>(args: ImportArgs, store: &Store<S>) -> Result<()> {
    let payload = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let incoming = import::parse(&payload)?;

    let prompt = format!(
        "Merge {} records from {}? Existing records are kept on id collision.",
        incoming.len(),
        args.file.display()
    );
    if !confirm(&prompt, args.yes)? {
        println!("Cancelled");
        return Ok(());
    }

    let existing = store.load();
    let before = existing.len();
    let merged = import::merge(incoming, existing);
    let added = merged.len() - before;
    store.save(&merged)?;
    println!("Imported {} new records ({} total)", added, merged.len());
    Ok(())
}

pub fn clear<S: Slot>(args: ClearArgs, store: &Store<S>) -> Result<()> {
    let count = store.load().len();
    if !confirm(&format!("Delete all {} records?", count), args.yes)? {
        println!("Cancelled");
        return Ok(());
    }
    store.clear()?;
    println!("Cleared {} records", count);
    Ok(())
}
