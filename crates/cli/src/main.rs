// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jt: a job application tracker for the terminal.
//!
//! Records live in a single JSON file; every command loads the full set,
//! applies one change, and writes it back.

mod color;
mod commands;
mod confirm;
mod output;
mod table;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jt_core::{Clock, SystemClock};
use jt_storage::{FileSlot, Store};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "jt",
    version,
    about = "Track job applications from the terminal",
    styles = color::styles()
)]
struct Cli {
    /// Record file (defaults to the platform data directory)
    #[arg(long, global = true, env = "JT_DATA_FILE", value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Track a new job application
    Add(commands::add::AddArgs),
    /// Change fields on an existing record
    Edit(commands::edit::EditArgs),
    /// Move a record to another column
    #[command(name = "move", visible_alias = "mv")]
    Move(commands::mv::MoveArgs),
    /// Remove a record
    Delete(commands::delete::DeleteArgs),
    /// Add or remove progress notes on a record
    Note(commands::note::NoteArgs),
    /// Show the board, one column per status
    #[command(visible_alias = "ls")]
    List(commands::list::ListArgs),
    /// Full detail for a single record
    Show(commands::show::ShowArgs),
    /// Aggregate pipeline statistics
    Stats(commands::stats::StatsArgs),
    /// Write all records to a JSON file
    Export(commands::data::ExportArgs),
    /// Merge records from a JSON file
    Import(commands::data::ImportArgs),
    /// Delete all records
    Clear(commands::data::ClearArgs),
}

impl Cli {
    fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("jobtrack")
                .join("records.json")
        })
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = Store::new(FileSlot::new(cli.data_file()));
    let clock = SystemClock;
    let now = clock.now();
    let format = cli.format;

    match cli.command {
        Command::Add(args) => commands::add::handle(args, &store, &clock),
        Command::Edit(args) => commands::edit::handle(args, &store, &clock),
        Command::Move(args) => commands::mv::handle(args, &store, &clock),
        Command::Delete(args) => commands::delete::handle(args, &store),
        Command::Note(args) => commands::note::handle(args, &store, &clock),
        Command::List(args) => commands::list::handle(args, &store, now, format),
        Command::Show(args) => commands::show::handle(args, &store, now, format),
        Command::Stats(args) => commands::stats::handle(args, &store, now, format),
        Command::Export(args) => commands::data::export(args, &store, now),
        Command::Import(args) => commands::data::import(args, &store),
        Command::Clear(args) => commands::data::clear(args, &store),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
