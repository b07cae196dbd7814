//! `quill` — keep short title/text notes in a local SQLite store.
//!
//! # Usage
//!
//! ```
//! quill add --title Groceries --text "milk, eggs"
//! quill list
//! quill delete 1
//! quill --config ~/.config/quill/quill.toml list --json
//! ```

mod commands;
mod settings;
mod render;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use commands::Outcome;
use quill_core::note::NoteId;
use quill_store_sqlite::{Database, SqliteNoteStore};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "quill", author, version, about = "Keep short notes in a local store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "quill.toml")]
  config: PathBuf,

  /// Database file; overrides `store_path` from config and environment.
  #[arg(long, value_name = "PATH")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show every note, oldest first.
  List {
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
  },
  /// Add a note, then show the updated list.
  Add {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    text:  String,
  },
  /// Delete a note by id, then show the updated list.
  Delete { id: NoteId },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  // Logs go to stderr so table and JSON output stay clean.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = settings::load(&cli.config, cli.store)?;

  // Opened once; every command shares this handle.
  let db = Database::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;
  let store = SqliteNoteStore::new(&db);

  let mut stdout = io::stdout().lock();
  let mut stderr = io::stderr().lock();

  let outcome = match cli.command {
    Command::List { json } => {
      commands::list(&store, json, &mut stdout).await?;
      Outcome::Done
    }
    Command::Add { title, text } => {
      commands::add(&store, &title, &text, &mut stdout, &mut stderr).await?
    }
    Command::Delete { id } => {
      commands::delete(&store, id, &mut stdout).await?;
      Outcome::Done
    }
  };

  Ok(match outcome {
    Outcome::Done => ExitCode::SUCCESS,
    Outcome::Rejected => ExitCode::FAILURE,
  })
}
