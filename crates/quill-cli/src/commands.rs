//! Subcommand implementations.
//!
//! Each command talks to the store only through [`NoteStore`]. Writes are
//! chained with a fresh `list()` so the printed table reflects the change.

use std::io::Write;

use anyhow::Context as _;
use quill_core::{
  note::{NewNote, NoteId},
  store::NoteStore,
};

use crate::render::{self, AlertKind};

/// What the user should see as the process result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Done,
  /// Input failed validation; nothing was sent to the store.
  Rejected,
}

/// `quill list [--json]`
pub async fn list<S>(store: &S, json: bool, out: &mut impl Write) -> anyhow::Result<()>
where
  S: NoteStore,
{
  let notes = store.list().await.context("failed to list notes")?;

  if json {
    serde_json::to_writer_pretty(&mut *out, &notes).context("serialising notes")?;
    writeln!(out)?;
  } else {
    out.write_all(render::notes_table(&notes).as_bytes())?;
  }
  Ok(())
}

/// `quill add --title <T> --text <X>`
pub async fn add<S>(
  store: &S,
  title: &str,
  text: &str,
  out: &mut impl Write,
  err: &mut impl Write,
) -> anyhow::Result<Outcome>
where
  S: NoteStore,
{
  let note = match NewNote::new(title, text) {
    Ok(note) => note,
    Err(e) => {
      tracing::debug!(error = %e, "rejected note");
      let banner = render::alert(AlertKind::Danger, "Please fill all the fields");
      err.write_all(banner.as_bytes())?;
      return Ok(Outcome::Rejected);
    }
  };

  let id = store.add(note).await.context("failed to add note")?;
  tracing::info!(%id, "note added");

  out.write_all(render::alert(AlertKind::Success, "Note added").as_bytes())?;
  list(store, false, out).await?;
  Ok(Outcome::Done)
}

/// `quill delete <ID>`
pub async fn delete<S>(store: &S, id: NoteId, out: &mut impl Write) -> anyhow::Result<()>
where
  S: NoteStore,
{
  store
    .delete(id)
    .await
    .with_context(|| format!("failed to delete note {id}"))?;
  tracing::info!(%id, "note deleted");

  out.write_all(render::alert(AlertKind::Success, "Note removed").as_bytes())?;
  list(store, false, out).await
}
