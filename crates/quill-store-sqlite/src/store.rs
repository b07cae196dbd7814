//! [`SqliteNoteStore`] — the SQLite implementation of [`NoteStore`].

use quill_core::{
  note::{NewNote, Note, NoteId},
  store::NoteStore,
};
use rusqlite::TransactionBehavior;

use crate::{Database, Error, Result, encode::RawNote};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Note repository over a shared [`Database`].
///
/// Each operation runs exactly one transaction on the database thread and
/// resolves only after that transaction has committed. Nothing is cached.
#[derive(Clone)]
pub struct SqliteNoteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteNoteStore {
  pub fn new(db: &Database) -> Self {
    Self {
      conn: db.conn.clone(),
    }
  }
}

// ─── NoteStore impl ──────────────────────────────────────────────────────────

impl NoteStore for SqliteNoteStore {
  type Error = Error;

  async fn add(&self, note: NewNote) -> Result<NoteId> {
    let (title, text) = note.into_parts();

    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
          "INSERT INTO notes (title, text) VALUES (?1, ?2)",
          rusqlite::params![title, text],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(Error::Transaction)?;

    tracing::debug!(id, "added note");
    Ok(NoteId(id))
  }

  async fn delete(&self, id: NoteId) -> Result<()> {
    let raw_id = id.get();

    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let removed =
          tx.execute("DELETE FROM notes WHERE id = ?1", rusqlite::params![raw_id])?;
        tx.commit()?;
        Ok(removed)
      })
      .await
      .map_err(Error::Transaction)?;

    if removed == 0 {
      tracing::debug!(id = raw_id, "delete of missing note is a no-op");
    } else {
      tracing::debug!(id = raw_id, "deleted note");
    }
    Ok(())
  }

  async fn list(&self) -> Result<Vec<Note>> {
    let raws: Vec<RawNote> = self
      .conn
      .call(|conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;
        let mut stmt =
          tx.prepare("SELECT id, title, text FROM notes ORDER BY id ASC")?;
        let rows = stmt
          .query_map([], RawNote::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);
        tx.commit()?;
        Ok(rows)
      })
      .await
      .map_err(Error::Transaction)?;

    tracing::debug!(count = raws.len(), "listed notes");
    raws.into_iter().map(RawNote::into_note).collect()
  }
}
