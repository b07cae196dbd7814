//! Decoding between `notes` rows and domain types.
//!
//! Rows are read into [`RawNote`] first and only become a [`Note`] after
//! passing the same validation the caller's [`NewNote`] went through.

use quill_core::note::{NewNote, Note, NoteId};

use crate::{Error, Result};

/// Column values read directly from a `notes` row.
pub struct RawNote {
  pub id:    i64,
  pub title: String,
  pub text:  String,
}

impl RawNote {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawNote {
      id:    row.get(0)?,
      title: row.get(1)?,
      text:  row.get(2)?,
    })
  }

  pub fn into_note(self) -> Result<Note> {
    let id = self.id;
    let note = NewNote::new(self.title, self.text)
      .map_err(|source| Error::MalformedRecord { id, source })?;
    Ok(Note::from_parts(NoteId(id), note))
  }
}
