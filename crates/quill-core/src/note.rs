//! Note — the single entity held by the store.
//!
//! A note starts life as a [`NewNote`] built by the caller (title and text,
//! no id). The store assigns a [`NoteId`] on insertion and hands back
//! [`Note`] values on read. Both constructors enforce the same validation
//! rule, including when deserialising, so an empty field never crosses the
//! serialisation boundary.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, ValidationError};

// ─── NoteId ──────────────────────────────────────────────────────────────────

/// Store-assigned primary key. Strictly increasing, never reused.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
  pub fn get(self) -> i64 { self.0 }
}

impl fmt::Display for NoteId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for NoteId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<i64>()
      .map(NoteId)
      .map_err(|_| Error::InvalidId(s.to_owned()))
  }
}

impl From<i64> for NoteId {
  fn from(value: i64) -> Self { NoteId(value) }
}

// ─── NewNote ─────────────────────────────────────────────────────────────────

/// A note that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNewNote")]
pub struct NewNote {
  title: String,
  text:  String,
}

impl NewNote {
  /// Build a note, rejecting an empty title or text.
  pub fn new(
    title: impl Into<String>,
    text: impl Into<String>,
  ) -> Result<Self, ValidationError> {
    let title = title.into();
    let text = text.into();

    if title.is_empty() {
      return Err(ValidationError::EmptyTitle);
    }
    if text.is_empty() {
      return Err(ValidationError::EmptyText);
    }

    Ok(Self { title, text })
  }

  pub fn title(&self) -> &str { &self.title }

  pub fn text(&self) -> &str { &self.text }

  pub fn into_parts(self) -> (String, String) { (self.title, self.text) }
}

#[derive(Deserialize)]
struct RawNewNote {
  title: String,
  text:  String,
}

impl TryFrom<RawNewNote> for NewNote {
  type Error = ValidationError;

  fn try_from(raw: RawNewNote) -> Result<Self, Self::Error> {
    NewNote::new(raw.title, raw.text)
  }
}

// ─── Note ────────────────────────────────────────────────────────────────────

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
  id:    NoteId,
  title: String,
  text:  String,
}

impl Note {
  /// Attach a store-assigned id to a validated note.
  pub fn from_parts(id: NoteId, note: NewNote) -> Self {
    let (title, text) = note.into_parts();
    Self { id, title, text }
  }

  pub fn id(&self) -> NoteId { self.id }

  pub fn title(&self) -> &str { &self.title }

  pub fn text(&self) -> &str { &self.text }
}

#[derive(Deserialize)]
struct RawNote {
  id:    NoteId,
  title: String,
  text:  String,
}

impl TryFrom<RawNote> for Note {
  type Error = ValidationError;

  fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
    Ok(Note::from_parts(raw.id, NewNote::new(raw.title, raw.text)?))
  }
}
