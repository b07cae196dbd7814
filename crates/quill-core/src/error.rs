//! Error types for `quill-core`.

use thiserror::Error;

/// A note was rejected before it could reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("note title must not be empty")]
  EmptyTitle,

  #[error("note text must not be empty")]
  EmptyText,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid note id: {0:?}")]
  InvalidId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
