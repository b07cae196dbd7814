//! Error type for `quill-store-sqlite`.

use quill_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The store could not be opened or its schema could not be initialised.
  #[error("failed to open database: {0}")]
  DatabaseOpen(#[source] tokio_rusqlite::Error),

  /// The file on disk was written by a newer schema than this build knows.
  #[error("database version {on_disk} is newer than supported version {supported}")]
  UnsupportedVersion { on_disk: u32, supported: u32 },

  /// A single add/delete/list transaction aborted. Nothing was applied.
  #[error("transaction aborted: {0}")]
  Transaction(#[source] tokio_rusqlite::Error),

  #[error("failed to close database: {0}")]
  Close(#[source] tokio_rusqlite::Error),

  /// A stored row does not satisfy the note invariants.
  #[error("malformed note record {id}: {source}")]
  MalformedRecord {
    id:     i64,
    #[source]
    source: ValidationError,
  },
}

impl Error {
  /// `true` for errors that leave the session without a usable handle.
  pub fn is_open_error(&self) -> bool {
    matches!(self, Error::DatabaseOpen(_) | Error::UnsupportedVersion { .. })
  }

  /// `true` for a per-operation failure; other operations stay usable.
  pub fn is_transaction_error(&self) -> bool {
    matches!(self, Error::Transaction(_) | Error::MalformedRecord { .. })
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
