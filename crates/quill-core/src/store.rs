//! The `NoteStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `quill-store-sqlite`).
//! The presentation layer depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::note::{NewNote, Note, NoteId};

/// Abstraction over a note repository.
///
/// Every method is a single-shot unit of work wrapping exactly one storage
/// transaction. The returned future resolves only once that transaction has
/// committed (or fails once it has aborted); there is no partial success.
///
/// The repository keeps no cache: every [`list`](NoteStore::list) re-reads
/// the store.
pub trait NoteStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `note` and return the id the store assigned to it.
  fn add(
    &self,
    note: NewNote,
  ) -> impl Future<Output = Result<NoteId, Self::Error>> + Send + '_;

  /// Remove the note with `id`. Removing a missing id is a no-op.
  fn delete(
    &self,
    id: NoteId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Return a full snapshot of every note in ascending id order.
  fn list(&self) -> impl Future<Output = Result<Vec<Note>, Self::Error>> + Send + '_;
}
