//! SQLite backend for the Quill note store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. A [`Database`] is opened once
//! and shared; a [`SqliteNoteStore`] is built from it and performs one
//! transaction per operation.

mod db;
mod encode;
mod schema;
mod store;

pub mod error;

pub use db::Database;
pub use error::{Error, Result};
pub use schema::{DATABASE_FILE_NAME, DATABASE_NAME, DATABASE_VERSION};
pub use store::SqliteNoteStore;
