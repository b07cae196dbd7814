//! SQL schema for the Quill SQLite store.
//!
//! The store version lives in `PRAGMA user_version`; a fresh file reports 0.
//! [`initialize`] applies every upgrade step newer than the on-disk version
//! and is only called when that version is behind [`DATABASE_VERSION`].

use rusqlite::Connection;

/// Logical name of the database.
pub const DATABASE_NAME: &str = "notes";

/// Default file name for an on-disk database.
pub const DATABASE_FILE_NAME: &str = "notes.db";

/// Schema version this build reads and writes.
pub const DATABASE_VERSION: u32 = 1;

/// Per-connection settings; run on every open, outside any transaction.
pub const CONNECTION_PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

/// Version 1: a single `notes` container keyed by an auto-assigned integer.
///
/// `AUTOINCREMENT` keeps ids strictly increasing even after the highest row
/// is deleted. The two indexes are non-unique lookup paths that no current
/// query uses.
const V1: &str = "
CREATE TABLE IF NOT EXISTS notes (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (title <> ''),
    text  TEXT NOT NULL CHECK (text <> '')
);

CREATE INDEX IF NOT EXISTS notes_title_idx ON notes(title);
CREATE INDEX IF NOT EXISTS notes_text_idx  ON notes(text);
";

struct Upgrade {
  version: u32,
  sql:     &'static str,
}

const UPGRADES: &[Upgrade] = &[Upgrade { version: 1, sql: V1 }];

/// Read the on-disk schema version.
pub fn current_version(conn: &Connection) -> rusqlite::Result<u32> {
  conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Bring the schema from `from` up to [`DATABASE_VERSION`].
///
/// Expects to run inside the caller's transaction so the DDL and the version
/// bump land together.
pub fn initialize(conn: &Connection, from: u32) -> rusqlite::Result<()> {
  for upgrade in UPGRADES.iter().filter(|u| u.version > from) {
    conn.execute_batch(upgrade.sql)?;
  }
  conn.pragma_update(None, "user_version", DATABASE_VERSION)?;
  Ok(())
}
