//! [`Database`] — the shared handle to the embedded store.

use std::{path::Path, time::Duration};

use crate::{
  Error, Result,
  schema::{self, CONNECTION_PRAGMAS, DATABASE_NAME, DATABASE_VERSION},
};

// ─── Handle ──────────────────────────────────────────────────────────────────

/// An open, schema-current SQLite database.
///
/// Open it once at startup and hand it by reference to every repository that
/// needs it. Cloning is cheap: the inner connection is reference-counted and
/// all clones talk to the same database thread.
#[derive(Clone)]
pub struct Database {
  pub(crate) conn: tokio_rusqlite::Connection,
}

enum OpenOutcome {
  Current,
  Initialized { from: u32 },
  TooNew { on_disk: u32 },
}

impl Database {
  /// Open (or create) the database at `path` and bring its schema up to
  /// [`DATABASE_VERSION`] before returning.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(name = DATABASE_NAME, path = %path.display(), "opening database");
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::DatabaseOpen)?;
    Self::bootstrap(conn).await
  }

  /// Open an in-memory database, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    tracing::debug!(name = DATABASE_NAME, "opening in-memory database");
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::DatabaseOpen)?;
    Self::bootstrap(conn).await
  }

  async fn bootstrap(conn: tokio_rusqlite::Connection) -> Result<Self> {
    let outcome = conn
      .call(|conn| {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(CONNECTION_PRAGMAS)?;

        let on_disk = schema::current_version(conn)?;
        if on_disk > DATABASE_VERSION {
          return Ok(OpenOutcome::TooNew { on_disk });
        }
        if on_disk == DATABASE_VERSION {
          return Ok(OpenOutcome::Current);
        }

        let tx = conn.transaction()?;
        schema::initialize(&tx, on_disk)?;
        tx.commit()?;
        Ok(OpenOutcome::Initialized { from: on_disk })
      })
      .await
      .map_err(Error::DatabaseOpen)?;

    match outcome {
      OpenOutcome::TooNew { on_disk } => {
        return Err(Error::UnsupportedVersion {
          on_disk,
          supported: DATABASE_VERSION,
        });
      }
      OpenOutcome::Initialized { from } => {
        tracing::info!(from, to = DATABASE_VERSION, "initialised note schema");
      }
      OpenOutcome::Current => {
        tracing::debug!(version = DATABASE_VERSION, "note schema is current");
      }
    }

    Ok(Self { conn })
  }

  /// The schema version currently recorded on disk.
  pub async fn version(&self) -> Result<u32> {
    self
      .conn
      .call(|conn| Ok(schema::current_version(conn)?))
      .await
      .map_err(Error::Transaction)
  }

  /// Close the underlying connection.
  ///
  /// Optional: a handle normally lives for the whole process. Any clone used
  /// after this call fails with [`Error::Transaction`].
  pub async fn close(self) -> Result<()> {
    self.conn.close().await.map_err(Error::Close)
  }
}
