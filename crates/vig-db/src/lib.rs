//! # vig-db
//!
//! libSQL seen-set store for Vigia.
//!
//! Holds the append-only history of every record ever notified, keyed by the
//! deterministic identity fingerprint. Opened once at process start from a
//! configured path (`:memory:` in tests); the embedded migration runs on
//! every open and is idempotent.

pub mod error;
pub mod helpers;
mod migrations;
pub mod seen;

use error::DatabaseError;
use libsql::Builder;

/// Central handle for the seen-set database.
pub struct WatchDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl WatchDb {
    /// Open a local database at the given path.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let watch_db = Self { db, conn };
        watch_db.run_migrations().await?;
        tracing::debug!(path, "seen-set store opened");
        Ok(watch_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
