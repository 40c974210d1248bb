//! Seen-set repository — membership check, insert, and history listing.

use vig_core::SeenEntry;

use crate::WatchDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

const SELECT_COLS: &str = "identity, title, deadline, source_name, first_seen_at";

fn row_to_seen_entry(row: &libsql::Row) -> Result<SeenEntry, DatabaseError> {
    Ok(SeenEntry {
        identity: row.get(0)?,
        title: row.get(1)?,
        deadline: row.get(2)?,
        source_name: row.get(3)?,
        first_seen_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl WatchDb {
    /// Look up a seen entry by identity. `None` means the record is new.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_seen(&self, identity: &str) -> Result<Option<SeenEntry>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM seen_entries WHERE identity = ?1"),
                [identity],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_seen_entry(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a newly seen entry.
    ///
    /// The primary key on `identity` enforces at-most-once-seen; inserting a
    /// duplicate identity is an error, not an upsert — entries are never
    /// updated after first detection.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails, including on a duplicate
    /// identity.
    pub async fn insert_seen(&self, entry: &SeenEntry) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO seen_entries (identity, title, deadline, source_name, first_seen_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    entry.identity.as_str(),
                    entry.title.as_str(),
                    entry.deadline.as_str(),
                    entry.source_name.as_str(),
                    entry.first_seen_at.to_rfc3339(),
                ],
            )
            .await?;
        Ok(())
    }

    /// List the most recently seen entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_seen(&self, limit: u32) -> Result<Vec<SeenEntry>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM seen_entries
                     ORDER BY first_seen_at DESC, identity LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_seen_entry(&row)?);
        }
        Ok(entries)
    }

    /// Total number of entries in the seen-set.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_seen(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM seen_entries", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)? as u64)
    }
}
