//! Durable record storage.

/// SQLite implementation of [`RecordStore`].
pub mod sqlite;

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use crate::{
    record::{ScoutingRecord, ValidatedRecord},
    types::RecordId,
};

/// Text format of the capture timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The durable store could not be opened, read, or written.
#[derive(Debug, Error)]
pub enum StorageFault {
    /// Opening the database file failed.
    #[error("cannot open scouting database {}: {source}", .path.display())]
    Open {
        /// Database path.
        path: PathBuf,
        /// Underlying SQLite error.
        source: rusqlite::Error,
    },
    /// Any other SQLite failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageFault>;

/// Append-only store of scouting records.
///
/// Records are never updated or deleted, and ids are never reused.
pub trait RecordStore {
    /// Creates the record table if it does not exist yet. Idempotent.
    fn ensure_schema(&self) -> StorageResult<()>;

    /// Appends `record` stamped with `captured_at` and returns its new id.
    fn insert_at(
        &self,
        record: &ValidatedRecord,
        captured_at: NaiveDateTime,
    ) -> StorageResult<RecordId>;

    /// Every stored record, ordered by id.
    fn all_records(&self) -> StorageResult<Vec<ScoutingRecord>>;

    /// Appends `record` stamped with the current local time.
    fn insert(&self, record: &ValidatedRecord) -> StorageResult<RecordId> {
        self.insert_at(record, Local::now().naive_local())
    }
}
