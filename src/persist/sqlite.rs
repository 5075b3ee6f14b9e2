//! SQLite-backed record store.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};
use tracing::{debug, info};

use crate::{
    record::{ScoutingRecord, ValidatedRecord},
    types::RecordId,
};

use super::{RecordStore, StorageFault, StorageResult, TIMESTAMP_FORMAT};

const INSERT_SQL: &str = "INSERT INTO scouting_data (
        team_number, match_number, match_level, auto_points, teleop_points,
        endgame_points, team_station, comments, scouter_name, timestamp
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

const SELECT_ALL_SQL: &str = "SELECT id, team_number, match_number, match_level, auto_points,
        teleop_points, endgame_points, team_station, comments, scouter_name, timestamp
    FROM scouting_data ORDER BY id ASC";

/// SQLite implementation of [`RecordStore`].
///
/// Holds only the database path; every operation opens its own connection
/// and closes it before returning.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    path: PathBuf,
}

impl SqliteRecordStore {
    /// Store backed by the database file at `path`. Nothing is opened yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StorageResult<Connection> {
        debug!(path = %self.path.display(), "opening scouting database");
        Connection::open(&self.path).map_err(|source| StorageFault::Open {
            path: self.path.clone(),
            source,
        })
    }
}

impl RecordStore for SqliteRecordStore {
    fn ensure_schema(&self) -> StorageResult<()> {
        let conn = self.connect()?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(%mode, "journal mode");
        conn.execute_batch(include_str!("schema.sql"))?;
        info!(path = %self.path.display(), "scouting schema ready");
        Ok(())
    }

    fn insert_at(
        &self,
        record: &ValidatedRecord,
        captured_at: NaiveDateTime,
    ) -> StorageResult<RecordId> {
        let mut conn = self.connect()?;
        let timestamp = captured_at.format(TIMESTAMP_FORMAT).to_string();

        let tx = conn.transaction()?;
        tx.execute(
            INSERT_SQL,
            params![
                record.team_number,
                record.match_number,
                record.match_level,
                record.auto_points,
                record.teleop_points,
                record.endgame_points,
                record.team_station,
                record.comments,
                record.scouter_name,
                timestamp,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(
            id,
            team = record.team_number,
            match_number = record.match_number,
            "scouting record saved"
        );
        Ok(id)
    }

    fn all_records(&self) -> StorageResult<Vec<ScoutingRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_ALL_SQL)?;
        let rows = stmt.query_map([], record_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ScoutingRecord> {
    Ok(ScoutingRecord {
        id: row.get(0)?,
        team_number: row.get(1)?,
        match_number: row.get(2)?,
        match_level: row.get(3)?,
        auto_points: row.get(4)?,
        teleop_points: row.get(5)?,
        endgame_points: row.get(6)?,
        team_station: row.get(7)?,
        comments: row.get(8)?,
        scouter_name: row.get(9)?,
        timestamp: row.get(10)?,
    })
}
