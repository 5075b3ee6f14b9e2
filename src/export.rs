//! Full-table CSV export.

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    persist::{RecordStore, StorageFault},
    record::ScoutingRecord,
};

/// Prefix of every export file name.
pub const FILE_PREFIX: &str = "scouting_data";
/// Export file extension.
pub const FILE_EXTENSION: &str = "csv";

/// Export failed; stored records are unaffected.
#[derive(Debug, Error)]
pub enum ExportFault {
    /// Records could not be read from the store.
    #[error("failed to read records for export: {0}")]
    Read(#[from] StorageFault),
    /// The export file could not be created.
    #[error("failed to create export file {}: {source}", .path.display())]
    Create {
        /// Attempted file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing rows to the export file failed.
    #[error("failed to write export file {}: {source}", .path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}

/// Writes every stored record to a new timestamped CSV file in `dir`.
pub fn export_all<S: RecordStore + ?Sized>(store: &S, dir: &Path) -> Result<PathBuf, ExportFault> {
    export_all_at(store, dir, Local::now().naive_local())
}

/// [`export_all`] with an explicit export instant for the file name.
pub fn export_all_at<S: RecordStore + ?Sized>(
    store: &S,
    dir: &Path,
    at: NaiveDateTime,
) -> Result<PathBuf, ExportFault> {
    let records = store.all_records()?;
    let (path, file) = create_export_file(dir, at)?;

    if let Err(source) = write_records(file, &records) {
        if let Err(err) = fs::remove_file(&path) {
            warn!(path = %path.display(), %err, "could not remove partial export file");
        }
        return Err(ExportFault::Write { path, source });
    }

    info!(path = %path.display(), rows = records.len(), "scouting data exported");
    Ok(path)
}

/// `scouting_data_<YYYYMMDD>_<HHMMSS>.csv`
pub fn export_file_name(at: NaiveDateTime) -> String {
    format!("{FILE_PREFIX}_{}.{FILE_EXTENSION}", at.format("%Y%m%d_%H%M%S"))
}

/// Creates the export file without clobbering an earlier export from the
/// same second; collisions get a `_2`, `_3`, ... suffix.
fn create_export_file(dir: &Path, at: NaiveDateTime) -> Result<(PathBuf, File), ExportFault> {
    let stem = format!("{FILE_PREFIX}_{}", at.format("%Y%m%d_%H%M%S"));
    let mut path = dir.join(export_file_name(at));
    let mut attempt = 1u32;

    loop {
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                attempt += 1;
                let next = dir.join(format!("{stem}_{attempt}.{FILE_EXTENSION}"));
                warn!(
                    taken = %path.display(),
                    next = %next.display(),
                    "export file name already in use"
                );
                path = next;
            }
            Err(source) => return Err(ExportFault::Create { path, source }),
        }
    }
}

fn write_records(file: File, records: &[ScoutingRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record(ScoutingRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
