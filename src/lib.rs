//! Single-station match scouting: validate form input, store it in SQLite,
//! export the table to CSV, and hand single records over as QR codes.
//!
//! # Examples
//!
//! ```no_run
//! use scoutlog::{
//!     export::export_all,
//!     persist::{RecordStore, sqlite::SqliteRecordStore},
//!     record::CandidateRecord,
//!     validate::validate,
//! };
//!
//! # fn main() -> scoutlog::Result<()> {
//! let store = SqliteRecordStore::new("scouting.db");
//! store.ensure_schema()?;
//!
//! let form = CandidateRecord {
//!     team_number: "118".to_string(),
//!     match_number: "12".to_string(),
//!     team_station: "Red 1".to_string(),
//!     ..CandidateRecord::default()
//! };
//! let id = store.insert(&validate(&form)?)?;
//! assert_eq!(id, 1);
//!
//! let path = export_all(&store, std::path::Path::new("."))?;
//! println!("exported to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! Encoding an unsaved form for transfer:
//! ```
//! use scoutlog::{encode::encode_for_transfer, record::CandidateRecord};
//!
//! let form = CandidateRecord {
//!     scouter_name: "A. Scout".to_string(),
//!     team_number: "118".to_string(),
//!     ..CandidateRecord::default()
//! };
//! let image = encode_for_transfer(&form).expect("encode");
//! assert!(image.payload().starts_with("A. Scout\t118\t"));
//! ```
#![deny(missing_docs)]

/// Station configuration.
pub mod config;
/// QR encoding of one in-progress record.
pub mod encode;
/// Crate-wide error type.
pub mod error;
/// CSV export of every stored record.
pub mod export;
/// Schema management and record storage.
pub mod persist;
/// Candidate, validated, and stored record types.
pub mod record;
/// Shared primitive types and enums.
pub mod types;
/// Input validation.
pub mod validate;

pub use error::{Error, Result};
