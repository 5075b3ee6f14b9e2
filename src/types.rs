//! Shared primitive IDs and the enumerated form selectors.

use std::{fmt, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned record identifier (the SQLite rowid).
pub type RecordId = i64;
/// FRC team number.
pub type TeamNumber = u32;
/// Match number within an event.
pub type MatchNumber = u32;
/// Point total for one match phase.
pub type Points = u32;

/// Text did not name any known option of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option {0:?}")]
pub struct UnknownLabel(pub String);

/// Stage of the event a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLevel {
    /// Qualification match.
    Quals,
    /// Semi-final match.
    #[serde(rename = "Semi-finals")]
    SemiFinals,
    /// Final match.
    Finals,
}

impl MatchLevel {
    /// Placeholder shown by an untouched match-level selector.
    pub const UNSET_LABEL: &'static str = "Select Match Level";

    /// Every level in selector order.
    pub const ALL: [Self; 3] = [Self::Quals, Self::SemiFinals, Self::Finals];

    /// Operator-facing label, also the stored column value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quals => "Quals",
            Self::SemiFinals => "Semi-finals",
            Self::Finals => "Finals",
        }
    }
}

/// Driver station the observed robot plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamStation {
    /// Red alliance, station 1.
    #[serde(rename = "Red 1")]
    Red1,
    /// Red alliance, station 2.
    #[serde(rename = "Red 2")]
    Red2,
    /// Red alliance, station 3.
    #[serde(rename = "Red 3")]
    Red3,
    /// Blue alliance, station 1.
    #[serde(rename = "Blue 1")]
    Blue1,
    /// Blue alliance, station 2.
    #[serde(rename = "Blue 2")]
    Blue2,
    /// Blue alliance, station 3.
    #[serde(rename = "Blue 3")]
    Blue3,
}

impl TeamStation {
    /// Placeholder shown when no station has been picked.
    pub const UNSET_LABEL: &'static str = "Select Team Station";

    /// Every station, red alliance first.
    pub const ALL: [Self; 6] = [
        Self::Red1,
        Self::Red2,
        Self::Red3,
        Self::Blue1,
        Self::Blue2,
        Self::Blue3,
    ];

    /// Operator-facing label, also the stored column value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red1 => "Red 1",
            Self::Red2 => "Red 2",
            Self::Red3 => "Red 3",
            Self::Blue1 => "Blue 1",
            Self::Blue2 => "Blue 2",
            Self::Blue3 => "Blue 3",
        }
    }
}

macro_rules! label_enum_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| UnknownLabel(s.to_string()))
            }
        }

        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.label()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|err: UnknownLabel| FromSqlError::Other(Box::new(err)))
            }
        }
    };
}

label_enum_impls!(MatchLevel);
label_enum_impls!(TeamStation);
