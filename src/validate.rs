//! Field validation run before a candidate record may be stored.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! team number, match number, team station, the three point totals,
//! then match level.

use std::{fmt, num::IntErrorKind};

use thiserror::Error;

use crate::{
    record::{CandidateRecord, ValidatedRecord},
    types::{MatchLevel, Points, TeamStation},
};

/// Form field a validation failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Team number.
    TeamNumber,
    /// Match number.
    MatchNumber,
    /// Match level selector.
    MatchLevel,
    /// Autonomous points.
    AutoPoints,
    /// Teleoperated points.
    TeleopPoints,
    /// Endgame points.
    EndgamePoints,
    /// Team station selector.
    TeamStation,
}

impl Field {
    /// Operator-facing field name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TeamNumber => "team number",
            Self::MatchNumber => "match number",
            Self::MatchLevel => "match level",
            Self::AutoPoints => "auto points",
            Self::TeleopPoints => "teleop points",
            Self::EndgamePoints => "endgame points",
            Self::TeamStation => "team station",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Text is not an integer literal.
    NotAnInteger,
    /// Integer does not fit the column type.
    OutOfRange,
    /// Point total below zero.
    Negative,
    /// Selector still shows its placeholder.
    Unselected,
    /// Selector text is not one of the known options.
    UnknownOption,
}

impl Reason {
    fn describe(self) -> &'static str {
        match self {
            Self::NotAnInteger => "must be an integer",
            Self::OutOfRange => "is too large",
            Self::Negative => "must not be negative",
            Self::Unselected => "must be selected",
            Self::UnknownOption => "is not a known option",
        }
    }
}

/// A candidate record failed one of the input rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {}", .reason.describe())]
pub struct ValidationError {
    /// Offending field.
    pub field: Field,
    /// Failed rule.
    pub reason: Reason,
}

impl ValidationError {
    const fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }
}

/// Checks `candidate` and converts it into a [`ValidatedRecord`].
///
/// Pure and deterministic; nothing is persisted.
pub fn validate(candidate: &CandidateRecord) -> Result<ValidatedRecord, ValidationError> {
    let team_number = parse_identifier(&candidate.team_number, Field::TeamNumber)?;
    let match_number = parse_identifier(&candidate.match_number, Field::MatchNumber)?;
    let team_station = parse_station(&candidate.team_station)?;
    let auto_points = parse_points(&candidate.auto_points, Field::AutoPoints)?;
    let teleop_points = parse_points(&candidate.teleop_points, Field::TeleopPoints)?;
    let endgame_points = parse_points(&candidate.endgame_points, Field::EndgamePoints)?;
    let match_level = parse_level(&candidate.match_level)?;

    Ok(ValidatedRecord {
        team_number,
        match_number,
        match_level,
        auto_points,
        teleop_points,
        endgame_points,
        team_station,
        comments: candidate.comments.trim().to_string(),
        scouter_name: candidate.scouter_name.trim().to_string(),
    })
}

/// Unsigned digits only: no sign, no blank.
fn parse_identifier(raw: &str, field: Field) -> Result<u32, ValidationError> {
    let text = raw.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(field, Reason::NotAnInteger));
    }
    text.parse()
        .map_err(|_| ValidationError::new(field, Reason::OutOfRange))
}

fn parse_points(raw: &str, field: Field) -> Result<Points, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0);
    }
    let value: i64 = text.parse().map_err(|err: std::num::ParseIntError| {
        let reason = match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Reason::OutOfRange,
            _ => Reason::NotAnInteger,
        };
        ValidationError::new(field, reason)
    })?;
    if value < 0 {
        return Err(ValidationError::new(field, Reason::Negative));
    }
    Points::try_from(value).map_err(|_| ValidationError::new(field, Reason::OutOfRange))
}

fn parse_station(raw: &str) -> Result<TeamStation, ValidationError> {
    let text = raw.trim();
    if text.is_empty() || text == TeamStation::UNSET_LABEL {
        return Err(ValidationError::new(Field::TeamStation, Reason::Unselected));
    }
    text.parse()
        .map_err(|_| ValidationError::new(Field::TeamStation, Reason::UnknownOption))
}

fn parse_level(raw: &str) -> Result<Option<MatchLevel>, ValidationError> {
    let text = raw.trim();
    if text.is_empty() || text == MatchLevel::UNSET_LABEL {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| ValidationError::new(Field::MatchLevel, Reason::UnknownOption))
}
