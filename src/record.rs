//! Scouting record types: raw form input, validated record, stored row.

use serde::{Deserialize, Serialize};

use crate::types::{MatchLevel, MatchNumber, Points, RecordId, TeamNumber, TeamStation};

/// Raw field values exactly as the operator typed or selected them.
///
/// Nothing here has been checked; see [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Scouter's name.
    pub scouter_name: String,
    /// Team number text.
    pub team_number: String,
    /// Match number text.
    pub match_number: String,
    /// Match level label, or [`MatchLevel::UNSET_LABEL`].
    pub match_level: String,
    /// Autonomous-period points text.
    pub auto_points: String,
    /// Teleoperated-period points text.
    pub teleop_points: String,
    /// Endgame points text.
    pub endgame_points: String,
    /// Team station label, or [`TeamStation::UNSET_LABEL`].
    pub team_station: String,
    /// Free-text comments.
    pub comments: String,
}

impl Default for CandidateRecord {
    /// The cleared form: empty text, both selectors back on their placeholders.
    fn default() -> Self {
        Self {
            scouter_name: String::new(),
            team_number: String::new(),
            match_number: String::new(),
            match_level: MatchLevel::UNSET_LABEL.to_string(),
            auto_points: String::new(),
            teleop_points: String::new(),
            endgame_points: String::new(),
            team_station: TeamStation::UNSET_LABEL.to_string(),
            comments: String::new(),
        }
    }
}

/// A record that passed validation and is safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    /// Observed team.
    pub team_number: TeamNumber,
    /// Match the observation belongs to.
    pub match_number: MatchNumber,
    /// Match level, when one was selected.
    pub match_level: Option<MatchLevel>,
    /// Autonomous-period points.
    pub auto_points: Points,
    /// Teleoperated-period points.
    pub teleop_points: Points,
    /// Endgame points.
    pub endgame_points: Points,
    /// Driver station.
    pub team_station: TeamStation,
    /// Trimmed comments.
    pub comments: String,
    /// Trimmed scouter name.
    pub scouter_name: String,
}

/// Persisted row, in export column order.
///
/// Serde names match the export header so a CSV reader can rebuild it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutingRecord {
    /// Stable store-assigned id.
    #[serde(rename = "ID")]
    pub id: RecordId,
    /// Observed team.
    #[serde(rename = "Team Number")]
    pub team_number: TeamNumber,
    /// Match number.
    #[serde(rename = "Match Number")]
    pub match_number: MatchNumber,
    /// Match level, when one was selected.
    #[serde(rename = "Match Level")]
    pub match_level: Option<MatchLevel>,
    /// Autonomous-period points.
    #[serde(rename = "Auto Points")]
    pub auto_points: Points,
    /// Teleoperated-period points.
    #[serde(rename = "Teleop Points")]
    pub teleop_points: Points,
    /// Endgame points.
    #[serde(rename = "Endgame Points")]
    pub endgame_points: Points,
    /// Driver station.
    #[serde(rename = "Team Station")]
    pub team_station: TeamStation,
    /// Comments.
    #[serde(rename = "Comments")]
    pub comments: String,
    /// Scouter name.
    #[serde(rename = "Scouter Name")]
    pub scouter_name: String,
    /// Capture time, `YYYY-MM-DD HH:MM:SS` local.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl ScoutingRecord {
    /// Column names in storage and export order.
    pub const COLUMNS: [&'static str; 11] = [
        "ID",
        "Team Number",
        "Match Number",
        "Match Level",
        "Auto Points",
        "Teleop Points",
        "Endgame Points",
        "Team Station",
        "Comments",
        "Scouter Name",
        "Timestamp",
    ];

    /// Returns the user-entered part of this row.
    pub fn fields(&self) -> ValidatedRecord {
        ValidatedRecord {
            team_number: self.team_number,
            match_number: self.match_number,
            match_level: self.match_level,
            auto_points: self.auto_points,
            teleop_points: self.teleop_points,
            endgame_points: self.endgame_points,
            team_station: self.team_station,
            comments: self.comments.clone(),
            scouter_name: self.scouter_name.clone(),
        }
    }
}
