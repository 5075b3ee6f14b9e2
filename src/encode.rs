//! QR transfer of a single in-progress record.
//!
//! The encoder reads the raw form fields and does not validate them, so a
//! half-filled form can still be handed to another device.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode, render::unicode::Dense1x2, types::QrError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::record::CandidateRecord;

/// Encoding a record for transfer failed.
#[derive(Debug, Error)]
pub enum EncodeFault {
    /// Payload does not fit in a QR code at the chosen correction level.
    #[error("record does not fit in a QR code: {0}")]
    Capacity(#[from] QrError),
    /// The rendered image could not be written.
    #[error("failed to write QR image {}: {source}", .path.display())]
    Image {
        /// Target file.
        path: PathBuf,
        /// Underlying image error.
        source: image::ImageError,
    },
}

/// QR error-correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// Recovers ~7% damage.
    L,
    /// Recovers ~15% damage.
    #[default]
    M,
    /// Recovers ~25% damage.
    Q,
    /// Recovers ~30% damage.
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(value: ErrorCorrection) -> Self {
        match value {
            ErrorCorrection::L => Self::L,
            ErrorCorrection::M => Self::M,
            ErrorCorrection::Q => Self::Q,
            ErrorCorrection::H => Self::H,
        }
    }
}

/// A payload together with its QR matrix.
pub struct EncodedImage {
    payload: String,
    code: QrCode,
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("payload", &self.payload)
            .field("width", &self.code.width())
            .finish()
    }
}

impl EncodedImage {
    /// Text token carried by the code.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Modules per side, without quiet zone.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    /// Renders the code with unicode half blocks, light-on-dark for terminals.
    pub fn to_terminal_string(&self) -> String {
        self.code
            .render::<Dense1x2>()
            .dark_color(Dense1x2::Light)
            .light_color(Dense1x2::Dark)
            .build()
    }

    /// Writes a grayscale PNG with `module_px` pixels per module.
    pub fn save_png(&self, path: &Path, module_px: u32) -> Result<(), EncodeFault> {
        self.code
            .render::<Luma<u8>>()
            .module_dimensions(module_px, module_px)
            .build()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| EncodeFault::Image {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Tab-separated token: scouter, team, match, level, auto, teleop, endgame,
/// station, comments, then a newline. Fields are copied verbatim.
pub fn transfer_payload(candidate: &CandidateRecord) -> String {
    let fields = [
        candidate.scouter_name.as_str(),
        candidate.team_number.as_str(),
        candidate.match_number.as_str(),
        candidate.match_level.as_str(),
        candidate.auto_points.as_str(),
        candidate.teleop_points.as_str(),
        candidate.endgame_points.as_str(),
        candidate.team_station.as_str(),
        candidate.comments.trim(),
    ];
    let mut payload = fields.join("\t");
    payload.push('\n');
    payload
}

/// Encodes `candidate` at the default correction level.
pub fn encode_for_transfer(candidate: &CandidateRecord) -> Result<EncodedImage, EncodeFault> {
    encode_with_level(candidate, ErrorCorrection::default())
}

/// Encodes `candidate` at correction level `level`.
pub fn encode_with_level(
    candidate: &CandidateRecord,
    level: ErrorCorrection,
) -> Result<EncodedImage, EncodeFault> {
    let payload = transfer_payload(candidate);
    let code = QrCode::with_error_correction_level(payload.as_bytes(), level.into())?;
    info!(
        bytes = payload.len(),
        modules = code.width(),
        "record encoded for transfer"
    );
    Ok(EncodedImage { payload, code })
}
