//! Error types for flyer rendering.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, FlyerError>;

/// Failures that abort a render. Everything content-related (missing
/// assets, overflowing text, bad colors) is recovered inside the
/// engine and never shows up here.
#[derive(Error, Debug)]
pub enum FlyerError {
    /// Writing to the output buffer failed.
    #[error("failed to write document: {0}")]
    Io(#[from] io::Error),

    /// The QR encoder cannot represent the payload.
    #[error("cannot encode {len}-byte payload as a QR code: {reason}")]
    CodeCapacity { len: usize, reason: String },

    /// An image decoder or rasterizer ran out of its memory budget.
    #[error("resource limit exceeded while decoding {path}: {reason}")]
    ResourceLimit { path: PathBuf, reason: String },
}

/// Recoverable asset problems. Callers log these and skip the
/// element that needed the asset.
#[derive(Error, Debug)]
pub(crate) enum AssetError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot parse SVG {path}: {reason}")]
    Svg { path: PathBuf, reason: String },

    #[error("cannot decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Escalated to [`FlyerError::ResourceLimit`].
    #[error("decoder limit hit for {path}: {reason}")]
    Limits { path: PathBuf, reason: String },
}
