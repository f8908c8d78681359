//! Error kinds for the trace pipeline.
//!
//! Every stage returns a typed error instead of a bare string so callers can
//! distinguish a missing input from a decode problem or a bad crop rectangle.
use std::path::PathBuf;

use thiserror::Error;

use crate::image::CropRegion;

#[derive(Debug, Error)]
pub enum TraceError {
    /// The input image path does not resolve to a file.
    #[error("input image not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be parsed as a raster image.
    #[error("failed to decode {}: {reason}", .path.display())]
    DecodeFailure { path: PathBuf, reason: String },

    /// The crop rectangle does not fit inside the source image.
    #[error("invalid crop region ({region}) for {width}x{height} image")]
    InvalidRegion {
        region: CropRegion,
        width: usize,
        height: usize,
    },

    /// Every raw sample has the same value, so the amplitude map is undefined.
    #[error("degenerate waveform: all {count} samples equal {value}")]
    DegenerateRange { value: u32, count: usize },

    /// Writing an output artifact failed.
    #[error("failed to write {}: {reason}", .path.display())]
    IoWrite { path: PathBuf, reason: String },

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}
