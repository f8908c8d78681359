//! Fixed-rectangle cropping with explicit bounds checking.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GrayImageU8;
use crate::error::TraceError;

/// Half-open crop rectangle in source-image coordinates.
///
/// Defaults select the waveform strip of the reference monitor layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CropRegion {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Default for CropRegion {
    fn default() -> Self {
        Self {
            row_start: 60,
            row_end: 300,
            col_start: 100,
            col_end: 600,
        }
    }
}

impl CropRegion {
    /// Number of rows selected, zero when the region is inverted.
    pub fn height(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Number of columns selected, zero when the region is inverted.
    pub fn width(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..{}, cols {}..{}",
            self.row_start, self.row_end, self.col_start, self.col_end
        )
    }
}

/// Copy the crop rectangle out of `source`.
///
/// A region that is empty or reaches past the source extent fails with
/// `InvalidRegion` instead of wrapping or producing an empty buffer.
pub fn crop(source: &GrayImageU8, region: &CropRegion) -> Result<GrayImageU8, TraceError> {
    let out_of_bounds = region.row_end > source.height() || region.col_end > source.width();
    if out_of_bounds || region.height() == 0 || region.width() == 0 {
        return Err(TraceError::InvalidRegion {
            region: *region,
            width: source.width(),
            height: source.height(),
        });
    }

    let mut data = Vec::with_capacity(region.width() * region.height());
    for y in region.row_start..region.row_end {
        data.extend_from_slice(&source.row(y)[region.col_start..region.col_end]);
    }
    Ok(GrayImageU8::new(region.width(), region.height(), data))
}
