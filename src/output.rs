//! Delimited numeric persistence of the rescaled waveform.
//!
//! One integer-truncated sample per line. The "," delimiter convention is
//! kept for compatibility with downstream consumers of the original file
//! format, even though a single-column file never shows it between fields.
use std::fs;
use std::path::Path;

use crate::error::TraceError;
use crate::image::io::ensure_parent_dir;

pub const DELIMITER: char = ',';

/// Write the samples, truncated to integers, one per line.
///
/// The file contents are deterministic for identical samples, so repeated
/// runs over the same input produce byte-identical output.
pub fn write_waveform(samples: &[f64], path: &Path) -> Result<(), TraceError> {
    ensure_parent_dir(path)?;
    let mut contents = String::with_capacity(samples.len() * 4);
    for &v in samples {
        contents.push_str(&(v as i64).to_string());
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| TraceError::IoWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read a waveform file written by [`write_waveform`].
///
/// Tolerates multi-column lines by splitting on the delimiter, so the
/// reader keeps working if the format ever grows a second column.
pub fn read_waveform(path: &Path) -> Result<Vec<i64>, TraceError> {
    let data = fs::read_to_string(path).map_err(|e| TraceError::IoWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut values = Vec::new();
    for line in data.lines() {
        for field in line.split(DELIMITER) {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let v = field.parse::<i64>().map_err(|e| TraceError::IoWrite {
                path: path.to_path_buf(),
                reason: format!("invalid value {field:?}: {e}"),
            })?;
            values.push(v);
        }
    }
    Ok(values)
}
