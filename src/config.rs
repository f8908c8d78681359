//! Pipeline configuration loaded from a JSON file.
//!
//! All knobs that were fixed constants in earlier revisions of this tool
//! (crop rectangle, edge thresholds, amplitude range, output paths) live
//! here so tests and other tools can run the pipeline on synthetic inputs.
//! Every field has a default matching the reference monitor layout, so an
//! empty `{}` config is a complete one.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TraceError;
use crate::image::CropRegion;

/// Name of the config file the binary looks for when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ecg-trace.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Path of the scanned monitor image to trace.
    pub input: PathBuf,
    /// Sub-rectangle of the input containing the waveform strip.
    pub crop: CropRegion,
    pub edge: EdgeConfig,
    pub amplitude: AmplitudeConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("images/Heart_Rate.pbm"),
            crop: CropRegion::default(),
            edge: EdgeConfig::default(),
            amplitude: AmplitudeConfig::default(),
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Double thresholds for the edge detector, in 8-bit intensity units.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 100.0,
        }
    }
}

/// Target amplitude range of the rescaled waveform.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AmplitudeConfig {
    pub lo: f64,
    pub hi: f64,
}

impl AmplitudeConfig {
    /// Midpoint of the range, used when the raw trace is flat.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }
}

impl Default for AmplitudeConfig {
    fn default() -> Self {
        Self { lo: 50.0, hi: 100.0 }
    }
}

/// Pixel dimensions of the rendered plot.
///
/// The defaults correspond to a 10x4 inch figure at 300 DPI.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width_px: usize,
    pub height_px: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_px: 3000,
            height_px: 1200,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the rendered plot image.
    pub plot_image: PathBuf,
    /// Path of the delimited numeric file.
    pub waveform_csv: PathBuf,
    /// Optional debug dump of the binary edge mask as a grayscale PNG.
    pub edge_mask_debug: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            plot_image: PathBuf::from("images/ecg_plot.png"),
            waveform_csv: PathBuf::from("waveform_data.csv"),
            edge_mask_debug: None,
        }
    }
}

impl TraceConfig {
    /// Check invariants that would otherwise surface mid-pipeline.
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.crop.row_start >= self.crop.row_end || self.crop.col_start >= self.crop.col_end {
            return Err(TraceError::Config(format!(
                "empty crop region ({})",
                self.crop
            )));
        }
        if self.edge.low_threshold >= self.edge.high_threshold {
            return Err(TraceError::Config(format!(
                "edge thresholds must satisfy low < high, got {} >= {}",
                self.edge.low_threshold, self.edge.high_threshold
            )));
        }
        if self.amplitude.lo >= self.amplitude.hi {
            return Err(TraceError::Config(format!(
                "amplitude range must satisfy lo < hi, got {} >= {}",
                self.amplitude.lo, self.amplitude.hi
            )));
        }
        if self.render.width_px == 0 || self.render.height_px == 0 {
            return Err(TraceError::Config(format!(
                "plot dimensions must be positive, got {}x{}",
                self.render.width_px, self.render.height_px
            )));
        }
        Ok(())
    }
}

/// Load and validate a config from a JSON file.
pub fn load_config(path: &Path) -> Result<TraceConfig, TraceError> {
    let data = fs::read_to_string(path)
        .map_err(|e| TraceError::Config(format!("failed to read {}: {e}", path.display())))?;
    let config: TraceConfig = serde_json::from_str(&data)
        .map_err(|e| TraceError::Config(format!("failed to parse {}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_reference_defaults() {
        let config: TraceConfig = serde_json::from_str("{}").expect("defaults parse");
        assert_eq!(config.crop.row_start, 60);
        assert_eq!(config.crop.row_end, 300);
        assert_eq!(config.crop.col_start, 100);
        assert_eq!(config.crop.col_end, 600);
        assert_eq!(config.edge.low_threshold, 50.0);
        assert_eq!(config.edge.high_threshold, 100.0);
        assert_eq!(config.amplitude.lo, 50.0);
        assert_eq!(config.amplitude.hi, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_rejected() {
        let mut config = TraceConfig::default();
        config.edge.low_threshold = 120.0;
        assert!(matches!(config.validate(), Err(TraceError::Config(_))));
    }

    #[test]
    fn empty_crop_rejected() {
        let mut config = TraceConfig::default();
        config.crop.row_end = config.crop.row_start;
        assert!(matches!(config.validate(), Err(TraceError::Config(_))));
    }

    #[test]
    fn inverted_amplitude_rejected() {
        let mut config = TraceConfig::default();
        config.amplitude.hi = config.amplitude.lo - 1.0;
        assert!(matches!(config.validate(), Err(TraceError::Config(_))));
    }
}
