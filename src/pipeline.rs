//! Pipeline driving the waveform extraction end-to-end.
//!
//! The [`WaveformTracer`] exposes a simple API: point it at a config and get
//! the rescaled samples plus a timing report. Internally it chains load,
//! crop, edge detection, column reduction, amplitude rescaling, plot
//! rendering and numeric persistence, in that fixed order, synchronously.
//! Compute stages run before anything is written, so a failed run leaves no
//! partial output files.
//!
//! Typical usage:
//! ```no_run
//! use ecg_trace::{TraceConfig, WaveformTracer};
//!
//! # fn example() -> Result<(), ecg_trace::TraceError> {
//! let tracer = WaveformTracer::new(TraceConfig::default());
//! let report = tracer.run()?;
//! println!("{} samples in {:.3} ms", report.samples.len(), report.timing.total_ms);
//! # Ok(())
//! # }
//! ```
use log::debug;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::TraceConfig;
use crate::edges::detect_edges;
use crate::error::TraceError;
use crate::image::{crop, load_grayscale_image, save_grayscale_u8};
use crate::output::write_waveform;
use crate::render::render_plot;
use crate::rescale::rescale_or_midpoint;
use crate::trace::extract_trace;

/// Waveform tracer orchestrating the extraction stages.
pub struct WaveformTracer {
    config: TraceConfig,
}

/// Outcome of one pipeline run.
#[derive(Clone, Debug, Serialize)]
pub struct TraceReport {
    /// Rescaled samples, one per cropped column.
    pub samples: Vec<f64>,
    /// True when the raw trace was flat and the midpoint fallback fired.
    pub degenerate: bool,
    pub plot_path: PathBuf,
    pub waveform_path: PathBuf,
    pub timing: TimingBreakdown,
}

/// Wall-clock milliseconds spent in each stage.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub load_ms: f64,
    pub crop_ms: f64,
    pub edges_ms: f64,
    pub reduce_ms: f64,
    pub rescale_ms: f64,
    pub render_ms: f64,
    pub write_ms: f64,
    pub total_ms: f64,
}

impl WaveformTracer {
    /// Create a tracer with the supplied configuration.
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Run the extraction once, writing the plot and the numeric file.
    pub fn run(&self) -> Result<TraceReport, TraceError> {
        self.config.validate()?;
        let config = &self.config;
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        debug!("Tracer: loading {}", config.input.display());
        let load_start = Instant::now();
        let image = load_grayscale_image(&config.input)?;
        timing.load_ms = load_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Tracer: loaded {}x{} grayscale image",
            image.width(),
            image.height()
        );

        let crop_start = Instant::now();
        let cropped = crop(&image, &config.crop)?;
        timing.crop_ms = crop_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Tracer: cropped ({}) to {}x{}",
            config.crop,
            cropped.width(),
            cropped.height()
        );

        let edges_start = Instant::now();
        let mask = detect_edges(&cropped, &config.edge);
        timing.edges_ms = edges_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Tracer: edge detection kept {} of {} pixels",
            mask.edge_count(),
            mask.width() * mask.height()
        );

        let reduce_start = Instant::now();
        let raw = extract_trace(&mask);
        timing.reduce_ms = reduce_start.elapsed().as_secs_f64() * 1000.0;

        let rescale_start = Instant::now();
        let (samples, degenerate) =
            rescale_or_midpoint(&raw, config.amplitude.lo, config.amplitude.hi);
        timing.rescale_ms = rescale_start.elapsed().as_secs_f64() * 1000.0;

        if let Some(debug_path) = &config.output.edge_mask_debug {
            save_grayscale_u8(&mask.to_gray(), debug_path)?;
            debug!("Tracer: edge mask dumped to {}", debug_path.display());
        }

        let render_start = Instant::now();
        render_plot(
            &samples,
            &config.amplitude,
            &config.render,
            &config.output.plot_image,
        )?;
        timing.render_ms = render_start.elapsed().as_secs_f64() * 1000.0;

        let write_start = Instant::now();
        write_waveform(&samples, &config.output.waveform_csv)?;
        timing.write_ms = write_start.elapsed().as_secs_f64() * 1000.0;

        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Tracer: done, {} samples in {:.3} ms",
            samples.len(),
            timing.total_ms
        );

        Ok(TraceReport {
            samples,
            degenerate,
            plot_path: config.output.plot_image.clone(),
            waveform_path: config.output.waveform_csv.clone(),
            timing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_fails_before_touching_inputs() {
        let mut config = TraceConfig::default();
        config.input = PathBuf::from("does/not/exist.pgm");
        config.edge.low_threshold = 500.0; // > high, rejected by validation
        let err = WaveformTracer::new(config).run().unwrap_err();
        assert!(matches!(err, TraceError::Config(_)));
    }

    #[test]
    fn missing_input_reports_not_found() {
        let mut config = TraceConfig::default();
        config.input = PathBuf::from("does/not/exist.pgm");
        let err = WaveformTracer::new(config).run().unwrap_err();
        assert!(matches!(err, TraceError::NotFound { .. }));
    }
}
