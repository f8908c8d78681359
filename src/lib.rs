#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;

// Stage modules - still public so tools and tests can drive them directly.
pub mod edges;
pub mod output;
pub mod render;
pub mod rescale;
pub mod trace;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracer + results.
pub use crate::config::{load_config, TraceConfig};
pub use crate::error::TraceError;
pub use crate::pipeline::{TraceReport, WaveformTracer};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ecg_trace::prelude::*;
///
/// # fn main() -> Result<(), TraceError> {
/// let tracer = WaveformTracer::new(TraceConfig::default());
/// let report = tracer.run()?;
/// println!("samples={} degenerate={}", report.samples.len(), report.degenerate);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::config::TraceConfig;
    pub use crate::error::TraceError;
    pub use crate::pipeline::{TraceReport, WaveformTracer};
}
