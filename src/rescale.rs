//! Linear amplitude rescaling of the raw trace.
//!
//! Maps the observed `[min, max]` of the raw row indices onto the fixed
//! target range. The strict variant refuses flat input; the pipeline uses
//! the midpoint fallback so a blank strip still produces a well-defined
//! output instead of a division by zero.
use log::warn;

use crate::error::TraceError;

/// Linearly map `raw` from its observed `[min, max]` onto `[lo, hi]`.
///
/// The observed minimum maps exactly to `lo` and the maximum to `hi`;
/// ordering is preserved. Flat input (all samples equal) fails with
/// `DegenerateRange`.
pub fn rescale(raw: &[u32], lo: f64, hi: f64) -> Result<Vec<f64>, TraceError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let (min, max) = span(raw);
    if min == max {
        return Err(TraceError::DegenerateRange {
            value: min,
            count: raw.len(),
        });
    }
    Ok(raw
        .iter()
        .map(|&v| linear_map(v, min, max, lo, hi))
        .collect())
}

/// Pipeline policy: rescale, substituting the range midpoint on flat input.
///
/// Returns the samples and whether the degenerate fallback fired.
pub fn rescale_or_midpoint(raw: &[u32], lo: f64, hi: f64) -> (Vec<f64>, bool) {
    if raw.is_empty() {
        return (Vec::new(), false);
    }
    let (min, max) = span(raw);
    if min == max {
        warn!(
            "Rescaler: flat trace (all {} samples = {}), mapping to midpoint",
            raw.len(),
            min
        );
        let midpoint = 0.5 * (lo + hi);
        return (vec![midpoint; raw.len()], true);
    }
    let samples = raw
        .iter()
        .map(|&v| linear_map(v, min, max, lo, hi))
        .collect();
    (samples, false)
}

/// Map `v` from `[min, max]` onto `[lo, hi]`, exact at both endpoints.
#[inline]
fn linear_map(v: u32, min: u32, max: u32, lo: f64, hi: f64) -> f64 {
    if v == max {
        return hi;
    }
    lo + (v - min) as f64 / (max - min) as f64 * (hi - lo)
}

fn span(raw: &[u32]) -> (u32, u32) {
    let mut min = u32::MAX;
    let mut max = 0u32;
    for &v in raw {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_range_bounds() {
        let samples = rescale(&[10, 20, 30], 50.0, 100.0).expect("non-degenerate");
        assert_eq!(samples[0], 50.0);
        assert_eq!(samples[2], 100.0);
        assert_eq!(samples[1], 75.0);
    }

    #[test]
    fn ordering_is_preserved() {
        let raw = vec![5, 1, 9, 3, 7];
        let samples = rescale(&raw, 50.0, 100.0).unwrap();
        for i in 0..raw.len() {
            for j in 0..raw.len() {
                assert_eq!(raw[i] < raw[j], samples[i] < samples[j]);
            }
        }
    }

    #[test]
    fn flat_input_is_degenerate() {
        let err = rescale(&[4, 4, 4], 50.0, 100.0).unwrap_err();
        assert!(matches!(
            err,
            TraceError::DegenerateRange { value: 4, count: 3 }
        ));
    }

    #[test]
    fn midpoint_policy_handles_flat_input() {
        let (samples, degenerate) = rescale_or_midpoint(&[0, 0, 0, 0], 50.0, 100.0);
        assert!(degenerate);
        assert_eq!(samples, vec![75.0; 4]);
    }

    #[test]
    fn midpoint_policy_passes_through_normal_input() {
        let (samples, degenerate) = rescale_or_midpoint(&[10, 20, 30], 50.0, 100.0);
        assert!(!degenerate);
        assert_eq!(samples, vec![50.0, 75.0, 100.0]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rescale(&[], 50.0, 100.0).unwrap().is_empty());
        let (samples, degenerate) = rescale_or_midpoint(&[], 50.0, 100.0);
        assert!(samples.is_empty());
        assert!(!degenerate);
    }
}
