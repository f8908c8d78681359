use std::path::Path;

/// Background and trace intensities of the synthetic scans.
pub const BACKGROUND: u8 = 230;
pub const TRACE: u8 = 20;

/// Generates a light scan with a dark sinusoidal trace across its full width.
///
/// The trace stays between rows 90 and 214, inside the default crop region.
pub fn waveform_scan(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![BACKGROUND; width * height];
    for x in 0..width {
        let phase = x as f64 * std::f64::consts::TAU / 200.0;
        let center = (150.0 + 60.0 * phase.sin()).round() as usize;
        for dy in 0..4 {
            let y = (center + dy).min(height - 1);
            img[y * width + x] = TRACE;
        }
    }
    img
}

/// Generates a featureless scan of a single intensity.
pub fn uniform_scan(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Writes a raw grayscale buffer to `path` as a PNG.
pub fn save_scan(path: &Path, width: usize, height: usize, data: Vec<u8>) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("fixture dir");
    }
    image::GrayImage::from_raw(width as u32, height as u32, data)
        .expect("buffer matches dimensions")
        .save(path)
        .expect("fixture image saved");
}
