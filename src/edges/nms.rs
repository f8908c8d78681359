//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel, the response is kept only when strictly greater than the
//! neighbor behind it and no smaller than the neighbor ahead of it along
//! the quantized gradient direction, thinning smeared ridges to
//! single-pixel width before hysteresis. The asymmetry breaks the
//! two-pixel plateau a symmetric step edge produces; without it both
//! plateau pixels would suppress each other and the edge would vanish.
//!
//! Border handling: the outermost 1-pixel frame is ignored to avoid
//! out-of-bounds checks in neighbor lookup.
use super::grad::Grad;
use crate::image::ImageF32;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Keep local maxima of the gradient magnitude, zeroing everything else.
///
/// `mag_thresh` gates which pixels are considered at all; responses below
/// it never survive, so pass the detector's low threshold.
pub fn suppress_non_maxima(grad: &Grad, mag_thresh: f32) -> ImageF32 {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < mag_thresh {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // neighbor1 is earlier in scan order; ties collapse onto it.
            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            out.set(x, y, mag);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::super::grad::sobel_gradients;
    use super::*;

    #[test]
    fn blurred_step_thins_to_single_ridge() {
        // Horizontal ramp, steepest between columns 6 and 8.
        let w = 16;
        let h = 8;
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = match x {
                    0..=5 => 0.0,
                    6 => 30.0,
                    7 => 180.0,
                    8 => 250.0,
                    _ => 255.0,
                };
                img.set(x, y, v);
            }
        }
        let grad = sobel_gradients(&img);
        let thinned = suppress_non_maxima(&grad, 10.0);

        // The ramp smears across several columns but only the steepest
        // column survives suppression.
        let row = 4;
        let survivors: Vec<usize> = (1..w - 1).filter(|&x| thinned.get(x, row) > 0.0).collect();
        assert_eq!(survivors, vec![7], "expected a single thinned column");
    }

    #[test]
    fn tiny_images_produce_empty_output() {
        let img = ImageF32::new(2, 2);
        let grad = sobel_gradients(&img);
        let thinned = suppress_non_maxima(&grad, 0.0);
        assert!(thinned.data.iter().all(|&v| v == 0.0));
    }
}
