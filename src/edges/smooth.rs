//! Separable Gaussian smoothing ahead of gradient computation.
use crate::image::ImageF32;

/// 5-tap separable Gaussian (kernel [1,4,6,4,1]/16, sigma ~ 1).
///
/// Borders are handled by replication via index clamping. Two 1D passes,
/// O(W*H) each.
pub fn gaussian5_separable(inp: &ImageF32) -> ImageF32 {
    let w = inp.w;
    let h = inp.h;
    let mut tmp = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // horizontal
    for y in 0..h {
        for x in 0..w {
            let xm1 = x.saturating_sub(1);
            let xm2 = x.saturating_sub(2);
            let xp1 = (x + 1).min(w - 1);
            let xp2 = (x + 2).min(w - 1);
            let v = (inp.get(xm2, y)
                + 4.0 * inp.get(xm1, y)
                + 6.0 * inp.get(x, y)
                + 4.0 * inp.get(xp1, y)
                + inp.get(xp2, y))
                * (1.0 / 16.0);
            tmp.set(x, y, v);
        }
    }
    // vertical
    for y in 0..h {
        let ym1 = y.saturating_sub(1);
        let ym2 = y.saturating_sub(2);
        let yp1 = (y + 1).min(h - 1);
        let yp2 = (y + 2).min(h - 1);
        for x in 0..w {
            let v = (tmp.get(x, ym2)
                + 4.0 * tmp.get(x, ym1)
                + 6.0 * tmp.get(x, y)
                + 4.0 * tmp.get(x, yp1)
                + tmp.get(x, yp2))
                * (1.0 / 16.0);
            out.set(x, y, v);
        }
    }
    out
}
