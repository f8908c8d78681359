//! Line-plot rendering of the rescaled waveform.
//!
//! Draws a framed plot with a fixed amplitude axis and an inverted vertical
//! orientation: larger sample values appear lower, following the row
//! direction of the source image. Text (title, axis labels, tick labels)
//! uses the best-matching system sans-serif font; when none can be loaded
//! the plot is still rendered and saved without text.
use font_kit::{family_name::FamilyName, font::Font, properties::Properties, source::SystemSource};
use image::RgbaImage;
use log::warn;
use raqote::{
    DrawOptions, DrawTarget, PathBuilder, Point, SolidSource, Source, StrokeStyle, Transform,
};
use std::path::Path;

use crate::config::{AmplitudeConfig, RenderConfig};
use crate::error::TraceError;
use crate::image::save_rgba_png;

const PLOT_TITLE: &str = "HR Waveform";
const X_AXIS_LABEL: &str = "Time";
const Y_AXIS_LABEL: &str = "Amplitude";

const FRAME_STROKE_WIDTH: f32 = 3.0;
const TRACE_STROKE_WIDTH: f32 = 4.0;
const TICK_LENGTH: f32 = 12.0;
const TICK_COUNT: usize = 5;

const COLOR_BACKGROUND: (u8, u8, u8, u8) = (255, 255, 255, 255); // White
const COLOR_FRAME: (u8, u8, u8, u8) = (255, 40, 40, 40); // Near-black
const COLOR_TRACE: (u8, u8, u8, u8) = (255, 255, 0, 0); // Red

/// Axis-aligned plot area inside the canvas margins.
struct PlotFrame {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl PlotFrame {
    fn from_canvas(canvas: &RenderConfig) -> Self {
        let w = canvas.width_px as f32;
        let h = canvas.height_px as f32;
        let left = 0.09 * w;
        let right = 0.03 * w;
        let top = 0.12 * h;
        let bottom = 0.18 * h;
        Self {
            left,
            top,
            width: (w - left - right).max(1.0),
            height: (h - top - bottom).max(1.0),
        }
    }

    /// Horizontal pixel of sample `i` out of `n`.
    fn x_at(&self, i: usize, n: usize) -> f32 {
        if n < 2 {
            return self.left + 0.5 * self.width;
        }
        self.left + self.width * i as f32 / (n - 1) as f32
    }

    /// Vertical pixel of an amplitude value, inverted axis.
    fn y_at(&self, value: f64, amplitude: &AmplitudeConfig) -> f32 {
        let frac = ((value - amplitude.lo) / (amplitude.hi - amplitude.lo)).clamp(0.0, 1.0);
        self.top + self.height * frac as f32
    }
}

/// Render the waveform plot and save it as a PNG.
pub fn render_plot(
    samples: &[f64],
    amplitude: &AmplitudeConfig,
    canvas: &RenderConfig,
    path: &Path,
) -> Result<(), TraceError> {
    let mut dt = DrawTarget::new(canvas.width_px as i32, canvas.height_px as i32);
    dt.clear(solid(COLOR_BACKGROUND));

    let frame = PlotFrame::from_canvas(canvas);
    draw_frame(&mut dt, &frame);
    draw_ticks(&mut dt, &frame, amplitude, samples.len());
    draw_trace(&mut dt, &frame, samples, amplitude);

    match load_label_font() {
        Some(font) => draw_text_labels(&mut dt, &frame, &font, canvas, amplitude, samples.len()),
        None => warn!("Renderer: no system font available, plot text skipped"),
    }

    let image = target_to_rgba(&dt, canvas, path)?;
    save_rgba_png(&image, path)
}

fn solid(color: (u8, u8, u8, u8)) -> SolidSource {
    SolidSource::from_unpremultiplied_argb(color.0, color.1, color.2, color.3)
}

fn source(color: (u8, u8, u8, u8)) -> Source<'static> {
    Source::Solid(solid(color))
}

fn stroke_style(width: f32) -> StrokeStyle {
    StrokeStyle {
        width,
        ..Default::default()
    }
}

fn draw_frame(dt: &mut DrawTarget, frame: &PlotFrame) {
    let mut pb = PathBuilder::new();
    pb.rect(frame.left, frame.top, frame.width, frame.height);
    let path = pb.finish();
    dt.stroke(
        &path,
        &source(COLOR_FRAME),
        &stroke_style(FRAME_STROKE_WIDTH),
        &DrawOptions::new(),
    );
}

fn draw_ticks(dt: &mut DrawTarget, frame: &PlotFrame, amplitude: &AmplitudeConfig, n: usize) {
    let style = stroke_style(FRAME_STROKE_WIDTH * 0.5);
    let color = source(COLOR_FRAME);

    for i in 0..=TICK_COUNT {
        let frac = i as f32 / TICK_COUNT as f32;

        // Y tick: amplitude axis, inverted (lo at the top edge).
        let y = frame.top + frame.height * frac;
        let mut pb = PathBuilder::new();
        pb.move_to(frame.left - TICK_LENGTH, y);
        pb.line_to(frame.left, y);
        dt.stroke(&pb.finish(), &color, &style, &DrawOptions::new());

        // X tick: sample axis.
        if n > 1 {
            let x = frame.left + frame.width * frac;
            let mut pb = PathBuilder::new();
            pb.move_to(x, frame.top + frame.height);
            pb.line_to(x, frame.top + frame.height + TICK_LENGTH);
            dt.stroke(&pb.finish(), &color, &style, &DrawOptions::new());
        }
    }
}

fn draw_trace(dt: &mut DrawTarget, frame: &PlotFrame, samples: &[f64], amplitude: &AmplitudeConfig) {
    if samples.len() < 2 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(frame.x_at(0, samples.len()), frame.y_at(samples[0], amplitude));
    for (i, &v) in samples.iter().enumerate().skip(1) {
        pb.line_to(frame.x_at(i, samples.len()), frame.y_at(v, amplitude));
    }
    dt.stroke(
        &pb.finish(),
        &source(COLOR_TRACE),
        &stroke_style(TRACE_STROKE_WIDTH),
        &DrawOptions::new(),
    );
}

fn draw_text_labels(
    dt: &mut DrawTarget,
    frame: &PlotFrame,
    font: &Font,
    canvas: &RenderConfig,
    amplitude: &AmplitudeConfig,
    n: usize,
) {
    let h = canvas.height_px as f32;
    let title_px = h / 20.0;
    let label_px = h / 26.0;
    let tick_px = h / 30.0;
    let color = source(COLOR_FRAME);

    // Tick labels.
    for i in 0..=TICK_COUNT {
        let frac = i as f32 / TICK_COUNT as f32;

        let value = amplitude.lo + (amplitude.hi - amplitude.lo) * frac as f64;
        let text = format!("{value:.0}");
        let y = frame.top + frame.height * frac;
        dt.draw_text(
            font,
            tick_px,
            &text,
            Point::new(
                frame.left - TICK_LENGTH - text_width_estimate(&text, tick_px) - 8.0,
                y + tick_px * 0.35,
            ),
            &color,
            &DrawOptions::new(),
        );

        if n > 1 {
            let index = (frac * (n - 1) as f32).round() as usize;
            let text = index.to_string();
            let x = frame.left + frame.width * frac;
            dt.draw_text(
                font,
                tick_px,
                &text,
                Point::new(
                    x - 0.5 * text_width_estimate(&text, tick_px),
                    frame.top + frame.height + TICK_LENGTH + tick_px,
                ),
                &color,
                &DrawOptions::new(),
            );
        }
    }

    // Title, centered above the frame.
    dt.draw_text(
        font,
        title_px,
        PLOT_TITLE,
        Point::new(
            frame.left + 0.5 * (frame.width - text_width_estimate(PLOT_TITLE, title_px)),
            frame.top - 0.4 * title_px,
        ),
        &color,
        &DrawOptions::new(),
    );

    // X axis label, centered below the tick labels.
    dt.draw_text(
        font,
        label_px,
        X_AXIS_LABEL,
        Point::new(
            frame.left + 0.5 * (frame.width - text_width_estimate(X_AXIS_LABEL, label_px)),
            h - 0.5 * label_px,
        ),
        &color,
        &DrawOptions::new(),
    );

    // Y axis label, rotated 90 degrees counter-clockwise along the left
    // margin. The transform maps the text advance direction to "up".
    let start_x = 0.35 * label_px + label_px;
    let start_y = frame.top
        + 0.5 * (frame.height + text_width_estimate(Y_AXIS_LABEL, label_px));
    dt.set_transform(&Transform::new(0.0, -1.0, 1.0, 0.0, start_x, start_y));
    dt.draw_text(
        font,
        label_px,
        Y_AXIS_LABEL,
        Point::new(0.0, 0.0),
        &color,
        &DrawOptions::new(),
    );
    dt.set_transform(&Transform::identity());
}

/// Rough advance-width estimate; good enough for centering labels.
fn text_width_estimate(text: &str, px: f32) -> f32 {
    text.len() as f32 * px * 0.55
}

fn load_label_font() -> Option<Font> {
    SystemSource::new()
        .select_best_match(&[FamilyName::SansSerif], &Properties::new())
        .ok()
        .and_then(|handle| handle.load().ok())
}

fn target_to_rgba(
    dt: &DrawTarget,
    canvas: &RenderConfig,
    path: &Path,
) -> Result<RgbaImage, TraceError> {
    let mut bytes = Vec::with_capacity(canvas.width_px * canvas.height_px * 4);
    for &px in dt.get_data() {
        // Premultiplied ARGB; everything drawn here is opaque.
        bytes.push(((px >> 16) & 0xff) as u8);
        bytes.push(((px >> 8) & 0xff) as u8);
        bytes.push((px & 0xff) as u8);
        bytes.push(((px >> 24) & 0xff) as u8);
    }
    RgbaImage::from_raw(canvas.width_px as u32, canvas.height_px as u32, bytes).ok_or_else(|| {
        TraceError::IoWrite {
            path: path.to_path_buf(),
            reason: "failed to create plot image buffer".to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn plot_is_saved_with_configured_dimensions() {
        let dir = std::env::temp_dir().join(format!("ecg-trace-render-{}", std::process::id()));
        let path = dir.join("plot.png");
        let canvas = RenderConfig {
            width_px: 400,
            height_px: 200,
        };
        let samples: Vec<f64> = (0..100).map(|i| 50.0 + (i as f64) * 0.5).collect();
        render_plot(&samples, &AmplitudeConfig::default(), &canvas, &path).expect("render");

        let saved = image::open(&path).expect("plot decodes").to_rgba8();
        assert_eq!(saved.width(), 400);
        assert_eq!(saved.height(), 200);

        // Background stays white in the margin corner; the trace is red.
        assert_eq!(saved.get_pixel(1, 1).0[..3], [255, 255, 255][..]);
        let has_red = saved
            .pixels()
            .any(|p| p.0[0] > 200 && p.0[1] < 100 && p.0[2] < 100);
        assert!(has_red, "expected the trace polyline in the plot");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn inverted_axis_places_larger_values_lower() {
        let canvas = RenderConfig {
            width_px: 400,
            height_px: 200,
        };
        let frame = PlotFrame::from_canvas(&canvas);
        let amplitude = AmplitudeConfig::default();
        assert!(frame.y_at(100.0, &amplitude) > frame.y_at(50.0, &amplitude));
    }
}
