//! Lays out a [`ChartSpec`] and renders it as a standalone SVG document.

use std::fmt::Write;

use super::{ChartSpec, SeriesKind};

const PAD_LEFT: f64 = 72.0;
const PAD_RIGHT: f64 = 20.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 64.0;
const TARGET_TICKS: f64 = 5.0;
const BAND_FILL: f64 = 0.8;
const AXIS_TEXT: &str = "#666666";
const LEGEND_TEXT: &str = "#333333";

/// Nominal size of chart text in SVG pixels.
pub const LABEL_FONT_SIZE: f64 = 11.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Chart text in SVG pixels; `y` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub fill: &'static str,
}

/// A laid-out chart: vector shapes plus the text drawn over them. Kept apart
/// so a PDF page can set the text with its own fonts.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDrawing {
    pub width: u32,
    pub height: u32,
    shapes: String,
    pub labels: Vec<ChartLabel>,
}

impl ChartDrawing {
    /// The complete chart, text included.
    pub fn to_svg(&self) -> String {
        let mut out = self.open();
        out.push_str(&self.shapes);
        for label in &self.labels {
            let _ = write!(
                out,
                r#"<text x="{x:.1}" y="{y:.1}" text-anchor="{anchor}" fill="{fill}">{text}</text>"#,
                x = label.x,
                y = label.y,
                anchor = label.anchor.as_svg(),
                fill = label.fill,
                text = escape_xml(&label.text),
            );
        }
        out.push_str("</svg>");
        out
    }

    /// The chart without any `<text>` nodes.
    pub fn shapes_svg(&self) -> String {
        let mut out = self.open();
        out.push_str(&self.shapes);
        out.push_str("</svg>");
        out
    }

    fn open(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif" font-size="{size}">"#,
            w = self.width,
            h = self.height,
            size = LABEL_FONT_SIZE,
        )
    }
}

pub fn draw_chart(spec: &ChartSpec) -> ChartDrawing {
    let width = spec.width as f64;
    let height = spec.height as f64;
    let plot = PlotArea {
        left: PAD_LEFT,
        top: PAD_TOP,
        width: (width - PAD_LEFT - PAD_RIGHT).max(1.0),
        height: (height - PAD_TOP - PAD_BOTTOM).max(1.0),
    };
    let axis = YAxis::fit(spec);
    let bands = spec.labels.len().max(1) as f64;
    let band_width = plot.width / bands;

    let mut out = String::new();
    let mut labels = Vec::new();
    let _ = write!(
        out,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
        spec.width, spec.height
    );

    // Grid and y ticks.
    for tick in axis.ticks() {
        let y = plot.y(axis.ratio(tick));
        let _ = write!(
            out,
            r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#e0e0e0" stroke-width="1"/>"##,
            x1 = plot.left,
            x2 = plot.left + plot.width,
        );
        labels.push(ChartLabel {
            text: format_tick(tick),
            x: plot.left - 6.0,
            y: y + 4.0,
            anchor: TextAnchor::End,
            fill: AXIS_TEXT,
        });
    }

    // X labels, thinned so they never overlap.
    let step = ((spec.labels.len() as f64 * 56.0) / plot.width).ceil().max(1.0) as usize;
    for (idx, label) in spec.labels.iter().enumerate().step_by(step) {
        labels.push(ChartLabel {
            text: label.clone(),
            x: plot.left + band_width * (idx as f64 + 0.5),
            y: plot.top + plot.height + 16.0,
            anchor: TextAnchor::Middle,
            fill: AXIS_TEXT,
        });
    }

    let zero_y = plot.y(axis.ratio(0.0));
    let bar_series: Vec<_> = spec
        .series
        .iter()
        .filter(|s| s.kind == SeriesKind::Bar)
        .collect();
    let bar_width = band_width * BAND_FILL / bar_series.len().max(1) as f64;

    for (slot, series) in bar_series.iter().enumerate() {
        let fill = series.fill.unwrap_or(series.stroke);
        for (idx, value) in series.values.iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            let x = plot.left
                + band_width * idx as f64
                + band_width * (1.0 - BAND_FILL) / 2.0
                + bar_width * slot as f64;
            let y = plot.y(axis.ratio(*value));
            let _ = write!(
                out,
                r#"<rect x="{x:.1}" y="{top:.1}" width="{bw:.1}" height="{bh:.1}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#,
                top = y.min(zero_y),
                bw = bar_width,
                bh = (y - zero_y).abs(),
                stroke = series.stroke,
            );
        }
    }

    for series in spec.series.iter().filter(|s| s.kind == SeriesKind::Line) {
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_finite())
            .map(|(idx, value)| {
                (
                    plot.left + band_width * (idx as f64 + 0.5),
                    plot.y(axis.ratio(*value)),
                )
            })
            .collect();
        if points.is_empty() {
            continue;
        }
        let path = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");

        if let (Some(fill), Some(first), Some(last)) = (series.fill, points.first(), points.last())
        {
            let _ = write!(
                out,
                r#"<polygon points="{x0:.1},{zero_y:.1} {path} {x1:.1},{zero_y:.1}" fill="{fill}" stroke="none"/>"#,
                x0 = first.0,
                x1 = last.0,
            );
        }
        let _ = write!(
            out,
            r#"<polyline points="{path}" fill="none" stroke="{stroke}" stroke-width="2"/>"#,
            stroke = series.stroke,
        );
        for (x, y) in &points {
            let _ = write!(
                out,
                r##"<circle cx="{x:.1}" cy="{y:.1}" r="2.5" fill="#ffffff" stroke="{stroke}" stroke-width="1.5"/>"##,
                stroke = series.stroke,
            );
        }
    }

    // Axes drawn last so bars do not cover them.
    let _ = write!(
        out,
        r##"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="#999999" stroke-width="1"/>"##,
        x = plot.left,
        top = plot.top,
        bottom = plot.top + plot.height,
    );
    let _ = write!(
        out,
        r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#999999" stroke-width="1"/>"##,
        x1 = plot.left,
        x2 = plot.left + plot.width,
        y = zero_y,
    );

    write_legend(&mut out, &mut labels, spec, height - 18.0);

    ChartDrawing {
        width: spec.width,
        height: spec.height,
        shapes: out,
        labels,
    }
}

fn write_legend(out: &mut String, labels: &mut Vec<ChartLabel>, spec: &ChartSpec, baseline: f64) {
    let entry_width = |name: &str| 28.0 + name.chars().count() as f64 * 6.2;
    let total: f64 = spec.series.iter().map(|s| entry_width(s.name)).sum();
    let mut x = ((spec.width as f64 - total) / 2.0).max(4.0);

    for series in &spec.series {
        let swatch = match series.kind {
            SeriesKind::Bar => series.fill.unwrap_or(series.stroke),
            SeriesKind::Line => series.stroke,
        };
        let _ = write!(
            out,
            r#"<rect x="{x:.1}" y="{y:.1}" width="14" height="10" fill="{swatch}"/>"#,
            y = baseline - 9.0,
        );
        labels.push(ChartLabel {
            text: series.name.to_string(),
            x: x + 18.0,
            y: baseline,
            anchor: TextAnchor::Start,
            fill: LEGEND_TEXT,
        });
        x += entry_width(series.name);
    }
}

struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    /// Maps a 0..=1 ratio (0 = axis minimum) to an SVG y coordinate.
    fn y(&self, ratio: f64) -> f64 {
        self.top + self.height * (1.0 - ratio)
    }
}

/// Value axis. Always includes zero, so cumulative losses push it below the
/// baseline instead of clipping.
#[derive(Debug, PartialEq)]
struct YAxis {
    min: f64,
    max: f64,
    step: f64,
}

impl YAxis {
    fn fit(spec: &ChartSpec) -> Self {
        let (lo, hi) = spec
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let span = if hi - lo > 0.0 { hi - lo } else { 1.0 };
        let step = nice_step(span / TARGET_TICKS);
        let min = (lo / step).floor() * step;
        let mut max = (hi / step).ceil() * step;
        if max <= min {
            max = min + step;
        }
        Self { min, max, step }
    }

    fn ratio(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value, "")
    };
    let text = format!("{scaled:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    let text = if text == "-0" { "0" } else { text };
    format!("{text}{suffix}")
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartSeries, ChartSpec};

    fn spec(values: Vec<f64>) -> ChartSpec {
        ChartSpec {
            title: "test",
            labels: (1..=values.len()).map(|m| format!("Month {m}")).collect(),
            series: vec![
                ChartSeries {
                    name: "Revenue",
                    kind: SeriesKind::Bar,
                    values: values.clone(),
                    stroke: "red",
                    fill: Some("pink"),
                },
                ChartSeries {
                    name: "Profit & Loss",
                    kind: SeriesKind::Line,
                    values,
                    stroke: "blue",
                    fill: Some("lightblue"),
                },
            ],
            width: 600,
            height: 300,
        }
    }

    #[test]
    fn renders_one_bar_per_month_and_one_polyline() {
        let svg = draw_chart(&spec(vec![10.0, 20.0, 30.0])).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(r#"fill="pink""#).count(), 3 + 1); // bars + legend swatch
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains(">Month 2<"));
        assert!(svg.contains("Profit &amp; Loss"));
    }

    #[test]
    fn axis_spans_negative_values() {
        let axis = YAxis::fit(&spec(vec![-50.0, 120.0]));
        assert!(axis.min <= -50.0);
        assert!(axis.max >= 120.0);
        assert!(axis.ticks().contains(&0.0));
    }

    #[test]
    fn flat_zero_data_still_has_a_range() {
        let axis = YAxis::fit(&spec(vec![0.0, 0.0]));
        assert!(axis.max > axis.min);
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let svg = draw_chart(&spec(vec![f64::NAN, 5.0])).to_svg();
        assert!(!svg.contains("NaN"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn text_is_kept_out_of_the_shapes() {
        let drawing = draw_chart(&spec(vec![10.0, 20.0, 30.0]));
        let shapes = drawing.shapes_svg();
        assert!(!shapes.contains("<text"));
        assert!(shapes.contains("<polyline"));

        let texts: Vec<&str> = drawing.labels.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"Month 1"));
        assert!(texts.contains(&"Revenue"));
        assert!(texts.contains(&"Profit & Loss"));
        assert_eq!(
            drawing.to_svg().matches("<text").count(),
            drawing.labels.len()
        );
    }

    #[test]
    fn ticks_are_compact() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(2500.0), "2.5k");
        assert_eq!(format_tick(-1_000_000.0), "-1M");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(nice_step(230.0), 500.0);
        assert_eq!(nice_step(0.9), 1.0);
    }
}
