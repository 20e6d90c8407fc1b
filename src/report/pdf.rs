use std::{
    fs, io,
    path::{Path, PathBuf},
};

use printpdf::{
    svg::{Svg, SvgTransform},
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference,
};
use thiserror::Error;

use super::ReportDocument;
use crate::chart::{ChartLabel, TextAnchor, LABEL_FONT_SIZE};

pub const REPORT_FILENAME: &str = "abm_campaign_forecast.pdf";

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const CHART_BOX: (f32, f32) = (190.0, 60.0);
const MARGIN: f32 = 10.0;
const CSS_DPI: f32 = 96.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no chart is drawn yet")]
    NoChart,
    #[error("failed to build PDF: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("failed to embed chart: {0}")]
    Chart(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Renders the report as an A4 document. Offsets are measured from the top of
/// the page; printpdf's origin is bottom-left.
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(report.title, PAGE_WIDTH, PAGE_HEIGHT, "Summary");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let summary = doc.get_page(page1).get_layer(layer1);
    let mut cursor = 10.0;
    text(&summary, &bold, 18.0, MARGIN, cursor, report.title);
    cursor += 10.0;
    text(&summary, &regular, 12.0, MARGIN, cursor, &report.date_line);

    for section in &report.sections {
        cursor += 10.0;
        text(&summary, &bold, 14.0, MARGIN, cursor, section.heading);
        cursor += 5.0;
        for line in &section.lines {
            cursor += 10.0;
            text(&summary, &regular, 12.0, MARGIN + 5.0, cursor, line);
        }
        cursor += 5.0;
    }

    let (page2, layer2) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Chart");
    let chart_layer = doc.get_page(page2).get_layer(layer2);
    let drawing = &report.chart.drawing;

    // Fit the chart into the box, keeping its aspect ratio.
    let (box_w, box_h) = CHART_BOX;
    let native_w = px_to_mm(drawing.width);
    let native_h = px_to_mm(drawing.height);
    let scale = (box_w / native_w).min(box_h / native_h);

    // printpdf's SVG import drops <text>, so labels are drawn as PDF text on top.
    let shapes = Svg::parse(&drawing.shapes_svg())
        .map_err(|err| ExportError::Chart(format!("{err:?}")))?;
    shapes.add_to_layer(
        &chart_layer,
        SvgTransform {
            translate_x: Some(Mm(MARGIN).into()),
            translate_y: Some(Mm(PAGE_HEIGHT.0 - MARGIN - native_h * scale).into()),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(CSS_DPI),
            ..Default::default()
        },
    );
    for label in &drawing.labels {
        let placed = place_label(label, scale);
        chart_layer.use_text(&label.text, placed.size, Mm(placed.x), Mm(placed.y), &regular);
    }

    Ok(doc.save_to_bytes()?)
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, size: f32, x: f32, top: f32, value: &str) {
    layer.use_text(value, size, Mm(x), Mm(PAGE_HEIGHT.0 - top), font);
}

/// SVG user units are CSS pixels.
fn px_to_mm(px: u32) -> f32 {
    px as f32 * 25.4 / CSS_DPI
}

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.55;

/// Where a chart label lands on the page, in millimetres from the bottom-left,
/// with its font size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlacedLabel {
    x: f32,
    y: f32,
    size: f32,
}

/// Maps a label from chart pixels onto the chart box. PDF text always starts
/// at its x position, so middle and end anchors are shifted by an estimated
/// text width.
fn place_label(label: &ChartLabel, scale: f32) -> PlacedLabel {
    let mm_per_px = 25.4 / CSS_DPI * scale;
    let font_px = LABEL_FONT_SIZE as f32;
    let width = label.text.chars().count() as f32 * font_px * GLYPH_WIDTH * mm_per_px;
    let shift = match label.anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => width / 2.0,
        TextAnchor::End => width,
    };
    PlacedLabel {
        x: MARGIN + label.x as f32 * mm_per_px - shift,
        y: PAGE_HEIGHT.0 - MARGIN - label.y as f32 * mm_per_px,
        // 1 CSS px is 0.75 pt.
        size: font_px * scale * 0.75,
    }
}

/// Export directory: the configured override, then the user's downloads
/// folder, then the working directory.
pub fn resolve_export_dir(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes the report under its fixed filename and returns the full path.
pub fn export_abm_report(report: &ReportDocument, dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = render_pdf(report)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILENAME);
    fs::write(&path, bytes)?;
    tracing::info!(
        path = %path.display(),
        chart = %report.chart.chart_id,
        "exported ABM report"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn renders_a_pdf_document() {
        let bytes = render_pdf(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn chart_labels_are_written_as_pdf_text() {
        let report = sample_report();
        let page_one = 2 + report
            .sections
            .iter()
            .map(|section| 1 + section.lines.len())
            .sum::<usize>();
        assert!(!report.chart.drawing.labels.is_empty());

        let bytes = render_pdf(&report).unwrap();
        let shown = bytes.windows(2).filter(|w| w == b"Tj").count();
        assert_eq!(shown, page_one + report.chart.drawing.labels.len());
    }

    #[test]
    fn labels_follow_their_anchor() {
        let label = |anchor| ChartLabel {
            text: "Month 1".to_string(),
            x: 450.0,
            y: 300.0,
            anchor,
            fill: "#666666",
        };
        let scale = 0.5;
        let start = place_label(&label(TextAnchor::Start), scale);
        let middle = place_label(&label(TextAnchor::Middle), scale);
        let end = place_label(&label(TextAnchor::End), scale);

        // 450 px at 96 dpi is 119.0625 mm, halved by the scale.
        assert!((start.x - (MARGIN + 59.53125)).abs() < 1e-3);
        assert!(middle.x < start.x && end.x < middle.x);
        assert!(((start.x - middle.x) - (middle.x - end.x)).abs() < 1e-3);
        assert!((start.y - (PAGE_HEIGHT.0 - MARGIN - 39.6875)).abs() < 1e-3);
        assert!((start.size - 4.125).abs() < 1e-4);
    }

    #[test]
    fn configured_directory_wins() {
        let dir = Path::new("/tmp/forecasts");
        assert_eq!(resolve_export_dir(Some(dir)), dir.to_path_buf());
    }

    #[test]
    fn export_uses_fixed_filename() {
        let dir = std::env::temp_dir().join(format!("campaign-forecaster-{}", std::process::id()));
        let path = export_abm_report(&sample_report(), &dir).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(REPORT_FILENAME));
        assert!(fs::metadata(&path).unwrap().len() > 0);
        let _ = fs::remove_dir_all(&dir);
    }
}
