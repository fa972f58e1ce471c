//! Two-page PDF report: a plain-text parameter summary followed by the chart.

use super::raster::render_svg_to_pixmap;
use super::svg::{build_svg, SvgOptions};
use super::ExportError;
use crate::constants;
use crate::types::{ChartStyle, PointSet, ReportOptions};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the complete report as an in-memory PDF.
///
/// Page 1 is an A4 summary set in Courier; page 2 is the chart rasterized at
/// 200 DPI on a page the chart's physical size.
pub fn build_report_pdf(
    set: &PointSet,
    style: &ChartStyle,
    report: &ReportOptions,
) -> Result<Vec<u8>, ExportError> {
    let svg_options = SvgOptions {
        size_px: constants::REPORT_CHART_SIZE_PX,
        ..SvgOptions::default()
    };
    let (svg, width, height) = build_svg(set, style, &svg_options);
    // Chart pixels are laid out at 100 per inch.
    let pixmap = render_svg_to_pixmap(&svg, width, height, constants::REPORT_DPI / 100.0)?;

    let mut rgb = Vec::with_capacity((pixmap.width() * pixmap.height() * 3) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&rgb, 6);

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let info_id = alloc.bump();
    let summary_page_id = alloc.bump();
    let summary_content_id = alloc.bump();
    let font_id = alloc.bump();
    let chart_page_id = alloc.bump();
    let chart_content_id = alloc.bump();
    let image_id = alloc.bump();

    let font_name = Name(b"F1");
    let image_name = Name(b"Im1");

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids([summary_page_id, chart_page_id])
        .count(2);

    {
        let mut info = pdf.document_info(info_id);
        info.title(TextStr("Points on a circle"));
        info.creator(TextStr(APP_NAME));
        if !report.author.trim().is_empty() {
            info.author(TextStr(report.author.trim()));
        }
        info.finish();
    }

    // Page 1: summary text
    let mut page = pdf.page(summary_page_id);
    page.media_box(Rect::new(0.0, 0.0, constants::A4_WIDTH_PT, constants::A4_HEIGHT_PT));
    page.parent(tree_id);
    page.contents(summary_content_id);
    page.resources().fonts().pair(font_name, font_id);
    page.finish();

    pdf.type1_font(font_id)
        .base_font(Name(b"Courier"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let mut content = Content::new();
    content.begin_text();
    content.set_font(font_name, constants::REPORT_FONT_SIZE);
    content.next_line(
        constants::A4_WIDTH_PT * 0.02,
        constants::A4_HEIGHT_PT * 0.98 - constants::REPORT_FONT_SIZE,
    );
    for (i, line) in summary_lines(set, style, report).iter().enumerate() {
        if i > 0 {
            content.next_line(0.0, -constants::REPORT_LEADING);
        }
        content.show(Str(&to_win_ansi(line)));
    }
    content.end_text();
    pdf.stream(summary_content_id, &content.finish());

    // Page 2: chart image
    let page_w = width as f32 * 72.0 / 100.0;
    let page_h = height as f32 * 72.0 / 100.0;
    let mut page = pdf.page(chart_page_id);
    page.media_box(Rect::new(0.0, 0.0, page_w, page_h));
    page.parent(tree_id);
    page.contents(chart_content_id);
    page.resources().x_objects().pair(image_name, image_id);
    page.finish();

    let mut image = pdf.image_xobject(image_id, &compressed);
    image.filter(Filter::FlateDecode);
    image.width(pixmap.width() as i32);
    image.height(pixmap.height() as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    let mut content = Content::new();
    content.save_state();
    content.transform([page_w, 0.0, 0.0, page_h, 0.0, 0.0]);
    content.x_object(image_name);
    content.restore_state();
    pdf.stream(chart_content_id, &content.finish());

    let bytes = pdf.finish();
    log::info!(
        "built PDF report: {} points, {} bytes",
        set.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Lines of the summary page, before WinAnsi encoding.
pub(crate) fn summary_lines(
    set: &PointSet,
    style: &ChartStyle,
    report: &ReportOptions,
) -> Vec<String> {
    let spec = set.spec();
    let unit = style.unit.trim();
    let mut lines = vec!["Task: points on a circle".to_string(), String::new()];
    if report.include_parameters {
        lines.push(format!(
            "Center (x, y): {:.4}, {:.4} {}",
            spec.center.0, spec.center.1, unit
        ));
        lines.push(format!("Radius: {:.4} {}", spec.radius, unit));
        lines.push(format!("Point count: {}", spec.count));
        lines.push(format!("Point color: {}", style.color.to_hex()));
        lines.push(format!("Angle offset: {} deg", spec.angle_offset_deg));
        lines.push(format!("Unit: {}", unit));
        lines.push(String::new());
    }
    if !report.author.trim().is_empty() {
        lines.push(format!("Created by: {}", report.author.trim()));
    }
    if !report.contact.trim().is_empty() {
        lines.push(format!("Contact: {}", report.contact.trim()));
    }
    lines.push(format!("Generated with {} {}", APP_NAME, APP_VERSION));
    lines
}

/// Encodes `line` as WinAnsi (CP1252) for the unembedded Courier font.
///
/// Characters without a CP1252 code point become `?`.
fn to_win_ansi(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            _ => win_ansi_extra(c).unwrap_or(b'?'),
        })
        .collect()
}

/// The 0x80..=0x9F block, where CP1252 departs from Latin-1.
fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}
