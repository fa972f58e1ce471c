//! Rasterization of the chart SVG through resvg.

use super::ExportError;
use std::sync::{Arc, OnceLock};
use tiny_skia::Pixmap;

/// System fonts are loaded once and shared by every render.
fn font_database() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            log::debug!("loaded {} font faces", db.len());
            Arc::new(db)
        })
        .clone()
}

/// Renders `svg` (of logical size `width`×`height`) into a pixmap scaled by `scale`.
///
/// The scale is clamped to `[0.25, 8.0]`. The pixmap is filled white first so the
/// result is opaque.
pub fn render_svg_to_pixmap(
    svg: &str,
    width: u32,
    height: u32,
    scale: f32,
) -> Result<Pixmap, ExportError> {
    let mut opt = usvg::Options::default();
    opt.fontdb = font_database();

    let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)?;

    let scale = scale.clamp(0.25, 8.0);
    let out_w = ((width as f32) * scale).round().max(1.0) as u32;
    let out_h = ((height as f32) * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(out_w, out_h).ok_or(ExportError::Pixmap {
        width: out_w,
        height: out_h,
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Renders `svg` to PNG bytes.
pub fn render_png(svg: &str, width: u32, height: u32, scale: f32) -> Result<Vec<u8>, ExportError> {
    let pixmap = render_svg_to_pixmap(svg, width, height, scale)?;
    pixmap
        .encode_png()
        .map_err(|e| ExportError::Png(e.to_string()))
}
