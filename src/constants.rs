//! Shared application-wide constants.
//! Centralizes tweakable values used across generation, charting, and export.

// Form defaults
/// Default circle radius shown in the form.
pub const DEFAULT_RADIUS: f64 = 5.0;
/// Default number of points shown in the form.
pub const DEFAULT_COUNT: usize = 12;
/// Default point color (matplotlib's first palette entry).
pub const DEFAULT_POINT_COLOR: [u8; 3] = [0x1f, 0x77, 0xb4];
/// Default axis unit label.
pub const DEFAULT_UNIT: &str = "m";
/// Largest point count the form accepts; every point is painted and tabled each frame.
pub const MAX_COUNT: usize = 10_000;

// Chart layout
/// Fractional margin added around the ideal circle on each axis.
pub const AXIS_MARGIN: f64 = 0.05;
/// Half-span used for both axes when the radius is zero.
pub const DEGENERATE_HALF_SPAN: f64 = 1.0;
/// Approximate number of ticks per axis.
pub const TARGET_TICKS: usize = 7;
/// Number of samples used to draw the ideal circle outline.
pub const CIRCLE_SAMPLES: usize = 512;

// SVG / raster export
/// Pixel size of the on-screen and standalone SVG/PNG chart (6 in at 100 DPI).
pub const CHART_SIZE_PX: u32 = 600;
/// Pixel size of the chart embedded in the PDF report (8 in at 100 DPI).
pub const REPORT_CHART_SIZE_PX: u32 = 800;
/// Plot-area padding: left, top, right, bottom (pixels).
pub const PLOT_PADDING: (f32, f32, f32, f32) = (80.0, 50.0, 30.0, 60.0);
/// Radius of a point marker in pixels.
pub const MARKER_RADIUS: f32 = 5.0;
/// Offset of an index label from its point marker in pixels.
pub const LABEL_OFFSET: f32 = 4.0;

// PDF report
/// A4 page width in points.
pub const A4_WIDTH_PT: f32 = 595.28;
/// A4 page height in points.
pub const A4_HEIGHT_PT: f32 = 841.89;
/// Resolution at which the report chart is rasterized.
pub const REPORT_DPI: f32 = 200.0;
/// Font size of the summary page text in points.
pub const REPORT_FONT_SIZE: f32 = 12.0;
/// Line advance of the summary page text in points.
pub const REPORT_LEADING: f32 = 14.4;

// Export file names
/// Suggested file name for the CSV export.
pub const CSV_FILE_NAME: &str = "coordinates.csv";
/// Suggested file name for the SVG export.
pub const SVG_FILE_NAME: &str = "circle_points.svg";
/// Suggested file name for the PNG export.
pub const PNG_FILE_NAME: &str = "circle_points.png";
/// Suggested file name for the PDF report.
pub const PDF_FILE_NAME: &str = "circle_points_report.pdf";
