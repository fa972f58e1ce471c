//! Export utilities: turn a generated point set into table rows, CSV, SVG, PNG, and PDF bytes.
//!
//! Every function here is synchronous and returns a complete in-memory buffer;
//! offering the bytes to the user is the UI's job.

mod pdf;
mod raster;
mod svg;
mod table;

pub use pdf::build_report_pdf;
pub use raster::{render_png, render_svg_to_pixmap};
pub use svg::{build_svg, SvgOptions};
pub use table::{format_rows, parse_csv, write_csv, CsvRecord, TableRow};

/// Errors that can occur while building export bytes.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing or reading CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An in-memory writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The generated SVG could not be parsed for rasterization.
    #[error("failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    /// A pixmap of the requested size could not be allocated.
    #[error("failed to create pixmap {width}x{height}")]
    Pixmap {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Png(String),
}
