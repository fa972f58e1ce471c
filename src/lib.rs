//! # Circle Points
//!
//! Computes points evenly spaced on a circle and presents them as a chart, a
//! coordinate table, and downloadable files.
//!
//! ## Features
//! - Pure, deterministic point generation from a center, radius, count, and angular offset
//! - Interactive form with immediate validation
//! - Scatter chart with the ideal circle, unit-suffixed ticks, and optional point numbers
//! - CSV, SVG, and PNG exports
//! - Two-page PDF report (parameter summary plus chart)

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod types;
mod generator;
mod ui;

pub mod chart;
pub mod export;

// Re-export public types and functions
pub use types::*;
pub use generator::*;
use ui::CircleApp;

/// Runs the circle points application with default settings.
///
/// This function initializes the egui application window and starts the main event loop.
/// Save dialogs are spawned on the ambient tokio runtime, so call it from inside one.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use circle_points::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
///     let _guard = runtime.enter();
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    log::info!("starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        "Points on a circle",
        options,
        Box::new(|cc| Ok(Box::new(CircleApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_default() {
        let spec = CircleSpec::default();
        assert_eq!(spec.center, (0.0, 0.0));
        assert_eq!(spec.radius, 5.0);
        assert_eq!(spec.count, 12);
        assert_eq!(spec.angle_offset_deg, 0.0);
    }

    #[test]
    fn test_generate_reexport() {
        let set = generate((0.0, 0.0), 1.0, 3, 0.0).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }
}
