//! Export actions: build bytes synchronously, then offer them through a native save dialog.
//!
//! The dialog and the file write run on a tokio task; the outcome returns over the
//! export channel and is shown as a one-shot notice.

use super::state::{CircleApp, ExportOutcome, Notice};
use crate::constants;
use crate::export::{self, ExportError, SvgOptions};
use crate::types::PointSet;

/// Which file an export action produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Raw coordinates, `index,x,y`
    Csv,
    /// Vector chart
    Svg,
    /// Raster chart
    Png,
    /// Two-page report
    Pdf,
}

impl ExportKind {
    /// Short display name, e.g. `CSV`.
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Csv => "CSV",
            ExportKind::Svg => "SVG",
            ExportKind::Png => "PNG",
            ExportKind::Pdf => "PDF",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            ExportKind::Csv => constants::CSV_FILE_NAME,
            ExportKind::Svg => constants::SVG_FILE_NAME,
            ExportKind::Png => constants::PNG_FILE_NAME,
            ExportKind::Pdf => constants::PDF_FILE_NAME,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Svg => "svg",
            ExportKind::Png => "png",
            ExportKind::Pdf => "pdf",
        }
    }
}

impl CircleApp {
    /// Builds the bytes for `kind` from the current form settings.
    pub fn build_export(&self, kind: ExportKind, set: &PointSet) -> Result<Vec<u8>, ExportError> {
        let style = self.form.chart_style();
        match kind {
            ExportKind::Csv => export::write_csv(set),
            ExportKind::Svg => {
                let (svg, _w, _h) = export::build_svg(set, &style, &SvgOptions::default());
                Ok(svg.into_bytes())
            }
            ExportKind::Png => {
                let (svg, w, h) = export::build_svg(set, &style, &SvgOptions::default());
                export::render_png(&svg, w, h, 1.0)
            }
            ExportKind::Pdf => {
                export::build_report_pdf(set, &style, &self.form.report_options())
            }
        }
    }

    /// Builds the export and opens a save dialog, or shows a failure notice.
    pub fn export(&mut self, ctx: &egui::Context, kind: ExportKind, set: &PointSet) {
        match self.build_export(kind, set) {
            Ok(bytes) => {
                log::info!("{} export ready ({} bytes)", kind.label(), bytes.len());
                self.offer_download(ctx, kind, bytes);
            }
            Err(e) => {
                log::error!("{} export failed: {}", kind.label(), e);
                self.show_notice(Notice {
                    title: format!("{} export failed", kind.label()),
                    message: e.to_string(),
                    is_error: true,
                });
            }
        }
    }

    fn offer_download(&mut self, ctx: &egui::Context, kind: ExportKind, bytes: Vec<u8>) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                self.show_notice(Notice {
                    title: format!("{} export failed", kind.label()),
                    message: format!("No background runtime for the save dialog: {e}"),
                    is_error: true,
                });
                return;
            }
        };

        let sender = self.export.sender.clone();
        let ctx = ctx.clone();
        runtime.spawn(async move {
            if let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter(kind.label(), &[kind.extension()])
                .set_file_name(kind.file_name())
                .save_file()
                .await
            {
                let path = handle.path();
                let outcome = match std::fs::write(path, &bytes) {
                    Ok(_) => ExportOutcome::Saved(path.display().to_string()),
                    Err(e) => ExportOutcome::Failed(format!("Failed to save {}: {}", kind.label(), e)),
                };
                let _ = sender.send(outcome);
            }
            ctx.request_repaint();
        });
    }

    /// Processes completed save operations from the channel.
    pub fn handle_export_results(&mut self) {
        while let Ok(outcome) = self.export.receiver.try_recv() {
            let notice = match outcome {
                ExportOutcome::Saved(path) => {
                    log::info!("Saved {}", path);
                    Notice {
                        title: "Export saved".into(),
                        message: format!("Saved to {}", path),
                        is_error: false,
                    }
                }
                ExportOutcome::Failed(error) => {
                    log::error!("{}", error);
                    Notice {
                        title: "Export failed".into(),
                        message: error,
                        is_error: true,
                    }
                }
            };
            self.show_notice(notice);
        }
    }

    /// Replaces any visible notice with `notice`.
    pub fn show_notice(&mut self, notice: Notice) {
        self.export.notice = Some(notice);
    }

    /// Draws the current notice, if any, and clears it when dismissed.
    pub fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.export.notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if notice.is_error {
                    ui.colored_label(ui.visuals().error_fg_color, &notice.message);
                } else {
                    ui.label(&notice.message);
                }
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.export.notice = None;
        }
    }
}
