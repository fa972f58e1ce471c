//! User interface components and rendering logic for the circle points tool.
//!
//! # Module Organization
//!
//! - `state` - Form contents, export channel, and the main CircleApp
//! - `export` - Export actions and the one-shot notice window
//! - `rendering` - Drawing the chart and the coordinate table

mod export;
mod rendering;
mod state;

pub use export::ExportKind;
pub use state::{CircleApp, FormError};

use crate::generator::generate_from_spec;
use crate::types::PointSet;

impl eframe::App for CircleApp {
    /// Persist UI preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string("app_state", json);
            }
            Err(err) => {
                log::error!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}

impl CircleApp {
    /// Builds one frame of the whole window.
    ///
    /// The point set is recomputed from the form on every frame; invalid input
    /// withholds the chart, table, and exports.
    pub fn update_ui(&mut self, ctx: &egui::Context) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_export_results();

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Points on a circle");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.checkbox(&mut self.dark_mode, "Dark mode");
                });
            });
        });

        let viewport_width = ctx.input(|i| i.screen_rect().width());
        let max_allowed = (viewport_width * 0.5).max(200.0);
        let clamped_width = self.parameters_panel_width.clamp(200.0, max_allowed);

        let points = self.current_points();

        egui::SidePanel::left("parameters_panel")
            .resizable(true)
            .default_width(clamped_width)
            .show(ctx, |ui| {
                self.parameters_panel_width = ui.available_width().clamp(200.0, max_allowed);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_parameters_panel(ui, points.as_ref().err());
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| match &points {
            Ok(set) => self.draw_results(ui, set),
            Err(e) => {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        format!("Enter valid parameters to generate points.\n{e}"),
                    );
                });
            }
        });

        self.draw_notice(ctx);
    }

    /// Generates the point set for the current form contents.
    pub fn current_points(&self) -> Result<PointSet, FormError> {
        let spec = self.form.parse()?;
        Ok(generate_from_spec(&spec)?)
    }

    fn draw_parameters_panel(&mut self, ui: &mut egui::Ui, error: Option<&FormError>) {
        ui.heading("Parameters");
        egui::Grid::new("parameters_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Center x");
                ui.text_edit_singleline(&mut self.form.center_x);
                ui.end_row();

                ui.label("Center y");
                ui.text_edit_singleline(&mut self.form.center_y);
                ui.end_row();

                ui.label("Radius (r)");
                ui.text_edit_singleline(&mut self.form.radius);
                ui.end_row();

                ui.label("Point count");
                ui.text_edit_singleline(&mut self.form.count);
                ui.end_row();

                ui.label("Angle offset (°)");
                ui.text_edit_singleline(&mut self.form.angle_offset)
                    .on_hover_text("0 puts point 1 to the right of the center");
                ui.end_row();

                ui.label("Point color");
                ui.color_edit_button_srgb(&mut self.form.color);
                ui.end_row();

                ui.label("Axis unit");
                ui.text_edit_singleline(&mut self.form.unit);
                ui.end_row();
            });
        ui.checkbox(&mut self.form.show_labels, "Show point numbers");

        if let Some(e) = error {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }

        ui.separator();
        ui.heading("PDF report");
        ui.checkbox(&mut self.form.include_parameters, "Include parameters in PDF");
        egui::Grid::new("report_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Author");
                ui.text_edit_singleline(&mut self.form.author);
                ui.end_row();

                ui.label("Contact");
                ui.text_edit_singleline(&mut self.form.contact);
                ui.end_row();
            });

        ui.separator();
        egui::CollapsingHeader::new("About")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Generates points evenly spaced on a circle and exports them as CSV, SVG, PNG, or a PDF report.");
                ui.label(format!(
                    "{} {}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                ));
                ui.label("Built with egui, resvg, and pdf-writer.");
            });
    }

    fn draw_results(&mut self, ui: &mut egui::Ui, set: &PointSet) {
        let ctx = ui.ctx().clone();
        let mut requested: Option<ExportKind> = None;

        ui.columns(2, |cols| {
            cols[0].heading("Chart");
            self.draw_chart(&mut cols[0], set);

            cols[1].heading("Coordinates");
            self.draw_table(&mut cols[1], set);
            cols[1].separator();
            cols[1].label("Download results");
            cols[1].horizontal_wrapped(|ui| {
                for kind in [ExportKind::Csv, ExportKind::Svg, ExportKind::Png, ExportKind::Pdf] {
                    if ui.button(format!("Save {}", kind.label())).clicked() {
                        requested = Some(kind);
                    }
                }
            });
        });

        if let Some(kind) = requested {
            self.export(&ctx, kind, set);
        }
    }
}
