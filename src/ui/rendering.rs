//! Chart and table rendering for the central panel.
//!
//! The chart is painted directly with egui from the same [`ChartLayout`] used by the
//! SVG export, so the window and the exported files agree on bounds and ticks.

use super::state::CircleApp;
use crate::chart::{circle_outline, ChartLayout};
use crate::constants;
use crate::export::format_rows;
use crate::types::PointSet;
use egui::epaint::StrokeKind;

impl CircleApp {
    /// Paints the scatter chart into a square area filling the available width.
    pub fn draw_chart(&self, ui: &mut egui::Ui, set: &PointSet) {
        let style = self.form.chart_style();
        let layout = ChartLayout::new(set, &style.unit);

        let side = ui.available_width().min(ui.available_height()).max(200.0);
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let rect = response.rect;

        let text_color = ui.visuals().text_color();
        let faint = ui.visuals().weak_text_color();

        let (pad_l, pad_t, pad_r, pad_b) = constants::PLOT_PADDING;
        let plot = (rect.width() - pad_l - pad_r)
            .min(rect.height() - pad_t - pad_b)
            .max(10.0);
        let plot_rect = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + pad_l, rect.min.y + pad_t),
            egui::vec2(plot, plot),
        );
        let to_screen = |x: f64, y: f64| {
            let (u, v) = layout.to_unit(x, y);
            egui::pos2(
                plot_rect.min.x + u as f32 * plot,
                plot_rect.min.y + (1.0 - v as f32) * plot,
            )
        };

        // Grid, dotted at tick positions
        let small = egui::FontId::proportional(11.0);
        for &t in &layout.x_ticks {
            let x = to_screen(t, 0.0).x;
            let top = egui::pos2(x, plot_rect.min.y);
            let bottom = egui::pos2(x, plot_rect.max.y);
            painter.extend(egui::Shape::dotted_line(&[top, bottom], faint, 4.0, 0.6));
            painter.text(
                egui::pos2(x, plot_rect.max.y + 4.0),
                egui::Align2::CENTER_TOP,
                layout.tick_label(t),
                small.clone(),
                text_color,
            );
        }
        for &t in &layout.y_ticks {
            let y = to_screen(0.0, t).y;
            let left = egui::pos2(plot_rect.min.x, y);
            let right = egui::pos2(plot_rect.max.x, y);
            painter.extend(egui::Shape::dotted_line(&[left, right], faint, 4.0, 0.6));
            painter.text(
                egui::pos2(plot_rect.min.x - 4.0, y),
                egui::Align2::RIGHT_CENTER,
                layout.tick_label(t),
                small.clone(),
                text_color,
            );
        }
        painter.rect_stroke(
            plot_rect,
            0.0,
            egui::Stroke::new(1.0, text_color),
            StrokeKind::Inside,
        );

        // Title and axis labels
        painter.text(
            egui::pos2(plot_rect.center().x, rect.min.y + 8.0),
            egui::Align2::CENTER_TOP,
            &layout.title,
            egui::FontId::proportional(14.0),
            text_color,
        );
        painter.text(
            egui::pos2(plot_rect.center().x, rect.max.y - 6.0),
            egui::Align2::CENTER_BOTTOM,
            &layout.x_label,
            egui::FontId::proportional(13.0),
            text_color,
        );
        painter.text(
            egui::pos2(rect.min.x + 4.0, plot_rect.min.y - 6.0),
            egui::Align2::LEFT_BOTTOM,
            &layout.y_label,
            egui::FontId::proportional(13.0),
            text_color,
        );

        // Ideal circle, dashed
        let outline: Vec<egui::Pos2> = circle_outline(set.spec())
            .into_iter()
            .map(|(x, y)| to_screen(x, y))
            .collect();
        let circle_color = egui::Color32::from_rgba_unmultiplied(31, 119, 180, 153);
        painter.extend(egui::Shape::dashed_line(
            &outline,
            egui::Stroke::new(1.5, circle_color),
            6.0,
            4.0,
        ));

        // Markers and index labels
        let [r, g, b] = style.color.0;
        let fill = egui::Color32::from_rgb(r, g, b);
        let edge = egui::Stroke::new(1.0, egui::Color32::BLACK);
        for p in set.points() {
            let pos = to_screen(p.x, p.y);
            painter.circle(pos, constants::MARKER_RADIUS, fill, edge);
            if style.show_labels {
                painter.text(
                    pos + egui::vec2(constants::LABEL_OFFSET, -constants::LABEL_OFFSET),
                    egui::Align2::LEFT_BOTTOM,
                    p.index.to_string(),
                    egui::FontId::proportional(9.0),
                    text_color,
                );
            }
        }
    }

    /// Shows the coordinate table, x and y formatted to 4 decimals with unit.
    pub fn draw_table(&self, ui: &mut egui::Ui, set: &PointSet) {
        let rows = format_rows(set, &self.form.unit);
        egui::ScrollArea::vertical()
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                egui::Grid::new("coordinates_table")
                    .striped(true)
                    .num_columns(3)
                    .show(ui, |ui| {
                        ui.strong("index");
                        ui.strong("x");
                        ui.strong("y");
                        ui.end_row();
                        for row in rows {
                            ui.label(row.index.to_string());
                            ui.monospace(row.x);
                            ui.monospace(row.y);
                            ui.end_row();
                        }
                    });
            });
    }
}
