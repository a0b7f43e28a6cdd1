use super::super::WaymarkApp;
use super::icons;
use crate::export::ExportFormat;
use crate::session::{DrawKind, DrawMode};

impl WaymarkApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use egui's built-in theme toggle so icon matches current mode.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            self.ui_draw_buttons(ui);
            ui.separator();

            let has_waypoints = !self.editor.waypoints().is_empty();
            self.ui_export_menu(ui, has_waypoints);
            ui.separator();

            if ui
                .button(format!("{} Details", icons::ICON_SIDE_TOGGLE))
                .on_hover_text("Show or hide the drawing details panel (Ctrl+B)")
                .clicked()
            {
                self.editor.toggle_modal();
            }
        });
    }

    fn ui_draw_buttons(&mut self, ui: &mut egui::Ui) {
        let mode = self.editor.mode();
        let idle = mode == DrawMode::Idle;

        let line = ui
            .add_enabled(
                idle,
                egui::Button::new(format!("{} Draw LineString", icons::ICON_LINE))
                    .selected(mode == DrawMode::DrawingLineString)
                    .shortcut_text("Ctrl+L"),
            )
            .on_hover_text("Click on the map to add vertices; double-click to finish")
            .on_disabled_hover_text("Finish or cancel the current drawing first");
        if line.clicked() {
            self.start_draw(DrawKind::LineString);
        }

        let polygon = ui
            .add_enabled(
                idle,
                egui::Button::new(format!("{} Draw Polygon", icons::ICON_POLYGON))
                    .selected(mode == DrawMode::DrawingPolygon)
                    .shortcut_text("Ctrl+G"),
            )
            .on_hover_text("Click on the map to add corners; double-click to close the polygon")
            .on_disabled_hover_text("Finish or cancel the current drawing first");
        if polygon.clicked() {
            self.start_draw(DrawKind::Polygon);
        }

        if !idle {
            if ui
                .button(format!("{} Finish", icons::ICON_FINISH))
                .on_hover_text("Complete the current drawing (Enter)")
                .clicked()
            {
                self.finish_draw();
            }
            if ui
                .button(format!("{} Cancel", icons::ICON_CANCEL))
                .on_hover_text("Abandon the current drawing (Esc)")
                .clicked()
            {
                self.cancel_draw();
            }
        }

        if ui
            .button(format!("{} Clear", icons::ICON_CLEAR))
            .on_hover_text("Remove all drawings and waypoints (Ctrl+Shift+D)")
            .clicked()
        {
            self.clear_drawing();
        }
    }

    pub(crate) fn ui_export_menu(&mut self, ui: &mut egui::Ui, has_waypoints: bool) {
        ui.add_enabled_ui(has_waypoints, |ui| {
            ui.menu_button(format!("{} Generated data", icons::ICON_EXPORT), |ui| {
                for (format, shortcut) in [
                    (ExportFormat::Csv, "Ctrl+Shift+C"),
                    (ExportFormat::Json, "Ctrl+Shift+J"),
                    (ExportFormat::Xlsx, "Ctrl+Shift+E"),
                ] {
                    if ui
                        .add(
                            egui::Button::new(format!("Export {}…", format.label()))
                                .shortcut_text(shortcut),
                        )
                        .clicked()
                    {
                        self.start_export(format);
                        ui.close();
                    }
                }
                ui.separator();
                if ui
                    .button(format!("{} Copy waypoints", icons::ICON_COPY))
                    .on_hover_text("Copy the waypoint list as text")
                    .clicked()
                {
                    self.copy_waypoints_to_clipboard();
                    ui.close();
                }
            })
            .response
            .on_disabled_hover_text("Draw something first");
        });
    }
}
